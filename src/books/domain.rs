use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn genre(&self) -> &str;
    fn stock(&self) -> i64;

    fn in_stock(&self) -> bool {
        self.stock() > 0
    }
}
