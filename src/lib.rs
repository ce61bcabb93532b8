pub mod books;
pub mod catalog;
pub mod circulation;
pub mod desk;
pub mod gateway;
pub mod requests;

pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod utils {
    pub mod date;
    pub mod logging;
}
