use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::ActionKind;
use crate::requests::domain::model::RequestEntity;
use crate::utils::date::serializer;

// ActionEntity records a completed stock change. previous_stock is the stock right
// before the change, undo puts it back as is.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ActionEntity {
    pub action_id: String,
    pub request_id: String,
    pub user_id: String,
    pub book_isbn: String,
    pub kind: ActionKind,
    pub previous_stock: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl ActionEntity {
    pub fn new(user_id: &str, book_isbn: &str, kind: ActionKind, previous_stock: i64) -> Self {
        Self {
            action_id: Uuid::new_v4().to_string(),
            request_id: String::new(),
            user_id: user_id.to_string(),
            book_isbn: book_isbn.to_string(),
            kind,
            previous_stock,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn from_request(request: &RequestEntity, previous_stock: i64) -> Self {
        Self {
            request_id: request.request_id.to_string(),
            ..Self::new(request.user_id.as_str(), request.book_isbn.as_str(), ActionKind::from(request.kind), previous_stock)
        }
    }
}

impl Identifiable for ActionEntity {
    fn id(&self) -> String {
        self.action_id.to_string()
    }
}
