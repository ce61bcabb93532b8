use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::RequestKind;
use crate::utils::date::serializer;

// RequestEntity is a pending borrow or return, it references the book by isbn only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct RequestEntity {
    pub request_id: String,
    pub user_id: String,
    pub book_isbn: String,
    pub kind: RequestKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl RequestEntity {
    pub fn new(user_id: &str, book_isbn: &str, kind: RequestKind) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            book_isbn: book_isbn.to_string(),
            kind,
            created_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for RequestEntity {
    fn id(&self) -> String {
        self.request_id.to_string()
    }
}
