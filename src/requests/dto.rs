use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::RequestKind;
use crate::requests::domain::model::RequestEntity;
use crate::utils::date::serializer;

// RequestDto is a data transfer object for pending borrow/return requests
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct RequestDto {
    pub request_id: String,
    pub user_id: String,
    pub book_isbn: String,
    pub kind: RequestKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Identifiable for RequestDto {
    fn id(&self) -> String {
        self.request_id.to_string()
    }
}

impl From<&RequestEntity> for RequestDto {
    fn from(other: &RequestEntity) -> RequestDto {
        RequestDto {
            request_id: other.request_id.to_string(),
            user_id: other.user_id.to_string(),
            book_isbn: other.book_isbn.to_string(),
            kind: other.kind,
            created_at: other.created_at,
        }
    }
}
