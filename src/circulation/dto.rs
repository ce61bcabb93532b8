use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::circulation::domain::model::ActionEntity;
use crate::core::domain::Identifiable;
use crate::core::library::ActionKind;
use crate::requests::dto::RequestDto;
use crate::utils::date::serializer;

// ActionDto is a data transfer object for a recorded stock change
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ActionDto {
    pub action_id: String,
    pub request_id: String,
    pub user_id: String,
    pub book_isbn: String,
    pub kind: ActionKind,
    pub previous_stock: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl Identifiable for ActionDto {
    fn id(&self) -> String {
        self.action_id.to_string()
    }
}

impl From<&ActionEntity> for ActionDto {
    fn from(other: &ActionEntity) -> ActionDto {
        ActionDto {
            action_id: other.action_id.to_string(),
            request_id: other.request_id.to_string(),
            user_id: other.user_id.to_string(),
            book_isbn: other.book_isbn.to_string(),
            kind: other.kind,
            previous_stock: other.previous_stock,
            created_at: other.created_at,
        }
    }
}

// QueuedRequestDto is the answer to a new borrow/return request
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct QueuedRequestDto {
    pub request: RequestDto,
    pub book: BookDto,
    // pending requests including this one
    pub position: usize,
}

// ProcessOutcome is the result of handling the oldest pending request; book is the state after processing
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub(crate) enum ProcessOutcome {
    Borrowed {
        request: RequestDto,
        book: BookDto,
    },
    Returned {
        request: RequestDto,
        book: BookDto,
    },
    // no copy on the shelf, the request is dropped
    Rejected {
        request: RequestDto,
        book: BookDto,
    },
    // the book left the catalog while the request was waiting
    Skipped {
        request: RequestDto,
    },
}

// UndoOutcome is the result of reverting the most recent action
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub(crate) enum UndoOutcome {
    Reverted {
        action: ActionDto,
        book: BookDto,
    },
    Skipped {
        action: ActionDto,
    },
}
