use std::fmt::Write;
use crate::books::dto::BookDto;
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::load_catalog_cmd::{LoadCatalogCommand, LoadCatalogCommandRequest};
use crate::catalog::command::recommend_books_cmd::{RecommendBooksCommand, RecommendBooksCommandRequest};
use crate::catalog::command::save_catalog_cmd::{SaveCatalogCommand, SaveCatalogCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::circulation::command::borrow_request_cmd::{BorrowRequestCommand, BorrowRequestCommandRequest};
use crate::circulation::command::pending_requests_cmd::{PendingRequestsCommand, PendingRequestsCommandRequest};
use crate::circulation::command::process_request_cmd::{ProcessRequestCommand, ProcessRequestCommandRequest};
use crate::circulation::command::return_request_cmd::{ReturnRequestCommand, ReturnRequestCommandRequest};
use crate::circulation::command::undo_action_cmd::{UndoActionCommand, UndoActionCommandRequest};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::{ProcessOutcome, UndoOutcome};
use crate::circulation::factory::create_circulation_service;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::ActionKind;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// DeskError is the status line shown to the operator when a command fails
pub(crate) type DeskError = String;

impl From<CommandError> for DeskError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                "Book not found.".to_string()
            }
            CommandError::Empty { message } => {
                format!("Nothing to do: {}.", message)
            }
            CommandError::Io { message, .. } => {
                format!("File error: {}", message)
            }
            CommandError::Validation { message, .. } => {
                format!("Invalid input: {}", message)
            }
            CommandError::DuplicateKey { message }
            | CommandError::Runtime { message, .. }
            | CommandError::Serialization { message } => {
                format!("Error: {}", message)
            }
        }
    }
}

async fn build_catalog(state: &AppState) -> Box<dyn CatalogService> {
    create_catalog_service(&state.config, &state.store).await
}

async fn build_circulation(state: &AppState) -> Box<dyn CirculationService> {
    create_circulation_service(&state.config, &state.store).await
}

fn describe(book: &BookDto) -> String {
    format!("\"{}\" by {} (ISBN {}, genre {}, stock {})", book.title, book.author, book.isbn, book.genre, book.stock)
}

pub(crate) async fn list_books(state: &AppState) -> Result<String, DeskError> {
    let res = ListBooksCommand::new(build_catalog(state).await).execute(ListBooksCommandRequest::default()).await?;
    if res.is_empty() {
        return Ok("Library is empty.".to_string());
    }
    let mut out = String::new();
    for shelf in &res.shelves {
        let _ = writeln!(out, "--- Genre: {} ---", shelf.genre);
        for book in &shelf.books {
            let _ = writeln!(out, "  Title  : {}", book.title);
            let _ = writeln!(out, "  Author : {}", book.author);
            let _ = writeln!(out, "  ISBN   : {}", book.isbn);
            let _ = writeln!(out, "  Stock  : {}", book.stock);
            let _ = writeln!(out, "  ------------------------------");
        }
    }
    Ok(out.trim_end().to_string())
}

pub(crate) async fn find_by_isbn(state: &AppState, isbn: &str) -> Result<String, DeskError> {
    let res = GetBookCommand::new(build_catalog(state).await).execute(GetBookCommandRequest::by_isbn(isbn.trim())).await?;
    Ok(format!("Found: {}", describe(&res.book)))
}

pub(crate) async fn find_by_title(state: &AppState, title: &str) -> Result<String, DeskError> {
    let res = GetBookCommand::new(build_catalog(state).await).execute(GetBookCommandRequest::by_title(title.trim())).await?;
    Ok(format!("Found: {}", describe(&res.book)))
}

pub(crate) async fn request_borrow(state: &AppState, user_id: &str, isbn: &str) -> Result<String, DeskError> {
    let req = BorrowRequestCommandRequest::new(user_id, isbn);
    let res = BorrowRequestCommand::new(build_circulation(state).await).execute(req).await?;
    let mut out = String::new();
    if !res.in_stock {
        let _ = writeln!(out, "Info: no copy on the shelf, request queued anyway.");
    }
    let _ = write!(out, "Borrow request for \"{}\" added ({} pending).", res.queued.book.title, res.queued.position);
    Ok(out)
}

pub(crate) async fn request_return(state: &AppState, user_id: &str, isbn: &str) -> Result<String, DeskError> {
    let req = ReturnRequestCommandRequest::new(user_id, isbn);
    let res = ReturnRequestCommand::new(build_circulation(state).await).execute(req).await?;
    Ok(format!("Return request for \"{}\" added ({} pending).", res.queued.book.title, res.queued.position))
}

pub(crate) async fn process_next(state: &AppState) -> Result<String, DeskError> {
    let res = ProcessRequestCommand::new(build_circulation(state).await)
        .execute(ProcessRequestCommandRequest::default()).await?;
    let out = match res.outcome {
        ProcessOutcome::Borrowed { request, book } => {
            format!("Processed {} for \"{}\": borrowed. Remaining stock: {}", request.user_id, book.title, book.stock)
        }
        ProcessOutcome::Returned { request, book } => {
            format!("Processed {} for \"{}\": returned. Stock now: {}", request.user_id, book.title, book.stock)
        }
        ProcessOutcome::Rejected { request, book } => {
            format!("Processed {} for \"{}\": out of stock, request dropped.", request.user_id, book.title)
        }
        ProcessOutcome::Skipped { request } => {
            format!("Processed {}: book {} is no longer in the catalog, request dropped.", request.user_id, request.book_isbn)
        }
    };
    Ok(out)
}

pub(crate) async fn undo_last(state: &AppState) -> Result<String, DeskError> {
    let res = UndoActionCommand::new(build_circulation(state).await)
        .execute(UndoActionCommandRequest::default()).await?;
    let out = match res.outcome {
        UndoOutcome::Reverted { action, book } => {
            let what = match action.kind {
                ActionKind::Borrowed => "Borrow",
                ActionKind::Returned => "Return",
            };
            format!("{} of \"{}\" by {} undone. Stock: {}", what, book.title, action.user_id, book.stock)
        }
        UndoOutcome::Skipped { action } => {
            format!("Book {} is no longer in the catalog, action dropped.", action.book_isbn)
        }
    };
    Ok(out)
}

pub(crate) async fn recommend(state: &AppState, isbn: &str) -> Result<String, DeskError> {
    let res = RecommendBooksCommand::new(build_catalog(state).await)
        .execute(RecommendBooksCommandRequest::new(isbn.trim())).await?;
    let mut out = format!("=== Recommendations in genre \"{}\" ===", res.source.genre);
    if res.books.is_empty() {
        let _ = write!(out, "\nNo recommendations right now.");
    }
    for book in &res.books {
        let _ = write!(out, "\n  - {} by {}", book.title, book.author);
    }
    Ok(out)
}

pub(crate) async fn pending_requests(state: &AppState) -> Result<String, DeskError> {
    let res = PendingRequestsCommand::new(build_circulation(state).await)
        .execute(PendingRequestsCommandRequest::default()).await?;
    let mut out = if res.requests.is_empty() {
        "No pending requests.".to_string()
    } else {
        format!("{} pending:", res.requests.len())
    };
    for (i, request) in res.requests.iter().enumerate() {
        let _ = write!(out, "\n  {}. {} {} {}", i + 1, request.kind, request.user_id, request.book_isbn);
    }
    if let Some(action) = &res.last_action {
        let _ = write!(out, "\nUndo would revert: {} {} {} (stock back to {})",
                       action.kind, action.user_id, action.book_isbn, action.previous_stock);
    }
    Ok(out)
}

pub(crate) async fn load_catalog(state: &AppState) -> Result<String, DeskError> {
    let req = LoadCatalogCommandRequest::new(state.config.catalog_path.clone());
    let res = LoadCatalogCommand::new(build_catalog(state).await).execute(req).await?;
    let mut out = format!("Loaded {} books from {}.", res.loaded, state.config.catalog_path.display());
    if !res.skipped.is_empty() {
        let _ = write!(out, " Skipped {} malformed lines.", res.skipped.len());
    }
    Ok(out)
}

pub(crate) async fn save_catalog(state: &AppState) -> Result<String, DeskError> {
    let req = SaveCatalogCommandRequest::new(state.config.catalog_path.clone());
    let res = SaveCatalogCommand::new(build_catalog(state).await).execute(req).await?;
    Ok(format!("Saved {} books to {}.", res.saved, state.config.catalog_path.display()))
}
