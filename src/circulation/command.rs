pub mod borrow_request_cmd;
pub mod pending_requests_cmd;
pub mod process_request_cmd;
pub mod return_request_cmd;
pub mod undo_action_cmd;
