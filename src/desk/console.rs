use std::io::{BufRead, Write};
use tracing::debug;
use crate::core::library::LibraryResult;
use crate::desk::controller::{self, AppState};

const MENU: &str = "\
===== Library Desk =====
1. List all books
2. Find book by ISBN
3. Request to borrow a book
4. Request to return a book
5. Process next request
6. Undo last action
7. Get recommendations
8. Find book by title
9. Show pending requests
0. Save and exit
========================";

// MenuChoice is a well-formed menu number
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum MenuChoice {
    ListBooks,
    FindByIsbn,
    RequestBorrow,
    RequestReturn,
    ProcessNext,
    UndoLast,
    Recommend,
    FindByTitle,
    PendingRequests,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: u32) -> Option<MenuChoice> {
        match n {
            1 => Some(MenuChoice::ListBooks),
            2 => Some(MenuChoice::FindByIsbn),
            3 => Some(MenuChoice::RequestBorrow),
            4 => Some(MenuChoice::RequestReturn),
            5 => Some(MenuChoice::ProcessNext),
            6 => Some(MenuChoice::UndoLast),
            7 => Some(MenuChoice::Recommend),
            8 => Some(MenuChoice::FindByTitle),
            9 => Some(MenuChoice::PendingRequests),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// read_field prints a label and reads one line; None at end of input
fn read_field<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> LibraryResult<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn report<W: Write>(output: &mut W, res: Result<String, String>) -> LibraryResult<()> {
    match res {
        Ok(text) => writeln!(output, "{}", text)?,
        Err(text) => writeln!(output, "{}", text)?,
    }
    Ok(())
}

// run_console drives the menu until 0 or end of input, then saves the catalog.
// Command failures are reported as status lines and never stop the loop.
pub(crate) async fn run_console<R: BufRead, W: Write>(state: &AppState, input: &mut R, output: &mut W) -> LibraryResult<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", MENU)?;
        let Some(line) = read_field(input, output, "Choose an option")? else {
            writeln!(output)?;
            break;
        };
        let choice = match line.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                writeln!(output, "Invalid input.")?;
                continue;
            }
        };
        let Some(choice) = MenuChoice::from_number(choice) else {
            writeln!(output, "Invalid choice.")?;
            continue;
        };
        debug!(?choice, "menu");
        let res = match choice {
            MenuChoice::ListBooks => controller::list_books(state).await,
            MenuChoice::FindByIsbn => {
                let Some(isbn) = read_field(input, output, "Enter ISBN")? else { break };
                controller::find_by_isbn(state, &isbn).await
            }
            MenuChoice::RequestBorrow | MenuChoice::RequestReturn => {
                let Some(user_id) = read_field(input, output, "Enter user id")? else { break };
                let Some(isbn) = read_field(input, output, "Enter book ISBN")? else { break };
                if choice == MenuChoice::RequestBorrow {
                    controller::request_borrow(state, &user_id, &isbn).await
                } else {
                    controller::request_return(state, &user_id, &isbn).await
                }
            }
            MenuChoice::ProcessNext => controller::process_next(state).await,
            MenuChoice::UndoLast => controller::undo_last(state).await,
            MenuChoice::Recommend => {
                let Some(isbn) = read_field(input, output, "Enter the ISBN of a book you like")? else { break };
                controller::recommend(state, &isbn).await
            }
            MenuChoice::FindByTitle => {
                let Some(title) = read_field(input, output, "Enter title")? else { break };
                controller::find_by_title(state, &title).await
            }
            MenuChoice::PendingRequests => controller::pending_requests(state).await,
            MenuChoice::Exit => break,
        };
        report(output, res)?;
    }
    writeln!(output, "Saving data...")?;
    report(output, controller::save_catalog(state).await)?;
    writeln!(output, "Goodbye!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::desk::console::{run_console, MenuChoice};
    use crate::desk::controller::{load_catalog, AppState};

    async fn run_script(state: &AppState, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_console(state, &mut input, &mut output).await.expect("should run console");
        String::from_utf8(output).expect("should be utf8")
    }

    fn new_state(dir: &tempfile::TempDir, catalog: &str) -> AppState {
        let path = dir.path().join("database.txt");
        fs::write(&path, catalog).expect("should write catalog");
        AppState::new(Configuration::new("test").with_catalog_path(path), RepositoryStore::in_memory())
    }

    #[tokio::test]
    async fn test_should_parse_menu_numbers() {
        assert_eq!(Some(MenuChoice::Exit), MenuChoice::from_number(0));
        assert_eq!(Some(MenuChoice::PendingRequests), MenuChoice::from_number(9));
        assert_eq!(None, MenuChoice::from_number(10));
    }

    #[tokio::test]
    async fn test_should_borrow_undo_and_save() {
        let dir = tempfile::tempdir().expect("should create dir");
        let state = new_state(&dir, "978-1,Dune,Herbert,SciFi,3\n978-2,Emma,Austen,Classic,1\n");
        let _ = load_catalog(&state).await.expect("should load");

        let out = run_script(&state, "3\nu1\n978-1\n5\n3\nu2\n978-2\n5\n6\n0\n").await;
        assert!(out.contains("Borrow request for \"Dune\" added (1 pending)."));
        assert!(out.contains("borrowed. Remaining stock: 2"));
        assert!(out.contains("Borrow of \"Emma\" by u2 undone. Stock: 1"));
        assert!(out.contains("Saved 2 books"));
        assert!(out.ends_with("Goodbye!\n"));

        let saved = fs::read_to_string(dir.path().join("database.txt")).expect("should read catalog");
        assert_eq!("978-2,Emma,Austen,Classic,1\n978-1,Dune,Herbert,SciFi,2\n", saved);
    }

    #[tokio::test]
    async fn test_should_reprompt_on_bad_input() {
        let dir = tempfile::tempdir().expect("should create dir");
        let state = new_state(&dir, "978-1,Dune,Herbert,SciFi,3\n");
        let _ = load_catalog(&state).await.expect("should load");

        let out = run_script(&state, "abc\n42\n2\n000\n5\n0\n").await;
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Book not found."));
        assert!(out.contains("Nothing to do: no pending requests."));
        assert!(out.contains("Saved 1 books"));
    }

    #[tokio::test]
    async fn test_should_save_at_end_of_input() {
        let dir = tempfile::tempdir().expect("should create dir");
        let state = new_state(&dir, "978-1,Dune,Herbert,SciFi,3\n");
        let _ = load_catalog(&state).await.expect("should load");

        let out = run_script(&state, "4\nu1\n978-1\n5\n").await;
        assert!(out.contains("returned. Stock now: 4"));
        assert!(out.ends_with("Goodbye!\n"));
        let saved = fs::read_to_string(dir.path().join("database.txt")).expect("should read catalog");
        assert_eq!("978-1,Dune,Herbert,SciFi,4\n", saved);
    }

    #[tokio::test]
    async fn test_should_report_save_failure() {
        let dir = tempfile::tempdir().expect("should create dir");
        let path = dir.path().join("missing").join("database.txt");
        let state = AppState::new(Configuration::new("test").with_catalog_path(path), RepositoryStore::in_memory());

        let out = run_script(&state, "1\n0\n").await;
        assert!(out.contains("Library is empty."));
        assert!(out.contains("File error:"));
        assert!(out.ends_with("Goodbye!\n"));
    }
}
