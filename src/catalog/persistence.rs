use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog file format: one `isbn,title,author,genre,stock` record per line, no header and
// no escaping. A comma inside title or author shifts the fields on the next load.

// LoadReport summarizes a catalog load; malformed lines are kept as ParseSkip errors
#[derive(Debug, Default)]
pub(crate) struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<LibraryError>,
}

// parse_catalog_line returns None for blank lines
pub(crate) fn parse_catalog_line(line: &str, line_no: usize) -> LibraryResult<Option<BookDto>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = line.splitn(5, ',').collect();
    match fields.as_slice() {
        [isbn, title, author, genre, stock] => {
            let stock = stock.trim().parse::<i64>().map_err(|err| LibraryError::parse_skip(
                format!("stock {:?} is not an integer: {}", stock, err).as_str(), line_no))?;
            if stock < 0 {
                return Err(LibraryError::parse_skip(format!("stock {} is negative", stock).as_str(), line_no));
            }
            Ok(Some(BookDto::new(isbn, title, author, genre, stock)))
        }
        _ => {
            Err(LibraryError::parse_skip(
                format!("expected 5 fields but found {}", fields.len()).as_str(), line_no))
        }
    }
}

pub(crate) fn format_catalog_line(book: &BookDto) -> String {
    format!("{},{},{},{},{}", book.isbn, book.title, book.author, book.genre, book.stock)
}

pub(crate) async fn load_catalog(path: &Path, catalog: &dyn CatalogService) -> LibraryResult<LoadReport> {
    let file = File::open(path).map_err(|err| LibraryError::io_failure(
        format!("cannot open catalog {}: {}", path.display(), err).as_str(), Some(format!("{:?}", err.kind()))))?;
    let reader = BufReader::new(file);
    let mut report = LoadReport::default();
    for (i, raw) in reader.split(b'\n').enumerate() {
        let parsed = String::from_utf8(raw?)
            .map_err(|err| LibraryError::parse_skip(
                format!("line is not valid utf-8: {}", err.utf8_error()).as_str(), i + 1))
            .and_then(|line| parse_catalog_line(&line, i + 1));
        match parsed {
            Ok(Some(book)) => {
                let _ = catalog.add_book(&book).await?;
                report.loaded += 1;
            }
            Ok(None) => {}
            Err(err) => {
                warn!(path = %path.display(), "skipping catalog line: {}", err);
                report.skipped.push(err);
            }
        }
    }
    info!(path = %path.display(), loaded = report.loaded, skipped = report.skipped.len(), "catalog loaded");
    Ok(report)
}

pub(crate) async fn save_catalog(path: &Path, catalog: &dyn CatalogService) -> LibraryResult<usize> {
    let shelves = catalog.list_books().await?;
    let file = File::create(path).map_err(|err| LibraryError::io_failure(
        format!("cannot write catalog {}: {}", path.display(), err).as_str(), Some(format!("{:?}", err.kind()))))?;
    let mut writer = BufWriter::new(file);
    let mut saved = 0;
    for shelf in &shelves {
        for book in &shelf.books {
            if book.title.contains(',') || book.author.contains(',') || book.isbn.contains(',') {
                warn!(isbn = book.isbn.as_str(), "field contains a comma, record will not reload intact");
            }
            writeln!(writer, "{}", format_catalog_line(book))?;
            saved += 1;
        }
    }
    writer.flush()?;
    info!(path = %path.display(), saved, "catalog saved");
    Ok(saved)
}
