pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod loader;
pub mod parse;

// Re-export commonly used types
pub use csv_reader::CsvItemStream;
pub use csv_writer::write_items;
pub use error::IoError;
pub use loader::{LoadSummary, load_items};
pub use parse::RawItemRecord;
