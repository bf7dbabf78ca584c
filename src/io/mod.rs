pub mod csv;
pub mod json;

pub use csv::{write_record, write_record_file};
pub use json::{write_summary, write_summary_file};
