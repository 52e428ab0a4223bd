pub mod bank_writer;
pub mod extractor;
pub mod line_shape;
pub mod segmenter;
pub mod source_loader;

pub use bank_writer::BankWriter;
pub use extractor::extract_questions;
pub use segmenter::segment_sections;
pub use source_loader::load_lines;
