pub mod question;
pub mod section;
pub mod subject;

pub use question::{QuestionRecord, SubjectBank};
pub use section::Section;
pub use subject::SubjectKey;
