pub mod category;
pub mod document;
pub mod exam;
pub mod loaders;
pub mod question;

pub use category::{Category, CategoryCounts};
pub use document::SourceDocument;
pub use exam::{ExamEntry, ExamInstance, EXAM_LENGTH};
pub use loaders::{load_all_documents, load_document};
pub use question::{
    DocumentId, GenderAttribution, MultiPartChoice, Ordering, QuestionBody, QuestionRecord,
    SingleChoice, Speaker, SpeakerItem, ORDERING_PROMPT,
};
