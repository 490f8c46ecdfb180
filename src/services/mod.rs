pub mod exam_assembler;
pub mod grader;
pub mod question_bank;
pub mod upload_service;

pub use exam_assembler::assemble_exam;
pub use grader::{grade_answer, grade_entry, EntryGrade, Scorecard, SubmittedAnswer, Tally, TallyKind};
pub use question_bank::QuestionBank;
pub use upload_service::{UploadReport, UploadService, MAX_DOCUMENT_ID};
