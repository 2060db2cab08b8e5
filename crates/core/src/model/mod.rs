mod curriculum;
mod ids;
mod question;
mod result;
mod student;

pub use curriculum::{
    ClassContent, ClassLevel, DEFAULT_STREAM_ID, LocalizedName, Stream, StreamChoice, SubStream,
    Subject,
};
pub use ids::{ClassLevelId, StreamId, StudentId, SubStreamId, SubjectId};
pub use question::{OPTION_COUNT, Question};
pub use result::QuizResultRecord;
pub use student::{Student, StudentQuizResult, StudentStatus};
