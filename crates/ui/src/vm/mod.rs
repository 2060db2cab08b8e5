mod quiz_vm;
mod teacher_vm;
mod time_fmt;

pub use quiz_vm::{QuizOptionVm, QuizQuestionVm, QuizResultVm, QuizVm, map_quiz};
pub use teacher_vm::{
    QuizResultRowVm, StudentDetailVm, StudentRowVm, map_student_detail, map_student_rows,
};
pub use time_fmt::format_date;
