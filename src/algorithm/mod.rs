// Motor de reglas académicas: notas, conflictos de horario, prerequisitos y
// el flujo de matrícula que los compone.
pub mod academic;
pub mod conflict;
pub mod enrollment;
pub mod grades;
pub mod prerequisites;
pub mod timetable;
pub mod validation;

// Reexportar la API pública del motor
pub use academic::{curriculum_board, final_exam_report, progress_report, record_grades, FinalExamReport, ProgressReport};
pub use conflict::{first_conflict, overlaps, time_to_minutes, ConflictDetail};
pub use enrollment::{enroll, unenroll, EnrollOutcome, UnenrollOutcome};
pub use grades::{
    course_progress_percent, final_average, general_average, remedial_grade_needed, round2, weighted_average,
    PASSING_GRADE,
};
pub use prerequisites::{all_satisfied, discipline_status, missing_prerequisites, CompletedDisciplines};
pub use timetable::weekly_schedule;
