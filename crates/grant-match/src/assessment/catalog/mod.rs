//! Process-wide constant registries: funding programs, questionnaire items, and the
//! readiness checklist.

mod programs;
mod questions;
mod readiness;

pub use programs::{Program, ProgramId, PROGRAMS};
pub use questions::{
    questions_for_step, Question, QuestionCategory, QuestionId, QuestionKind, QuestionOption,
    QUESTIONS,
};
pub use readiness::{readiness_item, ReadinessCategory, ReadinessItem, READINESS_ITEMS};
