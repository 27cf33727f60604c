pub mod health;
pub mod pre_assessments;
pub mod questionnaires;
