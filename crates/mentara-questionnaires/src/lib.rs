//! mentara-questionnaires
//!
//! Pre-assessment screening instruments. Pure data and pure functions, no
//! I/O. Defines the questions and scoring rules for each instrument, the
//! layout of the 201-slot flat answer vector, and the transforms between a
//! client's per-questionnaire answers, that vector, and derived severities.

pub mod config;
pub mod error;
pub mod id;
pub mod instruments;
pub mod layout;
pub mod matrix;
pub mod questions;
pub mod scoring;

pub use config::{QuestionnaireScores, ScreeningConfig};
pub use id::QuestionnaireId;
pub use layout::{LayoutEntry, MatrixLayout, VECTOR_LEN};
pub use matrix::{map_answers_to_vector, FlatAnswerVector};

use questions::Question;
use scoring::ScoringTable;

/// Trait implemented by each screening instrument.
pub trait Questionnaire: Send + Sync {
    fn id(&self) -> QuestionnaireId;

    /// Display name shown to clients, identical to the wire id.
    fn name(&self) -> &str {
        self.id().as_str()
    }

    /// Published abbreviation (e.g. "GAD-7").
    fn short_name(&self) -> &str;

    fn description(&self) -> &str;

    /// First position of this instrument in the flat answer vector.
    fn offset(&self) -> usize;

    /// Questions in answer order.
    fn questions(&self) -> &[Question];

    /// Default scoring map, severity table and rule.
    fn scoring(&self) -> &ScoringTable;

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    fn layout_entry(&self) -> LayoutEntry {
        LayoutEntry {
            offset: self.offset(),
            question_count: self.question_count(),
        }
    }
}

/// Look up the built-in definition of a questionnaire.
pub fn get_questionnaire(id: QuestionnaireId) -> Box<dyn Questionnaire> {
    use instruments::*;
    match id {
        QuestionnaireId::Depression => Box::new(phq15::Phq15),
        QuestionnaireId::Adhd => Box::new(asrs::Asrs),
        QuestionnaireId::AlcoholUse => Box::new(audit::Audit),
        QuestionnaireId::BingeEating => Box::new(bes::Bes),
        QuestionnaireId::DrugUse => Box::new(dast10::Dast10),
        QuestionnaireId::Anxiety => Box::new(gad7::Gad7),
        QuestionnaireId::Insomnia => Box::new(isi::Isi),
        QuestionnaireId::Burnout => Box::new(mbi::Mbi),
        QuestionnaireId::Bipolar => Box::new(mdq::Mdq),
        QuestionnaireId::Ocd => Box::new(oci_r::OciR),
        QuestionnaireId::Ptsd => Box::new(pcl5::Pcl5),
        QuestionnaireId::Panic => Box::new(pdss::Pdss),
        QuestionnaireId::DepressionSecondary => Box::new(phq9::Phq9),
        QuestionnaireId::Stress => Box::new(pss::Pss),
        QuestionnaireId::SocialAnxiety => Box::new(spin::Spin),
    }
}

/// Return all registered questionnaires in answer-vector order.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    QuestionnaireId::ALL
        .into_iter()
        .map(get_questionnaire)
        .collect()
}
