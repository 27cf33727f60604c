use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::QuestionnaireError;

/// Closed set of screening instruments in the pre-assessment.
///
/// The serialized form is the display name used by the client portal, so
/// `"ADD / ADHD"` on the wire is [`QuestionnaireId::Adhd`] here. Variants are
/// declared in answer-vector order, which makes `Ord` follow the offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuestionnaireId {
    #[serde(rename = "Depression")]
    Depression,
    #[serde(rename = "ADD / ADHD")]
    Adhd,
    #[serde(rename = "Substance or Alcohol Use Issues")]
    AlcoholUse,
    #[serde(rename = "Binge eating / Eating disorders")]
    BingeEating,
    #[serde(rename = "Drug Issues")]
    DrugUse,
    #[serde(rename = "Anxiety")]
    Anxiety,
    #[serde(rename = "Insomnia")]
    Insomnia,
    #[serde(rename = "Burnout")]
    Burnout,
    #[serde(rename = "Bipolar disorder (BD)")]
    Bipolar,
    #[serde(rename = "Obsessive compulsive disorder (OCD)")]
    Ocd,
    #[serde(rename = "Post-traumatic stress disorder (PTSD)")]
    Ptsd,
    #[serde(rename = "Panic")]
    Panic,
    #[serde(rename = "Depression Secondary")]
    DepressionSecondary,
    #[serde(rename = "Stress")]
    Stress,
    #[serde(rename = "Social anxiety")]
    SocialAnxiety,
}

impl QuestionnaireId {
    pub const ALL: [QuestionnaireId; 15] = [
        QuestionnaireId::Depression,
        QuestionnaireId::Adhd,
        QuestionnaireId::AlcoholUse,
        QuestionnaireId::BingeEating,
        QuestionnaireId::DrugUse,
        QuestionnaireId::Anxiety,
        QuestionnaireId::Insomnia,
        QuestionnaireId::Burnout,
        QuestionnaireId::Bipolar,
        QuestionnaireId::Ocd,
        QuestionnaireId::Ptsd,
        QuestionnaireId::Panic,
        QuestionnaireId::DepressionSecondary,
        QuestionnaireId::Stress,
        QuestionnaireId::SocialAnxiety,
    ];

    /// The wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionnaireId::Depression => "Depression",
            QuestionnaireId::Adhd => "ADD / ADHD",
            QuestionnaireId::AlcoholUse => "Substance or Alcohol Use Issues",
            QuestionnaireId::BingeEating => "Binge eating / Eating disorders",
            QuestionnaireId::DrugUse => "Drug Issues",
            QuestionnaireId::Anxiety => "Anxiety",
            QuestionnaireId::Insomnia => "Insomnia",
            QuestionnaireId::Burnout => "Burnout",
            QuestionnaireId::Bipolar => "Bipolar disorder (BD)",
            QuestionnaireId::Ocd => "Obsessive compulsive disorder (OCD)",
            QuestionnaireId::Ptsd => "Post-traumatic stress disorder (PTSD)",
            QuestionnaireId::Panic => "Panic",
            QuestionnaireId::DepressionSecondary => "Depression Secondary",
            QuestionnaireId::Stress => "Stress",
            QuestionnaireId::SocialAnxiety => "Social anxiety",
        }
    }
}

impl fmt::Display for QuestionnaireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireId {
    type Err = QuestionnaireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionnaireId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| QuestionnaireError::UnknownQuestionnaire(s.to_string()))
    }
}
