use serde::Serialize;
use ts_rs::TS;

/// The answer choices offered for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseScale {
    /// Never (0) through Very often (4).
    Frequency,
    /// Not at all (0) through Nearly every day (3), over the last two weeks.
    Days,
    /// No (0) or Yes (1).
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: i32,
    pub label: &'static str,
}

const FREQUENCY: &[ResponseOption] = &[
    ResponseOption { value: 0, label: "Never" },
    ResponseOption { value: 1, label: "Rarely" },
    ResponseOption { value: 2, label: "Sometimes" },
    ResponseOption { value: 3, label: "Often" },
    ResponseOption { value: 4, label: "Very often" },
];

const DAYS: &[ResponseOption] = &[
    ResponseOption { value: 0, label: "Not at all" },
    ResponseOption { value: 1, label: "Several days" },
    ResponseOption { value: 2, label: "More than half the days" },
    ResponseOption { value: 3, label: "Nearly every day" },
];

const YES_NO: &[ResponseOption] = &[
    ResponseOption { value: 0, label: "No" },
    ResponseOption { value: 1, label: "Yes" },
];

impl ResponseScale {
    pub fn options(&self) -> &'static [ResponseOption] {
        match self {
            ResponseScale::Frequency => FREQUENCY,
            ResponseScale::Days => DAYS,
            ResponseScale::YesNo => YES_NO,
        }
    }
}

/// A single prompt within a questionnaire, in answer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub prompt: String,
    pub scale: ResponseScale,
}

/// Build an ordered question list where every prompt shares one scale.
pub(crate) fn items(scale: ResponseScale, prompts: &[&str]) -> Vec<Question> {
    prompts
        .iter()
        .map(|prompt| Question {
            prompt: prompt.to_string(),
            scale,
        })
        .collect()
}
