use crate::{OptionId, QuestionId};
use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Current vote tallies for one question of a survey.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SurveyResult {
    #[serde(rename = "QuestionID")]
    pub question: QuestionId,
    #[serde(rename = "QuestionText")]
    pub text: String,
    #[serde(rename = "Options", default, deserialize_with = "crate::nullable_vec")]
    pub options: Vec<OptionResult>,
}

impl SurveyResult {
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|option| option.votes).fold(0, u32::saturating_add)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OptionResult {
    #[serde(rename = "OptionID")]
    pub id: OptionId,
    #[serde(rename = "OptionText")]
    pub text: String,
    #[serde(rename = "Votes", default)]
    pub votes: u32,
}
