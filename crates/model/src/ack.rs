use crate::{OptionId, QuestionId, SurveyId};
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Uniform acknowledgement returned by every mutating endpoint. It carries
/// whichever identifier the server just assigned or touched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ack {
    pub message: String,
    #[serde(rename = "SurveyID", default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<SurveyId>,
    #[serde(rename = "QuestionID", default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionId>,
    #[serde(rename = "OptionID", default, skip_serializing_if = "Option::is_none")]
    pub option: Option<OptionId>,
}

impl Ack {
    /// Placeholder acknowledgement for a failed operation: a message and no
    /// identifiers at all.
    pub fn failure(message: String) -> Self {
        Self { message, survey: None, question: None, option: None }
    }

    pub const fn has_identifier(&self) -> bool {
        self.survey.is_some() || self.question.is_some() || self.option.is_some()
    }
}

/// Request body of the vote endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Vote {
    #[serde(rename = "OptionID")]
    pub option: OptionId,
}
