use crate::{Image, OptionId, QuestionId, SurveyId};
use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// A titled collection of questions. The ID stays [`None`] until the server
/// assigns one on creation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Survey {
    #[serde(rename = "SurveyID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SurveyId>,
    #[serde(rename = "SurveyTitle")]
    pub title: String,
    /// Calendar date as `year-month-day`. Month and day may be unpadded,
    /// e.g. `2024-6-5`.
    #[serde(rename = "Deadline", default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Time of day as `hour:minute:second`, possibly unpadded, e.g. `9:5:00`.
    #[serde(rename = "Time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "Image", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Not guaranteed to be populated when listing surveys.
    #[serde(
        rename = "Questions",
        default,
        deserialize_with = "crate::nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub questions: Vec<Question>,
}

impl Survey {
    /// Creates an unsubmitted survey with nothing but a title.
    pub fn draft(title: String) -> Self {
        Self { id: None, title, deadline: None, time: None, image: None, questions: Vec::new() }
    }
}

/// A single prompt that belongs to exactly one survey.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "SurveyID")]
    pub survey: SurveyId,
    #[serde(rename = "QuestionText")]
    pub text: String,
    #[serde(
        rename = "Options",
        default,
        deserialize_with = "crate::nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<Choice>,
}

impl Question {
    pub fn new(survey: SurveyId, text: String) -> Self {
        Self { survey, text, options: Vec::new() }
    }
}

/// One selectable answer to a question. Named `Choice` so that it does not
/// shadow [`Option`] in the prelude.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    #[serde(rename = "OptionID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OptionId>,
    #[serde(rename = "QuestionID")]
    pub question: QuestionId,
    #[serde(rename = "OptionText")]
    pub text: String,
    /// Server-maintained. Left off the wire while zero, so a draft never
    /// carries a count of its own.
    #[serde(rename = "Votes", default, skip_serializing_if = "is_zero")]
    pub votes: u32,
}

const fn is_zero(votes: &u32) -> bool {
    *votes == 0
}

impl Choice {
    pub fn new(question: QuestionId, text: String) -> Self {
        Self { id: None, question, text, votes: 0 }
    }
}
