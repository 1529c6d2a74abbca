//! Structured outcome of submitting a [`SurveyDraft`](crate::SurveyDraft).
//! Nothing is rolled back on failure, so every step reports on its own.

use model::{OptionId, QuestionId, SurveyId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<Id> {
    /// The server assigned this identifier.
    Created(Id),
    /// The request failed. Holds the message of the placeholder acknowledgement.
    Failed(String),
    /// Never attempted because the parent record does not exist.
    Skipped,
}

impl<Id: Copy> Step<Id> {
    pub const fn id(&self) -> Option<Id> {
        if let Self::Created(id) = *self {
            Some(id)
        } else {
            None
        }
    }

    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionOutcome {
    pub text: String,
    pub step: Step<OptionId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub text: String,
    pub step: Step<QuestionId>,
    /// In draft order.
    pub options: Vec<OptionOutcome>,
}

impl QuestionOutcome {
    pub(crate) fn skipped(text: &str, options: &[String], step: Step<QuestionId>) -> Self {
        let options = options
            .iter()
            .map(|option| OptionOutcome { text: option.clone(), step: Step::Skipped })
            .collect();
        Self { text: text.into(), step, options }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub survey: Step<SurveyId>,
    /// In draft order.
    pub questions: Vec<QuestionOutcome>,
}

impl Submission {
    pub const fn survey_id(&self) -> Option<SurveyId> {
        self.survey.id()
    }

    /// Whether every survey, question, and option record was created.
    pub fn is_complete(&self) -> bool {
        self.survey.is_created()
            && self
                .questions
                .iter()
                .all(|question| question.step.is_created() && question.options.iter().all(|o| o.step.is_created()))
    }

    pub fn created_questions(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().filter_map(|question| question.step.id())
    }

    pub fn created_options(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.questions.iter().flat_map(|question| &question.options).filter_map(|option| option.step.id())
    }

    /// Messages of every failed step, in draft order.
    pub fn failures(&self) -> impl Iterator<Item = &str> + '_ {
        let survey = match &self.survey {
            Step::Failed(message) => Some(message.as_str()),
            _ => None,
        };
        let nested = self.questions.iter().flat_map(|question| {
            let own = match &question.step {
                Step::Failed(message) => Some(message.as_str()),
                _ => None,
            };
            own.into_iter().chain(question.options.iter().filter_map(|option| match &option.step {
                Step::Failed(message) => Some(message.as_str()),
                _ => None,
            }))
        });
        survey.into_iter().chain(nested)
    }
}
