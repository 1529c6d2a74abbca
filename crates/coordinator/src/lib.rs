mod deadline;
mod draft;
mod submission;
mod tally;

pub use deadline::format_deadline;
pub use draft::{QuestionDraft, SurveyDraft};
pub use submission::{OptionOutcome, QuestionOutcome, Step, Submission};
pub use tally::Tally;

use client::Remote;
use futures_util::future::join_all;
use model::{Ack, Choice, OptionId, Question, Survey, SurveyId, SurveyResult};

/// Mediates between callers and a [`Remote`]. Mutating operations never fail:
/// errors come back as an [`Ack`] with a message and no identifiers.
pub struct Coordinator<R> {
    remote: R,
}

impl<R: Remote> Coordinator<R> {
    pub const fn new(remote: R) -> Self {
        Self { remote }
    }

    pub const fn remote(&self) -> &R {
        &self.remote
    }

    pub async fn add_survey(&self, survey: &Survey) -> Ack {
        self.remote.create_survey(survey).await.unwrap_or_else(|err| {
            log::error!("Error adding survey: {err}");
            Ack::failure(format!("Error adding survey: {err}"))
        })
    }

    pub async fn add_question(&self, question: &Question) -> Ack {
        self.remote.create_question(question).await.unwrap_or_else(|err| {
            log::error!("Error adding question: {err}");
            Ack::failure(format!("Error adding question: {err}"))
        })
    }

    pub async fn add_option(&self, option: &Choice) -> Ack {
        self.remote.create_option(option).await.unwrap_or_else(|err| {
            log::error!("Error adding option: {err}");
            Ack::failure(format!("Error adding option: {err}"))
        })
    }

    /// Returns [`None`] without touching the network if there is no option.
    pub async fn vote_option(&self, option: Option<OptionId>) -> Option<Ack> {
        let option = option?;
        let ack = self.remote.vote(option).await.unwrap_or_else(|err| {
            log::error!("Error voting option {option}: {err}");
            Ack::failure(format!("Error voting option: {err}"))
        });
        Some(ack)
    }

    /// Votes for `option`, shows the vote in `tally` right away, then replaces
    /// the tally with the server's counts if they can be fetched.
    pub async fn cast_vote(&self, survey: SurveyId, option: OptionId, tally: &mut Tally) -> Ack {
        let ack = match self.remote.vote(option).await {
            Ok(ack) => ack,
            Err(err) => {
                log::error!("Error voting option {option}: {err}");
                return Ack::failure(format!("Error voting option: {err}"));
            }
        };

        tally.record_provisional_vote(option);
        if let Ok(fresh) = self.get_survey_results(survey).await {
            tally.reconcile(fresh);
        }

        ack
    }

    pub async fn get_survey_results(&self, survey: SurveyId) -> client::Result<Vec<SurveyResult>> {
        self.remote.fetch_results(survey).await.inspect_err(|err| {
            log::error!("Error getting results of survey {survey}: {err}");
        })
    }

    pub async fn read_data(&self) -> client::Result<Vec<Survey>> {
        self.remote.fetch_all_surveys().await.inspect_err(|err| {
            log::error!("Error reading surveys: {err}");
        })
    }

    pub async fn read_survey(&self, survey: SurveyId) -> client::Result<Survey> {
        self.remote.fetch_survey(survey).await.inspect_err(|err| {
            log::error!("Error reading survey {survey}: {err}");
        })
    }

    /// Creates the survey, then its questions, then each question's options.
    /// Siblings are submitted concurrently, but never before their parent has
    /// an identifier. Earlier records survive later failures.
    pub async fn submit(&self, draft: &SurveyDraft) -> Submission {
        let ack = self.add_survey(&draft.to_survey()).await;
        let Some(survey) = ack.survey else {
            let questions = draft
                .questions
                .iter()
                .map(|question| QuestionOutcome::skipped(&question.text, &question.options, Step::Skipped))
                .collect();
            return Submission { survey: Step::Failed(ack.message), questions };
        };

        log::info!("Created survey {survey} with {} question(s)", draft.questions.len());
        let questions = join_all(draft.questions.iter().map(|question| self.submit_question(survey, question))).await;
        Submission { survey: Step::Created(survey), questions }
    }

    async fn submit_question(&self, survey: SurveyId, draft: &QuestionDraft) -> QuestionOutcome {
        let ack = self.add_question(&Question::new(survey, draft.text.clone())).await;
        let Some(question) = ack.question else {
            return QuestionOutcome::skipped(&draft.text, &draft.options, Step::Failed(ack.message));
        };

        log::debug!("Created question {question} in survey {survey}");
        let options = join_all(draft.options.iter().map(|text| async move {
            let ack = self.add_option(&Choice::new(question, text.clone())).await;
            let step = match ack.option {
                Some(id) => Step::Created(id),
                None => Step::Failed(ack.message),
            };
            OptionOutcome { text: text.clone(), step }
        }))
        .await;

        QuestionOutcome { text: draft.text.clone(), step: Step::Created(question), options }
    }
}
