use model::{OptionId, QuestionId, SurveyResult};

/// Client-side view of a survey's results. Local votes are provisional and
/// get overwritten by the next authoritative fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    results: Vec<SurveyResult>,
}

impl From<Vec<SurveyResult>> for Tally {
    fn from(results: Vec<SurveyResult>) -> Self {
        Self { results }
    }
}

impl Tally {
    pub fn results(&self) -> &[SurveyResult] {
        &self.results
    }

    fn question(&self, question: QuestionId) -> Option<&SurveyResult> {
        self.results.iter().find(|result| result.question == question)
    }

    pub fn total_votes(&self, question: QuestionId) -> Option<u32> {
        self.question(question).map(SurveyResult::total_votes)
    }

    /// Percentage of the question's votes that went to `option`. [`None`] if
    /// either is unknown or nobody has voted yet.
    pub fn share(&self, question: QuestionId, option: OptionId) -> Option<f32> {
        let result = self.question(question)?;
        let total = result.total_votes();
        if total == 0 {
            return None;
        }
        let votes = result.options.iter().find(|candidate| candidate.id == option)?.votes;
        Some(votes as f32 / total as f32 * 100.0)
    }

    /// Bumps the displayed count of `option` by one. Returns `false` if the
    /// option is not part of this tally.
    pub fn record_provisional_vote(&mut self, option: OptionId) -> bool {
        let Some(target) =
            self.results.iter_mut().flat_map(|result| &mut result.options).find(|candidate| candidate.id == option)
        else {
            return false;
        };
        target.votes = target.votes.saturating_add(1);
        true
    }

    /// Replaces every count with the server's.
    pub fn reconcile(&mut self, fresh: Vec<SurveyResult>) {
        self.results = fresh;
    }
}
