use model::{Image, Survey};
use serde::Deserialize;

/// A survey being composed locally before submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SurveyDraft {
    pub title: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub questions: Vec<QuestionDraft>,
}

/// A question being composed locally along with the text of its options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl SurveyDraft {
    pub fn new(title: String) -> Self {
        Self { title, ..Default::default() }
    }

    /// Appends a question and returns its index.
    pub fn add_question(&mut self, text: String) -> usize {
        self.questions.push(QuestionDraft::new(text));
        self.questions.len() - 1
    }

    /// Appends a question the way a fresh form starts one: no text and two
    /// empty options. Returns its index.
    pub fn add_blank_question(&mut self) -> usize {
        self.questions.push(QuestionDraft::blank());
        self.questions.len() - 1
    }

    pub fn question_mut(&mut self, index: usize) -> Option<&mut QuestionDraft> {
        self.questions.get_mut(index)
    }

    /// Returns `false` if there is no question at `index`.
    pub fn set_question_text(&mut self, index: usize, text: String) -> bool {
        let Some(question) = self.questions.get_mut(index) else {
            return false;
        };
        question.text = text;
        true
    }

    /// The survey record to submit first. Questions are submitted separately
    /// once the survey has an identifier.
    pub fn to_survey(&self) -> Survey {
        Survey {
            id: None,
            title: self.title.clone(),
            deadline: self.deadline.clone(),
            time: self.time.clone(),
            image: self.image.clone(),
            questions: Vec::new(),
        }
    }

    /// Total number of option records the draft would create.
    pub fn option_count(&self) -> usize {
        self.questions.iter().map(|question| question.options.len()).sum()
    }
}

impl QuestionDraft {
    pub fn new(text: String) -> Self {
        Self { text, options: Vec::new() }
    }

    pub fn blank() -> Self {
        Self { text: String::new(), options: vec![String::new(); 2] }
    }

    /// Appends an option and returns its index.
    pub fn add_option(&mut self, text: String) -> usize {
        self.options.push(text);
        self.options.len() - 1
    }

    /// Returns `false` if there is no option at `index`.
    pub fn set_option_text(&mut self, index: usize, text: String) -> bool {
        let Some(option) = self.options.get_mut(index) else {
            return false;
        };
        *option = text;
        true
    }
}
