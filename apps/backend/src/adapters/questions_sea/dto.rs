//! DTOs for questions_sea adapter.

use crate::entities::QuestionSection;

#[derive(Debug, Clone)]
pub struct QuestionCreate {
    pub module_id: i64,
    pub section: QuestionSection,
    pub title: String,
    pub question_text: String,
    pub marking_schema: String,
}

impl QuestionCreate {
    pub fn new(
        module_id: i64,
        section: QuestionSection,
        title: impl Into<String>,
        question_text: impl Into<String>,
        marking_schema: impl Into<String>,
    ) -> Self {
        Self {
            module_id,
            section,
            title: title.into(),
            question_text: question_text.into(),
            marking_schema: marking_schema.into(),
        }
    }
}

/// Partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default)]
pub struct QuestionUpdate {
    pub id: i64,
    pub section: Option<QuestionSection>,
    pub title: Option<String>,
    pub question_text: Option<String>,
    pub marking_schema: Option<String>,
}

impl QuestionUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_section(mut self, section: QuestionSection) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_question_text(mut self, question_text: impl Into<String>) -> Self {
        self.question_text = Some(question_text.into());
        self
    }

    pub fn with_marking_schema(mut self, marking_schema: impl Into<String>) -> Self {
        self.marking_schema = Some(marking_schema.into());
        self
    }
}
