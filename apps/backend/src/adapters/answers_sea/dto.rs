//! DTOs for answers_sea adapter.

#[derive(Debug, Clone)]
pub struct AnswerCreate {
    pub question_id: i64,
    pub student_id: i64,
    pub answer_text: String,
}

impl AnswerCreate {
    pub fn new(question_id: i64, student_id: i64, answer_text: impl Into<String>) -> Self {
        Self {
            question_id,
            student_id,
            answer_text: answer_text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerUpdate {
    pub id: i64,
    pub answer_text: String,
}

impl AnswerUpdate {
    pub fn new(id: i64, answer_text: impl Into<String>) -> Self {
        Self {
            id,
            answer_text: answer_text.into(),
        }
    }
}
