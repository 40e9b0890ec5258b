//! DTOs for marks_sea adapter.

/// DTO for creating a mark. `score` is not range-checked here; the
/// `marks` CHECK constraint rejects anything outside 0..=100.
#[derive(Debug, Clone)]
pub struct MarkCreate {
    pub answer_id: i64,
    pub tutor_id: i64,
    pub score: i32,
    pub feedback: String,
}

impl MarkCreate {
    pub fn new(answer_id: i64, tutor_id: i64, score: i32, feedback: impl Into<String>) -> Self {
        Self {
            answer_id,
            tutor_id,
            score,
            feedback: feedback.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MarkUpdate {
    pub id: i64,
    pub score: Option<i32>,
    pub feedback: Option<String>,
}

impl MarkUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}
