//! DTOs for study_manuals_sea adapter.

#[derive(Debug, Clone)]
pub struct StudyManualCreate {
    pub module_id: i64,
    pub content: String,
}

impl StudyManualCreate {
    pub fn new(module_id: i64, content: impl Into<String>) -> Self {
        Self {
            module_id,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudyManualUpdate {
    pub id: i64,
    pub content: String,
}

impl StudyManualUpdate {
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
