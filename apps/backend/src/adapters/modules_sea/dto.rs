//! DTOs for modules_sea adapter.

/// DTO for creating a new module.
#[derive(Debug, Clone)]
pub struct ModuleCreate {
    pub name: String,
    pub description: String,
}

impl ModuleCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// DTO for updating a module. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ModuleUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ModuleUpdate {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
