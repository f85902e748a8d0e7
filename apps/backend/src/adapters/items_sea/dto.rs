//! DTOs for items_sea adapter.

/// DTO for creating a new item.
#[derive(Debug, Clone)]
pub struct ItemCreate {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl ItemCreate {
    pub fn new(title: impl Into<String>, owner_id: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            owner_id,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
