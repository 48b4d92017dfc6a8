//! Copy constructor, expressed as `Clone`: the copy is an independent value.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    pub content: String,
}

impl TextDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn print(&self) -> String {
        format!("TextDocument: {}", self.content)
    }
}
