//! The story request submitted by the form.

use hikaya_core::error::DomainError;

/// The three user-supplied fields a story is built from.
///
/// Built by the HTTP layer from its own wire type; absent fields arrive as
/// empty strings and are rejected by [`StoryRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryRequest {
    /// Name of the child the story features.
    pub child_name: String,
    /// The child's favorite animal.
    pub favorite_animal: String,
    /// Value or topic the story teaches.
    pub topic: String,
}

impl StoryRequest {
    /// Creates a request from the three fields.
    #[must_use]
    pub fn new(
        child_name: impl Into<String>,
        favorite_animal: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            child_name: child_name.into(),
            favorite_animal: favorite_animal.into(),
            topic: topic.into(),
        }
    }

    /// The three fields in form order.
    #[must_use]
    pub fn fields(&self) -> [&str; 3] {
        [&self.child_name, &self.favorite_animal, &self.topic]
    }

    /// Checks that every field is present and not blank.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming every missing field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing: Vec<&str> = [
            ("childName", &self.child_name),
            ("favoriteAnimal", &self.favorite_animal),
            ("topic", &self.topic),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}
