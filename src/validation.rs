use serde::{Deserialize, Serialize};

/// Anything that carries an identifier and a user-facing name.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// Minimal named record, as stored for products, ingredients, equipment and suppliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: String,
    pub name: String,
}

impl NamedEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

impl Named for NamedEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a name is required")]
    Required,
    #[error("the name '{0}' is already in use")]
    Duplicate(String),
}

impl From<ValidationError> for crate::error::Error {
    fn from(err: ValidationError) -> Self {
        crate::error::Error::ValidationError(err.to_string())
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Whether `candidate` collides with the name of an entity other than the one
/// being edited.
///
/// Names are compared after trimming and lowercasing. `current_id` is the id of
/// the entity under edit, or `None` when creating a new one. A blank candidate
/// is never a duplicate.
pub fn is_duplicate_name<E: Named>(
    candidate: &str,
    entities: &[E],
    current_id: Option<&str>,
) -> bool {
    let candidate = normalize(candidate);
    if candidate.is_empty() {
        return false;
    }
    entities.iter().any(|entity| {
        normalize(entity.name()) == candidate && Some(entity.id()) != current_id
    })
}

/// Rejects blank names and names already used by another entity.
pub fn validate_name<E: Named>(
    candidate: &str,
    entities: &[E],
    current_id: Option<&str>,
) -> Result<(), ValidationError> {
    if candidate.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if is_duplicate_name(candidate, entities, current_id) {
        return Err(ValidationError::Duplicate(candidate.trim().to_string()));
    }
    Ok(())
}
