// src/factories/person_factory.rs

use crate::{FactoryError, Metropolitan, PersonKind, Villager, ports::Person};

/// Factory method: builds the person for a kind.
///
/// # Arguments
/// * `kind` - Kind of person to build
///
/// # Returns
/// * `Box<dyn Person>` - A person reporting that kind
pub fn get_person(kind: PersonKind) -> Box<dyn Person> {
    tracing::debug!(%kind, "building person");
    match kind {
        PersonKind::Villager => Box::new(Villager),
        PersonKind::Metropolitan => Box::new(Metropolitan),
    }
}

/// Factory method over the raw integer kind code.
///
/// # Returns
/// * `Ok(Box<dyn Person>)` - For code `0` (villager) or `1` (metropolitan)
/// * `Err(FactoryError::InvalidKind)` - For any other code
pub fn person_from_code(code: i32) -> Result<Box<dyn Person>, FactoryError> {
    let kind = PersonKind::try_from(code).inspect_err(|_| {
        tracing::warn!(code, "invalid person kind");
    })?;
    Ok(get_person(kind))
}
