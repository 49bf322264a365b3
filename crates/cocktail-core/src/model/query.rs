// ── Drink query ──

use std::fmt;

use thiserror::Error;

/// Why a raw name could not become a [`DrinkQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("drink name is empty")]
    EmptyName,
}

/// A validated search term: trimmed and non-empty.
///
/// Created on submission and dropped once the lookup resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkQuery {
    name: String,
}

impl DrinkQuery {
    /// Trim `raw` and reject it if nothing is left.
    ///
    /// Catalog membership is not checked: any free text is a valid query.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for DrinkQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
