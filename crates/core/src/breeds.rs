//! Breed catalog: the fixed set of breed names a dog record may carry.
//!
//! Loaded once at startup from a JSON document of the form
//! `{"dogs": ["Akita", "Beagle", ...]}` and shared read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// Immutable set of accepted breed names. Matching is exact (case-sensitive).
#[derive(Debug, Clone, Default)]
pub struct BreedCatalog {
    names: HashSet<String>,
}

#[derive(Deserialize)]
struct BreedDocument {
    dogs: Vec<String>,
}

impl BreedCatalog {
    /// Build a catalog from an explicit list of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a catalog from its JSON document.
    ///
    /// Blank entries are dropped; an empty catalog is rejected since no dog
    /// could ever validate against it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let doc: BreedDocument = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Malformed breed catalog: {e}")))?;

        let names: HashSet<String> = doc
            .dogs
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Err(CoreError::Validation("Breed catalog is empty".into()));
        }

        Ok(Self { names })
    }

    /// Read and parse the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Cannot read breed catalog {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn contains(&self, breed: &str) -> bool {
        self.names.contains(breed)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_breed_document() {
        let catalog =
            BreedCatalog::from_json(r#"{"dogs": ["Great Dane", "Spanish Mastiff", "  "]}"#)
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Great Dane"));
        assert!(catalog.contains("Spanish Mastiff"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let catalog = BreedCatalog::from_names(["Great Dane"]);
        assert!(!catalog.contains("great dane"));
        assert!(!catalog.contains("Cheems"));
    }

    #[test]
    fn rejects_malformed_document() {
        assert_matches!(
            BreedCatalog::from_json(r#"{"breeds": []}"#),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_matches!(
            BreedCatalog::from_json(r#"{"dogs": []}"#),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn missing_file_is_internal_error() {
        assert_matches!(
            BreedCatalog::load("/definitely/not/here/dog_breeds.json"),
            Err(CoreError::Internal(_))
        );
    }
}
