//! The plate catalog: test types and the plates available for each.
//!
//! A catalog is static data loaded once and never mutated by the engine.
//! Plate identifiers encode their correct answer (`plate_12` shows a 12).
//! Test types keep their declaration order, which is the order stats and
//! diagnoses are reported in.

mod builtin;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScreeningError, ScreeningResult};

/// A category of color vision deficiency a group of plates screens for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestType(String);

impl TestType {
    /// Create a test type from its catalog name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The catalog name of this type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// All plates of one test type, keyed by plate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// The test type these plates probe.
    pub name: TestType,
    /// Plate identifier -> image asset reference.
    pub plates: BTreeMap<String, String>,
}

/// Read-only registry of test types and their plates.
///
/// Deserializing rejects catalogs that declare a test type twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct PlateCatalog {
    types: Vec<CatalogEntry>,
}

/// Catalog JSON as written, before test types are checked for uniqueness.
#[derive(Deserialize)]
struct RawCatalog {
    types: Vec<CatalogEntry>,
}

impl TryFrom<RawCatalog> for PlateCatalog {
    type Error = ScreeningError;

    fn try_from(raw: RawCatalog) -> ScreeningResult<Self> {
        for (i, entry) in raw.types.iter().enumerate() {
            if raw.types[..i].iter().any(|e| e.name == entry.name) {
                return Err(ScreeningError::DuplicateTestType(entry.name.clone()));
            }
        }
        Ok(Self { types: raw.types })
    }
}

impl PlateCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog bundled with the application: protanopia, deuteranopia,
    /// and tritanopia plates.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Add a test type with its plates, builder style.
    ///
    /// Adding a type that already exists replaces its plates but keeps its
    /// original position.
    pub fn with_type<I, K, V>(mut self, name: impl Into<TestType>, plates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let plates: BTreeMap<String, String> = plates
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        match self.types.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.plates = plates,
            None => self.types.push(CatalogEntry { name, plates }),
        }
        self
    }

    /// Parse a catalog from JSON.
    ///
    /// The format is `{"types": [{"name": "...", "plates": {"plate_12": "path"}}]}`.
    pub fn from_json_str(json: &str) -> ScreeningResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Load a JSON catalog from disk.
    pub fn load(path: &Path) -> ScreeningResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        log::debug!(
            "loaded catalog from {} ({} types)",
            path.display(),
            catalog.types.len()
        );
        Ok(catalog)
    }

    /// Serialize the catalog to pretty JSON.
    pub fn to_json(&self) -> ScreeningResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.types
    }

    /// All test types in declaration order.
    pub fn test_types(&self) -> impl Iterator<Item = &TestType> {
        self.types.iter().map(|e| &e.name)
    }

    /// Look up the plates of a test type.
    pub fn get(&self, test_type: &TestType) -> Option<&CatalogEntry> {
        self.types.iter().find(|e| &e.name == test_type)
    }

    /// Number of test types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog declares no test types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Check that every type can supply `plates_per_type` distinct plates
    /// whose identifiers encode an answer.
    pub fn validate(&self, plates_per_type: usize) -> ScreeningResult<()> {
        if self.types.is_empty() {
            return Err(ScreeningError::EmptyCatalog);
        }
        for entry in &self.types {
            if entry.plates.len() < plates_per_type {
                return Err(ScreeningError::CatalogInsufficient {
                    test_type: entry.name.clone(),
                    available: entry.plates.len(),
                    required: plates_per_type,
                });
            }
            for id in entry.plates.keys() {
                answer_from_plate_id(id)?;
            }
        }
        Ok(())
    }
}

/// Extract the correct answer a plate identifier encodes.
///
/// The first run of ASCII digits is the answer: `plate_12` -> 12,
/// `plate_7_alt` -> 7.
pub fn answer_from_plate_id(id: &str) -> ScreeningResult<u32> {
    let digits: String = id
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits
        .parse()
        .map_err(|_| ScreeningError::InvalidPlateId(id.to_string()))
}
