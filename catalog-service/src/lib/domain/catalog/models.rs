use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::catalog::errors::EntryIdError;
use crate::catalog::errors::EntryKindError;
use crate::catalog::errors::EntryNameError;

/// Catalog entry aggregate entity.
///
/// One record in the content catalog. Kind-specific fields (a weapon's damage,
/// a world's climate) live in the free-form `attributes` document; the entity
/// itself only enforces what every kind shares.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub name: EntryName,
    pub description: String,
    pub attributes: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an entry ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, EntryIdError> {
        Uuid::parse_str(s)
            .map(EntryId)
            .map_err(|e| EntryIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Closed set of catalog entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Character,
    Weapon,
    Species,
    Civilization,
    Equipment,
    Title,
    World,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Character => "character",
            EntryKind::Weapon => "weapon",
            EntryKind::Species => "species",
            EntryKind::Civilization => "civilization",
            EntryKind::Equipment => "equipment",
            EntryKind::Title => "title",
            EntryKind::World => "world",
        }
    }
}

impl FromStr for EntryKind {
    type Err = EntryKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(EntryKind::Character),
            "weapon" => Ok(EntryKind::Weapon),
            "species" => Ok(EntryKind::Species),
            "civilization" => Ok(EntryKind::Civilization),
            "equipment" => Ok(EntryKind::Equipment),
            "title" => Ok(EntryKind::Title),
            "world" => Ok(EntryKind::World),
            other => Err(EntryKindError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry display name value type
///
/// Trimmed, non-empty, at most 128 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName(String);

impl EntryName {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid entry name.
    ///
    /// # Errors
    /// * `Empty` - name is empty after trimming
    /// * `TooLong` - name exceeds 128 characters
    pub fn new(name: String) -> Result<Self, EntryNameError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(EntryNameError::Empty);
        }
        if name.len() > Self::MAX_LENGTH {
            return Err(EntryNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new catalog entry with domain types
#[derive(Debug)]
pub struct CreateEntryCommand {
    pub kind: EntryKind,
    pub name: EntryName,
    pub description: String,
    pub attributes: serde_json::Value,
}

/// Command to update an existing entry with optional validated fields.
///
/// Only provided fields are updated; the kind is immutable.
#[derive(Debug)]
pub struct UpdateEntryCommand {
    pub name: Option<EntryName>,
    pub description: Option<String>,
    pub attributes: Option<serde_json::Value>,
}
