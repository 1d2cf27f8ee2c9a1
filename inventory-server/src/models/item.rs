//! Item input: the add/edit form and list filters

use serde::{Deserialize, Serialize};

use super::validation::required_text;
use super::ValidationError;

/// Submitted add/edit item form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub inventory_number: Option<String>,
    pub status: Option<String>,
}

/// Validated item fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub inventory_number: String,
    pub status: String,
}

impl ItemForm {
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        Ok(NewItem {
            name: required_text("name", self.name)?,
            inventory_number: required_text("inventory_number", self.inventory_number)?,
            status: required_text("status", self.status)?,
        })
    }
}

/// `/items` query string. Every filter is free text, so this doubles as the
/// parsed filter. Empty means "don't filter".
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ItemFilter {
    pub name: String,
    pub inventory_number: String,
    /// Exact match, unlike the other fields
    pub status: String,
    pub room_name: String,
    pub room_number: String,
}
