//! Room input: the add/edit form and list filters

use serde::{Deserialize, Serialize};

use super::validation::{optional_count, required_count, required_text};
use super::ValidationError;

/// Submitted add/edit room form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomForm {
    pub name: Option<String>,
    pub number: Option<String>,
    pub floor: Option<String>,
    pub teacher: Option<String>,
    pub capacity: Option<String>,
}

/// Validated room fields, ready to insert or update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
    pub number: String,
    pub floor: String,
    pub teacher: String,
    pub capacity: i32,
}

impl RoomForm {
    /// Check that every field is present and well-formed.
    ///
    /// # Example
    /// ```
    /// use inventory_server::models::RoomForm;
    ///
    /// let form = RoomForm {
    ///     name: Some("Physics".into()),
    ///     number: Some("204".into()),
    ///     floor: Some("2".into()),
    ///     teacher: Some("Ivanova".into()),
    ///     capacity: Some("30".into()),
    /// };
    /// assert_eq!(form.validate().unwrap().capacity, 30);
    /// ```
    pub fn validate(self) -> Result<NewRoom, ValidationError> {
        Ok(NewRoom {
            name: required_text("name", self.name)?,
            number: required_text("number", self.number)?,
            floor: required_text("floor", self.floor)?,
            teacher: required_text("teacher", self.teacher)?,
            capacity: required_count("capacity", self.capacity)?,
        })
    }
}

/// Raw `/rooms` query string; absent parameters deserialize as empty.
///
/// Serialized back in list responses so the client can refill its filter form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RoomFilterParams {
    pub name: String,
    pub number: String,
    pub floor: String,
    pub teacher: String,
    pub capacity_min: String,
    pub capacity_max: String,
}

/// Parsed room filters. Empty text means "don't filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub name: String,
    pub number: String,
    pub floor: String,
    pub teacher: String,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
}

impl RoomFilterParams {
    pub fn parse(&self) -> Result<RoomFilter, ValidationError> {
        Ok(RoomFilter {
            name: self.name.clone(),
            number: self.number.clone(),
            floor: self.floor.clone(),
            teacher: self.teacher.clone(),
            capacity_min: optional_count("capacity_min", &self.capacity_min)?,
            capacity_max: optional_count("capacity_max", &self.capacity_max)?,
        })
    }
}
