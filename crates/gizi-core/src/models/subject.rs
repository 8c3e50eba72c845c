use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Gender code used by the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[serde(rename = "L")]
    Male,
    #[serde(rename = "P")]
    Female,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "L",
            Gender::Female => "P",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" => Ok(Gender::Male),
            "P" | "p" => Ok(Gender::Female),
            other => Err(CoreError::InvalidGender(other.to_string())),
        }
    }
}

/// A person being measured: child, adolescent or adult.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub normalized_name: String,
    pub nik: Option<String>,
    pub date_of_birth: jiff::civil::Date,
    pub gender: Gender,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub phone: Option<String>,
}

impl Subject {
    /// Build a subject with a fresh id and the normalized name filled in.
    pub fn new(name: impl Into<String>, date_of_birth: jiff::civil::Date, gender: Gender) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            normalized_name: normalize_name(&name),
            name,
            nik: None,
            date_of_birth,
            gender,
            address: None,
            parent_name: None,
            phone: None,
        }
    }

    /// Key two records must not share within one owner's subject list.
    pub fn dedup_key(&self) -> (&str, jiff::civil::Date) {
        (&self.normalized_name, self.date_of_birth)
    }
}

/// Collapse internal whitespace, trim, and uppercase.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
