// Core structs: Offer, Listed, Allocated and the error types
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Item condition as shown in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

impl FromStr for Condition {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            other => Err(RowError::UnknownCondition(other.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::New => write!(f, "new"),
            Condition::Used => write!(f, "used"),
        }
    }
}

/// One seller listing of a product at a given condition and price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Offer {
    pub product_key: String,
    pub name: String,
    pub condition: Condition,
    pub price: Decimal,
    pub available_quantity: u32,
    /// Wanted units for the whole name-group, repeated on every offer of the group.
    pub wanted_quantity: u32,
}

/// Handle to the quantity input of a listing row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FieldTarget {
    pub field: String,
}

impl FieldTarget {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

/// An extracted offer together with the place its allocation is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct Listed<T = FieldTarget> {
    pub offer: Offer,
    pub target: T,
}

/// An offer after allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocated<T = FieldTarget> {
    pub offer: Offer,
    pub target: T,
    pub allocation: u32,
    /// Demand of the name-group this allocation was drawn against.
    pub group_wanted: u32,
}

/// A single product row that could not be turned into an offer.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid number in {field}: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
    #[error("unknown condition: {0:?}")]
    UnknownCondition(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("embedded frame `{0}` not found in page")]
    FrameNotFound(String),
    #[error("embedded frame `{0}` has no src")]
    FrameWithoutSource(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_parses_case_insensitively() {
        assert_eq!("New".parse::<Condition>(), Ok(Condition::New));
        assert_eq!(" USED ".parse::<Condition>(), Ok(Condition::Used));
        assert_eq!(
            "mint".parse::<Condition>(),
            Err(RowError::UnknownCondition("mint".into()))
        );
    }

    #[test]
    fn config_failure_becomes_app_error() {
        let config_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AppError = ConfigError::from(config_error).into();
        assert!(matches!(error, AppError::Config(ConfigError::Json(_))));
        assert!(error.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn condition_displays_lowercase() {
        assert_eq!(Condition::New.to_string(), "new");
        assert_eq!(serde_json::to_string(&Condition::Used).unwrap(), "\"used\"");
    }
}
