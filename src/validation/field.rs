//! Per-field numeric validation.

use std::fmt;

use thiserror::Error;

/// Numeric parameters a user types in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    MaxScore,
    Sigma,
}

impl Field {
    /// The kind of number this field holds.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::MaxScore => FieldKind::Integer,
            Field::Sigma => FieldKind::Float,
        }
    }

    /// Parses a CLI field name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "max-score" | "max_score" => Some(Field::MaxScore),
            "sigma" => Some(Field::Sigma),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::MaxScore => f.write_str("Max score"),
            Field::Sigma => f.write_str("Sigma"),
        }
    }
}

/// Whether a field accepts whole numbers or reals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Integer,
    Float,
}

/// A successfully validated number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue {
    Integer(u32),
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Why a field's text is not a usable number.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("value is blank")]
    Blank,

    #[error("'{0}' is not a whole number")]
    NotInteger(String),

    #[error("'{0}' is not a number")]
    NotFloat(String),

    #[error("'{0}' is negative")]
    Negative(String),

    #[error("'{0}' is not finite")]
    NotFinite(String),
}

/// Validates the complete text of a numeric field.
pub fn validate_field(text: &str, kind: FieldKind) -> Result<FieldValue, ValidationError> {
    match kind {
        FieldKind::Integer => parse_integer(text).map(FieldValue::Integer),
        FieldKind::Float => parse_float(text).map(FieldValue::Float),
    }
}

/// Decides whether an edit may be applied to a field while typing.
///
/// Blank text is allowed so a field can be cleared and retyped; anything
/// else must already be a valid value. Blank fields are caught later by
/// [`super::preflight`].
pub fn accepts_edit(text: &str, kind: FieldKind) -> bool {
    text.trim().is_empty() || validate_field(text, kind).is_ok()
}

pub(crate) fn parse_integer(text: &str) -> Result<u32, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank);
    }

    trimmed.parse::<u32>().map_err(|_| {
        if trimmed.parse::<i64>().is_ok_and(|v| v < 0) {
            ValidationError::Negative(trimmed.to_string())
        } else {
            ValidationError::NotInteger(trimmed.to_string())
        }
    })
}

pub(crate) fn parse_float(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank);
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ValidationError::NotFloat(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::Negative(trimmed.to_string()));
    }
    // Normalise -0.0.
    Ok(value.abs())
}
