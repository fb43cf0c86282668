use std::fmt;

use thiserror::Error;

/// A single constraint violation, tagged with the JSON-pointer style path of
/// the offending value (e.g. `/data/28/times/0/1`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("expected an object")]
    ExpectedObject,

    #[error("expected an array")]
    ExpectedArray,

    #[error("expected a string")]
    ExpectedString,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("must not be empty")]
    Empty,

    #[error("time slot must be a [range, content] pair")]
    MalformedSlot,

    #[error("slot content must be a label or a list of workshops")]
    InvalidContent,

    #[error("at least one workshop is required")]
    EmptyWorkshopList,

    #[error("at least one time slot is required")]
    EmptyTimes,

    #[error("missing day '{0}'")]
    MissingDay(String),

    #[error("unexpected day '{0}'")]
    UnexpectedDay(String),
}

/// Every violation found in one validation pass.
///
/// Validation walks the whole structure and reports all failures, so
/// independent problems in different branches surface together rather than
/// one run at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schedule validation failed with {} error(s)", self.len())?;
        for error in &self.errors {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Errors from the date-range formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date '{0}': expected dd-mm-yyyy")]
    InvalidFormat(String),
}
