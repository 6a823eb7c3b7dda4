//! Field-level validation of an article draft.
//!
//! Messages are the French strings shown beneath each input.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{DESCRIPTION_MAX, DESCRIPTION_MIN, TITLE_MAX, TITLE_MIN};

/// An editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
}

impl Field {
    /// Wire and form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "titre",
            Field::Description => "description",
        }
    }

    pub fn min_len(self) -> usize {
        match self {
            Field::Title => TITLE_MIN,
            Field::Description => DESCRIPTION_MIN,
        }
    }

    pub fn max_len(self) -> usize {
        match self {
            Field::Title => TITLE_MAX,
            Field::Description => DESCRIPTION_MAX,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    RequiredField,
    TooShort { min: usize },
}

/// A rejected field together with its reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub error: FieldError,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.field, self.error) {
            (Field::Title, FieldError::RequiredField) => write!(f, "Le titre est requis"),
            (Field::Title, FieldError::TooShort { min }) => {
                write!(f, "Le titre doit contenir au moins {min} caractères")
            }
            (Field::Description, FieldError::RequiredField) => {
                write!(f, "La description est requise")
            }
            (Field::Description, FieldError::TooShort { min }) => {
                write!(f, "La description doit contenir au moins {min} caractères")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Length in Unicode scalar values.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate one field value.
///
/// Blank (empty or whitespace-only) is `RequiredField`. Otherwise the raw,
/// untrimmed length is compared against the field minimum.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::RequiredField);
    }
    let min = field.min_len();
    if char_len(value) < min {
        return Err(FieldError::TooShort { min });
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), FieldError> {
    validate_field(Field::Title, title)
}

pub fn validate_description(description: &str) -> Result<(), FieldError> {
    validate_field(Field::Description, description)
}

/// Per-field errors of a form. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Drop the error for `field`, leaving the others untouched.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Inline message for `field`, if it has an error.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field)
            .map(|error| ValidationError { field, error }.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.errors
            .iter()
            .map(|(field, error)| ValidationError {
                field: *field,
                error: *error,
            })
    }
}

/// Validate both fields at once. Never partial: every field is checked.
pub fn validate(title: &str, description: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(error) = validate_title(title) {
        errors.insert(Field::Title, error);
    }
    if let Err(error) = validate_description(description) {
        errors.insert(Field::Description, error);
    }
    errors
}
