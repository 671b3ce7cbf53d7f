//! Dog record validation.
//!
//! A [`DogPayload`] is the loosely typed shape clients submit. [`validate_dog`]
//! checks every field independently, collects all violations, and on success
//! produces a [`ValidDog`] with typed enums and parsed dates. Only a
//! `ValidDog` can be written to the catalog.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::breeds::BreedCatalog;
use crate::error::{CoreError, FieldViolation};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Name assigned when a payload omits `name`.
pub const DEFAULT_NAME: &str = "Unnamed";

/// The only image host accepted for `picture`.
pub const PICTURE_PREFIX: &str = "https://i.imgur.com/";

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 400;
pub const PICTURE_MAX_LEN: usize = 200;

/// Dates before January 1st of this year are rejected.
pub const EARLIEST_YEAR: i32 = 1980;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").expect("valid regex"));

static DESCRIPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9,;. \-\t?!]*$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected size of the dog once fully grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdultSize {
    #[serde(rename = "XS")]
    ExtraSmall,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
    #[serde(rename = "XL")]
    ExtraLarge,
}

impl AdultSize {
    pub const ALL: [Self; 5] = [
        Self::ExtraSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == code)
    }
}

impl fmt::Display for AdultSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payload / validated record
// ---------------------------------------------------------------------------

/// Dog fields as submitted by a client.
///
/// Everything is optional so that a missing field becomes a field violation
/// rather than a deserialization failure. Unknown keys (including `id`) are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DogPayload {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub entry_date: Option<String>,
    pub neutered: Option<bool>,
    pub description: Option<String>,
    pub estimated_adult_size: Option<String>,
    pub picture: Option<String>,
}

impl DogPayload {
    /// Read a payload out of an arbitrary JSON body.
    ///
    /// Absent and `null` fields become `None`. A field of the wrong JSON type
    /// is reported as a `type` violation alongside the others, so a body such
    /// as `{"neutered": "yes"}` fails validation instead of deserialization.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, CoreError> {
        let Some(object) = value.as_object() else {
            return Err(CoreError::Validation(
                "Dog payload must be a JSON object".to_string(),
            ));
        };

        let mut violations = Vec::new();
        let mut text = |field: &'static str| match object.get(field) {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(_) => {
                violations.push(FieldViolation::new(
                    field,
                    "type",
                    format!("{field} must be a string"),
                ));
                None
            }
        };

        let payload = Self {
            name: text("name"),
            breed: text("breed"),
            sex: text("sex"),
            birth_date: text("birth_date"),
            entry_date: text("entry_date"),
            neutered: None,
            description: text("description"),
            estimated_adult_size: text("estimated_adult_size"),
            picture: text("picture"),
        };

        let neutered = match object.get("neutered") {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Bool(b)) => Some(*b),
            Some(_) => {
                violations.push(FieldViolation::new(
                    "neutered",
                    "type",
                    "neutered must be a boolean",
                ));
                None
            }
        };

        if !violations.is_empty() {
            return Err(CoreError::InvalidFields(violations));
        }
        Ok(Self { neutered, ..payload })
    }
}

/// A dog record that passed every rule in [`validate_dog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDog {
    pub name: String,
    pub breed: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub entry_date: NaiveDate,
    pub neutered: bool,
    pub description: String,
    pub estimated_adult_size: AdultSize,
    pub picture: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a payload against today's local date (read once for the whole call).
pub fn validate_dog_now(
    payload: &DogPayload,
    breeds: &BreedCatalog,
) -> Result<ValidDog, CoreError> {
    validate_dog(payload, breeds, chrono::Local::now().date_naive())
}

/// Validate every field of `payload`, collecting all violations.
///
/// The `entry_date >= birth_date` rule only runs when both dates parsed and
/// passed their own range checks.
pub fn validate_dog(
    payload: &DogPayload,
    breeds: &BreedCatalog,
    today: NaiveDate,
) -> Result<ValidDog, CoreError> {
    let mut violations = Vec::new();

    let name = payload.name.as_deref().unwrap_or(DEFAULT_NAME);
    check_name(name, &mut violations);

    let breed = payload.breed.as_deref();
    match breed {
        None => violations.push(required("breed")),
        Some(b) if !breeds.contains(b) => violations.push(FieldViolation::new(
            "breed",
            "choice",
            format!("'{b}' is not a known breed"),
        )),
        Some(_) => {}
    }

    let sex = match payload.sex.as_deref() {
        None => {
            violations.push(required("sex"));
            None
        }
        Some(code) => {
            let sex = Sex::from_code(code);
            if sex.is_none() {
                violations.push(FieldViolation::new(
                    "sex",
                    "choice",
                    format!("'{code}' is not a valid sex. Must be one of: M, F"),
                ));
            }
            sex
        }
    };

    let birth_date = check_date("birth_date", payload.birth_date.as_deref(), today, &mut violations);
    let entry_date = check_date("entry_date", payload.entry_date.as_deref(), today, &mut violations);

    if let (Some(birth), Some(entry)) = (birth_date, entry_date) {
        if entry < birth {
            violations.push(FieldViolation::new(
                "entry_date",
                "after_birth_date",
                "Entry date must be after birth date",
            ));
        }
    }

    if payload.neutered.is_none() {
        violations.push(required("neutered"));
    }

    let description = payload.description.as_deref().unwrap_or("");
    check_description(description, &mut violations);

    let size = match payload.estimated_adult_size.as_deref() {
        None => {
            violations.push(required("estimated_adult_size"));
            None
        }
        Some(code) => {
            let size = AdultSize::from_code(code);
            if size.is_none() {
                violations.push(FieldViolation::new(
                    "estimated_adult_size",
                    "choice",
                    format!("'{code}' is not a valid size. Must be one of: XS, S, M, L, XL"),
                ));
            }
            size
        }
    };

    let picture = payload.picture.as_deref().unwrap_or("");
    check_picture(picture, &mut violations);

    match (breed, sex, birth_date, entry_date, payload.neutered, size) {
        (Some(breed), Some(sex), Some(birth_date), Some(entry_date), Some(neutered), Some(size))
            if violations.is_empty() =>
        {
            Ok(ValidDog {
                name: name.to_string(),
                breed: breed.to_string(),
                sex,
                birth_date,
                entry_date,
                neutered,
                description: description.to_string(),
                estimated_adult_size: size,
                picture: picture.to_string(),
            })
        }
        _ => Err(CoreError::InvalidFields(violations)),
    }
}

fn required(field: &'static str) -> FieldViolation {
    FieldViolation::new(field, "required", format!("{field} is required"))
}

fn check_name(name: &str, violations: &mut Vec<FieldViolation>) {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        violations.push(FieldViolation::new(
            "name",
            "length",
            format!("Name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
        ));
    }
    if !NAME_RE.is_match(name) {
        violations.push(FieldViolation::new(
            "name",
            "pattern",
            "Dog name cannot contain invalid characters and must only have an uppercase \
             character at the start",
        ));
    }
}

/// Parse and range-check a date. Returns the date only if it is fully valid.
fn check_date(
    field: &'static str,
    raw: Option<&str>,
    today: NaiveDate,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let Some(raw) = raw else {
        violations.push(required(field));
        return None;
    };

    let Ok(date) = raw.parse::<NaiveDate>() else {
        violations.push(FieldViolation::new(
            field,
            "format",
            format!("'{raw}' is not a valid date (expected YYYY-MM-DD)"),
        ));
        return None;
    };

    if date.year() < EARLIEST_YEAR {
        violations.push(FieldViolation::new(
            field,
            "min_date",
            format!("Date must be after year {}", EARLIEST_YEAR - 1),
        ));
        return None;
    }
    if date > today {
        violations.push(FieldViolation::new(field, "max_date", "Date must be at most today"));
        return None;
    }

    Some(date)
}

fn check_description(description: &str, violations: &mut Vec<FieldViolation>) {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        violations.push(FieldViolation::new(
            "description",
            "max_length",
            format!("Description must be at most {DESCRIPTION_MAX_LEN} characters"),
        ));
    }
    if !DESCRIPTION_RE.is_match(description) {
        violations.push(FieldViolation::new(
            "description",
            "pattern",
            "Dog description cannot contain invalid characters",
        ));
    }
}

fn check_picture(picture: &str, violations: &mut Vec<FieldViolation>) {
    if picture.chars().count() > PICTURE_MAX_LEN {
        violations.push(FieldViolation::new(
            "picture",
            "max_length",
            format!("Picture url must be at most {PICTURE_MAX_LEN} characters"),
        ));
    }
    if !picture.is_empty() && !picture.starts_with(PICTURE_PREFIX) {
        violations.push(FieldViolation::new(
            "picture",
            "prefix",
            format!("Image must have prefix {PICTURE_PREFIX}"),
        ));
    }
}
