//! Dog listing filters.
//!
//! [`DogFilters`] is the raw query string; [`compose`] turns it into a
//! declarative [`DogQuery`] that the repository layer renders to SQL.
//! Birth-date bounds compare by year only: `birth_date_gte=2013` matches any
//! dog born in 2013 or later, regardless of month and day.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::CoreError;

/// Query parameters for `GET /dogs`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DogFilters {
    pub breed: Option<String>,
    pub estimated_adult_size: Option<String>,
    pub birth_date_gte: Option<String>,
    pub birth_date_lte: Option<String>,
}

/// Conjunction of constraints on the dog catalog. `None` = unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogQuery {
    pub breed: Option<String>,
    pub estimated_adult_size: Option<String>,
    pub min_birth_year: Option<i32>,
    pub max_birth_year: Option<i32>,
}

impl DogQuery {
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluate the query against a single record.
    pub fn matches(&self, breed: &str, estimated_adult_size: &str, birth_date: NaiveDate) -> bool {
        let year = birth_date.year();
        self.breed.as_deref().map_or(true, |b| b == breed)
            && self
                .estimated_adult_size
                .as_deref()
                .map_or(true, |s| s == estimated_adult_size)
            && self.min_birth_year.map_or(true, |min| year >= min)
            && self.max_birth_year.map_or(true, |max| year <= max)
    }
}

/// Build a [`DogQuery`] from raw filters.
///
/// Empty values are treated as absent, matching how browsers submit blank
/// form fields.
pub fn compose(filters: &DogFilters) -> Result<DogQuery, CoreError> {
    Ok(DogQuery {
        breed: non_empty(filters.breed.as_deref()),
        estimated_adult_size: non_empty(filters.estimated_adult_size.as_deref()),
        min_birth_year: non_empty(filters.birth_date_gte.as_deref())
            .map(|v| parse_year("birth_date_gte", &v))
            .transpose()?,
        max_birth_year: non_empty(filters.birth_date_lte.as_deref())
            .map(|v| parse_year("birth_date_lte", &v))
            .transpose()?,
    })
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Accept a bare year (`2013`) or an ISO date (`2013-06-01`, year kept).
fn parse_year(param: &str, value: &str) -> Result<i32, CoreError> {
    if let Ok(year) = value.parse::<i32>() {
        return Ok(year);
    }
    value.parse::<NaiveDate>().map(|d| d.year()).map_err(|_| {
        CoreError::Validation(format!(
            "{param} must be a year or a YYYY-MM-DD date, got '{value}'"
        ))
    })
}
