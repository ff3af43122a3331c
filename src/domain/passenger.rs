use crate::utils::error::{Result, ServeError};
use std::fmt::Display;
use std::str::FromStr;

/// Column order the model was trained with. Rows handed to a
/// [`Classifier`](crate::domain::ports::Classifier) must follow it.
pub const FEATURE_NAMES: [&str; 5] = ["Pclass", "Age", "SibSp", "Parch", "Fare"];

pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// One passenger feature row, built fresh per request from raw form
/// strings and discarded after the response is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub pclass: i64,
    pub age: f64,
    pub sib_sp: i64,
    pub parch: i64,
    pub fare: f64,
}

impl Passenger {
    /// Parse the five raw form values. Each failure names the offending
    /// field and value so the 400 body is actionable.
    pub fn from_fields(
        pclass: &str,
        age: &str,
        sib_sp: &str,
        parch: &str,
        fare: &str,
    ) -> Result<Self> {
        Ok(Self {
            pclass: parse_field("Pclass", pclass)?,
            age: parse_field("Age", age)?,
            sib_sp: parse_field("SibSp", sib_sp)?,
            parch: parse_field("Parch", parch)?,
            fare: parse_field("Fare", fare)?,
        })
    }

    /// Flatten into the fixed column order.
    pub fn to_row(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pclass as f64,
            self.age,
            self.sib_sp as f64,
            self.parch as f64,
            self.fare,
        ]
    }
}

fn parse_field<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ServeError::InvalidInput {
        field: field.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
