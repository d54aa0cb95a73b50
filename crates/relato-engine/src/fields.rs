use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use relato_types::Country;

use crate::{Error, Result};

/// Largest value accepted for a child age, in the unit it was entered in
pub const MAX_CHILD_AGE_INPUT: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    #[default]
    Years,
    Months,
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeUnit::Years => write!(f, "years"),
            AgeUnit::Months => write!(f, "months"),
        }
    }
}

impl FromStr for AgeUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "years" | "year" | "y" | "anos" => Ok(AgeUnit::Years),
            "months" | "month" | "m" | "meses" => Ok(AgeUnit::Months),
            other => Err(format!("unknown age unit: {}", other)),
        }
    }
}

/// Ancillary lists of a report, edited one entry at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportList {
    Countries,
    ChildAges,
    Locations,
}

impl ReportList {
    pub fn label(&self) -> &'static str {
        match self {
            ReportList::Countries => "countries",
            ReportList::ChildAges => "child ages",
            ReportList::Locations => "locations",
        }
    }
}

impl fmt::Display for ReportList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Child age in months, or `None` when the input is not a whole number in `[0, 200]`.
pub fn parse_child_age(input: &str, unit: AgeUnit) -> Option<u32> {
    let value: u32 = input.trim().parse().ok()?;
    if value > MAX_CHILD_AGE_INPUT {
        return None;
    }
    Some(match unit {
        AgeUnit::Years => value * 12,
        AgeUnit::Months => value,
    })
}

/// Append unless a country with the same code is already listed
pub fn add_country(countries: &mut Vec<Country>, country: Country) -> bool {
    if countries.iter().any(|c| c.code == country.code) {
        return false;
    }
    countries.push(country);
    true
}

/// Append the trimmed location unless it is empty or already listed
pub fn add_location(locations: &mut Vec<String>, location: &str) -> bool {
    let location = location.trim();
    if location.is_empty() || locations.iter().any(|l| l == location) {
        return false;
    }
    locations.push(location.to_string());
    true
}

pub fn remove_at<T>(items: &mut Vec<T>, index: usize, list: &'static str) -> Result<T> {
    if index >= items.len() {
        return Err(Error::IndexOutOfRange {
            list,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}
