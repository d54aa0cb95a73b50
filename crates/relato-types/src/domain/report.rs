use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ids::{ReportId, UserId};
use super::section::{SectionOrder, SectionSet};
use crate::Error;

/// Country visited during the trip (ISO 3166 alpha-2 code plus display name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Travel month, persisted by its Portuguese name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    #[serde(rename = "Janeiro")]
    January,
    #[serde(rename = "Fevereiro")]
    February,
    #[serde(rename = "Março")]
    March,
    #[serde(rename = "Abril")]
    April,
    #[serde(rename = "Maio")]
    May,
    #[serde(rename = "Junho")]
    June,
    #[serde(rename = "Julho")]
    July,
    #[serde(rename = "Agosto")]
    August,
    #[serde(rename = "Setembro")]
    September,
    #[serde(rename = "Outubro")]
    October,
    #[serde(rename = "Novembro")]
    November,
    #[serde(rename = "Dezembro")]
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "Janeiro",
            Month::February => "Fevereiro",
            Month::March => "Março",
            Month::April => "Abril",
            Month::May => "Maio",
            Month::June => "Junho",
            Month::July => "Julho",
            Month::August => "Agosto",
            Month::September => "Setembro",
            Month::October => "Outubro",
            Month::November => "Novembro",
            Month::December => "Dezembro",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_accents(s.trim());
        Month::ALL
            .into_iter()
            .find(|m| fold_accents(m.name()) == wanted)
            .ok_or_else(|| Error::InvalidValue {
                kind: "month",
                value: s.to_string(),
            })
    }
}

/// Travel season, persisted by its Portuguese name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    #[serde(rename = "Primavera")]
    Spring,
    #[serde(rename = "Verão")]
    Summer,
    #[serde(rename = "Outono")]
    Autumn,
    #[serde(rename = "Inverno")]
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Primavera",
            Season::Summer => "Verão",
            Season::Autumn => "Outono",
            Season::Winter => "Inverno",
        }
    }

    /// Emoji stored alongside the season when it is picked
    pub fn emoji(&self) -> &'static str {
        match self {
            Season::Spring => "🌸",
            Season::Summer => "☀️",
            Season::Autumn => "🍁",
            Season::Winter => "❄️",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_accents(s.trim());
        Season::ALL
            .into_iter()
            .find(|season| fold_accents(season.name()) == wanted)
            .ok_or_else(|| Error::InvalidValue {
                kind: "season",
                value: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// Lowercase and strip the Portuguese diacritics used by month/season names
fn fold_accents(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

// Older rows store "" for unset month/season/emoji
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) if !value.trim().is_empty() => {
            value.parse().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// Report aggregate ("relato"), field names match the persisted row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub title: String,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub month: Option<Month>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub season: Option<Season>,
    #[serde(rename = "emojiseason", default, deserialize_with = "blank_as_none")]
    pub season_emoji: Option<String>,
    /// Child ages in months
    #[serde(default)]
    pub child_ages: Vec<u32>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "categories")]
    pub sections: SectionSet,
    #[serde(rename = "categories_order", default)]
    pub section_order: SectionOrder,
    /// Legacy visibility map, carried through unchanged
    #[serde(default)]
    pub visibility: BTreeMap<String, bool>,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resumo_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Public author projection joined from `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Report joined with its author, as returned by feed and detail reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportWithAuthor {
    #[serde(flatten)]
    pub report: Report,
    pub user: Author,
}

/// Row of `relatos_guardados` with the saved report attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedReport {
    pub id: uuid::Uuid,
    pub created_at: DateTime<Utc>,
    pub relato: ReportWithAuthor,
}
