//! TOML draft files.
//!
//! A draft file describes report fields the way a user would fill in the
//! composer. It is turned into [`ReportIntent`]s, so the composer's rules
//! (country dedup, child age parsing, fixed titles) apply unchanged.
//!
//! `countries`, `child_ages` and `locations` replace the report's lists when
//! present and leave them alone when absent, so applying the same draft to a
//! report twice gives the same report.
//!
//! ```toml
//! title = "Lisboa com crianças"
//! month = "Março"
//! season = "Primavera"
//! locations = ["Alfama", "Belém"]
//! order = ["resumo", "hospedagem", "alimentacao"]
//!
//! [[countries]]
//! code = "PT"
//! name = "Portugal"
//!
//! [[child_ages]]
//! value = 4
//! unit = "years"
//!
//! [sections.resumo]
//! content = "Dez dias entre Lisboa e Sintra."
//!
//! [sections.hospedagem]
//! visible = true
//! content = "Apartamento em Alfama."
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use relato_engine::{AgeUnit, ReportIntent, ReportList};
use relato_types::{Country, Month, SectionKey, SectionOrder, Season};
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftFile {
    pub title: Option<String>,
    pub countries: Option<Vec<Country>>,
    pub month: Option<Month>,
    pub season: Option<Season>,
    pub child_ages: Option<Vec<DraftAge>>,
    pub locations: Option<Vec<String>>,
    #[serde(default)]
    pub sections: BTreeMap<String, DraftSection>,
    /// Full section order; must be a permutation of the report's keys
    pub order: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftAge {
    pub value: AgeInput,
    #[serde(default)]
    pub unit: AgeUnit,
}

/// Age as typed: numbers and strings are both accepted and validated later
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeInput::Number(n) => write!(f, "{}", n),
            AgeInput::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftSection {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Defaults to visible when content is given
    pub visible: Option<bool>,
}

impl DraftFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidInput(format!("cannot read draft file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Intents in a fixed order: basic info, then sections, then the order
    pub fn intents(&self) -> Vec<ReportIntent> {
        let mut intents = Vec::new();

        if let Some(title) = &self.title {
            intents.push(ReportIntent::SetTitle(title.clone()));
        }
        if let Some(countries) = &self.countries {
            intents.push(ReportIntent::ClearList(ReportList::Countries));
            intents.extend(countries.iter().cloned().map(ReportIntent::AddCountry));
        }
        if self.month.is_some() {
            intents.push(ReportIntent::SelectMonth(self.month));
        }
        if self.season.is_some() {
            intents.push(ReportIntent::SelectSeason(self.season));
        }
        if let Some(ages) = &self.child_ages {
            intents.push(ReportIntent::ClearList(ReportList::ChildAges));
            intents.extend(ages.iter().map(|age| ReportIntent::AddChildAge {
                input: age.value.to_string(),
                unit: age.unit,
            }));
        }
        if let Some(locations) = &self.locations {
            intents.push(ReportIntent::ClearList(ReportList::Locations));
            intents.extend(locations.iter().cloned().map(ReportIntent::AddLocation));
        }

        for (key, section) in &self.sections {
            let key = SectionKey::from(key.as_str());
            let visible = section.visible.or(section.content.as_ref().map(|_| true));
            if let Some(visible) = visible {
                intents.push(ReportIntent::SetSectionVisible {
                    key: key.clone(),
                    visible,
                });
            }
            if let Some(title) = &section.title {
                intents.push(ReportIntent::EditSectionTitle {
                    key: key.clone(),
                    title: title.clone(),
                });
            }
            if let Some(content) = &section.content {
                intents.push(ReportIntent::EditSectionContent {
                    key,
                    content: content.clone(),
                });
            }
        }

        if let Some(order) = &self.order {
            intents.push(ReportIntent::Reorder(SectionOrder::new(
                order.iter().map(|k| SectionKey::from(k.as_str())).collect(),
            )));
        }
        intents
    }
}
