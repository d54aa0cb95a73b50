use std::fmt;

use relato_types::{Country, Month, Report, Season, Section, SectionKey, SectionOrder};

use crate::fields::{self, AgeUnit, ReportList};
use crate::order::drag;
use crate::section::{reconcile_order, reorder, update_section};
use crate::{Error, Result};

/// A single edit to a report, emitted by a field or section editor.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportIntent {
    SetTitle(String),
    AddCountry(Country),
    RemoveCountry(usize),
    SelectMonth(Option<Month>),
    /// Also sets the season emoji
    SelectSeason(Option<Season>),
    AddChildAge { input: String, unit: AgeUnit },
    RemoveChildAge(usize),
    AddLocation(String),
    RemoveLocation(usize),
    /// Empty one list so a full replacement can be added entry by entry
    ClearList(ReportList),
    UpdateSection { key: SectionKey, section: Section },
    EditSectionTitle { key: SectionKey, title: String },
    EditSectionContent { key: SectionKey, content: String },
    SetSectionVisible { key: SectionKey, visible: bool },
    AppendSectionImage { key: SectionKey, url: String },
    RemoveSectionImage { key: SectionKey, index: usize },
    Reorder(SectionOrder),
    MoveSection { from: usize, to: usize },
}

impl ReportIntent {
    /// Removal of the entry at `index` in `list`
    pub fn remove_entry(list: ReportList, index: usize) -> Self {
        match list {
            ReportList::Countries => ReportIntent::RemoveCountry(index),
            ReportList::ChildAges => ReportIntent::RemoveChildAge(index),
            ReportList::Locations => ReportIntent::RemoveLocation(index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    DuplicateCountry,
    EmptyLocation,
    DuplicateLocation,
    InvalidChildAge,
    FixedTitle,
    SamePosition,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            IgnoreReason::DuplicateCountry => "country already added",
            IgnoreReason::EmptyLocation => "location is empty",
            IgnoreReason::DuplicateLocation => "location already added",
            IgnoreReason::InvalidChildAge => "child age must be a whole number between 0 and 200",
            IgnoreReason::FixedTitle => "the title of a fixed section cannot be changed",
            IgnoreReason::SamePosition => "section is already at that position",
        };
        write!(f, "{}", msg)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed)
    }
}

fn changed_if(changed: bool, reason: IgnoreReason) -> Outcome {
    if changed {
        Outcome::Changed
    } else {
        Outcome::Ignored(reason)
    }
}

/// Apply one intent. On `Err` the report is unchanged.
pub fn apply(report: &mut Report, intent: ReportIntent) -> Result<Outcome> {
    match intent {
        ReportIntent::SetTitle(title) => {
            report.title = title;
            Ok(Outcome::Changed)
        }
        ReportIntent::AddCountry(country) => Ok(changed_if(
            fields::add_country(&mut report.countries, country),
            IgnoreReason::DuplicateCountry,
        )),
        ReportIntent::RemoveCountry(index) => {
            fields::remove_at(&mut report.countries, index, ReportList::Countries.label())?;
            Ok(Outcome::Changed)
        }
        ReportIntent::SelectMonth(month) => {
            report.month = month;
            Ok(Outcome::Changed)
        }
        ReportIntent::SelectSeason(season) => {
            report.season = season;
            report.season_emoji = season.map(|s| s.emoji().to_string());
            Ok(Outcome::Changed)
        }
        ReportIntent::AddChildAge { input, unit } => {
            match fields::parse_child_age(&input, unit) {
                Some(months) => {
                    report.child_ages.push(months);
                    Ok(Outcome::Changed)
                }
                None => Ok(Outcome::Ignored(IgnoreReason::InvalidChildAge)),
            }
        }
        ReportIntent::RemoveChildAge(index) => {
            fields::remove_at(&mut report.child_ages, index, ReportList::ChildAges.label())?;
            Ok(Outcome::Changed)
        }
        ReportIntent::AddLocation(location) => {
            if location.trim().is_empty() {
                return Ok(Outcome::Ignored(IgnoreReason::EmptyLocation));
            }
            Ok(changed_if(
                fields::add_location(&mut report.locations, &location),
                IgnoreReason::DuplicateLocation,
            ))
        }
        ReportIntent::RemoveLocation(index) => {
            fields::remove_at(&mut report.locations, index, ReportList::Locations.label())?;
            Ok(Outcome::Changed)
        }
        ReportIntent::ClearList(list) => {
            match list {
                ReportList::Countries => report.countries.clear(),
                ReportList::ChildAges => report.child_ages.clear(),
                ReportList::Locations => report.locations.clear(),
            }
            Ok(Outcome::Changed)
        }
        ReportIntent::UpdateSection { key, section } => {
            update_section(report, key.as_str(), section)?;
            Ok(Outcome::Changed)
        }
        ReportIntent::EditSectionTitle { key, title } => {
            let section = section_mut(report, &key)?;
            if section.fixed {
                return Ok(Outcome::Ignored(IgnoreReason::FixedTitle));
            }
            section.title = title;
            Ok(Outcome::Changed)
        }
        ReportIntent::EditSectionContent { key, content } => {
            section_mut(report, &key)?.content = content;
            Ok(Outcome::Changed)
        }
        ReportIntent::SetSectionVisible { key, visible } => {
            section_mut(report, &key)?.visible = visible;
            Ok(Outcome::Changed)
        }
        ReportIntent::AppendSectionImage { key, url } => {
            section_mut(report, &key)?.images.push(url);
            Ok(Outcome::Changed)
        }
        ReportIntent::RemoveSectionImage { key, index } => {
            let section = section_mut(report, &key)?;
            let url = fields::remove_at(&mut section.images, index, "section images")?;
            // The removed image must not survive as cover or card image
            if report.resumo_image.as_deref() == Some(url.as_str()) {
                report.resumo_image = None;
            }
            if let Some(images) = report.images.as_mut() {
                images.retain(|image| *image != url);
            }
            Ok(Outcome::Changed)
        }
        ReportIntent::Reorder(order) => {
            reorder(report, order)?;
            Ok(Outcome::Changed)
        }
        ReportIntent::MoveSection { from, to } => {
            let current = reconcile_order(&report.sections, &report.section_order);
            match drag(&current, from, to)? {
                Some(order) => {
                    report.section_order = order;
                    Ok(Outcome::Changed)
                }
                None => Ok(Outcome::Ignored(IgnoreReason::SamePosition)),
            }
        }
    }
}

fn section_mut<'a>(report: &'a mut Report, key: &SectionKey) -> Result<&'a mut Section> {
    report
        .sections
        .get_mut(key.as_str())
        .ok_or_else(|| Error::UnknownSection(key.clone()))
}
