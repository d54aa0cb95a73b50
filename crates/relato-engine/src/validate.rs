use serde::Serialize;

use relato_types::Report;

use crate::ValidationError;
use crate::section::count_filled;

/// Check a report can be persisted. Runs before any gateway call.
pub fn validate_for_save(report: &Report, min_sections: usize) -> Result<(), ValidationError> {
    let completed = count_filled(&report.sections);
    if completed < min_sections {
        return Err(ValidationError::TooFewSections {
            completed,
            required: min_sections,
        });
    }
    Ok(())
}

/// Composer header counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposerProgress {
    pub filled_sections: usize,
    pub required_sections: usize,
    pub countries: usize,
    /// Title, at least one country and a month
    pub basic_info_complete: bool,
    pub ready_to_save: bool,
}

impl ComposerProgress {
    pub fn of(report: &Report, min_sections: usize) -> Self {
        let filled_sections = count_filled(&report.sections);
        Self {
            filled_sections,
            required_sections: min_sections,
            countries: report.countries.len(),
            basic_info_complete: !report.title.trim().is_empty()
                && !report.countries.is_empty()
                && report.month.is_some(),
            ready_to_save: filled_sections >= min_sections,
        }
    }
}
