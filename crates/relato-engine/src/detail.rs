use serde::Serialize;

use relato_types::{Report, SectionKey};

use crate::feed::cover_image;
use crate::section::reconcile_order;

/// A section as shown on the detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadableSection {
    pub key: SectionKey,
    pub title: String,
    pub content: String,
    /// Section images minus the report cover
    pub gallery: Vec<String>,
}

/// Visible sections with text, in display order
pub fn readable_sections(report: &Report) -> Vec<ReadableSection> {
    let cover = cover_image(report);
    reconcile_order(&report.sections, &report.section_order)
        .iter()
        .filter_map(|key| {
            let section = report.sections.get(key.as_str())?;
            if !section.visible || section.content.trim().is_empty() {
                return None;
            }
            Some(ReadableSection {
                key: key.clone(),
                title: section.title.clone(),
                content: section.content.clone(),
                gallery: section
                    .images
                    .iter()
                    .filter(|url| Some(url.as_str()) != cover)
                    .cloned()
                    .collect(),
            })
        })
        .collect()
}
