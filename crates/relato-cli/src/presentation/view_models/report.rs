use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateViewModel {
    pub sections: Vec<TemplateSectionViewModel>,
    pub min_completed_sections: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSectionViewModel {
    pub key: String,
    pub title: String,
    pub visible: bool,
    /// Title cannot be renamed
    pub fixed: bool,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftSavedViewModel {
    pub id: String,
    pub created: bool,
    pub ignored: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryViewModel {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorViewModel {
    pub id: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadableSectionViewModel {
    pub key: String,
    pub title: String,
    pub content: String,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDetailViewModel {
    pub id: String,
    pub title: String,
    pub author: AuthorViewModel,
    pub countries: Vec<CountryViewModel>,
    pub month: Option<String>,
    pub season: Option<String>,
    pub season_emoji: String,
    pub child_ages_months: Vec<u32>,
    pub locations: Vec<String>,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    pub cover: Option<String>,
    pub sections: Vec<ReadableSectionViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderRowViewModel {
    pub position: usize,
    pub key: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveSummary {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderViewModel {
    pub report_id: String,
    pub rows: Vec<OrderRowViewModel>,
    /// Set when there is nothing to reorder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moved: Option<MoveSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageAttachedViewModel {
    pub report_id: String,
    pub section: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageRemovedViewModel {
    pub report_id: String,
    pub section: String,
    pub remaining: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryRemovedViewModel {
    pub report_id: String,
    pub list: String,
    pub index: usize,
    /// What is left in the list, in display form
    pub remaining: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDeletedViewModel {
    pub id: String,
}
