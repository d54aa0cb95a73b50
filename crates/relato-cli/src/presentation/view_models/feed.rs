use chrono::{DateTime, Utc};
use serde::Serialize;

use super::report::CountryViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct FeedCardViewModel {
    pub id: String,
    pub title: String,
    pub author_name: Option<String>,
    pub countries: Vec<CountryViewModel>,
    pub season: Option<String>,
    pub season_emoji: String,
    pub child_ages_months: Vec<u32>,
    pub locations: Vec<String>,
    pub view_count: u64,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedStatsViewModel {
    pub total_reports: usize,
    pub distinct_countries: usize,
    pub results: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedListViewModel {
    pub reports: Vec<FeedCardViewModel>,
    pub stats: FeedStatsViewModel,
    pub query: Option<String>,
    pub season: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAction {
    Like,
    Save,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardStateViewModel {
    pub report_id: String,
    pub action: CardAction,
    pub liked: bool,
    pub saved: bool,
    pub like_count: u64,
}
