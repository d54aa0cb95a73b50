use chrono::{DateTime, Utc};
use serde::Serialize;

use super::auth::UserViewModel;
use super::feed::FeedCardViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileViewModel {
    pub user: UserViewModel,
    pub reports: Vec<FeedCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedEntryViewModel {
    pub saved_at: DateTime<Utc>,
    pub report: FeedCardViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedListViewModel {
    pub entries: Vec<SavedEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarViewModel {
    pub url: String,
}
