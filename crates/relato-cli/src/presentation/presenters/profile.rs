use crate::args::hints::cmd;
use crate::presentation::view_models::{
    AvatarViewModel, CommandResultViewModel, Guidance, ProfileViewModel, SavedEntryViewModel,
    SavedListViewModel, StatusBadge,
};
use relato_sdk::ProfileSummary;
use relato_sdk::types::SavedReport;

use super::auth::user_view;
use super::feed::card_view;

pub fn present_profile(summary: ProfileSummary) -> CommandResultViewModel<ProfileViewModel> {
    let view = ProfileViewModel {
        user: user_view(&summary.user),
        reports: summary.reports.iter().map(card_view).collect(),
    };

    let mut result = CommandResultViewModel::new(view);
    if result.content.reports.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Write your first report").with_command(cmd::REPORT_CREATE),
        );
    }
    if result.content.user.avatar_url.is_none() {
        result = result
            .with_suggestion(Guidance::new("Add a profile photo").with_command(cmd::PROFILE_AVATAR));
    }
    result
}

pub fn present_saved(saved: Vec<SavedReport>) -> CommandResultViewModel<SavedListViewModel> {
    let entries: Vec<_> = saved
        .iter()
        .map(|s| SavedEntryViewModel {
            saved_at: s.created_at,
            report: card_view(&s.relato),
        })
        .collect();

    if entries.is_empty() {
        CommandResultViewModel::new(SavedListViewModel { entries })
            .with_badge(StatusBadge::info("No saved reports"))
            .with_suggestion(Guidance::new("Find reports to save").with_command(cmd::FEED_LIST))
    } else {
        let label = format!("{} saved", entries.len());
        CommandResultViewModel::new(SavedListViewModel { entries })
            .with_badge(StatusBadge::success(label))
    }
}

pub fn present_avatar(url: String) -> CommandResultViewModel<AvatarViewModel> {
    CommandResultViewModel::new(AvatarViewModel { url })
        .with_badge(StatusBadge::success("Profile photo updated"))
}
