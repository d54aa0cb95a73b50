use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CardAction, CardStateViewModel, CommandResultViewModel, FeedCardViewModel, FeedListViewModel,
    FeedStatsViewModel, Guidance, StatusBadge,
};
use relato_sdk::FeedPage;
use relato_sdk::types::{
    CardState, FeedQuery, FeedStats, ReportId, ReportWithAuthor, card_images, season_badge,
};

use super::report::country_views;

pub(crate) fn card_view(item: &ReportWithAuthor) -> FeedCardViewModel {
    let report = &item.report;
    FeedCardViewModel {
        id: report.id.to_string(),
        title: report.title.clone(),
        author_name: item.user.name.clone(),
        countries: country_views(&report.countries),
        season: report.season.map(|s| s.name().to_string()),
        season_emoji: season_badge(report.season, report.season_emoji.as_deref()).to_string(),
        child_ages_months: report.child_ages.clone(),
        locations: report.locations.clone(),
        view_count: report.view_count,
        images: card_images(report),
        created_at: report.created_at,
    }
}

fn stats_view(stats: &FeedStats) -> FeedStatsViewModel {
    FeedStatsViewModel {
        total_reports: stats.total_reports,
        distinct_countries: stats.distinct_countries,
        results: stats.results,
    }
}

pub fn present_feed(
    page: FeedPage,
    query: &FeedQuery,
) -> CommandResultViewModel<FeedListViewModel> {
    let filtered = query.text.as_deref().is_some_and(|q| !q.trim().is_empty())
        || query.season.is_some();

    let view = FeedListViewModel {
        reports: page.results.iter().map(card_view).collect(),
        stats: stats_view(&page.stats),
        query: query.text.clone(),
        season: query.season.map(|s| s.name().to_string()),
    };
    let count = view.reports.len();
    let first_id = view.reports.first().map(|r| r.id.clone());

    let mut result = CommandResultViewModel::new(view);
    if count == 0 {
        result = if filtered {
            result
                .with_badge(StatusBadge::info("No reports match the search"))
                .with_suggestion(Guidance::new("Clear the filters").with_command(cmd::FEED_LIST))
        } else {
            result
                .with_badge(StatusBadge::info("No reports yet"))
                .with_suggestion(
                    Guidance::new("Be the first to write one").with_command(cmd::REPORT_CREATE),
                )
        };
    } else {
        let label = if count == 1 {
            "1 report".to_string()
        } else {
            format!("{} reports", count)
        };
        result = result.with_badge(StatusBadge::success(label));
        if let Some(id) = first_id {
            result = result.with_suggestion(
                Guidance::new("Read the newest one").with_command(fmt::report_show(&id)),
            );
        }
    }
    result
}

pub fn present_feed_stats(stats: &FeedStats) -> CommandResultViewModel<FeedStatsViewModel> {
    CommandResultViewModel::new(stats_view(stats))
}

pub fn present_card_state(
    id: &ReportId,
    action: CardAction,
    state: CardState,
) -> CommandResultViewModel<CardStateViewModel> {
    let label = match action {
        CardAction::Like if state.liked => "Liked",
        CardAction::Like => "Like removed",
        CardAction::Save if state.saved => "Saved",
        CardAction::Save => "Removed from saved",
    };

    let mut result = CommandResultViewModel::new(CardStateViewModel {
        report_id: id.to_string(),
        action,
        liked: state.liked,
        saved: state.saved,
        like_count: state.like_count,
    })
    .with_badge(StatusBadge::success(label));

    if action == CardAction::Save && state.saved {
        result = result
            .with_suggestion(Guidance::new("All your saved reports").with_command(cmd::SAVED_LIST));
    }
    result
}
