use std::collections::HashSet;

use serde::Serialize;

use relato_types::{Report, ReportWithAuthor, SUMMARY_KEY, Season};

/// In-memory feed filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub text: Option<String>,
    pub season: Option<Season>,
}

impl FeedQuery {
    pub fn new(text: Option<String>, season: Option<Season>) -> Self {
        Self { text, season }
    }

    pub fn matches(&self, item: &ReportWithAuthor) -> bool {
        if let Some(season) = self.season
            && item.report.season != Some(season)
        {
            return false;
        }

        match self.text.as_deref() {
            Some(text) if !text.trim().is_empty() => matches_text(item, &text.to_lowercase()),
            _ => true,
        }
    }
}

fn matches_text(item: &ReportWithAuthor, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    let report = &item.report;

    hit(&report.title)
        || item.user.name.as_deref().is_some_and(hit)
        || report.countries.iter().any(|c| hit(&c.name))
        || report.locations.iter().any(|l| hit(l))
}

pub fn filter_reports<'a>(
    reports: &'a [ReportWithAuthor],
    query: &FeedQuery,
) -> Vec<&'a ReportWithAuthor> {
    reports.iter().filter(|r| query.matches(r)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    pub total_reports: usize,
    pub distinct_countries: usize,
    pub results: usize,
}

impl FeedStats {
    /// `results` is the size of the filtered list; the rest covers everything fetched.
    pub fn compute(all: &[ReportWithAuthor], results: usize) -> Self {
        let countries: HashSet<&str> = all
            .iter()
            .flat_map(|r| r.report.countries.iter().map(|c| c.name.as_str()))
            .collect();
        Self {
            total_reports: all.len(),
            distinct_countries: countries.len(),
            results,
        }
    }
}

/// Summary images first, then the denormalized list, no duplicates or blanks.
pub fn card_images(report: &Report) -> Vec<String> {
    let mut images: Vec<String> = report
        .sections
        .get(SUMMARY_KEY)
        .map(|s| s.images.clone())
        .unwrap_or_default();

    if let Some(extra) = &report.images {
        for url in extra {
            if !images.contains(url) {
                images.push(url.clone());
            }
        }
    }

    images.retain(|url| !url.trim().is_empty());
    images
}

pub fn cover_image(report: &Report) -> Option<&str> {
    report.resumo_image.as_deref().or_else(|| {
        report
            .sections
            .get(SUMMARY_KEY)
            .and_then(|s| s.images.first())
            .map(String::as_str)
    })
}

/// Summary section has text worth previewing
pub fn has_summary(report: &Report) -> bool {
    report
        .sections
        .get(SUMMARY_KEY)
        .is_some_and(|s| !s.content.trim().is_empty())
}

/// Like/save state of one feed card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CardState {
    pub liked: bool,
    pub saved: bool,
    pub like_count: u64,
}

impl CardState {
    /// Optimistic update after a successful like/unlike call
    pub fn with_liked(self, liked: bool) -> Self {
        if liked == self.liked {
            return self;
        }
        let like_count = if liked {
            self.like_count + 1
        } else {
            self.like_count.saturating_sub(1)
        };
        Self {
            liked,
            like_count,
            ..self
        }
    }

    pub fn with_saved(self, saved: bool) -> Self {
        Self { saved, ..self }
    }
}
