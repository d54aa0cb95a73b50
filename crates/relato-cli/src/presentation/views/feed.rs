use std::fmt;

use relato_sdk::types::{format_count, truncate};

use crate::presentation::formatters::{style, text, time};
use crate::presentation::view_models::{
    CardAction, CardStateViewModel, CreateView, FeedCardViewModel, FeedListViewModel,
    FeedStatsViewModel, ViewMode,
};

const ID_SHORT_LENGTH: usize = 8;
const TITLE_MAX_LENGTH: usize = 40;

// --------------------------------------------------------
// Report cards (shared by feed, profile and saved lists)
// --------------------------------------------------------

pub(super) fn short_id(id: &str) -> &str {
    id.get(..ID_SHORT_LENGTH).unwrap_or(id)
}

pub(super) fn write_card_header(f: &mut fmt::Formatter, card: &FeedCardViewModel) -> fmt::Result {
    writeln!(f, "{} {}", card.season_emoji, style::bold(&card.title))
}

pub(super) fn write_card_line(f: &mut fmt::Formatter, card: &FeedCardViewModel) -> fmt::Result {
    let countries = text::countries_line(&card.countries);
    writeln!(
        f,
        "{:<8}  {} {:<40}  {}",
        short_id(&card.id),
        card.season_emoji,
        truncate(&card.title, TITLE_MAX_LENGTH),
        countries
    )
}

pub(super) fn write_card_body(
    f: &mut fmt::Formatter,
    card: &FeedCardViewModel,
    verbose: bool,
) -> fmt::Result {
    let mut meta = Vec::new();
    let countries = text::countries_line(&card.countries);
    if !countries.is_empty() {
        meta.push(countries);
    }
    if let Some(author) = &card.author_name {
        meta.push(format!("by {}", author));
    }
    meta.push(time::format_relative_time(&card.created_at));
    writeln!(f, "   {}", meta.join(" · "))?;

    if !card.child_ages_months.is_empty() {
        writeln!(f, "   Kids: {}", text::child_ages_line(&card.child_ages_months))?;
    }

    let id = if verbose {
        card.id.as_str()
    } else {
        short_id(&card.id)
    };
    writeln!(
        f,
        "   {}",
        style::dim(&format!("👁 {} · id {}", format_count(card.view_count), id))
    )?;

    if verbose {
        if !card.locations.is_empty() {
            writeln!(f, "   Places: {}", card.locations.join(", "))?;
        }
        for image in &card.images {
            writeln!(f, "   🖼  {}", image)?;
        }
    }
    Ok(())
}

// --------------------------------------------------------
// Feed list
// --------------------------------------------------------

impl CreateView for FeedListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeedListView { data: self, mode })
    }
}

struct FeedListView<'a> {
    data: &'a FeedListViewModel,
    mode: ViewMode,
}

impl<'a> FeedListView<'a> {
    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.reports {
            writeln!(f, "{}", card.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.reports.is_empty() {
            return writeln!(f, "No reports found.");
        }
        for card in &self.data.reports {
            write_card_line(f, card)?;
        }
        Ok(())
    }

    fn render_cards(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        if self.data.reports.is_empty() {
            writeln!(f, "No reports found.")?;
            return self.render_footer(f);
        }
        for card in &self.data.reports {
            write_card_header(f, card)?;
            write_card_body(f, card, verbose)?;
            writeln!(f)?;
        }
        self.render_footer(f)
    }

    fn render_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stats = &self.data.stats;
        let mut line = format!(
            "{} reports · {} countries",
            stats.total_reports, stats.distinct_countries
        );
        if stats.results != stats.total_reports {
            line.push_str(&format!(" · showing {}", stats.results));
        }
        writeln!(f, "{}", style::dim(&line))
    }
}

impl<'a> fmt::Display for FeedListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_cards(f, false),
            ViewMode::Verbose => self.render_cards(f, true),
        }
    }
}

// --------------------------------------------------------
// Feed stats
// --------------------------------------------------------

impl CreateView for FeedStatsViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeedStatsView { data: self })
    }
}

struct FeedStatsView<'a> {
    data: &'a FeedStatsViewModel,
}

impl<'a> fmt::Display for FeedStatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Reports:   {}", self.data.total_reports)?;
        writeln!(f, "Countries: {}", self.data.distinct_countries)?;
        writeln!(f, "Results:   {}", self.data.results)
    }
}

// --------------------------------------------------------
// Like / save toggles
// --------------------------------------------------------

impl CreateView for CardStateViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CardStateView { data: self })
    }
}

struct CardStateView<'a> {
    data: &'a CardStateViewModel,
}

impl<'a> fmt::Display for CardStateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let heart = if self.data.liked { "♥" } else { "♡" };
        let likes = if self.data.like_count == 1 {
            "1 like".to_string()
        } else {
            format!("{} likes", format_count(self.data.like_count))
        };
        match self.data.action {
            CardAction::Like => writeln!(f, "{} {}", heart, likes),
            CardAction::Save => {
                let mark = if self.data.saved { "🔖 saved" } else { "not saved" };
                writeln!(f, "{} · {} {}", mark, heart, likes)
            }
        }
    }
}
