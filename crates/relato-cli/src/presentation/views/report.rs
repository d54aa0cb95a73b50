use std::fmt;

use relato_sdk::types::format_count;

use crate::presentation::formatters::{style, text, time};
use crate::presentation::view_models::{
    CreateView, DraftSavedViewModel, EntryRemovedViewModel, ImageAttachedViewModel,
    ImageRemovedViewModel, OrderViewModel, ReportDeletedViewModel, ReportDetailViewModel, TemplateViewModel, ViewMode,
};

const SECTION_PREVIEW_LENGTH: usize = 120;

// --------------------------------------------------------
// Template
// --------------------------------------------------------

impl CreateView for TemplateViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TemplateView { data: self, mode })
    }
}

struct TemplateView<'a> {
    data: &'a TemplateViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for TemplateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for section in &self.data.sections {
                writeln!(f, "{}", section.key)?;
            }
            return Ok(());
        }

        writeln!(f, "{:<20}  {:<22}  NOTES", "KEY", "TITLE")?;
        writeln!(f, "{}", "-".repeat(70))?;
        for section in &self.data.sections {
            let mut notes = Vec::new();
            if section.visible {
                notes.push("shown");
            }
            if !section.fixed {
                notes.push("renamable");
            }
            writeln!(
                f,
                "{:<20}  {:<22}  {}",
                section.key,
                section.title,
                notes.join(", ")
            )?;
            if self.mode != ViewMode::Compact {
                writeln!(f, "{:<20}  {}", "", style::dim(section.placeholder.as_str()))?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Publishing needs at least {} completed sections (visible, with text).",
            self.data.min_completed_sections
        )
    }
}

// --------------------------------------------------------
// Draft saved
// --------------------------------------------------------

impl CreateView for DraftSavedViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DraftSavedView { data: self, mode })
    }
}

struct DraftSavedView<'a> {
    data: &'a DraftSavedViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for DraftSavedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.id);
        }
        writeln!(f, "ID: {}", self.data.id)?;
        if !self.data.ignored.is_empty() {
            writeln!(f, "\nIgnored draft entries:")?;
            for entry in &self.data.ignored {
                writeln!(f, "  - {}", entry)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Report detail
// --------------------------------------------------------

impl CreateView for ReportDetailViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReportDetailView { data: self, mode })
    }
}

struct ReportDetailView<'a> {
    data: &'a ReportDetailViewModel,
    mode: ViewMode,
}

impl<'a> ReportDetailView<'a> {
    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        writeln!(f, "{} {}", data.season_emoji, style::bold(&data.title))?;

        let mut byline = Vec::new();
        if let Some(name) = &data.author.name {
            byline.push(format!("by {}", name));
        }
        byline.push(time::format_date(&data.created_at));
        byline.push(format!("👁 {}", format_count(data.view_count)));
        writeln!(f, "{}", style::dim(&byline.join(" · ")))?;

        let countries = text::countries_line(&data.countries);
        if !countries.is_empty() {
            writeln!(f, "{}", countries)?;
        }

        let when: Vec<&str> = [data.month.as_deref(), data.season.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !when.is_empty() {
            writeln!(f, "When:   {}", when.join(" · "))?;
        }
        if !data.child_ages_months.is_empty() {
            writeln!(f, "Kids:   {}", text::child_ages_line(&data.child_ages_months))?;
        }
        if !data.locations.is_empty() {
            writeln!(f, "Places: {}", data.locations.join(", "))?;
        }
        if self.mode == ViewMode::Verbose {
            writeln!(f, "ID:     {}", data.id)?;
            if let Some(cover) = &data.cover {
                writeln!(f, "Cover:  {}", cover)?;
            }
        }
        Ok(())
    }

    fn render_sections(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for section in &self.data.sections {
            writeln!(f)?;
            if self.mode == ViewMode::Compact {
                let preview = relato_sdk::types::truncate(
                    &text::single_line(&section.content),
                    SECTION_PREVIEW_LENGTH,
                );
                writeln!(f, "{}: {}", style::bold(&section.title), preview)?;
                continue;
            }

            writeln!(f, "{}", style::bold(&format!("## {}", section.title)))?;
            writeln!(f, "{}", section.content.trim_end())?;
            for image in &section.gallery {
                writeln!(f, "  🖼  {}", image)?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ReportDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.id);
        }
        self.render_header(f)?;
        self.render_sections(f)
    }
}

// --------------------------------------------------------
// Section order
// --------------------------------------------------------

impl CreateView for OrderViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(OrderView { data: self, mode })
    }
}

struct OrderView<'a> {
    data: &'a OrderViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for OrderView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(message) = &self.data.message {
            return writeln!(f, "{}", message);
        }
        for row in &self.data.rows {
            if self.mode == ViewMode::Minimal {
                writeln!(f, "{}", row.key)?;
            } else if row.visible {
                writeln!(f, "{:>3}  {}", row.position, row.label)?;
            } else {
                writeln!(f, "{:>3}  {}", row.position, style::dim(&row.label))?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Image / delete confirmations
// --------------------------------------------------------

impl CreateView for ImageAttachedViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImageAttachedView { data: self })
    }
}

struct ImageAttachedView<'a> {
    data: &'a ImageAttachedViewModel,
}

impl<'a> fmt::Display for ImageAttachedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", style::cyan(&self.data.url))
    }
}

impl CreateView for ImageRemovedViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImageRemovedView { data: self })
    }
}

struct ImageRemovedView<'a> {
    data: &'a ImageRemovedViewModel,
}

impl<'a> fmt::Display for ImageRemovedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.remaining.is_empty() {
            return writeln!(f, "No images left in {}.", self.data.section);
        }
        for (i, url) in self.data.remaining.iter().enumerate() {
            writeln!(f, "{:>3}  {}", i, style::cyan(url))?;
        }
        Ok(())
    }
}

impl CreateView for EntryRemovedViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EntryRemovedView { data: self })
    }
}

struct EntryRemovedView<'a> {
    data: &'a EntryRemovedViewModel,
}

impl<'a> fmt::Display for EntryRemovedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.remaining.is_empty() {
            return writeln!(f, "No {} entries left.", self.data.list);
        }
        for (i, entry) in self.data.remaining.iter().enumerate() {
            writeln!(f, "{:>3}  {}", i, entry)?;
        }
        Ok(())
    }
}

impl CreateView for ReportDeletedViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReportDeletedView { data: self })
    }
}

struct ReportDeletedView<'a> {
    data: &'a ReportDeletedViewModel,
}

impl<'a> fmt::Display for ReportDeletedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ID: {}", self.data.id)
    }
}
