use std::fmt;

use crate::presentation::formatters::{style, time};
use crate::presentation::view_models::{
    AvatarViewModel, CreateView, ProfileViewModel, SavedListViewModel, ViewMode,
};

use super::feed::{write_card_body, write_card_header, write_card_line};

impl CreateView for ProfileViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ProfileView { data: self, mode })
    }
}

struct ProfileView<'a> {
    data: &'a ProfileViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ProfileView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for card in &self.data.reports {
                writeln!(f, "{}", card.id)?;
            }
            return Ok(());
        }

        let user = &self.data.user;
        writeln!(f, "{} <{}>", style::bold(&user.display_name), user.email)?;
        if let Some(avatar) = &user.avatar_url {
            writeln!(f, "Avatar: {}", avatar)?;
        }
        writeln!(f)?;

        match self.data.reports.len() {
            0 => return writeln!(f, "No reports yet."),
            1 => writeln!(f, "1 report")?,
            n => writeln!(f, "{} reports", n)?,
        }
        writeln!(f)?;

        for card in &self.data.reports {
            match self.mode {
                ViewMode::Compact => write_card_line(f, card)?,
                _ => {
                    write_card_header(f, card)?;
                    write_card_body(f, card, self.mode == ViewMode::Verbose)?;
                }
            }
        }
        Ok(())
    }
}

impl CreateView for SavedListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SavedListView { data: self, mode })
    }
}

struct SavedListView<'a> {
    data: &'a SavedListViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for SavedListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            match self.mode {
                ViewMode::Minimal => writeln!(f, "{}", entry.report.id)?,
                ViewMode::Compact => write_card_line(f, &entry.report)?,
                _ => {
                    write_card_header(f, &entry.report)?;
                    writeln!(
                        f,
                        "   {}",
                        style::dim(&format!(
                            "saved {}",
                            time::format_relative_time(&entry.saved_at)
                        ))
                    )?;
                    write_card_body(f, &entry.report, self.mode == ViewMode::Verbose)?;
                }
            }
        }
        Ok(())
    }
}

impl CreateView for AvatarViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(AvatarView { data: self })
    }
}

struct AvatarView<'a> {
    data: &'a AvatarViewModel,
}

impl<'a> fmt::Display for AvatarView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", style::cyan(&self.data.url))
    }
}
