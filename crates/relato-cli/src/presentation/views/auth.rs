use std::fmt;

use crate::presentation::formatters::style;
use crate::presentation::view_models::{AuthStatusViewModel, CreateView, ViewMode};

impl CreateView for AuthStatusViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(AuthStatusView { data: self, mode })
    }
}

struct AuthStatusView<'a> {
    data: &'a AuthStatusViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for AuthStatusView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(user) = &self.data.user else {
            if self.mode != ViewMode::Minimal {
                writeln!(f, "No active session.")?;
            }
            return Ok(());
        };

        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", user.id);
        }

        writeln!(f, "{} <{}>", style::bold(&user.display_name), user.email)?;
        writeln!(f, "  ID:     {}", user.id)?;
        if let Some(avatar) = &user.avatar_url {
            writeln!(f, "  Avatar: {}", avatar)?;
        }
        Ok(())
    }
}
