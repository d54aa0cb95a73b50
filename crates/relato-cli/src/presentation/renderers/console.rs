use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::style;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Scripts reading minimal output only want the content
        if self.mode == ViewMode::Minimal {
            print!("{}", result.content.create_view(self.mode));
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), style::bold(&badge.label));
            println!();
        }

        print!("{}", result.content.create_view(self.mode));

        if !result.suggestions.is_empty() {
            println!("\n{}", style::tip_header("💡 Tips:"));
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", style::cyan(cmd));
                }
                println!();
            }
        }

        Ok(())
    }
}
