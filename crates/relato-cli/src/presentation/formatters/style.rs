use is_terminal::IsTerminal;
use owo_colors::{OwoColorize, Style};
use std::sync::OnceLock;

/// Colors only on a terminal, and never when `NO_COLOR` is set
fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    })
}

fn paint(text: &str, style: Style) -> String {
    if enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(text, Style::new().bold())
}

pub fn dim(text: &str) -> String {
    paint(text, Style::new().dimmed())
}

pub fn cyan(text: &str) -> String {
    paint(text, Style::new().cyan())
}

pub fn tip_header(text: &str) -> String {
    paint(text, Style::new().yellow().bold())
}
