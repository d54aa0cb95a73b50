use clap::ValueEnum;
use relato_sdk::types::ReportList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// List a single entry can be removed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntryList {
    Country,
    ChildAge,
    Location,
}

impl EntryList {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryList::Country => "country",
            EntryList::ChildAge => "child age",
            EntryList::Location => "location",
        }
    }
}

impl From<EntryList> for ReportList {
    fn from(list: EntryList) -> Self {
        match list {
            EntryList::Country => ReportList::Countries,
            EntryList::ChildAge => ReportList::ChildAges,
            EntryList::Location => ReportList::Locations,
        }
    }
}
