use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the free-form summary section every report starts with
pub const SUMMARY_KEY: &str = "resumo";

/// Stable identifier of a section within a report.
///
/// Assigned when the report template is created and never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionKey(String);

impl SectionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SectionKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SectionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for SectionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One titled block of a report (stored as a "category").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Public storage URLs, in upload order
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub visible: bool,
    /// Template-provided topic; the title is not user-editable
    #[serde(default)]
    pub fixed: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, visible: bool, fixed: bool) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            images: Vec::new(),
            visible,
            fixed,
        }
    }
}

/// Mapping from section key to section.
///
/// Iteration follows key order, which keeps reconciliation deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionSet(BTreeMap<SectionKey, Section>);

impl SectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Section> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.0.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace a section, returning the previous value
    pub fn insert(&mut self, key: SectionKey, section: Section) -> Option<Section> {
        self.0.insert(key, section)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SectionKey> {
        self.0.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Section> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &Section)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(SectionKey, Section)> for SectionSet {
    fn from_iter<I: IntoIterator<Item = (SectionKey, Section)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Display sequence of section keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(Vec<SectionKey>);

impl SectionOrder {
    pub fn new(keys: Vec<SectionKey>) -> Self {
        Self(keys)
    }

    pub fn as_slice(&self) -> &[SectionKey] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k.as_str() == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.0.iter().position(|k| k.as_str() == key)
    }

    pub fn into_vec(self) -> Vec<SectionKey> {
        self.0
    }
}

impl From<Vec<SectionKey>> for SectionOrder {
    fn from(keys: Vec<SectionKey>) -> Self {
        Self(keys)
    }
}

impl<'a> IntoIterator for &'a SectionOrder {
    type Item = &'a SectionKey;
    type IntoIter = std::slice::Iter<'a, SectionKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
