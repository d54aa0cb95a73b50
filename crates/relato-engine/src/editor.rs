use std::collections::BTreeMap;

use serde::Serialize;

use relato_types::{Report, SectionKey};

use crate::{Error, Result};

/// Per-section image upload progress.
///
/// `Idle -> Uploading -> Idle | Failed`; a failed upload may be retried.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum UploadState {
    #[default]
    Idle,
    Uploading,
    Failed(String),
}

/// Local UI state of one section editor. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEditor {
    pub key: SectionKey,
    pub expanded: bool,
    pub upload: UploadState,
}

/// Editor state for every section of a report, keyed like the section set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorStates {
    editors: BTreeMap<SectionKey, SectionEditor>,
}

impl EditorStates {
    /// Mount editors for every section; expansion mirrors visibility at mount time.
    pub fn mount(report: &Report) -> Self {
        let editors = report
            .sections
            .iter()
            .map(|(key, section)| {
                (
                    key.clone(),
                    SectionEditor {
                        key: key.clone(),
                        expanded: section.visible,
                        upload: UploadState::Idle,
                    },
                )
            })
            .collect();
        Self { editors }
    }

    pub fn get(&self, key: &str) -> Option<&SectionEditor> {
        self.editors.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionEditor> {
        self.editors.values()
    }

    fn editor_mut(&mut self, key: &str) -> Result<&mut SectionEditor> {
        self.editors
            .get_mut(key)
            .ok_or_else(|| Error::UnknownSection(SectionKey::from(key)))
    }

    /// Expand or collapse without touching the section itself
    pub fn set_expanded(&mut self, key: &str, expanded: bool) -> Result<()> {
        self.editor_mut(key)?.expanded = expanded;
        Ok(())
    }

    /// Visibility toggles drive expansion
    pub fn sync_visibility(&mut self, key: &str, visible: bool) -> Result<()> {
        self.set_expanded(key, visible)
    }

    pub fn begin_upload(&mut self, key: &str) -> Result<()> {
        let editor = self.editor_mut(key)?;
        if editor.upload == UploadState::Uploading {
            return Err(Error::UploadInFlight(editor.key.clone()));
        }
        editor.upload = UploadState::Uploading;
        Ok(())
    }

    /// Rejects sections that are not `Uploading`
    pub fn ensure_uploading(&self, key: &str) -> Result<()> {
        let editor = self
            .editors
            .get(key)
            .ok_or_else(|| Error::UnknownSection(SectionKey::from(key)))?;
        if editor.upload != UploadState::Uploading {
            return Err(Error::UploadNotStarted(editor.key.clone()));
        }
        Ok(())
    }

    pub fn finish_upload(&mut self, key: &str) -> Result<()> {
        self.ensure_uploading(key)?;
        self.editor_mut(key)?.upload = UploadState::Idle;
        Ok(())
    }

    pub fn fail_upload(&mut self, key: &str, reason: impl Into<String>) -> Result<()> {
        self.ensure_uploading(key)?;
        self.editor_mut(key)?.upload = UploadState::Failed(reason.into());
        Ok(())
    }
}

/// Object name for a section image uploaded at `unix_millis`
pub fn upload_file_name(key: &str, unix_millis: i64) -> String {
    format!("category_{}_{}.jpg", key, unix_millis)
}
