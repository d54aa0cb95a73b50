use std::sync::Arc;

use chrono::Utc;
use relato_engine::{
    ComposerProgress, EditorStates, OrderView, Outcome, ReportIntent, order_view, reconcile_order,
    upload_file_name, validate_for_save,
};
use relato_types::{Report, ReportId, SectionKey, UserId};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::gateway::{Gateway, IMAGE_CONTENT_TYPE};
use crate::{Error, Result};

/// Composer session: owns one report aggregate while it is being written or edited.
///
/// Every change goes through [`Composer::apply`]; nothing reaches the gateway
/// until [`Composer::save`], which writes the whole aggregate.
pub struct Composer {
    gateway: Arc<dyn Gateway>,
    bucket: String,
    min_completed: usize,
    draft: Report,
    editors: EditorStates,
    persisted: bool,
}

impl Composer {
    /// Start from the seven-section template
    pub fn new_draft(gateway: Arc<dyn Gateway>, config: &Config, owner: UserId) -> Self {
        let draft = relato_engine::new_draft(owner, Utc::now());
        Self::mount(gateway, config, draft, false)
    }

    /// Load an existing report for its owner
    pub fn edit(
        gateway: Arc<dyn Gateway>,
        config: &Config,
        owner: &UserId,
        id: &ReportId,
    ) -> Result<Self> {
        let fetched = gateway
            .fetch_report(id)?
            .ok_or_else(|| Error::NotFound(format!("report {}", id)))?;
        if fetched.report.user_id != *owner {
            return Err(Error::Forbidden(format!("report {} belongs to another user", id)));
        }

        let mut draft = fetched.report;
        draft.section_order = reconcile_order(&draft.sections, &draft.section_order);
        Ok(Self::mount(gateway, config, draft, true))
    }

    fn mount(gateway: Arc<dyn Gateway>, config: &Config, draft: Report, persisted: bool) -> Self {
        let editors = EditorStates::mount(&draft);
        Self {
            gateway,
            bucket: config.storage.bucket.clone(),
            min_completed: config.composer.min_completed_sections,
            draft,
            editors,
            persisted,
        }
    }

    pub fn draft(&self) -> &Report {
        &self.draft
    }

    pub fn editors(&self) -> &EditorStates {
        &self.editors
    }

    /// True once the draft has a row behind it
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn apply(&mut self, intent: ReportIntent) -> Result<Outcome> {
        let visibility = match &intent {
            ReportIntent::SetSectionVisible { key, visible } => Some((key.clone(), *visible)),
            _ => None,
        };

        let outcome = relato_engine::apply(&mut self.draft, intent)?;
        if let Some((key, visible)) = visibility {
            self.editors.sync_visibility(key.as_str(), visible)?;
        }
        Ok(outcome)
    }

    pub fn set_expanded(&mut self, key: &str, expanded: bool) -> Result<()> {
        Ok(self.editors.set_expanded(key, expanded)?)
    }

    pub fn order_view(&self) -> OrderView {
        order_view(&self.draft.sections, &self.draft.section_order)
    }

    pub fn progress(&self) -> ComposerProgress {
        ComposerProgress::of(&self.draft, self.min_completed)
    }

    /// Mark `key` as uploading; rejected while an upload for it is in flight
    pub fn begin_image_upload(&mut self, key: &str) -> Result<()> {
        Ok(self.editors.begin_upload(key)?)
    }

    /// Upload for a section already marked with [`Composer::begin_image_upload`].
    ///
    /// On success the public URL is appended to the section and returned;
    /// on failure the section is unchanged and the editor shows `Failed`.
    /// Rejected before any gateway call when the section is not uploading.
    pub fn finish_image_upload(&mut self, key: &str, bytes: &[u8]) -> Result<String> {
        self.editors.ensure_uploading(key)?;
        let name = upload_file_name(key, Utc::now().timestamp_millis());
        debug!(section = key, object = %name, "uploading section image");

        if let Err(err) = self
            .gateway
            .upload(&self.bucket, &name, bytes, IMAGE_CONTENT_TYPE, true)
        {
            warn!(section = key, error = %err, "section image upload failed");
            self.editors.fail_upload(key, err.to_string())?;
            return Err(err);
        }

        let url = self.gateway.public_url(&self.bucket, &name);
        self.apply(ReportIntent::AppendSectionImage {
            key: SectionKey::from(key),
            url: url.clone(),
        })?;
        self.editors.finish_upload(key)?;
        Ok(url)
    }

    pub fn upload_image(&mut self, key: &str, bytes: &[u8]) -> Result<String> {
        self.begin_image_upload(key)?;
        self.finish_image_upload(key, bytes)
    }

    /// Validate, then insert or update the whole aggregate.
    ///
    /// Validation failures never reach the gateway. The draft only changes
    /// (reconciled order) once the write succeeded.
    pub fn save(&mut self) -> Result<ReportId> {
        validate_for_save(&self.draft, self.min_completed)?;

        let mut report = self.draft.clone();
        report.section_order = reconcile_order(&report.sections, &report.section_order);

        let written = if self.persisted {
            self.gateway.update_report(&report)
        } else {
            self.gateway.insert_report(&report)
        };
        if let Err(err) = written {
            warn!(report = %report.id, error = %err, "saving report failed");
            return Err(err);
        }

        info!(report = %report.id, update = self.persisted, "report saved");
        let id = report.id;
        self.draft = report;
        self.persisted = true;
        Ok(id)
    }
}
