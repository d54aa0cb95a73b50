use std::sync::Arc;

use relato_engine::{ReadableSection, cover_image, readable_sections};
use relato_types::{ReportId, ReportWithAuthor};
use serde::Serialize;
use tracing::warn;

use crate::gateway::Gateway;
use crate::{Error, Result};

/// Detail page contents
#[derive(Debug, Clone, Serialize)]
pub struct ReportDetail {
    pub report: ReportWithAuthor,
    pub cover: Option<String>,
    pub sections: Vec<ReadableSection>,
}

pub struct DetailOps {
    gateway: Arc<dyn Gateway>,
}

impl DetailOps {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Count the view, then fetch. A failed increment is only logged;
    /// the view count shown is whatever the fetch returns.
    pub fn open(&self, id: &ReportId) -> Result<ReportDetail> {
        if let Err(err) = self.gateway.increment_view_count(id) {
            warn!(report = %id, error = %err, "view count increment failed");
        }

        let report = self
            .gateway
            .fetch_report(id)?
            .ok_or_else(|| Error::NotFound(format!("report {}", id)))?;

        Ok(ReportDetail {
            cover: cover_image(&report.report).map(str::to_string),
            sections: readable_sections(&report.report),
            report,
        })
    }
}
