use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use relato_engine::{
    CardState, FeedQuery, FeedStats, OrderView, Outcome, ReportIntent, ReportList, new_draft,
    placeholder,
};
use relato_runtime::{Composer, Relato, ReportDetail};
use relato_types::{
    CurrentUser, Report, ReportId, ReportWithAuthor, SavedReport, SectionKey, UserId,
};
use serde::Serialize;
use tracing::info;

use crate::draft::DraftFile;
use crate::error::{Error, Result};

pub struct Client {
    inner: Arc<Relato>,
}

impl Client {
    pub fn connect(path: impl Into<PathBuf>) -> Result<Self> {
        let runtime = Relato::open(path.into())?;
        Ok(Self::from_workspace(runtime))
    }

    /// Connect to the default data directory (`RELATO_PATH` or the XDG data dir)
    pub fn connect_default() -> Result<Self> {
        let path = relato_runtime::resolve_data_dir(None)?;
        Self::connect(path)
    }

    pub fn from_workspace(runtime: Relato) -> Self {
        Self {
            inner: Arc::new(runtime),
        }
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.inner.data_dir()
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient {
            inner: self.inner.clone(),
        }
    }

    pub fn reports(&self) -> ReportClient {
        ReportClient {
            inner: self.inner.clone(),
        }
    }

    pub fn feed(&self) -> FeedClient {
        FeedClient {
            inner: self.inner.clone(),
        }
    }

    pub fn profile(&self) -> ProfileClient {
        ProfileClient {
            inner: self.inner.clone(),
        }
    }
}

pub struct AuthClient {
    inner: Arc<Relato>,
}

impl AuthClient {
    pub fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<CurrentUser> {
        Ok(self.inner.sign_up(email, password, name)?)
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser> {
        Ok(self.inner.sign_in(email, password)?)
    }

    pub fn sign_out(&self) -> Result<()> {
        Ok(self.inner.sign_out()?)
    }

    pub fn whoami(&self) -> Option<CurrentUser> {
        self.inner.current_user()
    }
}

/// Result of applying a draft file and saving
#[derive(Debug, Clone, Serialize)]
pub struct DraftResult {
    pub id: ReportId,
    /// Draft entries the composer ignored, with the reason
    pub ignored: Vec<String>,
}

/// One section of a fresh report, with its writing prompt
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSection {
    pub key: SectionKey,
    pub title: String,
    pub visible: bool,
    pub fixed: bool,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportTemplate {
    pub sections: Vec<TemplateSection>,
    pub min_completed_sections: usize,
}

pub struct ReportClient {
    inner: Arc<Relato>,
}

impl ReportClient {
    /// Sections a new report starts with, in display order. No sign-in needed.
    pub fn template(&self) -> ReportTemplate {
        let draft = new_draft(UserId::new(), Utc::now());
        let sections = draft
            .section_order
            .iter()
            .filter_map(|key| {
                draft.sections.get(key.as_str()).map(|section| TemplateSection {
                    key: key.clone(),
                    title: section.title.clone(),
                    visible: section.visible,
                    fixed: section.fixed,
                    placeholder: placeholder(key.as_str()),
                })
            })
            .collect();

        ReportTemplate {
            sections,
            min_completed_sections: self.inner.config().composer.min_completed_sections,
        }
    }

    /// Fresh composer session for the signed-in user
    pub fn compose(&self) -> Result<Composer> {
        Ok(self.inner.new_report()?)
    }

    pub fn edit(&self, id: &ReportId) -> Result<Composer> {
        Ok(self.inner.edit_report(id)?)
    }

    /// Build a new report from a draft file and save it
    pub fn create_from_draft(&self, draft: &DraftFile) -> Result<DraftResult> {
        let mut composer = self.compose()?;
        let ignored = apply_draft(&mut composer, draft)?;
        let id = composer.save()?;
        info!(report = %id, "report created from draft");
        Ok(DraftResult { id, ignored })
    }

    /// Apply a draft file to an existing report and save it.
    ///
    /// Lists present in the draft replace the stored ones.
    pub fn update_from_draft(&self, id: &ReportId, draft: &DraftFile) -> Result<DraftResult> {
        let mut composer = self.edit(id)?;
        let ignored = apply_draft(&mut composer, draft)?;
        let id = composer.save()?;
        Ok(DraftResult { id, ignored })
    }

    /// Read view; counts one view
    pub fn show(&self, id: &ReportId) -> Result<ReportDetail> {
        Ok(self.inner.detail().open(id)?)
    }

    pub fn order(&self, id: &ReportId) -> Result<OrderView> {
        Ok(self.edit(id)?.order_view())
    }

    /// Drag one section from `from` to `to` and save the new order
    pub fn move_section(&self, id: &ReportId, from: usize, to: usize) -> Result<OrderView> {
        let mut composer = self.edit(id)?;
        if composer.apply(ReportIntent::MoveSection { from, to })?.is_changed() {
            composer.save()?;
        }
        Ok(composer.order_view())
    }

    /// Upload an image into a section and save; returns the public URL
    pub fn attach_image(&self, id: &ReportId, section: &str, bytes: &[u8]) -> Result<String> {
        let mut composer = self.edit(id)?;
        let url = composer.upload_image(section, bytes)?;
        composer.save()?;
        Ok(url)
    }

    /// Remove one image from a section and save; returns the section's remaining images
    pub fn remove_image(&self, id: &ReportId, section: &str, index: usize) -> Result<Vec<String>> {
        let mut composer = self.edit(id)?;
        let key = SectionKey::from(section);
        composer.apply(ReportIntent::RemoveSectionImage {
            key: key.clone(),
            index,
        })?;
        composer.save()?;
        info!(report = %id, section, index, "section image removed");
        Ok(composer
            .draft()
            .sections
            .get(key.as_str())
            .map(|s| s.images.clone())
            .unwrap_or_default())
    }

    /// Remove the entry at `index` from a country, child age or location list and save
    pub fn remove_entry(&self, id: &ReportId, list: ReportList, index: usize) -> Result<Report> {
        let mut composer = self.edit(id)?;
        composer.apply(ReportIntent::remove_entry(list, index))?;
        composer.save()?;
        Ok(composer.draft().clone())
    }

    pub fn delete(&self, id: &ReportId) -> Result<()> {
        let user = self.inner.require_user()?;
        Ok(self.inner.profile().delete_report(&user.id, id)?)
    }
}

fn apply_draft(composer: &mut Composer, draft: &DraftFile) -> Result<Vec<String>> {
    let mut ignored = Vec::new();
    for intent in draft.intents() {
        let label = intent_label(&intent);
        if let Outcome::Ignored(reason) = composer.apply(intent)? {
            ignored.push(format!("{}: {}", label, reason));
        }
    }
    Ok(ignored)
}

fn intent_label(intent: &ReportIntent) -> String {
    match intent {
        ReportIntent::AddCountry(country) => format!("country {}", country.code),
        ReportIntent::AddChildAge { input, unit } => format!("child age {} {}", input, unit),
        ReportIntent::AddLocation(location) => format!("location '{}'", location),
        ReportIntent::EditSectionTitle { key, .. } => format!("section {} title", key),
        ReportIntent::Reorder(_) | ReportIntent::MoveSection { .. } => "order".to_string(),
        _ => "draft".to_string(),
    }
}

/// Filtered feed page
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub results: Vec<ReportWithAuthor>,
    pub stats: FeedStats,
}

pub struct FeedClient {
    inner: Arc<Relato>,
}

impl FeedClient {
    pub fn list(&self, query: FeedQuery) -> Result<FeedPage> {
        let mut view = self.inner.feed().load()?;
        view.set_query(query);
        Ok(FeedPage {
            results: view.results().into_iter().cloned().collect(),
            stats: view.stats(),
        })
    }

    /// Like/save state as seen by the signed-in user (if any)
    pub fn card(&self, id: &ReportId) -> Result<CardState> {
        let viewer = self.inner.current_user();
        Ok(self
            .inner
            .feed()
            .card_state(viewer.as_ref().map(|u| &u.id), id)?)
    }

    pub fn toggle_like(&self, id: &ReportId) -> Result<CardState> {
        let user = self.inner.require_user()?;
        let feed = self.inner.feed();
        let state = feed.card_state(Some(&user.id), id)?;
        Ok(feed.toggle_like(&user.id, id, state)?)
    }

    pub fn toggle_save(&self, id: &ReportId) -> Result<CardState> {
        let user = self.inner.require_user()?;
        let feed = self.inner.feed();
        let state = feed.card_state(Some(&user.id), id)?;
        Ok(feed.toggle_save(&user.id, id, state)?)
    }
}

/// Profile page: the user and their reports
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub user: CurrentUser,
    pub reports: Vec<ReportWithAuthor>,
}

pub struct ProfileClient {
    inner: Arc<Relato>,
}

impl ProfileClient {
    pub fn me(&self) -> Result<ProfileSummary> {
        let user = self.inner.require_user()?;
        let reports = self.inner.profile().my_reports(&user.id)?;
        Ok(ProfileSummary { user, reports })
    }

    pub fn saved(&self) -> Result<Vec<SavedReport>> {
        let user = self.inner.require_user()?;
        Ok(self.inner.profile().saved_reports(&user.id)?)
    }

    pub fn upload_avatar(&self, bytes: &[u8]) -> Result<String> {
        if bytes.is_empty() {
            return Err(Error::InvalidInput("avatar image is empty".to_string()));
        }
        Ok(self.inner.upload_avatar(bytes)?)
    }
}
