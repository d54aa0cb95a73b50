use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use relato_types::{CurrentUser, ReportId};

use crate::config::Config;
use crate::gateway::{Gateway, LocalGateway};
use crate::services::{Composer, DetailOps, FeedOps, ProfileOps};
use crate::session::SessionManager;
use crate::Result;

/// One open data directory: config, gateway and the signed-in session.
///
/// Services share the gateway; everything that needs a user reads it from
/// the session manager, which is synced before each read.
pub struct Relato {
    gateway: Arc<dyn Gateway>,
    config: Arc<Config>,
    data_dir: Option<PathBuf>,
    session: Mutex<SessionManager>,
}

impl Relato {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let db_path = data_dir.join("relato.db");
        let config_path = data_dir.join("config.toml");

        let config = if config_path.exists() {
            Config::load_from(&config_path)?
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            config
        };

        let gateway = LocalGateway::open(&db_path, config.storage.clone())?;
        let mut workspace = Self::with_gateway(Arc::new(gateway), config);
        workspace.data_dir = Some(data_dir);
        Ok(workspace)
    }

    /// Workspace over any gateway implementation
    pub fn with_gateway(gateway: Arc<dyn Gateway>, config: Config) -> Self {
        let mut session = SessionManager::new(gateway.clone());
        session.start();
        Self {
            gateway,
            config: Arc::new(config),
            data_dir: None,
            session: Mutex::new(session),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn gateway(&self) -> Arc<dyn Gateway> {
        self.gateway.clone()
    }

    pub fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<CurrentUser> {
        let mut session = self.session.lock().unwrap();
        session.sign_up(email, password, name).cloned()
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser> {
        let mut session = self.session.lock().unwrap();
        session.sign_in(email, password).cloned()
    }

    pub fn sign_out(&self) -> Result<()> {
        self.session.lock().unwrap().sign_out()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        let mut session = self.session.lock().unwrap();
        session.sync();
        session.current().cloned()
    }

    pub fn require_user(&self) -> Result<CurrentUser> {
        let mut session = self.session.lock().unwrap();
        session.sync();
        session.require_user().cloned()
    }

    /// Stop following session changes
    pub fn shutdown(&self) {
        self.session.lock().unwrap().shutdown();
    }

    pub fn new_report(&self) -> Result<Composer> {
        let user = self.require_user()?;
        Ok(Composer::new_draft(self.gateway.clone(), &self.config, user.id))
    }

    pub fn edit_report(&self, id: &ReportId) -> Result<Composer> {
        let user = self.require_user()?;
        Composer::edit(self.gateway.clone(), &self.config, &user.id, id)
    }

    pub fn feed(&self) -> FeedOps {
        FeedOps::new(self.gateway.clone())
    }

    pub fn detail(&self) -> DetailOps {
        DetailOps::new(self.gateway.clone())
    }

    pub fn profile(&self) -> ProfileOps {
        ProfileOps::new(self.gateway.clone(), self.config.storage.bucket.clone())
    }

    /// Upload an avatar for the signed-in user and refresh the session copy
    pub fn upload_avatar(&self, bytes: &[u8]) -> Result<String> {
        let user = self.require_user()?;
        let url = self.profile().upload_avatar(&user.id, bytes)?;
        self.session.lock().unwrap().refresh_profile();
        Ok(url)
    }
}
