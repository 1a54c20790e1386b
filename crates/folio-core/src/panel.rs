//! The control panel
//!
//! Owns the catalog for one operator session and sequences every operation:
//! local edit, local save, then the remote pushes. A remote failure never
//! undoes a local edit; it is reported instead.

use crate::config::FolioConfig;
use crate::error::PanelError;
use crate::report::{EditKind, EditReport, PublishReport, PullReport, SyncOutcome};
use crate::upload::upload_file_name;
use folio_gate::{Credentials, FileStore, Gate, Session};
use folio_model::{
    metadata, Catalog, CatalogError, MetadataTable, NewPicture, PictureField, SectionFilter,
    SectionView,
};
use folio_remote::{GitHubContents, PutReceipt, RemoteStore};
use folio_render::{GeneratedPage, HtmlRenderer, Renderer};
use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Commit message for catalog document pushes
pub const CATALOG_COMMIT_MESSAGE: &str = "Update gallery data";

/// Catalog editing, page generation and publishing
#[derive(Debug)]
pub struct ControlPanel {
    config: FolioConfig,
    catalog: Catalog,
    credentials: Credentials,
    renderer: HtmlRenderer,
    metadata: MetadataTable,
    remote: Option<Arc<dyn RemoteStore>>,
}

impl ControlPanel {
    /// Load the local catalog and credential store named by `config`
    ///
    /// # Errors
    /// Returns error if an existing catalog or credential file is unreadable
    pub async fn open(config: FolioConfig) -> Result<Self, PanelError> {
        let catalog = load_catalog(&config.storage.catalog_path).await?;
        let store = FileStore::open(&config.storage.credentials_path)?;
        Ok(Self::new(config, catalog, Credentials::new(Arc::new(store))))
    }

    /// Assemble a panel from parts
    pub fn new(config: FolioConfig, catalog: Catalog, credentials: Credentials) -> Self {
        let renderer = HtmlRenderer::new().with_site(config.site.clone());
        Self {
            config,
            catalog,
            credentials,
            renderer,
            metadata: metadata::default_table(),
            remote: None,
        }
    }

    /// Use `remote` instead of the configured GitHub repository.
    ///
    /// A stored token is still required for remote operations.
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn RemoteStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Replace the page renderer
    #[must_use]
    pub fn with_renderer(mut self, renderer: HtmlRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Password gate over this panel's credentials
    #[must_use]
    pub fn gate(&self) -> Gate {
        Gate::new(self.credentials.clone())
    }

    /// Sections and pictures selected by `filter`
    #[must_use]
    pub fn list<'a>(&'a self, filter: &'a SectionFilter) -> Vec<SectionView<'a>> {
        self.catalog.filter(filter)
    }

    /// Pretty catalog JSON, as committed to the repository
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn export_json(&self) -> Result<String, PanelError> {
        Ok(self.catalog.to_json_pretty()?)
    }

    /// Pages for every catalog section with metadata
    #[must_use]
    pub fn generate_pages(&self) -> IndexMap<String, GeneratedPage> {
        self.renderer.generate_all(&self.catalog, &self.metadata)
    }

    /// Write every generated page into `out`
    ///
    /// # Errors
    /// Returns error if the directory or a file cannot be written
    pub async fn render_to_dir(&self, out: &Path) -> Result<Vec<PathBuf>, PanelError> {
        tokio::fs::create_dir_all(out)
            .await
            .map_err(|e| PanelError::io_error(out, e))?;

        let mut written = Vec::new();
        for page in self.generate_pages().into_values() {
            let path = out.join(&page.filename);
            tokio::fs::write(&path, page.html)
                .await
                .map_err(|e| PanelError::io_error(&path, e))?;
            written.push(path);
        }
        info!(count = written.len(), dir = %out.display(), "Pages written");
        Ok(written)
    }

    /// Add a picture, optionally uploading a local image file for it first
    ///
    /// # Errors
    /// - validation errors for the picture fields
    /// - [`PanelError::NotAnImage`] / [`PanelError::TokenRequired`] for uploads
    /// - remote errors if the image upload fails (nothing is added then)
    pub async fn add_picture(
        &mut self,
        _session: &Session,
        section: &str,
        mut picture: NewPicture,
        image: Option<&Path>,
    ) -> Result<EditReport, PanelError> {
        if picture.name.trim().is_empty() {
            return Err(CatalogError::EmptyName.into());
        }

        let uploaded_image = match image {
            Some(source) => {
                let url = self.upload_image(&picture.name, source).await?;
                picture.image_url.clone_from(&url);
                Some(url)
            }
            None => None,
        };

        let record = self.catalog.add_picture(section, picture)?;
        info!(section, id = %record.id, "Picture added");
        self.save_local().await?;

        Ok(EditReport {
            kind: EditKind::Added,
            section: section.to_string(),
            record,
            uploaded_image,
            sync: self.sync_catalog().await?,
        })
    }

    /// Change one field of a picture
    ///
    /// # Errors
    /// Returns error if the picture does not exist or the value is invalid
    pub async fn edit_picture(
        &mut self,
        _session: &Session,
        section: &str,
        id: &str,
        field: PictureField,
        value: &str,
    ) -> Result<EditReport, PanelError> {
        let record = self.catalog.update_field(section, id, field, value)?;
        info!(section, id, field = ?field, "Picture updated");
        self.save_local().await?;

        Ok(EditReport {
            kind: EditKind::Updated,
            section: section.to_string(),
            record,
            uploaded_image: None,
            sync: self.sync_catalog().await?,
        })
    }

    /// Remove a picture
    ///
    /// # Errors
    /// Returns error if the picture does not exist
    pub async fn delete_picture(
        &mut self,
        _session: &Session,
        section: &str,
        id: &str,
    ) -> Result<EditReport, PanelError> {
        let record = self.catalog.delete_picture(section, id)?;
        info!(section, id, "Picture deleted");
        self.save_local().await?;

        Ok(EditReport {
            kind: EditKind::Deleted,
            section: section.to_string(),
            record,
            uploaded_image: None,
            sync: self.sync_catalog().await?,
        })
    }

    /// Push the catalog, then regenerate and push every page.
    ///
    /// A catalog failure aborts before any page is pushed. Page failures are
    /// counted and the remaining pages are still attempted.
    ///
    /// # Errors
    /// Returns error if no token is stored, or [`PanelError::PublishAborted`]
    /// if the catalog push fails
    pub async fn publish(&self, _session: &Session) -> Result<PublishReport, PanelError> {
        let remote = self.require_remote("publish")?;

        let json = self.catalog.to_json_pretty()?;
        let catalog = remote
            .upsert_file(&self.config.remote.data_file, json.as_bytes(), CATALOG_COMMIT_MESSAGE)
            .await
            .map_err(|e| {
                warn!(error = %e, "Catalog push failed, publish aborted");
                PanelError::PublishAborted(e)
            })?;

        let mut pushed = Vec::new();
        let mut failed = Vec::new();
        for page in self.generate_pages().into_values() {
            let message = format!("Auto-update {} from control panel", page.filename);
            match remote
                .upsert_file(&page.filename, page.html.as_bytes(), &message)
                .await
            {
                Ok(_) => pushed.push(page.filename),
                Err(e) => {
                    warn!(file = %page.filename, error = %e, "Page push failed");
                    failed.push((page.filename, e));
                }
            }
        }

        info!(saved = pushed.len(), failed = failed.len(), "Publish finished");
        Ok(PublishReport {
            catalog,
            pushed,
            failed,
        })
    }

    /// Regenerate one section page and push it
    ///
    /// # Errors
    /// Returns error if no token is stored, the section or its metadata is
    /// unknown, or the push fails
    pub async fn push_page(&self, _session: &Session, section: &str) -> Result<PutReceipt, PanelError> {
        let remote = self.require_remote("push pages")?;
        let pictures = self
            .catalog
            .section(section)
            .ok_or_else(|| CatalogError::SectionNotFound(section.to_string()))?;
        let meta = self
            .metadata
            .get(section)
            .ok_or_else(|| PanelError::MetadataMissing(section.to_string()))?;

        let html = self.renderer.render(section, pictures, meta);
        let file = format!("{section}.html");
        let message = format!("Update {file} from control panel");
        Ok(remote.upsert_file(&file, html.as_bytes(), &message).await?)
    }

    /// Replace the local catalog with the repository's copy
    ///
    /// # Errors
    /// Returns error if no token is stored, the remote file is missing or
    /// not a catalog document
    pub async fn pull(&mut self, _session: &Session) -> Result<PullReport, PanelError> {
        let remote = self.require_remote("pull the catalog")?;
        let path = self.config.remote.data_file.clone();

        let file = remote
            .get_file(&path)
            .await?
            .ok_or_else(|| PanelError::RemoteFileMissing(path.clone()))?;
        let text = String::from_utf8(file.content).map_err(|_| PanelError::NotText(path.clone()))?;
        self.catalog = Catalog::from_json(&text)?;
        self.save_local().await?;

        let report = PullReport {
            path,
            sections: self.catalog.section_keys().count(),
            pictures: self.catalog.len(),
        };
        info!(pictures = report.pictures, "Catalog pulled");
        Ok(report)
    }

    async fn upload_image(&self, picture_name: &str, source: &Path) -> Result<String, PanelError> {
        let file_name = upload_file_name(picture_name, source)?;
        let remote = self.require_remote("upload images")?;

        let bytes = tokio::fs::read(source)
            .await
            .map_err(|e| PanelError::io_error(source, e))?;
        let path = self.config.remote.image_path(&file_name);
        remote
            .upsert_file(&path, &bytes, &format!("Upload image: {file_name}"))
            .await?;

        let url = self.config.remote.raw_url(&path);
        info!(path = %path, bytes = bytes.len(), "Image uploaded");
        Ok(url)
    }

    /// Remote store when a token is configured
    fn remote(&self) -> Result<Option<Arc<dyn RemoteStore>>, PanelError> {
        let Some(token) = self.credentials.token()? else {
            return Ok(None);
        };
        if let Some(remote) = &self.remote {
            return Ok(Some(Arc::clone(remote)));
        }
        let client = GitHubContents::new(self.config.remote.clone(), &token)?;
        Ok(Some(Arc::new(client)))
    }

    fn require_remote(&self, action: &'static str) -> Result<Arc<dyn RemoteStore>, PanelError> {
        self.remote()?.ok_or(PanelError::TokenRequired(action))
    }

    async fn sync_catalog(&self) -> Result<SyncOutcome, PanelError> {
        let remote = match self.remote() {
            Ok(Some(remote)) => remote,
            Ok(None) => {
                debug!("No access token, catalog left for manual commit");
                return Ok(SyncOutcome::Manual);
            }
            Err(PanelError::Remote(e)) => return Ok(SyncOutcome::Failed(e)),
            Err(e) => return Err(e),
        };

        let json = self.catalog.to_json_pretty()?;
        match remote
            .upsert_file(&self.config.remote.data_file, json.as_bytes(), CATALOG_COMMIT_MESSAGE)
            .await
        {
            Ok(receipt) => Ok(SyncOutcome::Pushed(receipt)),
            Err(e) => {
                warn!(error = %e, "Catalog push failed, changes kept locally");
                Ok(SyncOutcome::Failed(e))
            }
        }
    }

    async fn save_local(&self) -> Result<(), PanelError> {
        let path = &self.config.storage.catalog_path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PanelError::io_error(parent, e))?;
        }

        let json = self.catalog.to_json_pretty()?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| PanelError::io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| PanelError::io_error(path, e))?;
        debug!(path = %path.display(), "Catalog saved");
        Ok(())
    }
}

/// Read the local catalog; a missing file is an empty default catalog
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed
pub async fn load_catalog(path: &Path) -> Result<Catalog, PanelError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Catalog::from_json(&text)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No local catalog yet, starting empty");
            Ok(Catalog::new())
        }
        Err(e) => Err(PanelError::io_error(path, e)),
    }
}
