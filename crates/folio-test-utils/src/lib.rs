//! Testing utilities for the Folio workspace
//!
//! Shared fixtures, an in-memory remote store and gate helpers.

#![allow(missing_docs)]

use async_trait::async_trait;
use folio_gate::{Credentials, Gate, MemoryStore, Session, Unlock};
use folio_model::{Catalog, Medium, NewPicture, PictureRecord, Section};
use folio_remote::{PutReceipt, RemoteError, RemoteFile, RemoteStore};
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// The factory-default password
pub const FACTORY_PASSWORD: &str = "&Can1989non";

/// A token that passes validation
pub const TEST_TOKEN: &str = "ghp_0123456789abcdefghijklmnop";

pub fn sample_picture(name: &str) -> NewPicture {
    let slug = name.to_lowercase().replace(' ', "-");
    NewPicture::new(name, format!("https://example.com/{slug}.jpg"), Medium::Oil)
}

pub fn sample_record(id: &str, name: &str) -> PictureRecord {
    PictureRecord {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("https://example.com/{id}.jpg"),
        medium: Medium::MixedMedia,
        notes: None,
        year: None,
    }
}

/// Catalog with two DC pictures and one music picture
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for (section, picture) in [
        (Section::DcCharacters, sample_picture("The Joker").with_year("2019")),
        (Section::DcCharacters, sample_picture("Batman").with_notes("Gotham at night.\nPencil study.")),
        (Section::MusicLegends, sample_picture("The Who")),
    ] {
        catalog.add_picture(section.key(), picture).unwrap();
    }
    catalog
}

pub fn memory_credentials() -> Credentials {
    Credentials::new(Arc::new(MemoryStore::new()))
}

/// Credentials with [`TEST_TOKEN`] stored
pub fn credentials_with_token() -> Credentials {
    let credentials = memory_credentials();
    credentials.set_token(TEST_TOKEN).unwrap();
    credentials
}

/// A session obtained through the factory password and the keep-default path
pub fn unlocked_session() -> Session {
    let gate = Gate::new(memory_credentials());
    match gate.unlock(FACTORY_PASSWORD).unwrap() {
        Unlock::ChangeRequired(pending) => pending.continue_with_default(),
        Unlock::Granted(session) => session,
        Unlock::Denied => panic!("factory password rejected"),
    }
}

/// One recorded `put_file` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub path: String,
    pub message: String,
    pub revision: Option<String>,
}

#[derive(Debug, Default)]
struct RemoteState {
    files: BTreeMap<String, (Vec<u8>, u64)>,
    failing: HashSet<String>,
    writes: Vec<RecordedWrite>,
    next_revision: u64,
}

/// [`RemoteStore`] held in memory with GitHub-like revision checks
#[derive(Debug, Default)]
pub struct InMemoryRemote {
    state: Mutex<RemoteState>,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file
    pub fn with_file(self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        {
            let mut state = self.state.lock();
            state.next_revision += 1;
            let revision = state.next_revision;
            state.files.insert(path.to_string(), (content.into(), revision));
        }
        self
    }

    /// Make every read and write of `path` fail with a 500
    pub fn fail_on(&self, path: &str) {
        self.state.lock().failing.insert(path.to_string());
    }

    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state.lock().files.get(path).map(|(c, _)| c.clone())
    }

    pub fn text(&self, path: &str) -> Option<String> {
        self.file(path).map(|c| String::from_utf8_lossy(&c).into_owned())
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.state.lock().writes.clone()
    }

    pub fn written_paths(&self) -> Vec<String> {
        self.writes().into_iter().map(|w| w.path).collect()
    }

    fn server_error(path: &str) -> RemoteError {
        RemoteError::Api {
            status: 500,
            message: format!("injected failure for {path}"),
        }
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemote {
    async fn get_file(&self, path: &str) -> Result<Option<RemoteFile>, RemoteError> {
        let state = self.state.lock();
        if state.failing.contains(path) {
            return Err(Self::server_error(path));
        }
        Ok(state.files.get(path).map(|(content, revision)| RemoteFile {
            path: path.to_string(),
            content: content.clone(),
            sha: format!("rev-{revision}"),
        }))
    }

    async fn put_file(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        revision: Option<&str>,
    ) -> Result<PutReceipt, RemoteError> {
        let mut state = self.state.lock();
        if state.failing.contains(path) {
            return Err(Self::server_error(path));
        }

        let current = state.files.get(path).map(|(_, r)| format!("rev-{r}"));
        match (current.as_deref(), revision) {
            (Some(current), Some(given)) if current != given => {
                return Err(RemoteError::Conflict {
                    path: path.to_string(),
                    message: format!("{path} is at {current} but expected {given}"),
                });
            }
            (Some(_), None) => {
                return Err(RemoteError::Api {
                    status: 422,
                    message: "\"sha\" wasn't supplied.".to_string(),
                });
            }
            _ => {}
        }

        state.writes.push(RecordedWrite {
            path: path.to_string(),
            message: message.to_string(),
            revision: revision.map(str::to_string),
        });
        state.next_revision += 1;
        let next = state.next_revision;
        state.files.insert(path.to_string(), (content.to_vec(), next));

        Ok(PutReceipt {
            path: path.to_string(),
            sha: Some(format!("rev-{next}")),
            created: current.is_none(),
        })
    }
}
