//! GitHub contents API client
//!
//! `GET`/`PUT {api}/repos/{owner}/{repo}/contents/{path}` with base64 file
//! bodies. The `sha` of the existing file is the revision marker.

use crate::error::RemoteError;
use crate::store::{PutReceipt, RemoteFile, RemoteStore};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API root, e.g. `https://api.github.com`
    pub api_base_url: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory uploaded images are written to
    pub image_dir: String,
    /// Repository path of the catalog document
    pub data_file: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Honour `HTTP(S)_PROXY` environment settings
    pub use_system_proxy: bool,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            owner: "Cannon-Art".to_string(),
            repo: "Files".to_string(),
            branch: "main".to_string(),
            image_dir: "Art_Examples".to_string(),
            data_file: "gallery-data.json".to_string(),
            timeout_secs: 30,
            use_system_proxy: true,
        }
    }
}

impl GitHubConfig {
    /// Set API base URL
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set owner and repository
    #[must_use]
    pub fn with_repository(mut self, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.repo = repo.into();
        self
    }

    /// Set branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Connect directly, ignoring proxy environment variables
    #[must_use]
    pub fn without_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Contents endpoint for a repository path
    ///
    /// # Errors
    /// Returns [`RemoteError::NotConfigured`] if the API base URL is unusable
    pub fn contents_url(&self, path: &str) -> Result<Url, RemoteError> {
        let mut url = Url::parse(&self.api_base_url)
            .map_err(|e| RemoteError::NotConfigured(format!("api_base_url: {e}")))?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                RemoteError::NotConfigured(format!("api_base_url cannot be a base: {}", self.api_base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.repo.as_str(), "contents"])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    /// Public raw-content URL of a repository path on the configured branch
    #[must_use]
    pub fn raw_url(&self, path: &str) -> String {
        format!("{RAW_BASE_URL}/{}/{}/{}/{path}", self.owner, self.repo, self.branch)
    }

    /// Repository path of an uploaded image
    #[must_use]
    pub fn image_path(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.image_dir.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct PutBody<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    path: String,
    sha: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    content: Option<PutContent>,
}

#[derive(Debug, Deserialize)]
struct PutContent {
    sha: Option<String>,
}

/// Decode the API's base64 payload, which is wrapped at 60 columns
fn decode_content(raw: &str) -> Result<Vec<u8>, RemoteError> {
    let compact: String = raw.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| RemoteError::Decode(format!("file content: {e}")))
}

/// [`RemoteStore`] over the GitHub contents API
#[derive(Clone)]
pub struct GitHubContents {
    config: GitHubConfig,
    client: Client,
}

impl fmt::Debug for GitHubContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubContents")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GitHubContents {
    /// Build a client authenticating with `token`
    ///
    /// # Errors
    /// Returns [`RemoteError::NotConfigured`] if the token is blank or not a
    /// valid header value, [`RemoteError::Network`] if the client cannot be built
    pub fn new(config: GitHubConfig, token: &str) -> Result<Self, RemoteError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(RemoteError::NotConfigured("no access token".to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|_| RemoteError::NotConfigured("access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));

        let mut builder = Client::builder();
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .default_headers(headers)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }
}

#[async_trait]
impl RemoteStore for GitHubContents {
    async fn get_file(&self, path: &str) -> Result<Option<RemoteFile>, RemoteError> {
        let url = self.config.contents_url(path)?;
        debug!(path, "Fetching remote file");

        let response = self
            .client
            .get(url)
            .query(&[("ref", self.config.branch.as_str())])
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(path, "Remote file does not exist");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = RemoteError::from_response(status, path, &body);
            warn!(path, error = %err, "Remote read failed");
            return Err(err);
        }

        let body: ContentsResponse = response.json().await?;
        if body.encoding != "base64" {
            return Err(RemoteError::Decode(format!(
                "{path}: unsupported content encoding {:?}",
                body.encoding
            )));
        }
        Ok(Some(RemoteFile {
            content: decode_content(&body.content)?,
            path: body.path,
            sha: body.sha,
        }))
    }

    async fn put_file(
        &self,
        path: &str,
        content: &[u8],
        message: &str,
        revision: Option<&str>,
    ) -> Result<PutReceipt, RemoteError> {
        let url = self.config.contents_url(path)?;
        let body = PutBody {
            message,
            content: STANDARD.encode(content),
            branch: &self.config.branch,
            sha: revision,
        };

        let response = self.client.put(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = RemoteError::from_response(status, path, &text);
            warn!(path, error = %err, "Remote write failed");
            return Err(err);
        }

        let parsed: PutResponse = response.json().await?;
        let receipt = PutReceipt {
            path: path.to_string(),
            sha: parsed.content.and_then(|c| c.sha),
            created: status == StatusCode::CREATED,
        };
        info!(path, created = receipt.created, bytes = content.len(), "Remote file written");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn contents_url_layout() {
        let config = GitHubConfig::default();
        assert_eq!(
            config.contents_url("Art_Examples/the_joker.jpg").unwrap().as_str(),
            "https://api.github.com/repos/Cannon-Art/Files/contents/Art_Examples/the_joker.jpg"
        );

        let enterprise = GitHubConfig::default().with_api_base_url("https://git.example.com/api/v3/");
        assert_eq!(
            enterprise.contents_url("gallery-data.json").unwrap().as_str(),
            "https://git.example.com/api/v3/repos/Cannon-Art/Files/contents/gallery-data.json"
        );
    }

    #[test]
    fn contents_url_encodes_segments() {
        let url = GitHubConfig::default().contents_url("a dir/b#c.html").unwrap();
        assert!(url.as_str().ends_with("/contents/a%20dir/b%23c.html"));
    }

    #[test]
    fn bad_base_url_is_not_configured() {
        let config = GitHubConfig::default().with_api_base_url("not a url");
        assert!(matches!(
            config.contents_url("x"),
            Err(RemoteError::NotConfigured(_))
        ));
    }

    #[test]
    fn raw_and_image_paths() {
        let config = GitHubConfig::default();
        let path = config.image_path("stones.png");
        assert_eq!(path, "Art_Examples/stones.png");
        assert_eq!(
            config.raw_url(&path),
            "https://raw.githubusercontent.com/Cannon-Art/Files/main/Art_Examples/stones.png"
        );
    }

    #[test]
    fn put_body_omits_sha_on_create() {
        let create = PutBody {
            message: "Upload image: a.png",
            content: STANDARD.encode(b"hi"),
            branch: "main",
            sha: None,
        };
        assert_eq!(
            serde_json::to_string(&create).unwrap(),
            r#"{"message":"Upload image: a.png","content":"aGk=","branch":"main"}"#
        );

        let update = PutBody { sha: Some("abc"), ..create };
        assert!(serde_json::to_string(&update).unwrap().ends_with(r#""sha":"abc"}"#));
    }

    #[test]
    fn decode_ignores_line_wrapping() {
        assert_eq!(decode_content("eyJz\nZWN0\naW9ucyI6e319\n").unwrap(), br#"{"sections":{}}"#);
        assert!(matches!(decode_content("***"), Err(RemoteError::Decode(_))));
    }

    #[test]
    fn blank_token_rejected() {
        assert!(matches!(
            GitHubContents::new(GitHubConfig::default(), "   "),
            Err(RemoteError::NotConfigured(_))
        ));
    }

    #[test]
    fn debug_hides_client() {
        let client = GitHubContents::new(GitHubConfig::default(), "ghp_secret_value_1234567890").unwrap();
        assert!(!format!("{client:?}").contains("ghp_secret"));
    }
}
