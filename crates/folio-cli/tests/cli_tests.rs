use clap::Parser;
use folio_cli::{run, Cli};
use folio_core::FolioConfig;
use folio_model::Catalog;
use folio_test_utils::{FACTORY_PASSWORD, TEST_TOKEN};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("folio.toml");
        let toml = FolioConfig::new()
            .with_catalog_path(dir.path().join("gallery-data.json"))
            .with_credentials_path(dir.path().join("state/credentials.json"))
            .to_toml()
            .unwrap();
        std::fs::write(&config, toml).unwrap();
        Self { dir, config }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    async fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let config = self.config.to_str().unwrap();
        let mut argv = vec!["folio", "--config", config];
        argv.extend_from_slice(args);
        run(Cli::try_parse_from(argv).unwrap()).await
    }
}

#[tokio::test]
async fn test_add_list_export_without_token() {
    let ws = Workspace::new();

    let out = ws
        .run(&[
            "add",
            "dc-characters",
            "The Joker",
            "oil",
            "--url",
            "https://example.com/joker.jpg",
            "--year",
            "2019",
            "--password",
            FACTORY_PASSWORD,
            "--keep-default",
        ])
        .await
        .unwrap();
    assert!(out.starts_with("Picture dc-001 added in dc-characters"));
    assert!(out.contains("commit it manually"));

    let listing = ws.run(&["list", "--section", "dc-characters"]).await.unwrap();
    assert!(listing.contains("dc-001  The Joker [Oil] 2019"));

    let empty = ws.run(&["list", "--section", "music-legends"]).await.unwrap();
    assert_eq!(empty, "No pictures in Music Legends section yet");

    let json = ws.run(&["export"]).await.unwrap();
    let catalog = Catalog::from_json(&json).unwrap();
    assert_eq!(catalog.picture("dc-characters", "dc-001").unwrap().name, "The Joker");

    let saved = std::fs::read_to_string(ws.path().join("gallery-data.json")).unwrap();
    assert_eq!(saved, json);
}

#[tokio::test]
async fn test_gate_refuses_wrong_password() {
    let ws = Workspace::new();
    let err = ws
        .run(&["delete", "dc-characters", "dc-001", "--password", "not it"])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("access denied"));
}

#[tokio::test]
async fn test_factory_password_needs_a_decision() {
    let ws = Workspace::new();
    let err = ws
        .run(&["login", "--password", FACTORY_PASSWORD])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("--new-password"));

    let out = ws
        .run(&["login", "--password", FACTORY_PASSWORD, "--keep-default"])
        .await
        .unwrap();
    assert!(out.contains("factory password is still in use"));
}

#[tokio::test]
async fn test_password_change_persists() {
    let ws = Workspace::new();

    let err = ws
        .run(&[
            "login",
            "--password",
            FACTORY_PASSWORD,
            "--new-password",
            "short",
        ])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at least 8"));

    let out = ws
        .run(&[
            "login",
            "--password",
            FACTORY_PASSWORD,
            "--new-password",
            "gallery-secret",
            "--confirm-password",
            "gallery-secret",
        ])
        .await
        .unwrap();
    assert_eq!(out, "Access granted; password changed");

    assert!(ws
        .run(&["login", "--password", FACTORY_PASSWORD, "--keep-default"])
        .await
        .is_err());
    assert_eq!(
        ws.run(&["login", "--password", "gallery-secret"]).await.unwrap(),
        "Access granted"
    );

    ws.run(&[
        "passwd",
        "--password",
        "gallery-secret",
        "--new-password",
        "another-secret",
    ])
    .await
    .unwrap();
    assert!(ws.run(&["login", "--password", "another-secret"]).await.is_ok());
}

#[tokio::test]
async fn test_token_lifecycle() {
    let ws = Workspace::new();
    let gate = ["--password", FACTORY_PASSWORD, "--keep-default"];

    let status = ws.run(&["token", "status"]).await.unwrap();
    assert!(status.starts_with("No access token"));

    let mut set = vec!["token", "set", "too-short"];
    set.extend(gate);
    assert!(ws.run(&set).await.is_err());

    let mut set = vec!["token", "set", TEST_TOKEN];
    set.extend(gate);
    let out = ws.run(&set).await.unwrap();
    assert!(out.contains("ghp_0123..."));
    assert!(!out.contains(TEST_TOKEN));

    let status = ws.run(&["token", "status"]).await.unwrap();
    assert_eq!(status, "Access token configured: ghp_0123...");

    let mut clear = vec!["token", "clear"];
    clear.extend(gate);
    ws.run(&clear).await.unwrap();
    let status = ws.run(&["token", "status"]).await.unwrap();
    assert!(status.starts_with("No access token"));
}

#[tokio::test]
async fn test_remote_commands_need_token() {
    let ws = Workspace::new();
    for command in [&["publish"][..], &["pull"][..], &["push-page", "dc-characters"][..]] {
        let mut args = command.to_vec();
        args.extend(["--password", FACTORY_PASSWORD, "--keep-default"]);
        let err = ws.run(&args).await.unwrap_err();
        assert!(err.to_string().contains("access token"), "{err}");
    }
}

#[tokio::test]
async fn test_render_writes_pages() {
    let ws = Workspace::new();
    let out_dir = ws.path().join("site");
    let out = ws
        .run(&["render", "--out", out_dir.to_str().unwrap()])
        .await
        .unwrap();
    assert!(out.starts_with("Wrote 5 page(s)"));
    assert!(out_dir.join("miscellaneous.html").exists());
}
