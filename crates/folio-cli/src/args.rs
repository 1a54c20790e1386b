//! Command-line arguments

use clap::{ArgAction, Args, Parser, Subcommand};
use folio_core::DEFAULT_CONFIG_FILE;
use folio_model::{Medium, PictureField};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(version, about = "Gallery control panel for the Cannon Art portfolio site")]
#[command(
    after_help = "Environment:\n  FOLIO_PASSWORD   Control panel password\n  RUST_LOG         Log filter override"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Control panel password
    #[arg(long, global = true, env = "FOLIO_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Replacement password, required while the factory password is in use
    #[arg(long, global = true)]
    pub new_password: Option<String>,

    /// Confirmation of --new-password
    #[arg(long, global = true, requires = "new_password")]
    pub confirm_password: Option<String>,

    /// Keep the factory password for this run
    #[arg(long, global = true, conflicts_with = "new_password")]
    pub keep_default: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check the password
    Login,
    /// Change the password (needs --new-password)
    Passwd,
    /// Manage the repository access token
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
    /// List pictures
    List {
        /// Only this section
        #[arg(long)]
        section: Option<String>,
    },
    /// Add a picture
    Add(AddArgs),
    /// Change one field of a picture
    Edit {
        section: String,
        id: String,
        /// name, imageUrl, medium, notes or year
        field: PictureField,
        value: String,
    },
    /// Delete a picture
    Delete { section: String, id: String },
    /// Write every gallery page into a directory
    Render {
        #[arg(long, default_value = "site")]
        out: PathBuf,
    },
    /// Print the catalog JSON
    Export,
    /// Push the catalog and every gallery page
    Publish,
    /// Push one regenerated gallery page
    PushPage { section: String },
    /// Replace the local catalog with the repository copy
    Pull,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TokenCommand {
    /// Store a token
    Set { token: String },
    /// Remove the stored token
    Clear,
    /// Show whether a token is stored
    Status,
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    pub section: String,
    pub name: String,
    /// Oil, Watercolour, Acrylic, Pencil or Mixed Media
    pub medium: Medium,
    /// Image URL; required unless --image is given
    #[arg(long, required_unless_present = "image")]
    pub url: Option<String>,
    /// Local image file to upload
    #[arg(long, conflicts_with = "url")]
    pub image: Option<PathBuf>,
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl Command {
    /// Whether the command needs an unlocked session
    #[must_use]
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::List { .. }
                | Self::Export
                | Self::Render { .. }
                | Self::Token {
                    command: TokenCommand::Status
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_image() {
        let cli = Cli::try_parse_from([
            "folio",
            "add",
            "dc-characters",
            "The Joker",
            "mixed-media",
            "--image",
            "joker.png",
            "--year",
            "2019",
        ])
        .unwrap();

        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.medium, Medium::MixedMedia);
        assert_eq!(args.image, Some(PathBuf::from("joker.png")));
        assert!(args.url.is_none());
    }

    #[test]
    fn add_needs_url_or_image() {
        assert!(Cli::try_parse_from(["folio", "add", "dc-characters", "X", "Oil"]).is_err());
        assert!(Cli::try_parse_from([
            "folio", "add", "dc-characters", "X", "Oil", "--url", "u", "--image", "i.png"
        ])
        .is_err());
    }

    #[test]
    fn parses_edit_field_and_globals() {
        let cli = Cli::try_parse_from([
            "folio",
            "edit",
            "dc-characters",
            "dc-001",
            "imageUrl",
            "https://x",
            "--config",
            "other.toml",
            "-vv",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Edit {
                field: PictureField::ImageUrl,
                ..
            }
        ));
        assert_eq!(cli.global.config, PathBuf::from("other.toml"));
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn keep_default_conflicts_with_new_password() {
        assert!(Cli::try_parse_from([
            "folio",
            "login",
            "--keep-default",
            "--new-password",
            "abcdefgh"
        ])
        .is_err());
    }

    #[test]
    fn read_only_commands_skip_the_gate() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;
        assert!(!parse(&["folio", "list"]).requires_session());
        assert!(!parse(&["folio", "export"]).requires_session());
        assert!(!parse(&["folio", "token", "status"]).requires_session());
        assert!(parse(&["folio", "token", "clear"]).requires_session());
        assert!(parse(&["folio", "publish"]).requires_session());
    }
}
