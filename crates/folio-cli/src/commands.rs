//! Command dispatch

use crate::args::{AddArgs, Cli, Command, GlobalArgs, TokenCommand};
use crate::output::{format_listing, format_token_status};
use anyhow::{bail, Context, Result};
use folio_core::{ControlPanel, FolioConfig};
use folio_gate::{Gate, Session, Unlock};
use folio_model::{NewPicture, SectionFilter};
use std::fmt::Write;
use tracing::{debug, info};

/// Outcome of the password gate for one invocation
#[derive(Debug)]
struct Access {
    session: Session,
    password_changed: bool,
}

/// Run one parsed invocation and return the text to print
///
/// # Errors
/// Returns error if the gate refuses access or the command fails
pub async fn run(cli: Cli) -> Result<String> {
    let Cli { global, command } = cli;

    let config = FolioConfig::load_or_default(&global.config)
        .with_context(|| format!("failed to load {}", global.config.display()))?;
    let mut panel = ControlPanel::open(config)
        .await
        .context("failed to open the control panel")?;

    let access = if command.requires_session() {
        Some(unlock(&panel.gate(), &global)?)
    } else {
        debug!("Read-only command, gate skipped");
        None
    };

    let output = match command {
        Command::Login => match &access {
            Some(a) if a.session.kept_default_password() => {
                "Access granted; the factory password is still in use, change it with `folio passwd`"
                    .to_string()
            }
            Some(a) if a.password_changed => "Access granted; password changed".to_string(),
            _ => "Access granted".to_string(),
        },
        Command::Passwd => {
            if !access.as_ref().is_some_and(|a| a.password_changed) {
                let new_password = global
                    .new_password
                    .as_deref()
                    .context("`folio passwd` needs --new-password")?;
                panel
                    .gate()
                    .change_password(new_password, global.confirm_password.as_deref())?;
            }
            "Password changed".to_string()
        }
        Command::Token { command } => run_token(&panel, command)?,
        Command::List { section } => {
            let filter = section.map_or(SectionFilter::All, SectionFilter::Only);
            format_listing(&panel.list(&filter))
        }
        Command::Add(args) => add(&mut panel, require(access.as_ref())?, args).await?,
        Command::Edit {
            section,
            id,
            field,
            value,
        } => panel
            .edit_picture(require(access.as_ref())?, &section, &id, field, &value)
            .await?
            .to_string(),
        Command::Delete { section, id } => panel
            .delete_picture(require(access.as_ref())?, &section, &id)
            .await?
            .to_string(),
        Command::Render { out } => {
            let written = panel.render_to_dir(&out).await?;
            let mut text = format!("Wrote {} page(s) to {}", written.len(), out.display());
            for path in &written {
                let _ = write!(text, "\n  {}", path.display());
            }
            text
        }
        Command::Export => panel.export_json()?,
        Command::Publish => {
            let report = panel.publish(require(access.as_ref())?).await?;
            let mut text = report.to_string();
            for (file, error) in &report.failed {
                let _ = write!(text, "\n  {file}: {error}");
            }
            text
        }
        Command::PushPage { section } => {
            let receipt = panel.push_page(require(access.as_ref())?, &section).await?;
            format!("Pushed {}", receipt.path)
        }
        Command::Pull => panel.pull(require(access.as_ref())?).await?.to_string(),
    };
    Ok(output)
}

fn unlock(gate: &Gate, global: &GlobalArgs) -> Result<Access> {
    let password = global
        .password
        .as_deref()
        .context("password required: pass --password or set FOLIO_PASSWORD")?;

    match gate.unlock(password)? {
        Unlock::Denied => bail!("access denied: incorrect password"),
        Unlock::Granted(session) => Ok(Access {
            session,
            password_changed: false,
        }),
        Unlock::ChangeRequired(pending) => {
            if let Some(new_password) = global.new_password.as_deref() {
                let session =
                    pending.change_password(new_password, global.confirm_password.as_deref())?;
                info!("Factory password replaced");
                Ok(Access {
                    session,
                    password_changed: true,
                })
            } else if global.keep_default {
                Ok(Access {
                    session: pending.continue_with_default(),
                    password_changed: false,
                })
            } else {
                bail!(
                    "the factory password must be changed: pass --new-password (with --confirm-password) or --keep-default"
                )
            }
        }
    }
}

fn require(access: Option<&Access>) -> Result<&Session> {
    access
        .map(|a| &a.session)
        .context("command requires an unlocked session")
}

fn run_token(panel: &ControlPanel, command: TokenCommand) -> Result<String> {
    let credentials = panel.credentials();
    Ok(match command {
        TokenCommand::Set { token } => {
            let status = credentials.set_token(&token)?;
            format!("Token saved. {}", format_token_status(&status))
        }
        TokenCommand::Clear => {
            credentials.clear_token()?;
            "Token removed; remote features are disabled".to_string()
        }
        TokenCommand::Status => format_token_status(&credentials.token_status()?),
    })
}

async fn add(panel: &mut ControlPanel, session: &Session, args: AddArgs) -> Result<String> {
    let AddArgs {
        section,
        name,
        medium,
        url,
        image,
        year,
        notes,
    } = args;

    let mut picture = NewPicture::new(name, url.unwrap_or_default(), medium);
    if let Some(year) = year {
        picture = picture.with_year(year);
    }
    if let Some(notes) = notes {
        picture = picture.with_notes(notes);
    }

    let report = panel
        .add_picture(session, &section, picture, image.as_deref())
        .await?;
    Ok(report.to_string())
}
