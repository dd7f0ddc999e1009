use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use ajaxctl::client::{parse_method, ActionOutcome, AjaxActionClient, DownloadKind, Form};
use ajaxctl::config::Config;
use ajaxctl::logger;
use ajaxctl::storage::FileStore;
use ajaxctl::theme::ThemeController;
use ajaxctl::transport::HttpTransport;
use ajaxctl::ui::terminal::{TerminalBusyIndicator, TerminalDialogs, TerminalNavigator};
use ajaxctl::ui::{Capabilities, DirectorySaver, UiState};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reqwest::Method;

#[derive(Parser)]
#[command(name = "ajaxctl", version, about = "Drive JSON action endpoints from the terminal")]
struct Cli {
    /// Configuration file (defaults to ./ajaxctl.toml, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Answer confirmation prompts with "yes"
    #[arg(short = 'y', long, global = true)]
    yes: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Delete a resource after confirmation, then reload the current view
    Delete {
        url: String,
        /// Name shown in the confirmation prompt
        #[arg(long)]
        name: Option<String>,
    },
    /// Submit form fields to an action endpoint
    Submit {
        url: String,
        /// Form method (defaults to POST)
        #[arg(long, value_parser = parse_method)]
        method: Option<Method>,
        /// Form field as key=value, may be repeated
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Download a generated file
    Download {
        url: String,
        /// File name to save under
        #[arg(long)]
        filename: Option<String>,
        #[arg(long, value_enum, default_value = "excel")]
        kind: KindArg,
    },
    /// Show or toggle the theme preference
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Write a default configuration file
    InitConfig {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Excel,
    Pdf,
}

impl From<KindArg> for DownloadKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Excel => DownloadKind::Excel,
            KindArg::Pdf => DownloadKind::Pdf,
        }
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

/// Zero for outcomes that did what was asked, one otherwise.
fn exit_status(outcome: &ActionOutcome) -> u8 {
    if outcome.is_success() {
        0
    } else {
        1
    }
}

fn build_client(config: &Config, ui: UiState, assume_yes: bool) -> Result<AjaxActionClient> {
    let base = config.base_url()?;
    let transport = HttpTransport::new(&config.http).context("Failed to build HTTP client")?;

    let caps = Capabilities::default()
        .with_dialogs(Arc::new(TerminalDialogs::new(assume_yes || config.ui.assume_yes, config.ui.color)))
        .with_busy(Arc::new(TerminalBusyIndicator::new(config.ui.color)))
        .with_navigator(Arc::new(TerminalNavigator::new(base.to_string())))
        .with_saver(Arc::new(DirectorySaver::new(config.download_dir())));

    Ok(AjaxActionClient::new(Arc::new(transport), ui, caps).with_base_url(base))
}

fn run_theme(config: &Config, ui: UiState, toggle: bool) -> Result<()> {
    let store = FileStore::open_default().context("Failed to open preference store")?;
    let controller = ThemeController::new(store, ui);

    let mut theme = controller.init(config.ui.prefers_dark);
    if toggle {
        theme = controller.toggle().context("Failed to save theme preference")?;
    }

    println!("{theme}");
    eprintln!("Toggle: {}", theme.toggle_label());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    logger::init(&config.logging)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let ui = UiState::new();

    let outcome = match cli.command {
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(&path)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Theme { toggle } => {
            let config = load_config(cli.config.as_deref())?;
            run_theme(&config, ui, toggle)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Delete { url, name } => {
            let config = load_config(cli.config.as_deref())?;
            let client = build_client(&config, ui, cli.yes)?;
            client.confirm_delete(&url, name.as_deref(), None).await
        }
        Command::Submit { url, method, fields } => {
            let config = load_config(cli.config.as_deref())?;
            let client = build_client(&config, ui, cli.yes)?;
            let form = Form {
                action: url,
                method,
                fields,
            };
            client.submit_form(&form, None).await
        }
        Command::Download { url, filename, kind } => {
            let config = load_config(cli.config.as_deref())?;
            let client = build_client(&config, ui, cli.yes)?;
            client.download(&url, filename.as_deref(), kind.into()).await
        }
    };

    if let ActionOutcome::Saved { location } = &outcome {
        println!("{location}");
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ajaxctl::client::FollowUp;
    use ajaxctl::ActionResult;

    #[test]
    fn test_parse_field_splits_on_first_equals() {
        assert_eq!(parse_field("a=b=c").unwrap(), ("a".to_string(), "b=c".to_string()));
        assert_eq!(parse_field("a=").unwrap(), ("a".to_string(), String::new()));
        assert!(parse_field("=x").is_err());
        assert!(parse_field("novalue").is_err());
    }

    #[test]
    fn test_submit_arguments() {
        let cli = Cli::try_parse_from([
            "ajaxctl", "submit", "/rooms", "--method", "get", "-f", "k=v", "--field", "name=Lab 2",
        ])
        .unwrap();

        match cli.command {
            Command::Submit { url, method, fields } => {
                assert_eq!(url, "/rooms");
                assert_eq!(method, Some(Method::GET));
                assert_eq!(
                    fields,
                    vec![
                        ("k".to_string(), "v".to_string()),
                        ("name".to_string(), "Lab 2".to_string()),
                    ]
                );
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_submit_rejects_malformed_field() {
        assert!(Cli::try_parse_from(["ajaxctl", "submit", "/rooms", "-f", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["ajaxctl", "submit", "/rooms", "--method", ""]).is_err());
    }

    #[test]
    fn test_download_arguments() {
        let cli = Cli::try_parse_from(["ajaxctl", "-y", "download", "/export", "--kind", "pdf"]).unwrap();
        assert!(cli.yes);
        match cli.command {
            Command::Download { url, filename, kind } => {
                assert_eq!(url, "/export");
                assert_eq!(filename, None);
                assert!(matches!(kind, KindArg::Pdf));
            }
            _ => panic!("expected download"),
        }

        let cli = Cli::try_parse_from(["ajaxctl", "download", "/export"]).unwrap();
        assert!(matches!(cli.command, Command::Download { kind: KindArg::Excel, .. }));
    }

    #[test]
    fn test_exit_status_follows_outcome() {
        let completed = ActionOutcome::Completed {
            result: ActionResult {
                success: true,
                message: None,
                redirect: None,
            },
            follow_up: FollowUp::None,
        };
        let saved = ActionOutcome::Saved {
            location: "download.xlsx".to_string(),
        };
        let rejected = ActionOutcome::Rejected(ActionResult {
            success: false,
            message: Some("Not found".to_string()),
            redirect: None,
        });

        assert_eq!(exit_status(&completed), 0);
        assert_eq!(exit_status(&saved), 0);
        assert_eq!(exit_status(&rejected), 1);
        assert_eq!(exit_status(&ActionOutcome::Cancelled), 1);
    }
}
