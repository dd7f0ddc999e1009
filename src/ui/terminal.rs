//! Terminal implementations of the UI capabilities, used by the CLI.

use async_trait::async_trait;
use crossterm::{
    cursor::MoveToColumn,
    execute,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{BusyIndicator, ConfirmPrompt, Dialogs, Navigator, ToastKind};

fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        text.with(color).bold().to_string()
    } else {
        text.to_string()
    }
}

/// Returns true for an affirmative answer ("y", "yes", any case).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Dialogs printed to stderr, answered on stdin.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDialogs {
    assume_yes: bool,
    color: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool, color: bool) -> Self {
        Self { assume_yes, color }
    }
}

#[async_trait]
impl Dialogs for TerminalDialogs {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        eprintln!("{}", paint(&format!("⚠️  {}", prompt.title), Color::Yellow, self.color));
        eprintln!("{}", prompt.text);

        if self.assume_yes {
            eprintln!("{} (--yes)", prompt.confirm_label);
            return true;
        }

        eprint!("{} [y] / {} [n]: ", prompt.confirm_label, prompt.cancel_label);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut answer).await {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                log::warn!("Failed to read confirmation answer: {e}");
                false
            }
        }
    }

    async fn success(&self, title: &str, text: &str) {
        eprintln!("{} {}", paint(&format!("✅ {title}"), Color::Green, self.color), text);
    }

    async fn error(&self, title: &str, text: &str) {
        eprintln!("{} {}", paint(&format!("❌ {title}"), Color::Red, self.color), text);
    }

    async fn toast(&self, kind: ToastKind, title: &str) {
        let (icon, color) = match kind {
            ToastKind::Success => ("✅", Color::Green),
            ToastKind::Error => ("❌", Color::Red),
            ToastKind::Warning => ("⚠️ ", Color::Yellow),
            ToastKind::Info => ("ℹ️ ", Color::Cyan),
        };
        eprintln!("{}", paint(&format!("{icon} {title}"), color, self.color));
    }
}

/// Single-line spinner on stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBusyIndicator {
    color: bool,
}

impl TerminalBusyIndicator {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl BusyIndicator for TerminalBusyIndicator {
    fn show(&self, label: &str) {
        let line = paint(&format!("⟳ {label}"), Color::Yellow, self.color);
        let mut stderr = std::io::stderr();
        if stderr.is_terminal() {
            let _ = write!(stderr, "{line}");
            let _ = stderr.flush();
        } else {
            let _ = writeln!(stderr, "{line}");
        }
    }

    fn hide(&self) {
        let mut stderr = std::io::stderr();
        if stderr.is_terminal() {
            let _ = execute!(stderr, MoveToColumn(0), Clear(ClearType::CurrentLine));
        }
    }
}

/// Prints follow-up destinations. The destination goes to stdout so scripts can pick it up.
#[derive(Debug, Clone)]
pub struct TerminalNavigator {
    current_view: String,
}

impl TerminalNavigator {
    pub fn new(current_view: impl Into<String>) -> Self {
        Self {
            current_view: current_view.into(),
        }
    }
}

impl Navigator for TerminalNavigator {
    fn reload(&self) {
        eprintln!("↻ Reloading {}", self.current_view);
        println!("{}", self.current_view);
    }

    fn navigate(&self, uri: &str) {
        eprintln!("→ Redirecting to {uri}");
        println!("{uri}");
    }
}
