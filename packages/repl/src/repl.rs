//! The interactive loop: reedline in, styled output back.

use std::borrow::Cow;
use std::path::PathBuf;

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultHinter, Emacs, KeyCode, KeyModifiers,
    MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline,
    ReedlineEvent, ReedlineMenu, Signal,
};

use shelf_browser::BrowserSession;
use shelf_http::FileGateway;

use crate::commands::{self, CommandResult};
use crate::completer::ShelfCompleter;

/// Where the store server listens when nothing else is configured.
pub const DEFAULT_SERVER: &str = "http://localhost:9000";

#[derive(thiserror::Error, Debug)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("gateway error: {0}")]
    Gateway(#[from] shelf_http::GatewayError),
}

/// Run the interactive client until the user exits.
pub fn run(server: Option<&str>) -> Result<(), ReplError> {
    let base = server.unwrap_or(DEFAULT_SERVER);
    let mut gateway = FileGateway::new(base)?;
    let mut session = BrowserSession::new();

    println!("{}", Color::Cyan.paint(BANNER));
    println!("Connected to {}", Color::Yellow.paint(gateway.base_url().as_str()));

    // Initial root listing
    session.refresh_via(&gateway);

    let mut line_editor = build_line_editor();

    loop {
        let prompt = ShelfPrompt::for_session(&session);

        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => {
                match commands::execute(&line, &mut session, &mut gateway) {
                    CommandResult::Ok { display: None } => {}
                    CommandResult::Ok {
                        display: Some(output),
                    } => println!("{}", output),
                    CommandResult::Error(message) => {
                        println!("{} {}", Color::Red.bold().paint("Error:"), message)
                    }
                    CommandResult::Help => println!("{}", commands::format_help()),
                    CommandResult::Exit => {
                        println!("{}", Color::Cyan.paint("Goodbye!"));
                        return Ok(());
                    }
                }
            }
            Signal::CtrlC => {
                println!("{}", Color::Cyan.paint("^C (use 'exit' to quit)"));
            }
            Signal::CtrlD => {
                println!("{}", Color::Cyan.paint("Goodbye!"));
                return Ok(());
            }
        }
    }
}

fn build_line_editor() -> Reedline {
    let completer = Box::new(ShelfCompleter::new());
    let hinter =
        Box::new(DefaultHinter::default().with_style(Style::new().fg(Color::LightGray).dimmed()));

    let completion_menu = Box::new(
        ColumnarMenu::default()
            .with_name("completion_menu")
            .with_text_style(Style::new().fg(Color::Cyan))
            .with_selected_text_style(Style::new().fg(Color::Black).on(Color::Cyan).bold()),
    );

    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );

    let mut line_editor = Reedline::create()
        .with_completer(completer)
        .with_hinter(hinter)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    if let Some(history_path) = history_path() {
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(history) = reedline::FileBackedHistory::with_file(1000, history_path) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    line_editor
}

fn history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("shelf").join("history.txt"))
}

/// Prompt showing the breadcrumb trail of the current path.
struct ShelfPrompt {
    trail: String,
}

impl ShelfPrompt {
    fn for_session(session: &BrowserSession) -> Self {
        let labels: Vec<String> = session
            .breadcrumbs()
            .iter()
            .map(|crumb| crumb.label.clone())
            .collect();
        Self {
            trail: labels.join(" › "),
        }
    }
}

impl Prompt for ShelfPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(Color::Yellow.paint(&self.trail).to_string())
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

const BANNER: &str = r#"
     _          _  __
 ___| |__   ___| |/ _|
/ __| '_ \ / _ \ | |_
\__ \ | | |  __/ |  _|
|___/_| |_|\___|_|_|

Type 'help' for available commands, 'exit' to quit.
"#;
