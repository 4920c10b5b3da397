//! REPL command parsing and execution.
//!
//! Commands:
//! - `ls [-l]` - List the current directory
//! - `cd [path]` / `cd ..` - Jump to a path, the root, or the parent
//! - `open <dir>` - Descend into a child directory
//! - `up` - Go to the parent directory
//! - `pwd` - Print the current path
//! - `crumbs` - Print the breadcrumb trail
//! - `mkdir <name>` - Create a directory here
//! - `put <local-file> [name]` - Upload a local file here
//! - `server <url>` - Point the client at a different server
//! - `recent`, `starred`, `get`, `rm` - Reserved, report "not supported"
//! - `help`, `exit`

use nu_ansi_term::Color;

use shelf_browser::{dispatch, BrowserSession, Command, CommandOutcome};
use shelf_core::Path;
use shelf_http::{FileGateway, HttpExecutor};

/// Result of executing a command line.
pub enum CommandResult {
    /// Command succeeded, optionally with output to display.
    Ok { display: Option<String> },
    /// Command failed with an error message.
    Error(String),
    /// Show help.
    Help,
    /// User requested to exit.
    Exit,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command line.
pub fn execute<E: HttpExecutor>(
    input: &str,
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
) -> CommandResult {
    let input = input.trim();
    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut words = input.split_whitespace();
    let command = match words.next() {
        Some(word) => word,
        None => return CommandResult::ok_none(),
    };
    let args: Vec<&str> = words.collect();

    match command {
        "ls" => {
            let long = args.contains(&"-l");
            dispatch(session, gateway, Command::Navigate(None));
            CommandResult::ok_display(format_view(session, long))
        }
        "cd" => match args.first() {
            None => {
                dispatch(session, gateway, Command::Navigate(Some(Path::root())));
                CommandResult::ok_display(format_location(session))
            }
            Some(&"..") => ascend(session, gateway),
            Some(_) => {
                // names may contain spaces
                let raw = args.join(" ");
                match Path::parse(&raw) {
                    Ok(path) => {
                        dispatch(session, gateway, Command::Navigate(Some(path)));
                        CommandResult::ok_display(format_location(session))
                    }
                    Err(error) => CommandResult::Error(error.to_string()),
                }
            }
        },
        "open" => {
            let name = args.join(" ");
            if name.is_empty() {
                return CommandResult::Error("usage: open <directory>".to_string());
            }
            match dispatch(session, gateway, Command::Enter(name)) {
                CommandOutcome::Listed => CommandResult::ok_display(format_location(session)),
                CommandOutcome::Failed(message) => CommandResult::Error(message),
                other => CommandResult::Error(format!("unexpected outcome: {:?}", other)),
            }
        }
        "up" => ascend(session, gateway),
        "pwd" => CommandResult::ok_display(format_path(session.current_path())),
        "crumbs" => {
            let trail: Vec<String> = session
                .breadcrumbs()
                .iter()
                .map(|crumb| {
                    format!(
                        "{} {}",
                        crumb.label,
                        Color::DarkGray.paint(format!("({})", format_path(&crumb.target)))
                    )
                })
                .collect();
            CommandResult::ok_display(trail.join(" > "))
        }
        "mkdir" => {
            let name = args.join(" ");
            if name.is_empty() {
                return CommandResult::Error("usage: mkdir <name>".to_string());
            }
            match dispatch(session, gateway, Command::CreateDirectory(name.clone())) {
                CommandOutcome::DirectoryCreated => {
                    CommandResult::ok_display(format!("created {}", Color::Blue.paint(&name)))
                }
                CommandOutcome::Failed(message) => CommandResult::Error(message),
                other => CommandResult::Error(format!("unexpected outcome: {:?}", other)),
            }
        }
        "put" => put(session, gateway, &args),
        "server" => match args.first() {
            None => CommandResult::ok_display(format!("server: {}", gateway.base_url())),
            Some(raw) => match url::Url::parse(raw) {
                Ok(url) => {
                    dispatch(session, gateway, Command::SetServer(url));
                    CommandResult::ok_display(format!(
                        "server set: {} ({} entries at root)",
                        gateway.base_url(),
                        session.view().len()
                    ))
                }
                Err(error) => CommandResult::Error(format!("invalid URL: {}", error)),
            },
        },
        "recent" => unsupported(session, gateway, Command::Recent),
        "starred" => unsupported(session, gateway, Command::Starred),
        "get" => reserved_on_entry(session, gateway, &args, "get", Command::Download),
        "rm" => reserved_on_entry(session, gateway, &args, "rm", Command::Delete),
        "help" => CommandResult::Help,
        "exit" | "quit" => CommandResult::Exit,
        unknown => CommandResult::Error(format!(
            "unknown command: {} (type 'help' for the command list)",
            unknown
        )),
    }
}

fn ascend<E: HttpExecutor>(
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
) -> CommandResult {
    match dispatch(session, gateway, Command::Ascend) {
        CommandOutcome::Listed => CommandResult::ok_display(format_location(session)),
        CommandOutcome::NoOp => CommandResult::ok_display(format!(
            "nothing above {} (use the crumbs to jump to the root)",
            format_path(session.current_path())
        )),
        other => CommandResult::Error(format!("unexpected outcome: {:?}", other)),
    }
}

fn put<E: HttpExecutor>(
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
    args: &[&str],
) -> CommandResult {
    let local = match args.first() {
        Some(local) => local,
        None => return CommandResult::Error("usage: put <local-file> [name]".to_string()),
    };

    let bytes = match std::fs::read(local) {
        Ok(bytes) => bytes,
        Err(error) => return CommandResult::Error(format!("cannot read {}: {}", local, error)),
    };

    let filename = match args.get(1) {
        Some(name) => name.to_string(),
        None => match std::path::Path::new(local).file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return CommandResult::Error(format!("{} has no file name", local)),
        },
    };

    match dispatch(
        session,
        gateway,
        Command::ChooseFile {
            filename: filename.clone(),
            bytes,
        },
    ) {
        CommandOutcome::FileChosen => {}
        CommandOutcome::Failed(message) => return CommandResult::Error(message),
        other => return CommandResult::Error(format!("unexpected outcome: {:?}", other)),
    }

    match dispatch(session, gateway, Command::Upload) {
        CommandOutcome::Uploaded => CommandResult::ok_display(format!(
            "uploaded {} to {}",
            filename,
            format_path(session.current_path())
        )),
        CommandOutcome::UploadFailed(message) => {
            CommandResult::Error(format!("upload failed: {}", message))
        }
        CommandOutcome::Failed(message) => CommandResult::Error(message),
        other => CommandResult::Error(format!("unexpected outcome: {:?}", other)),
    }
}

fn unsupported<E: HttpExecutor>(
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
    command: Command,
) -> CommandResult {
    match dispatch(session, gateway, command) {
        CommandOutcome::Unsupported(capability) => CommandResult::ok_display(
            Color::Yellow
                .paint(format!("'{}' is not supported by this client yet", capability))
                .to_string(),
        ),
        other => CommandResult::Error(format!("unexpected outcome: {:?}", other)),
    }
}

fn reserved_on_entry<E: HttpExecutor>(
    session: &mut BrowserSession,
    gateway: &mut FileGateway<E>,
    args: &[&str],
    usage: &str,
    command: fn(Path) -> Command,
) -> CommandResult {
    let name = args.join(" ");
    if name.is_empty() {
        return CommandResult::Error(format!("usage: {} <name>", usage));
    }
    match session.current_path().child(&name) {
        Ok(target) => unsupported(session, gateway, command(target)),
        Err(error) => CommandResult::Error(error.to_string()),
    }
}

fn format_path(path: &Path) -> String {
    if path.is_root() {
        "/".to_string()
    } else {
        format!("/{}", path)
    }
}

fn format_location(session: &BrowserSession) -> String {
    format!(
        "{} ({} directories, {} files)",
        Color::Yellow.paint(format_path(session.current_path())),
        session.view().directories.len(),
        session.view().files.len()
    )
}

fn format_view(session: &BrowserSession, long: bool) -> String {
    let view = session.view();
    if view.is_empty() {
        return Color::DarkGray.paint("(empty)").to_string();
    }

    if long {
        let mut lines = Vec::with_capacity(view.len());
        for entry in &view.directories {
            lines.push(format!("d  {}", Color::Blue.bold().paint(&entry.name)));
        }
        for entry in &view.files {
            lines.push(format!("f  {}", entry.name));
        }
        lines.join("\n")
    } else {
        let mut names = Vec::with_capacity(view.len());
        for entry in &view.directories {
            names.push(Color::Blue.bold().paint(&entry.name).to_string());
        }
        for entry in &view.files {
            names.push(entry.name.clone());
        }
        names.join("  ")
    }
}

/// Help text for the `help` command.
pub fn format_help() -> String {
    let mut help = String::from("Commands:\n");
    for (usage, description) in COMMAND_HELP {
        help.push_str(&format!("  {:<22} {}\n", usage, description));
    }
    help.push_str("\nReserved (not supported yet): recent, starred, get, rm\n");
    help
}

const COMMAND_HELP: &[(&str, &str)] = &[
    ("ls [-l]", "List the current directory"),
    ("cd [path|..]", "Jump to a path, the root, or the parent"),
    ("open <dir>", "Descend into a child directory"),
    ("up", "Go to the parent directory"),
    ("pwd", "Print the current path"),
    ("crumbs", "Print the breadcrumb trail"),
    ("mkdir <name>", "Create a directory here"),
    ("put <file> [name]", "Upload a local file here"),
    ("server [url]", "Show or change the server base URL"),
    ("help", "Show this help"),
    ("exit", "Exit"),
];
