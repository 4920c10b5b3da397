use reedline::{Completer, Span, Suggestion};

/// Command completer for the shelf prompt.
pub struct ShelfCompleter {
    commands: Vec<String>,
}

impl ShelfCompleter {
    pub fn new() -> Self {
        Self {
            commands: [
                "help", "exit", "quit", "ls", "cd", "open", "up", "pwd", "crumbs", "mkdir",
                "put", "server", "recent", "starred", "get", "rm",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for ShelfCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ShelfCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        // Get the word being typed
        let line_to_pos = &line[..pos];
        let words: Vec<&str> = line_to_pos.split_whitespace().collect();

        if words.is_empty() || (words.len() == 1 && !line_to_pos.ends_with(' ')) {
            // Completing the command itself
            let prefix = words.first().copied().unwrap_or("");
            let start = line_to_pos.rfind(prefix).unwrap_or(0);

            for cmd in &self.commands {
                if cmd.starts_with(prefix) {
                    suggestions.push(Suggestion {
                        value: cmd.clone(),
                        description: Some(command_description(cmd)),
                        style: None,
                        extra: None,
                        span: Span::new(start, pos),
                        append_whitespace: true,
                        match_indices: None,
                    });
                }
            }
        }

        suggestions
    }
}

fn command_description(cmd: &str) -> String {
    match cmd {
        "help" => "Show help".to_string(),
        "exit" | "quit" => "Exit".to_string(),
        "ls" => "List the current directory".to_string(),
        "cd" => "Jump to a path".to_string(),
        "open" => "Descend into a child directory".to_string(),
        "up" => "Go to the parent directory".to_string(),
        "pwd" => "Print the current path".to_string(),
        "crumbs" => "Print the breadcrumb trail".to_string(),
        "mkdir" => "Create a directory here".to_string(),
        "put" => "Upload a local file here".to_string(),
        "server" => "Show or change the server URL".to_string(),
        "recent" | "starred" | "get" | "rm" => "Not supported yet".to_string(),
        _ => String::new(),
    }
}
