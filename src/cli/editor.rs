//! Interactive line editing
//!
//! Wraps rustyline with tab completion driven by the command tree and a
//! history file.

use crate::{
    config::Config,
    core::{Candidate, CommandTree, complete},
    error::{Result, ShellError},
};
use rustyline::{
    CompletionType, Context, Editor, Helper,
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Column where suggestion descriptions start
const DISPLAY_WIDTH: usize = 12;

/// Anything the shell can read lines from
pub trait LineSource {
    /// Next line, or `None` once input is over
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// rustyline helper offering command tree completions
pub struct CompletionHelper {
    tree: CommandTree,
}

impl CompletionHelper {
    #[must_use]
    pub const fn new(tree: CommandTree) -> Self {
        Self { tree }
    }
}

impl Completer for CompletionHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let completion = complete(&self.tree, line, pos);
        debug!(start = completion.start, replaced = pos - completion.start, "tab completion");

        let pairs = completion
            .candidates
            .into_iter()
            .map(|candidate| Pair {
                display: display_text(&candidate),
                replacement: candidate.text,
            })
            .collect();

        Ok((completion.start, pairs))
    }
}

/// Word followed by its description, when it has one
fn display_text(candidate: &Candidate) -> String {
    match &candidate.description {
        Some(description) => format!("{:<DISPLAY_WIDTH$}{description}", candidate.text),
        None => candidate.text.clone(),
    }
}

impl Hinter for CompletionHelper {
    type Hint = String;
}

impl Highlighter for CompletionHelper {}

impl Validator for CompletionHelper {}

impl Helper for CompletionHelper {}

/// Terminal input with completion and history
pub struct InteractiveInput {
    editor: Editor<CompletionHelper, DefaultHistory>,
    history_path: Option<PathBuf>,
}

impl InteractiveInput {
    /// Acquire the line editor and load any existing history
    pub fn new(config: &Config, tree: CommandTree) -> Result<Self> {
        let editor_config = rustyline::Config::builder()
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();

        let mut editor = Editor::with_config(editor_config)
            .map_err(|e| ShellError::editor("failed to initialize line editor", e))?;
        editor.set_helper(Some(CompletionHelper::new(tree)));

        let mut input = Self {
            editor,
            history_path: config.history.active_path().cloned(),
        };

        if let Err(e) = input.load_history() {
            warn!("{}", e);
        }

        Ok(input)
    }

    fn load_history(&mut self) -> Result<()> {
        let Some(path) = &self.history_path else {
            return Ok(());
        };
        if !path.exists() {
            debug!("No history file at {}", path.display());
            return Ok(());
        }

        self.editor
            .load_history(path)
            .map_err(|e| ShellError::history("load", path, e))
    }

    /// Write the history file, if history is enabled
    pub fn save_history(&mut self) -> Result<()> {
        let Some(path) = &self.history_path else {
            return Ok(());
        };

        debug!("Saving history to {}", path.display());
        self.editor
            .save_history(path)
            .map_err(|e| ShellError::history("save", path, e))
    }
}

impl LineSource for InteractiveInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("Failed to record history entry: {}", e);
                    }
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                debug!("Input closed");
                None
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn helper() -> CompletionHelper {
        CompletionHelper::new(CommandTree::standard(Arc::new(|| {
            vec!["eth0".to_string(), "eth1".to_string()]
        })))
    }

    fn pairs(line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        helper().complete(line, pos, &ctx).unwrap()
    }

    fn replacements(line: &str, pos: usize) -> (usize, Vec<String>) {
        let (start, pairs) = pairs(line, pos);
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn test_helper_completes_partial_word() {
        assert_eq!(replacements("show li", 7), (5, vec!["link".to_string()]));
    }

    #[test]
    fn test_helper_completes_interfaces() {
        assert_eq!(
            replacements("set interface ", 14),
            (14, vec!["eth0".to_string(), "eth1".to_string()])
        );
    }

    #[test]
    fn test_helper_displays_descriptions() {
        let (_, pairs) = pairs("", 0);
        let displays: Vec<String> = pairs.into_iter().map(|pair| pair.display).collect();
        assert_eq!(
            displays,
            vec![
                "exit        Leave shell",
                "quit        Leave shell",
                "set         Change settings",
                "show        Show network state",
            ]
        );
    }

    #[test]
    fn test_helper_interface_names_display_plain() {
        let (_, pairs) = pairs("set interface eth", 17);
        let displays: Vec<String> = pairs.into_iter().map(|pair| pair.display).collect();
        assert_eq!(displays, vec!["eth0", "eth1"]);
    }

    #[test]
    fn test_helper_unknown_branch() {
        let (_, candidates) = replacements("delete ", 7);
        assert!(candidates.is_empty());
    }
}
