//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    parse_confirm, prompt_user, should_use_colors, Prompt, PromptResult, PromptType,
    ToolboxTheme, UserInterface,
};

/// Terminal UI implementation.
///
/// All output goes to stdout. When not interactive, prompts are answered
/// with their defaults instead of reading from the terminal.
pub struct TerminalUI {
    term: Term,
    theme: ToolboxTheme,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool) -> Self {
        let theme = if should_use_colors() {
            ToolboxTheme::new()
        } else {
            ToolboxTheme::plain()
        };

        let term = Term::stdout();
        let interactive = interactive && term.is_term();

        Self {
            term,
            theme,
            interactive,
        }
    }
}

/// Answer a prompt without asking.
fn default_answer(prompt: &Prompt) -> PromptResult {
    match prompt.prompt_type {
        PromptType::Confirm => {
            PromptResult::Bool(prompt.default.as_deref().map(parse_confirm).unwrap_or(false))
        }
        PromptType::Input => PromptResult::String(prompt.default.clone().unwrap_or_default()),
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if self.interactive {
            prompt_user(prompt, &self.term)
        } else {
            Ok(default_answer(prompt))
        }
    }
}

/// Create the terminal UI.
pub fn create_ui(interactive: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive))
}
