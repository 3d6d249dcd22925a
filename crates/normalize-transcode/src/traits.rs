//! The per-target emitter trait.

use crate::infer::{infer, infer_input};
use crate::ir::StatementKind;
use crate::profile::SyntaxProfile;

/// An emitter renders classified lines as source code in one target.
///
/// The provided methods cover the parts every target renders from its
/// [`SyntaxProfile`] alone; implementations override the kinds whose shape
/// differs. Every method returns physical output lines without indentation.
/// An empty vector means the line is dropped.
pub trait Emitter: Send + Sync {
    /// Syntax profile of this target.
    fn profile(&self) -> &'static SyntaxProfile;

    /// Target identifier (e.g., "cpp").
    fn target(&self) -> &'static str {
        self.profile().id
    }

    /// Render `name = <read>`, prompting with `prompt` first.
    fn input_binding(&self, name: &str, prompt: &str, hint: &str) -> Vec<String>;

    /// Render a print call. `args` is the raw text between the parentheses.
    fn print_call(&self, args: &str) -> Vec<String>;

    fn comment(&self, body: &str) -> Vec<String> {
        vec![format!("{}{}", self.profile().comment, body)]
    }

    fn assignment(&self, name: &str, value: &str) -> Vec<String> {
        let profile = self.profile();
        match profile.type_name(infer(value)) {
            Some(ty) => vec![format!("{ty} {name} = {value}{}", profile.terminator)],
            None => Vec::new(),
        }
    }

    fn function_def(&self, name: &str, params: &str) -> Vec<String> {
        let profile = self.profile();
        vec![format!(
            "{} {name}({params}) {}",
            profile.function, profile.block_open
        )]
    }

    fn return_stmt(&self, expr: &str) -> Vec<String> {
        let profile = self.profile();
        vec![format!(
            "{} {expr}{}",
            profile.return_keyword, profile.terminator
        )]
    }

    /// Render one classified line.
    fn emit(&self, stmt: &StatementKind) -> Vec<String> {
        match stmt {
            StatementKind::Comment { body } => self.comment(body),
            StatementKind::InputBinding {
                name: Some(name),
                prompt,
                hint,
            } => self.input_binding(name, prompt, hint),
            StatementKind::InputBinding { name: None, .. } => Vec::new(),
            StatementKind::Assignment { name, value } => self.assignment(name, value),
            StatementKind::FunctionDef { name, params } => self.function_def(name, params),
            StatementKind::PrintCall { args } => self.print_call(args),
            StatementKind::Return { expr } => self.return_stmt(expr),
            StatementKind::Blank => vec![String::new()],
            StatementKind::Unclassified => Vec::new(),
        }
    }
}

/// Split print arguments on commas, trimming each part.
///
/// Commas inside string literals are split too; there is no tokenizer.
pub(crate) fn split_args(args: &str) -> Vec<&str> {
    args.split(',').map(str::trim).collect()
}

/// Declared type name for an input binding.
pub(crate) fn input_type(profile: &SyntaxProfile, hint: &str) -> &'static str {
    profile
        .type_name(infer_input(hint))
        .unwrap_or(profile.types.integer)
}
