//! Line classification.
//!
//! Each line is tested against [`Rule::ORDER`] and the first rule that
//! matches decides its [`StatementKind`]. Rules overlap on purpose: a
//! prompted read such as `n = int(input("n? "))` also contains `=`, and is
//! an input binding only because [`Rule::Input`] is tried before
//! [`Rule::Assignment`].
//!
//! Captures are a single non-greedy match up to the first `)`. Nested calls
//! inside arguments are truncated there: `print(len(xs))` captures `len(xs`.

use crate::error::MalformedLine;
use crate::ir::StatementKind;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const COMMENT_MARKER: char = '#';
const INPUT_IDIOM: &str = "input(";
const DEF_KEYWORD: &str = "def ";
const PRINT_IDIOM: &str = "print(";
const RETURN_KEYWORD: &str = "return ";

static INPUT_CAPTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"input\((.*?)\)").expect("valid input pattern"));
static DEF_CAPTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def (\w+)\((.*?)\):").expect("valid def pattern"));
static PRINT_CAPTURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"print\((.*?)\)").expect("valid print pattern"));

/// A classification rule. Rules are tried in [`Rule::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Comment,
    Input,
    Assignment,
    FunctionDef,
    Print,
    Return,
    Blank,
    Unclassified,
}

impl Rule {
    /// Priority order. The last rule always matches.
    pub const ORDER: [Rule; 8] = [
        Rule::Comment,
        Rule::Input,
        Rule::Assignment,
        Rule::FunctionDef,
        Rule::Print,
        Rule::Return,
        Rule::Blank,
        Rule::Unclassified,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Comment => "comment",
            Rule::Input => "input binding",
            Rule::Assignment => "assignment",
            Rule::FunctionDef => "function definition",
            Rule::Print => "print call",
            Rule::Return => "return",
            Rule::Blank => "blank line",
            Rule::Unclassified => "unclassified line",
        }
    }

    /// Try this rule alone against `line`.
    ///
    /// Returns `None` when the rule does not apply, and `Some(Err(..))` when
    /// its keyword matched but the expected capture is missing.
    pub fn try_match(self, line: &str) -> Option<Result<StatementKind, MalformedLine>> {
        let trimmed = line.trim();
        match self {
            Rule::Comment => trimmed
                .strip_prefix(COMMENT_MARKER)
                .map(|body| Ok(StatementKind::comment(body))),

            Rule::Input => line
                .contains(INPUT_IDIOM)
                .then(|| self.match_input(line)),

            Rule::Assignment => line.split_once('=').map(|(name, rest)| {
                // Only the segment up to a second `=` is the value.
                let value = rest.split('=').next().unwrap_or_default();
                Ok(StatementKind::assignment(name.trim(), value.trim()))
            }),

            // Checked against the raw line: an indented `def` is not a
            // top-level function and falls through.
            Rule::FunctionDef => line
                .starts_with(DEF_KEYWORD)
                .then(|| self.match_def(line)),

            Rule::Print => line
                .contains(PRINT_IDIOM)
                .then(|| self.match_print(line)),

            Rule::Return => trimmed
                .strip_prefix(RETURN_KEYWORD)
                .map(|expr| Ok(StatementKind::return_stmt(expr))),

            Rule::Blank => trimmed.is_empty().then_some(Ok(StatementKind::Blank)),

            Rule::Unclassified => Some(Ok(StatementKind::Unclassified)),
        }
    }

    fn match_input(self, line: &str) -> Result<StatementKind, MalformedLine> {
        let caps = INPUT_CAPTURE
            .captures(line)
            .ok_or_else(|| self.malformed(line))?;
        let prompt = &caps[1];
        Ok(match line.split_once('=') {
            Some((name, hint)) => {
                StatementKind::input_binding(Some(name.trim()), prompt, hint.trim())
            }
            None => StatementKind::input_binding(None, prompt, ""),
        })
    }

    fn match_def(self, line: &str) -> Result<StatementKind, MalformedLine> {
        let caps = DEF_CAPTURE
            .captures(line)
            .ok_or_else(|| self.malformed(line))?;
        Ok(StatementKind::function_def(&caps[1], &caps[2]))
    }

    fn match_print(self, line: &str) -> Result<StatementKind, MalformedLine> {
        let caps = PRINT_CAPTURE
            .captures(line)
            .ok_or_else(|| self.malformed(line))?;
        Ok(StatementKind::print_call(&caps[1]))
    }

    fn malformed(self, line: &str) -> MalformedLine {
        MalformedLine {
            rule: self,
            text: line.trim().to_string(),
        }
    }
}

/// Classify one source line.
pub fn classify(line: &str) -> Result<StatementKind, MalformedLine> {
    classify_with_rule(line).map(|(_, kind)| kind)
}

/// Classify one source line, also reporting which rule matched.
pub fn classify_with_rule(line: &str) -> Result<(Rule, StatementKind), MalformedLine> {
    for rule in Rule::ORDER {
        if let Some(result) = rule.try_match(line) {
            return result.map(|kind| (rule, kind));
        }
    }
    // Rule::Unclassified always matches.
    Ok((Rule::Unclassified, StatementKind::Unclassified))
}
