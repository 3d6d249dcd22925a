//! Per-line intermediate representation.
//!
//! A source line is classified into exactly one [`StatementKind`], carrying
//! the substrings the emitters need. There is no tree: every line stands on
//! its own.

use serde::Serialize;

/// Statement kind of a single source line, with its captured text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatementKind {
    /// `# text`. `body` is everything after the marker, untrimmed.
    Comment { body: String },

    /// `name = float(input("prompt"))`.
    ///
    /// `name` is absent when the line calls `input(` without binding it.
    /// `hint` is the right-hand side of the binding, used to pick between
    /// integer and floating-point reads.
    InputBinding {
        name: Option<String>,
        prompt: String,
        hint: String,
    },

    /// `name = value`
    Assignment { name: String, value: String },

    /// `def name(params):`
    FunctionDef { name: String, params: String },

    /// `print(args)`. `args` is the raw text between the parentheses.
    PrintCall { args: String },

    /// `return expr`
    Return { expr: String },

    Blank,

    Unclassified,
}

impl StatementKind {
    pub fn comment(body: impl Into<String>) -> Self {
        Self::Comment { body: body.into() }
    }

    pub fn input_binding(
        name: Option<&str>,
        prompt: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::InputBinding {
            name: name.map(str::to_string),
            prompt: prompt.into(),
            hint: hint.into(),
        }
    }

    pub fn assignment(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Assignment {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn function_def(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self::FunctionDef {
            name: name.into(),
            params: params.into(),
        }
    }

    pub fn print_call(args: impl Into<String>) -> Self {
        Self::PrintCall { args: args.into() }
    }

    pub fn return_stmt(expr: impl Into<String>) -> Self {
        Self::Return { expr: expr.into() }
    }
}

/// Declared type inferred for an assigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Integer,
    FloatingPoint,
    StringType,
    /// Arithmetic expression; rendered as the target's generic declaration.
    Inferred,
    /// No declaration can be chosen; the assignment is dropped.
    Unresolved,
}
