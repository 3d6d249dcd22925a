//! Per-target syntax profiles.
//!
//! A [`SyntaxProfile`] holds the textual idioms one target uses to render
//! each statement kind, plus the program skeleton wrapped around the body.
//! The table is `static` and never changes at runtime.

use crate::error::UnsupportedTarget;
use crate::ir::TargetType;
use serde::Serialize;

/// Declaration keyword or type name for each resolved [`TargetType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeNames {
    pub integer: &'static str,
    pub floating: &'static str,
    pub string: &'static str,
    pub inferred: &'static str,
}

/// Fixed syntax fragments for one target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxProfile {
    /// Target identifier (e.g., "java").
    pub id: &'static str,
    /// Display name (e.g., "Java").
    pub name: &'static str,
    /// Alternative identifiers accepted by [`lookup`].
    pub aliases: &'static [&'static str],
    /// File extension for output (e.g., "java").
    pub extension: &'static str,
    /// Function declaration form, placed before the function name.
    pub function: &'static str,
    /// Print idiom.
    pub print: &'static str,
    /// Input idiom, if the target reads from a console.
    pub input: Option<&'static str>,
    /// Joiner for multi-argument prints.
    pub concat: &'static str,
    /// Decoration appended to every print, before the terminator.
    pub endl: Option<&'static str>,
    pub terminator: &'static str,
    pub comment: &'static str,
    pub block_open: &'static str,
    pub block_close: &'static str,
    pub return_keyword: &'static str,
    pub types: TypeNames,
    /// Lines emitted before the first body line.
    pub preamble: &'static [&'static str],
    /// Lines emitted after the last body line.
    pub epilogue: &'static [&'static str],
    /// Fixed indent of every body line, in units of [`INDENT_UNIT`].
    pub indent_depth: usize,
}

/// One level of indentation.
pub const INDENT_UNIT: &str = "    ";

impl SyntaxProfile {
    /// Declaration name for `ty`, or `None` if the type is unresolved.
    pub fn type_name(&self, ty: TargetType) -> Option<&'static str> {
        match ty {
            TargetType::Integer => Some(self.types.integer),
            TargetType::FloatingPoint => Some(self.types.floating),
            TargetType::StringType => Some(self.types.string),
            TargetType::Inferred => Some(self.types.inferred),
            TargetType::Unresolved => None,
        }
    }

    /// Indentation prefix for body lines.
    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.indent_depth)
    }

    /// Whether `target` names this profile, by id or alias.
    pub fn matches(&self, target: &str) -> bool {
        self.id == target || self.aliases.contains(&target)
    }
}

pub static JAVASCRIPT: SyntaxProfile = SyntaxProfile {
    id: "javascript",
    name: "JavaScript",
    aliases: &["js"],
    extension: "js",
    function: "function",
    print: "console.log",
    input: Some("prompt"),
    concat: " + ",
    endl: None,
    terminator: ";",
    comment: "//",
    block_open: "{",
    block_close: "}",
    return_keyword: "return",
    types: TypeNames {
        integer: "const",
        floating: "const",
        string: "const",
        inferred: "const",
    },
    preamble: &["// JavaScript code"],
    epilogue: &[],
    indent_depth: 0,
};

pub static JAVA: SyntaxProfile = SyntaxProfile {
    id: "java",
    name: "Java",
    aliases: &[],
    extension: "java",
    function: "public static void",
    print: "System.out.println",
    input: Some("scanner.next"),
    concat: " + ",
    endl: None,
    terminator: ";",
    comment: "//",
    block_open: "{",
    block_close: "}",
    return_keyword: "return",
    types: TypeNames {
        integer: "int",
        floating: "double",
        string: "String",
        inferred: "double",
    },
    preamble: &[
        "import java.util.Scanner;",
        "",
        "public class MainProgram {",
        "    public static void main(String[] args) {",
        "        Scanner scanner = new Scanner(System.in);",
    ],
    epilogue: &["    }", "}"],
    indent_depth: 2,
};

pub static CPP: SyntaxProfile = SyntaxProfile {
    id: "cpp",
    name: "C++",
    aliases: &["c++"],
    extension: "cpp",
    function: "void",
    print: "cout <<",
    input: Some("cin >>"),
    concat: " << ",
    endl: Some(" << endl"),
    terminator: ";",
    comment: "//",
    block_open: "{",
    block_close: "}",
    return_keyword: "return",
    types: TypeNames {
        integer: "int",
        floating: "double",
        string: "string",
        inferred: "auto",
    },
    preamble: &[
        "#include <iostream>",
        "using namespace std;",
        "",
        "int main() {",
    ],
    epilogue: &["    return 0;", "}"],
    indent_depth: 1,
};

static PROFILES: [&SyntaxProfile; 3] = [&JAVASCRIPT, &JAVA, &CPP];

/// All known profiles, in menu order.
pub fn profiles() -> &'static [&'static SyntaxProfile] {
    &PROFILES
}

/// Look up a profile by target id or alias.
pub fn lookup(target: &str) -> Result<&'static SyntaxProfile, UnsupportedTarget> {
    PROFILES
        .iter()
        .find(|p| p.matches(target))
        .copied()
        .ok_or_else(|| UnsupportedTarget::new(target))
}
