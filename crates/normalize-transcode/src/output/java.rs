//! Java emitter.
//!
//! Body lines land inside `MainProgram.main`. Reads go through the single
//! `scanner` declared in the program preamble.

use super::concat_print;
use crate::profile::{JAVA, SyntaxProfile};
use crate::traits::{Emitter, input_type};

/// Static instance of the Java emitter for registry.
pub static JAVA_EMITTER: JavaEmitter = JavaEmitter;

/// Java emitter implementing the Emitter trait.
pub struct JavaEmitter;

impl Emitter for JavaEmitter {
    fn profile(&self) -> &'static SyntaxProfile {
        &JAVA
    }

    fn input_binding(&self, name: &str, prompt: &str, hint: &str) -> Vec<String> {
        let profile = self.profile();
        let ty = input_type(profile, hint);
        let end = profile.terminator;
        vec![
            format!("{ty} {name}{end}"),
            format!("{}({prompt}){end}", profile.print),
            format!(
                "{name} = {}{}(){end}",
                profile.input.unwrap_or_default(),
                capitalize(ty)
            ),
        ]
    }

    fn print_call(&self, args: &str) -> Vec<String> {
        vec![concat_print(self.profile(), args)]
    }
}

/// `int` -> `Int`, for `Scanner::nextInt` and friends.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
