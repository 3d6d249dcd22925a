//! JavaScript emitter.
//!
//! Untyped: every declaration is a `const` binding, and a prompted read
//! collapses into a single `parseFloat(prompt(..))` expression.

use super::concat_print;
use crate::profile::{JAVASCRIPT, SyntaxProfile};
use crate::traits::Emitter;

/// Static instance of the JavaScript emitter for registry.
pub static JAVASCRIPT_EMITTER: JavaScriptEmitter = JavaScriptEmitter;

/// JavaScript emitter implementing the Emitter trait.
pub struct JavaScriptEmitter;

impl Emitter for JavaScriptEmitter {
    fn profile(&self) -> &'static SyntaxProfile {
        &JAVASCRIPT
    }

    fn input_binding(&self, name: &str, prompt: &str, _hint: &str) -> Vec<String> {
        let profile = self.profile();
        vec![format!(
            "{} {name} = parseFloat({}({prompt})){}",
            profile.types.inferred,
            profile.input.unwrap_or_default(),
            profile.terminator
        )]
    }

    fn print_call(&self, args: &str) -> Vec<String> {
        vec![concat_print(self.profile(), args)]
    }
}
