//! C++ emitter.

use crate::profile::{CPP, SyntaxProfile};
use crate::traits::{Emitter, input_type, split_args};

/// Static instance of the C++ emitter for registry.
pub static CPP_EMITTER: CppEmitter = CppEmitter;

/// C++ emitter implementing the Emitter trait.
pub struct CppEmitter;

impl Emitter for CppEmitter {
    fn profile(&self) -> &'static SyntaxProfile {
        &CPP
    }

    fn input_binding(&self, name: &str, prompt: &str, hint: &str) -> Vec<String> {
        let profile = self.profile();
        let ty = input_type(profile, hint);
        let end = profile.terminator;
        vec![
            format!("{ty} {name}{end}"),
            self.stream_print(prompt),
            format!("{} {name}{end}", profile.input.unwrap_or_default()),
        ]
    }

    // Stream insertion chains every argument, unlike the `+` targets.
    fn print_call(&self, args: &str) -> Vec<String> {
        let expr = if args.contains(',') {
            split_args(args).join(self.profile().concat)
        } else {
            args.to_string()
        };
        vec![self.stream_print(&expr)]
    }
}

impl CppEmitter {
    fn stream_print(&self, expr: &str) -> String {
        let profile = self.profile();
        format!(
            "{} {expr}{}{}",
            profile.print,
            profile.endl.unwrap_or_default(),
            profile.terminator
        )
    }
}
