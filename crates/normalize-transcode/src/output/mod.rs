//! Output emitters - render classified lines in each target language.

#[cfg(feature = "target-javascript")]
pub mod javascript;

#[cfg(feature = "target-javascript")]
pub use javascript::{JAVASCRIPT_EMITTER, JavaScriptEmitter};

#[cfg(feature = "target-java")]
pub mod java;

#[cfg(feature = "target-java")]
pub use java::{JAVA_EMITTER, JavaEmitter};

#[cfg(feature = "target-cpp")]
pub mod cpp;

#[cfg(feature = "target-cpp")]
pub use cpp::{CPP_EMITTER, CppEmitter};

/// Print call that joins at most two comma-separated arguments.
///
/// Arguments past the second are dropped: `print(a, b, c)` prints `a + b`.
#[cfg(any(feature = "target-javascript", feature = "target-java"))]
pub(crate) fn concat_print(profile: &crate::profile::SyntaxProfile, args: &str) -> String {
    let expr = if args.contains(',') {
        let parts = crate::traits::split_args(args);
        format!("{}{}{}", parts[0], profile.concat, parts[1])
    } else {
        args.to_string()
    };
    format!("{}({expr}){}", profile.print, profile.terminator)
}
