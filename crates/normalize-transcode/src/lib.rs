//! Heuristic line-by-line transcoding of Python snippets.
//!
//! `normalize-transcode` turns short Python snippets into approximate
//! JavaScript, Java, or C++ one physical line at a time. There is no parser:
//! each line is classified by ordered pattern rules, a declared type is
//! guessed from the literal text, and a per-target emitter renders it.
//!
//! # Architecture
//!
//! ```text
//! Source line          IR                 Targets
//! ───────────     ──────────────     ──────────────────
//!                                  ┌─> JavaScript (const, console.log)
//! Python line ──> StatementKind ───┼─> Java       (typed, Scanner)
//!  (classify)       (ir.rs)        └─> C++        (typed, cout/cin)
//! ```
//!
//! # Example
//!
//! ```
//! use normalize_transcode::convert;
//!
//! let cpp = convert("x = 5\nprint(x)", "cpp").unwrap();
//! assert!(cpp.contains("    int x = 5;"));
//! assert!(cpp.contains("    cout << x << endl;"));
//! ```
//!
//! # Limitations
//!
//! Output indentation is one fixed depth per target (inside `main` for C++
//! and Java, top level for JavaScript), whatever the source nesting was.
//! Function bodies are not closed. Lines that cannot be rendered are dropped
//! and reported in [`Conversion::skipped`], never passed through verbatim.

pub mod classify;
pub mod convert;
pub mod error;
pub mod infer;
pub mod ir;
pub mod output;
pub mod profile;
pub mod registry;
pub mod traits;

// Re-exports: IR types
pub use ir::{StatementKind, TargetType};

// Re-exports: Pipeline
pub use classify::{Rule, classify, classify_with_rule};
pub use convert::{
    Conversion, ConvertOptions, Converter, MalformedPolicy, SkipReason, SkippedLine, convert,
    source_lines,
};
pub use infer::{infer, infer_input};

// Re-exports: Errors
pub use error::{ConvertError, MalformedLine, UnsupportedTarget};

// Re-exports: Profiles and emitters
pub use profile::{SyntaxProfile, lookup, profiles};
pub use registry::{emitter_for_target, emitters, target_ids};
pub use traits::Emitter;
