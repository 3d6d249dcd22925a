//! Whole-program conversion.
//!
//! Wraps the target's program skeleton around the body, classifies and
//! emits every source line in order, and indents each body line by the
//! target's fixed depth. Source indentation is discarded.

use crate::classify::classify;
use crate::error::{ConvertError, MalformedLine};
use crate::ir::StatementKind;
use crate::registry::emitter_for_target;
use serde::{Deserialize, Serialize};

/// What to do with a line whose keyword matched but whose capture did not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole conversion, with no partial output.
    #[default]
    Abort,
    /// Drop the line, record it as skipped, and continue.
    Skip,
}

/// Options for [`Converter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub malformed: MalformedPolicy,
}

/// Why a source line produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Assignment whose value type could not be inferred.
    UnresolvedType,
    /// `input(` call that is not bound to a name.
    UnboundInput,
    Unclassified,
    /// Capture failed and the policy is [`MalformedPolicy::Skip`].
    Malformed(MalformedLine),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnresolvedType => f.write_str("unresolved value type"),
            SkipReason::UnboundInput => f.write_str("input is not bound to a name"),
            SkipReason::Unclassified => f.write_str("unclassified"),
            SkipReason::Malformed(err) => write!(f, "{}", err),
        }
    }
}

/// A source line that produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based source line number.
    pub line: usize,
    pub reason: SkipReason,
    pub text: String,
}

/// Result of converting one source text to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub target: &'static str,
    /// Output units in order: skeleton lines and one unit per emitted line.
    /// A unit may span several physical lines.
    pub fragments: Vec<String>,
    pub skipped: Vec<SkippedLine>,
}

impl Conversion {
    /// Join all fragments into the final output text.
    pub fn text(&self) -> String {
        self.fragments.join("\n")
    }
}

/// Drives classification and emission over a whole source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert `source` to `target`.
    ///
    /// Fails before producing anything if the target is unknown, and, under
    /// [`MalformedPolicy::Abort`], on the first malformed line.
    pub fn convert(&self, source: &str, target: &str) -> Result<Conversion, ConvertError> {
        let emitter = emitter_for_target(target)?;
        let profile = emitter.profile();
        let indent = profile.indent();
        tracing::debug!(lang = profile.id, "converting");

        let mut fragments: Vec<String> =
            profile.preamble.iter().map(|l| l.to_string()).collect();
        let mut skipped = Vec::new();

        for (idx, line) in source_lines(source).enumerate() {
            let line_no = idx + 1;

            let stmt = match classify(line) {
                Ok(stmt) => stmt,
                Err(err) => match self.options.malformed {
                    MalformedPolicy::Abort => {
                        return Err(ConvertError::Malformed {
                            line: line_no,
                            source: err,
                        });
                    }
                    MalformedPolicy::Skip => {
                        tracing::warn!(line = line_no, "skipping {}", err);
                        skipped.push(SkippedLine {
                            line: line_no,
                            reason: SkipReason::Malformed(err),
                            text: line.trim().to_string(),
                        });
                        continue;
                    }
                },
            };

            let lines = emitter.emit(&stmt);
            if lines.is_empty() {
                let reason = skip_reason(&stmt);
                tracing::debug!(line = line_no, %reason, "dropped line");
                skipped.push(SkippedLine {
                    line: line_no,
                    reason,
                    text: line.trim().to_string(),
                });
                continue;
            }

            let unit = lines
                .iter()
                .map(|l| {
                    if l.is_empty() {
                        String::new()
                    } else {
                        format!("{indent}{l}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            fragments.push(unit);
        }

        fragments.extend(profile.epilogue.iter().map(|l| l.to_string()));

        Ok(Conversion {
            target: profile.id,
            fragments,
            skipped,
        })
    }
}

/// Split source text into lines the way [`Converter::convert`] numbers them.
///
/// Every `\n` ends a line, so a trailing newline yields a final blank line.
/// A trailing `\r` is removed from each line.
pub fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .map(|raw| raw.strip_suffix('\r').unwrap_or(raw))
}

fn skip_reason(stmt: &StatementKind) -> SkipReason {
    match stmt {
        StatementKind::Assignment { .. } => SkipReason::UnresolvedType,
        StatementKind::InputBinding { name: None, .. } => SkipReason::UnboundInput,
        _ => SkipReason::Unclassified,
    }
}

/// Convert `source` to `target` with default options, returning the text.
pub fn convert(source: &str, target: &str) -> Result<String, ConvertError> {
    Converter::default()
        .convert(source, target)
        .map(|conversion| conversion.text())
}
