//! Registry of target emitters.
//!
//! Built-in emitters are collected on first use and never change afterwards.

use crate::error::UnsupportedTarget;
use crate::traits::Emitter;
use std::sync::OnceLock;

static EMITTERS: OnceLock<Vec<&'static dyn Emitter>> = OnceLock::new();

fn builtin() -> &'static [&'static dyn Emitter] {
    EMITTERS.get_or_init(|| {
        #[allow(unused_mut)]
        let mut emitters: Vec<&'static dyn Emitter> = Vec::new();

        #[cfg(feature = "target-javascript")]
        {
            emitters.push(&crate::output::javascript::JAVASCRIPT_EMITTER);
        }

        #[cfg(feature = "target-java")]
        {
            emitters.push(&crate::output::java::JAVA_EMITTER);
        }

        #[cfg(feature = "target-cpp")]
        {
            emitters.push(&crate::output::cpp::CPP_EMITTER);
        }

        emitters
    })
}

/// Get an emitter by target id or alias.
pub fn emitter_for_target(target: &str) -> Result<&'static dyn Emitter, UnsupportedTarget> {
    builtin()
        .iter()
        .find(|e| e.profile().matches(target))
        .copied()
        .ok_or_else(|| UnsupportedTarget::new(target))
}

/// Get all registered emitters.
pub fn emitters() -> &'static [&'static dyn Emitter] {
    builtin()
}

/// List all registered target ids.
pub fn target_ids() -> Vec<&'static str> {
    builtin().iter().map(|e| e.target()).collect()
}
