//! ## Crate layout
//! - `core`: the pull grammar, scalar values, relation metadata, the
//!   collaborator traits, and the recursive resolution engine.
//!
//! The `prelude` module mirrors the surface host code uses to shape
//! payloads from a record graph.

pub use recordpull_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{
    error::{PullError, SourceError},
    pull::{pull, pull_many},
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        model::{RelationKind, RelationModel},
        pattern::Pattern,
        pull::{PullMap, PullValue, pull, pull_many},
        traits::{Record as _, RelationSource as _},
        value::Value,
    };
}
