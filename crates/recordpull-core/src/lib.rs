//! Core runtime for recordpull: the pull-pattern grammar, the scalar value
//! transport, relation metadata, collaborator traits, and the recursive
//! resolution engine exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod model;
pub mod pattern;
pub mod pull;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sources, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{RelationKind, RelationModel},
        pattern::Pattern,
        pull::{PullMap, PullValue, pull, pull_many},
        traits::{Record, RelationSource},
        value::Value,
    };
}
