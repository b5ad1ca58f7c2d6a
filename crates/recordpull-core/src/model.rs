use crate::error::PullError;
use serde::Serialize;
use std::fmt;

///
/// RelationKind
///
/// Cardinality of a declared relation. The engine branches on this and
/// nothing else; join mechanics stay inside the relation source.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum RelationKind {
    ToOne,
    ToMany,
}

impl RelationKind {
    /// Parse a textual kind from host schema metadata.
    ///
    /// Unknown kinds surface [`PullError::UnsupportedRelation`] naming the
    /// relation, so schema mismatches fail at descriptor construction
    /// rather than mid-resolution.
    pub fn parse(relation: &str, kind: &str) -> Result<Self, PullError> {
        match kind {
            "to_one" | "to-one" => Ok(Self::ToOne),
            "to_many" | "to-many" => Ok(Self::ToMany),
            other => Err(PullError::unsupported_relation(relation, other)),
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ToOne => "to_one",
            Self::ToMany => "to_many",
        };
        write!(f, "{label}")
    }
}

///
/// RelationModel
///
/// Runtime relation metadata supplied by the host's schema layer.
/// A plain descriptor value; the engine never inspects live schema
/// objects, only this narrow surface.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RelationModel {
    /// Relation name as used in pull patterns.
    pub name: String,
    pub kind: RelationKind,
    /// Target entity type the relation points at.
    pub target: String,
    /// Attribute on the many side holding the joined key.
    pub foreign_key: String,
    /// Primary-key attribute on the target entity.
    pub target_primary_key: String,
}

impl RelationModel {
    /// Construct a to-one relation descriptor.
    pub fn to_one(
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        target_primary_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::ToOne,
            target: target.into(),
            foreign_key: foreign_key.into(),
            target_primary_key: target_primary_key.into(),
        }
    }

    /// Construct a to-many relation descriptor.
    pub fn to_many(
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
        target_primary_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: RelationKind::ToMany,
            target: target.into(),
            foreign_key: foreign_key.into(),
            target_primary_key: target_primary_key.into(),
        }
    }
}
