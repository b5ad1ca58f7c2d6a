mod result;


pub use result::{PullMap, PullValue};

use crate::{
    error::PullError,
    model::RelationKind,
    pattern::Pattern,
    traits::{Record, RelationSource},
    value::Value,
};

///
/// Resolved
///
/// Outcome of reading one field off a record: a scalar attribute, a
/// related record or records, or nothing at all. `Absent` is a value
/// class, not an error; it drops the key from the output.
///

enum Resolved<R> {
    Absent,
    Scalar(Value),
    One(R),
    Many(Vec<R>),
}

/// Resolve a pattern against a single record.
///
/// This is the dispatch point: every pattern shape routes here, and
/// nested resolution re-enters through it.
pub fn pull<S: RelationSource>(
    source: &S,
    record: &S::Record,
    pattern: &Pattern,
) -> Result<PullMap, PullError> {
    match pattern {
        Pattern::Wildcard => pull_all(source, record),
        Pattern::Field(name) => pull_field(source, record, name),
        Pattern::Nested(entries) => pull_nested(source, record, entries),
        Pattern::Seq(patterns) => {
            let mut out = PullMap::new();
            for pattern in patterns {
                out.merge(pull(source, record, pattern)?);
            }
            Ok(out)
        }
    }
}

/// Resolve a pattern against each record, preserving input order.
///
/// The first failing record aborts the invocation; per-record isolation
/// is a host policy, not an engine one.
pub fn pull_many<'a, S: RelationSource>(
    source: &S,
    records: impl IntoIterator<Item = &'a S::Record>,
    pattern: &Pattern,
) -> Result<Vec<PullMap>, PullError>
where
    S::Record: 'a,
{
    records
        .into_iter()
        .map(|record| pull(source, record, pattern))
        .collect()
}

///
/// Read one field off a record.
///
/// The single point deciding attribute vs. relation, and which relation
/// shape. Rule: a present, non-null attribute is authoritative and
/// short-circuits relation lookup even when a same-named relation is
/// declared. A null or missing attribute falls through to the relation
/// source; no declared relation means `Absent`.
///
/// Empty to-many results normalize to `Absent` here, so every caller
/// inherits the no-null-placeholder invariant from one place.
///
fn resolved<S: RelationSource>(
    source: &S,
    record: &S::Record,
    field: &str,
) -> Result<Resolved<S::Record>, PullError> {
    if let Some(value) = record.attribute(field) {
        if !value.is_null() {
            return Ok(Resolved::Scalar(value));
        }
    }

    let Some(relation) = source.relation(record, field) else {
        return Ok(Resolved::Absent);
    };

    match relation.kind {
        RelationKind::ToOne => Ok(source
            .fetch_one(record, &relation)?
            .map_or(Resolved::Absent, Resolved::One)),
        RelationKind::ToMany => {
            let related = source.fetch_many(record, &relation)?;
            if related.is_empty() {
                Ok(Resolved::Absent)
            } else {
                Ok(Resolved::Many(related))
            }
        }
    }
}

// A bare field name against a relation implies "pull everything" from
// the related record(s).
fn pull_field<S: RelationSource>(
    source: &S,
    record: &S::Record,
    name: &str,
) -> Result<PullMap, PullError> {
    let mut out = PullMap::new();
    match resolved(source, record, name)? {
        Resolved::Absent => {}
        Resolved::Scalar(value) => out.insert(name, PullValue::Scalar(value)),
        Resolved::One(related) => out.insert(name, PullValue::One(pull_all(source, &related)?)),
        Resolved::Many(related) => out.insert(name, PullValue::Many(pull_all_each(source, &related)?)),
    }
    Ok(out)
}

// Nested mode: apply each child pattern to the related record(s). Keys
// are unique by construction, so no collision handling happens here.
// Scalars cannot be decomposed further; the child pattern is ignored.
fn pull_nested<S: RelationSource>(
    source: &S,
    record: &S::Record,
    entries: &[(String, Pattern)],
) -> Result<PullMap, PullError> {
    let mut out = PullMap::new();
    for (name, pattern) in entries {
        match resolved(source, record, name)? {
            Resolved::Absent => {}
            Resolved::Scalar(value) => out.insert(name, PullValue::Scalar(value)),
            Resolved::One(related) => {
                out.insert(name, PullValue::One(pull(source, &related, pattern)?));
            }
            Resolved::Many(related) => {
                let projected = related
                    .iter()
                    .map(|child| pull(source, child, pattern))
                    .collect::<Result<Vec<_>, _>>()?;
                out.insert(name, PullValue::Many(projected));
            }
        }
    }
    Ok(out)
}

///
/// Wildcard expansion: every declared attribute in schema order, then
/// every nested-by-default relation in declared order, each member of a
/// to-many relation expanded recursively.
///
/// Attribute and relation namespaces are assumed disjoint; if they do
/// collide, the relation entry overwrites in place and the attribute
/// rule in `resolved` still decides what it holds.
///
fn pull_all<S: RelationSource>(source: &S, record: &S::Record) -> Result<PullMap, PullError> {
    let attributes = Pattern::Seq(
        record
            .attribute_names()
            .into_iter()
            .map(Pattern::Field)
            .collect(),
    );
    let mut out = pull(source, record, &attributes)?;

    for name in record.nested_relations() {
        match resolved(source, record, &name)? {
            Resolved::Absent => {}
            Resolved::Scalar(value) => out.insert(name, PullValue::Scalar(value)),
            Resolved::One(related) => {
                out.insert(name, PullValue::One(pull_all(source, &related)?));
            }
            Resolved::Many(related) => {
                out.insert(name, PullValue::Many(pull_all_each(source, &related)?));
            }
        }
    }

    Ok(out)
}

fn pull_all_each<S: RelationSource>(
    source: &S,
    records: &[S::Record],
) -> Result<Vec<PullMap>, PullError> {
    records
        .iter()
        .map(|record| pull_all(source, record))
        .collect()
}
