use crate::{
    error::SourceError,
    model::RelationModel,
    value::Value,
};

///
/// Record
///
/// Abstraction over a row-like value that can expose attributes by name.
/// This decouples pattern resolution from concrete entity types.
///
/// `attribute` distinguishes a missing attribute (`None`) from a present
/// attribute whose value is `Value::Null`; both fall through to relation
/// lookup during resolution, but only declared attributes participate in
/// wildcard expansion.
///

pub trait Record {
    /// Attribute value by name, or `None` when the record has no such
    /// attribute at all.
    fn attribute(&self, name: &str) -> Option<Value>;

    /// Primary-key value of this record, used by relation sources to
    /// join to-many rows. `None` for unsaved records.
    fn primary_key(&self) -> Option<Value>;

    /// Declared attribute names in schema order.
    /// Wildcard expansion emits keys in exactly this order.
    fn attribute_names(&self) -> Vec<String>;

    /// Relation names declared as nested-by-default, in declared order.
    /// These are expanded after the attributes by a wildcard pattern.
    fn nested_relations(&self) -> Vec<String>;
}

///
/// RelationSource
///
/// External collaborator resolving relation metadata and fetching related
/// records. The engine only branches on [`RelationModel::kind`]; matching
/// foreign keys against primary keys is the source's business, as is any
/// I/O policy (timeouts, retries, caching).
///

pub trait RelationSource {
    type Record: Record;

    /// Relation metadata for `field` on the record's entity type,
    /// or `None` when no such relation is declared.
    fn relation(&self, record: &Self::Record, field: &str) -> Option<RelationModel>;

    /// Fetch the single record a to-one relation points at, if any.
    fn fetch_one(
        &self,
        record: &Self::Record,
        relation: &RelationModel,
    ) -> Result<Option<Self::Record>, SourceError>;

    /// Fetch the records a to-many relation points at, in fetch order.
    fn fetch_many(
        &self,
        record: &Self::Record,
        relation: &RelationModel,
    ) -> Result<Vec<Self::Record>, SourceError>;
}
