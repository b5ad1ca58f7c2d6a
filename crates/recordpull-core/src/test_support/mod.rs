pub(crate) mod fixtures;

use crate::{
    error::SourceError,
    model::{RelationKind, RelationModel},
    traits::{Record, RelationSource},
    value::Value,
};
use std::sync::Arc;

///
/// TestSchema
///
/// Shared schema description for core-only test records: attribute names
/// in declaration order, nested-by-default relation names, and relation
/// descriptors, all of which the engine reaches through the traits.
///

pub(crate) struct TestSchema {
    pub entity: &'static str,
    pub primary_key: &'static str,
    pub attributes: Vec<&'static str>,
    pub nested: Vec<&'static str>,
    pub relations: Vec<RelationModel>,
}

///
/// TestRecord
///
/// Row of attribute values tied to a shared schema.
///

#[derive(Clone)]
pub(crate) struct TestRecord {
    schema: Arc<TestSchema>,
    values: Vec<(&'static str, Value)>,
}

impl TestRecord {
    pub fn new(schema: &Arc<TestSchema>, values: Vec<(&'static str, Value)>) -> Self {
        Self {
            schema: Arc::clone(schema),
            values,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.schema.entity
    }
}

impl Record for TestRecord {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    }

    fn primary_key(&self) -> Option<Value> {
        self.attribute(self.schema.primary_key)
            .filter(|value| !value.is_null())
    }

    fn attribute_names(&self) -> Vec<String> {
        self.schema
            .attributes
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn nested_relations(&self) -> Vec<String> {
        self.schema.nested.iter().map(ToString::to_string).collect()
    }
}

///
/// TestSource
///
/// In-memory record store joining relations by value equality, the way
/// a real source joins foreign keys against primary keys. `failing`
/// builds a source whose every fetch errors, for propagation tests.
///

pub(crate) struct TestSource {
    records: Vec<TestRecord>,
    fail_message: Option<&'static str>,
}

impl TestSource {
    pub fn new(records: Vec<TestRecord>) -> Self {
        Self {
            records,
            fail_message: None,
        }
    }

    pub fn failing(records: Vec<TestRecord>, message: &'static str) -> Self {
        Self {
            records,
            fail_message: Some(message),
        }
    }

    /// Fixture record by entity and primary key.
    pub fn find(&self, entity: &str, id: i64) -> TestRecord {
        self.records
            .iter()
            .find(|record| {
                record.entity() == entity && record.primary_key() == Some(Value::Int(id))
            })
            .cloned()
            .expect("fixture record")
    }

    fn guard(&self) -> Result<(), SourceError> {
        match self.fail_message {
            Some(message) => Err(SourceError::new(message)),
            None => Ok(()),
        }
    }
}

impl RelationSource for TestSource {
    type Record = TestRecord;

    fn relation(&self, record: &TestRecord, field: &str) -> Option<RelationModel> {
        record
            .schema
            .relations
            .iter()
            .find(|relation| relation.name == field)
            .cloned()
    }

    fn fetch_one(
        &self,
        record: &TestRecord,
        relation: &RelationModel,
    ) -> Result<Option<TestRecord>, SourceError> {
        self.guard()?;
        debug_assert_eq!(relation.kind, RelationKind::ToOne);

        let Some(join) = record
            .attribute(&relation.foreign_key)
            .filter(|value| !value.is_null())
        else {
            return Ok(None);
        };

        Ok(self
            .records
            .iter()
            .find(|candidate| {
                candidate.entity() == relation.target
                    && candidate.attribute(&relation.target_primary_key) == Some(join.clone())
            })
            .cloned())
    }

    fn fetch_many(
        &self,
        record: &TestRecord,
        relation: &RelationModel,
    ) -> Result<Vec<TestRecord>, SourceError> {
        self.guard()?;
        debug_assert_eq!(relation.kind, RelationKind::ToMany);

        let Some(key) = record.primary_key() else {
            return Ok(Vec::new());
        };

        Ok(self
            .records
            .iter()
            .filter(|candidate| {
                candidate.entity() == relation.target
                    && candidate.attribute(&relation.foreign_key) == Some(key.clone())
            })
            .cloned()
            .collect())
    }
}
