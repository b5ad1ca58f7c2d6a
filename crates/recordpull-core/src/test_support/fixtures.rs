use crate::{
    model::RelationModel,
    test_support::{TestRecord, TestSchema, TestSource},
    value::Value,
};
use std::sync::Arc;

/// Schema for the flat three-attribute person used by the scalar tests.
/// No relations, no nested defaults, and no stored primary key.
pub(crate) fn flat_person_schema() -> Arc<TestSchema> {
    Arc::new(TestSchema {
        entity: "person",
        primary_key: "id",
        attributes: vec!["first_name", "last_name", "age"],
        nested: Vec::new(),
        relations: Vec::new(),
    })
}

/// `{first_name: "John-Jacob", last_name: "Jingleheimer-Schmit", age: 34}`.
pub(crate) fn john() -> TestRecord {
    TestRecord::new(
        &flat_person_schema(),
        vec![
            ("first_name", Value::from("John-Jacob")),
            ("last_name", Value::from("Jingleheimer-Schmit")),
            ("age", Value::Int(34)),
        ],
    )
}

/// Relational fixture graph.
///
/// person(1) John-Jacob — to-one address(100), to-many pets rex(10) and
/// chewie(11); pets is nested-by-default on person. person(2) Lonely has
/// a null address_id and no pets, so every relation on it is absent.
pub(crate) fn graph() -> TestSource {
    let person = Arc::new(TestSchema {
        entity: "person",
        primary_key: "id",
        attributes: vec!["id", "first_name", "last_name", "age", "address_id"],
        nested: vec!["pets"],
        relations: vec![
            RelationModel::to_one("address", "address", "address_id", "id"),
            RelationModel::to_many("pets", "pet", "person_id", "id"),
        ],
    });
    let address = Arc::new(TestSchema {
        entity: "address",
        primary_key: "id",
        attributes: vec!["id", "street1", "city"],
        nested: Vec::new(),
        relations: Vec::new(),
    });
    let pet = Arc::new(TestSchema {
        entity: "pet",
        primary_key: "id",
        attributes: vec!["id", "name", "person_id"],
        nested: Vec::new(),
        relations: vec![RelationModel::to_one("owner", "person", "person_id", "id")],
    });

    TestSource::new(vec![
        TestRecord::new(
            &person,
            vec![
                ("id", Value::Int(1)),
                ("first_name", Value::from("John-Jacob")),
                ("last_name", Value::from("Jingleheimer-Schmit")),
                ("age", Value::Int(34)),
                ("address_id", Value::Int(100)),
            ],
        ),
        TestRecord::new(
            &person,
            vec![
                ("id", Value::Int(2)),
                ("first_name", Value::from("Lonely")),
                ("last_name", Value::from("Loner")),
                ("age", Value::Int(51)),
                ("address_id", Value::Null),
            ],
        ),
        TestRecord::new(
            &address,
            vec![
                ("id", Value::Int(100)),
                ("street1", Value::from("34 Hill St")),
                ("city", Value::from("Ridgefield")),
            ],
        ),
        TestRecord::new(
            &pet,
            vec![
                ("id", Value::Int(10)),
                ("name", Value::from("rex")),
                ("person_id", Value::Int(1)),
            ],
        ),
        TestRecord::new(
            &pet,
            vec![
                ("id", Value::Int(11)),
                ("name", Value::from("chewie")),
                ("person_id", Value::Int(1)),
            ],
        ),
    ])
}
