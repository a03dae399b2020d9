use crate::{
    model::{FieldKind, FieldModel, RecordModel, Visibility},
    resolve::resolve,
    test_support::{Address, Person},
    traits::{FieldValue, Sortable},
    value::{Value, ValueKind},
};
use std::any::{Any, TypeId};

///
/// Ticket
/// Hand-registered record; no derive involved.
///

struct Ticket {
    priority: u8,
    title: String,
}

fn read_priority(record: &dyn Any) -> Option<Value> {
    record
        .downcast_ref::<Ticket>()
        .map(|ticket| ticket.priority.to_value())
}

fn read_title(record: &dyn Any) -> Option<Value> {
    record
        .downcast_ref::<Ticket>()
        .map(|ticket| ticket.title.to_value())
}

static TICKET_MODEL: RecordModel = RecordModel {
    path: "tests::Ticket",
    name: "Ticket",
    type_id: TypeId::of::<Ticket>,
    fields: &[
        FieldModel {
            name: "priority",
            ident: "priority",
            visibility: Visibility::Private,
            kind: FieldKind::Scalar {
                kind: ValueKind::Uint,
                read: read_priority,
            },
        },
        FieldModel {
            name: "title",
            ident: "title",
            visibility: Visibility::Private,
            kind: FieldKind::Scalar {
                kind: ValueKind::Text,
                read: read_title,
            },
        },
    ],
};

impl Sortable for Ticket {
    fn model() -> &'static RecordModel {
        &TICKET_MODEL
    }
}

#[test]
fn hand_written_model_resolves_like_derived_one() {
    let ticket = Ticket {
        priority: 2,
        title: "crash".to_string(),
    };

    let accessor = resolve::<Ticket>("priority").unwrap();
    assert_eq!(accessor.value(&ticket), Value::Uint(2));
    assert_eq!(
        resolve::<Ticket>("title").unwrap().value(&ticket),
        Value::Text("crash".to_string())
    );
}

#[test]
fn derived_model_lists_fields_in_declaration_order() {
    let names: Vec<_> = Person::model().field_names().collect();

    assert_eq!(
        names,
        vec![
            "Id", "Name", "Age", "Born", "Score", "Address", "Previous", "Alias", "Rank"
        ]
    );
}

#[test]
fn derived_model_marks_nested_fields() {
    let model = Person::model();

    assert!(model.field("Address").unwrap().is_nested());
    assert!(model.field("Previous").unwrap().is_nested());
    assert!(!model.field("Name").unwrap().is_nested());
    assert_eq!(model.type_id(), TypeId::of::<Person>());
}

#[test]
fn derived_model_records_declared_visibility() {
    let address = Address::model();

    assert_eq!(address.field("City").unwrap().visibility, Visibility::Public);
    assert_eq!(
        crate::test_support::Country::model()
            .field("Population")
            .unwrap()
            .visibility,
        Visibility::Restricted
    );
}
