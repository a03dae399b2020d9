use crate::{
    error::MissingReason,
    model::Visibility,
    resolve::{cached_accessors, resolve, resolve_model},
    test_support::{Address, Person},
    traits::Sortable,
    value::{Value, ValueKind},
};
use std::{sync::Arc, thread};

#[test]
fn resolves_top_level_field() {
    let accessor = resolve::<Person>("Name").unwrap();
    let person = Person::new(1, "Ann", 25);

    assert_eq!(accessor.kind(), ValueKind::Text);
    assert_eq!(accessor.depth(), 0);
    assert_eq!(accessor.value(&person), Value::Text("Ann".to_string()));
}

#[test]
fn resolves_nested_field() {
    let accessor = resolve::<Person>("Address.City").unwrap();
    let person = Person::new(1, "Ann", 25).living_in("Varna");

    assert_eq!(accessor.kind(), ValueKind::Text);
    assert_eq!(accessor.depth(), 1);
    assert_eq!(accessor.value(&person), Value::Text("Varna".to_string()));
}

#[test]
fn resolves_through_optional_boxed_links() {
    let accessor = resolve::<Person>("Address.Country.Population").unwrap();
    let with_country = Person::new(1, "Ann", 25).with_country("BG", 6_400_000);
    let without_country = Person::new(2, "Bob", 30);

    assert_eq!(accessor.kind(), ValueKind::Uint);
    assert_eq!(accessor.value(&with_country), Value::Uint(6_400_000));
    assert_eq!(accessor.value(&without_country), Value::Null);
}

#[test]
fn absent_optional_link_reads_as_null() {
    let accessor = resolve::<Person>("Previous.City").unwrap();

    assert_eq!(accessor.value(&Person::new(1, "Ann", 25)), Value::Null);
    assert_eq!(
        accessor.value(&Person::new(1, "Ann", 25).with_previous("Ruse")),
        Value::Text("Ruse".to_string())
    );
}

#[test]
fn terminal_kind_follows_field_type() {
    assert_eq!(resolve::<Person>("Age").unwrap().kind(), ValueKind::Int);
    assert_eq!(resolve::<Person>("Id").unwrap().kind(), ValueKind::Uint);
    assert_eq!(resolve::<Person>("Score").unwrap().kind(), ValueKind::Float);
    assert_eq!(resolve::<Person>("Born").unwrap().kind(), ValueKind::Date);
    assert_eq!(resolve::<Person>("Address.Zip").unwrap().kind(), ValueKind::Uint);
}

#[test]
fn private_fields_are_resolvable() {
    let field = Person::model().field("Rank").unwrap();
    assert_eq!(field.visibility, Visibility::Private);

    let accessor = resolve::<Person>("Rank").unwrap();
    assert_eq!(
        accessor.value(&Person::new(1, "Ann", 25).with_rank(-3)),
        Value::Int(-3)
    );
}

#[test]
fn renamed_and_skipped_fields_follow_attributes() {
    let model = Person::model();

    assert!(model.field("Alias").is_some());
    assert!(model.field("Nickname").is_none());
    assert!(model.field("Notes").is_none());
    assert_eq!(model.field("Alias").unwrap().ident, "nickname");
    assert_eq!(model.name, "Person");
    assert!(model.path.ends_with("::Person"));
}

#[test]
fn unknown_member_fails() {
    let err = resolve::<Person>("Nope").unwrap_err();

    assert_eq!(err.segment, "Nope");
    assert_eq!(err.owner, "Person");
    assert_eq!(err.reason, MissingReason::NoSuchMember);
}

#[test]
fn unknown_nested_member_names_the_nested_owner() {
    let err = resolve::<Person>("Address.Planet").unwrap_err();

    assert_eq!(err.path, "Address.Planet");
    assert_eq!(err.segment, "Planet");
    assert_eq!(err.owner, "Address");
}

#[test]
fn member_lookup_is_case_sensitive() {
    assert!(resolve::<Person>("name").is_err());
    assert!(resolve::<Person>("NAME").is_err());
}

#[test]
fn path_past_a_scalar_fails() {
    let err = resolve::<Person>("Name.Length").unwrap_err();

    assert_eq!(err.segment, "Length");
    assert_eq!(err.reason, MissingReason::ScalarHasNoMembers);
}

#[test]
fn path_ending_on_a_record_fails() {
    let err = resolve::<Person>("Address").unwrap_err();

    assert_eq!(err.reason, MissingReason::NotComparable);
}

#[test]
fn empty_segments_fail() {
    for path in ["", ".", "Address..City", "Address.", ".Name"] {
        assert!(resolve::<Person>(path).is_err(), "{path:?}");
    }
}

#[test]
fn repeated_resolution_reuses_cached_accessor() {
    let first = resolve::<Person>("Address.City").unwrap();
    let second = resolve::<Person>("Address.City").unwrap();
    let via_model = resolve_model(Person::model(), "Address.City").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first, &via_model));
    assert!(cached_accessors() >= 1);
}

#[test]
fn cache_is_keyed_by_record_type() {
    let person_city = resolve::<Person>("Address.City").unwrap();
    let address_city = resolve::<Address>("City").unwrap();

    assert!(!Arc::ptr_eq(&person_city, &address_city));
    assert_eq!(address_city.value(&Address::new("Ruse")), Value::Text("Ruse".to_string()));
}

#[test]
fn concurrent_first_resolution_converges_on_one_accessor() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| resolve::<Person>("Address.Country.Code").unwrap()))
        .collect();
    let accessors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for accessor in &accessors[1..] {
        assert!(Arc::ptr_eq(&accessors[0], accessor));
    }
}

#[test]
fn accessor_on_foreign_record_reads_null() {
    let accessor = resolve::<Person>("Name").unwrap();

    assert_eq!(accessor.read_any(&Address::new("Ruse")), Value::Null);
}
