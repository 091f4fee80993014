//! Typed values through the serde_json backend.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use json_format_core::{
    json_enum, json_record, AutoJson, AutoMarshalling, Decimal, Decoder, Encoder, FormatError,
    Json, JsonType, Shape, View,
};
use json_format_serde::{ConfigurableSerdeJson, SerdeJsonConfig, SERDE_JSON};
use proptest::prelude::*;
use serde_json::{json, Value};

const PUBLIC: View = View::new("public");
const INTERNAL: View = View::new("internal");

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

json_record!(Person { name, age });

#[derive(Debug, Clone, Copy, PartialEq)]
enum Role {
    Admin,
    Member,
}

json_enum!(Role {
    Admin => "admin",
    Member => "member",
});

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u64,
    display_name: String,
    role: Role,
    email: Option<String>,
    secret: Option<String>,
}

json_record!(Account {
    id,
    display_name as "displayName",
    role,
    email,
    secret in [INTERNAL],
});

#[derive(Debug, Clone, PartialEq)]
struct Credentials {
    user: String,
    password_hash: String,
}

json_record!(Credentials {
    user,
    password_hash as "passwordHash" in [INTERNAL],
});

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: i64,
    items: Vec<u8>,
    notes: BTreeMap<String, String>,
}

json_record!(Order { id, items, notes });

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        age: 36,
    }
}

fn account() -> Account {
    Account {
        id: 7,
        display_name: "Ada L.".to_string(),
        role: Role::Admin,
        email: None,
        secret: Some("s3cret".to_string()),
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[test]
fn record_fields_follow_declaration_order() {
    assert_eq!(
        SERDE_JSON.to_compact_string(&ada()),
        r#"{"name":"Ada","age":36}"#
    );
    assert_eq!(
        SERDE_JSON.to_compact_string(&account()),
        r#"{"id":7,"displayName":"Ada L.","role":"admin","email":null,"secret":"s3cret"}"#
    );
}

#[test]
fn record_round_trips_through_text() {
    let text = SERDE_JSON.to_pretty_string(&account());
    assert_eq!(SERDE_JSON.from_str::<Account>(&text), Ok(account()));
}

#[test]
fn record_input_order_does_not_matter() {
    let person: Person = SERDE_JSON.from_str(r#"{"age":36,"name":"Ada"}"#).unwrap();
    assert_eq!(person, ada());
}

#[test]
fn optional_fields_may_be_missing() {
    let text = r#"{"id":1,"displayName":"x","role":"member"}"#;
    let account: Account = SERDE_JSON.from_str(text).unwrap();
    assert_eq!(account.email, None);
    assert_eq!(account.secret, None);
    assert_eq!(account.role, Role::Member);
}

#[test]
fn missing_required_field_is_reported() {
    let err = SERDE_JSON.from_str::<Person>(r#"{"name":"Ada"}"#).unwrap_err();
    assert_eq!(
        err,
        FormatError::MissingRequiredField {
            path: Default::default(),
            field: "age".to_string(),
        }
    );
}

#[test]
fn unknown_fields_are_ignored_by_default() {
    let person: Person = SERDE_JSON
        .from_str(r#"{"name":"Ada","age":36,"extra":[1,2]}"#)
        .unwrap();
    assert_eq!(person, ada());
}

#[test]
fn unknown_fields_can_be_denied() {
    let strict = ConfigurableSerdeJson::new(SerdeJsonConfig::DEFAULT.deny_unknown_fields());
    let err = strict
        .from_str::<Person>(r#"{"name":"Ada","age":36,"extra":true}"#)
        .unwrap_err();
    assert!(matches!(err, FormatError::UnknownField { ref field, .. } if field == "extra"));
    assert_eq!(strict.from_str::<Person>(r#"{"name":"Ada","age":36}"#), Ok(ada()));
}

#[test]
fn record_from_non_object_is_a_conversion_error() {
    let err = SERDE_JSON.from_str::<Person>("[1]").unwrap_err();
    assert_eq!(
        err,
        FormatError::Conversion {
            path: Default::default(),
            expected: Shape::Record("Person"),
            actual: JsonType::Array,
        }
    );
}

#[test]
fn unknown_enum_name_is_a_conversion_error() {
    let err = SERDE_JSON.from_str::<Role>(r#""owner""#).unwrap_err();
    assert!(matches!(err, FormatError::Conversion { expected: Shape::Enum("Role"), .. }));
}

// ── Views ─────────────────────────────────────────────────────────────────────

#[test]
fn view_restricts_encoded_fields() {
    let public = SERDE_JSON.to_node_view(&account(), PUBLIC);
    let names: Vec<_> = SERDE_JSON
        .fields(&public)
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, ["id", "displayName", "role", "email"]);

    let internal = SERDE_JSON.to_node_view(&account(), INTERNAL);
    assert_eq!(internal["secret"], json!("s3cret"));
    assert_eq!(SERDE_JSON.fields(&internal).unwrap().len(), 5);
}

#[test]
fn view_string_output() {
    let creds = Credentials {
        user: "ada".to_string(),
        password_hash: "x1".to_string(),
    };
    assert_eq!(
        SERDE_JSON.to_compact_string_view(&creds, PUBLIC),
        r#"{"user":"ada"}"#
    );
    assert_eq!(
        SERDE_JSON.to_compact_string_view(&creds, INTERNAL),
        r#"{"user":"ada","passwordHash":"x1"}"#
    );
}

#[test]
fn hidden_optional_field_decodes_as_absent() {
    let text = r#"{"id":7,"displayName":"Ada L.","role":"admin","secret":"leaked"}"#;
    let account: Account = SERDE_JSON.from_str_view(text, PUBLIC).unwrap();
    assert_eq!(account.secret, None);

    let account: Account = SERDE_JSON.from_str_view(text, INTERNAL).unwrap();
    assert_eq!(account.secret.as_deref(), Some("leaked"));
}

#[test]
fn hidden_required_field_is_missing() {
    let text = r#"{"user":"ada","passwordHash":"x1"}"#;
    let err = SERDE_JSON
        .from_str_view::<Credentials>(text, PUBLIC)
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::MissingRequiredField { ref field, .. } if field == "passwordHash"
    ));
    assert!(SERDE_JSON.from_str_view::<Credentials>(text, INTERNAL).is_ok());
}

#[test]
fn hidden_fields_do_not_count_as_unknown() {
    let strict = ConfigurableSerdeJson::new(SerdeJsonConfig::DEFAULT.deny_unknown_fields());
    let text = r#"{"id":7,"displayName":"x","role":"admin","email":null,"secret":"s"}"#;
    assert!(strict.from_str_view::<Account>(text, PUBLIC).is_ok());
}

// ── Numbers ───────────────────────────────────────────────────────────────────

#[test]
fn fractional_number_does_not_narrow_to_integer() {
    let err = SERDE_JSON.from_str::<i32>("3.5").unwrap_err();
    assert_eq!(
        err,
        FormatError::PrecisionLoss {
            path: Default::default(),
            value: "3.5".to_string(),
            target: "i32",
        }
    );
    assert_eq!(SERDE_JSON.from_str::<i32>("3.0"), Ok(3));
    assert_eq!(SERDE_JSON.from_str::<u64>("3e2"), Ok(300));
}

#[test]
fn out_of_range_number_does_not_narrow() {
    assert!(matches!(
        SERDE_JSON.from_str::<u8>("256"),
        Err(FormatError::PrecisionLoss { target: "u8", .. })
    ));
    assert!(matches!(
        SERDE_JSON.from_str::<u32>("-1"),
        Err(FormatError::PrecisionLoss { .. })
    ));
    assert_eq!(SERDE_JSON.from_str::<i8>("-128"), Ok(-128));
}

#[test]
fn wide_integers_keep_every_digit() {
    let value = u128::MAX;
    let text = SERDE_JSON.to_compact_string(&value);
    assert_eq!(text, u128::MAX.to_string());
    assert_eq!(SERDE_JSON.from_str::<u128>(&text), Ok(value));
    assert_eq!(
        SERDE_JSON.from_str::<i128>(&i128::MIN.to_string()),
        Ok(i128::MIN)
    );
}

#[test]
fn decimal_keeps_its_text() {
    let text = "3.141592653589793238462643383279";
    let decimal: Decimal = SERDE_JSON.from_str(text).unwrap();
    assert_eq!(decimal.as_str(), text);
    assert_eq!(SERDE_JSON.to_compact_string(&decimal), text);
}

#[test]
fn string_is_not_a_number() {
    assert!(matches!(
        SERDE_JSON.from_str::<i64>(r#""12""#),
        Err(FormatError::Conversion { actual: JsonType::String, .. })
    ));
}

#[test]
fn data_uri_text_is_an_ordinary_string() {
    for text in [
        "data:application/octet-stream;base64,AQID",
        "data:application/octet-stream;base64,not b64!",
        "data:application/cbor,base64;9w==",
    ] {
        let printed = SERDE_JSON.to_compact_string(&text.to_string());
        assert_eq!(SERDE_JSON.from_str::<String>(&printed), Ok(text.to_string()));
    }
}

// ── Null mapping ──────────────────────────────────────────────────────────────

#[test]
fn absent_scalars_encode_as_null() {
    let name: Option<String> = None;
    let count: Option<i64> = None;
    let flag: Option<bool> = None;
    for node in [
        SERDE_JSON.to_node(&name),
        SERDE_JSON.to_node(&count),
        SERDE_JSON.to_node(&flag),
    ] {
        assert_eq!(node, Value::Null);
    }
    let node = SERDE_JSON.to_node(&account());
    assert_eq!(node.get("email"), Some(&Value::Null));
}

// ── Collections and paths ─────────────────────────────────────────────────────

#[test]
fn conversion_error_carries_node_path() {
    let text = r#"{"id":1,"items":[1,"two",3],"notes":{}}"#;
    let err = SERDE_JSON.from_str::<Order>(text).unwrap_err();
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("/items/1"));
    assert!(matches!(err, FormatError::Conversion { actual: JsonType::String, .. }));
}

#[test]
fn nested_map_error_path_escapes_keys() {
    let text = r#"{"id":1,"items":[],"notes":{"a/b":1}}"#;
    let err = SERDE_JSON.from_str::<Order>(text).unwrap_err();
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("/notes/a~1b"));
}

#[test]
fn maps_keep_or_normalize_order() {
    let text = r#"{"z":1,"a":2}"#;
    let ordered: IndexMap<String, i32> = SERDE_JSON.from_str(text).unwrap();
    assert_eq!(ordered.keys().collect::<Vec<_>>(), ["z", "a"]);
    assert_eq!(SERDE_JSON.to_compact_string(&ordered), text);

    let sorted: BTreeMap<String, i32> = SERDE_JSON.from_str(text).unwrap();
    assert_eq!(SERDE_JSON.to_compact_string(&sorted), r#"{"a":2,"z":1}"#);

    let hashed: HashMap<String, i32> = SERDE_JSON.from_str(text).unwrap();
    assert_eq!(hashed.get("z"), Some(&1));
}

#[derive(Debug, PartialEq)]
struct Name {
    name: String,
}

json_record!(Name { name });

#[test]
fn convert_re_reads_through_the_tree() {
    let name: Name = SERDE_JSON.convert(&ada()).unwrap();
    assert_eq!(name.name, "Ada");

    assert!(SERDE_JSON.convert::<Person, BTreeMap<String, u64>>(&ada()).is_err());
}

#[test]
fn malformed_text_is_reported_before_conversion() {
    assert!(matches!(
        SERDE_JSON.from_str::<Person>("{not json"),
        Err(FormatError::MalformedJson(_))
    ));
}

// ── Hand-written impls ────────────────────────────────────────────────────────

/// Carried as `"x,y"`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl AutoJson for Point {
    fn shape() -> Shape {
        Shape::Record("Point")
    }

    fn encode<J: Json>(&self, enc: &Encoder<'_, J>) -> J::Node {
        enc.json().string(Some(&format!("{},{}", self.x, self.y)))
    }

    fn decode<J: Json>(dec: &Decoder<'_, J>) -> json_format_core::Result<Self> {
        dec.expect::<Self>(JsonType::String)?;
        let text = dec.text();
        let (x, y) = text.split_once(',').ok_or_else(|| dec.mismatch::<Self>())?;
        match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Ok(Point { x, y }),
            _ => Err(dec.mismatch::<Self>()),
        }
    }
}

#[test]
fn hand_written_impl_composes_with_collections() {
    let points = vec![Point { x: 1, y: 2 }, Point { x: -3, y: 4 }];
    let text = SERDE_JSON.to_compact_string(&points);
    assert_eq!(text, r#"["1,2","-3,4"]"#);
    assert_eq!(SERDE_JSON.from_str::<Vec<Point>>(&text), Ok(points));
}

// ── Round-trip law ────────────────────────────────────────────────────────────

fn person_strategy() -> impl Strategy<Value = Person> {
    (".*", any::<u32>()).prop_map(|(name, age)| Person { name, age })
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (
        any::<i64>(),
        prop::collection::vec(any::<u8>(), 0..8),
        prop::collection::btree_map("[a-z/~]{0,6}", ".*", 0..4),
    )
        .prop_map(|(id, items, notes)| Order { id, items, notes })
}

proptest! {
    #[test]
    fn person_round_trips(person in person_strategy()) {
        let node = SERDE_JSON.to_node(&person);
        prop_assert_eq!(SERDE_JSON.from_node::<Person>(&node), Ok(person));
    }

    #[test]
    fn order_round_trips_through_text(order in order_strategy()) {
        let text = SERDE_JSON.to_compact_string(&order);
        prop_assert_eq!(SERDE_JSON.from_str::<Order>(&text), Ok(order));
    }

    #[test]
    fn finite_floats_round_trip(value in -1.0e300f64..1.0e300) {
        let text = SERDE_JSON.to_compact_string(&value);
        prop_assert_eq!(SERDE_JSON.from_str::<f64>(&text), Ok(value));
    }

    #[test]
    fn optional_integers_round_trip(value in proptest::option::of(any::<i128>())) {
        let node = SERDE_JSON.to_node(&value);
        prop_assert_eq!(SERDE_JSON.from_node::<Option<i128>>(&node), Ok(value));
    }
}
