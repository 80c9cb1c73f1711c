//! Integration tests for the JSON helpers.

use objects_common::warning::has_warned;
use objects_json::{Arguments, JsonError, Reconstruct, deserialize, deserialize_with, serialize};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Rect {
    width: u32,
    height: u32,
}

impl Reconstruct for Rect {
    fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError> {
        Ok(Self {
            width: args.take()?,
            height: args.take()?,
        })
    }
}

/// Same fields as `Rect`, but the constructor takes them the other way round.
#[derive(Debug, PartialEq)]
struct Flipped {
    width: u32,
    height: u32,
}

impl Reconstruct for Flipped {
    fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError> {
        let height = args.take()?;
        let width = args.take()?;
        Ok(Self { width, height })
    }
}

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    nickname: Option<String>,
}

impl Reconstruct for Person {
    fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError> {
        Ok(Self {
            name: args.take()?,
            nickname: args.take()?,
        })
    }
}

// Serialization

#[test]
fn test_serialize_array() {
    assert_eq!(serialize(&[1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_serialize_struct_keeps_declaration_order() {
    let rect = Rect {
        width: 10,
        height: 20,
    };
    assert_eq!(serialize(&rect).unwrap(), r#"{"width":10,"height":20}"#);
}

#[test]
fn test_serialize_map_keeps_insertion_order() {
    let value = json!({ "zeta": 1, "alpha": [true, null], "mid": "x" });
    assert_eq!(
        serialize(&value).unwrap(),
        r#"{"zeta":1,"alpha":[true,null],"mid":"x"}"#
    );
}

#[test]
fn test_serialize_primitives() {
    assert_eq!(serialize("text").unwrap(), r#""text""#);
    assert_eq!(serialize(&42).unwrap(), "42");
    assert_eq!(serialize(&Value::Null).unwrap(), "null");
}

// Round trip

#[test]
fn test_round_trip() {
    let rect = Rect {
        width: 64,
        height: 32,
    };
    let text = serialize(&rect).unwrap();
    assert_eq!(deserialize::<Rect>(&text).unwrap(), rect);
}

#[test]
fn test_deserialize_is_positional_not_by_name() {
    // Keys are written in the opposite order to the constructor parameters.
    let rect: Rect = deserialize(r#"{"height":20,"width":10}"#).unwrap();
    assert_eq!(
        rect,
        Rect {
            width: 20,
            height: 10
        }
    );
}

#[test]
fn test_mismatched_constructor_order_populates_wrongly() {
    let text = serialize(&Rect {
        width: 1,
        height: 2,
    })
    .unwrap();
    let flipped: Flipped = deserialize(&text).unwrap();
    assert_eq!(
        flipped,
        Flipped {
            width: 2,
            height: 1
        }
    );
}

#[test]
fn test_deserialize_array_positions() {
    let rect: Rect = deserialize("[7, 9]").unwrap();
    assert_eq!(
        rect,
        Rect {
            width: 7,
            height: 9
        }
    );
}

// Missing, surplus, and mistyped values

#[test]
fn test_missing_optional_value_is_none() {
    let person: Person = deserialize(r#"{"name":"Ann"}"#).unwrap();
    assert_eq!(
        person,
        Person {
            name: "Ann".to_string(),
            nickname: None,
        }
    );
}

#[test]
fn test_missing_required_value_is_an_argument_error() {
    let err = deserialize::<Rect>(r#"{"width":10}"#).unwrap_err();
    assert!(matches!(err, JsonError::Argument { position: 1, .. }));
}

#[test]
fn test_mistyped_value_reports_position() {
    let err = deserialize::<Rect>(r#"{"width":10,"height":"tall"}"#).unwrap_err();
    assert!(matches!(err, JsonError::Argument { position: 1, .. }));
    assert!(err.to_string().starts_with("positional value 1 has the wrong shape"));
}

#[test]
fn test_surplus_values_are_ignored_with_a_warning() {
    let rect: Rect = deserialize(r#"{"width":3,"height":4,"depth":5}"#).unwrap();
    assert_eq!(
        rect,
        Rect {
            width: 3,
            height: 4
        }
    );
    assert!(has_warned(
        "JSON",
        "ignoring 1 surplus positional value(s) after position 2"
    ));
}

#[test]
fn test_scalar_document_has_no_positional_values() {
    let person: Result<Person, _> = deserialize("42");
    assert!(matches!(person, Err(JsonError::Argument { position: 0, .. })));
    assert!(has_warned("JSON", "top-level number has no positional values"));
}

#[test]
fn test_malformed_text_is_a_syntax_error() {
    let err = deserialize::<Rect>(r#"{"width":10,"#).unwrap_err();
    assert!(matches!(err, JsonError::Syntax(_)));
}

// Arguments

#[test]
fn test_arguments_track_position() {
    let mut args = Arguments::from_value(json!({ "a": 1, "b": "two" }));
    assert_eq!(args.len(), 2);
    assert_eq!(args.position(), 0);

    let first: u8 = args.take().unwrap();
    assert_eq!(first, 1);
    assert_eq!(args.position(), 1);
    assert_eq!(args.len(), 1);

    let second: String = args.take().unwrap();
    assert_eq!(second, "two");
    assert!(args.is_empty());
}

#[test]
fn test_deserialize_with_closure_factory() {
    let (name, age): (String, u8) =
        deserialize_with(r#"{"name":"Bo","age":7}"#, |args| Ok((args.take()?, args.take()?)))
            .unwrap();
    assert_eq!(name, "Bo");
    assert_eq!(age, 7);
}

#[test]
fn test_factory_error_is_propagated() {
    let result: Result<u8, JsonError> = deserialize_with("[1]", |args| {
        let _: u8 = args.take()?;
        args.take::<u8>()
    });
    assert!(matches!(result, Err(JsonError::Argument { position: 1, .. })));
}
