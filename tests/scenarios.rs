//! End-to-end validation of a realistic nested schema.

use confguard::prelude::*;
use serde_json::{Value, json};

fn fruit_properties() -> Schema {
    Schema::builder()
        .required(FieldDescriptor::new(
            "MarketValue",
            "Market value in dollars, between 0 and 5 or between 10 and 15.",
            Check::number().with(within([(0.0, 5.0), (10.0, 15.0)]).unwrap()),
        ))
        .optional(FieldDescriptor::new(
            "Weights",
            "Between 1 and 4 weights in kilograms, each between 0 and 5.5.",
            Check::array()
                .with(items_between(1, 4).unwrap())
                .with(each(Check::number().with(between(0.0, 5.5).unwrap()))),
        ))
        .optional(
            FieldDescriptor::new(
                "Color",
                "Hex color code such as #ff8800.",
                Check::string().with(matches(["#[0-9a-fA-F]{6}"]).unwrap()),
            )
            .with_default("#000000"),
        )
        .optional(FieldDescriptor::new(
            "Sweetness",
            "Sweetness from 1 to 10. Cannot be combined with Sourness.",
            Check::integer().with(between(1.0, 10.0).unwrap()),
        ))
        .optional(FieldDescriptor::new(
            "Sourness",
            "Sourness from 1 to 10. Cannot be combined with Sweetness.",
            Check::integer().with(between(1.0, 10.0).unwrap()),
        ))
        .exclusive(ExclusiveGroup::one_of(["Sweetness", "Sourness"]))
        .build()
        .unwrap()
}

fn fruit_schema() -> Schema {
    Schema::builder()
        .required(FieldDescriptor::new(
            "Fruit",
            "The fruit eaten: Grape, Orange or Apple.",
            Check::string().with(one_of(["Grape", "Orange", "Apple"])),
        ))
        .required(FieldDescriptor::new(
            "NumberConsumed",
            "How many were eaten, a whole number of at least zero.",
            Check::integer().with(at_least(0.0).unwrap()),
        ))
        .optional(FieldDescriptor::new(
            "FruitProperties",
            "Additional properties of the fruit.",
            Check::object().with(object(fruit_properties())),
        ))
        .build()
        .unwrap()
}

fn contains(errors: &[String], needle: &str) -> bool {
    errors.iter().any(|error| error.contains(needle))
}

#[test]
fn test_valid_document_passes() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Orange",
        "NumberConsumed": 2,
        "FruitProperties": {
            "MarketValue": 12.5,
            "Weights": [1.0, 2.5],
            "Color": "#ffa500",
            "Sweetness": 7
        }
    }));

    assert!(report.is_valid(), "unexpected errors: {:?}", report.errors());
    assert!(report.errors().is_empty());
}

#[test]
fn test_scenario_enumeration_and_type_errors() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Watermelon",
        "NumberConsumed": "bleventeen"
    }));

    assert!(!report.is_valid());
    let errors = report.errors();
    assert!(contains(
        errors,
        "Token \"Fruit\" value \"Watermelon\" is not one of the allowed values [Grape, Orange, Apple]."
    ));
    assert!(contains(
        errors,
        "Token \"NumberConsumed\" has incorrect type, expected integer but found string \"bleventeen\"."
    ));
    assert!(contains(errors, "The fruit eaten: Grape, Orange or Apple."));
    assert!(contains(errors, "How many were eaten, a whole number of at least zero."));
}

#[test]
fn test_scenario_nested_range_violation() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Apple",
        "NumberConsumed": 1,
        "FruitProperties": { "MarketValue": 7 }
    }));

    assert!(!report.is_valid());
    assert_eq!(
        report.errors(),
        [
            "Value of token FruitProperties failed: Token \"MarketValue\" value 7 is not within any of the ranges [0, 5], [10, 15].",
            "Value of token FruitProperties failed: Token \"MarketValue\" failed validation. Market value in dollars, between 0 and 5 or between 10 and 15.",
            "Validation for object FruitProperties failed.",
            "Token \"FruitProperties\" failed validation. Additional properties of the fruit.",
        ]
    );
}

#[test]
fn test_scenario_array_elements_and_count() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Grape",
        "NumberConsumed": 40,
        "FruitProperties": {
            "MarketValue": 3,
            "Weights": [2.5, 3.8, 9.5, "eight", 0.1, 3.8, 17]
        }
    }));

    assert!(!report.is_valid());
    let errors = report.errors();
    assert!(contains(errors, "Token \"Weights\" has 7 elements, expected between 1 and 4."));
    assert!(contains(errors, "Token \"Weights[2]\" value 9.5 is not within the range [0, 5.5]."));
    assert!(contains(
        errors,
        "Token \"Weights[3]\" has incorrect type, expected number but found string \"eight\"."
    ));
    assert!(contains(errors, "Token \"Weights[6]\" value 17 is not within the range [0, 5.5]."));
    assert!(!contains(errors, "Weights[0]"));
    assert!(!contains(errors, "Weights[4]"));
}

#[test]
fn test_scenario_mutually_exclusive_fields() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Grape",
        "NumberConsumed": 4,
        "FruitProperties": {
            "MarketValue": 1,
            "Sweetness": 8,
            "Sourness": 2
        }
    }));

    assert!(!report.is_valid());
    assert!(contains(
        report.errors(),
        "Value of token FruitProperties failed: Tokens \"Sweetness\", \"Sourness\" are mutually exclusive"
    ));
}

#[test]
fn test_nested_defaults_are_injected() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Grape",
        "NumberConsumed": 4,
        "FruitProperties": { "MarketValue": 1 }
    }));

    assert!(report.is_valid());
    assert_eq!(report.document()["FruitProperties"]["Color"], json!("#000000"));
}

#[test]
fn test_unrecognized_nested_key_is_attributed() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "Grape",
        "NumberConsumed": 4,
        "FruitProperties": { "MarketValue": 1, "Texture": "crunchy" }
    }));

    assert!(!report.is_valid());
    assert!(contains(
        report.errors(),
        "Value of token FruitProperties failed: Unrecognized token \"Texture\"."
    ));
}

#[test]
fn test_every_problem_reported_in_one_pass() {
    let report = fruit_schema().validate(&json!({
        "Fruit": "",
        "Seeds": true,
        "FruitProperties": { "Color": "orange" }
    }));

    assert!(!report.is_valid());
    let errors = report.errors();
    assert!(contains(errors, "Value of token \"Fruit\" is null or empty."));
    assert!(contains(errors, "Missing required token \"NumberConsumed\"."));
    assert!(contains(errors, "Missing required token \"MarketValue\"."));
    assert!(contains(errors, "does not fully match any of the patterns ['#[0-9a-fA-F]{6}']"));
    assert!(contains(errors, "Unrecognized token \"Seeds\"."));
}

#[test]
fn test_diagnostics_follow_schema_order() {
    let report = fruit_schema().validate(&json!({
        "Extra": 1,
        "NumberConsumed": -3,
        "Fruit": "Kiwi"
    }));

    let errors = report.errors();
    let position = |needle: &str| errors.iter().position(|e| e.contains(needle)).unwrap();
    assert!(position("\"Fruit\"") < position("\"NumberConsumed\""));
    assert!(position("\"NumberConsumed\"") < position("Unrecognized token \"Extra\""));
}

#[test]
fn test_into_result() {
    let schema = fruit_schema();

    let document = schema
        .validate(&json!({"Fruit": "Apple", "NumberConsumed": 0}))
        .into_result()
        .unwrap();
    assert_eq!(document, json!({"Fruit": "Apple", "NumberConsumed": 0}));

    let err = schema.validate(&json!({})).into_result().unwrap_err();
    assert_eq!(err.errors().len(), 2);
    let err: SchemaError = err.into();
    assert!(err.to_string().contains("2 problems found"));
}

#[test]
fn test_template_lists_top_level_fields() {
    let template = fruit_schema().template();
    assert_eq!(
        template,
        json!({
            "Fruit": "The fruit eaten: Grape, Orange or Apple.",
            "NumberConsumed": "How many were eaten, a whole number of at least zero.",
            "FruitProperties": "Additional properties of the fruit."
        })
    );
    assert!(template.as_object().unwrap().values().all(Value::is_string));
}

#[test]
fn test_custom_closure_constraint() {
    let schema = Schema::builder()
        .required(FieldDescriptor::new(
            "Count",
            "An even number.",
            Check::integer().with(|value: &Value, field: &str, diagnostics: &mut Diagnostics| {
                let even = value.as_i64().is_some_and(|n| n % 2 == 0);
                if !even {
                    diagnostics.report(format!("Token \"{}\" must be even.", field));
                }
                even
            }),
        ))
        .build()
        .unwrap();

    assert!(schema.validate(&json!({"Count": 4})).is_valid());

    let report = schema.validate(&json!({"Count": 3}));
    assert!(!report.is_valid());
    assert_eq!(report.errors()[0], "Token \"Count\" must be even.");
}
