//! The fruit schema: a small but complete example of a nested schema.
//!
//! This example demonstrates:
//! - Enumerations, integer and numeric range constraints
//! - A nested object validated against its own schema
//! - Array length and per-element constraints
//! - Defaults and mutually exclusive fields
//! - Printing a report and a template
//!
//! Run with: cargo run --example fruit

use confguard::prelude::*;
use serde_json::json;

fn fruit_properties() -> Result<Schema> {
    Schema::builder()
        .required(FieldDescriptor::new(
            "MarketValue",
            "Market value in dollars, between 0 and 5 or between 10 and 15.",
            Check::number().with(within([(0.0, 5.0), (10.0, 15.0)])?),
        ))
        .optional(FieldDescriptor::new(
            "Weights",
            "Between 1 and 4 weights in kilograms, each between 0 and 5.5.",
            Check::array()
                .with(items_between(1, 4)?)
                .with(each(Check::number().with(between(0.0, 5.5)?))),
        ))
        .optional(
            FieldDescriptor::new(
                "Color",
                "Hex color code such as #ff8800.",
                Check::string().with(matches(["#[0-9a-fA-F]{6}"])?),
            )
            .with_default("#000000"),
        )
        .optional(FieldDescriptor::new(
            "Sweetness",
            "Sweetness from 1 to 10. Cannot be combined with Sourness.",
            Check::integer().with(between(1.0, 10.0)?),
        ))
        .optional(FieldDescriptor::new(
            "Sourness",
            "Sourness from 1 to 10. Cannot be combined with Sweetness.",
            Check::integer().with(between(1.0, 10.0)?),
        ))
        .exclusive(ExclusiveGroup::one_of(["Sweetness", "Sourness"]))
        .build()
}

fn fruit_schema() -> Result<Schema> {
    Schema::builder()
        .required(FieldDescriptor::new(
            "Fruit",
            "The fruit eaten: Grape, Orange or Apple.",
            Check::string().with(one_of(["Grape", "Orange", "Apple"])),
        ))
        .required(FieldDescriptor::new(
            "NumberConsumed",
            "How many were eaten, a whole number of at least zero.",
            Check::integer().with(at_least(0.0)?),
        ))
        .optional(FieldDescriptor::new(
            "FruitProperties",
            "Additional properties of the fruit.",
            Check::object().with(object(fruit_properties()?)),
        ))
        .build()
}

fn print_report(title: &str, report: &Report) {
    println!("== {} ({})", title, if report.is_valid() { "valid" } else { "invalid" });
    for error in report.errors() {
        println!("  - {}", error);
    }
}

fn main() -> Result<()> {
    let schema = fruit_schema()?;

    println!("Template:");
    let mut stdout = std::io::stdout();
    schema.write_template(Format::Json, &mut stdout)?;
    println!();

    let good = schema.validate(&json!({
        "Fruit": "Apple",
        "NumberConsumed": 3,
        "FruitProperties": { "MarketValue": 2.5, "Weights": [0.2, 0.25] }
    }));
    print_report("good", &good);
    println!("  defaulted document: {}", good.document());

    let bad = schema.validate(&json!({
        "Fruit": "Watermelon",
        "NumberConsumed": "bleventeen",
        "FruitProperties": {
            "MarketValue": 7,
            "Weights": [2.5, 3.8, 9.5, "eight", 0.1, 3.8, 17],
            "Sweetness": 4,
            "Sourness": 6
        },
        "Seeds": 12
    }));
    print_report("bad", &bad);

    Ok(())
}
