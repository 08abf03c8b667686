//! Snapshot tests for emitted model-file fragments.
//!
//! These verify the exact text the generation pipeline splices into model
//! files. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use indexmap::IndexMap;
use seqgen_emit::{Decorator, IndexExport, NamedImport, Printer, PropValue, Render};

fn props(entries: &[(&str, PropValue)]) -> IndexMap<String, PropValue> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_model_imports_block() {
    let sequelize = NamedImport::new("sequelize-typescript").symbols([
        "Model",
        "Table",
        "Column",
        "DataType",
    ]);
    let types = NamedImport::new("./user.types").symbol("UserRole");

    let rendered = Printer::print_all(&[&sequelize, &types]);
    insta::assert_snapshot!("model_imports_block", rendered);
}

#[test]
fn test_model_decorators() {
    let table = Decorator::object_literal(
        "Table",
        &props(&[
            ("tableName", PropValue::from("users")),
            ("timestamps", PropValue::from(true)),
        ]),
    );
    let column = Decorator::object_literal(
        "Column",
        &props(&[
            ("type", PropValue::from("DataType.STRING")),
            ("allowNull", PropValue::from(false)),
        ]),
    );
    let index = Decorator::arrow_targets(
        "Index",
        ["email"],
        Some(&props(&[("unique", PropValue::from(true))])),
    );

    let rendered = Printer::print_all(&[&table, &column, &index]);
    insta::assert_snapshot!("model_decorators", rendered);
}

#[test]
fn test_index_file_exports() {
    let rendered = Printer::print_all(&[
        &IndexExport::new("user.model"),
        &IndexExport::new("post.model"),
    ]);
    insta::assert_snapshot!("index_file_exports", rendered);
}

#[test]
fn test_column_decorator_from_json_props() {
    let props: IndexMap<String, PropValue> = serde_json::from_str(
        r#"{ "type": "DataType.INTEGER", "primaryKey": true, "autoIncrement": true }"#,
    )
    .expect("property map should deserialize");

    let decorator = Decorator::object_literal("Column", &props);
    insta::assert_snapshot!("column_from_json", decorator.build());
}
