//! Whole-model script generation through the public library API

use anyhow::Result;
use ddlgen::model::{
    Column, Constraint, Enum, Extension, Function, FunctionArgument, Index, IndexColumn, Schema,
    Sequence, Table, Trigger, UnifiedModel,
};
use ddlgen::{DialectGenerator, GeneratorRegistry};

fn full_model() -> UnifiedModel {
    let mut users = Table::new(
        "app",
        "users",
        vec![
            Column {
                is_nullable: false,
                is_primary_key: true,
                default_value: Some("gen_random_uuid()".to_string()),
                default_is_function: true,
                ..Column::new("id", "UUID")
            },
            Column {
                is_nullable: false,
                ..Column::new("email", "STRING")
            },
            Column {
                default_value: Some("active".to_string()),
                ..Column::new("status", "app.status")
            },
        ],
    );
    users.constraints = vec![Constraint::unique(["email"]).named("users_email_key")];
    users.indexes = vec![Index {
        schema: "app".to_string(),
        table: "users".to_string(),
        name: Some("users_status_idx".to_string()),
        columns: vec![IndexColumn {
            column_name: "status".to_string(),
            order: -1,
            null_position: 1,
        }],
        where_clause: Some("status IS NOT NULL".to_string()),
        ..Index::default()
    }];

    UnifiedModel {
        schemas: vec![Schema::new("app")],
        tables: vec![users],
        enums: vec![Enum {
            schema: "app".to_string(),
            name: "status".to_string(),
            values: vec!["active".to_string(), "disabled".to_string()],
        }],
        functions: vec![Function {
            schema: "app".to_string(),
            name: "touch".to_string(),
            arguments: vec![FunctionArgument::new("id", "UUID")],
            return_type: "VOID".to_string(),
            definition: "$$ SELECT 1 $$ LANGUAGE SQL".to_string(),
        }],
        triggers: vec![Trigger {
            name: "users_touch".to_string(),
            timing: "BEFORE".to_string(),
            event: "UPDATE".to_string(),
            schema: "app".to_string(),
            table: "users".to_string(),
            definition: "EXECUTE FUNCTION app.touch_trigger()".to_string(),
        }],
        sequences: vec![Sequence {
            schema: "app".to_string(),
            name: "invoice_numbers".to_string(),
            start: Some(1000),
            increment: Some(1),
            ..Sequence::default()
        }],
        extensions: vec![Extension::new("pg_trgm", "app")],
    }
}

fn cockroach() -> std::sync::Arc<dyn DialectGenerator> {
    GeneratorRegistry::with_builtins()
        .require("cockroachdb")
        .expect("cockroachdb is a builtin dialect")
}

#[test]
fn test_full_model_script() -> Result<()> {
    let generated = cockroach().generate_schema(&full_model())?;

    let expected = "\
-- CockroachDB Schema Generated from UnifiedModel

CREATE SCHEMA IF NOT EXISTS app;

CREATE TABLE IF NOT EXISTS app.users (
  id UUID NOT NULL DEFAULT gen_random_uuid(),
  email STRING NOT NULL,
  status app.status DEFAULT 'active',
PRIMARY KEY (id),
UNIQUE (email) CONSTRAINT users_email_key
);
CREATE INDEX users_status_idx ON app.users (status DESC NULLS FIRST) WHERE status IS NOT NULL;

CREATE TYPE app.status AS ENUM ('active', 'disabled');

CREATE OR REPLACE FUNCTION app.touch(id UUID) RETURNS VOID AS $$ SELECT 1 $$ LANGUAGE SQL;

CREATE TRIGGER users_touch
  BEFORE UPDATE
  ON app.users
  FOR EACH ROW
EXECUTE FUNCTION app.touch_trigger();

CREATE SEQUENCE IF NOT EXISTS app.invoice_numbers START WITH 1000 INCREMENT BY 1 NO CYCLE;

CREATE EXTENSION IF NOT EXISTS pg_trgm SCHEMA app;

";
    assert_eq!(generated.sql, expected);
    assert!(generated.warnings.is_empty());
    Ok(())
}

#[test]
fn test_kind_order_is_fixed_regardless_of_dependencies() -> Result<()> {
    // Extensions come last even though the table could depend on them
    let script = cockroach().generate_schema(&full_model())?.sql;

    let positions: Vec<usize> = [
        "CREATE SCHEMA",
        "CREATE TABLE",
        "CREATE TYPE",
        "CREATE OR REPLACE FUNCTION",
        "CREATE TRIGGER",
        "CREATE SEQUENCE",
        "CREATE EXTENSION",
    ]
    .iter()
    .map(|marker| script.find(marker).expect("statement present"))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn test_create_statements_match_script_body() -> Result<()> {
    let generator = cockroach();
    let model = full_model();

    let statements = generator.create_statements(&model)?;
    assert_eq!(statements.len(), model.object_count());

    let script = generator.generate_schema(&model)?.sql;
    for statement in &statements {
        assert!(script.contains(statement.as_str()));
    }
    Ok(())
}

#[test]
fn test_drop_targets_match_create_targets() -> Result<()> {
    let generator = cockroach();
    let model = full_model();

    let schema = &model.schemas[0];
    assert!(generator.create_schema(schema)?.contains(&schema.qualified_name()));
    assert!(generator.drop_schema(schema)?.contains(&schema.qualified_name()));

    let table = &model.tables[0];
    assert!(generator.create_table(table)?.contains(&table.qualified_name()));
    assert!(generator.drop_table(table)?.contains(&table.qualified_name()));

    let enum_type = &model.enums[0];
    assert!(generator.create_enum(enum_type)?.contains(&enum_type.qualified_name()));
    assert!(generator.drop_enum(enum_type)?.contains(&enum_type.qualified_name()));

    let function = &model.functions[0];
    assert!(generator.create_function(function)?.contains(&function.qualified_name()));
    assert!(generator.drop_function(function)?.contains(&function.qualified_name()));

    let trigger = &model.triggers[0];
    assert!(generator.create_trigger(trigger)?.contains(&trigger.table_name()));
    assert!(generator.drop_trigger(trigger)?.contains(&trigger.qualified_name()));

    let sequence = &model.sequences[0];
    assert!(generator.create_sequence(sequence)?.contains(&sequence.qualified_name()));
    assert!(generator.drop_sequence(sequence)?.contains(&sequence.qualified_name()));

    let extension = &model.extensions[0];
    assert!(generator.create_extension(extension)?.contains(&extension.qualified_name()));
    assert!(generator.drop_extension(extension)?.contains(&extension.qualified_name()));
    Ok(())
}

#[test]
fn test_teardown_reverses_kind_order() -> Result<()> {
    let script = cockroach().generate_teardown(&full_model())?.sql;

    let positions: Vec<usize> = [
        "DROP EXTENSION",
        "DROP SEQUENCE",
        "DROP TRIGGER",
        "DROP FUNCTION",
        "DROP TYPE",
        "DROP TABLE",
        "DROP SCHEMA",
    ]
    .iter()
    .map(|marker| script.find(marker).expect("statement present"))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(script.starts_with("-- CockroachDB Teardown Generated from UnifiedModel\n\n"));
    Ok(())
}

#[test]
fn test_duplicate_objects_are_rendered_twice() -> Result<()> {
    let model = UnifiedModel {
        schemas: vec![Schema::new("app"), Schema::new("app")],
        ..UnifiedModel::default()
    };
    let script = cockroach().generate_schema(&model)?.sql;
    assert_eq!(script.matches("CREATE SCHEMA IF NOT EXISTS app;").count(), 2);
    Ok(())
}
