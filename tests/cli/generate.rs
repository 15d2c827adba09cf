/// Tests for the ddlgen command line
use super::ddlgen;
use anyhow::Result;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MODEL: &str = r#"
schemas:
  - name: app
tables:
  - schema: app
    name: users
    columns:
      - name: id
        data_type: INT
        is_nullable: false
        is_primary_key: true
enums:
  - schema: app
    name: status
    values: [A, B]
"#;

fn project() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("schema.yaml"), MODEL)?;
    Ok(dir)
}

#[test]
fn test_generate_to_stdout_with_default_model() -> Result<()> {
    let dir = project()?;

    ddlgen(dir.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "-- CockroachDB Schema Generated from UnifiedModel\n\n",
        ))
        .stdout(predicate::str::contains(
            "CREATE TABLE IF NOT EXISTS app.users (\n  id INT NOT NULL,\nPRIMARY KEY (id)\n);",
        ))
        .stdout(predicate::str::contains(
            "CREATE TYPE app.status AS ENUM ('A', 'B');",
        ));

    Ok(())
}

#[test]
fn test_generate_to_output_file() -> Result<()> {
    let dir = project()?;

    ddlgen(dir.path())
        .args(["generate", "--dialect", "crdb", "--output", "out/schema.sql"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let sql = fs::read_to_string(dir.path().join("out/schema.sql"))?;
    assert!(sql.contains("CREATE SCHEMA IF NOT EXISTS app;"));
    Ok(())
}

#[test]
fn test_config_file_supplies_model_and_dialect() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir_all(dir.path().join("models"))?;
    fs::write(dir.path().join("models/app.yaml"), MODEL)?;
    fs::write(
        dir.path().join("ddlgen.yaml"),
        "generator:\n  dialect: cockroach\n  model: models/app.yaml\n",
    )?;

    ddlgen(dir.path())
        .arg("teardown")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DROP TYPE IF EXISTS app.status CASCADE;\n\nDROP TABLE IF EXISTS app.users CASCADE;\n\nDROP SCHEMA IF EXISTS app CASCADE;",
        ));

    Ok(())
}

#[test]
fn test_unknown_dialect_fails() -> Result<()> {
    let dir = project()?;

    ddlgen(dir.path())
        .args(["generate", "--dialect", "oracle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dialect 'oracle'"));

    Ok(())
}

#[test]
fn test_missing_model_fails() -> Result<()> {
    let dir = TempDir::new()?;

    ddlgen(dir.path())
        .args(["generate", "--model", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read model file"));

    Ok(())
}

#[test]
fn test_dialects_lists_builtins() -> Result<()> {
    let dir = TempDir::new()?;

    ddlgen(dir.path())
        .arg("dialects")
        .assert()
        .success()
        .stdout(predicate::str::contains("cockroachdb\tCockroachDB"));

    Ok(())
}
