//! # Validate Subcommand
//!
//! Validates one or more JSON or YAML documents against a schema file
//! or a named built-in guard rule, printing PASS/FAIL per document with
//! structured violation lines.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use serde_json::Value;

use tracing::debug;
use vguard_schema::{SchemaError, SchemaRegistry};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a JSON Schema file to validate against.
    #[arg(long, conflicts_with = "builtin")]
    pub schema: Option<PathBuf>,

    /// Built-in guard rule to validate against.
    #[arg(long, value_enum)]
    pub builtin: Option<BuiltinRule>,

    /// Documents to validate (.json, .yaml, or .yml).
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
}

/// The built-in guard rules, addressable by name.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum BuiltinRule {
    /// Reject only the null value.
    NotNull,
    /// Require a string with at least one character.
    NonEmptyString,
    /// Require an array with at least one element.
    NonEmptyArray,
    /// Require an object with at least one property.
    NonEmptyObject,
}

impl BuiltinRule {
    /// The schema text this rule compiles from.
    pub fn schema_text(self) -> &'static str {
        match self {
            BuiltinRule::NotNull => vguard_core::NOT_NULL,
            BuiltinRule::NonEmptyString => vguard_core::NON_EMPTY_STRING,
            BuiltinRule::NonEmptyArray => vguard_core::NON_EMPTY_ARRAY,
            BuiltinRule::NonEmptyObject => vguard_core::NON_EMPTY_OBJECT,
        }
    }
}

/// Runs the validate subcommand. Returns true if every document passed.
pub fn run(args: &ValidateArgs) -> anyhow::Result<bool> {
    let schema_text = match (&args.schema, args.builtin) {
        (Some(path), None) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read schema file {}", path.display()))?,
        (None, Some(rule)) => rule.schema_text().to_string(),
        (None, None) => bail!("one of --schema or --builtin is required"),
        (Some(_), Some(_)) => bail!("--schema and --builtin are mutually exclusive"),
    };

    let registry = SchemaRegistry::new();
    let mut all_passed = true;

    debug!(documents = args.documents.len(), "validating documents");
    for document in &args.documents {
        let instance = load_document(document)?;
        match registry.validate(&schema_text, &instance) {
            Ok(()) => println!("PASS {}", document.display()),
            Err(SchemaError::ValidationFailed { violations, .. }) => {
                all_passed = false;
                println!("FAIL {}", document.display());
                println!("{violations}");
            }
            Err(err) => return Err(err).context("schema could not be compiled"),
        }
    }

    Ok(all_passed)
}

/// Loads a document as a structural JSON value, converting from YAML
/// when the extension says so.
fn load_document(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read document {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .with_context(|| format!("invalid YAML in {}", path.display()))?;
            yaml_to_json(&yaml)
                .with_context(|| format!("cannot represent {} as JSON", path.display()))
        }
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display())),
    }
}

/// Converts a YAML value tree to the equivalent JSON value tree.
///
/// Documents are expected to use the JSON-compatible subset of YAML;
/// tags are ignored and non-scalar map keys are rejected.
fn yaml_to_json(yaml: &serde_yaml::Value) -> anyhow::Result<Value> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .with_context(|| format!("cannot represent float {f} in JSON"))
            } else {
                bail!("unsupported YAML number: {n:?}")
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            seq.iter().map(yaml_to_json).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
        serde_yaml::Value::Mapping(map) => {
            let mut out = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => bail!("unsupported YAML map key: {other:?}"),
                };
                out.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_yaml_document_converts_to_json_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "doc.yaml",
            "name: ops\ncount: 3\nenabled: true\nitems:\n  - a\n  - b\n",
        );
        let value = load_document(&path).unwrap();
        assert_eq!(
            value,
            json!({"name": "ops", "count": 3, "enabled": true, "items": ["a", "b"]})
        );
    }

    #[test]
    fn test_builtin_rule_pass_and_fail() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(&dir, "good.json", r#""hello""#);
        let bad = write_file(&dir, "bad.json", r#""""#);

        let args = ValidateArgs {
            schema: None,
            builtin: Some(BuiltinRule::NonEmptyString),
            documents: vec![good, bad],
        };
        let all_passed = run(&args).unwrap();
        assert!(!all_passed);
    }

    #[test]
    fn test_schema_file_validation() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_file(&dir, "s.json", r#"{"type":"object","required":["id"]}"#);
        let doc = write_file(&dir, "d.json", r#"{"id": 1}"#);

        let args = ValidateArgs {
            schema: Some(schema),
            builtin: None,
            documents: vec![doc],
        };
        assert!(run(&args).unwrap());
    }

    #[test]
    fn test_malformed_schema_is_an_error_not_a_fail() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_file(&dir, "s.json", "{broken");
        let doc = write_file(&dir, "d.json", "{}");

        let args = ValidateArgs {
            schema: Some(schema),
            builtin: None,
            documents: vec![doc],
        };
        assert!(run(&args).is_err());
    }

    #[test]
    fn test_missing_rule_selection_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc = write_file(&dir, "d.json", "{}");
        let args = ValidateArgs {
            schema: None,
            builtin: None,
            documents: vec![doc],
        };
        assert!(run(&args).is_err());
    }
}
