//! Minimal CLI: sample JSON → (dart | shape)
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::codegen::{Codegen, DEFAULT_CLASS_SUFFIX};
use crate::error::Error;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate Dart model classes (fields, constructor, fromJson/toJson) from a sample JSON document
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit Dart model classes for the sample document
    Dart(DartOut),
    /// emit the inferred shape as a JSON debug view (leaves become Dart type names)
    Shape(ShapeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// the sample document: a literal path, a quoted glob pattern matching exactly one file, or '-' for stdin
    #[arg(long, short)]
    input: String,

    /// JSON Pointer to select a subnode of the document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,
}

#[derive(Args, Debug)]
struct DartOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// name hint for the top-level class
    #[arg(long, default_value = "Root")]
    root_name: String,

    /// suffix appended to every generated class name
    #[arg(long, default_value = DEFAULT_CLASS_SUFFIX)]
    suffix: String,

    /// output .dart file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShapeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// suffix used for nested-class type names in the view
    #[arg(long, default_value = DEFAULT_CLASS_SUFFIX)]
    suffix: String,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Read and parse the sample, then apply the optional JSON Pointer.
    fn load(&self) -> anyhow::Result<Value> {
        let source = if self.input == "-" {
            std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
        } else {
            let path = resolve_input_path(&self.input)?;
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read sample file {}", path.display()))?
        };

        let value: Value = from_str_with_path(&source)
            .map_err(anyhow::Error::msg)
            .context("failed to parse sample JSON")?;

        match self.json_pointer.as_deref() {
            None => Ok(value),
            Some(ptr) => value
                .pointer(ptr)
                .cloned()
                .ok_or_else(|| Error::PointerNotFound(ptr.to_string()).into()),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Dart(target) => {
                let sample = target.input_settings.load()?;
                let codegen = Codegen::with_suffix(&target.suffix);
                let dart_src = codegen.emit(&sample, &target.root_name)?;
                write_output(target.out.as_deref(), &dart_src)
            }
            Command::Shape(target) => {
                let sample = target.input_settings.load()?;
                let view = crate::shape::describe("root", &sample, &target.suffix);
                let view_src = serde_json::to_string_pretty(&view)?;
                write_output(target.out.as_deref(), &view_src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Deserialize with JSON-path context in error messages.
fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

fn write_output(out: Option<&std::path::Path>, content: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, content)
                .with_context(|| format!("failed to write {}", out.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

/// Resolve a literal path or a glob pattern. A glob must match exactly one
/// file: schema merging across samples is out of scope, so one run takes one
/// document.
fn resolve_input_path(pattern: &str) -> anyhow::Result<PathBuf> {
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    if !has_glob_chars(pattern) {
        return Ok(PathBuf::from(pattern));
    }

    let mut matches = Vec::<PathBuf>::new();
    for entry in glob::glob(pattern)? {
        matches.push(entry?);
    }
    match matches.len() {
        0 => anyhow::bail!("glob pattern matched no files: {pattern}"),
        1 => Ok(matches.remove(0)),
        n => anyhow::bail!("glob pattern matched {n} files but one sample is expected: {pattern}"),
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_pass_through() {
        let p = resolve_input_path("demos/medications.json").unwrap();
        assert_eq!(p, PathBuf::from("demos/medications.json"));
    }

    #[test]
    fn parse_errors_carry_the_json_path() {
        let err = from_str_with_path::<Value>(r#"{"a": {"b": [1, }]}}"#).unwrap_err();
        assert!(err.contains("at JSON path"), "got: {err}");
    }
}
