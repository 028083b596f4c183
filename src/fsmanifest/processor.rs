//! # JSON / YAML Processor
//!
//! Thin wrapper over `serde_json` and `serde_yaml` that fixes the output shape:
//! two-space indentation and lexicographically sorted keys at every level.
//!
//! JSON output is sorted by converting through [`serde_json::Value`] first. Its
//! map type is a `BTreeMap` (we do not enable `preserve_order`), so struct field
//! order and `HashMap` iteration order never leak into the output.
//!
//! YAML output goes through [`serde_yaml::Value`] instead, which keeps
//! non-string keys and non-finite floats intact. Its `Mapping` preserves
//! insertion order, so every mapping is re-sorted by key before writing.

use crate::error::{AppError, ParseError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value as YamlValue};
use std::cmp::Ordering;
use std::io::Write;

const DEFAULT_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonProcessor {
    indent: usize,
}

impl Default for JsonProcessor {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl JsonProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Serializes `data` as indented JSON with sorted keys.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if `data` cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn to_json<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;

        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses JSON text.
    ///
    /// # Errors
    /// Returns `ParseError::Json` on malformed input or a shape mismatch with `T`.
    pub fn from_json<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(|e| ParseError::Json(e).into())
    }

    /// Serializes `data` as block-style YAML with sorted keys.
    ///
    /// # Errors
    /// Returns `AppError::YamlSerialization` if `data` fails to serialize.
    pub fn to_yaml<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let value = serde_yaml::to_value(data).map_err(AppError::YamlSerialization)?;
        serde_yaml::to_string(&sort_yaml(value)).map_err(AppError::YamlSerialization)
    }

    /// Parses YAML text. Tags are treated as data; nothing in the input is executed.
    ///
    /// # Errors
    /// Returns `ParseError::Yaml` on malformed input or a shape mismatch with `T`.
    pub fn from_yaml<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_yaml::from_str(text).map_err(|e| ParseError::Yaml(e).into())
    }

    /// Writes the JSON rendering of `data` to stdout.
    pub fn pretty_print<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_pretty(&mut stdout.lock(), data)
    }

    pub fn write_pretty<W: Write, T: Serialize + ?Sized>(
        &self,
        writer: &mut W,
        data: &T,
    ) -> Result<()> {
        let json = self.to_json(data)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

fn sort_yaml(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Mapping(mapping) => {
            let mut entries: Vec<(YamlValue, YamlValue)> = mapping
                .into_iter()
                .map(|(k, v)| (sort_yaml(k), sort_yaml(v)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            YamlValue::Mapping(entries.into_iter().collect::<Mapping>())
        }
        YamlValue::Sequence(items) => YamlValue::Sequence(items.into_iter().map(sort_yaml).collect()),
        YamlValue::Tagged(mut tagged) => {
            tagged.value = sort_yaml(tagged.value);
            YamlValue::Tagged(tagged)
        }
        other => other,
    }
}

/// Keys of the same kind compare by content; mixed kinds group by kind first.
fn compare_keys(a: &YamlValue, b: &YamlValue) -> Ordering {
    match (a, b) {
        (YamlValue::String(x), YamlValue::String(y)) => x.cmp(y),
        (YamlValue::Bool(x), YamlValue::Bool(y)) => x.cmp(y),
        (YamlValue::Number(x), YamlValue::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                let (x, y) = (x.as_f64().unwrap_or(f64::NAN), y.as_f64().unwrap_or(f64::NAN));
                x.total_cmp(&y)
            }
        },
        _ => kind_rank(a).cmp(&kind_rank(b)).then_with(|| {
            let text = |v: &YamlValue| serde_yaml::to_string(v).unwrap_or_default();
            text(a).cmp(&text(b))
        }),
    }
}

fn kind_rank(value: &YamlValue) -> u8 {
    match value {
        YamlValue::Null => 0,
        YamlValue::Bool(_) => 1,
        YamlValue::Number(_) => 2,
        YamlValue::String(_) => 3,
        YamlValue::Sequence(_) => 4,
        YamlValue::Mapping(_) => 5,
        YamlValue::Tagged(_) => 6,
    }
}
