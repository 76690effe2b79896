//! Font argument model, normalization, and dynamic ingestion

use std::fmt;

use anyhow::{bail, Result};
use serde_json::Value;

/// Reserved mapping key that carries the subset directive.
pub const SUBSET_KEY: &str = "subset";

/// A font name as it appeared at the call site.
///
/// Identifier-shaped names and display strings follow different
/// normalization rules, and the asymmetry is load-bearing: identifiers
/// get title-cased, display strings are trusted to be cased already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontName {
    /// Symbol-like identifier, e.g. `droid_sans`. Title-cased on output.
    Ident(String),
    /// Already-cased display string, e.g. `"Droid Sans"`.
    Display(String),
}

impl FontName {
    /// Token for a plain (weightless) argument position.
    pub fn plain_token(&self) -> String {
        match self {
            FontName::Ident(raw) => title_case(raw).replace(' ', "+"),
            FontName::Display(raw) => raw.replace(' ', "+"),
        }
    }

    /// Token for a mapping-key position.
    ///
    /// Display keys use underscores as the separator convention here,
    /// so only underscores are rewritten; no title-casing.
    pub fn map_token(&self) -> String {
        match self {
            FontName::Ident(raw) => title_case(raw).replace(' ', "+"),
            FontName::Display(raw) => raw.replace('_', "+"),
        }
    }
}

/// One weight/style entry, e.g. `400` or `400italic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weight {
    Value(u64),
    Style(String),
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Value(value) => write!(f, "{value}"),
            Weight::Style(style) => f.write_str(style),
        }
    }
}

/// A mapping argument: ordered font entries plus an optional subset
/// directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontMap {
    pub entries: Vec<(FontName, Vec<Weight>)>,
    pub subset: Option<Vec<String>>,
}

impl FontMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: FontName, weights: Vec<Weight>) -> Self {
        self.entries.push((name, weights));
        self
    }

    pub fn with_subset(mut self, subset: Vec<String>) -> Self {
        self.subset = Some(subset);
        self
    }
}

/// One raw variadic argument to the link builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontArg {
    /// Plain identifier with no explicit weights.
    Name(FontName),
    /// Name-to-weights mapping, possibly carrying a subset directive.
    Map(FontMap),
}

impl FontArg {
    /// Parse one loosely-shaped JSON argument into the typed model.
    ///
    /// Strings become plain names, objects become mappings; everything
    /// else is rejected with a message naming the offending type. Entry
    /// order inside an object is preserved.
    pub fn from_value(value: &Value) -> Result<FontArg> {
        match value {
            Value::String(raw) => Ok(FontArg::Name(classify(raw))),
            Value::Object(map) => {
                let mut font_map = FontMap::new();
                for (key, spec) in map {
                    if key == SUBSET_KEY {
                        font_map.subset = Some(subset_from_value(spec)?);
                    } else {
                        font_map
                            .entries
                            .push((classify(key), weights_from_value(spec)?));
                    }
                }
                Ok(FontArg::Map(font_map))
            }
            other => bail!(
                "expected a String, Symbol, or a mapping, got {}",
                value_type_name(other)
            ),
        }
    }
}

/// Classify a raw string the way the source syntax would: an
/// identifier-shaped token behaves like a symbol (title-cased on
/// output), anything else is a display name.
pub fn classify(raw: &str) -> FontName {
    if is_ident(raw) {
        FontName::Ident(raw.to_string())
    } else {
        FontName::Display(raw.to_string())
    }
}

fn is_ident(raw: &str) -> bool {
    let mut bytes = raw.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    raw.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Title-case an identifier, treating underscores as word separators.
pub fn title_case(raw: &str) -> String {
    raw.replace('_', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Coerce a weight specification to an ordered list; scalars become
/// one-element lists, `null` means no weights.
fn weights_from_value(value: &Value) -> Result<Vec<Weight>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(weight_from_value).collect(),
        scalar => Ok(vec![weight_from_value(scalar)?]),
    }
}

fn weight_from_value(value: &Value) -> Result<Weight> {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => Ok(Weight::Value(v)),
            None => bail!(
                "expected an integer or String, got {}",
                value_type_name(value)
            ),
        },
        Value::String(raw) => Ok(Weight::Style(raw.clone())),
        other => bail!(
            "expected an integer or String, got {}",
            value_type_name(other)
        ),
    }
}

fn subset_from_value(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::String(raw) => Ok(vec![raw.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(raw) => Ok(raw.clone()),
                other => bail!(
                    "expected a subset name String, got {}",
                    value_type_name(other)
                ),
            })
            .collect(),
        other => bail!(
            "expected a subset name String, got {}",
            value_type_name(other)
        ),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.as_u64().is_some() => "an integer",
        Value::Number(n) if n.as_i64().is_some() => "a negative integer",
        Value::Number(_) => "a float",
        Value::String(_) => "a String",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
