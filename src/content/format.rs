//! Data formats a content document may be stored in

use serde_json::Value;
use std::path::Path;

/// Supported document formats, keyed by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
    Toml,
}

impl ContentFormat {
    /// Extensions probed, in order, when an identifier has none
    pub const PROBE_EXTENSIONS: [&'static str; 4] = ["json", "yaml", "yml", "toml"];

    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        Self::from_extension(ext)
    }

    /// Map an extension (without the dot) to a format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(ContentFormat::Json),
            "yaml" | "yml" => Some(ContentFormat::Yaml),
            "toml" => Some(ContentFormat::Toml),
            _ => None,
        }
    }

    /// Parse raw text into a format-neutral value.
    ///
    /// Only syntax is checked here; the error string is the parser's message.
    pub fn parse(self, raw: &str) -> Result<Value, String> {
        match self {
            ContentFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
            ContentFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
            ContentFormat::Toml => toml::from_str::<toml::Value>(raw)
                .map(toml_to_json)
                .map_err(|e| e.to_string()),
        }
    }

    /// Serialize a value back into this format (used when scaffolding documents)
    pub fn serialize(self, value: &Value) -> Result<String, String> {
        match self {
            ContentFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
            ContentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            ContentFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ContentFormat::Json => "json",
            ContentFormat::Yaml => "yaml",
            ContentFormat::Toml => "toml",
        }
    }
}

/// TOML dates and times become their RFC 3339 text, as JSON and YAML store them
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
