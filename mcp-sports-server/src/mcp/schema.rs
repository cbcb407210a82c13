//! Tool parameter schemas and argument validation
//!
//! A [`ParameterSchema`] serializes to the JSON Schema document advertised in
//! `tools/list`. That same document is compiled with `jsonschema` into an
//! [`ArgumentValidator`] which checks `tools/call` arguments, so discovery and
//! enforcement cannot drift apart.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use jsonschema::{Draft, Validator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaViolation;

/// Root path used in violation messages
const ARGUMENTS: &str = "arguments";

/// Name of the calendar-date string format
const DATE_FORMAT: &str = "date";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterSchema {
    Object(ObjectSchema),
    Array(ArraySchema),
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, ParameterSchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "additionalProperties", default)]
    pub additional_properties: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Box<ParameterSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Object that rejects undeclared properties
pub fn object() -> ObjectSchema {
    ObjectSchema::default()
}

pub fn array(items: impl Into<ParameterSchema>) -> ArraySchema {
    ArraySchema {
        description: None,
        items: Box::new(items.into()),
    }
}

pub fn string() -> StringSchema {
    StringSchema::default()
}

pub fn number() -> NumberSchema {
    NumberSchema::default()
}

pub fn boolean() -> BooleanSchema {
    BooleanSchema::default()
}

impl ObjectSchema {
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Declare an optional property
    pub fn property(mut self, name: &str, schema: impl Into<ParameterSchema>) -> Self {
        self.properties.insert(name.to_string(), schema.into());
        self
    }

    /// Declare a property the caller must supply
    pub fn required_property(mut self, name: &str, schema: impl Into<ParameterSchema>) -> Self {
        self.required.retain(|existing| existing != name);
        self.required.push(name.to_string());
        self.property(name, schema)
    }

    /// Mark an already declared property as required
    pub fn require(mut self, name: &str) -> Self {
        if !self.required.iter().any(|existing| existing == name) {
            self.required.push(name.to_string());
        }
        self
    }

    /// Merge another object's properties into this one; later declarations win
    pub fn extend(mut self, other: ObjectSchema) -> Self {
        self.properties.extend(other.properties);
        for name in other.required {
            self = self.require(&name);
        }
        self
    }
}

impl ArraySchema {
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl StringSchema {
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Restrict the value to a fixed set
    pub fn one_of(mut self, values: &[&str]) -> Self {
        self.allowed = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Calendar date, `YYYY-MM-DD` (RFC 3339 timestamps are also accepted)
    pub fn date(mut self) -> Self {
        self.format = Some(DATE_FORMAT.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default = Some(value.to_string());
        self
    }

    fn is_date(&self) -> bool {
        self.format.as_deref() == Some(DATE_FORMAT)
    }
}

impl NumberSchema {
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn min(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn max(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn default_value(mut self, value: i64) -> Self {
        self.default = Some(value);
        self
    }
}

impl BooleanSchema {
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl ParameterSchema {
    /// JSON Schema form, as advertised in `tools/list`
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Compile the advertised document into a validator
    pub fn compile(&self) -> Result<ArgumentValidator, String> {
        let root = compile_document(&self.to_json())?;

        let mut properties = BTreeMap::new();
        if let ParameterSchema::Object(object) = self {
            for (name, schema) in &object.properties {
                properties.insert(name.clone(), compile_document(&schema.to_json())?);
            }
        }

        Ok(ArgumentValidator { root, properties })
    }

    /// Rewrite RFC 3339 timestamps to `YYYY-MM-DD` in properties declared
    /// with the date format, including arrays of dates. Other strings are
    /// left alone.
    pub fn normalize_dates(&self, arguments: &mut Map<String, Value>) {
        let ParameterSchema::Object(object) = self else {
            return;
        };

        for (name, value) in arguments.iter_mut() {
            match (object.properties.get(name), value) {
                (Some(ParameterSchema::String(schema)), Value::String(text)) if schema.is_date() => {
                    normalize_date(text);
                }
                (Some(ParameterSchema::Array(schema)), Value::Array(items)) => {
                    if let ParameterSchema::String(item_schema) = schema.items.as_ref() {
                        if item_schema.is_date() {
                            for item in items {
                                if let Value::String(text) = item {
                                    normalize_date(text);
                                }
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

/// Compiled argument contract of one tool.
///
/// Besides the whole document, each top-level property is compiled on its
/// own so a failure can be reported against the property that caused it.
pub struct ArgumentValidator {
    root: Validator,
    properties: BTreeMap<String, Validator>,
}

impl ArgumentValidator {
    /// Validate tool-call arguments.
    ///
    /// No coercion happens: `"5"` does not satisfy a number property. A
    /// `null` member or array item counts as not supplied.
    pub fn validate(&self, arguments: &Value) -> Result<(), SchemaViolation> {
        let arguments = without_nulls(arguments);

        let Some(first) = self.root.iter_errors(&arguments).next().map(|e| e.to_string()) else {
            return Ok(());
        };

        if let Value::Object(members) = &arguments {
            for (name, value) in members {
                let Some(validator) = self.properties.get(name) else {
                    continue;
                };
                if let Some(error) = validator.iter_errors(value).next() {
                    return Err(SchemaViolation::new(
                        format!("{}.{}", ARGUMENTS, name),
                        error.to_string(),
                    ));
                }
            }
        }

        // object-level rule: required, unknown property or wrong root type
        Err(SchemaViolation::new(ARGUMENTS, first))
    }
}

fn compile_document(document: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft7)
        .with_format(DATE_FORMAT, is_date)
        .should_validate_formats(true)
        .build(document)
        .map_err(|err| format!("invalid schema: {}", err))
}

/// Copy of `value` with null object members and null array items removed
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(name, member)| (name.clone(), without_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(without_nulls)
                .collect(),
        ),
        other => other.clone(),
    }
}

macro_rules! into_schema {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParameterSchema {
                fn from(schema: $ty) -> Self {
                    ParameterSchema::$variant(schema)
                }
            }
        )*
    };
}

into_schema! {
    ObjectSchema => Object,
    ArraySchema => Array,
    StringSchema => String,
    NumberSchema => Number,
    BooleanSchema => Boolean,
}

/// `YYYY-MM-DD`, or an RFC 3339 timestamp
fn is_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(text).is_ok()
}

fn normalize_date(text: &mut String) {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        *text = timestamp.date_naive().format("%Y-%m-%d").to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaders_schema() -> ParameterSchema {
        object()
            .required_property("season", number().describe("Season year"))
            .required_property(
                "stat_type",
                string().one_of(&["pts", "reb", "ast"]).describe("Stat category"),
            )
            .property("per_page", number().min(1).max(100).default_value(25))
            .property("team_ids", array(number()))
            .property("date", string().date())
            .property("dates", array(string().date()))
            .property("search", string())
            .property("postseason", boolean())
            .into()
    }

    fn violation(arguments: Value) -> SchemaViolation {
        leaders_schema()
            .compile()
            .unwrap()
            .validate(&arguments)
            .expect_err("expected a schema violation")
    }

    #[test]
    fn test_schemas_compile() {
        assert!(leaders_schema().compile().is_ok());
        assert!(ParameterSchema::from(object()).compile().is_ok());
    }

    #[test]
    fn test_valid_arguments_pass() {
        let validator = leaders_schema().compile().unwrap();
        let args = json!({
            "season": 2024,
            "stat_type": "pts",
            "per_page": 100,
            "team_ids": [1, 2, null],
            "date": "2024-01-15",
            "postseason": false,
            "search": null
        });
        assert!(validator.validate(&args).is_ok());
    }

    #[test]
    fn test_missing_required_property() {
        let err = violation(json!({"season": 2024}));
        assert_eq!(err.path, "arguments");
        assert!(err.reason.contains("stat_type"), "{}", err.reason);

        // null does not satisfy a required property
        let err = violation(json!({"season": null, "stat_type": "pts"}));
        assert_eq!(err.path, "arguments");
        assert!(err.reason.contains("season"), "{}", err.reason);
    }

    #[test]
    fn test_unknown_property_rejected() {
        let err = violation(json!({"season": 2024, "stat_type": "pts", "limit": 5}));
        assert_eq!(err.path, "arguments");
        assert!(err.reason.contains("limit"), "{}", err.reason);
    }

    #[test]
    fn test_enum_membership() {
        let err = violation(json!({"season": 2024, "stat_type": "fg3"}));
        assert_eq!(err.path, "arguments.stat_type");
        assert!(err.reason.contains("fg3"), "{}", err.reason);
    }

    #[test]
    fn test_numeric_bounds() {
        let low = violation(json!({"season": 2024, "stat_type": "pts", "per_page": 0}));
        assert_eq!(low.path, "arguments.per_page");
        assert!(low.reason.contains("minimum"), "{}", low.reason);

        let high = violation(json!({"season": 2024, "stat_type": "pts", "per_page": 101}));
        assert_eq!(high.path, "arguments.per_page");
        assert!(high.reason.contains("maximum"), "{}", high.reason);
    }

    #[test]
    fn test_no_type_coercion() {
        let err = violation(json!({"season": "2024", "stat_type": "pts"}));
        assert_eq!(err.path, "arguments.season");
        assert!(err.reason.contains("number"), "{}", err.reason);

        let err = violation(json!({"season": 2024, "stat_type": "pts", "team_ids": [1, "2"]}));
        assert_eq!(err.path, "arguments.team_ids");
    }

    #[test]
    fn test_date_format() {
        let schema = leaders_schema();
        let validator = schema.compile().unwrap();

        let mut args = json!({"season": 2024, "stat_type": "pts", "date": "2024-01-15T00:00:00Z"});
        schema.normalize_dates(args.as_object_mut().unwrap());
        assert!(validator.validate(&args).is_ok());

        let err = violation(json!({"season": 2024, "stat_type": "pts", "date": "yesterday"}));
        assert_eq!(err.path, "arguments.date");
    }

    #[test]
    fn test_normalize_dates_only_touches_date_properties() {
        let schema = leaders_schema();
        let mut args = json!({
            "date": "2024-01-15T18:30:00Z",
            "dates": ["2024-02-01T00:00:00+00:00", "2024-02-02", null],
            "search": "2024-01-15T18:30:00Z",
            "stat_type": "pts"
        });
        schema.normalize_dates(args.as_object_mut().unwrap());

        assert_eq!(
            args,
            json!({
                "date": "2024-01-15",
                "dates": ["2024-02-01", "2024-02-02", null],
                "search": "2024-01-15T18:30:00Z",
                "stat_type": "pts"
            })
        );
    }

    #[test]
    fn test_arguments_must_be_object() {
        let err = violation(json!([1, 2]));
        assert_eq!(err.path, "arguments");
        assert!(err.reason.contains("object"), "{}", err.reason);
    }

    #[test]
    fn test_json_schema_shape() {
        let schema: ParameterSchema = object()
            .required_property("id", number().describe("Team ID"))
            .property("division", string().one_of(&["Atlantic", "Central"]))
            .into();

        assert_eq!(
            schema.to_json(),
            json!({
                "type": "object",
                "properties": {
                    "division": {"type": "string", "enum": ["Atlantic", "Central"]},
                    "id": {"type": "number", "description": "Team ID"}
                },
                "required": ["id"],
                "additionalProperties": false
            })
        );
    }

    #[test]
    fn test_extend_merges_required() {
        let paging = object().property("cursor", number());
        let schema = object()
            .required_property("season", number())
            .extend(paging.require("cursor"));
        assert_eq!(schema.required, vec!["season".to_string(), "cursor".to_string()]);
        assert!(schema.properties.contains_key("cursor"));
    }
}
