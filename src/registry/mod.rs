//! Declarative tool catalog.
//!
//! Each Apollo endpoint is described once as data: name, description, input
//! schema, HTTP method and path template, parameter placement, wire-name
//! quirks, and the declared response shape. The dispatcher consumes these
//! descriptors through one generic adapter instead of a hand-written
//! function per tool.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use reqwest::Method;
use rmcp::model::Tool;
use serde_json::Value;

mod accounts;
mod calls;
mod contacts;
mod deals;
mod enrichment;
mod miscellaneous;
mod search;
mod sequences;
mod tasks;

/// JSON object map, the shape of tool arguments and input schemas.
pub type JsonObject = serde_json::Map<String, Value>;

/// Where a tool's non-path arguments are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPlacement {
    /// Query string pairs (the common case, including most POSTs).
    Query,
    /// JSON request body.
    JsonBody,
}

/// How a tool's successful upstream response body is interpreted.
///
/// This varies per endpoint with no upstream-declared schema; the table in
/// each registry module pins it down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Body is JSON; the dispatcher pretty-prints it.
    Json,
    /// Body is passed through verbatim (some endpoints return bare `true`).
    Text,
}

/// Immutable descriptor for one tool, defined at process start.
#[derive(Debug, Clone)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    /// Path relative to the API base; `{name}` segments are path parameters
    /// filled from the arguments.
    pub path: &'static str,
    pub placement: ParamPlacement,
    pub shape: ResponseShape,
    /// JSON-schema input object advertised through `tools/list`.
    pub schema: JsonObject,
    /// Argument names that must be present, non-null, and non-empty for
    /// arrays. Derived from the schema's `required` list.
    pub required: Vec<String>,
    /// Schema argument name to upstream wire name, where they differ.
    renames: &'static [(&'static str, &'static str)],
    /// Domain-valued arguments whose leading `www.` label is removed.
    strip_www: &'static [&'static str],
}

impl ToolDef {
    fn new(
        name: &'static str,
        description: &'static str,
        method: Method,
        path: &'static str,
        shape: ResponseShape,
        schema: Value,
    ) -> Self {
        let schema = schema.as_object().cloned().unwrap_or_default();
        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name,
            description,
            method,
            path,
            placement: ParamPlacement::Query,
            shape,
            schema,
            required,
            renames: &[],
            strip_www: &[],
        }
    }

    /// Send non-path arguments as a JSON body instead of query pairs.
    fn json_body(mut self) -> Self {
        self.placement = ParamPlacement::JsonBody;
        self
    }

    fn renames(mut self, renames: &'static [(&'static str, &'static str)]) -> Self {
        self.renames = renames;
        self
    }

    fn strip_www(mut self, arguments: &'static [&'static str]) -> Self {
        self.strip_www = arguments;
        self
    }

    /// The upstream parameter name for a schema argument name.
    pub fn wire_name<'a>(&self, argument: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| *from == argument)
            .map_or(argument, |(_, to)| *to)
    }

    /// Apply per-argument value transforms (currently `www.` stripping).
    pub fn transform_value(&self, argument: &str, value: &Value) -> Value {
        if !self.strip_www.contains(&argument) {
            return value.clone();
        }
        match value {
            Value::String(domain) => Value::String(crate::apollo::request::strip_www(domain)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(domain) => {
                            Value::String(crate::apollo::request::strip_www(domain))
                        }
                        other => other.clone(),
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    /// Names of required arguments that are absent, null, or empty arrays.
    pub fn missing_required(&self, arguments: &JsonObject) -> Vec<&str> {
        self.required
            .iter()
            .map(String::as_str)
            .filter(|name| match arguments.get(*name) {
                None | Some(Value::Null) => true,
                Some(Value::Array(items)) => items.is_empty(),
                Some(_) => false,
            })
            .collect()
    }
}

/// Static catalog mapping tool name to descriptor.
///
/// Built once at startup and shared immutably; registration enforces the
/// 1:1 name-to-descriptor invariant.
#[derive(Debug)]
pub struct Registry {
    defs: Vec<ToolDef>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> anyhow::Result<Self> {
        let defs: Vec<ToolDef> = [
            accounts::tools(),
            calls::tools(),
            contacts::tools(),
            deals::tools(),
            enrichment::tools(),
            miscellaneous::tools(),
            search::tools(),
            sequences::tools(),
            tasks::tools(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut index = HashMap::with_capacity(defs.len());
        for (position, def) in defs.iter().enumerate() {
            if index.insert(def.name, position).is_some() {
                bail!("duplicate tool registration: {}", def.name);
            }
        }

        Ok(Self { defs, index })
    }

    pub fn get(&self, name: &str) -> Option<&ToolDef> {
        self.index.get(name).map(|position| &self.defs[*position])
    }

    /// The catalog as MCP tool listings for `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        self.defs
            .iter()
            .map(|def| Tool::new(def.name, def.description, Arc::new(def.schema.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolDef> {
        self.defs.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn catalog_covers_every_apollo_tool() {
        let registry = Registry::new().unwrap();
        assert_eq!(registry.len(), 37);
    }

    #[test]
    fn every_required_argument_is_a_schema_property() {
        let registry = Registry::new().unwrap();
        for def in registry.iter() {
            let properties = def
                .schema
                .get("properties")
                .and_then(Value::as_object)
                .unwrap_or_else(|| panic!("{} schema missing properties", def.name));
            for name in &def.required {
                assert!(
                    properties.contains_key(name),
                    "{}: required argument {name} missing from schema",
                    def.name
                );
            }
        }
    }

    #[test]
    fn every_path_parameter_is_required() {
        let registry = Registry::new().unwrap();
        for def in registry.iter() {
            let mut rest = def.path;
            while let Some(start) = rest.find('{') {
                let end = rest[start..].find('}').expect("balanced placeholder");
                let name = &rest[start + 1..start + end];
                assert!(
                    def.required.iter().any(|required| required == name),
                    "{}: path parameter {name} must be required",
                    def.name
                );
                rest = &rest[start + end + 1..];
            }
        }
    }

    #[test]
    fn missing_required_flags_null_and_empty_arrays() {
        let registry = Registry::new().unwrap();
        let def = registry.get("apollo_update_account_stage_bulk").unwrap();

        let arguments = json!({ "account_ids": [], "account_stage_id": null })
            .as_object()
            .cloned()
            .unwrap();
        let mut missing = def.missing_required(&arguments);
        missing.sort_unstable();
        assert_eq!(missing, vec!["account_ids", "account_stage_id"]);

        let arguments = json!({ "account_ids": ["a"], "account_stage_id": "s" })
            .as_object()
            .cloned()
            .unwrap();
        assert!(def.missing_required(&arguments).is_empty());
    }

    #[test]
    fn false_boolean_counts_as_present() {
        let registry = Registry::new().unwrap();
        let def = registry.get("apollo_create_call_record").unwrap();
        let arguments = json!({ "logged": false, "user_ids": ["u1"], "contact_id": "c1" })
            .as_object()
            .cloned()
            .unwrap();
        assert!(def.missing_required(&arguments).is_empty());
    }

    #[test]
    fn tool_listing_carries_schemas() {
        let registry = Registry::new().unwrap();
        let tools = registry.tools();
        assert_eq!(tools.len(), registry.len());
        let view_account = tools
            .iter()
            .find(|tool| tool.name == "apollo_view_account")
            .unwrap();
        assert!(view_account.input_schema.contains_key("properties"));
    }
}
