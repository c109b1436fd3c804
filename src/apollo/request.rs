//! Building one upstream request from a tool descriptor and call arguments.
//!
//! Path parameters are substituted from the arguments, the remaining
//! arguments become either query pairs or a JSON body, null values are
//! omitted, and list values flatten into repeated `name[]` query entries.

use reqwest::Method;
use serde_json::Value;

use crate::registry::{JsonObject, ParamPlacement, ResponseShape, ToolDef};

use super::error::ApolloError;

/// Where the non-path arguments of a call end up.
#[derive(Debug, Clone, PartialEq)]
pub enum CallParams {
    /// Flattened query string pairs, arrays repeated as `name[]`.
    Query(Vec<(String, String)>),
    /// JSON request body with nulls removed.
    Body(JsonObject),
}

/// A fully resolved upstream call, derived per invocation and not persisted.
#[derive(Debug, Clone)]
pub struct CallSpec {
    pub method: Method,
    /// Path relative to the API base, with path parameters substituted.
    pub path: String,
    pub params: CallParams,
    pub shape: ResponseShape,
}

impl CallSpec {
    /// Derive the upstream call for `def` from the validated arguments.
    ///
    /// Fails only when a path parameter is absent, which validation rules out
    /// for every registered tool; the error is still reported as a value.
    pub fn build(def: &ToolDef, arguments: &JsonObject) -> Result<Self, ApolloError> {
        let placeholders = path_placeholders(def.path);
        let mut path = def.path.to_string();
        for name in &placeholders {
            let value = arguments
                .get(*name)
                .filter(|value| !value.is_null())
                .ok_or_else(|| {
                    ApolloError::Unexpected(format!("missing path parameter: {name}"))
                })?;
            path = path.replace(&format!("{{{name}}}"), &scalar_string(value));
        }

        let params = match def.placement {
            ParamPlacement::Query => {
                let mut pairs = Vec::new();
                for (name, value) in arguments {
                    if value.is_null() || placeholders.contains(&name.as_str()) {
                        continue;
                    }
                    let value = def.transform_value(name, value);
                    push_query(&mut pairs, def.wire_name(name), &value);
                }
                CallParams::Query(pairs)
            }
            ParamPlacement::JsonBody => {
                let mut body = JsonObject::new();
                for (name, value) in arguments {
                    if value.is_null() || placeholders.contains(&name.as_str()) {
                        continue;
                    }
                    let value = def.transform_value(name, value);
                    body.insert(def.wire_name(name).to_string(), value);
                }
                CallParams::Body(body)
            }
        };

        Ok(Self {
            method: def.method.clone(),
            path,
            params,
            shape: def.shape,
        })
    }
}

/// Collect `{placeholder}` names from a path template.
fn path_placeholders(path: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        names.push(&rest[start + 1..start + len]);
        rest = &rest[start + len + 1..];
    }
    names
}

fn push_query(pairs: &mut Vec<(String, String)>, wire_name: &str, value: &Value) {
    match value {
        Value::Array(items) => {
            let key = format!("{wire_name}[]");
            for item in items {
                if !item.is_null() {
                    pairs.push((key.clone(), scalar_string(item)));
                }
            }
        }
        other => pairs.push((wire_name.to_string(), scalar_string(other))),
    }
}

/// Render a JSON scalar as its query string form: strings unquoted, booleans
/// lowercased, numbers as digits.
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Remove a single leading `www.` label from a domain.
pub(crate) fn strip_www(domain: &str) -> String {
    domain
        .strip_prefix("www.")
        .unwrap_or(domain)
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::registry::Registry;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn registry() -> Registry {
        Registry::new().expect("registry builds")
    }

    #[test]
    fn substitutes_path_parameters() {
        let registry = registry();
        let def = registry.get("apollo_view_account").unwrap();
        let spec = CallSpec::build(def, &args(json!({ "account_id": "abc123" }))).unwrap();
        assert_eq!(spec.path, "/accounts/abc123");
        assert_eq!(spec.method, Method::GET);
        assert_eq!(spec.params, CallParams::Query(vec![]));
    }

    #[test]
    fn arrays_flatten_to_repeated_bracket_keys() {
        let registry = registry();
        let def = registry.get("apollo_update_account_stage_bulk").unwrap();
        let spec = CallSpec::build(
            def,
            &args(json!({
                "account_ids": ["a1", "a2"],
                "account_stage_id": "s1"
            })),
        )
        .unwrap();
        let CallParams::Query(mut pairs) = spec.params else {
            panic!("expected query params");
        };
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("account_ids[]".to_string(), "a1".to_string()),
                ("account_ids[]".to_string(), "a2".to_string()),
                ("account_stage_id".to_string(), "s1".to_string()),
            ]
        );
    }

    #[test]
    fn nulls_are_omitted_everywhere() {
        let registry = registry();
        let def = registry.get("apollo_create_account").unwrap();
        let spec = CallSpec::build(
            def,
            &args(json!({ "name": "Acme", "domain": null, "phone": null })),
        )
        .unwrap();
        let CallParams::Body(body) = spec.params else {
            panic!("expected json body");
        };
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("name"), Some(&json!("Acme")));
    }

    #[test]
    fn wire_renames_apply() {
        let registry = registry();
        let def = registry.get("apollo_create_call_record").unwrap();
        let spec = CallSpec::build(
            def,
            &args(json!({
                "logged": true,
                "user_ids": ["u1"],
                "contact_id": "c1",
                "duration": 42
            })),
        )
        .unwrap();
        let CallParams::Query(mut pairs) = spec.params else {
            panic!("expected query params");
        };
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("contact_id".to_string(), "c1".to_string()),
                ("duration".to_string(), "42".to_string()),
                ("logged".to_string(), "true".to_string()),
                ("user_id[]".to_string(), "u1".to_string()),
            ]
        );
    }

    #[test]
    fn bracketed_range_keys_apply() {
        let registry = registry();
        let def = registry.get("apollo_search_calls").unwrap();
        let spec = CallSpec::build(
            def,
            &args(json!({ "date_range_min": "2025-01-01", "duration_max": 600 })),
        )
        .unwrap();
        let CallParams::Query(mut pairs) = spec.params else {
            panic!("expected query params");
        };
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("date_range[min]".to_string(), "2025-01-01".to_string()),
                ("duration[max]".to_string(), "600".to_string()),
            ]
        );
    }

    #[test]
    fn enrichment_strips_leading_www() {
        let registry = registry();
        let def = registry.get("apollo_bulk_organisation_enrichment").unwrap();
        let spec = CallSpec::build(
            def,
            &args(json!({ "domains": ["www.acme.io", "foo.com"] })),
        )
        .unwrap();
        let CallParams::Query(pairs) = spec.params else {
            panic!("expected query params");
        };
        assert_eq!(
            pairs,
            vec![
                ("domains[]".to_string(), "acme.io".to_string()),
                ("domains[]".to_string(), "foo.com".to_string()),
            ]
        );
    }

    #[test]
    fn strip_www_only_removes_leading_label() {
        assert_eq!(strip_www("www.acme.io"), "acme.io");
        assert_eq!(strip_www("acme.io"), "acme.io");
        assert_eq!(strip_www("shop.www.acme.io"), "shop.www.acme.io");
    }

    #[test]
    fn path_placeholder_extraction() {
        assert_eq!(
            path_placeholders("/emailer_campaigns/{sequence_id}/add_contact_ids"),
            vec!["sequence_id"]
        );
        assert!(path_placeholders("/accounts/search").is_empty());
    }
}
