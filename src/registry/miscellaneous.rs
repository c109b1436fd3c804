//! Team metadata tools: usage stats, users, email accounts, lists, fields.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_view_api_usage_stats",
            "Retrieve your team's Apollo API usage statistics and rate limits.",
            Method::POST,
            "/usage_stats/api_usage_stats",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_list_users",
            "Retrieve the list of all users (teammates) in your Apollo account.",
            Method::GET,
            "/users/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "integer",
                        "description": "Page number of results to retrieve."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page."
                    }
                },
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_list_email_accounts",
            "Retrieve information about linked email inboxes used by teammates in your Apollo account.",
            Method::GET,
            "/email_accounts",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_get_all_lists_and_tags",
            "Retrieve all lists and tags created in your Apollo account.",
            Method::GET,
            "/labels",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_list_all_custom_fields",
            "Retrieve all custom fields created in your Apollo account.",
            Method::GET,
            "/typed_custom_fields",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
