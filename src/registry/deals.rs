//! Deal (opportunity) tools.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_create_deal",
            "Create a new deal for an Apollo account.",
            Method::POST,
            "/opportunities",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Human-readable name for the deal."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "ID of the deal owner in your Apollo account."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "ID of the target account (company) for the deal."
                    },
                    "amount": {
                        "type": "string",
                        "description": "Monetary value of the deal (no commas or currency symbols)."
                    },
                    "opportunity_stage_id": {
                        "type": "string",
                        "description": "ID of the deal stage."
                    },
                    "closed_date": {
                        "type": "string",
                        "description": "Estimated close date (YYYY-MM-DD)."
                    }
                },
                "required": ["name"]
            }),
        ),
        ToolDef::new(
            "apollo_list_all_deals",
            "Retrieve all deals created for your team's Apollo account with optional sorting and pagination.",
            Method::GET,
            "/opportunities/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "sort_by_field": {
                        "type": "string",
                        "enum": ["amount", "is_closed", "is_won"],
                        "description": "Sort deals by amount, is_closed, or is_won."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number to retrieve."
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
            "apollo_view_deal",
            "Retrieve detailed information about a specific deal in your team's Apollo account.",
            Method::GET,
            "/opportunities/{opportunity_id}",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "opportunity_id": {
                        "type": "string",
                        "description": "Unique ID of the deal to retrieve."
                    }
                },
                "required": ["opportunity_id"]
            }),
        ),
        ToolDef::new(
            "apollo_update_deal",
            "Update details of an existing deal in your team's Apollo account.",
            Method::PATCH,
            "/opportunities/{opportunity_id}",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "opportunity_id": {
                        "type": "string",
                        "description": "Unique ID of the deal to update."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "New owner ID for the deal."
                    },
                    "name": {
                        "type": "string",
                        "description": "Updated human-readable deal name."
                    },
                    "amount": {
                        "type": "string",
                        "description": "Updated monetary value (no commas or currency symbols)."
                    },
                    "opportunity_stage_id": {
                        "type": "string",
                        "description": "New deal stage ID."
                    },
                    "closed_date": {
                        "type": "string",
                        "description": "Updated estimated close date (YYYY-MM-DD)."
                    },
                    "is_closed": {
                        "type": "boolean",
                        "description": "Mark deal as closed if True."
                    },
                    "is_won": {
                        "type": "boolean",
                        "description": "Mark deal as won if True."
                    },
                    "source": {
                        "type": "string",
                        "description": "Update the deal's source."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "Update associated company ID."
                    }
                },
                "required": ["opportunity_id"]
            }),
        ),
        ToolDef::new(
            "apollo_list_deal_stages",
            "Retrieve all deal stages available in your team's Apollo account.",
            Method::GET,
            "/opportunity_stages",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
