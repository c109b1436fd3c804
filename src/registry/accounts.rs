//! Account management tools.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_create_account",
            "Create a new account in Apollo by adding a company to your team's Apollo database.",
            Method::POST,
            "/accounts",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Human-readable name of the account (e.g., 'The Irish Copywriters')."
                    },
                    "domain": {
                        "type": "string",
                        "description": "Domain name of the account without 'www.' (e.g., 'apollo.io')."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "ID of the account owner within your Apollo team."
                    },
                    "account_stage_id": {
                        "type": "string",
                        "description": "Apollo ID for the account stage to assign the account."
                    },
                    "phone": {
                        "type": "string",
                        "description": "Primary phone number for the account, any format accepted."
                    },
                    "raw_address": {
                        "type": "string",
                        "description": "Corporate location like city, state, country."
                    }
                },
                "required": []
            }),
        )
        .json_body(),
        ToolDef::new(
            "apollo_update_account",
            "Update details of an existing account in Apollo using its account ID.",
            Method::PUT,
            "/accounts/{account_id}",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "Apollo ID of the account to update."
                    },
                    "name": {
                        "type": "string",
                        "description": "New human-readable name for the account."
                    },
                    "domain": {
                        "type": "string",
                        "description": "New domain name without 'www.'."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "New owner ID within your Apollo team."
                    },
                    "account_stage_id": {
                        "type": "string",
                        "description": "New account stage ID."
                    },
                    "raw_address": {
                        "type": "string",
                        "description": "Updated corporate location (city, state, country)."
                    },
                    "phone": {
                        "type": "string",
                        "description": "Updated primary phone number in any format."
                    }
                },
                "required": ["account_id"]
            }),
        )
        .json_body(),
        ToolDef::new(
            "apollo_search_accounts",
            "Search for accounts explicitly added to your team's Apollo database.",
            Method::POST,
            "/accounts/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "q_organization_name": {
                        "type": "string",
                        "description": "Keywords to match part of the account name."
                    },
                    "account_stage_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of account stage IDs to filter results."
                    },
                    "sort_by_field": {
                        "type": "string",
                        "enum": [
                            "account_last_activity_date",
                            "account_created_at",
                            "account_updated_at"
                        ],
                        "description": "Field to sort by."
                    },
                    "sort_ascending": {
                        "type": "boolean",
                        "description": "Sort order; true for ascending, false for descending (requires sort_by_field)."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number of results to retrieve."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page for pagination."
                    }
                },
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_view_account",
            "Retrieve full details of an existing account in Apollo by account ID.",
            Method::GET,
            "/accounts/{account_id}",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "account_id": {
                        "type": "string",
                        "description": "Apollo ID of the account to retrieve."
                    }
                },
                "required": ["account_id"]
            }),
        ),
        ToolDef::new(
            "apollo_update_account_stage_bulk",
            "Update the account stage for multiple accounts in Apollo.",
            Method::POST,
            "/accounts/bulk_update",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "account_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo account IDs to update."
                    },
                    "account_stage_id": {
                        "type": "string",
                        "description": "Apollo ID of the new account stage to assign."
                    }
                },
                "required": ["account_ids", "account_stage_id"]
            }),
        ),
        ToolDef::new(
            "apollo_update_account_owner_bulk",
            "Assign multiple accounts to a different owner in Apollo.",
            Method::POST,
            "/accounts/update_owners",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "account_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo account IDs to reassign."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "Apollo user ID of the new account owner."
                    }
                },
                "required": ["account_ids", "owner_id"]
            }),
        ),
        ToolDef::new(
            "apollo_list_account_stages",
            "Retrieve all account stage IDs available in your Apollo team.",
            Method::GET,
            "/account_stages",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
