//! Contact management tools.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_create_contact",
            "Create a new contact explicitly added to your team's Apollo database.",
            Method::POST,
            "/contacts",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "first_name": {
                        "type": "string",
                        "description": "Contact's first name (e.g., 'Tim')."
                    },
                    "last_name": {
                        "type": "string",
                        "description": "Contact's last name (e.g., 'Zheng')."
                    },
                    "organization_name": {
                        "type": "string",
                        "description": "Contact's current employer name (e.g., 'apollo')."
                    },
                    "title": {
                        "type": "string",
                        "description": "Contact's current job title (e.g., 'senior research analyst')."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "Apollo account ID to assign the contact."
                    },
                    "email": {
                        "type": "string",
                        "description": "Contact's email address."
                    },
                    "website_url": {
                        "type": "string",
                        "description": "Corporate website URL (full URL, no social links)."
                    },
                    "label_names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Lists to add the contact to; auto-creates new lists if needed."
                    },
                    "contact_stage_id": {
                        "type": "string",
                        "description": "Apollo ID for the contact stage to assign."
                    },
                    "present_raw_address": {
                        "type": "string",
                        "description": "Contact's personal location (city, state, country)."
                    },
                    "direct_phone": {
                        "type": "string",
                        "description": "Primary phone number (any format)."
                    },
                    "corporate_phone": {
                        "type": "string",
                        "description": "Work/office phone number."
                    },
                    "mobile_phone": {
                        "type": "string",
                        "description": "Mobile phone number."
                    },
                    "home_phone": {
                        "type": "string",
                        "description": "Home phone number."
                    },
                    "other_phone": {
                        "type": "string",
                        "description": "Alternative or unknown type phone number."
                    }
                },
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_update_contact",
            "Update details of an existing contact in Apollo by contact ID.",
            Method::PUT,
            "/contacts/{contact_id}",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "contact_id": {
                        "type": "string",
                        "description": "Apollo ID of the contact to update."
                    },
                    "first_name": {
                        "type": "string",
                        "description": "Updated first name."
                    },
                    "last_name": {
                        "type": "string",
                        "description": "Updated last name."
                    },
                    "organization_name": {
                        "type": "string",
                        "description": "Updated employer name."
                    },
                    "title": {
                        "type": "string",
                        "description": "Updated job title."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "Updated Apollo account ID."
                    },
                    "email": {
                        "type": "string",
                        "description": "Updated email address."
                    },
                    "website_url": {
                        "type": "string",
                        "description": "Updated corporate website URL (full URL)."
                    },
                    "label_names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Lists the contact belongs to (replaces existing lists)."
                    },
                    "contact_stage_id": {
                        "type": "string",
                        "description": "Updated contact stage ID."
                    },
                    "present_raw_address": {
                        "type": "string",
                        "description": "Updated personal location (city, state, country)."
                    },
                    "direct_phone": {
                        "type": "string",
                        "description": "Updated primary phone number."
                    },
                    "corporate_phone": {
                        "type": "string",
                        "description": "Updated work/office phone number."
                    },
                    "mobile_phone": {
                        "type": "string",
                        "description": "Updated mobile phone number."
                    },
                    "home_phone": {
                        "type": "string",
                        "description": "Updated home phone number."
                    },
                    "other_phone": {
                        "type": "string",
                        "description": "Updated alternative or unknown phone number."
                    }
                },
                "required": ["contact_id"]
            }),
        ),
        ToolDef::new(
            "apollo_search_contacts",
            "Search for contacts explicitly added to your team's Apollo database.",
            Method::POST,
            "/contacts/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "q_keywords": {
                        "type": "string",
                        "description": "Keywords to search contact names, titles, companies, or emails."
                    },
                    "contact_stage_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter by one or more contact stage IDs."
                    },
                    "sort_by_field": {
                        "type": "string",
                        "enum": [
                            "contact_last_activity_date",
                            "contact_email_last_opened_at",
                            "contact_email_last_clicked_at",
                            "contact_created_at",
                            "contact_updated_at"
                        ],
                        "description": "Field to sort results by."
                    },
                    "sort_ascending": {
                        "type": "boolean",
                        "description": "True for ascending order (requires sort_by_field)."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number of results to retrieve."
                    }
                },
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_update_contact_stages",
            "Update the contact stage for multiple contacts in Apollo.",
            Method::POST,
            "/contacts/update_stages",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "contact_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo contact IDs to update."
                    },
                    "contact_stage_id": {
                        "type": "string",
                        "description": "Apollo ID of the contact stage to assign."
                    }
                },
                "required": ["contact_ids", "contact_stage_id"]
            }),
        ),
        ToolDef::new(
            "apollo_update_contact_owners",
            "Assign multiple contacts to a different owner in Apollo.",
            Method::POST,
            "/contacts/update_owners",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "contact_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo contact IDs to update."
                    },
                    "owner_id": {
                        "type": "string",
                        "description": "Apollo user ID to assign as the new owner."
                    }
                },
                "required": ["contact_ids", "owner_id"]
            }),
        ),
        ToolDef::new(
            "apollo_list_contact_stages",
            "Retrieve all available contact stage IDs in your team's Apollo account.",
            Method::GET,
            "/contact_stages",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        ),
    ]
}
