//! Call record tools.
//!
//! Apollo's phone call endpoints take the caller list under the singular
//! `user_id[]` wire key.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_create_call_record",
            "Create a call record in Apollo to log calls made via outside systems.",
            Method::POST,
            "/phone_calls",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "logged": {
                        "type": "boolean",
                        "description": "True to log the call in Apollo."
                    },
                    "user_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Apollo user IDs of the caller(s)."
                    },
                    "contact_id": {
                        "type": "string",
                        "description": "Apollo contact ID of the called person."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "Apollo account ID to associate with the call."
                    },
                    "to_number": {
                        "type": "string",
                        "description": "Phone number dialed."
                    },
                    "from_number": {
                        "type": "string",
                        "description": "Phone number that placed the call."
                    },
                    "status": {
                        "type": "string",
                        "description": "Call status ('queued', 'ringing', 'in-progress', 'completed', 'no_answer', 'failed', 'busy')."
                    },
                    "start_time": {
                        "type": "string",
                        "description": "ISO 8601 formatted start time (GMT or with offset)."
                    },
                    "end_time": {
                        "type": "string",
                        "description": "ISO 8601 formatted end time (GMT or with offset)."
                    },
                    "duration": {
                        "type": "integer",
                        "description": "Duration of the call in seconds."
                    },
                    "phone_call_purpose_id": {
                        "type": "string",
                        "description": "Call purpose ID in your Apollo account."
                    },
                    "phone_call_outcome_id": {
                        "type": "string",
                        "description": "Call outcome ID in your Apollo account."
                    },
                    "note": {
                        "type": "string",
                        "description": "Additional note for the call record."
                    }
                },
                "required": ["logged", "user_ids", "contact_id"]
            }),
        )
        .renames(&[("user_ids", "user_id")]),
        ToolDef::new(
            "apollo_search_calls",
            "Search for calls made or received by your team in Apollo.",
            Method::GET,
            "/phone_calls/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "date_range_max": {
                        "type": "string",
                        "description": "Upper bound date (YYYY-MM-DD) for search."
                    },
                    "date_range_min": {
                        "type": "string",
                        "description": "Lower bound date (YYYY-MM-DD) for search."
                    },
                    "duration_max": {
                        "type": "integer",
                        "description": "Max call duration in seconds."
                    },
                    "duration_min": {
                        "type": "integer",
                        "description": "Min call duration in seconds."
                    },
                    "inbound": {
                        "type": "string",
                        "enum": ["incoming", "outgoing"],
                        "description": "Filter by call direction."
                    },
                    "user_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo user IDs involved in calls."
                    },
                    "contact_label_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of contact IDs involved in calls."
                    },
                    "phone_call_purpose_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter by call purpose IDs."
                    },
                    "phone_call_outcome_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter by call outcome IDs."
                    },
                    "q_keywords": {
                        "type": "string",
                        "description": "Keywords to narrow call search."
                    },
                    "page": {
                        "type": ["integer", "string"],
                        "description": "Page number for pagination."
                    },
                    "per_page": {
                        "type": ["integer", "string"],
                        "description": "Number of results per page."
                    }
                },
                "required": []
            }),
        )
        .renames(&[
            ("date_range_max", "date_range[max]"),
            ("date_range_min", "date_range[min]"),
            ("duration_max", "duration[max]"),
            ("duration_min", "duration[min]"),
        ]),
        ToolDef::new(
            "apollo_update_call",
            "Update an existing call record in Apollo by call ID.",
            Method::PUT,
            "/phone_calls/{call_id}",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "call_id": {
                        "type": "string",
                        "description": "Apollo ID of the call record to update."
                    },
                    "logged": {
                        "type": "boolean",
                        "description": "True to create an individual record for the call."
                    },
                    "user_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Apollo user IDs of the caller(s)."
                    },
                    "contact_id": {
                        "type": "string",
                        "description": "Apollo contact ID of the called person."
                    },
                    "account_id": {
                        "type": "string",
                        "description": "Apollo account ID associated with the call."
                    },
                    "to_number": {
                        "type": "string",
                        "description": "Phone number dialed."
                    },
                    "from_number": {
                        "type": "string",
                        "description": "Phone number that placed the call."
                    },
                    "status": {
                        "type": "string",
                        "description": "Call status ('queued', 'ringing', 'in-progress', 'completed', 'no_answer', 'failed', 'busy')."
                    },
                    "start_time": {
                        "type": "string",
                        "description": "ISO 8601 formatted start time (GMT or with offset)."
                    },
                    "end_time": {
                        "type": "string",
                        "description": "ISO 8601 formatted end time (GMT or with offset)."
                    },
                    "duration": {
                        "type": "integer",
                        "description": "Duration of the call in seconds."
                    },
                    "phone_call_purpose_id": {
                        "type": "string",
                        "description": "Call purpose ID in your Apollo account."
                    },
                    "phone_call_outcome_id": {
                        "type": "string",
                        "description": "Call outcome ID in your Apollo account."
                    },
                    "note": {
                        "type": "string",
                        "description": "Additional note for the call record."
                    }
                },
                "required": ["call_id"]
            }),
        )
        .renames(&[("user_ids", "user_id")]),
    ]
}
