//! Sequence (emailer campaign) tools.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_search_sequences",
            "Search for sequences created in your team's Apollo account.",
            Method::POST,
            "/emailer_campaigns/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "q_name": {
                        "type": "string",
                        "description": "Keywords to filter sequence names (partial matches only)."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number to retrieve for paginated results."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page to improve performance."
                    }
                },
                "required": []
            }),
        ),
        ToolDef::new(
            "apollo_add_contacts_to_sequence",
            "Add contacts to an existing sequence in your Apollo account.",
            Method::POST,
            "/emailer_campaigns/{sequence_id}/add_contact_ids",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "sequence_id": {
                        "type": "string",
                        "description": "Apollo ID of the sequence to add contacts to."
                    },
                    "emailer_campaign_id": {
                        "type": "string",
                        "description": "Same as sequence_id."
                    },
                    "contact_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo contact IDs to add."
                    },
                    "send_email_from_email_account_id": {
                        "type": "string",
                        "description": "Apollo email account ID used to send emails."
                    },
                    "sequence_no_email": {
                        "type": "boolean",
                        "description": "Add contacts without email addresses.",
                        "default": false
                    },
                    "sequence_unverified_email": {
                        "type": "boolean",
                        "description": "Add contacts with unverified emails.",
                        "default": false
                    },
                    "sequence_job_change": {
                        "type": "boolean",
                        "description": "Add contacts who recently changed jobs.",
                        "default": false
                    },
                    "sequence_active_in_other_campaigns": {
                        "type": "boolean",
                        "description": "Add contacts active in other sequences.",
                        "default": false
                    },
                    "sequence_finished_in_other_campaigns": {
                        "type": "boolean",
                        "description": "Add contacts finished in other sequences.",
                        "default": false
                    },
                    "user_id": {
                        "type": "string",
                        "description": "Apollo user ID performing the action (for activity logs)."
                    }
                },
                "required": [
                    "sequence_id",
                    "emailer_campaign_id",
                    "contact_ids",
                    "send_email_from_email_account_id"
                ]
            }),
        ),
        ToolDef::new(
            "apollo_update_contact_status_in_sequence",
            "Update contact status in one or more sequences.",
            Method::POST,
            "/emailer_campaigns/remove_or_stop_contact_ids",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "emailer_campaign_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Apollo IDs of sequences to update."
                    },
                    "contact_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Apollo contact IDs whose sequence status will be updated."
                    },
                    "mode": {
                        "type": "string",
                        "enum": ["mark_as_finished", "remove", "stop"],
                        "description": "Action to perform on contacts within sequences."
                    }
                },
                "required": ["emailer_campaign_ids", "contact_ids", "mode"]
            }),
        ),
        ToolDef::new(
            "apollo_search_outreach_emails",
            "Search for outreach emails sent as part of Apollo sequences.",
            Method::GET,
            "/emailer_messages/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "emailer_message_stats": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter emails by their status (e.g., delivered, opened)."
                    },
                    "emailer_message_reply_classes": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter emails by recipient response sentiment (e.g., willing_to_meet)."
                    },
                    "user_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter emails sent by specific user IDs."
                    },
                    "email_account_id_and_aliases": {
                        "type": "string",
                        "description": "Filter by linked email account and its aliases."
                    },
                    "emailer_campaign_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Include emails from specific sequences only."
                    },
                    "not_emailer_campaign_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Exclude emails from specific sequences."
                    },
                    "emailer_message_date_range_mode": {
                        "type": "string",
                        "description": "Mode for date filtering, either 'due_at' or 'completed_at'."
                    },
                    "emailerMessageDateRange_max": {
                        "type": "string",
                        "description": "Upper bound date (YYYY-MM-DD)."
                    },
                    "emailerMessageDateRange_min": {
                        "type": "string",
                        "description": "Lower bound date (YYYY-MM-DD)."
                    },
                    "not_sent_reason_cds": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter emails by reasons for not being sent."
                    },
                    "q_keywords": {
                        "type": "string",
                        "description": "Keyword search in email content or sender."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number for pagination."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page."
                    }
                },
                "required": []
            }),
        )
        .renames(&[
            ("emailerMessageDateRange_max", "emailerMessageDateRange[max]"),
            ("emailerMessageDateRange_min", "emailerMessageDateRange[min]"),
        ]),
        ToolDef::new(
            "apollo_check_email_stats",
            "Retrieve detailed statistics and information for a specific outreach email sent via an Apollo sequence.",
            Method::GET,
            "/emailer_messages/{email_id}/activities",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "email_id": {
                        "type": "string",
                        "description": "The unique ID of the email to retrieve stats for."
                    }
                },
                "required": ["email_id"]
            }),
        ),
    ]
}
