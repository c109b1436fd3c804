//! Task tools.
//!
//! Bulk task creation is the one endpoint that answers with bare text
//! (`true`) instead of JSON.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_create_tasks",
            "Create tasks for multiple contacts in Apollo to track upcoming actions.",
            Method::POST,
            "/tasks/bulk_create",
            ResponseShape::Text,
            json!({
                "type": "object",
                "properties": {
                    "user_id": {
                        "type": "string",
                        "description": "ID of the task owner who will take action."
                    },
                    "contact_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of Apollo contact IDs to assign tasks."
                    },
                    "priority": {
                        "type": "string",
                        "enum": ["high", "medium", "low"],
                        "description": "Task priority."
                    },
                    "due_at": {
                        "type": "string",
                        "description": "Task due date/time in ISO 8601 format (e.g., '2025-02-15T08:10:30Z')."
                    },
                    "task_type": {
                        "type": "string",
                        "enum": [
                            "call",
                            "outreach_manual_email",
                            "linkedin_step_connect",
                            "linkedin_step_message",
                            "linkedin_step_view_profile",
                            "linkedin_step_interact_post",
                            "action_item"
                        ],
                        "description": "Task type."
                    },
                    "status": {
                        "type": "string",
                        "enum": ["scheduled", "completed", "archived"],
                        "description": "Task status."
                    },
                    "note": {
                        "type": "string",
                        "description": "Additional context or description for the task."
                    }
                },
                "required": ["user_id", "contact_ids", "priority", "due_at", "task_type", "status"]
            }),
        )
        .renames(&[("task_type", "type")]),
        ToolDef::new(
            "apollo_search_tasks",
            "Search for tasks created by your team in Apollo with filtering and sorting options.",
            Method::POST,
            "/tasks/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "sort_by_field": {
                        "type": "string",
                        "enum": ["task_due_at", "task_priority"],
                        "description": "Sort tasks by future due date or priority."
                    },
                    "open_factor_names": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Task types to get counts of tasks by type."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number to retrieve."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of tasks per page."
                    }
                },
                "required": []
            }),
        ),
    ]
}
