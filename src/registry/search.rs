//! Organization search tools: job postings and news articles.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_organization_job_postings",
            "Retrieve current job postings for a specific organization.",
            Method::GET,
            "/organizations/{organization_id}/job_postings",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "organization_id": {
                        "type": "string",
                        "description": "Unique Apollo ID of the company."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number for paginated results."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of job postings per page to improve performance."
                    }
                },
                "required": ["organization_id"]
            }),
        ),
        ToolDef::new(
            "apollo_news_articles_search",
            "Search news articles related to companies in the Apollo database.",
            Method::POST,
            "/news_articles/search",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "organization_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Apollo IDs of companies to include in the search."
                    },
                    "categories": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Filter by news categories or sub-categories (e.g., hires, investment, contract)."
                    },
                    "published_at_min": {
                        "type": "string",
                        "description": "Start date (YYYY-MM-DD) for the date range filter."
                    },
                    "published_at_max": {
                        "type": "string",
                        "description": "End date (YYYY-MM-DD) for the date range filter."
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number for paginated results."
                    },
                    "per_page": {
                        "type": "integer",
                        "description": "Number of results per page to improve performance."
                    }
                },
                "required": ["organization_ids"]
            }),
        )
        .renames(&[
            ("published_at_min", "published_at[min]"),
            ("published_at_max", "published_at[max]"),
        ]),
    ]
}
