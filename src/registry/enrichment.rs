//! Organization enrichment tools.
//!
//! Apollo rejects domains carrying a `www.` prefix, so both tools strip it
//! before the upstream call.

use reqwest::Method;
use serde_json::json;

use super::{ResponseShape, ToolDef};

pub(super) fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "apollo_organisation_enrichment",
            "Enrich data for a single organization by domain.",
            Method::GET,
            "/organizations/enrich",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "domain": {
                        "type": "string",
                        "description": "Domain of the company to enrich (exclude www., @, etc.). Example: apollo.io or microsoft.com"
                    }
                },
                "required": ["domain"]
            }),
        )
        .strip_www(&["domain"]),
        ToolDef::new(
            "apollo_bulk_organisation_enrichment",
            "Enrich data for up to 10 organizations in one call.",
            Method::POST,
            "/organizations/bulk_enrich",
            ResponseShape::Json,
            json!({
                "type": "object",
                "properties": {
                    "domains": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of company domains to enrich (exclude www., @, etc.). Example: ['apollo.io', 'microsoft.com']"
                    }
                },
                "required": ["domains"]
            }),
        )
        .strip_www(&["domains"]),
    ]
}
