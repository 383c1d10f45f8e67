use crate::error::BuildError;
use crate::payload::Payload;
use crate::settings::Settings;

pub const TOKEN_VAR: &str = "MERMAID_TOKEN";
pub const ASSISTANT_ID_VAR: &str = "MERMAID_ASSISTANT_ID";

/// Parts of the script that vary besides the payload.
#[derive(Debug, Clone)]
pub struct ScriptTarget {
    /// Assistants collection URL; the id is appended at runtime.
    pub api_base_url: String,
    pub env_file: String,
}

impl From<&Settings> for ScriptTarget {
    fn from(settings: &Settings) -> Self {
        ScriptTarget {
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            env_file: settings.env_file.clone(),
        }
    }
}

/// Render the update script with the payload embedded in a quoted heredoc.
pub fn render(payload: &Payload, target: &ScriptTarget) -> Result<String, BuildError> {
    let json = payload.to_request_json()?;
    Ok(format!(
        r#"#!/bin/bash

# =============================================================================
# MermAId Assistant Update Script
# Generated automatically by {generator}
# DO NOT EDIT THIS FILE DIRECTLY - edit the prompt file and rebuild
# =============================================================================

# Load environment variables
source "$(dirname "$0")/{env_file}"

: "${{{token}:?{token} is not set}}"
: "${{{id}:?{id} is not set}}"

# API endpoint
API_URL="{api_base}/${{{id}}}"

# JSON payload
read -r -d '' PAYLOAD << 'EOF'
{json}
EOF

# Make the API call
echo "Updating assistant ${{{id}}}..."
response=$(curl -s -X PATCH "$API_URL" \
  -H "Authorization: Bearer ${{{token}}}" \
  -H "Content-Type: application/json" \
  -d "$PAYLOAD")

# Pretty-print with jq when available
if command -v jq &> /dev/null; then
  echo "$response" | jq .
else
  echo "$response"
fi

echo ""
echo "Done!"
"#,
        generator = env!("CARGO_PKG_NAME"),
        env_file = target.env_file,
        token = TOKEN_VAR,
        id = ASSISTANT_ID_VAR,
        api_base = target.api_base_url,
        json = json,
    ))
}
