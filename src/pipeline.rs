use tracing::debug;

use crate::document;
use crate::error::BuildError;
use crate::parser;
use crate::payload::Payload;
use crate::script::{self, ScriptTarget};
use crate::settings::Settings;

pub struct Generated {
    pub payload: Payload,
    pub script: String,
}

/// Load the prompt and produce the payload and script. Nothing is written.
pub fn generate(settings: &Settings) -> Result<Generated, BuildError> {
    let markdown = document::load(&settings.prompt_path)?;

    let tracking = settings.link_tracking();
    match &tracking {
        Some(t) => debug!(base_url = t.base_url(), "checkout links will carry tracking params"),
        None => debug!("link tracking disabled"),
    }

    let extracted = parser::process_prompt(&markdown, tracking.as_ref())?;
    let payload = Payload::assemble(settings, extracted);
    for field in payload.empty_fields() {
        debug!(field, "extracted field is empty");
    }

    let script = script::render(&payload, &ScriptTarget::from(settings))?;
    Ok(Generated { payload, script })
}

/// Generate, then write the script; on any error nothing is written.
pub fn build(settings: &Settings) -> Result<Generated, BuildError> {
    let generated = generate(settings)?;
    document::write_executable(&settings.output_path, &generated.script)?;
    Ok(generated)
}
