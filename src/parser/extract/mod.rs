pub mod organization;
pub mod personality;
pub mod postlude;
pub mod role;

use crate::error::BuildError;
use crate::parser::links::LinkTracking;

/// Fields pulled out of the prompt; everything else in the payload is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub role: String,
    pub personality: String,
    pub organization_info: Vec<String>,
    pub postlude: String,
}

/// Run every extractor over the annotated document. Only a missing postlude
/// is an error; other sections come back empty.
pub fn extract_all(doc: &str, tracking: Option<&LinkTracking>) -> Result<Extracted, BuildError> {
    let postlude = postlude::extract(doc)?;
    Ok(Extracted {
        role: role::extract(doc),
        personality: personality::extract(doc),
        organization_info: organization::extract(doc, tracking),
        postlude,
    })
}

// ── Tests ──
