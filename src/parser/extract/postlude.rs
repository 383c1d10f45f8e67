use std::sync::LazyLock;

use regex::Regex;

use crate::error::BuildError;
use crate::parser::sections::{locate, Heading};

static FLOW: LazyLock<Heading> = LazyLock::new(|| Heading::prefix("FLUXO DE ATENDIMENTO"));
static TRAILING_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n```\s*$").unwrap());

/// Everything from `## FLUXO DE ATENDIMENTO` to the end of the document.
/// This is the one section the build cannot do without.
pub fn extract(doc: &str) -> Result<String, BuildError> {
    let at = locate(doc, &FLOW).ok_or(BuildError::MissingSection {
        section: FLOW.title,
    })?;
    let tail = TRAILING_FENCE_RE.replace(&doc[at.start..], "");
    Ok(tail.trim().to_string())
}
