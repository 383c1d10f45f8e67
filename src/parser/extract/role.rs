use std::sync::LazyLock;

use crate::parser::sections::{section_body, strip_bold, Heading};

static IDENTITY: LazyLock<Heading> = LazyLock::new(|| Heading::new("IDENTIDADE"));

/// First paragraph of `## IDENTIDADE`, bold markers removed.
pub fn extract(doc: &str) -> String {
    section_body(doc, &IDENTITY)
        .and_then(|body| body.split("\n\n").next())
        .map(|para| strip_bold(para.trim()))
        .unwrap_or_default()
}
