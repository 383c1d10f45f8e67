pub mod extract;
pub mod links;
pub mod sections;

use crate::error::BuildError;
use extract::Extracted;
use links::LinkTracking;

/// Two-step pipeline: annotate checkout links, then pull every field out of
/// the annotated text.
pub fn process_prompt(markdown: &str, tracking: Option<&LinkTracking>) -> Result<Extracted, BuildError> {
    let annotated = links::annotate(markdown, tracking);
    extract::extract_all(&annotated, tracking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_annotated_before_extraction() {
        let md = "## FLUXO DE ATENDIMENTO\nEnvie https://x.test/buy ao cliente.";
        let tracking = LinkTracking::new("https://x.test/buy", "a=1").unwrap();
        let e = process_prompt(md, Some(&tracking)).unwrap();
        assert_eq!(e.postlude, "## FLUXO DE ATENDIMENTO\nEnvie https://x.test/buy?a=1 ao cliente.");
    }
}
