use std::sync::LazyLock;

use crate::parser::sections::{section_body, strip_emphasis, Heading};

static PERSONALITY: LazyLock<Heading> = LazyLock::new(|| Heading::new("PERSONALIDADE E TOM DE VOZ"));

pub fn extract(doc: &str) -> String {
    section_body(doc, &PERSONALITY)
        .map(strip_emphasis)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_section_with_labels_unwrapped() {
        let doc = "## PERSONALIDADE E TOM DE VOZ\n\n**Tom:** acolhedor\n\nUse **emojis** com moderação.\n\n---\n## PRÓXIMA\n";
        assert_eq!(
            extract(doc),
            "Tom: acolhedor\n\nUse emojis com moderação."
        );
    }

    #[test]
    fn ends_at_next_heading() {
        let doc = "## PERSONALIDADE E TOM DE VOZ\nDireta.\n## SOBRE O PRODUTO\nx";
        assert_eq!(extract(doc), "Direta.");
    }

    #[test]
    fn missing_is_empty() {
        assert_eq!(extract("nothing here"), "");
    }
}
