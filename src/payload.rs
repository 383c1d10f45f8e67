use serde::Serialize;

use crate::parser::extract::Extracted;
use crate::settings::Settings;

/// Body of the assistant update, in the order the API documents it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub assistant_name: String,
    pub organization_name: String,
    pub organization_business: String,
    pub prompt_prelude: String,
    pub assistant_role: String,
    pub assistant_personality: String,
    pub organization_info: Vec<String>,
    pub prompt_postlude: String,
}

/// Request wrapper: the API expects the fields under `options`.
#[derive(Debug, Serialize)]
pub struct UpdateRequest<'a> {
    pub options: &'a Payload,
}

/// Size of one extracted field, for the build report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSize {
    Chars(usize),
    Items(usize),
}

impl FieldSize {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldSize::Chars(0) | FieldSize::Items(0))
    }
}

impl std::fmt::Display for FieldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSize::Chars(n) => write!(f, "{} chars", n),
            FieldSize::Items(n) => write!(f, "{} items", n),
        }
    }
}

impl Payload {
    pub fn assemble(settings: &Settings, extracted: Extracted) -> Self {
        Payload {
            assistant_name: settings.assistant_name.clone(),
            organization_name: settings.organization_name.clone(),
            organization_business: settings.organization_business.clone(),
            prompt_prelude: settings.prompt_prelude.clone(),
            assistant_role: extracted.role,
            assistant_personality: extracted.personality,
            organization_info: extracted.organization_info,
            prompt_postlude: extracted.postlude,
        }
    }

    /// Extracted fields with their API names; character counts, not bytes.
    pub fn extracted_sizes(&self) -> [(&'static str, FieldSize); 4] {
        [
            ("assistantRole", FieldSize::Chars(self.assistant_role.chars().count())),
            (
                "assistantPersonality",
                FieldSize::Chars(self.assistant_personality.chars().count()),
            ),
            ("organizationInfo", FieldSize::Items(self.organization_info.len())),
            ("promptPostlude", FieldSize::Chars(self.prompt_postlude.chars().count())),
        ]
    }

    pub fn empty_fields(&self) -> Vec<&'static str> {
        self.extracted_sizes()
            .into_iter()
            .filter(|(_, size)| size.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// `{"options": {...}}`, two-space indented, non-ASCII kept as-is.
    pub fn to_request_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&UpdateRequest { options: self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 8] = [
        "assistantName",
        "organizationName",
        "organizationBusiness",
        "promptPrelude",
        "assistantRole",
        "assistantPersonality",
        "organizationInfo",
        "promptPostlude",
    ];

    fn sample() -> Payload {
        Payload::assemble(
            &Settings::default(),
            Extracted {
                role: "Você é a Iara.".into(),
                personality: String::new(),
                organization_info: vec!["PRODUTO:\nCurso".into()],
                postlude: "## FLUXO DE ATENDIMENTO\n1. Oi".into(),
            },
        )
    }

    fn key_order(json: &str) -> Vec<usize> {
        KEYS.iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect()
    }

    #[test]
    fn keys_are_fixed_and_ordered() {
        let full = sample().to_request_json().unwrap();
        let empty = Payload::assemble(&Settings::default(), Extracted::default())
            .to_request_json()
            .unwrap();
        for json in [&full, &empty] {
            let value: serde_json::Value = serde_json::from_str(json).unwrap();
            let options = value["options"].as_object().unwrap();
            assert_eq!(options.len(), KEYS.len());
            assert!(KEYS.iter().all(|k| options.contains_key(*k)));

            let positions = key_order(json);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn unicode_kept_verbatim() {
        let json = sample().to_request_json().unwrap();
        assert!(json.contains("Você é a Iara."));
        assert!(json.starts_with("{\n  \"options\": {\n    \"assistantName\""));
    }

    #[test]
    fn organization_info_is_a_list() {
        let json = sample().to_request_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["options"]["organizationInfo"].is_array());
        assert!(value["options"]["promptPrelude"].is_string());
    }

    #[test]
    fn sizes_and_empty_fields() {
        let p = sample();
        let sizes = p.extracted_sizes();
        assert_eq!(sizes[0], ("assistantRole", FieldSize::Chars(14)));
        assert_eq!(sizes[2], ("organizationInfo", FieldSize::Items(1)));
        assert_eq!(sizes[0].1.to_string(), "14 chars");
        assert_eq!(sizes[2].1.to_string(), "1 items");
        assert_eq!(p.empty_fields(), vec!["assistantPersonality"]);
    }
}
