use std::sync::LazyLock;

use regex::Regex;

use crate::parser::links::LinkTracking;
use crate::parser::sections::{capture_until, locate, locate_label, strip_emphasis, Heading, SECTION_END};

static PRODUCT: LazyLock<Heading> = LazyLock::new(|| Heading::new("SOBRE O PRODUTO"));

static PRICING_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*Informações importantes:\*\*[ \t]*$").unwrap());
static PAINS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*Dores que o produto resolve:\*\*[ \t]*$").unwrap());
static AUDIENCE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\*\*Perfil do seu público:\*\*[ \t]*$").unwrap());

static PRODUCT_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n\*\*(?:Dores que o produto resolve|Informações importantes)").unwrap()
});
static PRICING_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:\*\*Link de compra|---|#{1,2} )").unwrap());
static PAINS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:\*\*Informações importantes|---|#{1,2} )").unwrap());

/// Items for `organizationInfo`, in order: product, pricing, pains, audience.
/// Sections that are absent are skipped.
pub fn extract(doc: &str, tracking: Option<&LinkTracking>) -> Vec<String> {
    [
        product(doc),
        pricing(doc, tracking),
        pains(doc),
        audience(doc),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn product(doc: &str) -> Option<String> {
    let at = locate(doc, &PRODUCT)?;
    let body = capture_until(doc, at.body_start, &PRODUCT_END)?;
    Some(format!("PRODUTO:\n{}", strip_emphasis(body)))
}

fn pricing(doc: &str, tracking: Option<&LinkTracking>) -> Option<String> {
    let at = locate_label(doc, &PRICING_LABEL)?;
    let body = strip_emphasis(capture_until(doc, at.body_start, &PRICING_END)?);
    Some(match tracking {
        Some(t) => format!("PREÇO E ACESSO:\n{}\n\nLink de compra: {}", body, t.tracked_url()),
        None => format!("PREÇO E ACESSO:\n{}", body),
    })
}

fn pains(doc: &str) -> Option<String> {
    let at = locate_label(doc, &PAINS_LABEL)?;
    let body = capture_until(doc, at.body_start, &PAINS_END)?;
    Some(format!("DORES QUE O PRODUTO RESOLVE:\n{}", body))
}

fn audience(doc: &str) -> Option<String> {
    let at = locate_label(doc, &AUDIENCE_LABEL)?;
    let body = capture_until(doc, at.body_start, &SECTION_END)?;
    Some(format!("PERFIL DO PÚBLICO:\n{}", body))
}
