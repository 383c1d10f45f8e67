use regex::{Captures, Regex};
use tracing::warn;

/// A checkout URL and the tracking parameters merged into every mention of it.
#[derive(Debug, Clone)]
pub struct LinkTracking {
    base_url: String,
    params: String,
    pattern: Regex,
}

impl LinkTracking {
    /// Returns `None` when either part is empty, or when the base URL is too
    /// large to compile into a pattern (logged at `warn`).
    pub fn new(base_url: &str, params: &str) -> Option<Self> {
        let base_url = base_url.trim();
        let params = params.trim().trim_start_matches('?');
        if base_url.is_empty() || params.is_empty() {
            return None;
        }
        // base URL, an optional existing query, then a link boundary
        let pattern = match Regex::new(&format!(
            r"{}(?:\?[^\s)]*)?(\s|\)|$)",
            regex::escape(base_url)
        )) {
            Ok(re) => re,
            Err(e) => {
                warn!(base_url, error = %e, "link tracking disabled: base URL pattern rejected");
                return None;
            }
        };
        Some(Self {
            base_url: base_url.to_string(),
            params: params.to_string(),
            pattern,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tracked_url(&self) -> String {
        format!("{}?{}", self.base_url, self.params)
    }

    /// Rewrite every bounded occurrence of the base URL to the tracked URL.
    pub fn annotate(&self, content: &str) -> String {
        let tracked = self.tracked_url();
        self.pattern
            .replace_all(content, |caps: &Captures| format!("{}{}", tracked, &caps[1]))
            .into_owned()
    }
}

/// Pass-through when tracking is not configured.
pub fn annotate(content: &str, tracking: Option<&LinkTracking>) -> String {
    match tracking {
        Some(t) => t.annotate(content),
        None => content.to_string(),
    }
}
