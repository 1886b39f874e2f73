//! `.dupefinder.toml` client configuration.

use std::path::Path;

use tracing::{debug, warn};

use crate::types::SearchForm;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".dupefinder.toml";
/// Environment variable overriding `base_url`.
pub const URL_ENV: &str = "DUPEFINDER_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Known keys in `.dupefinder.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["base_url", "top_k", "cheaper_only", "price_cap"];

/// Client defaults: where the API lives and the initial form values.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub top_k: u32,
    pub cheaper_only: bool,
    pub price_cap: Option<f64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            top_k: 5,
            cheaper_only: true,
            price_cap: None,
        }
    }
}

impl ClientConfig {
    /// Form pre-filled with the configured defaults.
    pub fn form(&self, name: impl Into<String>) -> SearchForm {
        SearchForm {
            name: name.into(),
            price_cap: self.price_cap.map(|p| p.to_string()).unwrap_or_default(),
            top_k: self.top_k.to_string(),
            cheaper_only: self.cheaper_only,
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => warn!(
                key = key.as_str(),
                suggestion = *s,
                "Unknown key in {CONFIG_FILE}, did you mean '{s}'?"
            ),
            _ => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }
}

/// Parse config file contents. Malformed input yields defaults with a warning.
pub fn parse_config(content: &str) -> ClientConfig {
    let mut config = ClientConfig::default();

    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE}");
            return config;
        }
    };
    warn_unknown_keys(&table);

    if let Some(url) = table.get("base_url").and_then(|v| v.as_str()) {
        config.base_url = url.trim_end_matches('/').to_string();
    }

    match table.get("top_k").and_then(|v| v.as_integer()) {
        Some(k) if k > 0 => config.top_k = k.min(u32::MAX as i64) as u32,
        Some(k) => warn!(top_k = k, "top_k must be positive, keeping default"),
        None => {}
    }

    if let Some(b) = table.get("cheaper_only").and_then(|v| v.as_bool()) {
        config.cheaper_only = b;
    }

    // Accept both `price_cap = 40` and `price_cap = 40.0`
    config.price_cap = table
        .get("price_cap")
        .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)));

    config
}

/// Load `.dupefinder.toml` from `dir`, then apply the `DUPEFINDER_URL` override.
pub fn load_config(dir: &Path) -> ClientConfig {
    let path = dir.join(CONFIG_FILE);
    let mut config = match std::fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "Loading {CONFIG_FILE}");
            parse_config(&content)
        }
        Err(_) => ClientConfig::default(),
    };

    if let Ok(url) = std::env::var(URL_ENV) {
        if !url.trim().is_empty() {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config(""), ClientConfig::default());
    }

    #[test]
    fn reads_all_known_keys() {
        let config = parse_config(
            r#"
            base_url = "http://dupes.local:8080/"
            top_k = 12
            cheaper_only = false
            price_cap = 40
            "#,
        );
        assert_eq!(config.base_url, "http://dupes.local:8080");
        assert_eq!(config.top_k, 12);
        assert!(!config.cheaper_only);
        assert_eq!(config.price_cap, Some(40.0));
    }

    #[test]
    fn unknown_keys_and_bad_values_are_ignored() {
        let config = parse_config("top_kk = 3\ntop_k = -1\n");
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn malformed_toml_falls_back() {
        assert_eq!(parse_config("base_url = [unclosed"), ClientConfig::default());
    }

    #[test]
    fn form_carries_defaults() {
        let config = ClientConfig { price_cap: Some(25.5), top_k: 8, ..Default::default() };
        let form = config.form("Rose");
        assert_eq!(form.price_cap, "25.5");
        assert_eq!(form.top_k, "8");
        assert!(form.cheaper_only);
    }

    #[test]
    fn edit_distance_suggests_close_keys() {
        assert_eq!(edit_distance("top_kk", "top_k"), 1);
        assert_eq!(edit_distance("base_url", "base_url"), 0);
    }
}
