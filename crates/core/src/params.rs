//! Request building: form validation and `/dupes` query-string encoding.

use url::form_urlencoded;

use crate::types::{DupeParams, SearchForm};

impl SearchForm {
    /// Validate the form and build request parameters.
    ///
    /// Returns `None` when the trimmed name is empty; that is the only local check.
    /// The price cap is dropped entirely when its field is blank.
    pub fn to_params(&self) -> Option<DupeParams> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }

        Some(DupeParams {
            name: name.to_string(),
            top_k: self.top_k.clone(),
            cheaper_than: self.cheaper_only,
            price_cap: (!self.price_cap.is_empty()).then(|| self.price_cap.clone()),
        })
    }

    /// Same search with the cheaper-than filter switched off.
    pub fn widened(&self) -> Self {
        Self { cheaper_only: false, ..self.clone() }
    }
}

impl DupeParams {
    /// Form-urlencoded query string in the order `name, top_k, cheaper_than[, price_cap]`.
    pub fn query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair("name", &self.name)
            .append_pair("top_k", &self.top_k)
            .append_pair("cheaper_than", if self.cheaper_than { "true" } else { "false" });
        if let Some(ref cap) = self.price_cap {
            ser.append_pair("price_cap", cap);
        }
        ser.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_names_are_rejected() {
        assert!(SearchForm::new("").to_params().is_none());
        assert!(SearchForm::new("   \t\n").to_params().is_none());
    }

    #[test]
    fn name_is_trimmed() {
        let params = SearchForm::new("  Baccarat Rouge  ").to_params().unwrap();
        assert_eq!(params.name, "Baccarat Rouge");
    }

    #[test]
    fn blank_price_cap_is_omitted_not_sent_empty() {
        let params = SearchForm::new("Rose").to_params().unwrap();
        assert_eq!(params.price_cap, None);
        let qs = params.query_string();
        assert_eq!(qs, "name=Rose&top_k=5&cheaper_than=true");
        assert!(!qs.contains("price_cap"));
    }

    #[test]
    fn price_cap_is_appended_last() {
        let form = SearchForm {
            name: "Black Opium".into(),
            price_cap: "40".into(),
            top_k: "10".into(),
            cheaper_only: false,
        };
        let qs = form.to_params().unwrap().query_string();
        assert_eq!(qs, "name=Black+Opium&top_k=10&cheaper_than=false&price_cap=40");
    }

    #[test]
    fn special_characters_are_encoded() {
        let qs = SearchForm::new("Eau & Fleur=1").to_params().unwrap().query_string();
        assert!(qs.starts_with("name=Eau+%26+Fleur%3D1&"), "got {qs}");
    }

    #[test]
    fn top_k_passes_through_verbatim() {
        let mut form = SearchForm::new("Rose");
        form.top_k = String::new();
        let qs = form.to_params().unwrap().query_string();
        assert_eq!(qs, "name=Rose&top_k=&cheaper_than=true");
    }

    #[test]
    fn widened_only_drops_cheaper_filter() {
        let mut form = SearchForm::new("Rose");
        form.price_cap = "30".into();
        let wide = form.widened();
        assert!(!wide.cheaper_only);
        assert_eq!(wide.price_cap, "30");
        assert_eq!(wide.name, form.name);
        assert_eq!(
            wide.to_params().unwrap().query_string(),
            "name=Rose&top_k=5&cheaper_than=false&price_cap=30"
        );
    }
}
