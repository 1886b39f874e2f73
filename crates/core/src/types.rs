//! Core types shared across DupeFinder: the search form, the query parameters built
//! from it, and the `/dupes` response payload.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// Raw values of the search form, exactly as the fields hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Perfume name as typed (untrimmed).
    pub name: String,
    /// Price cap field; empty means "no cap".
    pub price_cap: String,
    /// Requested result count, passed through verbatim.
    pub top_k: String,
    /// "Cheaper than the original" toggle.
    pub cheaper_only: bool,
}

impl SearchForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_cap: String::new(),
            top_k: "5".to_string(),
            cheaper_only: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Request parameters
// ---------------------------------------------------------------------------

/// Query parameters for one `/dupes` request. Built by [`SearchForm::to_params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DupeParams {
    pub name: String,
    pub top_k: String,
    pub cheaper_than: bool,
    pub price_cap: Option<String>,
}

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

/// JSON body returned by `GET /dupes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DupeResponse {
    /// The matched item, decoded by [`DupeResponse::query_item`] only when a listing
    /// needs a heading; an empty result list never looks at it.
    #[serde(default)]
    pub query: Option<serde_json::Value>,
    /// Echo of the parameters the server actually applied.
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<DupeItem>,
}

/// The perfume the server matched the search name to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryItem {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// One ranked alternative. Order in [`DupeResponse::results`] is the server's rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DupeItem {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub price: Option<f64>,
    pub similarity: f64,
}

impl DupeResponse {
    /// Decode the `query` object. `None` when the server sent none.
    pub fn query_item(&self) -> Option<Result<QueryItem, serde_json::Error>> {
        self.query.clone().map(serde_json::from_value)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DupeItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DupeItem>>::deserialize(deserializer)?.unwrap_or_default())
}
