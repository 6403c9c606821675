use serde::{Deserialize, Serialize};

/// A single book recommendation as produced by the model.
///
/// The upstream response is forwarded without schema validation, so every
/// field defaults to an empty string when the model leaves it out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub description: String,
}
