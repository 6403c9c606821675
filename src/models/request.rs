use serde::{Deserialize, Serialize};

/// Personalized-mode preference payload.
///
/// The text fields arrive exactly as typed in the form (comma-separated
/// lists); they are interpolated into the prompt without normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPreferences {
    #[serde(default)]
    pub favorite_books: String,
    #[serde(default)]
    pub least_favorite_books: String,
    #[serde(default)]
    pub preferred_genres: String,
    #[serde(default)]
    pub favorite_authors: String,
    /// Titles already shown this session, sent on refresh requests only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_titles: Vec<String>,
}

/// Mood-mode preference payload, discriminated by `requestType: "mood"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodPreferences {
    pub mood: String,
    pub request_type: RequestType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_titles: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Mood,
}

/// The two mutually exclusive request variants accepted by `POST /api`.
///
/// Mood requests carry the `requestType` tag; anything else deserializes as
/// the personalized variant, with absent fields passed through as empty
/// strings rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendationRequest {
    Mood(MoodPreferences),
    Personalized(BookPreferences),
}

impl RecommendationRequest {
    /// Returns the same request with the exclusion list replaced.
    pub fn with_excluded_titles(mut self, titles: Vec<String>) -> Self {
        match &mut self {
            RecommendationRequest::Mood(mood) => mood.excluded_titles = titles,
            RecommendationRequest::Personalized(prefs) => prefs.excluded_titles = titles,
        }
        self
    }

    pub fn excluded_titles(&self) -> &[String] {
        match self {
            RecommendationRequest::Mood(mood) => &mood.excluded_titles,
            RecommendationRequest::Personalized(prefs) => &prefs.excluded_titles,
        }
    }
}
