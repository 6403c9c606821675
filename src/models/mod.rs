mod recommendation;
mod request;

pub use recommendation::Recommendation;
pub use request::{BookPreferences, MoodPreferences, RecommendationRequest, RequestType};
