//! Prompt construction for the recommendation completion call.
//!
//! The templates interpolate form fields as-is. Empty or oddly formatted
//! fields are passed through unchanged; the model sees exactly what the user
//! typed.

use crate::models::{BookPreferences, MoodPreferences, RecommendationRequest};

/// System turn sent with every completion call.
pub const SYSTEM_PROMPT: &str = "You are a book recommendation assistant.";

/// Strict output-format instruction shared by both request variants.
const JSON_FORMAT_INSTRUCTION: &str = r#"Respond only in the following strict JSON format (no extra text or explanation):

[
  {
    "title": "Book Title 1",
    "author": "Author Name",
    "genre": "Genre",
    "description": "A brief, one-sentence description of the book."
  },
  {
    "title": "Book Title 2",
    "author": "Author Name",
    "genre": "Genre",
    "description": "A brief, one-sentence description of the book."
  }
  ...
]
"#;

/// Builds the user-turn prompt for either request variant.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    match request {
        RecommendationRequest::Personalized(prefs) => personalized(prefs),
        RecommendationRequest::Mood(mood) => mood_based(mood),
    }
}

fn personalized(prefs: &BookPreferences) -> String {
    let mut prompt = format!(
        "You are a helpful book recommendation assistant. Based on the following user preferences:\n\
         \n\
         - Favorite Books: {}\n\
         - Least Favorite Books: {}\n\
         - Preferred Genres: {}\n\
         - Favorite Authors: {}\n",
        prefs.favorite_books,
        prefs.least_favorite_books,
        prefs.preferred_genres,
        prefs.favorite_authors,
    );

    push_exclusion_clause(&mut prompt, &prefs.excluded_titles);

    prompt.push_str(
        "\nPlease recommend exactly 6 books. Do not recommend any books written by the author \
         of their least favorite books. Make sure the recommendations include almost all the \
         preferred genres. ",
    );
    prompt.push_str(JSON_FORMAT_INSTRUCTION);
    prompt
}

fn mood_based(mood: &MoodPreferences) -> String {
    let mut prompt = format!(
        "You are a helpful book recommendation assistant. The reader describes their current \
         mood as:\n\n- Mood: {}\n",
        mood.mood,
    );

    push_exclusion_clause(&mut prompt, &mood.excluded_titles);

    prompt.push_str("\nPlease recommend exactly 6 books that fit this mood. ");
    prompt.push_str(JSON_FORMAT_INSTRUCTION);
    prompt
}

fn push_exclusion_clause(prompt: &mut String, excluded_titles: &[String]) {
    if !excluded_titles.is_empty() {
        prompt.push_str(&format!(
            "- Do NOT recommend any of the following books as they have already been suggested: {}\n",
            excluded_titles.join(", "),
        ));
    }
}
