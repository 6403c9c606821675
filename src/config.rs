use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Groq API key
    pub groq_api_key: String,

    /// Groq API base URL (OpenAI-compatible)
    #[serde(default = "default_groq_api_url")]
    pub groq_api_url: String,

    /// Chat model used for recommendations
    #[serde(default = "default_groq_model")]
    pub groq_model: String,

    /// Open Library base URL, used by the catalog suggestion client
    #[serde(default = "default_openlibrary_url")]
    pub openlibrary_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_groq_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_openlibrary_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
