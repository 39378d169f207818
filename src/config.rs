use crate::errors::AppError;

/// Remote connection settings, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Config {
    /// Load settings from the environment (`.env` is loaded by the caller).
    pub fn from_env() -> Result<Self, AppError> {
        let supabase_url = std::env::var("SUPABASE_URL")
            .map_err(|_| AppError::Config("SUPABASE_URL is not set".to_string()))?;
        let supabase_anon_key = std::env::var("SUPABASE_ANON_KEY")
            .map_err(|_| AppError::Config("SUPABASE_ANON_KEY is not set".to_string()))?;
        Ok(Self {
            supabase_url,
            supabase_anon_key,
        })
    }
}
