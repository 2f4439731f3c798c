//! Startup credential configuration.

/// Default FreeLLM endpoint when none is configured.
pub const DEFAULT_FREE_LLM_URL: &str = "https://apifreellm.com/api/chat";

/// One credential slot per keyed provider, plus the FreeLLM endpoint
/// override.
///
/// Assemble this once at startup — literally, or with [`from_env`] — and
/// pass it by value into the chain builder. It is read-only after
/// construction: a provider whose slot is empty is permanently skipped for
/// the lifetime of any chain built from this value; there is no dynamic
/// re-check.
///
/// [`from_env`]: Credentials::from_env
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub groq: Option<String>,
    pub free_llm_url: Option<String>,
    pub open_router: Option<String>,
    pub gemini: Option<String>,
    pub hugging_face: Option<String>,
    pub open_ai: Option<String>,
}

impl Credentials {
    /// Read the conventional environment variables once.
    ///
    /// Unset or empty variables leave their slot empty.
    pub fn from_env() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|value| !value.is_empty())
        }

        Self {
            groq: var("GROQ_API_KEY"),
            free_llm_url: var("FREE_LLM_API_URL"),
            open_router: var("OPENROUTER_API_KEY"),
            gemini: var("GEMINI_API_KEY"),
            hugging_face: var("HUGGINGFACE_API_KEY"),
            open_ai: var("OPENAI_API_KEY"),
        }
    }

    /// The FreeLLM endpoint to use, configured or default.
    pub fn free_llm_url(&self) -> &str {
        self.free_llm_url
            .as_deref()
            .unwrap_or(DEFAULT_FREE_LLM_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_llm_url_defaults() {
        let credentials = Credentials::default();
        assert_eq!(credentials.free_llm_url(), DEFAULT_FREE_LLM_URL);

        let credentials = Credentials {
            free_llm_url: Some("http://localhost:9000/chat".to_string()),
            ..Credentials::default()
        };
        assert_eq!(credentials.free_llm_url(), "http://localhost:9000/chat");
    }
}
