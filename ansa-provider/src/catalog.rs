//! The six configured providers and the standard fallback chain.
//!
//! Each spec pins one provider's wire contract: endpoint, auth
//! convention, envelope, and extraction paths. The chain order in
//! [`providers`] is a policy choice — it decides which provider wins when
//! several are available — and changing it is a behavior change, not a
//! refactor.

use crate::wire::{AuthStyle, Envelope, HttpProvider, WireSpec};

pub use crate::credentials::{Credentials, DEFAULT_FREE_LLM_URL};

fn free_llm_spec(url: String) -> WireSpec {
    WireSpec {
        id: "freellm",
        name: "FreeLLM",
        endpoint: url,
        auth: AuthStyle::None,
        headers: &[],
        envelope: Envelope::PlainMessage,
        extract: &["/message", "/response", "/output"],
        requires_key: false,
    }
}

fn groq_spec() -> WireSpec {
    WireSpec {
        id: "groq",
        name: "Groq",
        endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
        auth: AuthStyle::Bearer,
        headers: &[],
        envelope: Envelope::OpenAiChat {
            model: "llama-3.1-8b-instant",
        },
        extract: &["/choices/0/message/content"],
        requires_key: true,
    }
}

fn open_router_spec() -> WireSpec {
    WireSpec {
        id: "openrouter",
        name: "OpenRouter",
        endpoint: "https://openrouter.ai/api/v1/chat/completions".to_string(),
        auth: AuthStyle::Bearer,
        headers: &[
            ("HTTP-Referer", "https://quizai-extension.com"),
            ("X-Title", "QuizAI Extension"),
        ],
        envelope: Envelope::OpenAiChat {
            model: "meta-llama/llama-3.2-3b-instruct:free",
        },
        extract: &["/choices/0/message/content"],
        requires_key: true,
    }
}

fn gemini_spec() -> WireSpec {
    WireSpec {
        id: "gemini",
        name: "Gemini",
        endpoint:
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
                .to_string(),
        auth: AuthStyle::QueryParam("key"),
        headers: &[],
        envelope: Envelope::GeminiGenerate,
        extract: &["/candidates/0/content/parts/0/text"],
        requires_key: true,
    }
}

fn hugging_face_spec() -> WireSpec {
    WireSpec {
        id: "huggingface",
        name: "HuggingFace",
        endpoint: "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large"
            .to_string(),
        auth: AuthStyle::Bearer,
        headers: &[],
        envelope: Envelope::HfInference,
        extract: &["/0/generated_text", "/0/text", "/generated_text", "/text"],
        requires_key: true,
    }
}

fn open_ai_spec() -> WireSpec {
    WireSpec {
        id: "openai",
        name: "OpenAI",
        endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
        auth: AuthStyle::Bearer,
        headers: &[],
        envelope: Envelope::OpenAiChat {
            model: "gpt-4o-mini",
        },
        extract: &["/choices/0/message/content"],
        requires_key: true,
    }
}

/// FreeLLM: keyless community endpoint, bare message envelope, several
/// possible reply fields.
pub fn free_llm(url: impl Into<String>) -> HttpProvider {
    HttpProvider::new(free_llm_spec(url.into()), None)
}

/// Groq: OpenAI-compatible chat completions.
pub fn groq(api_key: impl Into<String>) -> HttpProvider {
    HttpProvider::new(groq_spec(), Some(api_key.into()))
}

/// OpenRouter: OpenAI-compatible chat completions with the attribution
/// headers the service expects.
pub fn open_router(api_key: impl Into<String>) -> HttpProvider {
    HttpProvider::new(open_router_spec(), Some(api_key.into()))
}

/// Gemini: `generateContent` with the key as a query parameter.
pub fn gemini(api_key: impl Into<String>) -> HttpProvider {
    HttpProvider::new(gemini_spec(), Some(api_key.into()))
}

/// Hugging Face inference API. Replies arrive either as an array of
/// generations or as a bare object; both shapes are tried.
pub fn hugging_face(api_key: impl Into<String>) -> HttpProvider {
    HttpProvider::new(hugging_face_spec(), Some(api_key.into()))
}

/// OpenAI chat completions.
pub fn open_ai(api_key: impl Into<String>) -> HttpProvider {
    HttpProvider::new(open_ai_spec(), Some(api_key.into()))
}

/// The standard ordered candidate chain:
/// FreeLLM → Groq → OpenRouter → Gemini → HuggingFace → OpenAI.
///
/// Every provider is constructed whether or not its credential is set, so
/// availability reports cover the full roster; an unkeyed provider is
/// never ready and therefore never invoked.
pub fn providers(credentials: &Credentials) -> Vec<HttpProvider> {
    vec![
        HttpProvider::new(free_llm_spec(credentials.free_llm_url().to_string()), None),
        HttpProvider::new(groq_spec(), credentials.groq.clone()),
        HttpProvider::new(open_router_spec(), credentials.open_router.clone()),
        HttpProvider::new(gemini_spec(), credentials.gemini.clone()),
        HttpProvider::new(hugging_face_spec(), credentials.hugging_face.clone()),
        HttpProvider::new(open_ai_spec(), credentials.open_ai.clone()),
    ]
}
