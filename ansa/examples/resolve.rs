//! Resolve a question against the standard provider chain.
//!
//! Credentials come from the conventional environment variables
//! (GROQ_API_KEY, OPENROUTER_API_KEY, GEMINI_API_KEY, HUGGINGFACE_API_KEY,
//! OPENAI_API_KEY, FREE_LLM_API_URL). Providers without a key are skipped;
//! FreeLLM needs none.
//!
//! ```sh
//! cargo run --example resolve -- "What is the capital of France?"
//! ```

use ansa::prelude::*;

fn render(highlighted: &Highlight) -> String {
    match highlighted {
        Highlight::KeywordDetail { keyword, detail } => format!("**{keyword}**\n  {detail}"),
        Highlight::Spans(spans) => spans
            .iter()
            .map(|span| match span.emphasis {
                Emphasis::Strong => format!("**{}**", span.text),
                Emphasis::Plain => span.text.clone(),
            })
            .collect(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ansa=debug")),
        )
        .init();

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What is the capital of France?".to_string());

    let credentials = Credentials::from_env();
    let resolver = ansa::standard_resolver(&credentials);

    println!("Provider status:");
    for status in resolver.status() {
        println!(
            "  {:<12} available={} requires_key={}",
            status.name, status.available, status.requires_key
        );
    }

    println!("\nQuestion: {question}");
    let response = resolver.resolve(&question).await;

    println!("\nAnswer:      {}", render(&highlight(&response.answer)));
    println!("Explanation: {}", response.explanation);
    println!("Source:      {}", response.source);
    println!("Time taken:  {}ms", response.time_taken);
    println!("Confidence:  {:.0}%", response.confidence() * 100.0);

    Ok(())
}
