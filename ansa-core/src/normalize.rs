//! Normalization of raw provider text into the canonical response.

use crate::types::AiResponse;
use std::time::Duration;

/// Placeholder explanation for replies without one.
pub const NO_EXPLANATION: &str = "No additional explanation provided.";

/// Split raw provider text into an answer line and an explanation
/// remainder, stamping provenance and latency.
///
/// The split is a lossy heuristic: the first line becomes the answer and
/// the remaining lines, joined with single spaces and trimmed, become the
/// explanation. A reply without a line break yields the whole text as the
/// answer and [`NO_EXPLANATION`] as the explanation. No re-splitting is
/// attempted. A reply whose first line is empty falls back to the whole
/// text as the answer.
pub fn shape(text: &str, source: &str, elapsed: Duration) -> AiResponse {
    let (first, remainder) = match text.split_once('\n') {
        Some((first, remainder)) => (first, remainder),
        None => (text, ""),
    };

    let answer = if first.is_empty() { text } else { first };

    let joined = remainder.split('\n').collect::<Vec<_>>().join(" ");
    let explanation = match joined.trim() {
        "" => NO_EXPLANATION,
        trimmed => trimmed,
    };

    AiResponse {
        answer: answer.to_string(),
        explanation: explanation.to_string(),
        source: source.to_string(),
        time_taken: elapsed.as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(text: &str) -> AiResponse {
        shape(text, "Groq", Duration::from_millis(1_234))
    }

    #[test]
    fn splits_on_first_line_break() {
        let response = shaped("Paris\nFrance's capital city.");
        assert_eq!(response.answer, "Paris");
        assert_eq!(response.explanation, "France's capital city.");
        assert_eq!(response.source, "Groq");
        assert_eq!(response.time_taken, 1_234);
    }

    #[test]
    fn single_paragraph_gets_placeholder_explanation() {
        let response = shaped("The capital of France is Paris.");
        assert_eq!(response.answer, "The capital of France is Paris.");
        assert_eq!(response.explanation, NO_EXPLANATION);
    }

    #[test]
    fn remainder_lines_are_joined_with_spaces() {
        let response = shaped("Paris\nIt is the capital\nand largest city of France.");
        assert_eq!(
            response.explanation,
            "It is the capital and largest city of France."
        );
    }

    #[test]
    fn empty_first_line_falls_back_to_whole_text() {
        let response = shaped("\nParis");
        assert_eq!(response.answer, "\nParis");
        assert_eq!(response.explanation, "Paris");
    }

    #[test]
    fn blank_remainder_gets_placeholder() {
        let response = shaped("Paris\n   \n");
        assert_eq!(response.answer, "Paris");
        assert_eq!(response.explanation, NO_EXPLANATION);
    }
}
