//! Heuristic answer highlighting.
//!
//! Given a final answer string, decide which substring is "the answer" for
//! emphasized display. The decision is an ordered rule table evaluated
//! top to bottom with first-match-wins semantics, applied to the output of
//! [`clean_answer_text`]. Cleaning runs once, before rule evaluation, and
//! is never re-applied to segments produced by a rule, so a stray option
//! marker embedded inside a later sentence survives.

use once_cell::sync::Lazy;
use regex::Regex;

static OPTION_PAREN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[A-E]\)\s*").unwrap());
static OPTION_WRAPPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\([A-E]\)\s*").unwrap());
static OPTION_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^option\s+[A-E]\s*:?\s*").unwrap());
static ANSWER_PREAMBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^the\s+answer\s+to\s+question\s+is\s+\*\*").unwrap());

static DETAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.+?)\s+detail:\s*(.+)$").unwrap());
static OPTION_LEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([A-E])[:\s]+\s*(.+)$").unwrap());
static ANSWER_IS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:the\s+)?(?:correct\s+)?(?:answer\s+)?(?:is|are)\s+(.+)$").unwrap()
});
static TRAILING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,;:]+$").unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]+""#).unwrap());
static FIRST_SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.+?[.!?])\s*(.+)$").unwrap());

/// Emphasis level of a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Plain,
}

/// One contiguous run of text with a single emphasis level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Span {
    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Strong,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }
}

/// A structured rendering of an answer string. The underlying answer text
/// is never mutated; this is presentation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlight {
    /// A bare keyword shown strongly emphasized, with a de-emphasized
    /// `detail:` line below it.
    KeywordDetail { keyword: String, detail: String },
    /// A flat run of spans.
    Spans(Vec<Span>),
}

impl Highlight {
    fn whole(text: &str) -> Self {
        Highlight::Spans(vec![Span::strong(text)])
    }
}

/// Strip known noise prefixes from an answer string: leading option-letter
/// markers (`A)`, `(B)`, `Option C:`), the literal
/// `"The answer to question is **"` preamble, and markdown bold markers.
/// Applied unconditionally before rule matching, and only then — cleaning
/// is not recursive.
pub fn clean_answer_text(text: &str) -> String {
    let mut cleaned = text.trim().to_string();

    cleaned = OPTION_PAREN.replace(&cleaned, "").into_owned();
    cleaned = OPTION_WRAPPED.replace(&cleaned, "").into_owned();
    cleaned = OPTION_WORD.replace(&cleaned, "").into_owned();
    cleaned = ANSWER_PREAMBLE.replace(&cleaned, "").into_owned();
    cleaned = cleaned.replace("**", "");

    cleaned.trim().to_string()
}

type Rule = fn(&str) -> Option<Highlight>;

/// The ordered rule table. The first rule returning `Some` wins; order is
/// a policy decision and is covered by tests.
const RULES: &[(&str, Rule)] = &[
    ("keyword-detail", keyword_detail),
    ("option-letter", option_letter),
    ("answer-is", answer_is),
    ("quoted", quoted),
    ("short", short),
    ("first-sentence", first_sentence),
    ("leading-words", leading_words),
];

/// Determine the emphasized rendering of an answer string.
pub fn highlight(text: &str) -> Highlight {
    let cleaned = clean_answer_text(text);
    if cleaned.is_empty() {
        // Nothing left after cleaning: pass the original through unstyled.
        return Highlight::Spans(vec![Span::plain(text)]);
    }

    for (name, rule) in RULES {
        if let Some(found) = rule(&cleaned) {
            tracing::debug!(rule = name, "answer highlighted");
            return found;
        }
    }

    // The last rule always matches; this is unreachable in practice.
    Highlight::whole(&cleaned)
}

/// `<keyword> detail: <rest>` — keyword alone, detail as a secondary line.
fn keyword_detail(cleaned: &str) -> Option<Highlight> {
    let caps = DETAIL.captures(cleaned)?;
    Some(Highlight::KeywordDetail {
        keyword: caps[1].trim().to_string(),
        detail: format!("detail: {}", caps[2].trim()),
    })
}

/// Leading option letter with separator: `A: Paris`, `B Paris`.
fn option_letter(cleaned: &str) -> Option<Highlight> {
    let caps = OPTION_LEAD.captures(cleaned)?;
    Some(Highlight::whole(caps[2].trim()))
}

/// `(the) (correct) (answer) is/are <tail>` — emphasize the tail, minus
/// trailing punctuation.
fn answer_is(cleaned: &str) -> Option<Highlight> {
    let caps = ANSWER_IS.captures(cleaned)?;
    let tail = caps[1].trim();
    Some(Highlight::whole(&TRAILING_PUNCT.replace(tail, "")))
}

/// Emphasize the first double-quoted substring, quotes included.
fn quoted(cleaned: &str) -> Option<Highlight> {
    let found = QUOTED.find(cleaned)?;

    let mut spans = Vec::new();
    if found.start() > 0 {
        spans.push(Span::plain(&cleaned[..found.start()]));
    }
    spans.push(Span::strong(found.as_str()));
    if found.end() < cleaned.len() {
        spans.push(Span::plain(&cleaned[found.end()..]));
    }
    Some(Highlight::Spans(spans))
}

/// Short text is likely just the answer itself: emphasize all of it.
fn short(cleaned: &str) -> Option<Highlight> {
    (cleaned.chars().count() < 100).then(|| Highlight::whole(cleaned))
}

/// Longer text: emphasize up to and including the first sentence
/// terminator, leave the remainder plain.
fn first_sentence(cleaned: &str) -> Option<Highlight> {
    let caps = FIRST_SENTENCE.captures(cleaned)?;
    let first = caps[1].trim().to_string();
    let rest = caps[2].trim();

    let mut spans = vec![Span::strong(first)];
    if !rest.is_empty() {
        spans.push(Span::plain(format!(" {rest}")));
    }
    Some(Highlight::Spans(spans))
}

/// Long, unsegmented text: emphasize the shorter of the first 60
/// characters and the first 5 whitespace-delimited words.
fn leading_words(cleaned: &str) -> Option<Highlight> {
    let words: Vec<&str> = cleaned.split_whitespace().collect();
    if words.len() <= 5 {
        return Some(Highlight::whole(cleaned));
    }

    let five = words[..5].join(" ");
    let cut = five.chars().count().min(60);
    let head: String = cleaned.chars().take(cut).collect();
    let rest: String = cleaned.chars().skip(cut).collect();

    Some(Highlight::Spans(vec![Span::strong(head), Span::plain(rest)]))
}
