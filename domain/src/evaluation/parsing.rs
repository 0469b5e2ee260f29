//! Judge response parsing.
//!
//! Turns the free-form text returned by the LLM judge into a [`Verdict`].
//! Pure domain logic: no I/O, just text pattern matching.
//!
//! | Response starts with | Verdict |
//! |----------------------|---------|
//! | `SATISFACTORY` / `SATISFACTORIA` | [`Verdict::Accepted`] |
//! | `NEEDS_CLARIFICATION: <reason>` / `NECESITA_CLARIFICACION: <reason>` | [`Verdict::NeedsClarification`] |
//! | anything else | [`Verdict::Accepted`] (lenient default) |

use super::verdict::Verdict;

const ACCEPT_TOKENS: &[&str] = &["SATISFACTORY", "SATISFACTORIA"];
const CLARIFY_TOKENS: &[&str] = &[
    "NEEDS_CLARIFICATION",
    "NEEDS CLARIFICATION",
    "NECESITA_CLARIFICACION",
    "NECESITA_CLARIFICACIÓN",
];

/// Parse a judge response into a verdict.
///
/// Matching is case-insensitive and ignores leading quotes, backticks,
/// asterisks and whitespace the model sometimes wraps the token in.
/// Lenient: unrecognized output is treated as accepted.
///
/// # Examples
///
/// ```
/// use interview_domain::{Verdict, parse_judge_response};
///
/// assert_eq!(parse_judge_response("SATISFACTORY"), Verdict::Accepted);
/// assert_eq!(
///     parse_judge_response("NEEDS_CLARIFICATION: the answer is off-topic"),
///     Verdict::NeedsClarification("the answer is off-topic".to_string())
/// );
/// assert_eq!(parse_judge_response("I think it is fine"), Verdict::Accepted);
/// ```
pub fn parse_judge_response(response: &str) -> Verdict {
    let cleaned = response.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '*' | '-')
    });
    let upper = cleaned.to_uppercase();

    if ACCEPT_TOKENS.iter().any(|t| upper.starts_with(t)) {
        return Verdict::Accepted;
    }

    for token in CLARIFY_TOKENS {
        if upper.starts_with(token) {
            // Skip by chars: the accented token is not ASCII.
            let rest: String = cleaned.chars().skip(token.chars().count()).collect();
            let reason = rest
                .trim_start_matches(|c: char| matches!(c, ':' | '*' | '-') || c.is_whitespace())
                .trim_end_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*') || c.is_whitespace());
            return Verdict::needs_clarification(reason);
        }
    }

    Verdict::Accepted
}
