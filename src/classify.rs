//! Commit message classification by conventional-commit-style prefix.
//!
//! A fixed rule table maps a message prefix to a display label. Matching is
//! an exact, case-sensitive prefix check against the start of the message;
//! commits that match no rule contribute nothing to the release note.

/// A single prefix-to-label classification rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    /// The prefix that must start the commit message, colon included.
    pub prefix: &'static str,
    /// The label emitted at the start of the output line.
    pub label: &'static str,
}

/// Rules checked in order. Prefixes are disjoint, so at most one can match.
pub const RULES: [ClassificationRule; 3] = [
    ClassificationRule {
        prefix: "perf:",
        label: "[Performance]",
    },
    ClassificationRule {
        prefix: "fixed:",
        label: "[Fix]",
    },
    ClassificationRule {
        prefix: "feat:",
        label: "[Feature]",
    },
];

/// Find the rule whose prefix starts the message, if any.
pub fn classify(message: &str) -> Option<&'static ClassificationRule> {
    RULES.iter().find(|rule| message.starts_with(rule.prefix))
}

/// Format a release-note line for a message, or `None` if no rule matches.
///
/// Exactly the prefix characters are stripped from the message; the remainder
/// keeps its own leading whitespace, which supplies the separator after the
/// label. A trailing newline is always appended.
pub fn format_line(message: &str) -> Option<String> {
    classify(message).map(|rule| format!("{}{}\n", rule.label, &message[rule.prefix.len()..]))
}
