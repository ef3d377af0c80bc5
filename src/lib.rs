//! Text-repair engine for UTF-8/Latin-1 mojibake.
//!
//! `fix_text` runs four stages in order: the literal corruption table, a
//! reversal pass over `Ã`-marker windows (which also strips control
//! characters and decode artifacts), a guarded whole-buffer double-decode
//! reversal, and NFC normalization. Each stage is a pure transform; the
//! table and rule list are built once per process.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

pub mod file;
pub mod table;

pub use file::{repair_file, RepairError, RepairReport, SourceEncoding};

/// What to do with text matched by a [`ReplacementRule`].
enum RuleAction {
    /// Substitute a fixed string (empty string deletes the match).
    Literal(&'static str),
    /// Fix the matched marker window: table lookup first, then a Latin-1
    /// round trip, else leave the window as it was.
    ReverseWindow,
}

/// A detection pattern paired with its action. Rules run once each, in
/// order; they are never re-applied to their own output.
struct ReplacementRule {
    pattern: Regex,
    action: RuleAction,
}

lazy_static! {
    // Pre-compiled at first use, in the order the stage applies them:
    // marker windows, control characters, the mis-encoded no-break space,
    // and leftover replacement glyphs from earlier lossy decoding.
    static ref REPLACEMENT_RULES: Vec<ReplacementRule> = vec![
        ReplacementRule {
            // The lead character of a mis-decoded two-byte UTF-8 sequence,
            // plus the one character that follows it.
            pattern: Regex::new("Ã.").unwrap(),
            action: RuleAction::ReverseWindow,
        },
        ReplacementRule {
            // C0 controls and DEL, minus tab/newline/carriage return.
            pattern: Regex::new("[\\x00-\\x08\\x0B\\x0C\\x0E-\\x1F\\x7F]").unwrap(),
            action: RuleAction::Literal(""),
        },
        ReplacementRule {
            // U+00A0 mangled through one Latin-1 round trip.
            pattern: Regex::new("Â\u{a0}").unwrap(),
            action: RuleAction::Literal(" "),
        },
        ReplacementRule {
            pattern: Regex::new("\u{fffd}").unwrap(),
            action: RuleAction::Literal(""),
        },
    ];
}

/// Reinterpret each char's codepoint as a Latin-1 byte and decode the byte
/// sequence as UTF-8. `None` when a char is above U+00FF or the bytes are
/// not valid UTF-8; callers fall back to their input explicitly.
fn latin1_round_trip(text: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        let code = c as u32;
        if code > 0xFF {
            return None;
        }
        bytes.push(code as u8);
    }
    String::from_utf8(bytes).ok()
}

/// Stage 2: fix marker windows and strip decode artifacts, one linear pass
/// per rule. Window matches consume two characters, so they never overlap.
fn reverse_marker_sequences(text: &str) -> String {
    let mut result = text.to_string();
    for rule in REPLACEMENT_RULES.iter() {
        match rule.action {
            RuleAction::Literal(replacement) => {
                result = rule.pattern.replace_all(&result, replacement).into_owned();
            }
            RuleAction::ReverseWindow => {
                result = rule
                    .pattern
                    .replace_all(&result, |caps: &regex::Captures| {
                        let window = caps.get(0).unwrap().as_str();
                        if let Some(fixed) = table::lookup(window) {
                            return fixed.to_string();
                        }
                        match latin1_round_trip(window) {
                            Some(fixed) => fixed,
                            None => window.to_string(),
                        }
                    })
                    .into_owned();
            }
        }
    }
    result
}

/// Trigger characters that mark likely double-encoded text: the marker
/// itself, the lead of mangled smart punctuation, and the wrong-accent lead.
fn has_double_encoding_marks(text: &str) -> bool {
    text.contains('Ã') || text.contains("â€") || text.contains('Â')
}

/// Stage 3: whole-buffer reversal of one double-encoding layer.
///
/// The attempt is only made while trigger characters remain, and is only
/// accepted if the result is no longer than the input (a real reversal
/// collapses multi-character garble) and the two strongest triggers are
/// gone. Anything else keeps the input, so correct text that merely
/// contains a literal `Ã` passes through untouched.
fn reverse_double_encoding(text: &str) -> String {
    if !has_double_encoding_marks(text) {
        return text.to_string();
    }
    match latin1_round_trip(text) {
        Some(reversed)
            if reversed.chars().count() <= text.chars().count()
                && !reversed.contains('Ã')
                && !reversed.contains("â€") =>
        {
            reversed
        }
        _ => text.to_string(),
    }
}

/// Run the full repair pipeline over one text buffer.
pub fn fix_text(text: &str) -> String {
    let text = table::apply(text);
    let text = reverse_marker_sequences(&text);
    let text = reverse_double_encoding(&text);
    text.nfc().collect()
}
