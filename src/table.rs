//! The ordered corruption table: known mojibake sequences and their fixes.
//!
//! Every key is a corrupted character sequence produced by decoding UTF-8
//! bytes as Latin-1/Windows-1252; every value is the text those bytes
//! originally spelled. Order matters: irregular whole-word entries come
//! first so they win over the generic per-letter entries that would
//! otherwise fire inside them.

/// The corruption table, applied top to bottom.
///
/// Invisible characters are spelled out as escapes: `\u{a0}` (no-break
/// space) and `\u{ad}` (soft hyphen) are the second halves of the mojibake
/// forms of `à`, `Š`, and `í`.
pub const ENTRIES: &[(&str, &str)] = &[
    // Irregular corruptions observed in real datasets. These must stay ahead
    // of the two-character entries below: "Bayč±ndč±r" contains "č±" twice,
    // and the whole-word fix is the correct one.
    ("Bayč±ndč±r", "Bayındır"),
    ("Lukič‡", "Lukić"),
    ("ndč±r", "ndır"),
    ("č±", "ı"),
    ("č‡", "ć"),
    // Lowercase accented Latin letters.
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã¡", "á"),
    ("Ã\u{a0}", "à"),
    ("Ã¢", "â"),
    ("Ã£", "ã"),
    ("Ã¤", "ä"),
    ("Ã¥", "å"),
    ("Ã\u{ad}", "í"),
    ("Ã¬", "ì"),
    ("Ã®", "î"),
    ("Ã¯", "ï"),
    ("Ã³", "ó"),
    ("Ã²", "ò"),
    ("Ã´", "ô"),
    ("Ãµ", "õ"),
    ("Ã¶", "ö"),
    ("Ãº", "ú"),
    ("Ã¹", "ù"),
    ("Ã»", "û"),
    ("Ã¼", "ü"),
    ("Ã½", "ý"),
    ("Ã¿", "ÿ"),
    ("Ã±", "ñ"),
    ("Ã§", "ç"),
    // Uppercase accented Latin letters.
    ("Ã‰", "É"),
    ("Ãˆ", "È"),
    ("ÃŠ", "Ê"),
    ("Ã‹", "Ë"),
    ("Ã€", "À"),
    ("Ã‚", "Â"),
    ("Ãƒ", "Ã"),
    ("Ã„", "Ä"),
    ("Ã…", "Å"),
    ("ÃŒ", "Ì"),
    ("ÃŽ", "Î"),
    ("Ã“", "Ó"),
    ("Ã”", "Ô"),
    ("Ã•", "Õ"),
    ("Ã–", "Ö"),
    ("Ãš", "Ú"),
    ("Ã™", "Ù"),
    ("Ã›", "Û"),
    ("Ãœ", "Ü"),
    ("Ã‡", "Ç"),
    // Nordic and Baltic letters.
    ("Ã¸", "ø"),
    ("Ã˜", "Ø"),
    ("Ã¦", "æ"),
    ("Ã†", "Æ"),
    ("Ã°", "ð"),
    // Eastern European and Turkish letters.
    ("Ä‡", "ć"),
    ("Ä†", "Ć"),
    ("Ä±", "ı"),
    ("Ä°", "İ"),
    ("Å‚", "ł"),
    ("Å„", "ń"),
    ("Åƒ", "Ń"),
    ("Å¡", "š"),
    ("Å\u{a0}", "Š"),
    ("Å¾", "ž"),
    ("Å½", "Ž"),
];

/// Exact-key lookup, used on marker windows during the reversal pass.
pub fn lookup(sequence: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|(corrupt, _)| *corrupt == sequence)
        .map(|(_, fixed)| *fixed)
}

/// Replace every occurrence of every table entry, in table order.
pub fn apply(text: &str) -> String {
    let mut result = text.to_string();
    for (corrupt, fixed) in ENTRIES {
        if result.contains(corrupt) {
            result = result.replace(corrupt, fixed);
        }
    }
    result
}

/// Count occurrences of known corrupt sequences, for before/after reporting.
/// Overlapping keys each count, so this is a diagnostic measure, not an
/// exact number of broken characters.
pub fn count_corrupt_sequences(text: &str) -> usize {
    ENTRIES
        .iter()
        .map(|(corrupt, _)| text.matches(corrupt).count())
        .sum()
}
