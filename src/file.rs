//! File-level repair: trial decode, the repair engine, strict UTF-8 write.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{fix_text, table};

/// Candidate source encodings, tried in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Iso8859_1,
}

impl SourceEncoding {
    /// Trial order: UTF-8 first, then the single-byte codepages.
    pub const CANDIDATES: &[SourceEncoding] = &[
        SourceEncoding::Utf8,
        SourceEncoding::Latin1,
        SourceEncoding::Windows1252,
        SourceEncoding::Iso8859_1,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Latin1 => "latin1",
            SourceEncoding::Windows1252 => "windows-1252",
            SourceEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decode `bytes` under this encoding. UTF-8 decodes strictly so that
    /// genuinely non-UTF-8 input falls through to the single-byte
    /// candidates and the reported encoding stays meaningful; the
    /// single-byte decodes are total.
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            SourceEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            SourceEncoding::Latin1 | SourceEncoding::Iso8859_1 => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
            SourceEncoding::Windows1252 => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                Some(decoded.into_owned())
            }
        }
    }
}

/// Errors that reach the invocation boundary. Reversal failures inside the
/// engine never surface here; they fall back to the unreversed buffer.
#[derive(Debug, Error)]
pub enum RepairError {
    #[error("source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Defensive only: the Latin-1 candidate accepts any byte sequence, so
    /// the trial loop cannot actually exhaust its candidates.
    #[error("could not decode {} with any supported encoding", path.display())]
    UnreadableInput { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What a repair run did, for reporting.
#[derive(Debug)]
pub struct RepairReport {
    pub encoding: SourceEncoding,
    pub corrupt_before: usize,
    pub corrupt_after: usize,
    pub destination: PathBuf,
}

fn decode_with_candidates(bytes: &[u8]) -> Option<(String, SourceEncoding)> {
    for &candidate in SourceEncoding::CANDIDATES {
        if let Some(content) = candidate.decode(bytes) {
            debug!(encoding = candidate.label(), "decoded source");
            return Some((content, candidate));
        }
    }
    None
}

/// Repair one file. `dest` defaults to `source` (in-place rewrite). The
/// whole corrected buffer is written as UTF-8, line endings untouched;
/// on error nothing is written.
pub fn repair_file(source: &Path, dest: Option<&Path>) -> Result<RepairReport, RepairError> {
    if !source.exists() {
        return Err(RepairError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    let destination = dest.unwrap_or(source).to_path_buf();

    let bytes = fs::read(source)?;
    let (content, encoding) =
        decode_with_candidates(&bytes).ok_or_else(|| RepairError::UnreadableInput {
            path: source.to_path_buf(),
        })?;

    let corrupt_before = table::count_corrupt_sequences(&content);
    let fixed = fix_text(&content);
    let corrupt_after = table::count_corrupt_sequences(&fixed);

    fs::write(&destination, fixed.as_bytes())?;

    Ok(RepairReport {
        encoding,
        corrupt_before,
        corrupt_after,
        destination,
    })
}
