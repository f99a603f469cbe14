//! Fold request domain: method catalogue, sequence normalization, and
//! submission bounds.
//!
//! The HTTP layer validates every submission through these functions
//! before a solver process is spawned.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum accepted length of a raw submitted sequence.
pub const MIN_SEQUENCE_LEN: usize = 10;

/// Default upper bound on normalized sequence length.
pub const DEFAULT_MAX_SEQUENCE_LEN: usize = 6000;

/// Minimum thread count a submission may request.
pub const MIN_THREADS: u32 = 1;

/// Maximum thread count a submission may request.
pub const MAX_THREADS: u32 = 64;

/// Method names accepted by the solver binary, in CLI spelling.
pub const ALLOWED_METHODS: &[&str] = &["oryg", "tstile", "tilecorr", "pluto", "3D"];

// ---------------------------------------------------------------------------
// Folding methods
// ---------------------------------------------------------------------------

/// Parallelization strategy the solver runs the fold with.
///
/// The set is closed: the solver binary only understands these five
/// spellings, so unknown names are rejected before a process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldMethod {
    Oryg,
    TsTile,
    TileCorr,
    Pluto,
    ThreeD,
}

impl FoldMethod {
    /// Parse from the wire/CLI spelling.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "oryg" => Ok(Self::Oryg),
            "tstile" => Ok(Self::TsTile),
            "tilecorr" => Ok(Self::TileCorr),
            "pluto" => Ok(Self::Pluto),
            "3D" => Ok(Self::ThreeD),
            other => Err(CoreError::Validation(format!(
                "Unknown folding method '{other}'. Must be one of: {ALLOWED_METHODS:?}"
            ))),
        }
    }

    /// Wire/CLI spelling passed to the solver binary.
    pub fn name(self) -> &'static str {
        match self {
            Self::Oryg => "oryg",
            Self::TsTile => "tstile",
            Self::TileCorr => "tilecorr",
            Self::Pluto => "pluto",
            Self::ThreeD => "3D",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Oryg => "Original sweep",
            Self::TsTile => "Time-skewed tiling",
            Self::TileCorr => "Tiling with correction pass",
            Self::Pluto => "Pluto-scheduled tiling",
            Self::ThreeD => "3D blocking",
        }
    }
}

// ---------------------------------------------------------------------------
// Sequence handling
// ---------------------------------------------------------------------------

/// Strip line breaks and uppercase a raw submitted sequence.
///
/// Submissions pasted from FASTA viewers arrive with embedded newlines
/// and mixed case; the solver expects one contiguous uppercase string.
pub fn normalize_sequence(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .to_uppercase()
}

/// Validate the length of a sequence as submitted, before normalization.
pub fn validate_raw_sequence(raw: &str) -> Result<(), CoreError> {
    if raw.len() < MIN_SEQUENCE_LEN {
        return Err(CoreError::Validation(format!(
            "Sequence must be at least {MIN_SEQUENCE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate the length of a normalized sequence against the configured cap.
pub fn validate_normalized_sequence(seq: &str, max_len: usize) -> Result<(), CoreError> {
    if seq.len() > max_len {
        return Err(CoreError::Validation(format!(
            "Sequence too long ({} > {max_len})",
            seq.len()
        )));
    }
    Ok(())
}

/// Validate a requested thread count.
pub fn validate_threads(threads: u32) -> Result<(), CoreError> {
    if !(MIN_THREADS..=MAX_THREADS).contains(&threads) {
        return Err(CoreError::Validation(format!(
            "Thread count must be between {MIN_THREADS} and {MAX_THREADS}, got {threads}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
