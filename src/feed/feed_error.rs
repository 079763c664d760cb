use thiserror::Error;

/// Errors that abort a whole normalization pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("Invalid XML format: {0}")]
    MalformedDocument(String),
    #[error("No vehicles found in XML")]
    NoEntries,
}

/// Why a single entry was left out of the normalized output.
///
/// These never leave the normalizer; they are logged and the entry is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry {position} has no brand")]
    MissingBrand { position: usize },
}

/// Acquisition failures from the network collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Feed responded with HTTP {status}")]
    Status { status: u16 },
}
