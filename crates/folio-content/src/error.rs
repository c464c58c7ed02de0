//! Internal inspection errors.
//!
//! These exist for the I/O plumbing only. At the public
//! [`crate::validate_manuscript`] boundary every expected failure is
//! folded into a structured `ContentIssue` so the edition workflow never
//! has to unwind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ContentError>;
