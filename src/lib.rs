//! Generation and inspection of raw Compact Disc (CD) pregap data.
//!
//! This crate produces the binary fragments needed when authoring a disc
//! image by hand: the zero-filled silence used as padding, and the run of
//! empty Mode 1 sectors (sync pattern, BCD timecode, mode byte, zero
//! payload) that makes up a data track's pregap. A small inspection helper
//! reads back an arbitrary byte range of a file for hex display.
//!
//! Each operation is a single one-shot write or read; there is no support
//! for parsing or validating existing images.

#![warn(missing_docs)]

pub use bcd::Bcd;
pub use sector::Sector;
pub use timecode::Timecode;

use std::io;
use thiserror::Error;

pub mod bcd;
pub mod inspect;
pub mod pregap;
pub mod sector;
pub mod timecode;

/// Error type for pregap generation and inspection.
#[allow(missing_docs)]
#[derive(Error, Debug)]
pub enum CdError {
    #[error("Generic I/O error")]
    IoError(#[from] io::Error),
    #[error("not enough data to read")]
    NotEnoughData,
}

/// Convenience type alias for a `Result<R, CdError>`
pub type CdResult<R> = std::result::Result<R, CdError>;

#[test]
fn cderror_display() {
    // Make sure that CdError implements Display. This should be true if we set an
    // `#[error("...")]` for every variant
    println!("{}", CdError::NotEnoughData);
}
