//! Byte-range inspection of image files.
//!
//! This is the read-back half of the crate: it fetches an arbitrary slice
//! of a file and renders it as hexadecimal so a generated region can be
//! eyeballed without a dedicated image viewer.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::{CdError, CdResult};

/// Read `size` bytes at byte offset `skip` from the file at `path`.
///
/// The whole requested range must lie within the file: if `skip + size`
/// exceeds the file's length this fails with [`CdError::NotEnoughData`]
/// instead of returning a short read.
pub fn read_range(path: &Path, size: u64, skip: u64) -> CdResult<Vec<u8>> {
    let mut file = File::open(path)?;

    let file_size = file.metadata()?.len();

    let end = skip.checked_add(size).ok_or(CdError::NotEnoughData)?;

    if end > file_size {
        return Err(CdError::NotEnoughData);
    }

    file.seek(SeekFrom::Start(skip))?;

    let mut bytes = vec![0u8; size as usize];

    file.read_exact(&mut bytes)?;

    Ok(bytes)
}

/// Render `bytes` to `w` as lowercase two-digit hex values, each followed
/// by a single space, with a terminating newline.
pub fn write_hex<W: Write>(w: &mut W, bytes: &[u8]) -> CdResult<()> {
    for b in bytes {
        write!(w, "{:02x} ", b)?;
    }

    writeln!(w)?;

    Ok(())
}
