//! Pregap region generation.
//!
//! A data track's pregap is reproduced here in one fixed shape: a second's
//! worth of null bytes followed by two seconds of empty Mode 1 sectors
//! whose headers count up frame by frame from a caller-supplied timecode.
//! Audio tracks get plain silence with no sector structure at all.

use std::io::Write;

use crate::sector::{Sector, SECTOR_SIZE};
use crate::timecode::Timecode;
use crate::CdResult;

/// Bytes per second of CD audio: 44.1 kHz, 2 channels, 16 bits per sample
pub const AUDIO_BYTES_PER_SECOND: usize = 176_400;

/// Length of the null prefix written before the sectors of a data-track
/// pregap
pub const DATA_PREGAP_NULL_LEN: usize = AUDIO_BYTES_PER_SECOND;

/// Number of sectors in a data-track pregap: two seconds at 75 sectors per
/// second
pub const DATA_PREGAP_SECTORS: usize = 2 * 75;

/// Total length of a data-track pregap region
pub const DATA_PREGAP_LEN: usize = DATA_PREGAP_NULL_LEN + DATA_PREGAP_SECTORS * SECTOR_SIZE;

/// Length of an audio-track pregap: two seconds of silence
pub const AUDIO_PREGAP_LEN: usize = 2 * AUDIO_BYTES_PER_SECOND;

/// Write exactly `count` zero bytes to `w`. A `count` of 0 succeeds and
/// writes nothing.
pub fn write_null<W: Write>(w: &mut W, count: u64) -> CdResult<()> {
    const CHUNK: usize = 16 * 1024;

    let zeroes = [0u8; CHUNK];

    let mut left = count;

    while left > 0 {
        let n = left.min(CHUNK as u64) as usize;

        w.write_all(&zeroes[..n])?;
        left -= n as u64;
    }

    Ok(())
}

/// Write a full data-track pregap to `w`: [`DATA_PREGAP_NULL_LEN`] zero
/// bytes, then [`DATA_PREGAP_SECTORS`] empty Mode 1 sectors addressed from
/// `start`, advancing the timecode by one frame after every sector.
///
/// The timecode advanced past the last sector is discarded; `w` ends up
/// exactly [`DATA_PREGAP_LEN`] bytes longer.
pub fn write_pregap<W: Write>(w: &mut W, start: Timecode) -> CdResult<()> {
    write_null(w, DATA_PREGAP_NULL_LEN as u64)?;

    let mut tc = start;

    for _ in 0..DATA_PREGAP_SECTORS {
        let sector = Sector::empty(tc);

        w.write_all(sector.data_2352())?;

        tc.advance();
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{
        write_null, write_pregap, DATA_PREGAP_LEN, DATA_PREGAP_NULL_LEN, DATA_PREGAP_SECTORS,
    };
    use crate::sector::{SECTOR_SIZE, SYNC_PATTERN};
    use crate::timecode::Timecode;

    #[test]
    fn null_counts() {
        for &count in &[0u64, 1, 176_400, 352_800] {
            let mut out = Vec::new();

            write_null(&mut out, count).unwrap();

            assert!(out.len() as u64 == count);
            assert!(out.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn pregap_length() {
        let mut out = Vec::new();

        write_pregap(&mut out, Timecode::ZERO).unwrap();

        assert!(out.len() == DATA_PREGAP_LEN);
        assert!(out.len() == 529_200);
    }

    #[test]
    fn pregap_null_prefix() {
        let mut out = Vec::new();

        write_pregap(&mut out, Timecode::new(0, 2, 0)).unwrap();

        assert!(out[..DATA_PREGAP_NULL_LEN].iter().all(|&b| b == 0));
    }

    #[test]
    fn pregap_sector_sequence() {
        let start = Timecode::new(0, 2, 0);

        let mut out = Vec::new();

        write_pregap(&mut out, start).unwrap();

        let mut tc = start;

        for i in 0..DATA_PREGAP_SECTORS {
            let off = DATA_PREGAP_NULL_LEN + i * SECTOR_SIZE;
            let sector = &out[off..off + SECTOR_SIZE];

            let (m, s, f) = tc.to_bcd();

            assert!(sector[..12] == SYNC_PATTERN);
            assert!(sector[12] == m.bcd());
            assert!(sector[13] == s.bcd());
            assert!(sector[14] == f.bcd());
            assert!(sector[15] == 1);

            tc.advance();
        }

        // 150 sectors starting at 00:02:00 end just short of 00:04:00
        assert!(tc == Timecode::new(0, 4, 0));
    }
}
