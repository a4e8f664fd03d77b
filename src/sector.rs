//! CD sector layout and encoding.

use arrayref::{array_mut_ref, array_ref};

use crate::timecode::Timecode;

/// Size of one raw sector in bytes
pub const SECTOR_SIZE: usize = 2352;

/// Size of the sync pattern + header region at the start of a sector
pub const HEADER_SIZE: usize = 16;

/// Size of the payload that follows the header. This covers the whole rest
/// of the sector, so for Mode 1 it includes the area a full implementation
/// would fill with EDC/ECC.
pub const PAYLOAD_SIZE: usize = SECTOR_SIZE - HEADER_SIZE;

/// The 12-byte sync pattern at the start of every CD-ROM sector, used by
/// readers to locate sector boundaries
pub const SYNC_PATTERN: [u8; 12] = [
    0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00,
];

/// Mode byte for a Mode 1 data sector, the only variant emitted here
pub const MODE_1: u8 = 1;

/// Structure containing a single raw 2352-byte sector.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    /// Actual sector data
    #[cfg_attr(feature = "serde", serde(with = "serde_big_array::BigArray"))]
    data: [u8; SECTOR_SIZE],
}

impl Sector {
    /// Create an empty Mode 1 sector addressed at `tc`: the sync pattern
    /// and header are filled in, the payload is left entirely zero (no EDC
    /// or ECC is computed).
    ///
    /// The header stores the timecode as three BCD bytes in
    /// minute/second/frame order, followed by the mode byte.
    pub fn empty(tc: Timecode) -> Sector {
        let mut data = [0u8; SECTOR_SIZE];

        *array_mut_ref![data, 0, 12] = SYNC_PATTERN;

        let (m, s, f) = tc.to_bcd();

        data[12] = m.bcd();
        data[13] = s.bcd();
        data[14] = f.bcd();
        data[15] = MODE_1;

        Sector { data }
    }

    /// Retrieve the entire sector data
    pub fn data_2352(&self) -> &[u8; SECTOR_SIZE] {
        &self.data
    }

    /// Returns the raw 16-byte header for this sector (sync pattern, BCD
    /// address, mode byte)
    pub fn header_raw(&self) -> &[u8; HEADER_SIZE] {
        array_ref![self.data, 0, HEADER_SIZE]
    }
}

#[cfg(test)]
mod test {
    use super::{Sector, HEADER_SIZE, MODE_1, PAYLOAD_SIZE, SECTOR_SIZE, SYNC_PATTERN};
    use crate::timecode::Timecode;

    #[test]
    fn layout() {
        assert!(HEADER_SIZE + PAYLOAD_SIZE == SECTOR_SIZE);

        let sector = Sector::empty(Timecode::new(12, 34, 56));
        let data = sector.data_2352();

        assert!(data[..12] == SYNC_PATTERN);
        assert!(data[12] == 0x12);
        assert!(data[13] == 0x34);
        assert!(data[14] == 0x56);
        assert!(data[15] == MODE_1);
        assert!(data[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn header_raw() {
        let sector = Sector::empty(Timecode::ZERO);
        let header = sector.header_raw();

        assert!(header[..12] == SYNC_PATTERN);
        assert!(header[12..15] == [0, 0, 0]);
        assert!(header[15] == MODE_1);
    }

    #[test]
    fn bcd_header_bytes() {
        // 10 packs as 0x10, not 0x0a
        let sector = Sector::empty(Timecode::new(10, 0, 10));
        let header = sector.header_raw();

        assert!(header[12] == 0x10);
        assert!(header[14] == 0x10);
    }
}
