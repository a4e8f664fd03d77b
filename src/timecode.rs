//! Positions on a CD are addressed in "minute:second:frame" format,
//! inherited from the disc's audio origins. There are 75 frames (sectors)
//! in a second and 60 seconds in a minute.
//!
//! The components here are plain decimal values; they are only packed to
//! BCD when a sector header is serialized.

use std::fmt;

use crate::bcd::Bcd;

/// Decimal "minute:second:frame" timecode.
///
/// The minute has no upper bound: it keeps counting past 99, at which point
/// the BCD packing of the header becomes nonsensical (see
/// [`Bcd::from_binary`]). Out-of-range seconds or frames supplied by the
/// caller are not rejected either; they re-normalize on the next
/// [`advance`](Timecode::advance).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timecode {
    minute: u32,
    second: u32,
    frame: u32,
}

impl Timecode {
    /// Timecode for 00:00:00
    pub const ZERO: Timecode = Timecode {
        minute: 0,
        second: 0,
        frame: 0,
    };

    /// Build a timecode from decimal components, taken as given.
    pub const fn new(minute: u32, second: u32, frame: u32) -> Timecode {
        Timecode {
            minute,
            second,
            frame,
        }
    }

    /// Returns the value of the minutes in this timecode
    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Returns the value of the seconds in this timecode
    pub const fn second(self) -> u32 {
        self.second
    }

    /// Returns the value of the frames in this timecode
    pub const fn frame(self) -> u32 {
        self.frame
    }

    /// Advance by one frame, carrying into the seconds and minutes.
    ///
    /// The carry stages run in sequence: the second stage looks at the
    /// seconds after the frame stage has run, whether or not the frames
    /// rolled over. The minute never wraps.
    pub fn advance(&mut self) {
        self.frame += 1;

        if self.frame > 74 {
            self.frame = 0;
            self.second += 1;
        }

        if self.second > 59 {
            self.second = 0;
            self.minute += 1;
        }
    }

    /// Pack the three components to BCD, in on-disc header order
    /// (minute, second, frame).
    pub const fn to_bcd(self) -> (Bcd, Bcd, Bcd) {
        (
            Bcd::from_binary(self.minute),
            Bcd::from_binary(self.second),
            Bcd::from_binary(self.frame),
        )
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{:02}:{:02}:{:02}",
            self.minute, self.second, self.frame
        )
    }
}

impl fmt::Debug for Timecode {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self)
    }
}
