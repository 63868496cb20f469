//! Analog watchdog thresholds
//!
//! Each instance has sixteen threshold register pairs. A channel with its
//! watchdog enabled compares every converted value against the pair it is
//! bound to and raises a watchdog flag when the value falls outside.

/// Largest value a 12-bit threshold can hold
pub const MAX_THRESHOLD: u16 = 0x0FFF;

/// Index of a threshold register pair (`0..=15`)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdIndex(u8);

/// The number does not name a threshold register pair
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidThresholdIndex(pub u8);

impl ThresholdIndex {
    /// Number of threshold register pairs per instance
    pub const COUNT: u8 = 16;

    /// Fails for any index outside `0..=15`.
    pub const fn new(index: u8) -> Result<Self, InvalidThresholdIndex> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(InvalidThresholdIndex(index))
        }
    }

    /// Register pair number
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ThresholdIndex {
    type Error = InvalidThresholdIndex;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower and upper limit of a watchdog, in converter counts
///
/// Only the low 12 bits of each limit reach the hardware.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Threshold {
    /// Values below raise the low flag
    pub low: u16,
    /// Values above raise the high flag
    pub high: u16,
}

impl Threshold {
    /// Limits spanning the full converter range, never triggering
    pub const FULL_RANGE: Threshold = Threshold {
        low: 0,
        high: MAX_THRESHOLD,
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_range() {
        assert_eq!(ThresholdIndex::new(0).map(ThresholdIndex::index), Ok(0));
        assert_eq!(ThresholdIndex::try_from(15).map(|i| i.index()), Ok(15));
        assert_eq!(ThresholdIndex::new(16), Err(InvalidThresholdIndex(16)));
    }
}
