//! Precision channels and channel masks
use crate::reg::RegisterValue;
use core::ops::{BitOr, BitOrAssign};

/// A single precision channel
///
/// On ADC_0 and ADC_1 channels 9, 10 and 15 are internally connected
/// (channel 15 to the temperature sensor) and have no pad.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// AN0
    Ch0 = 0,
    /// AN1
    Ch1 = 1,
    /// AN2
    Ch2 = 2,
    /// AN3
    Ch3 = 3,
    /// AN4
    Ch4 = 4,
    /// AN5
    Ch5 = 5,
    /// AN6
    Ch6 = 6,
    /// AN7
    Ch7 = 7,
    /// AN8
    Ch8 = 8,
    /// AN9
    Ch9 = 9,
    /// AN10
    Ch10 = 10,
    /// AN11
    Ch11 = 11,
    /// AN12
    Ch12 = 12,
    /// AN13
    Ch13 = 13,
    /// AN14
    Ch14 = 14,
    /// AN15
    Ch15 = 15,
}

/// The number does not name a precision channel
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannel(pub u8);

impl Channel {
    /// All channels in ascending order
    pub const ALL: [Channel; 16] = [
        Self::Ch0,
        Self::Ch1,
        Self::Ch2,
        Self::Ch3,
        Self::Ch4,
        Self::Ch5,
        Self::Ch6,
        Self::Ch7,
        Self::Ch8,
        Self::Ch9,
        Self::Ch10,
        Self::Ch11,
        Self::Ch12,
        Self::Ch13,
        Self::Ch14,
        Self::Ch15,
    ];

    /// Channel number
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl From<Channel> for u32 {
    fn from(x: Channel) -> Self {
        1 << x as u32
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidChannel(value))
    }
}

/// A set of precision channels, in the layout of the per-channel mask and
/// flag registers (bit `n` is channel `n`)
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSet(u32);

impl ChannelSet {
    /// No channel
    pub const EMPTY: ChannelSet = ChannelSet(0);
    /// Every precision channel
    pub const ALL: ChannelSet = ChannelSet(0xFFFF);

    /// Builds a set from a raw mask. Bits above channel 15 are dropped.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw mask
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if `channel` is in the set
    pub const fn contains(self, channel: Channel) -> bool {
        self.0 & (1 << channel as u32) != 0
    }

    /// Adds `channel` to the set
    pub fn insert(&mut self, channel: Channel) {
        self.0 |= u32::from(channel);
    }

    /// Removes `channel` from the set
    pub fn remove(&mut self, channel: Channel) {
        self.0 &= !u32::from(channel);
    }

    /// Returns `true` if no channel is in the set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of channels in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// An iterator visiting the channels in ascending order.
    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            index: 0,
        }
    }
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        Self(channel.into())
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<T: IntoIterator<Item = Channel>>(iter: T) -> Self {
        let mut set = 0_u32;
        for channel in iter.into_iter() {
            set |= u32::from(channel);
        }
        ChannelSet(set)
    }
}

impl BitOr for ChannelSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Channel> for ChannelSet {
    type Output = Self;

    fn bitor(self, rhs: Channel) -> Self {
        Self(self.0 | u32::from(rhs))
    }
}

impl BitOrAssign<Channel> for ChannelSet {
    fn bitor_assign(&mut self, rhs: Channel) {
        self.insert(rhs);
    }
}

impl RegisterValue for ChannelSet {
    fn from_bits(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }

    fn bits(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Debug for ChannelSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An iterator over the channels of a [`ChannelSet`].
///
/// This `struct` is created by [`ChannelSet::iter`].
pub struct Iter {
    set: ChannelSet,
    index: u8,
}

impl Iterator for Iter {
    type Item = Channel;

    fn next(&mut self) -> Option<Self::Item> {
        while let Ok(channel) = Channel::try_from(self.index) {
            self.index += 1;
            if self.set.contains(channel) {
                return Some(channel);
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iter_preserves_length() {
        assert_eq!(ChannelSet(0).iter().count(), 0);
        assert_eq!(ChannelSet(1).iter().count(), 1);
        assert_eq!(ChannelSet(0x5555).iter().count(), 8);
        assert_eq!(ChannelSet::ALL.iter().count(), 16);
    }

    #[test]
    fn iter_collect_preserves_channels() {
        for bits in [0, 1, 0x0103, 0x5555, 0xaaaa, 0xffff] {
            let set = ChannelSet::from_bits_truncate(bits);
            assert_eq!(set.iter().collect::<ChannelSet>(), set);
        }
    }

    #[test]
    fn raw_masks_drop_bits_above_channel_15() {
        assert_eq!(ChannelSet::from_bits_truncate(0xffff_ffff), ChannelSet::ALL);
        assert_eq!(ChannelSet::from_bits(0x0001_0002).bits(), 0x0002);
    }

    #[test]
    fn channel_numbers_round_trip() {
        assert_eq!(Channel::try_from(8), Ok(Channel::Ch8));
        assert_eq!(Channel::try_from(16), Err(InvalidChannel(16)));
        assert_eq!(u32::from(Channel::Ch15), 0x8000);
    }

    #[test]
    fn set_operations() {
        let mut set = ChannelSet::from(Channel::Ch0) | Channel::Ch5;
        set |= Channel::Ch14;
        assert!(set.contains(Channel::Ch5));
        assert_eq!(set.len(), 3);
        set.remove(Channel::Ch5);
        assert!(!set.contains(Channel::Ch5));
        assert_eq!(set.bits(), 0x4001);
    }
}
