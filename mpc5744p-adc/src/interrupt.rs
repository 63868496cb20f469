//! Global ADC interrupts
//!
//! The same layout is shared by the Interrupt Status Register (ISR, flags,
//! write 1 to clear) and the Interrupt Mask Register (IMR, enables).
//! Per-channel end of conversion interrupts are additionally gated by the
//! channel interrupt mask, see [`Adc::set_interrupts`].
//!
//! [`Adc::set_interrupts`]: crate::adc::Adc::set_interrupts
use crate::reg::RegisterValue;
use bitfield::bitfield;
use core::ops::BitOr;

bitfield! {
    /// A set of ADC interrupts.
    #[derive(Copy, Clone, Default, PartialEq, Eq)]
    pub struct InterruptSet(u32);

    /// End of CTU conversion
    pub eoctu, set_eoctu: 4;
    /// End of injected channel conversion
    pub jeoc, set_jeoc: 3;
    /// End of injected chain conversion
    pub jech, set_jech: 2;
    /// End of channel conversion
    pub eoc, set_eoc: 1;
    /// End of chain conversion
    pub ech, set_ech: 0;
}

impl InterruptSet {
    /// No interrupt
    pub const EMPTY: InterruptSet = InterruptSet(0);

    /// Raw register word
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if `interrupt` is in the set
    pub const fn contains(self, interrupt: Interrupt) -> bool {
        self.0 & (1 << interrupt as u32) != 0
    }

    /// An iterator visiting all elements in ascending bit order.
    pub fn iter(&self) -> Iter {
        Iter {
            flags: *self,
            index: 0,
        }
    }
}

impl From<Interrupt> for InterruptSet {
    fn from(interrupt: Interrupt) -> Self {
        InterruptSet(interrupt.into())
    }
}

impl FromIterator<Interrupt> for InterruptSet {
    fn from_iter<T: IntoIterator<Item = Interrupt>>(iter: T) -> Self {
        let mut set = 0_u32;
        for int in iter.into_iter() {
            set |= u32::from(int);
        }
        InterruptSet(set)
    }
}

impl BitOr<Interrupt> for InterruptSet {
    type Output = Self;

    fn bitor(self, rhs: Interrupt) -> Self {
        InterruptSet(self.0 | u32::from(rhs))
    }
}

impl RegisterValue for InterruptSet {
    fn from_bits(bits: u32) -> Self {
        InterruptSet(bits & 0x1f)
    }

    fn bits(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Debug for InterruptSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "InterruptSet {{ ")?;
        if self.eoctu() {
            write!(f, "EOCTU ")?;
        }
        if self.jeoc() {
            write!(f, "JEOC ")?;
        }
        if self.jech() {
            write!(f, "JECH ")?;
        }
        if self.eoc() {
            write!(f, "EOC ")?;
        }
        if self.ech() {
            write!(f, "ECH ")?;
        }
        write!(f, "}}")
    }
}

/// A single interrupt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interrupt {
    /// ECH
    EndOfChain = 0,
    /// EOC
    EndOfConversion = 1,
    /// JECH
    EndOfInjectedChain = 2,
    /// JEOC
    EndOfInjectedConversion = 3,
    /// EOCTU
    EndOfCtuConversion = 4,
}

impl From<Interrupt> for u32 {
    fn from(x: Interrupt) -> Self {
        1 << x as u32
    }
}

/// The bit number does not name an interrupt
#[derive(Debug)]
pub struct InvalidInterruptNumber;

impl TryFrom<u8> for Interrupt {
    type Error = InvalidInterruptNumber;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use Interrupt::*;
        let ret = match value {
            0 => EndOfChain,
            1 => EndOfConversion,
            2 => EndOfInjectedChain,
            3 => EndOfInjectedConversion,
            4 => EndOfCtuConversion,
            5.. => Err(InvalidInterruptNumber)?,
        };
        Ok(ret)
    }
}

/// An iterator over the items of an [`InterruptSet`].
///
/// This `struct` is created by [`InterruptSet::iter`].
pub struct Iter {
    flags: InterruptSet,
    index: u8,
}

impl Iterator for Iter {
    type Item = Interrupt;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index;
        self.index = self.index.saturating_add(1);
        // There are no gaps in the interrupt flags, so this is `Some` until all
        // interrupts have been checked.
        let int = i.try_into().ok()?;
        if self.flags.0 & (1 << i) != 0 {
            Some(int)
        } else {
            self.next()
        }
    }
}
