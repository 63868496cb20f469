//! Register layouts and typed access to them
//!
//! Each register the driver touches has a layout type implementing
//! [`RegisterValue`]. Registers that are plain per-channel bit masks use
//! [`ChannelSet`](crate::channel::ChannelSet); the interrupt registers use
//! [`InterruptSet`](crate::interrupt::InterruptSet); the watchdog flag and
//! mask registers are plain `u32`.
//!
//! [`Reg`] binds a layout to a named register of one instance and offers the
//! usual `read` / `write` / `modify` trio on top of [`RegisterAccess`].

use core::marker::PhantomData;
use mpc5744p_adc_core::{Instance, Register, RegisterAccess};

pub mod cdr;
pub mod ctr;
pub mod cwselr;
pub mod mcr;
pub mod msr;
pub mod pscr;
pub mod thrhlr;

pub use cdr::Cdr;
pub use ctr::Ctr;
pub use cwselr::Cwselr;
pub use mcr::Mcr;
pub use msr::Msr;
pub use pscr::Pscr;
pub use thrhlr::Thrhlr;

/// Conversion between a raw register word and its layout
pub trait RegisterValue: Copy {
    /// Interpret a raw register word
    fn from_bits(bits: u32) -> Self;
    /// Raw register word
    fn bits(&self) -> u32;
}

impl RegisterValue for u32 {
    fn from_bits(bits: u32) -> Self {
        bits
    }

    fn bits(&self) -> u32 {
        *self
    }
}

/// Implements [`RegisterValue`] for a `bitfield!` newtype over `u32`
macro_rules! register_value {
    ($layout:ty) => {
        impl $crate::reg::RegisterValue for $layout {
            fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            fn bits(&self) -> u32 {
                self.0
            }
        }
    };
}
pub(crate) use register_value;

/// A register of one ADC instance, viewed through layout `T`
pub struct Reg<'a, B, T> {
    access: &'a B,
    instance: Instance,
    register: Register,
    _layout: PhantomData<T>,
}

impl<'a, B: RegisterAccess, T: RegisterValue> Reg<'a, B, T> {
    pub(crate) fn new(access: &'a B, instance: Instance, register: Register) -> Self {
        Self {
            access,
            instance,
            register,
            _layout: PhantomData,
        }
    }

    /// Reads the register
    pub fn read(&self) -> T {
        T::from_bits(self.access.read(self.instance, self.register))
    }

    /// Writes the whole register. Fields not set in `value` are written as 0.
    pub fn write(&self, value: T) {
        self.access
            .write(self.instance, self.register, value.bits())
    }

    /// Read-modify-write. Fields left untouched by `f` keep their value.
    ///
    /// Must not be used on write-1-to-clear registers, as it would clear every
    /// flag that happens to be set.
    pub fn modify<F: FnOnce(&mut T)>(&self, f: F) {
        let mut value = self.read();
        f(&mut value);
        self.write(value);
    }
}
