#![no_std]
#![warn(missing_docs)]

//! `mpc5744p-adc-core` provides a set of essential abstractions that serve as
//! a thin integration layer between the [`mpc5744p-adc`] driver and the code
//! that actually owns the silicon (a target HAL, a board support crate or a
//! software fake used in tests).
//!
//! The driver never touches a fixed address on its own. Every register access
//! goes through [`RegisterAccess`] and every pad reconfiguration goes through
//! [`PadControl`], both of which are handed to the driver at construction.
//!
//! Integrators of this crate are responsible for soundness of trait
//! implementations and conforming to their respective safety prerequisites.
//!
//! [`mpc5744p-adc`]: <https://docs.rs/crate/mpc5744p-adc/>

pub use fugit;

/// One of the four SAR ADC instances of the MPC5744P
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instance {
    /// ADC_0
    Adc0 = 0,
    /// ADC_1
    Adc1 = 1,
    /// ADC_2
    Adc2 = 2,
    /// ADC_3
    Adc3 = 3,
}

/// The index does not name an ADC instance
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidInstance(pub u8);

/// Base addresses of the register blocks, indexed by [`Instance::index`]
const BASE_ADDRESSES: [usize; 4] = [0xFFE0_0000, 0xFFE0_4000, 0xFBE0_0000, 0xFBE0_4000];

impl Instance {
    /// All instances in index order
    pub const ALL: [Instance; 4] = [Self::Adc0, Self::Adc1, Self::Adc2, Self::Adc3];

    /// Strict lookup. Fails for any index outside `0..=3`.
    pub const fn new(index: u8) -> Result<Self, InvalidInstance> {
        match index {
            0 => Ok(Self::Adc0),
            1 => Ok(Self::Adc1),
            2 => Ok(Self::Adc2),
            3 => Ok(Self::Adc3),
            _ => Err(InvalidInstance(index)),
        }
    }

    /// Aliasing lookup used by the driver's index based API.
    ///
    /// Indices `0..=3` select their instance. Any other index selects
    /// [`Instance::Adc0`]; no error is reported. Use [`Instance::new`] where
    /// an invalid index must be rejected.
    pub const fn from_index(index: u8) -> Self {
        match Self::new(index) {
            Ok(instance) => instance,
            Err(_) => Self::Adc0,
        }
    }

    /// Position of the instance in [`Instance::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Start of the memory mapped register block
    pub const fn base_address(self) -> usize {
        BASE_ADDRESSES[self.index()]
    }
}

impl From<u8> for Instance {
    fn from(index: u8) -> Self {
        Self::from_index(index)
    }
}

/// Named registers of a single ADC register block
///
/// Only the registers used by the driver are listed. Indexed registers carry
/// their index; the threshold registers accept `0..=15` and the channel data
/// registers `0..=95`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Main Configuration Register
    Mcr,
    /// Main Status Register
    Msr,
    /// Interrupt Status Register
    Isr,
    /// Channel Pending Register 0 (end of conversion flags)
    Ceocfr0,
    /// Interrupt Mask Register
    Imr,
    /// Channel Interrupt Mask Register 0
    Cimr0,
    /// Watchdog Threshold Interrupt Status Register
    Wtisr,
    /// Watchdog Threshold Interrupt Mask Register
    Wtimr,
    /// Presampling Control Register
    Pscr,
    /// Presampling Register 0
    Psr0,
    /// Conversion Timing Register 0
    Ctr0,
    /// Normal Conversion Mask Register 0
    Ncmr0,
    /// Injected Conversion Mask Register 0
    Jcmr0,
    /// Channel Watchdog Select Register 0 (channels 0..=7)
    Cwselr0,
    /// Channel Watchdog Select Register 1 (channels 8..=15)
    Cwselr1,
    /// Channel Watchdog Enable Register 0
    Cwenr0,
    /// Analog Watchdog Threshold Values Register `n`
    Thrhlr(u8),
    /// Channel Data Register `n`
    Cdr(u8),
}

impl Register {
    /// Byte offset from the start of the instance's register block
    pub const fn offset(self) -> usize {
        match self {
            Self::Mcr => 0x000,
            Self::Msr => 0x004,
            Self::Isr => 0x010,
            Self::Ceocfr0 => 0x014,
            Self::Imr => 0x020,
            Self::Cimr0 => 0x024,
            Self::Wtisr => 0x030,
            Self::Wtimr => 0x034,
            // THRHLR0..=3 live in the legacy window, the rest further up
            Self::Thrhlr(n @ 0..=3) => 0x060 + 4 * n as usize,
            Self::Thrhlr(n) => 0x280 + 4 * (n as usize - 4),
            Self::Pscr => 0x080,
            Self::Psr0 => 0x084,
            Self::Ctr0 => 0x094,
            Self::Ncmr0 => 0x0A4,
            Self::Jcmr0 => 0x0B4,
            Self::Cdr(n) => 0x100 + 4 * n as usize,
            Self::Cwselr0 => 0x2B0,
            Self::Cwselr1 => 0x2B4,
            Self::Cwenr0 => 0x2E0,
        }
    }
}

/// SIUL2 port
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Port A
    A = 0,
    /// Port B
    B,
    /// Port C
    C,
    /// Port D
    D,
    /// Port E
    E,
    /// Port F
    F,
    /// Port G
    G,
    /// Port H
    H,
    /// Port I
    I,
    /// Port J
    J,
}

/// A single SIUL2 pad, e.g. `PB7`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pad {
    /// Port the pad belongs to
    pub port: Port,
    /// Pin number within the port (`0..=15`)
    pub pin: u8,
}

impl Pad {
    /// Create a pad identity
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Index of the pad's multiplexed signal configuration register
    pub const fn index(self) -> u16 {
        self.port as u16 * 16 + self.pin as u16
    }
}

/// Trait representing access to the ADC register blocks
///
/// Implementors either map the calls onto the memory mapped registers of the
/// MCU or onto a software model. The driver only ever uses 32-bit accesses.
///
/// # Safety
/// While an implementing value exists
/// - it must be the only path through which the ADC register blocks are
///   accessed
/// - `read` and `write` must reach the register named by `register` of the
///   block selected by `instance`, and nothing else
///
/// # Examples
/// ```no_run
/// use core::cell::Cell;
/// use mpc5744p_adc_core::{Instance, Register, RegisterAccess};
///
/// // A single-register model, good enough to observe the last write
/// pub struct LastWrite(Cell<u32>);
///
/// unsafe impl RegisterAccess for LastWrite {
///     fn read(&self, _: Instance, _: Register) -> u32 {
///         self.0.get()
///     }
///
///     fn write(&self, _: Instance, _: Register, value: u32) {
///         self.0.set(value)
///     }
/// }
/// ```
pub unsafe trait RegisterAccess {
    /// Read the full 32-bit register
    fn read(&self, instance: Instance, register: Register) -> u32;
    /// Write the full 32-bit register
    fn write(&self, instance: Instance, register: Register, value: u32);
}

// Safety: forwards to `T`, which upholds the contract.
unsafe impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    fn read(&self, instance: Instance, register: Register) -> u32 {
        (**self).read(instance, register)
    }

    fn write(&self, instance: Instance, register: Register, value: u32) {
        (**self).write(instance, register, value)
    }
}

/// Trait representing pad multiplexing of the SIUL2
///
/// The driver calls [`PadControl::configure_analog_input`] for each pad that
/// carries a channel selected during initialization.
pub trait PadControl {
    /// Switch `pad` to its analog function, disconnecting the digital input
    /// and output buffers.
    fn configure_analog_input(&self, pad: Pad);
}

impl<T: PadControl + ?Sized> PadControl for &T {
    fn configure_analog_input(&self, pad: Pad) {
        (**self).configure_analog_input(pad)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_indices_select_their_instance() {
        for (i, instance) in Instance::ALL.iter().enumerate() {
            assert_eq!(Instance::from_index(i as u8), *instance);
            assert_eq!(Instance::new(i as u8), Ok(*instance));
        }
    }

    #[test]
    fn out_of_range_index_aliases_adc0() {
        assert_eq!(Instance::from_index(7), Instance::Adc0);
        assert_eq!(Instance::from(255), Instance::Adc0);
        assert_eq!(Instance::new(7), Err(InvalidInstance(7)));
    }

    #[test]
    fn base_addresses_are_distinct() {
        assert_eq!(Instance::Adc0.base_address(), 0xFFE0_0000);
        assert_eq!(Instance::Adc3.base_address(), 0xFBE0_4000);
        assert_eq!(
            Instance::from_index(9).base_address(),
            Instance::Adc0.base_address()
        );
    }

    #[test]
    fn threshold_registers_are_split_in_two_windows() {
        assert_eq!(Register::Thrhlr(0).offset(), 0x060);
        assert_eq!(Register::Thrhlr(3).offset(), 0x06C);
        assert_eq!(Register::Thrhlr(4).offset(), 0x280);
        assert_eq!(Register::Thrhlr(15).offset(), 0x2AC);
    }

    #[test]
    fn pad_index_follows_port_layout() {
        assert_eq!(Pad::new(Port::A, 0).index(), 0);
        assert_eq!(Pad::new(Port::B, 7).index(), 23);
        assert_eq!(Pad::new(Port::J, 5).index(), 149);
    }
}
