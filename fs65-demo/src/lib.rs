#![no_std]
#![warn(missing_docs)]
//! # FS65xx demo
//!
//! Bring-up and exercise sequence for an MPC5744P paired with an FS65xx
//! power system basis chip (PwSBC).
//!
//! The sequence enables the bus masters, clocks and interrupts of the MCU,
//! initializes the companion chip (watchdog refresh, long duration timer),
//! then converts two analog channels and sends a CAN frame nine times before
//! putting the companion chip into its low power off state with automatic
//! wake-up.
//!
//! Everything but the ADC is driven through collaborator traits:
//!
//! - [`Mcu`](board::Mcu) for the MCU peripherals (bus bridges, FCCU, mode
//!   entry, pads, DSPI, PIT, reset generation)
//! - [`PowerSbc`](board::PowerSbc) for the FS65xx
//! - [`embedded_can::nb::Can`] for the CAN controller
//! - [`embedded_hal::blocking::delay::DelayUs`] for pacing
//!
//! The ADC itself is driven through [`mpc5744p_adc::adc::AdcBank`].
//!
//! A board entry point builds a [`Demo`], runs it and halts:
//!
//! ```ignore
//! let mut demo = Demo::new(peripherals, DemoConfig::default());
//! let outcome = demo.run();
//! loop {}
//! ```

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::{Demo, Error, Peripherals, RunOutcome};
