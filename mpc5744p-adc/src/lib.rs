#![no_std]
#![warn(missing_docs)]
//! # MPC5744P ADC
//!
//! ## Overview
//! This crate provides a register level HAL for the four SAR ADC instances
//! of the MPC5744P.
//!
//! It provides the following features:
//!
//! - initialization of normal and injected conversion chains, including the
//!   analog pad configuration of the selected channels
//! - starting and stopping normal and injected conversions
//! - non-blocking and timeout bounded reads of conversion results
//! - interrupt mask and flag handling
//! - analog watchdog thresholds and their binding to channels
//! - presampling and sample bypass control
//! - sampling time computation from the bus clock
//! - status queries
//!
//! The driver does not access fixed addresses by itself. Register traffic
//! goes through an implementation of [`RegisterAccess`], pad multiplexing
//! through an implementation of [`PadControl`]. On silicon,
//! [`mmio::Mmio`] provides the former; tests use a software model.
//!
//! ## Instance selection
//!
//! Instances are selected with an index. Indices outside `0..=3` select
//! ADC_0, see [`Instance::from_index`].
//!
//! ## General usage example
//!
//! ```no_run
//! # struct Siul;
//! # impl mpc5744p_adc::core::PadControl for Siul {
//! #     fn configure_analog_input(&self, _: mpc5744p_adc::core::Pad) {}
//! # }
//! # struct Delay;
//! # impl embedded_hal::blocking::delay::DelayUs<u32> for Delay {
//! #     fn delay_us(&mut self, _: u32) {}
//! # }
//! use mpc5744p_adc::adc::AdcBank;
//! use mpc5744p_adc::channel::{Channel, ChannelSet};
//! use mpc5744p_adc::config::Config;
//! use mpc5744p_adc::mmio::Mmio;
//! use fugit::{HertzU32, MicrosDurationU32, NanosDurationU32};
//!
//! // Safety: nothing else in this program touches the ADC register blocks
//! let mut bank = AdcBank::new(unsafe { Mmio::new() }, Siul);
//! let channels: ChannelSet = [Channel::Ch0, Channel::Ch1].into_iter().collect();
//!
//! let adc = bank.adc(0);
//! adc.init(channels, ChannelSet::EMPTY, Config::ONE_SHOT);
//! adc.set_sampling_time(HertzU32::MHz(80), NanosDurationU32::micros(1));
//! adc.start_normal_conversion(channels);
//!
//! let mut delay = Delay;
//! let value = adc.read(Channel::Ch0, MicrosDurationU32::millis(1), &mut delay);
//! ```
//!
//! [`RegisterAccess`]: mpc5744p_adc_core::RegisterAccess
//! [`PadControl`]: mpc5744p_adc_core::PadControl
//! [`Instance::from_index`]: mpc5744p_adc_core::Instance::from_index

#[cfg(test)]
extern crate std;

pub mod adc;
pub mod channel;
pub mod config;
pub mod interrupt;
pub mod mmio;
pub mod pins;
pub mod reg;
pub mod status;
pub mod threshold;

#[cfg(test)]
mod fake;

pub use mpc5744p_adc_core as core;
