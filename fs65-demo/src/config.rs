//! Application constants

use crate::board::LdtFunction;
use embedded_can::ExtendedId;
use fugit::{HertzU32, MicrosDurationU32};
use mpc5744p_adc::channel::{Channel, ChannelSet};
use mpc5744p_adc::config::Config;
use mpc5744p_adc::core::Instance;
use mpc5744p_adc::interrupt::{Interrupt, InterruptSet};

const CAN_ID: ExtendedId = match ExtendedId::new(0x1555_5555) {
    Some(id) => id,
    None => ExtendedId::MAX,
};

/// Configuration of the demo sequence
///
/// [`Default`] gives the values of the evaluation board setup: ADC_0
/// converting AN0 (PB7) and AN1 (PB8), DSPI at 1 MHz, watchdog refresh every
/// 3 ms, nine conversions 10 ms apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// ADC instance
    pub adc: Instance,
    /// Channels of the normal conversion chain
    pub adc_channels: ChannelSet,
    /// ADC configuration
    pub adc_config: Config,
    /// ADC interrupts enabled for [`Self::adc_channels`]
    pub adc_interrupts: InterruptSet,
    /// DSPI baud rate towards the companion chip
    pub spi_baud_rate: HertzU32,
    /// Watchdog refresh period
    pub watchdog_period: MicrosDurationU32,
    /// Number of conversion and transmit rounds
    pub rounds: u8,
    /// Delay between starting a conversion and sending the frame
    pub round_delay: MicrosDurationU32,
    /// Identifier of the frame sent every round
    pub can_id: ExtendedId,
    /// Payload of the frame sent every round
    pub can_data: [u8; 8],
    /// Long duration timer operating function
    pub ldt_function: LdtFunction,
    /// Long duration timer after-run value, in seconds
    pub ldt_after_run: u32,
    /// Scanned voltages: 2.5 V reference, wide range voltages and temperature
    pub scan_voltage: u8,
    /// Initialize the companion chip after every reset, not only after a
    /// power-on reset
    pub force_sbc_init: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            adc: Instance::Adc0,
            adc_channels: ChannelSet::from(Channel::Ch0) | Channel::Ch1,
            adc_config: Config::ONE_SHOT,
            adc_interrupts: Interrupt::EndOfConversion.into(),
            spi_baud_rate: HertzU32::MHz(1),
            watchdog_period: MicrosDurationU32::millis(3),
            rounds: 9,
            round_delay: MicrosDurationU32::millis(10),
            can_id: CAN_ID,
            can_data: [0xA0; 8],
            ldt_function: LdtFunction::Function1,
            ldt_after_run: 0x0F,
            scan_voltage: 0x8F,
            force_sbc_init: true,
        }
    }
}
