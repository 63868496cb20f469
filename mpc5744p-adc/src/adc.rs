//! ADC instances
//!
//! [`AdcBank`] owns the register access and pad control capabilities for all
//! four instances. [`AdcBank::adc`] hands out an [`Adc`] for one instance,
//! which carries all the operations of the converter.

use crate::channel::{Channel, ChannelSet};
use crate::config::{requested_sampling_cycles, sampling_cycles, AdcClock, Config};
use crate::interrupt::{Interrupt, InterruptSet};
use crate::pins;
use crate::reg::{Cdr, Ctr, Cwselr, Mcr, Msr, Pscr, Reg, RegisterValue, Thrhlr};
use crate::status::{AdcState, Status};
use crate::threshold::{Threshold, ThresholdIndex};
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayUs;
use fugit::{HertzU32, MicrosDurationU32, NanosDurationU32};
use mpc5744p_adc_core::{Instance, PadControl, Register, RegisterAccess};

/// Errors that may occur while reading conversion results
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The channel did not report valid data within the timeout
    Timeout(Channel),
}

/// Voltage the inputs are precharged to during presampling
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PresamplingVoltage {
    /// Analog ground
    Vss = 0b00,
    /// Analog supply
    Vdd = 0b01,
}

/// Interval between two polls of a channel's valid flag in [`Adc::read`]
const POLL_INTERVAL_US: u32 = 1;

/// The four ADC instances
pub struct AdcBank<B, P> {
    registers: B,
    pads: P,
}

impl<B: RegisterAccess, P: PadControl> AdcBank<B, P> {
    /// Takes over register access and pad control.
    pub fn new(registers: B, pads: P) -> Self {
        Self { registers, pads }
    }

    /// Selects an instance by index.
    ///
    /// Any `index` outside `0..=3` selects ADC_0, see
    /// [`Instance::from_index`]. Use [`Self::instance`] to avoid the aliasing.
    pub fn adc(&mut self, index: u8) -> Adc<'_, B, P> {
        self.instance(Instance::from_index(index))
    }

    /// Selects an instance.
    pub fn instance(&mut self, instance: Instance) -> Adc<'_, B, P> {
        Adc {
            instance,
            registers: &self.registers,
            pads: &self.pads,
        }
    }

    /// Gives back the capabilities.
    pub fn release(self) -> (B, P) {
        (self.registers, self.pads)
    }
}

/// A single ADC instance
///
/// Writes spanning more than one field are not atomic. The borrow on
/// [`AdcBank`] keeps a single execution context per bank.
pub struct Adc<'a, B, P> {
    instance: Instance,
    registers: &'a B,
    pads: &'a P,
}

impl<'a, B: RegisterAccess, P: PadControl> Adc<'a, B, P> {
    /// The selected instance
    pub fn instance(&self) -> Instance {
        self.instance
    }

    fn reg<T: RegisterValue>(&self, register: Register) -> Reg<'a, B, T> {
        Reg::new(self.registers, self.instance, register)
    }

    fn mcr(&self) -> Reg<'a, B, Mcr> {
        self.reg(Register::Mcr)
    }

    fn msr(&self) -> Reg<'a, B, Msr> {
        self.reg(Register::Msr)
    }

    fn isr(&self) -> Reg<'a, B, InterruptSet> {
        self.reg(Register::Isr)
    }

    fn pscr(&self) -> Reg<'a, B, Pscr> {
        self.reg(Register::Pscr)
    }

    fn ctr0(&self) -> Reg<'a, B, Ctr> {
        self.reg(Register::Ctr0)
    }

    // Status

    /// Returns `true` while a normal conversion is in progress
    pub fn is_normal_conversion_running(&self) -> bool {
        self.msr().read().nstart()
    }

    /// Returns `true` if the last injected conversion was aborted. The flag
    /// is reset when a new injected conversion starts.
    pub fn is_injected_conversion_aborted(&self) -> bool {
        self.msr().read().jabort()
    }

    /// Returns `true` while an injected conversion is in progress
    pub fn is_injected_conversion_running(&self) -> bool {
        self.msr().read().jstart()
    }

    /// Returns `true` while a CTU triggered conversion is in progress
    pub fn is_ctu_conversion_running(&self) -> bool {
        self.msr().read().ctustart()
    }

    /// Number of the channel currently being converted
    pub fn current_channel_address(&self) -> u8 {
        self.msr().read().chaddr()
    }

    /// State of the auto clock off feature as reported by the status register
    pub fn auto_clock_off_state(&self) -> bool {
        self.msr().read().acko()
    }

    /// Raw 3-bit state machine code
    pub fn status_code(&self) -> u8 {
        self.msr().read().adcstatus()
    }

    /// Decoded state machine state
    pub fn state(&self) -> AdcState {
        self.status_code().into()
    }

    /// Printable snapshot of the status register
    pub fn status(&self) -> Status {
        self.msr().read().into()
    }

    // Basic operation

    /// Configures the pads of all selected channels as analog inputs, then
    /// writes, in this order, the configuration register, the injected
    /// channel mask, the normal channel mask and the default timing.
    ///
    /// The channel masks are latched before any start bit is set.
    pub fn init(&self, normal: ChannelSet, injected: ChannelSet, config: Config) {
        log::trace!(
            "{:?}: init normal {:?} injected {:?}",
            self.instance,
            normal,
            injected
        );
        pins::configure_analog_inputs(self.pads, self.instance, normal | injected);
        self.mcr().write(config.mcr());
        self.reg(Register::Jcmr0).write(injected);
        self.reg(Register::Ncmr0).write(normal);
        self.ctr0().write(Ctr::DEFAULT);
    }

    /// Selects the channels of the normal chain and starts converting them
    pub fn start_normal_conversion(&self, channels: ChannelSet) {
        log::trace!("{:?}: start normal {:?}", self.instance, channels);
        self.reg(Register::Ncmr0).write(channels);
        self.mcr().modify(|w| w.set_nstart(true));
    }

    /// Selects the channels of the injected chain and starts converting them
    pub fn start_injected_conversion(&self, channels: ChannelSet) {
        log::trace!("{:?}: start injected {:?}", self.instance, channels);
        self.reg(Register::Jcmr0).write(channels);
        self.mcr().modify(|w| w.set_jstart(true));
    }

    /// Clears both the normal and the injected start bit
    pub fn stop_conversion(&self) {
        log::trace!("{:?}: stop", self.instance);
        self.mcr().modify(|w| {
            w.set_nstart(false);
            w.set_jstart(false);
        });
    }

    /// Normal chain converts once per start
    pub fn set_one_shot_mode(&self) {
        self.mcr().modify(|w| w.set_mode(false));
    }

    /// Normal chain restarts as soon as it completes
    pub fn set_scan_mode(&self) {
        self.mcr().modify(|w| w.set_mode(true));
    }

    /// Stop the conversion clock while idle
    pub fn enable_auto_clock_off(&self) {
        self.mcr().modify(|w| w.set_acko(true));
    }

    /// Keep the conversion clock running while idle
    pub fn disable_auto_clock_off(&self) {
        self.mcr().modify(|w| w.set_acko(false));
    }

    /// Returns the conversion result of `channel` once its valid flag is set,
    /// [`nb::Error::WouldBlock`] until then.
    ///
    /// The result is assumed right aligned; only its 12 low bits are
    /// returned.
    pub fn try_read(&self, channel: Channel) -> nb::Result<u16, Infallible> {
        let cdr: Cdr = self.reg(Register::Cdr(channel.index())).read();
        if !cdr.valid() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(cdr.cdata() & 0x0FFF)
    }

    /// Polls [`Self::try_read`] until a result arrives or `timeout` elapses.
    ///
    /// The valid flag is checked at least once, even for a zero `timeout`.
    pub fn read<D: DelayUs<u32>>(
        &self,
        channel: Channel,
        timeout: MicrosDurationU32,
        delay: &mut D,
    ) -> Result<u16, Error> {
        let mut waited = 0_u32;
        loop {
            match self.try_read(channel) {
                Ok(value) => return Ok(value),
                Err(nb::Error::WouldBlock) => {}
                Err(nb::Error::Other(never)) => match never {},
            }
            if waited >= timeout.ticks() {
                log::warn!(
                    "{:?}: no valid data on {:?} after {} us",
                    self.instance,
                    channel,
                    waited
                );
                return Err(Error::Timeout(channel));
            }
            delay.delay_us(POLL_INTERVAL_US);
            waited = waited.saturating_add(POLL_INTERVAL_US);
        }
    }

    // Interrupts

    /// Writes the global interrupt enables, then the per-channel end of
    /// conversion interrupt mask.
    pub fn set_interrupts(&self, interrupts: InterruptSet, channels: ChannelSet) {
        self.reg(Register::Imr).write(interrupts);
        self.reg(Register::Cimr0).write(channels);
    }

    /// Flags currently pending in the interrupt status register
    pub fn pending_interrupts(&self) -> InterruptSet {
        self.isr().read()
    }

    /// Clears the end of conversion flags of `channels` and the global end of
    /// conversion flag.
    pub fn clear_eoc_flags(&self, channels: ChannelSet) {
        self.reg(Register::Ceocfr0).write(channels);
        self.clear_interrupt(Interrupt::EndOfConversion);
    }

    /// Clears every end of conversion flag
    pub fn clear_all_eoc_flags(&self) {
        self.reg::<u32>(Register::Ceocfr0).write(0xFFFF_FFFF);
        self.clear_interrupt(Interrupt::EndOfConversion);
    }

    /// Clears the end of CTU conversion flag
    pub fn clear_eoctu_flag(&self) {
        self.clear_interrupt(Interrupt::EndOfCtuConversion);
    }

    /// Clears the end of injected channel conversion flag
    pub fn clear_jeoc_flag(&self) {
        self.clear_interrupt(Interrupt::EndOfInjectedConversion);
    }

    /// Clears the end of injected chain conversion flag
    pub fn clear_jech_flag(&self) {
        self.clear_interrupt(Interrupt::EndOfInjectedChain);
    }

    /// Clears the end of chain conversion flag
    pub fn clear_ech_flag(&self) {
        self.clear_interrupt(Interrupt::EndOfChain);
    }

    fn clear_interrupt(&self, interrupt: Interrupt) {
        // Write 1 to clear: writing only this bit leaves the other flags set.
        self.isr().write(interrupt.into());
    }

    // Analog watchdog

    /// Writes the limits of threshold pair `index`, then the watchdog
    /// interrupt mask.
    pub fn set_threshold(&self, index: ThresholdIndex, threshold: Threshold, watchdog_mask: u32) {
        self.reg::<Thrhlr>(Register::Thrhlr(index.index()))
            .modify(|w| {
                w.set_thrh(threshold.high);
                w.set_thrl(threshold.low);
            });
        self.reg::<u32>(Register::Wtimr).write(watchdog_mask);
    }

    /// Binds `channel` to threshold pair `index` and enables its watchdog.
    /// The bindings of other channels are left untouched.
    pub fn set_threshold_for_channel(&self, channel: Channel, index: ThresholdIndex) {
        log::trace!("{:?}: watchdog {:?} on {:?}", self.instance, index, channel);
        let (register, position) = match channel.index() {
            n @ 0..=7 => (Register::Cwselr0, n),
            n => (Register::Cwselr1, n - 8),
        };
        self.reg::<Cwselr>(register)
            .modify(|w| w.set_wsel(position as usize, index.index()));
        self.reg::<ChannelSet>(Register::Cwenr0).modify(|w| w.insert(channel));
    }

    /// Clears every watchdog threshold flag
    pub fn clear_threshold_flags(&self) {
        self.reg::<u32>(Register::Wtisr).write(0xFFFF_FFFF);
    }

    // Presampling

    /// Presample `channels` to the analog supply
    pub fn set_vdd_for_presampling(&self, channels: ChannelSet) {
        self.set_presampling(PresamplingVoltage::Vdd, channels);
    }

    /// Presample `channels` to analog ground
    pub fn set_vss_for_presampling(&self, channels: ChannelSet) {
        self.set_presampling(PresamplingVoltage::Vss, channels);
    }

    fn set_presampling(&self, voltage: PresamplingVoltage, channels: ChannelSet) {
        self.pscr().modify(|w| w.set_preval0(voltage as u8));
        self.reg(Register::Psr0).write(channels);
        self.pscr().modify(|w| w.set_preconv(false));
    }

    /// Convert right after presampling, skipping the sampling phase
    pub fn enable_sample_bypass(&self) {
        self.pscr().modify(|w| w.set_preconv(true));
    }

    /// Presample, sample and convert
    pub fn disable_sample_bypass(&self) {
        self.pscr().modify(|w| w.set_preconv(false));
    }

    // Timing

    /// Programs the input sampling duration for `sampling_time` at bus
    /// `clock` and returns the number of cycles written.
    ///
    /// The clock period follows the clock select bit currently in the
    /// configuration register. Requests outside the range the hardware
    /// accepts are clamped, see [`sampling_cycles`].
    pub fn set_sampling_time(&self, clock: HertzU32, sampling_time: NanosDurationU32) -> u8 {
        let select = if self.mcr().read().adclksel() {
            AdcClock::Half
        } else {
            AdcClock::Full
        };
        let cycles = sampling_cycles(clock, sampling_time, select);
        let requested = requested_sampling_cycles(clock, sampling_time, select);
        if requested != u64::from(cycles) {
            log::debug!(
                "{:?}: sampling time of {} cycles clamped to {}",
                self.instance,
                requested,
                cycles
            );
        }
        self.ctr0().modify(|w| w.set_inpsamp(cycles));
        cycles
    }
}
