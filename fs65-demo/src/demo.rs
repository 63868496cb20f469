//! The demo sequence

use crate::board::{Fs65Register, Led, Mcu, PowerSbc};
use crate::config::DemoConfig;
use core::fmt::Debug;
use embedded_can::nb::Can;
use embedded_can::Frame;
use embedded_hal::blocking::delay::DelayUs;
use mpc5744p_adc::adc::AdcBank;
use mpc5744p_adc::channel::ChannelSet;
use mpc5744p_adc::core::{PadControl, RegisterAccess};

/// Everything the sequence drives
pub struct Peripherals<M, S, B, P, C, D> {
    /// MCU peripherals
    pub mcu: M,
    /// Companion chip
    pub sbc: S,
    /// ADC instances
    pub adc: AdcBank<B, P>,
    /// CAN controller
    pub can: C,
    /// Delay source pacing the conversion rounds
    pub delay: D,
}

/// State the sequence ended in
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// The companion chip was asked to enter low power off
    LowPower,
    /// The companion chip reported a fault error; it was left running
    FaultPresent,
}

/// Errors preventing the sequence from starting
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The CAN frame type cannot represent the configured frame
    FrameRejected,
}

/// The demo application
pub struct Demo<M, S, B, P, C, D> {
    peripherals: Peripherals<M, S, B, P, C, D>,
    config: DemoConfig,
}

/// Logs a companion chip failure. The sequence carries on regardless.
fn check<E: Debug>(operation: &str, result: Result<(), E>) {
    if let Err(e) = result {
        log::warn!("FS65: {} failed: {:?}", operation, e);
    }
}

impl<M, S, B, P, C, D> Demo<M, S, B, P, C, D>
where
    M: Mcu,
    S: PowerSbc,
    B: RegisterAccess,
    P: PadControl,
    C: Can,
    D: DelayUs<u32>,
{
    /// Creates the application. Nothing is touched before [`Self::run`].
    pub fn new(peripherals: Peripherals<M, S, B, P, C, D>, config: DemoConfig) -> Self {
        Self {
            peripherals,
            config,
        }
    }

    /// Runs the whole sequence once.
    ///
    /// Fails before touching any peripheral if the configured frame cannot be
    /// built. Companion chip and CAN failures are logged and skipped.
    pub fn run(&mut self) -> Result<RunOutcome, Error> {
        let frame = C::Frame::new(self.config.can_id, &self.config.can_data)
            .ok_or(Error::FrameRejected)?;

        self.bring_up_mcu();
        self.init_adc();
        self.init_sbc();
        self.start_long_duration_timer();
        for round in 0..self.config.rounds {
            self.convert_and_send(round, &frame);
        }
        Ok(self.shut_down())
    }

    /// Gives back the peripherals
    pub fn release(self) -> Peripherals<M, S, B, P, C, D> {
        self.peripherals
    }

    fn bring_up_mcu(&mut self) {
        log::info!("bring-up: bus masters, FCCU, clocks, interrupts");
        let mcu = &mut self.peripherals.mcu;
        mcu.enable_bus_masters();
        mcu.set_fccu_bistable();
        mcu.init_clocks_and_modes();
        mcu.install_interrupts();

        log::info!("bring-up: pads, CAN");
        mcu.configure_sbc_irq_pin();
        mcu.configure_leds();
        mcu.init_can();
    }

    fn init_adc(&mut self) {
        log::info!("bring-up: {:?}", self.config.adc);
        let config = &self.config;
        self.peripherals.sbc.select_scan_voltage(config.scan_voltage);

        let adc = self.peripherals.adc.instance(config.adc);
        adc.init(config.adc_channels, ChannelSet::EMPTY, config.adc_config);
        adc.set_interrupts(config.adc_interrupts, config.adc_channels);
    }

    fn init_sbc(&mut self) {
        log::info!("bring-up: SPI, watchdog refresh timer");
        let mcu = &mut self.peripherals.mcu;
        let sbc = &mut self.peripherals.sbc;
        mcu.init_spi(self.config.spi_baud_rate);
        mcu.init_watchdog_timer(self.config.watchdog_period);

        if self.config.force_sbc_init || mcu.power_on_reset() {
            log::info!("FS65: init");
            mcu.clear_power_on_reset_flags();
            check("init", sbc.init());
            mcu.start_watchdog_timer();
        } else {
            log::info!("FS65: reset not caused by FS65, reading status");
            mcu.start_watchdog_timer();
            check("status read", sbc.read_status());
        }
        check("non-init configuration", sbc.configure_non_init());
    }

    fn start_long_duration_timer(&mut self) {
        log::info!("FS65: long duration timer");
        let sbc = &mut self.peripherals.sbc;
        check("LDT normal mode", sbc.set_ldt_normal_mode());
        check(
            "LDT function selection",
            sbc.select_ldt_function(self.config.ldt_function),
        );
        check(
            "LDT after-run value",
            sbc.set_after_run_value(self.config.ldt_after_run),
        );
        check(
            "LDT_AFTER_RUN_1 refresh",
            sbc.refresh_register(Fs65Register::LdtAfterRun1),
        );
        check(
            "LDT_AFTER_RUN_2 refresh",
            sbc.refresh_register(Fs65Register::LdtAfterRun2),
        );
        check("RTC", sbc.set_rtc());

        self.peripherals.mcu.toggle_led(Led::Led2);
        check("LDT start", self.peripherals.sbc.start_ldt_counter());
    }

    fn convert_and_send(&mut self, round: u8, frame: &C::Frame) {
        log::trace!("round {}", round);
        self.peripherals
            .adc
            .instance(self.config.adc)
            .start_normal_conversion(self.config.adc_channels);

        self.peripherals
            .delay
            .delay_us(self.config.round_delay.ticks());

        if let Err(e) = nb::block!(self.peripherals.can.transmit(frame)) {
            log::warn!("round {}: CAN transmit failed: {:?}", round, e);
        }
    }

    fn shut_down(&mut self) -> RunOutcome {
        log::info!("FS65: preparing low power off");
        let sbc = &mut self.peripherals.sbc;
        check("MODE refresh", sbc.refresh_register(Fs65Register::Mode));
        // The first read returns the flags latched before the previous one
        check(
            "DIAG_SF_ERR refresh",
            sbc.refresh_register(Fs65Register::DiagSfErr),
        );
        check(
            "DIAG_SF_ERR refresh",
            sbc.refresh_register(Fs65Register::DiagSfErr),
        );
        check(
            "RELEASE_FSxB refresh",
            sbc.refresh_register(Fs65Register::ReleaseFsxb),
        );

        if sbc.fault_error_present() {
            log::warn!("FS65: fault error present, staying on");
            return RunOutcome::FaultPresent;
        }
        self.peripherals.mcu.toggle_led(Led::Led3);
        check(
            "low power off",
            self.peripherals.sbc.enter_lpoff_auto_wakeup(),
        );
        RunOutcome::LowPower
    }
}
