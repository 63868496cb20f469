//! ADC configuration

use crate::reg::{Mcr, RegisterValue};
use fugit::{HertzU32, NanosDurationU32};

/// Shortest sampling duration accepted by the hardware, in clock cycles
pub const MIN_SAMPLING_CYCLES: u8 = 8;
/// Longest sampling duration accepted by the hardware, in clock cycles
pub const MAX_SAMPLING_CYCLES: u8 = 255;

/// Configuration of the Main Configuration Register, written by
/// [`Adc::init`](crate::adc::Adc::init)
///
/// Start bits are never part of the configuration; conversions are started
/// separately.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Behaviour when a result is converted before the previous one is read
    pub overwrite: Overwrite,
    /// Placement of the 12-bit result in the 16-bit data field
    pub alignment: Alignment,
    /// Normal conversion chain mode
    pub mode: Mode,
    /// Request power down
    pub power_down: bool,
    /// Stop the conversion clock while idle
    pub auto_clock_off: bool,
    /// Conversion clock selection
    pub clock: AdcClock,
    /// Let the cross triggering unit start conversions
    pub ctu_enable: bool,
    /// Start injected chains on an external trigger
    pub injection_trigger: InjectionTrigger,
    /// Run the self test algorithm in CTU mode
    pub ctu_self_test: bool,
}

impl Config {
    /// Overwrite disabled, right aligned, one shot, powered, auto clock off
    /// disabled, full clock
    pub const ONE_SHOT: Config = Config {
        overwrite: Overwrite::Disabled,
        alignment: Alignment::Right,
        mode: Mode::OneShot,
        power_down: false,
        auto_clock_off: false,
        clock: AdcClock::Full,
        ctu_enable: false,
        injection_trigger: InjectionTrigger::Disabled,
        ctu_self_test: false,
    };

    /// Like [`Config::ONE_SHOT`] but converting continuously
    pub const SCAN: Config = Config {
        mode: Mode::Scan,
        ..Self::ONE_SHOT
    };

    /// Layout of the configuration in the Main Configuration Register
    pub fn mcr(&self) -> Mcr {
        let mut mcr = Mcr::from_bits(0);
        mcr.set_owren(self.overwrite == Overwrite::Enabled);
        mcr.set_wlside(self.alignment == Alignment::Left);
        mcr.set_mode(self.mode == Mode::Scan);
        mcr.set_pwdn(self.power_down);
        mcr.set_acko(self.auto_clock_off);
        mcr.set_adclksel(self.clock == AdcClock::Half);
        mcr.set_ctuen(self.ctu_enable);
        mcr.set_jtrgen(self.injection_trigger != InjectionTrigger::Disabled);
        mcr.set_jedge(self.injection_trigger == InjectionTrigger::RisingEdge);
        mcr.set_stcl(self.ctu_self_test);
        mcr
    }

    /// Raw Main Configuration Register word
    pub fn bits(&self) -> u32 {
        self.mcr().bits()
    }

    /// See [`Config::from_mcr`]
    pub fn from_bits(bits: u32) -> Self {
        Self::from_mcr(Mcr::from_bits(bits))
    }

    /// Recover the configuration from a Main Configuration Register word.
    /// Bits that are not part of the configuration are ignored.
    pub fn from_mcr(mcr: Mcr) -> Self {
        Self {
            overwrite: if mcr.owren() {
                Overwrite::Enabled
            } else {
                Overwrite::Disabled
            },
            alignment: if mcr.wlside() {
                Alignment::Left
            } else {
                Alignment::Right
            },
            mode: if mcr.mode() { Mode::Scan } else { Mode::OneShot },
            power_down: mcr.pwdn(),
            auto_clock_off: mcr.acko(),
            clock: if mcr.adclksel() {
                AdcClock::Half
            } else {
                AdcClock::Full
            },
            ctu_enable: mcr.ctuen(),
            injection_trigger: match (mcr.jtrgen(), mcr.jedge()) {
                (false, _) => InjectionTrigger::Disabled,
                (true, false) => InjectionTrigger::FallingEdge,
                (true, true) => InjectionTrigger::RisingEdge,
            },
            ctu_self_test: mcr.stcl(),
        }
    }
}

/// External trigger of the injected chain
///
/// The edge bit is only meaningful with the trigger enabled; it is dropped
/// when the trigger is disabled.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InjectionTrigger {
    /// Injected chains start by software only
    #[default]
    Disabled,
    /// Falling edge of the trigger input
    FallingEdge,
    /// Rising edge of the trigger input
    RisingEdge,
}

/// Handling of unread results
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Overwrite {
    /// New results are discarded until the previous one is read
    #[default]
    Disabled,
    /// New results replace unread ones
    Enabled,
}

/// Result alignment
///
/// Reads through [`Adc::try_read`](crate::adc::Adc::try_read) assume right
/// alignment.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    /// Bits 11:0
    #[default]
    Right,
    /// Bits 15:4
    Left,
}

/// Normal conversion chain mode
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// The chain is converted once per start
    #[default]
    OneShot,
    /// The chain restarts as soon as it completes
    Scan,
}

/// Conversion clock selection
///
/// The selection decides the clock period used by the sampling time
/// computation, see [`sampling_cycles`].
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcClock {
    /// One cycle per bus clock period (select bit clear)
    #[default]
    Full,
    /// One cycle per two bus clock periods (select bit set)
    Half,
}

impl AdcClock {
    fn periods_per_cycle(self) -> u64 {
        match self {
            AdcClock::Full => 1,
            AdcClock::Half => 2,
        }
    }
}

/// Number of clock cycles requested for `sampling_time`, before clamping.
///
/// With `Tck = divider / clock`, the result is `round(time / Tck) + 1`,
/// rounding half up. Computed in integer arithmetic:
/// `time / Tck = time_ns * clock_hz / (divider * 10^9)`.
pub(crate) fn requested_sampling_cycles(
    clock: HertzU32,
    sampling_time: NanosDurationU32,
    select: AdcClock,
) -> u64 {
    let numerator = u64::from(sampling_time.ticks()) * u64::from(clock.raw());
    let denominator = 1_000_000_000 * select.periods_per_cycle();
    (numerator + denominator / 2) / denominator + 1
}

/// Value of the input sampling duration field for `sampling_time` at the
/// given bus `clock`.
///
/// The result is clamped to
/// [`MIN_SAMPLING_CYCLES`]`..=`[`MAX_SAMPLING_CYCLES`]; requests outside
/// that range are not reported.
pub fn sampling_cycles(clock: HertzU32, sampling_time: NanosDurationU32, select: AdcClock) -> u8 {
    requested_sampling_cycles(clock, sampling_time, select)
        .clamp(MIN_SAMPLING_CYCLES.into(), MAX_SAMPLING_CYCLES.into()) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eight_microseconds_at_one_megahertz() {
        let cycles = sampling_cycles(
            HertzU32::MHz(1),
            NanosDurationU32::micros(8),
            AdcClock::Full,
        );
        assert_eq!(cycles, 9);
    }

    #[test]
    fn divided_clock_doubles_the_period() {
        let time = NanosDurationU32::micros(40);
        assert_eq!(sampling_cycles(HertzU32::MHz(1), time, AdcClock::Full), 41);
        assert_eq!(sampling_cycles(HertzU32::MHz(1), time, AdcClock::Half), 21);
    }

    #[test]
    fn short_requests_clamp_to_minimum() {
        let clock = HertzU32::MHz(1);
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::nanos(0), AdcClock::Full),
            MIN_SAMPLING_CYCLES
        );
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::micros(6), AdcClock::Full),
            MIN_SAMPLING_CYCLES
        );
        // 7 periods + 1 is exactly the minimum
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::micros(7), AdcClock::Full),
            8
        );
    }

    #[test]
    fn long_requests_clamp_to_maximum() {
        let clock = HertzU32::MHz(1);
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::micros(254), AdcClock::Full),
            255
        );
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::micros(255), AdcClock::Full),
            MAX_SAMPLING_CYCLES
        );
        assert_eq!(
            sampling_cycles(HertzU32::MHz(160), NanosDurationU32::secs(4), AdcClock::Half),
            MAX_SAMPLING_CYCLES
        );
    }

    #[test]
    fn periods_round_half_up() {
        let clock = HertzU32::MHz(1);
        // 9.4 periods -> 9, 9.5 periods -> 10
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::nanos(9_400), AdcClock::Full),
            10
        );
        assert_eq!(
            sampling_cycles(clock, NanosDurationU32::nanos(9_500), AdcClock::Full),
            11
        );
    }

    #[test]
    fn config_round_trips_through_mcr() {
        let config = Config {
            overwrite: Overwrite::Enabled,
            alignment: Alignment::Left,
            mode: Mode::Scan,
            power_down: false,
            auto_clock_off: true,
            clock: AdcClock::Half,
            ..Config::default()
        };
        assert_eq!(config.bits(), 0xE000_0120);
        assert_eq!(Config::from_mcr(config.mcr()), config);
    }

    #[test]
    fn ctu_and_injection_trigger_bits_survive() {
        let bits = 1 << 22 | 1 << 21 | 1 << 17 | 1 << 15;
        let config = Config::from_bits(bits);
        assert!(config.ctu_enable);
        assert!(config.ctu_self_test);
        assert_eq!(config.injection_trigger, InjectionTrigger::RisingEdge);
        assert_eq!(config.bits(), bits);

        let falling = Config {
            injection_trigger: InjectionTrigger::FallingEdge,
            ..Config::ONE_SHOT
        };
        assert_eq!(falling.bits(), 1 << 22);
        assert_eq!(Config::from_bits(1 << 22), falling);
    }

    #[test]
    fn every_configuration_bit_round_trips() {
        let all = 1 << 31
            | 1 << 30
            | 1 << 29
            | 1 << 22
            | 1 << 21
            | 1 << 17
            | 1 << 15
            | 1 << 8
            | 1 << 5
            | 1;
        assert_eq!(Config::from_bits(all).bits(), all);
        for bit in [31, 30, 29, 22, 17, 15, 8, 5, 0] {
            assert_eq!(Config::from_bits(1 << bit).bits(), 1 << bit, "bit {}", bit);
        }
        // Start and abort bits are not configuration
        assert_eq!(Config::from_bits(1 << 24 | 1 << 20 | 1 << 7 | 1 << 6).bits(), 0);
    }

    #[test]
    fn predefined_configurations() {
        assert_eq!(Config::ONE_SHOT.bits(), 0);
        assert_eq!(Config::SCAN.bits(), 1 << 29);
        assert_eq!(Config::default(), Config::ONE_SHOT);
    }
}
