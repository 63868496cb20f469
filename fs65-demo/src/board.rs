//! Collaborators of the demo sequence

use core::fmt::Debug;
use fugit::{HertzU32, MicrosDurationU32};

/// Board LEDs
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    /// LED2 on PA1
    Led2,
    /// LED3 on PA2
    Led3,
}

/// MCU peripherals used during bring-up
///
/// Implementations wrap the target's bus bridge, FCCU, mode entry, SIUL,
/// FlexCAN, DSPI, PIT and reset generation drivers.
pub trait Mcu {
    /// Grant all bus masters read, write and privileged access on both
    /// peripheral bridges
    fn enable_bus_masters(&mut self);

    /// Put the FCCU in bi-stable protocol, unless it is in the safe state
    fn set_fccu_bistable(&mut self);

    /// Set up the clock tree and the run modes
    fn init_clocks_and_modes(&mut self);

    /// Install and enable the interrupt vectors
    fn install_interrupts(&mut self);

    /// PA0 as input, falling-edge external interrupt 1. It carries the
    /// companion chip's interrupt line.
    fn configure_sbc_irq_pin(&mut self);

    /// PA1 and PA2 as digital outputs, both cleared
    fn configure_leds(&mut self);

    /// Toggle an LED output
    fn toggle_led(&mut self, led: Led);

    /// Initialize CAN controller 0 and its pads
    fn init_can(&mut self);

    /// Initialize DSPI as master at `baud_rate`
    fn init_spi(&mut self, baud_rate: HertzU32);

    /// Set up the PIT channel refreshing the companion chip's watchdog every
    /// `period`, with its interrupt enabled. The channel is not started.
    fn init_watchdog_timer(&mut self, period: MicrosDurationU32);

    /// Start the watchdog refresh channel
    fn start_watchdog_timer(&mut self);

    /// Whether the last destructive reset was a voltage out of range or a
    /// power-on reset
    fn power_on_reset(&mut self) -> bool;

    /// Clear the voltage out of range and power-on destructive reset flags
    fn clear_power_on_reset_flags(&mut self);
}

/// Long duration timer operating functions of the FS65xx
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LdtFunction {
    /// Interrupt pulse once the after-run value elapses
    Function1,
    /// Function 2
    Function2,
    /// Function 3
    Function3,
    /// Function 4
    Function4,
    /// Function 5
    Function5,
}

/// Companion chip registers whose cached content is refreshed over SPI
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fs65Register {
    /// LDT_AFTER_RUN_1
    LdtAfterRun1,
    /// LDT_AFTER_RUN_2
    LdtAfterRun2,
    /// MODE
    Mode,
    /// DIAG_SF_ERR
    DiagSfErr,
    /// RELEASE_FSxB
    ReleaseFsxb,
}

/// FS65xx power system basis chip
pub trait PowerSbc {
    /// Failure reported by the chip driver
    type Error: Debug;

    /// Select the voltages scanned by the chip's MUX output. Only updates
    /// the driver's configuration; it reaches the chip on [`Self::init`].
    fn select_scan_voltage(&mut self, selection: u8);

    /// Write the init registers
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Write the registers that may be changed outside the init phase
    fn configure_non_init(&mut self) -> Result<(), Self::Error>;

    /// Read the status registers
    fn read_status(&mut self) -> Result<(), Self::Error>;

    /// Long duration timer in normal (not calibration) mode
    fn set_ldt_normal_mode(&mut self) -> Result<(), Self::Error>;

    /// Long duration timer operating function
    fn select_ldt_function(&mut self, function: LdtFunction) -> Result<(), Self::Error>;

    /// Long duration timer after-run value, in seconds
    fn set_after_run_value(&mut self, seconds: u32) -> Result<(), Self::Error>;

    /// Read `register` back into the driver's cache
    fn refresh_register(&mut self, register: Fs65Register) -> Result<(), Self::Error>;

    /// Set the real time counter
    fn set_rtc(&mut self) -> Result<(), Self::Error>;

    /// Start the long duration timer
    fn start_ldt_counter(&mut self) -> Result<(), Self::Error>;

    /// `FLT_ERR` of the cached DIAG_SF_ERR content
    fn fault_error_present(&self) -> bool;

    /// Enter the low power off state with automatic wake-up
    fn enter_lpoff_auto_wakeup(&mut self) -> Result<(), Self::Error>;
}
