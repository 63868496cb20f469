//! Channel Watchdog Select Registers (CWSELR0, CWSELR1)
use bitfield::bitfield;

bitfield! {
    /// Watchdog selection of eight consecutive channels, four bits each.
    /// CWSELR0 covers channels 0..=7, CWSELR1 channels 8..=15.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Cwselr(u32);
    impl Debug;
    /// Threshold register selected for the channel at `index` within the
    /// register
    pub u8, wsel, set_wsel: 3, 0, 8;
}

super::register_value!(Cwselr);
