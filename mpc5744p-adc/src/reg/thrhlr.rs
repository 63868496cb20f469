//! Analog Watchdog Threshold Values Registers (THRHLRn)
use bitfield::bitfield;

bitfield! {
    /// Threshold pair of an analog watchdog
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Thrhlr(u32);
    impl Debug;
    /// High threshold
    pub u16, thrh, set_thrh: 27, 16;
    /// Low threshold
    pub u16, thrl, set_thrl: 11, 0;
}

super::register_value!(Thrhlr);
