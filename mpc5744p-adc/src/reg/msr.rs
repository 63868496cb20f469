//! Main Status Register (MSR)
use bitfield::bitfield;

bitfield! {
    /// Main Status Register. Read only.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Msr(u32);
    impl Debug;
    /// Calibration done
    pub calibrtd, _: 31;
    /// Normal conversion running
    pub nstart, _: 24;
    /// Injected conversion aborted
    pub jabort, _: 23;
    /// Injected conversion running
    pub jstart, _: 20;
    /// Self test running
    pub self_test_s, _: 18;
    /// CTU conversion running
    pub ctustart, _: 17;
    /// Channel under conversion
    pub u8, chaddr, _: 15, 9;
    /// Auto clock off enabled
    pub acko, _: 5;
    /// State of the conversion state machine
    pub u8, adcstatus, _: 2, 0;
}

super::register_value!(Msr);
