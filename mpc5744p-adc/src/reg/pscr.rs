//! Presampling Control Register (PSCR)
use bitfield::bitfield;

bitfield! {
    /// Presampling Control Register
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Pscr(u32);
    impl Debug;
    /// Presampling voltage for channels 64..=95
    pub u8, preval2, set_preval2: 6, 5;
    /// Presampling voltage for channels 32..=63
    pub u8, preval1, set_preval1: 4, 3;
    /// Presampling voltage for channels 0..=31
    pub u8, preval0, set_preval0: 2, 1;
    /// Skip the sampling phase after presampling
    pub preconv, set_preconv: 0;
}

super::register_value!(Pscr);
