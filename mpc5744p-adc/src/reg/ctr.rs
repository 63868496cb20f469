//! Conversion Timing Register (CTR0)
use bitfield::bitfield;

bitfield! {
    /// Conversion Timing Register
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Ctr(u32);
    impl Debug;
    /// Input sampling duration, in conversion clock cycles
    pub u8, inpsamp, set_inpsamp: 7, 0;
}

super::register_value!(Ctr);

impl Ctr {
    /// Value written by [`Adc::init`](crate::adc::Adc::init)
    pub const DEFAULT: Ctr = Ctr(0x0000_0014);
}
