//! Channel Data Registers (CDRn)
use bitfield::bitfield;

bitfield! {
    /// Conversion result of a single channel. Read only.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Cdr(u32);
    impl Debug;
    /// Data is valid
    pub valid, _: 19;
    /// Data was overwritten before being read
    pub overw, _: 18;
    /// Conversion mode that produced the data
    pub u8, resp, _: 17, 16;
    /// Converted data
    pub u16, cdata, _: 15, 0;
}

super::register_value!(Cdr);
