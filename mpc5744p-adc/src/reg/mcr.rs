//! Main Configuration Register (MCR)
use bitfield::bitfield;

bitfield! {
    /// Main Configuration Register
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct Mcr(u32);
    impl Debug;
    /// Overwrite enable
    pub owren, set_owren: 31;
    /// Write left aligned
    pub wlside, set_wlside: 30;
    /// Scan mode (one shot when clear)
    pub mode, set_mode: 29;
    /// Start normal conversion
    pub nstart, set_nstart: 24;
    /// Injection external trigger enable
    pub jtrgen, set_jtrgen: 22;
    /// Injection trigger on rising edge
    pub jedge, set_jedge: 21;
    /// Start injected conversion
    pub jstart, set_jstart: 20;
    /// Cross triggering unit enable
    pub ctuen, set_ctuen: 17;
    /// Self test in CTU mode
    pub stcl, set_stcl: 15;
    /// Conversion clock select
    pub adclksel, set_adclksel: 8;
    /// Abort chain
    pub abort_chain, set_abort_chain: 7;
    /// Abort current conversion
    pub abort, set_abort: 6;
    /// Auto clock off enable
    pub acko, set_acko: 5;
    /// Power down
    pub pwdn, set_pwdn: 0;
}

super::register_value!(Mcr);
