//! Converter status
use crate::reg::Msr;
use core::fmt::{self, Debug};

/// State of the conversion state machine, decoded from the 3-bit status code
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcState {
    /// `000`
    Idle,
    /// `001`
    PowerDown,
    /// `010`
    Wait,
    /// `100`
    Sample,
    /// `110`
    Conversion,
    /// Codes without a documented meaning (`011`, `101`, `111`)
    Reserved(u8),
}

impl From<u8> for AdcState {
    fn from(code: u8) -> Self {
        match code & 0b111 {
            0b000 => Self::Idle,
            0b001 => Self::PowerDown,
            0b010 => Self::Wait,
            0b100 => Self::Sample,
            0b110 => Self::Conversion,
            other => Self::Reserved(other),
        }
    }
}

/// Printable MSR snapshot
pub struct Status(pub Msr);

impl From<Msr> for Status {
    fn from(value: Msr) -> Self {
        Self(value)
    }
}

impl Status {
    /// Decoded state machine state
    pub fn state(&self) -> AdcState {
        self.0.adcstatus().into()
    }
}

impl Debug for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> fmt::Result {
        let msr = &self.0;

        f.debug_struct("Status")
            .field("state", &self.state())
            .field("nstart", &msr.nstart())
            .field("jstart", &msr.jstart())
            .field("jabort", &msr.jabort())
            .field("ctustart", &msr.ctustart())
            .field("chaddr", &msr.chaddr())
            .field("acko", &msr.acko())
            .field("calibrtd", &msr.calibrtd())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AdcState::from(0), AdcState::Idle);
        assert_eq!(AdcState::from(1), AdcState::PowerDown);
        assert_eq!(AdcState::from(2), AdcState::Wait);
        assert_eq!(AdcState::from(3), AdcState::Reserved(3));
        assert_eq!(AdcState::from(4), AdcState::Sample);
        assert_eq!(AdcState::from(6), AdcState::Conversion);
        assert_eq!(AdcState::from(7), AdcState::Reserved(7));
    }
}
