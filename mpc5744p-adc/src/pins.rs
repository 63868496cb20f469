//! Analog pads of the precision channels
//!
//! Several pads are shared between instances: AN11..=AN14 of ADC_0 and
//! ADC_1 use the same pads, ADC_2 and ADC_3 share PJ5..=PJ7, ADC_2 channel 4
//! shares PE6 with ADC_0 channel 4, and ADC_3 channels 3..=7 share their pads
//! with ADC_1 channels 4..=8.

use crate::channel::{Channel, ChannelSet};
use mpc5744p_adc_core::{Instance, Pad, PadControl, Port};

const fn pad(port: Port, pin: u8) -> Option<Pad> {
    Some(Pad::new(port, pin))
}

#[rustfmt::skip]
const ADC0_PADS: [Option<Pad>; 16] = [
    pad(Port::B, 7), pad(Port::B, 8), pad(Port::C, 1), pad(Port::C, 2),
    pad(Port::E, 6), pad(Port::E, 2), pad(Port::E, 7), pad(Port::E, 4),
    pad(Port::E, 5), None, None, pad(Port::B, 9),
    pad(Port::B, 10), pad(Port::B, 11), pad(Port::B, 12), None,
];

#[rustfmt::skip]
const ADC1_PADS: [Option<Pad>; 16] = [
    pad(Port::B, 13), pad(Port::B, 14), pad(Port::B, 15), pad(Port::C, 0),
    pad(Port::E, 11), pad(Port::E, 0), pad(Port::E, 12), pad(Port::E, 9),
    pad(Port::E, 10), None, None, pad(Port::B, 9),
    pad(Port::B, 10), pad(Port::B, 11), pad(Port::B, 12), None,
];

#[rustfmt::skip]
const ADC2_PADS: [Option<Pad>; 16] = [
    pad(Port::J, 5), pad(Port::J, 6), pad(Port::J, 7), None,
    pad(Port::E, 6), None, None, None,
    None, None, None, None,
    None, None, None, None,
];

#[rustfmt::skip]
const ADC3_PADS: [Option<Pad>; 16] = [
    pad(Port::J, 5), pad(Port::J, 6), pad(Port::J, 7), pad(Port::E, 11),
    pad(Port::E, 0), pad(Port::E, 12), pad(Port::E, 9), pad(Port::E, 10),
    None, None, None, None,
    None, None, None, None,
];

const PADS: [&[Option<Pad>; 16]; 4] = [&ADC0_PADS, &ADC1_PADS, &ADC2_PADS, &ADC3_PADS];

/// Pad carrying `channel` of `instance`, if the channel is routed to a pad
pub fn analog_pad(instance: Instance, channel: Channel) -> Option<Pad> {
    PADS[instance.index()][channel.index() as usize]
}

/// Switches the pads of all `channels` of `instance` to analog input.
/// Channels without a pad are skipped.
pub(crate) fn configure_analog_inputs<P: PadControl>(
    pads: &P,
    instance: Instance,
    channels: ChannelSet,
) {
    for pad in channels
        .iter()
        .filter_map(|channel| analog_pad(instance, channel))
    {
        pads.configure_analog_input(pad);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn adc0_and_adc1_share_an11_to_an14() {
        for channel in [Channel::Ch11, Channel::Ch12, Channel::Ch13, Channel::Ch14] {
            assert_eq!(
                analog_pad(Instance::Adc0, channel),
                analog_pad(Instance::Adc1, channel)
            );
        }
        assert_ne!(
            analog_pad(Instance::Adc0, Channel::Ch0),
            analog_pad(Instance::Adc1, Channel::Ch0)
        );
    }

    #[test]
    fn internally_connected_channels_have_no_pad() {
        for instance in [Instance::Adc0, Instance::Adc1] {
            for channel in [Channel::Ch9, Channel::Ch10, Channel::Ch15] {
                assert_eq!(analog_pad(instance, channel), None);
            }
        }
    }

    #[test]
    fn adc3_reuses_adc1_pads() {
        assert_eq!(
            analog_pad(Instance::Adc3, Channel::Ch3),
            analog_pad(Instance::Adc1, Channel::Ch4)
        );
        assert_eq!(
            analog_pad(Instance::Adc3, Channel::Ch7),
            Some(Pad::new(Port::E, 10))
        );
        assert_eq!(analog_pad(Instance::Adc3, Channel::Ch8), None);
    }

    #[test]
    fn adc2_routes_four_channels() {
        let routed = Channel::ALL
            .iter()
            .filter(|channel| analog_pad(Instance::Adc2, **channel).is_some())
            .count();
        assert_eq!(routed, 4);
        assert_eq!(
            analog_pad(Instance::Adc2, Channel::Ch4),
            analog_pad(Instance::Adc0, Channel::Ch4)
        );
    }
}
