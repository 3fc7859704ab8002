// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UI feedback tones.
//!
//! Each tone is one or more sine voices sharing a single gain envelope: a
//! linear attack to the peak, then an exponential decay until the voices
//! stop. Some tones also sweep their frequency down exponentially.
//!
//! ```text
//!   gain
//!   peak ┤ ╭╮
//!        │ │ ╲
//!        │ │  ╲__
//!  0.001 ┤─╯     ‾‾‾‾──┤
//!        0 attack   duration
//! ```

/// Level the envelope decays to before the voices stop. Exponential ramps
/// cannot reach zero.
pub const DECAY_FLOOR: f32 = 0.001;

/// Which tone to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Soft click for buttons and links.
    Click,
    /// Two-voice camera shutter for image hovers.
    Shutter,
    /// Short tap for focusing form fields.
    Tap,
}

/// Downward frequency sweep applied to every voice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    /// Target frequency in Hz.
    pub to_hz: f32,
    /// Sweep length in seconds.
    pub seconds: f64,
}

/// Synthesis parameters for a [`Tone`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    /// Starting frequency of each sine voice, in Hz.
    pub voices: &'static [f32],
    /// Optional frequency sweep.
    pub sweep: Option<Sweep>,
    /// Peak gain reached at the end of the attack.
    pub peak_gain: f32,
    /// Attack length in seconds.
    pub attack: f64,
    /// Total length in seconds; the envelope reaches [`DECAY_FLOOR`] here and
    /// the voices stop.
    pub duration: f64,
}

impl Tone {
    /// Synthesis parameters for this tone.
    #[must_use]
    pub const fn spec(self) -> ToneSpec {
        match self {
            Self::Click => ToneSpec {
                voices: &[800.0],
                sweep: Some(Sweep {
                    to_hz: 400.0,
                    seconds: 0.05,
                }),
                peak_gain: 0.08,
                attack: 0.001,
                duration: 0.1,
            },
            Self::Shutter => ToneSpec {
                voices: &[1200.0, 800.0],
                sweep: None,
                peak_gain: 0.06,
                attack: 0.002,
                duration: 0.15,
            },
            Self::Tap => ToneSpec {
                voices: &[600.0],
                sweep: Some(Sweep {
                    to_hz: 300.0,
                    seconds: 0.08,
                }),
                peak_gain: 0.05,
                attack: 0.001,
                duration: 0.12,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_are_well_formed() {
        for tone in [Tone::Click, Tone::Shutter, Tone::Tap] {
            let spec = tone.spec();
            assert!(!spec.voices.is_empty(), "{tone:?}");
            assert!(spec.attack < spec.duration, "{tone:?}");
            assert!(spec.peak_gain > DECAY_FLOOR, "{tone:?}");
            if let Some(sweep) = spec.sweep {
                assert!(sweep.seconds <= spec.duration, "{tone:?}");
                assert!(spec.voices.iter().all(|&f| sweep.to_hz < f), "{tone:?}");
            }
        }
    }

    #[test]
    fn shutter_has_two_voices() {
        assert_eq!(Tone::Shutter.spec().voices, &[1200.0, 800.0]);
        assert_eq!(Tone::Click.spec().voices.len(), 1);
    }
}
