// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web Audio tones.
//!
//! [`SoundSystem`] owns a single `AudioContext`, created lazily on the first
//! user gesture (browsers refuse to start audio before one) or the first
//! tone. If the context cannot be created the failure is logged once and
//! sound stays off for the rest of the session.

use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use scrollstage_core::tone::{DECAY_FLOOR, Tone, ToneSpec};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

/// Plays [`Tone`]s on a shared, lazily created audio context.
///
/// Clones share the same context and mute flag.
#[derive(Clone)]
pub struct SoundSystem {
    inner: Rc<SoundInner>,
}

struct SoundInner {
    context: RefCell<Option<AudioContext>>,
    /// Set when context creation failed; never cleared.
    disabled: Cell<bool>,
    muted: Cell<bool>,
}

impl SoundSystem {
    /// Creates a sound system without a context.
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self {
            inner: Rc::new(SoundInner {
                context: RefCell::new(None),
                disabled: Cell::new(false),
                muted: Cell::new(muted),
            }),
        }
    }

    /// Returns `true` if tones are suppressed.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.inner.muted.get()
    }

    /// Sets the mute flag.
    pub fn set_muted(&self, muted: bool) {
        self.inner.muted.set(muted);
    }

    /// Returns `true` once context creation has failed.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.get()
    }

    /// Creates the context if it does not exist yet.
    ///
    /// Call from a user-gesture handler.
    pub fn unlock(&self) {
        let _ = self.context();
    }

    /// Plays `tone`, unless muted or disabled.
    pub fn play(&self, tone: Tone) {
        if self.is_muted() {
            return;
        }
        let Some(context) = self.context() else {
            return;
        };
        if let Err(err) = synthesize(&context, tone.spec()) {
            log::debug!("[sound] {tone:?} failed: {err:?}");
        }
    }

    fn context(&self) -> Option<AudioContext> {
        if self.inner.disabled.get() {
            return None;
        }
        if let Some(context) = self.inner.context.borrow().as_ref() {
            return Some(context.clone());
        }
        match AudioContext::new() {
            Ok(context) => {
                *self.inner.context.borrow_mut() = Some(context.clone());
                Some(context)
            }
            Err(err) => {
                log::warn!("Web Audio API not supported, sounds disabled: {err:?}");
                self.inner.disabled.set(true);
                None
            }
        }
    }
}

/// Schedules one tone starting at the context's current time.
fn synthesize(context: &AudioContext, spec: ToneSpec) -> Result<(), JsValue> {
    // Autoplay policy may leave the context suspended until a gesture.
    if context.state() == AudioContextState::Suspended {
        let _ = context.resume()?;
    }
    let now = context.current_time();

    let gain = context.create_gain()?;
    gain.connect_with_audio_node(&context.destination())?;
    let envelope = gain.gain();
    envelope.set_value_at_time(0.0, now)?;
    envelope.linear_ramp_to_value_at_time(spec.peak_gain, now + spec.attack)?;
    envelope.exponential_ramp_to_value_at_time(DECAY_FLOOR, now + spec.duration)?;

    for &hz in spec.voices {
        let oscillator = context.create_oscillator()?;
        oscillator.set_type(OscillatorType::Sine);
        oscillator.connect_with_audio_node(&gain)?;
        let frequency = oscillator.frequency();
        frequency.set_value_at_time(hz, now)?;
        if let Some(sweep) = spec.sweep {
            frequency.exponential_ramp_to_value_at_time(sweep.to_hz, now + sweep.seconds)?;
        }
        oscillator.start_with_when(now)?;
        oscillator.stop_with_when(now + spec.duration)?;
    }
    Ok(())
}

impl core::fmt::Debug for SoundSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SoundSystem")
            .field("context", &self.inner.context.borrow().is_some())
            .field("disabled", &self.inner.disabled.get())
            .field("muted", &self.inner.muted.get())
            .finish_non_exhaustive()
    }
}
