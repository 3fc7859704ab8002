// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for scrollstage.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`sampler`]: viewport and element geometry reads
//! - [`FrameScheduler`]: `requestAnimationFrame` coalescing of scroll/resize
//!   events
//! - [`VisibilityTrigger`]: fire-once `IntersectionObserver` subscriptions
//! - [`StoryPresenter`], [`WowPresenter`], [`TimelinePresenter`]: DOM writes
//! - [`LocalStorage`]: `localStorage`-backed preference store
//! - [`SoundSystem`]: Web Audio tones on a lazily created context
//! - [`ConsoleSink`]: trace events through the `log` facade

#![no_std]

extern crate alloc;

mod audio;
mod console;
mod presenter;
mod raf;
pub mod sampler;
mod storage;
mod trigger;

pub use audio::SoundSystem;
pub use console::ConsoleSink;
pub use presenter::{StoryPresenter, TimelineEntry, TimelinePresenter, WowCard, WowPresenter};
pub use raf::FrameScheduler;
pub use scrollstage_core::backend::Presenter;
pub use storage::LocalStorage;
pub use trigger::VisibilityTrigger;
