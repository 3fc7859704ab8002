// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core logic for scroll-driven page animation.
//!
//! `scrollstage_core` holds everything about a scroll-animated page that can
//! be computed without touching a browser: mapping a scroll offset onto the
//! stages of a bounded section, picking the one card that gets the full-screen
//! "wow" treatment, coalescing events into frames, and the small state
//! machines behind fire-once triggers, the timeline accordion, the snap latch
//! and persisted preferences. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! Every frame re-samples the page and recomputes from scratch; nothing
//! derived survives past the frame that produced it:
//!
//! ```text
//!   scroll / resize events
//!       │
//!       ▼
//!   FrameGate::request() ──► (one frame later) FrameGate::begin_frame()
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   ScrollState ──► StageMapper::frame()  ──► StoryFrame ──► Presenter::apply()
//!               └─► WowSelector::update() ──► WowFrame   ──► Presenter::apply()
//! ```
//!
//! **[`viewport`]**: Sampled scroll state and section geometry.
//!
//! **[`stage`]**: Section progress, per-stage classification and the
//! displayed stage number.
//!
//! **[`wow`]**: Proximity-based selection of the single scaled card.
//!
//! **[`schedule`]**: The "update already queued" gate behind frame
//! coalescing.
//!
//! **[`trigger`]**: Fire-once visibility subscriptions and their observer
//! options.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that DOM
//! appliers and test doubles implement.
//!
//! **[`prefs`]**, **[`snap`]**, **[`timeline`]**, **[`tone`]**: Page-level
//! state: persisted preferences, the scroll-snap latch, the accordion and the
//! UI tone table.
//!
//! **[`config`]**: Page tunables.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod prefs;
pub mod schedule;
pub mod snap;
pub mod stage;
pub mod timeline;
pub mod tone;
pub mod trace;
pub mod trigger;
pub mod viewport;
pub mod wow;
