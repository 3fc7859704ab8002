// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page features.
//!
//! Each feature is skipped entirely when its markup is missing. The story
//! and timeline sections only resolve their contents once they first become
//! visible.

pub(crate) mod reveal;
pub(crate) mod sounds;
pub(crate) mod story;
pub(crate) mod timeline;
pub(crate) mod toggles;
pub(crate) mod wow;
