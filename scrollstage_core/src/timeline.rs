// Copyright 2026 the Scrollstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expandable timeline.
//!
//! Timeline entries behave as an accordion: at most one entry shows its
//! details at a time.

/// Changes produced by one toggle, applied in field order (collapse first).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimelineToggle {
    /// Entry to collapse, if any.
    pub collapsed: Option<usize>,
    /// Entry to expand, if any.
    pub expanded: Option<usize>,
}

impl TimelineToggle {
    /// Returns `true` if the toggle changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_none() && self.expanded.is_none()
    }
}

/// Accordion state over a fixed number of entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    len: usize,
    open: Option<usize>,
}

impl Timeline {
    /// Creates a timeline with `len` collapsed entries.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the timeline has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The expanded entry, if any.
    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Toggles entry `index`.
    ///
    /// An open entry collapses. A closed entry expands, collapsing whichever
    /// entry was open before it. Out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) -> TimelineToggle {
        if index >= self.len {
            return TimelineToggle::default();
        }
        if self.open == Some(index) {
            self.open = None;
            return TimelineToggle {
                collapsed: Some(index),
                expanded: None,
            };
        }
        let collapsed = self.open.replace(index);
        TimelineToggle {
            collapsed,
            expanded: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_entry_is_open() {
        let mut timeline = Timeline::new(3);

        let t = timeline.toggle(0);
        assert_eq!((t.collapsed, t.expanded), (None, Some(0)));

        let t = timeline.toggle(2);
        assert_eq!((t.collapsed, t.expanded), (Some(0), Some(2)));
        assert_eq!(timeline.open(), Some(2));

        let t = timeline.toggle(2);
        assert_eq!((t.collapsed, t.expanded), (Some(2), None));
        assert_eq!(timeline.open(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut timeline = Timeline::new(2);
        timeline.toggle(1);
        assert!(timeline.toggle(5).is_empty());
        assert_eq!(timeline.open(), Some(1));
        assert!(Timeline::new(0).is_empty());
    }
}
