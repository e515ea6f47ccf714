// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability helpers for tile placement.
//!
//! Placement itself records nothing beyond the final positions. When a tile
//! lands somewhere surprising it helps to see how the scan got there: which
//! rows were skipped and in what order tiles were committed.
//!
//! [`PlacementTrace`] is a callback sink accepted by
//! [`compute_layout_with_trace`](crate::compute_layout_with_trace) and
//! [`TileCoordinator::update_with_trace`](crate::TileCoordinator::update_with_trace).
//! [`PlacementRecorder`] is a small sink that keeps every event.

use alloc::vec::Vec;

use crate::TilePosition;

/// A callback sink for placement tracing.
pub trait PlacementTrace {
    /// Called when the scan moves on to `row` because the previous row had no
    /// gap wide enough for the tile being placed.
    fn row_advanced(&mut self, row: usize);

    /// Called when the tile at `index` is committed at `position`.
    fn tile_placed(&mut self, index: usize, position: TilePosition);
}

impl PlacementTrace for () {
    fn row_advanced(&mut self, _row: usize) {}

    fn tile_placed(&mut self, _index: usize, _position: TilePosition) {}
}

/// A recorded placement event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementEvent {
    /// The scan advanced to `row`.
    RowAdvanced {
        /// The new current row.
        row: usize,
    },
    /// A tile was committed.
    TilePlaced {
        /// Index of the tile in the input sequence.
        index: usize,
        /// Where it was placed.
        position: TilePosition,
    },
}

/// Records every placement event in order.
#[derive(Clone, Debug, Default)]
pub struct PlacementRecorder {
    events: Vec<PlacementEvent>,
}

impl PlacementRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// All events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PlacementEvent] {
        &self.events
    }

    /// Number of rows the scan advanced while searching for the tile at
    /// `index`, or `None` if no such tile was placed.
    ///
    /// A non-zero count means the tile did not fit in the row where the
    /// previous tile ended.
    #[must_use]
    pub fn rows_skipped_before(&self, index: usize) -> Option<usize> {
        let mut skipped = 0;
        for event in &self.events {
            match *event {
                PlacementEvent::RowAdvanced { .. } => skipped += 1,
                PlacementEvent::TilePlaced { index: placed, .. } if placed == index => {
                    return Some(skipped);
                }
                PlacementEvent::TilePlaced { .. } => skipped = 0,
            }
        }
        None
    }
}

impl PlacementTrace for PlacementRecorder {
    fn row_advanced(&mut self, row: usize) {
        self.events.push(PlacementEvent::RowAdvanced { row });
    }

    fn tile_placed(&mut self, index: usize, position: TilePosition) {
        self.events
            .push(PlacementEvent::TilePlaced { index, position });
    }
}
