//! Leg-window forward scan.
//!
//! Finds the sub-sequence of a service's leg chain that carries cargo
//! from one port to another, walking the legs once left to right with an
//! explicit two-state machine.

use crate::domain::{PortId, ServiceLeg};

/// A matched window over a service's leg sequence: the legs from
/// `start` to `end` (inclusive) move cargo from the scan origin to the
/// scan destination in `transit_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LegWindow {
    pub start: usize,
    pub end: usize,
    pub transit_days: u32,
}

/// Scan progress.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Still looking for a leg departing from the scan origin.
    Searching,
    /// Accumulating legs since the window opened at `start`.
    InWindow { start: usize, transit_days: u32 },
}

/// Scans a leg chain for the window spanning `from` to `to`.
///
/// The window opens at a leg whose origin is `from` and closes at the
/// first subsequent leg (inclusive) whose destination is `to`. If `from`
/// recurs as a leg origin before the window closes, the window restarts
/// there and the partial accumulation is discarded — the last occurrence
/// wins. At most one window is returned per scan.
pub(crate) fn scan_window(legs: &[ServiceLeg], from: &PortId, to: &PortId) -> Option<LegWindow> {
    let mut state = ScanState::Searching;

    for (idx, leg) in legs.iter().enumerate() {
        if &leg.origin == from {
            state = ScanState::InWindow {
                start: idx,
                transit_days: 0,
            };
        }

        if let ScanState::InWindow {
            start,
            transit_days,
        } = state
        {
            let accumulated = transit_days + leg.transit_days;

            if &leg.destination == to {
                return Some(LegWindow {
                    start,
                    end: idx,
                    transit_days: accumulated,
                });
            }

            state = ScanState::InWindow {
                start,
                transit_days: accumulated,
            };
        }
    }

    None
}
