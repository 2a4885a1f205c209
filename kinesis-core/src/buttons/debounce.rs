//! Refractory-window debouncing
//!
//! A falling edge is accepted only if more than the refractory period has
//! passed since the last accepted edge from the same source. Rejected edges
//! leave no trace.

/// Outcome of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Edge accepted, the button's effect should be applied
    Accepted,
    /// Edge inside the refractory window, discarded
    Rejected,
}

/// Last accepted edge for one button
///
/// Timestamps are milliseconds since boot in a wrapping `u32`, so the
/// comparison stays correct across the 49-day rollover. The window starts
/// at zero, which also rejects edges during the first refractory period
/// after boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceWindow {
    refractory_ms: u32,
    last_accepted_ms: u32,
}

impl DebounceWindow {
    pub const fn new(refractory_ms: u32) -> Self {
        Self {
            refractory_ms,
            last_accepted_ms: 0,
        }
    }

    /// Process a falling edge observed at `now_ms`
    pub fn on_edge(&mut self, now_ms: u32) -> EdgeOutcome {
        if now_ms.wrapping_sub(self.last_accepted_ms) > self.refractory_ms {
            self.last_accepted_ms = now_ms;
            EdgeOutcome::Accepted
        } else {
            EdgeOutcome::Rejected
        }
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_ms(&self) -> u32 {
        self.last_accepted_ms
    }

    pub fn refractory_ms(&self) -> u32 {
        self.refractory_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_edge_after_boot_window() {
        let mut window = DebounceWindow::new(200);
        assert_eq!(window.on_edge(150), EdgeOutcome::Rejected);
        assert_eq!(window.on_edge(201), EdgeOutcome::Accepted);
        assert_eq!(window.last_accepted_ms(), 201);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let mut window = DebounceWindow::new(200);
        assert_eq!(window.on_edge(1_000), EdgeOutcome::Accepted);
        assert_eq!(window.on_edge(1_200), EdgeOutcome::Rejected);
        assert_eq!(window.on_edge(1_201), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_rejection_does_not_extend_window() {
        let mut window = DebounceWindow::new(200);
        assert_eq!(window.on_edge(1_000), EdgeOutcome::Accepted);
        assert_eq!(window.on_edge(1_150), EdgeOutcome::Rejected);
        // Measured from 1000, not from the rejected edge at 1150
        assert_eq!(window.on_edge(1_250), EdgeOutcome::Accepted);
    }

    #[test]
    fn test_edges_50ms_apart() {
        let mut window = DebounceWindow::new(200);
        assert_eq!(window.on_edge(5_000), EdgeOutcome::Accepted);
        assert_eq!(window.on_edge(5_050), EdgeOutcome::Rejected);
        assert_eq!(window.last_accepted_ms(), 5_000);
    }

    #[test]
    fn test_timer_wraparound() {
        let mut window = DebounceWindow::new(200);
        assert_eq!(window.on_edge(u32::MAX - 50), EdgeOutcome::Accepted);
        // 100 ms later, across the wrap
        assert_eq!(window.on_edge(49), EdgeOutcome::Rejected);
        // 251 ms later
        assert_eq!(window.on_edge(200), EdgeOutcome::Accepted);
    }

    proptest! {
        #[test]
        fn prop_second_edge_accepted_iff_past_window(start in 201u32..1_000_000, delta in 0u32..1_000) {
            let mut window = DebounceWindow::new(200);
            prop_assert_eq!(window.on_edge(start), EdgeOutcome::Accepted);
            let expected = if delta > 200 { EdgeOutcome::Accepted } else { EdgeOutcome::Rejected };
            prop_assert_eq!(window.on_edge(start + delta), expected);
        }

        #[test]
        fn prop_flood_in_window_accepts_once(start in 201u32..1_000_000, mut offsets in proptest::collection::vec(0u32..=200, 1..50)) {
            offsets.sort_unstable();
            let mut window = DebounceWindow::new(200);
            let accepted = offsets
                .iter()
                .filter(|&&offset| window.on_edge(start + offset) == EdgeOutcome::Accepted)
                .count();
            prop_assert_eq!(accepted, 1);
        }
    }
}
