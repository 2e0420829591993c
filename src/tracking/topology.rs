//! Detects display topology changes by comparing successive display lists.

use crate::model::{Bounds, DisplayDescriptor};

/// Kind of topology change, mirroring the host's display notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyChange {
    Added,
    Removed,
    MetricsChanged,
}

#[derive(Debug, Default)]
pub struct TopologyWatcher {
    last: Vec<Bounds>,
}

impl TopologyWatcher {
    pub fn new(displays: &[DisplayDescriptor]) -> Self {
        let mut watcher = Self::default();
        watcher.reset(displays);
        watcher
    }

    /// Record `displays` as the current topology.
    pub fn reset(&mut self, displays: &[DisplayDescriptor]) {
        self.last = displays.iter().map(|d| d.bounds).collect();
    }

    /// Compare `displays` with the last recorded topology and record it.
    pub fn observe(&mut self, displays: &[DisplayDescriptor]) -> Option<TopologyChange> {
        let current: Vec<Bounds> = displays.iter().map(|d| d.bounds).collect();
        if current == self.last {
            return None;
        }
        let change = match current.len().cmp(&self.last.len()) {
            std::cmp::Ordering::Greater => TopologyChange::Added,
            std::cmp::Ordering::Less => TopologyChange::Removed,
            std::cmp::Ordering::Equal => TopologyChange::MetricsChanged,
        };
        self.last = current;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::descriptors_from_bounds;

    const A: Bounds = Bounds::new(0.0, 0.0, 1920.0, 1080.0);
    const B: Bounds = Bounds::new(1920.0, 0.0, 1920.0, 1080.0);

    #[test]
    fn test_unchanged_list_is_not_a_change() {
        let mut w = TopologyWatcher::new(&descriptors_from_bounds([A, B]));
        assert_eq!(w.observe(&descriptors_from_bounds([A, B])), None);
    }

    #[test]
    fn test_classifies_changes() {
        let mut w = TopologyWatcher::new(&descriptors_from_bounds([A]));
        assert_eq!(
            w.observe(&descriptors_from_bounds([A, B])),
            Some(TopologyChange::Added)
        );
        assert_eq!(
            w.observe(&descriptors_from_bounds([B])),
            Some(TopologyChange::Removed)
        );
        let scaled = Bounds::new(1920.0, 0.0, 2560.0, 1440.0);
        assert_eq!(
            w.observe(&descriptors_from_bounds([scaled])),
            Some(TopologyChange::MetricsChanged)
        );
        assert_eq!(w.observe(&descriptors_from_bounds([scaled])), None);
    }

    #[test]
    fn test_reordering_counts_as_metrics_change() {
        let mut w = TopologyWatcher::new(&descriptors_from_bounds([A, B]));
        assert_eq!(
            w.observe(&descriptors_from_bounds([B, A])),
            Some(TopologyChange::MetricsChanged)
        );
    }
}
