//! At-most-once triggering for viewport animations.
//!
//! Observers may deliver the same element again before `unobserve` takes
//! effect; the handled marker here is what actually guarantees one run.

/// Visibility report for the element at `index` in an observed group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub index: usize,
    pub is_intersecting: bool,
}

impl VisibilityEntry {
    pub fn new(index: usize, is_intersecting: bool) -> Self {
        Self {
            index,
            is_intersecting,
        }
    }
}

/// A single "already animated" marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True exactly once.
    pub fn try_fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Markers for a fixed group of observed elements.
#[derive(Clone, Debug, Default)]
pub struct OneShotGroup {
    shots: Vec<OneShot>,
}

impl OneShotGroup {
    pub fn new(len: usize) -> Self {
        Self {
            shots: vec![OneShot::default(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn is_handled(&self, index: usize) -> bool {
        self.shots.get(index).is_some_and(OneShot::has_fired)
    }

    /// Number of elements still waiting for their animation.
    pub fn remaining(&self) -> usize {
        self.shots.iter().filter(|shot| !shot.has_fired()).count()
    }

    /// Indices to animate (and stop observing) for this batch, in delivery
    /// order. Non-intersecting, unknown and already handled entries are
    /// skipped.
    pub fn take_ready(&mut self, entries: &[VisibilityEntry]) -> Vec<usize> {
        entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter_map(|entry| {
                let shot = self.shots.get_mut(entry.index)?;
                shot.try_fire().then_some(entry.index)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut shot = OneShot::default();
        assert!(shot.try_fire());
        assert!(!shot.try_fire());
        assert!(shot.has_fired());
    }

    #[test]
    fn take_ready_skips_hidden_and_repeats() {
        let mut group = OneShotGroup::new(3);
        let ready = group.take_ready(&[
            VisibilityEntry::new(2, true),
            VisibilityEntry::new(0, false),
            VisibilityEntry::new(2, true),
        ]);
        assert_eq!(ready, vec![2]);
        assert_eq!(group.remaining(), 2);

        let again =
            group.take_ready(&[VisibilityEntry::new(2, true), VisibilityEntry::new(0, true)]);
        assert_eq!(again, vec![0]);
        assert!(group.is_handled(0) && group.is_handled(2));
        assert!(!group.is_handled(1));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut group = OneShotGroup::new(1);
        assert!(group.take_ready(&[VisibilityEntry::new(5, true)]).is_empty());
        assert!(!group.is_handled(5));
    }
}
