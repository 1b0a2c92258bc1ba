/// Terminal state of a deferred image fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadOutcome {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Write-once tracker for a single image resource. The browser can deliver
/// load and error events in any order and more than once; only the first
/// transition counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTracker {
    outcome: LoadOutcome,
}

impl LoadTracker {
    pub fn outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// Returns true only on the Pending -> Loaded transition.
    pub fn on_load(&mut self) -> bool {
        if self.outcome == LoadOutcome::Pending {
            self.outcome = LoadOutcome::Loaded;
            true
        } else {
            false
        }
    }

    /// Returns true only on the Pending -> Failed transition.
    pub fn on_error(&mut self) -> bool {
        if self.outcome == LoadOutcome::Pending {
            self.outcome = LoadOutcome::Failed;
            true
        } else {
            false
        }
    }
}

/// Ordered responsive image candidates, rendered to a `srcset` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Srcset {
    candidates: Vec<(String, u32)>,
}

impl Srcset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(mut self, url: impl Into<String>, width: u32) -> Self {
        self.candidates.push((url.into(), width));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Attribute value in candidate order, or None when there are no
    /// candidates (so the attribute is omitted entirely).
    pub fn attr(&self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        Some(
            self.candidates
                .iter()
                .map(|(url, width)| format!("{url} {width}w"))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_pending() {
        let tracker = LoadTracker::default();
        assert_eq!(tracker.outcome(), LoadOutcome::Pending);
    }

    #[test]
    fn load_transition_happens_once() {
        let mut tracker = LoadTracker::default();
        assert!(tracker.on_load());
        assert!(!tracker.on_load());
        assert_eq!(tracker.outcome(), LoadOutcome::Loaded);
    }

    #[test]
    fn error_after_load_is_ignored() {
        let mut tracker = LoadTracker::default();
        assert!(tracker.on_load());
        assert!(!tracker.on_error());
        assert_eq!(tracker.outcome(), LoadOutcome::Loaded);
    }

    #[test]
    fn load_after_error_is_ignored() {
        let mut tracker = LoadTracker::default();
        assert!(tracker.on_error());
        assert!(!tracker.on_load());
        assert_eq!(tracker.outcome(), LoadOutcome::Failed);
    }

    #[test]
    fn empty_srcset_renders_no_attribute() {
        assert_eq!(Srcset::new().attr(), None);
        assert!(Srcset::new().is_empty());
    }

    #[test]
    fn srcset_preserves_candidate_order() {
        let srcset = Srcset::new()
            .candidate("/avatar-250.webp", 250)
            .candidate("/avatar-400.webp", 400);
        assert_eq!(
            srcset.attr().as_deref(),
            Some("/avatar-250.webp 250w, /avatar-400.webp 400w")
        );
    }
}
