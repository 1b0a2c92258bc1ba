/// Construction parameters for a visibility gate.
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// Fraction of the target that must be visible before revealing, 0.0-1.0.
    pub threshold: f64,
    /// Extra activation margin around the viewport, CSS margin syntax.
    pub root_margin: String,
    /// Skip observation entirely and reveal at construction.
    pub eager: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "50px".to_string(),
            eager: false,
        }
    }
}

impl GateConfig {
    pub fn new(threshold: f64, root_margin: impl Into<String>) -> Self {
        Self {
            threshold,
            root_margin: root_margin.into(),
            eager: false,
        }
    }

    pub fn eager() -> Self {
        Self {
            eager: true,
            ..Self::default()
        }
    }
}

/// Single-fire reveal signal. Fired never transitions back to Pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RevealLatch {
    #[default]
    Pending,
    Fired,
}

impl RevealLatch {
    /// Returns true only on the Pending -> Fired transition.
    fn fire(&mut self) -> bool {
        match self {
            RevealLatch::Pending => {
                *self = RevealLatch::Fired;
                true
            }
            RevealLatch::Fired => false,
        }
    }

    fn fired(&self) -> bool {
        matches!(self, RevealLatch::Fired)
    }
}

/// Decision core of a visibility gate, independent of any DOM wiring.
///
/// The host feeds it intersection samples and tears it down on unmount; the
/// core decides when the one-shot reveal happens and when the observer
/// registration must be dropped. Watcher availability is an input so a
/// missing `IntersectionObserver` fails open instead of hiding content
/// forever.
#[derive(Debug, Clone, PartialEq)]
pub struct GateCore {
    threshold: f64,
    latch: RevealLatch,
    observing: bool,
}

impl GateCore {
    pub fn new(config: &GateConfig, watcher_available: bool) -> Self {
        let mut latch = RevealLatch::default();
        let observing = if config.eager || !watcher_available {
            latch.fire();
            false
        } else {
            true
        };
        Self {
            threshold: config.threshold,
            latch,
            observing,
        }
    }

    pub fn revealed(&self) -> bool {
        self.latch.fired()
    }

    /// Whether the host should hold an observer registration for this gate.
    pub fn wants_observation(&self) -> bool {
        self.observing
    }

    /// Feed one intersection sample. Returns true exactly when this sample
    /// fires the reveal; the host must then drop its registration. Samples
    /// after the reveal or after teardown are ignored.
    pub fn on_intersection(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if !self.observing {
            return false;
        }
        if !is_intersecting || ratio < self.threshold {
            return false;
        }
        self.observing = false;
        self.latch.fire()
    }

    /// Teardown before reveal. Returns true when an observation had to be
    /// dropped, false when there was nothing to drop.
    pub fn on_unmount(&mut self) -> bool {
        let was_observing = self.observing;
        self.observing = false;
        was_observing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(threshold: f64) -> GateCore {
        GateCore::new(&GateConfig::new(threshold, "0px"), true)
    }

    #[test]
    fn eager_gate_reveals_at_construction() {
        let gate = GateCore::new(&GateConfig::eager(), true);
        assert!(gate.revealed());
        assert!(!gate.wants_observation());
    }

    #[test]
    fn missing_watcher_fails_open() {
        let gate = GateCore::new(&GateConfig::default(), false);
        assert!(gate.revealed());
        assert!(!gate.wants_observation());
    }

    #[test]
    fn non_eager_gate_starts_unrevealed_and_observing() {
        let gate = observed(0.1);
        assert!(!gate.revealed());
        assert!(gate.wants_observation());
    }

    #[test]
    fn qualifying_sample_fires_once() {
        let mut gate = observed(0.1);
        assert!(gate.on_intersection(true, 0.5));
        assert!(gate.revealed());
        assert!(!gate.wants_observation());
    }

    #[test]
    fn below_threshold_sample_is_ignored() {
        let mut gate = observed(0.5);
        assert!(!gate.on_intersection(true, 0.2));
        assert!(!gate.revealed());
        assert!(gate.wants_observation());
    }

    #[test]
    fn non_intersecting_sample_is_ignored() {
        let mut gate = observed(0.0);
        assert!(!gate.on_intersection(false, 0.0));
        assert!(!gate.revealed());
    }

    #[test]
    fn ratio_equal_to_threshold_qualifies() {
        let mut gate = observed(0.1);
        assert!(gate.on_intersection(true, 0.1));
    }

    #[test]
    fn double_fire_yields_one_reveal_and_one_deregistration() {
        let mut gate = observed(0.1);
        let mut reveals = 0;
        let mut deregistrations = 0;
        for _ in 0..2 {
            if gate.on_intersection(true, 0.9) {
                reveals += 1;
                deregistrations += 1;
            }
        }
        // final cleanup finds nothing left to drop
        if gate.on_unmount() {
            deregistrations += 1;
        }
        assert_eq!(reveals, 1);
        assert_eq!(deregistrations, 1);
        assert!(gate.revealed());
    }

    #[test]
    fn unmount_before_reveal_drops_observation() {
        let mut gate = observed(0.1);
        assert!(gate.on_unmount());
        // a queued event delivered after teardown must not reveal
        assert!(!gate.on_intersection(true, 1.0));
        assert!(!gate.revealed());
        // second teardown is a no-op
        assert!(!gate.on_unmount());
    }

    #[test]
    fn reveal_survives_later_non_intersection() {
        let mut gate = observed(0.1);
        assert!(gate.on_intersection(true, 0.5));
        assert!(!gate.on_intersection(false, 0.0));
        assert!(gate.revealed());
    }
}
