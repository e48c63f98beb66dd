use crate::sequencer::VoiceRole;

/// Progress fractions within a cycle at which each follower voice hands
/// its settled pitch to the renderer. Staggering them is what spreads
/// the follower attacks across the bar instead of stacking them on the
/// downbeat.
pub const FOLLOWER_TRIGGER_POINTS: [(VoiceRole, f64); 3] = [
    (VoiceRole::Mirror, 0.4),
    (VoiceRole::Wanderer, 0.1),
    (VoiceRole::Echo, 0.7),
];

/// Once-per-cycle latch for the follower trigger points.
///
/// The driver polls this with the clock's progress fraction; each
/// follower fires at most once per cycle, when progress first reaches
/// its trigger point. `begin_cycle` clears the latch on every cycle
/// boundary.
#[derive(Debug, Clone)]
pub struct FollowerTriggers {
    fired: [bool; FOLLOWER_TRIGGER_POINTS.len()],
}

impl FollowerTriggers {
    pub fn new() -> Self {
        Self {
            fired: [false; FOLLOWER_TRIGGER_POINTS.len()],
        }
    }

    /// Clear the latch; call once per cycle boundary, right after `tick`.
    pub fn begin_cycle(&mut self) {
        self.fired = [false; FOLLOWER_TRIGGER_POINTS.len()];
    }

    /// Report followers whose trigger point has been reached since the
    /// last poll. Allocation-free; the callback runs once per newly
    /// fired follower, in trigger-table order.
    pub fn poll<F: FnMut(VoiceRole)>(&mut self, progress: f64, mut on_trigger: F) {
        for (i, &(role, point)) in FOLLOWER_TRIGGER_POINTS.iter().enumerate() {
            if !self.fired[i] && progress >= point {
                self.fired[i] = true;
                on_trigger(role);
            }
        }
    }
}

impl Default for FollowerTriggers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired_at(triggers: &mut FollowerTriggers, progress: f64) -> Vec<VoiceRole> {
        let mut fired = Vec::new();
        triggers.poll(progress, |role| fired.push(role));
        fired
    }

    #[test]
    fn wanderer_fires_first() {
        let mut triggers = FollowerTriggers::new();
        assert_eq!(fired_at(&mut triggers, 0.05), vec![]);
        assert_eq!(fired_at(&mut triggers, 0.15), vec![VoiceRole::Wanderer]);
    }

    #[test]
    fn each_follower_fires_once_per_cycle() {
        let mut triggers = FollowerTriggers::new();
        assert_eq!(
            fired_at(&mut triggers, 0.95),
            vec![VoiceRole::Mirror, VoiceRole::Wanderer, VoiceRole::Echo]
        );
        assert_eq!(fired_at(&mut triggers, 0.99), vec![]);
    }

    #[test]
    fn begin_cycle_rearms_the_latch() {
        let mut triggers = FollowerTriggers::new();
        fired_at(&mut triggers, 1.0);
        triggers.begin_cycle();
        assert_eq!(fired_at(&mut triggers, 0.5), vec![VoiceRole::Mirror, VoiceRole::Wanderer]);
        assert_eq!(fired_at(&mut triggers, 0.7), vec![VoiceRole::Echo]);
    }

    #[test]
    fn coarse_polling_still_fires_everything() {
        // A slow UI loop may skip straight past a trigger point
        let mut triggers = FollowerTriggers::new();
        let mut all = Vec::new();
        for step in [0.3, 0.8] {
            all.extend(fired_at(&mut triggers, step));
        }
        assert_eq!(
            all,
            vec![VoiceRole::Wanderer, VoiceRole::Mirror, VoiceRole::Echo]
        );
    }
}
