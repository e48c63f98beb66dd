/// Converts a BPM tempo into the sequencer's cycle clock.
///
/// One cycle is one bar of four beats, so the cycle period is
/// `60 / bpm * 4` seconds. The clock tracks fractional progress through
/// the current cycle and reports boundary crossings; the driver calls
/// `tick` once per crossing and polls follower triggers in between.
#[derive(Debug, Clone)]
pub struct CycleClock {
    bpm: f64,
    period_secs: f64,
    elapsed_secs: f64,
}

impl CycleClock {
    /// Lowest tempo the clock accepts; avoids a divide-by-zero period
    pub const MIN_BPM: f64 = 1.0;

    /// Create a clock at the given tempo, at the start of a cycle.
    pub fn new(bpm: f64) -> Self {
        let bpm = bpm.max(Self::MIN_BPM);
        Self {
            bpm,
            period_secs: Self::period_from_bpm(bpm),
            elapsed_secs: 0.0,
        }
    }

    /// Seconds per cycle at a given tempo (one bar of 4 beats)
    fn period_from_bpm(bpm: f64) -> f64 {
        60.0 / bpm * 4.0
    }

    /// Change tempo. Takes effect immediately; elapsed time within the
    /// current cycle is preserved, so the boundary moves but progress
    /// does not jump backwards to zero.
    pub fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm.max(Self::MIN_BPM);
        self.period_secs = Self::period_from_bpm(self.bpm);
    }

    /// Current tempo in beats per minute
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Seconds per cycle at the current tempo
    pub fn period_secs(&self) -> f64 {
        self.period_secs
    }

    /// Fraction of the current cycle already elapsed, in [0, 1)
    pub fn progress(&self) -> f64 {
        (self.elapsed_secs / self.period_secs).min(1.0)
    }

    /// Advance by a wall-clock delta. Returns the number of cycle
    /// boundaries crossed (usually 0 or 1; more only if the caller
    /// stalled for longer than a full cycle).
    pub fn advance(&mut self, dt_secs: f64) -> u32 {
        self.elapsed_secs += dt_secs.max(0.0);
        let mut crossings = 0;
        while self.elapsed_secs >= self.period_secs {
            self.elapsed_secs -= self.period_secs;
            crossings += 1;
        }
        crossings
    }
}
