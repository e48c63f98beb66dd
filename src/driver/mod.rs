/*
Driver Layer
============

Everything the embedding host needs to run the core on a real clock:
tempo-to-cycle conversion, the per-cycle follower trigger schedule, and
the deferred root-nudge handshake. The core itself never sees any of
this; it only sees `tick` calls and reads.
*/

pub mod clock;
pub mod nudge;
pub mod triggers;

pub use clock::CycleClock;
pub use nudge::NudgeLatch;
pub use triggers::{FollowerTriggers, FOLLOWER_TRIGGER_POINTS};
