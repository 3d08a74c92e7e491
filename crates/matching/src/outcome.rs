use tagprobe_core::Associations;

/// Indicates whether every pair was examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every tag-probe combination was examined.
    Exhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an observed matching pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Final matcher status.
    pub status: Status,

    /// Pairs that passed every cut, in discovery order.
    pub associations: Associations,

    /// Number of pairs examined before the matcher finished.
    pub pairs_examined: usize,
}
