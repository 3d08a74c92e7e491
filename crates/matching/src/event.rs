use std::fmt;

use tagprobe_core::Association;

use crate::PairKinematics;

/// Names one of the matching cuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cut {
    /// The invariant-mass window.
    Mass,

    /// The angular-separation window.
    DeltaR,

    /// The opposite-sign requirement.
    OppositeSign,
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mass => "mass",
            Self::DeltaR => "delta_r",
            Self::OppositeSign => "opposite_sign",
        };
        f.write_str(name)
    }
}

/// Why a pair was dropped, with the value that failed the cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// The invariant mass fell outside the mass window (or was NaN).
    Mass { mass: f64 },

    /// The angular separation fell outside the `ΔR` window (or was NaN).
    ///
    /// `mass` passed its window.
    DeltaR { mass: f64, delta_r: f64 },

    /// Both charges had the same sign while opposite sign was required.
    SameSign { charge_product: i64 },
}

impl Rejection {
    /// Returns the cut that rejected the pair.
    #[must_use]
    pub fn cut(&self) -> Cut {
        match self {
            Self::Mass { .. } => Cut::Mass,
            Self::DeltaR { .. } => Cut::DeltaR,
            Self::SameSign { .. } => Cut::OppositeSign,
        }
    }
}

/// Events emitted by the matcher, one per examined pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The pair passed every cut and was recorded.
    Accepted {
        /// The recorded association.
        association: Association,

        /// The pair's invariant mass and angular separation.
        kinematics: PairKinematics,
    },

    /// The pair failed a cut and was dropped.
    Rejected {
        /// Index into the tag sequence.
        tag: usize,

        /// Index into the probe sequence.
        probe: usize,

        /// The failing cut and value.
        rejection: Rejection,
    },
}

impl Event {
    /// Returns the `(tag, probe)` indices of the examined pair.
    #[must_use]
    pub fn indices(&self) -> (usize, usize) {
        match self {
            Self::Accepted { association, .. } => (association.tag, association.probe),
            Self::Rejected { tag, probe, .. } => (*tag, *probe),
        }
    }

    /// Returns `true` if the pair was recorded.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
