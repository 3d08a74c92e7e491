use serde::Serialize;
use tagprobe_core::Observer;

use crate::{Action, Cut, Event};

/// Tallies how many pairs each cut removed.
///
/// `CutFlow` only counts; it never stops the enumeration. Drive it from a
/// closure to keep access to the counts afterwards:
///
/// ```
/// use tagprobe_core::{FourMomentum, Observer, RecoCandidate};
/// use tagprobe_matching::{CutFlow, Cuts, Event, associate};
///
/// let mu = RecoCandidate::new(FourMomentum::new(45.5, 0.0, 0.0, 45.5), 1);
/// let candidates = [mu, mu];
///
/// let mut flow = CutFlow::default();
/// associate(&candidates, &candidates, &Cuts::default(), |e: &Event| flow.observe(e));
///
/// assert_eq!(flow.examined, 4);
/// assert_eq!(flow.failed_mass, 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CutFlow {
    /// Pairs examined.
    pub examined: usize,

    /// Pairs dropped by the mass window.
    pub failed_mass: usize,

    /// Pairs dropped by the `ΔR` window.
    pub failed_delta_r: usize,

    /// Pairs dropped by the opposite-sign requirement.
    pub failed_charge: usize,

    /// Pairs recorded as associations.
    pub accepted: usize,
}

impl CutFlow {
    /// Returns the number of pairs dropped by `cut`.
    #[must_use]
    pub fn failed(&self, cut: Cut) -> usize {
        match cut {
            Cut::Mass => self.failed_mass,
            Cut::DeltaR => self.failed_delta_r,
            Cut::OppositeSign => self.failed_charge,
        }
    }

    /// Returns the number of pairs that reached `cut`.
    #[must_use]
    pub fn reached(&self, cut: Cut) -> usize {
        match cut {
            Cut::Mass => self.examined,
            Cut::DeltaR => self.examined - self.failed_mass,
            Cut::OppositeSign => self.examined - self.failed_mass - self.failed_delta_r,
        }
    }

    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &CutFlow) {
        self.examined += other.examined;
        self.failed_mass += other.failed_mass;
        self.failed_delta_r += other.failed_delta_r;
        self.failed_charge += other.failed_charge;
        self.accepted += other.accepted;
    }
}

impl Observer<Event, Action> for CutFlow {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.examined += 1;
        match event {
            Event::Accepted { .. } => self.accepted += 1,
            Event::Rejected { rejection, .. } => match rejection.cut() {
                Cut::Mass => self.failed_mass += 1,
                Cut::DeltaR => self.failed_delta_r += 1,
                Cut::OppositeSign => self.failed_charge += 1,
            },
        }
        None
    }
}
