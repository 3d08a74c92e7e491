use serde::Serialize;
use tagprobe_core::{
    Candidate,
    kinematics::{candidate_delta_r, invariant_mass},
};

use crate::{Cuts, Rejection};

/// Kinematics of a tag-probe pair that passed every cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairKinematics {
    /// Invariant mass of the combined four-momentum.
    pub mass: f64,

    /// Angular separation between tag and probe.
    pub delta_r: f64,
}

/// Tests a single tag-probe pair against the cuts.
///
/// Cuts are applied in order (mass, `ΔR`, charge) and the first failure is
/// returned without computing the rest.
///
/// # Errors
///
/// Returns the [`Rejection`] describing the first cut the pair failed.
pub fn evaluate<T, P>(tag: &T, probe: &P, cuts: &Cuts) -> Result<PairKinematics, Rejection>
where
    T: Candidate + ?Sized,
    P: Candidate + ?Sized,
{
    let mass = invariant_mass(tag, probe);
    if !cuts.mass().contains(mass) {
        return Err(Rejection::Mass { mass });
    }

    let delta_r = candidate_delta_r(tag, probe);
    if !cuts.delta_r().contains(delta_r) {
        return Err(Rejection::DeltaR { mass, delta_r });
    }

    let charge_product = i64::from(tag.charge()) * i64::from(probe.charge());
    if !cuts.passes_charge(charge_product) {
        return Err(Rejection::SameSign { charge_product });
    }

    Ok(PairKinematics { mass, delta_r })
}
