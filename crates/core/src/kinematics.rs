//! Pairwise kinematic quantities.
//!
//! All functions are total: degenerate inputs produce NaN or signed values
//! rather than panicking, and callers decide what to do with them.

use std::f64::consts::{PI, TAU};

use crate::Candidate;

/// Returns the invariant mass of the combined four-momentum of two candidates.
///
/// See [`FourMomentum::mass`](crate::FourMomentum::mass) for the sign
/// convention applied to spacelike sums.
#[must_use]
pub fn invariant_mass<A, B>(a: &A, b: &B) -> f64
where
    A: Candidate + ?Sized,
    B: Candidate + ?Sized,
{
    (a.p4() + b.p4()).mass()
}

/// Returns `phi1 - phi2` mapped into `(-π, π]`.
///
/// The difference takes the short way around the circle. Non-finite inputs
/// yield NaN.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use tagprobe_core::kinematics::delta_phi;
///
/// let dphi = delta_phi(3.0, -3.0);
/// assert_relative_eq!(dphi, 6.0 - std::f64::consts::TAU, epsilon = 1e-12);
/// ```
#[must_use]
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    let raw = phi1 - phi2;
    if (-PI..=PI).contains(&raw) && raw != -PI {
        return raw;
    }
    PI - (PI - raw).rem_euclid(TAU)
}

/// Returns the angular separation `ΔR = sqrt(Δη² + Δφ²)`.
#[must_use]
pub fn delta_r(eta1: f64, phi1: f64, eta2: f64, phi2: f64) -> f64 {
    let deta = eta1 - eta2;
    let dphi = delta_phi(phi1, phi2);
    deta.hypot(dphi)
}

/// Returns the angular separation between two candidates.
#[must_use]
pub fn candidate_delta_r<A, B>(a: &A, b: &B) -> f64
where
    A: Candidate + ?Sized,
    B: Candidate + ?Sized,
{
    delta_r(a.eta(), a.phi(), b.eta(), b.phi())
}
