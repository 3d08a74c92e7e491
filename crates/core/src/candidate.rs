use serde::{Deserialize, Serialize};

use crate::FourMomentum;

/// A reconstructed particle candidate.
///
/// Matching only reads candidates; implementors are free to carry any
/// additional reconstruction data alongside the four-momentum and charge.
pub trait Candidate {
    /// Returns the candidate's four-momentum.
    fn p4(&self) -> FourMomentum;

    /// Returns the electric charge in units of the elementary charge.
    fn charge(&self) -> i32;

    /// Returns the pseudorapidity of the candidate's momentum.
    fn eta(&self) -> f64 {
        self.p4().eta()
    }

    /// Returns the azimuthal angle of the candidate's momentum.
    fn phi(&self) -> f64 {
        self.p4().phi()
    }
}

impl<C: Candidate + ?Sized> Candidate for &C {
    fn p4(&self) -> FourMomentum {
        (**self).p4()
    }

    fn charge(&self) -> i32 {
        (**self).charge()
    }

    fn eta(&self) -> f64 {
        (**self).eta()
    }

    fn phi(&self) -> f64 {
        (**self).phi()
    }
}

/// A plain candidate holding only a four-momentum and a charge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoCandidate {
    pub p4: FourMomentum,
    pub charge: i32,
}

impl RecoCandidate {
    /// Creates a candidate from a four-momentum and charge.
    #[must_use]
    pub fn new(p4: FourMomentum, charge: i32) -> Self {
        Self { p4, charge }
    }

    /// Creates a candidate from `(pt, eta, phi, mass)` and charge.
    #[must_use]
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64, charge: i32) -> Self {
        Self::new(FourMomentum::from_pt_eta_phi_m(pt, eta, phi, m), charge)
    }
}

impl Candidate for RecoCandidate {
    fn p4(&self) -> FourMomentum {
        self.p4
    }

    fn charge(&self) -> i32 {
        self.charge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn angles_come_from_the_four_momentum() {
        let muon = RecoCandidate::from_pt_eta_phi_m(25.0, -0.8, 2.0, 0.105, -1);

        assert_relative_eq!(muon.eta(), -0.8, epsilon = 1e-12);
        assert_relative_eq!(muon.phi(), 2.0, epsilon = 1e-12);
        assert_eq!(muon.charge(), -1);
    }

    #[test]
    fn references_are_candidates() {
        fn charge_of<C: Candidate>(c: C) -> i32 {
            c.charge()
        }

        let muon = RecoCandidate::new(FourMomentum::new(1.0, 0.0, 0.0, 1.0), 1);
        assert_eq!(charge_of(&muon), 1);
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{ "p4": { "px": 1.0, "py": 2.0, "pz": 3.0, "e": 4.0 }, "charge": -1 }"#;
        let candidate: RecoCandidate = serde_json::from_str(json).unwrap();

        assert_eq!(
            candidate,
            RecoCandidate::new(FourMomentum::new(1.0, 2.0, 3.0, 4.0), -1)
        );
    }
}
