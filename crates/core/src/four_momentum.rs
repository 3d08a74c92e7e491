use std::ops::Add;

use serde::{Deserialize, Serialize};

/// An energy-momentum four-vector in Cartesian form, in GeV.
///
/// The components are stored as given; no on-shell condition is enforced, so
/// sums of vectors and detector-level measurements are both representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourMomentum {
    /// Creates a four-momentum from its Cartesian components.
    #[must_use]
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    /// Creates a four-momentum from transverse momentum, pseudorapidity,
    /// azimuthal angle, and mass.
    ///
    /// # Example
    ///
    /// ```
    /// use approx::assert_relative_eq;
    /// use tagprobe_core::FourMomentum;
    ///
    /// let p4 = FourMomentum::from_pt_eta_phi_m(40.0, 1.2, -0.5, 0.105);
    ///
    /// assert_relative_eq!(p4.pt(), 40.0, epsilon = 1e-12);
    /// assert_relative_eq!(p4.eta(), 1.2, epsilon = 1e-12);
    /// assert_relative_eq!(p4.phi(), -0.5, epsilon = 1e-12);
    /// assert_relative_eq!(p4.mass(), 0.105, epsilon = 1e-6);
    /// ```
    #[must_use]
    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        let px = pt * phi.cos();
        let py = pt * phi.sin();
        let pz = pt * eta.sinh();
        let p2 = pt * pt + pz * pz;
        let e = (p2 + m * m).sqrt();

        Self { px, py, pz, e }
    }

    /// Returns the transverse momentum.
    #[must_use]
    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Returns the magnitude of the three-momentum.
    #[must_use]
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Returns the Minkowski norm `E² - |p|²`.
    #[must_use]
    pub fn mass_squared(&self) -> f64 {
        self.e * self.e - (self.px * self.px + self.py * self.py + self.pz * self.pz)
    }

    /// Returns the invariant mass.
    ///
    /// A spacelike vector (negative mass squared) yields `-sqrt(-m²)`, so the
    /// sign survives for callers that compare against a physical window.
    #[must_use]
    pub fn mass(&self) -> f64 {
        let m2 = self.mass_squared();
        if m2 >= 0.0 { m2.sqrt() } else { -(-m2).sqrt() }
    }

    /// Returns the pseudorapidity.
    ///
    /// Vectors along the beam axis have infinite pseudorapidity with the sign
    /// of `pz`; the null vector has zero.
    #[must_use]
    pub fn eta(&self) -> f64 {
        let pt = self.pt();
        if pt > 0.0 {
            (self.pz / pt).asinh()
        } else if self.pz > 0.0 {
            f64::INFINITY
        } else if self.pz < 0.0 {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    /// Returns the azimuthal angle in `(-π, π]`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        if self.px == 0.0 && self.py == 0.0 {
            return 0.0;
        }
        // atan2 returns -π for a negative-zero `py`.
        let phi = self.py.atan2(self.px);
        if phi == -std::f64::consts::PI {
            std::f64::consts::PI
        } else {
            phi
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}
