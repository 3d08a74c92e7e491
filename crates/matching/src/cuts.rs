use serde::Serialize;
use thiserror::Error;

/// An inclusive interval `[min, max]`.
///
/// Infinite bounds are allowed and leave that side of the window open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Window {
    min: f64,
    max: f64,
}

/// Errors that can occur when validating a [`Window`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WindowError {
    #[error("bounds must not be NaN")]
    NanBound,

    #[error("min {min} is greater than max {max}")]
    Inverted { min: f64, max: f64 },
}

impl Window {
    /// Creates a new window with validated bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is NaN or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, WindowError> {
        if min.is_nan() || max.is_nan() {
            return Err(WindowError::NanBound);
        }
        if min > max {
            return Err(WindowError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    /// Returns `true` if `value` lies within the window, bounds included.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Errors that can occur when validating matching cuts.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid mass window: {0}")]
    MassWindow(#[source] WindowError),

    #[error("invalid delta R window: {0}")]
    DeltaRWindow(#[source] WindowError),
}

/// The cut configuration for tag-probe matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cuts {
    mass: Window,
    delta_r: Window,
    require_os: bool,
}

impl Default for Cuts {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            Self::DEFAULT_MASS_MIN,
            Self::DEFAULT_MASS_MAX,
            Self::DEFAULT_DELTA_R_MIN,
            Self::DEFAULT_DELTA_R_MAX,
            true,
        )
        .unwrap()
    }
}

impl Cuts {
    pub const DEFAULT_MASS_MIN: f64 = 50.0;
    pub const DEFAULT_MASS_MAX: f64 = 120.0;
    pub const DEFAULT_DELTA_R_MIN: f64 = 0.0;
    pub const DEFAULT_DELTA_R_MAX: f64 = 10000.0;

    /// Creates a new set of cuts with validated windows.
    ///
    /// # Errors
    ///
    /// Returns an error if either window has a NaN bound or `min > max`.
    pub fn new(
        mass_min: f64,
        mass_max: f64,
        delta_r_min: f64,
        delta_r_max: f64,
        require_os: bool,
    ) -> Result<Self, ConfigError> {
        let mass = Window::new(mass_min, mass_max).map_err(ConfigError::MassWindow)?;
        let delta_r = Window::new(delta_r_min, delta_r_max).map_err(ConfigError::DeltaRWindow)?;

        Ok(Self {
            mass,
            delta_r,
            require_os,
        })
    }

    /// Returns a copy with the opposite-sign requirement set to `require_os`.
    #[must_use]
    pub fn with_require_os(self, require_os: bool) -> Self {
        Self { require_os, ..self }
    }

    /// Returns the invariant-mass window.
    #[must_use]
    pub fn mass(&self) -> Window {
        self.mass
    }

    /// Returns the angular-separation window.
    #[must_use]
    pub fn delta_r(&self) -> Window {
        self.delta_r
    }

    /// Returns whether same-sign pairs are rejected.
    #[must_use]
    pub fn require_os(&self) -> bool {
        self.require_os
    }

    /// Returns `true` if a pair with this charge product passes the charge cut.
    ///
    /// Only a strictly positive product fails, so pairs involving a neutral
    /// candidate always pass.
    #[must_use]
    pub fn passes_charge(&self, charge_product: i64) -> bool {
        !(self.require_os && charge_product > 0)
    }
}
