//! Core traits and types for tag-and-probe matching.
//!
//! This crate defines the shared abstractions that the matching algorithm and
//! host adapters build on:
//!
//! - [`FourMomentum`]: an energy-momentum four-vector in GeV
//! - [`Candidate`]: a reconstructed particle with a four-momentum and charge
//! - [`kinematics`]: invariant mass and angular separation between candidates
//! - [`Association`], [`Associations`]: ordered `(tag, probe)` index pairs
//! - [`Observer`]: receives matching events and optionally returns control actions

mod association;
mod candidate;
mod four_momentum;
pub mod kinematics;
mod observer;

pub use association::{Association, Associations};
pub use candidate::{Candidate, RecoCandidate};
pub use four_momentum::FourMomentum;
pub use observer::Observer;
