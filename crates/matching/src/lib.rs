//! Tag-and-probe pair matching.
//!
//! # Algorithm
//!
//! Every tag is paired with every probe. Each pair is tested against three
//! cuts, in order, stopping at the first failure:
//!
//! 1. the invariant mass of the combined four-momentum lies in the mass window,
//! 2. the angular separation `ΔR` lies in the `ΔR` window,
//! 3. if opposite sign is required, the charge product is not positive.
//!
//! Surviving pairs are recorded as [`Association`]s in discovery order
//! (tag-major, probe-minor). Windows are inclusive at both ends.
//!
//! The enumeration is exhaustive and keeps every passing pair, not a best
//! match. A candidate may appear in any number of associations.
//!
//! A pair whose charge product is zero (a neutral candidate) always passes the
//! charge cut, even when opposite sign is required.
//!
//! # Observer Events
//!
//! [`associate`] emits one [`Event`] per examined pair:
//!
//! - [`Event::Accepted`]: the pair passed all cuts and was recorded
//! - [`Event::Rejected`]: the pair failed the cut named by its [`Rejection`]
//!
//! Observers can return [`Action::StopEarly`] to end the enumeration; the
//! [`Outcome`] then reports [`Status::StoppedByObserver`]. [`CutFlow`] is a
//! ready-made observer that tallies the events.
//!
//! [`Association`]: tagprobe_core::Association

mod action;
mod cut_flow;
mod cuts;
mod event;
mod outcome;
mod pair;


pub use action::Action;
pub use cut_flow::CutFlow;
pub use cuts::{ConfigError, Cuts, Window, WindowError};
pub use event::{Cut, Event, Rejection};
pub use outcome::{Outcome, Status};
pub use pair::{PairKinematics, evaluate};

use rayon::prelude::*;
use tagprobe_core::{Association, Associations, Candidate, Observer};

/// Matches tags against probes, reporting every examined pair to `observer`.
///
/// See the [crate docs](crate) for the cut sequence and event timing.
pub fn associate<T, P, Obs>(tags: &[T], probes: &[P], cuts: &Cuts, mut observer: Obs) -> Outcome
where
    T: Candidate,
    P: Candidate,
    Obs: Observer<Event, Action>,
{
    let mut associations = Associations::new();
    let mut pairs_examined = 0;

    for (tag_index, tag) in tags.iter().enumerate() {
        for (probe_index, probe) in probes.iter().enumerate() {
            pairs_examined += 1;

            let event = match evaluate(tag, probe, cuts) {
                Ok(kinematics) => {
                    let association = Association::new(tag_index, probe_index);
                    associations.push(association);
                    Event::Accepted {
                        association,
                        kinematics,
                    }
                }
                Err(rejection) => Event::Rejected {
                    tag: tag_index,
                    probe: probe_index,
                    rejection,
                },
            };

            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Outcome {
                    status: Status::StoppedByObserver,
                    associations,
                    pairs_examined,
                };
            }
        }
    }

    Outcome {
        status: Status::Exhausted,
        associations,
        pairs_examined,
    }
}

/// Matches tags against probes without observer support.
///
/// This is a convenience wrapper around [`associate`] that uses a no-op
/// observer, so every pair is examined.
///
/// # Example
///
/// ```
/// use tagprobe_core::{Association, FourMomentum, RecoCandidate};
/// use tagprobe_matching::{Cuts, associate_unobserved};
///
/// let tags = [RecoCandidate::new(FourMomentum::new(45.5, 0.0, 0.0, 45.5), 1)];
/// let probes = [
///     RecoCandidate::new(FourMomentum::new(-45.5, 0.0, 0.0, 45.5), -1),
///     RecoCandidate::new(FourMomentum::new(-5.0, 0.0, 0.0, 5.0), -1),
/// ];
///
/// let associations = associate_unobserved(&tags, &probes, &Cuts::default());
///
/// assert_eq!(associations.into_vec(), vec![Association::new(0, 0)]);
/// ```
pub fn associate_unobserved<T, P>(tags: &[T], probes: &[P], cuts: &Cuts) -> Associations
where
    T: Candidate,
    P: Candidate,
{
    associate(tags, probes, cuts, ()).associations
}

/// Matches tags against probes, spreading tags across the rayon thread pool.
///
/// The result is identical to [`associate_unobserved`], including order.
pub fn associate_par<T, P>(tags: &[T], probes: &[P], cuts: &Cuts) -> Associations
where
    T: Candidate + Sync,
    P: Candidate + Sync,
{
    let rows: Vec<Vec<Association>> = tags
        .par_iter()
        .enumerate()
        .map(|(tag_index, tag)| {
            probes
                .iter()
                .enumerate()
                .filter(|(_, probe)| evaluate(tag, *probe, cuts).is_ok())
                .map(|(probe_index, _)| Association::new(tag_index, probe_index))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
