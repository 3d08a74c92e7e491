//! Per-event host integration for tag-and-probe matching.
//!
//! The matching algorithm in [`tagprobe_matching`] works on plain candidate
//! slices. This crate wraps it in the shape an event-processing job needs:
//!
//! - [`ProducerConfig`]: the parameter set, loadable from TOML, YAML, or JSON
//! - [`InputTag`]: names a product in the per-event store
//! - [`EventStore`]: name-based lookup of inputs and publication of outputs,
//!   with [`EventRecord`] as an in-memory implementation
//! - [`TagProbeProducer`]: configured once, then run on every event
//!
//! Configuration problems are fatal and surface from
//! [`TagProbeProducer::new`]. Missing inputs are not: the producer logs a
//! warning, matches against an empty sequence, and publishes an empty
//! collection.

mod config;
mod input_tag;
mod producer;
mod store;

pub use config::{ConfigError, ProducerConfig};
pub use input_tag::{InputTag, InputTagError};
pub use producer::TagProbeProducer;
pub use store::{EventRecord, EventStore, Product, RetrievalError};

use rayon::prelude::*;
use tagprobe_matching::CutFlow;
use tracing::debug_span;

/// Runs `producer` on every event, spreading events across the rayon pool.
///
/// Events are independent, so each one is matched and published on its own.
/// Returns the cut flow of each event, in event order.
pub fn produce_all<S>(producer: &TagProbeProducer, events: &mut [S]) -> Vec<CutFlow>
where
    S: EventStore + Send,
{
    events
        .par_iter_mut()
        .enumerate()
        .map(|(index, event)| {
            let _span = debug_span!("event", index).entered();
            producer.produce(event)
        })
        .collect()
}
