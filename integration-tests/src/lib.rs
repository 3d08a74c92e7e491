//! Shared harness for the integration tests.
//!
//! - [`Job`] mirrors a job file that configures several producers at once
//! - [`zmumu_event`] builds a small event with a Z-like muon pair plus noise

use std::collections::BTreeMap;

use serde::Deserialize;
use tagprobe_core::RecoCandidate;
use tagprobe_producer::{ConfigError, EventRecord, ProducerConfig, TagProbeProducer};

/// A job file: producer labels mapped to their parameter sets.
#[derive(Debug, Deserialize)]
pub struct Job {
    pub producers: BTreeMap<String, ProducerConfig>,
}

impl Job {
    /// Parses a job from TOML.
    ///
    /// # Panics
    ///
    /// Panics if the job file does not parse.
    #[must_use]
    pub fn from_toml(s: &str) -> Self {
        toml::from_str(s).expect("job TOML should parse")
    }

    /// Parses a job from YAML.
    ///
    /// # Panics
    ///
    /// Panics if the job file does not parse.
    #[must_use]
    pub fn from_yaml(s: &str) -> Self {
        serde_yaml::from_str(s).expect("job YAML should parse")
    }

    /// Configures every producer, in label order.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error encountered.
    pub fn build(&self) -> Result<Vec<TagProbeProducer>, ConfigError> {
        self.producers
            .iter()
            .map(|(label, config)| TagProbeProducer::new(label.as_str(), config))
            .collect()
    }
}

/// An event with an opposite-sign muon pair of the given mass at `η = 0`,
/// separated by `delta_phi`, plus a soft same-sign muon.
///
/// The pair is stored under `tagMuons` (positive muon) and `probeMuons`
/// (negative muon followed by the soft muon).
#[must_use]
pub fn zmumu_event(id: u64, mass: f64, delta_phi: f64) -> EventRecord {
    const MUON_MASS: f64 = 0.105_658;

    let pt = mass / (2.0 * (1.0 - delta_phi.cos())).sqrt();
    let mu_plus = RecoCandidate::from_pt_eta_phi_m(pt, 0.0, 0.5 * delta_phi, MUON_MASS, 1);
    let mu_minus = RecoCandidate::from_pt_eta_phi_m(pt, 0.0, -0.5 * delta_phi, MUON_MASS, -1);
    let soft = RecoCandidate::from_pt_eta_phi_m(3.0, 1.8, 2.5, MUON_MASS, 1);

    EventRecord::new(id)
        .with_candidates("tagMuons", vec![mu_plus])
        .with_candidates("probeMuons", vec![mu_minus, soft])
}
