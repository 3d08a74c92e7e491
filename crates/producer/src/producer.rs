use tagprobe_core::Observer;
use tagprobe_matching::{CutFlow, Cuts, Event, associate};
use tracing::{debug, info, warn};

use crate::{ConfigError, EventStore, InputTag, ProducerConfig};

/// Builds tag-probe associations for each event it is handed.
///
/// A producer is configured once and then runs independently on every event:
/// it reads the tag and probe sequences from the event, matches them, and
/// stores the resulting [`Associations`] under its own label.
///
/// [`Associations`]: tagprobe_core::Associations
#[derive(Debug, Clone, PartialEq)]
pub struct TagProbeProducer {
    label: String,
    tags: InputTag,
    probes: InputTag,
    cuts: Cuts,
}

impl TagProbeProducer {
    /// Creates a producer that publishes under `label`.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is empty, a collection name is missing
    /// or malformed, or a cut window is invalid.
    pub fn new(label: impl Into<String>, config: &ProducerConfig) -> Result<Self, ConfigError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }

        let tags = config.tag_input()?;
        let probes = config.probe_input()?;
        let cuts = config.cuts()?;

        info!(
            producer = %label,
            tags = %tags,
            probes = %probes,
            mass_min = cuts.mass().min(),
            mass_max = cuts.mass().max(),
            delta_r_min = cuts.delta_r().min(),
            delta_r_max = cuts.delta_r().max(),
            require_os = cuts.require_os(),
            "configured tag-probe producer"
        );

        Ok(Self {
            label,
            tags,
            probes,
            cuts,
        })
    }

    /// Returns the label the associations are published under.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the tag collection name.
    #[must_use]
    pub fn tags(&self) -> &InputTag {
        &self.tags
    }

    /// Returns the probe collection name.
    #[must_use]
    pub fn probes(&self) -> &InputTag {
        &self.probes
    }

    /// Returns the matching cuts.
    #[must_use]
    pub fn cuts(&self) -> &Cuts {
        &self.cuts
    }

    /// Matches one event and publishes the associations into it.
    ///
    /// A missing or mistyped input is logged at warning level and treated as
    /// an empty sequence. The association collection is published even when
    /// it is empty. Returns the event's cut flow.
    pub fn produce<S: EventStore>(&self, event: &mut S) -> CutFlow {
        let mut flow = CutFlow::default();

        let outcome = {
            let tags = retrieve(&*event, &self.tags, "tag");
            let probes = retrieve(&*event, &self.probes, "probe");
            associate(tags, probes, &self.cuts, |e: &Event| flow.observe(e))
        };

        debug!(
            producer = %self.label,
            examined = flow.examined,
            failed_mass = flow.failed_mass,
            failed_delta_r = flow.failed_delta_r,
            failed_charge = flow.failed_charge,
            accepted = flow.accepted,
            "matched tag-probe pairs"
        );

        event.put_associations(&self.label, outcome.associations);
        flow
    }
}

/// Looks up one input, substituting an empty sequence if it is unavailable.
fn retrieve<'s, S: EventStore>(event: &'s S, tag: &InputTag, role: &str) -> &'s [S::Candidate] {
    match event.candidates(tag) {
        Ok(candidates) => candidates,
        Err(error) => {
            warn!(role, input = %tag, %error, "could not extract {role} candidates with input tag {tag}");
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tagprobe_core::{Association, FourMomentum, RecoCandidate};

    use crate::EventRecord;

    fn z_pair() -> (RecoCandidate, RecoCandidate) {
        (
            RecoCandidate::new(FourMomentum::new(45.5, 0.0, 0.0, 45.5), 1),
            RecoCandidate::new(FourMomentum::new(-45.5, 0.0, 0.0, 45.5), -1),
        )
    }

    fn producer() -> TagProbeProducer {
        TagProbeProducer::new("tagProbeMap", &ProducerConfig::new("tagMuons", "probeMuons"))
            .unwrap()
    }

    #[test]
    fn publishes_associations_under_label() {
        let (mu_plus, mu_minus) = z_pair();
        let mut event = EventRecord::new(1)
            .with_candidates("tagMuons", vec![mu_plus])
            .with_candidates("probeMuons", vec![mu_minus, mu_plus]);

        let flow = producer().produce(&mut event);

        assert_eq!(flow.examined, 2);
        assert_eq!(flow.accepted, 1);
        assert_eq!(
            event.associations("tagProbeMap").unwrap().as_slice(),
            &[Association::new(0, 0)]
        );
    }

    #[test]
    fn missing_input_publishes_empty_collection() {
        let (mu_plus, _) = z_pair();
        let mut event = EventRecord::new(1).with_candidates("tagMuons", vec![mu_plus]);

        let flow = producer().produce(&mut event);

        assert_eq!(flow, CutFlow::default());
        assert!(event.associations("tagProbeMap").unwrap().is_empty());
    }

    #[test]
    fn mistyped_input_is_treated_as_empty() {
        let (mu_plus, mu_minus) = z_pair();
        let mut event = EventRecord::new(1)
            .with_candidates("tagMuons", vec![mu_plus])
            .with_candidates("probeMuons", vec![mu_minus]);

        let producer = producer();
        producer.produce(&mut event);

        // Feeding a producer its own output as the probe input.
        let chained = TagProbeProducer::new(
            "chained",
            &ProducerConfig::new("tagMuons", "tagProbeMap"),
        )
        .unwrap();
        let flow = chained.produce(&mut event);

        assert_eq!(flow.examined, 0);
        assert!(event.associations("chained").unwrap().is_empty());
        assert_eq!(event.associations("tagProbeMap").unwrap().len(), 1);
    }

    #[test]
    fn same_collection_as_tag_and_probe() {
        let (mu_plus, mu_minus) = z_pair();
        let mut event = EventRecord::new(1).with_candidates("muons", vec![mu_plus, mu_minus]);

        let producer =
            TagProbeProducer::new("pairs", &ProducerConfig::new("muons", "muons")).unwrap();
        producer.produce(&mut event);

        assert_eq!(
            event.associations("pairs").unwrap().as_slice(),
            &[Association::new(0, 1), Association::new(1, 0)]
        );
    }

    #[test]
    fn configuration_errors_are_fatal() {
        assert!(matches!(
            TagProbeProducer::new("", &ProducerConfig::new("a", "b")),
            Err(ConfigError::EmptyLabel)
        ));

        let mut config = ProducerConfig::new("a", "b");
        config.tag_collection = None;
        assert!(matches!(
            TagProbeProducer::new("pairs", &config),
            Err(ConfigError::MissingParameter("TagCollection"))
        ));

        let mut config = ProducerConfig::new("a", "b");
        config.mass_min_cut = 200.0;
        assert!(matches!(
            TagProbeProducer::new("pairs", &config),
            Err(ConfigError::InvalidCuts(_))
        ));
    }
}
