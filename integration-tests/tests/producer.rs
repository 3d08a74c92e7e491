use integration_tests::zmumu_event;
use tagprobe_core::{Association, Associations};
use tagprobe_matching::CutFlow;
use tagprobe_producer::{EventRecord, ProducerConfig, TagProbeProducer, produce_all};

const EVENTS: &str = include_str!("data/events.json");

fn default_producer() -> TagProbeProducer {
    TagProbeProducer::new(
        "tagProbeMap",
        &ProducerConfig::new("tagMuons", "probeMuons"),
    )
    .expect("default config is valid")
}

fn published(event: &EventRecord) -> Vec<Association> {
    event
        .associations("tagProbeMap")
        .expect("producer always publishes")
        .clone()
        .into_vec()
}

#[test]
fn events_from_json_file() {
    let mut events: Vec<EventRecord> = serde_json::from_str(EVENTS).unwrap();
    let producer = default_producer();

    for event in &mut events {
        producer.produce(event);
    }

    assert_eq!(published(&events[0]), vec![Association::new(0, 0)]);
    assert!(published(&events[1]).is_empty());
    assert_eq!(
        published(&events[2]),
        vec![Association::new(0, 1), Association::new(1, 0)]
    );
}

#[test]
fn parallel_run_matches_sequential_run() {
    let events: Vec<EventRecord> = serde_json::from_str(EVENTS).unwrap();
    let producer = default_producer();

    let mut sequential = events.clone();
    let sequential_flows: Vec<CutFlow> = sequential
        .iter_mut()
        .map(|event| producer.produce(event))
        .collect();

    let mut parallel = events;
    let parallel_flows = produce_all(&producer, &mut parallel);

    assert_eq!(parallel_flows, sequential_flows);
    assert_eq!(parallel, sequential);
}

#[test]
fn cut_flows_add_up_over_a_run() {
    let mut events: Vec<EventRecord> = (0..50)
        .map(|id| zmumu_event(id, 91.0, 2.0 + 0.02 * id as f64))
        .collect();

    let flows = produce_all(&default_producer(), &mut events);

    let mut total = CutFlow::default();
    for flow in &flows {
        total.merge(flow);
    }

    // One tag against a Z partner and a soft same-sign muon per event.
    assert_eq!(total.examined, 100);
    assert_eq!(total.accepted, 50);
    assert!(events.iter().all(|event| published(event) == vec![Association::new(0, 0)]));
}

#[test]
fn charge_requirement_is_configurable() {
    let mut event = EventRecord::new(1).with_candidates(
        "muons",
        serde_json::from_str(
            r#"[
                { "p4": { "px": 45.5, "py": 0.0, "pz": 0.0, "e": 45.5 }, "charge": 1 },
                { "p4": { "px": -45.5, "py": 0.0, "pz": 0.0, "e": 45.5 }, "charge": 1 },
                { "p4": { "px": 0.0, "py": 45.5, "pz": 0.0, "e": 45.5 }, "charge": 0 }
            ]"#,
        )
        .unwrap(),
    );

    let os = TagProbeProducer::new("os", &ProducerConfig::new("muons", "muons")).unwrap();

    let mut any_config = ProducerConfig::new("muons", "muons");
    any_config.require_os = false;
    let any = TagProbeProducer::new("any", &any_config).unwrap();

    os.produce(&mut event);
    any.produce(&mut event);

    // Same-sign pair (0, 1) survives only without the requirement; the neutral
    // candidate pairs with mass sqrt(2) * 45.5 ~ 64.3 either way.
    let os_pairs: Vec<_> = event.associations("os").unwrap().iter().copied().collect();
    let any_pairs: Vec<_> = event.associations("any").unwrap().iter().copied().collect();

    assert_eq!(
        os_pairs,
        vec![
            Association::new(0, 2),
            Association::new(1, 2),
            Association::new(2, 0),
            Association::new(2, 1),
        ]
    );
    assert_eq!(
        any_pairs,
        vec![
            Association::new(0, 1),
            Association::new(0, 2),
            Association::new(1, 0),
            Association::new(1, 2),
            Association::new(2, 0),
            Association::new(2, 1),
        ]
    );
}

#[test]
fn published_collection_round_trips_through_json() {
    let mut events: Vec<EventRecord> = serde_json::from_str(EVENTS).unwrap();
    default_producer().produce(&mut events[2]);

    let json = serde_json::to_string(&events[2]).unwrap();
    let reread: EventRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(
        reread.associations("tagProbeMap"),
        Some(&Associations::from(vec![
            Association::new(0, 1),
            Association::new(1, 0)
        ]))
    );
}
