use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tagprobe_core::{Associations, Candidate, RecoCandidate};
use thiserror::Error;

use crate::InputTag;

/// Access to the products of a single event.
///
/// The producer reads its two input sequences through [`candidates`] and
/// hands its result back through [`put_associations`]. A failed lookup is
/// never fatal: the producer logs it and continues with an empty sequence.
///
/// [`candidates`]: EventStore::candidates
/// [`put_associations`]: EventStore::put_associations
pub trait EventStore {
    type Candidate: Candidate;

    /// Looks up a candidate sequence by input tag.
    ///
    /// # Errors
    ///
    /// Returns a [`RetrievalError`] if no product is registered under `tag`
    /// or the product is not a candidate sequence.
    fn candidates(&self, tag: &InputTag) -> Result<&[Self::Candidate], RetrievalError>;

    /// Stores an association collection under `label`, taking ownership.
    fn put_associations(&mut self, label: &str, associations: Associations);
}

/// Errors returned when an input product cannot be obtained.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("no product found for `{0}`")]
    NotFound(InputTag),

    #[error("product `{tag}` holds {found}, not candidates")]
    WrongType { tag: InputTag, found: &'static str },
}

/// A product held by an [`EventRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    Candidates(Vec<RecoCandidate>),
    Associations(Associations),
}

impl Product {
    fn kind(&self) -> &'static str {
        match self {
            Self::Candidates(_) => "candidates",
            Self::Associations(_) => "associations",
        }
    }
}

/// An in-memory event: a set of named products.
///
/// Product keys use the [`InputTag`] display form (`label` or
/// `label:instance`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event number, used only for diagnostics.
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    products: BTreeMap<String, Product>,
}

impl EventRecord {
    /// Creates an empty event.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            products: BTreeMap::new(),
        }
    }

    /// Adds a candidate sequence, replacing any product under the same key.
    #[must_use]
    pub fn with_candidates(mut self, key: impl Into<String>, candidates: Vec<RecoCandidate>) -> Self {
        self.insert(key, Product::Candidates(candidates));
        self
    }

    /// Inserts a product, returning the one previously stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, product: Product) -> Option<Product> {
        self.products.insert(key.into(), product)
    }

    /// Returns the product stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Product> {
        self.products.get(key)
    }

    /// Returns the association collection stored under `label`.
    #[must_use]
    pub fn associations(&self, label: &str) -> Option<&Associations> {
        match self.products.get(label)? {
            Product::Associations(associations) => Some(associations),
            Product::Candidates(_) => None,
        }
    }
}

impl EventStore for EventRecord {
    type Candidate = RecoCandidate;

    fn candidates(&self, tag: &InputTag) -> Result<&[RecoCandidate], RetrievalError> {
        match self.products.get(&tag.to_string()) {
            Some(Product::Candidates(candidates)) => Ok(candidates.as_slice()),
            Some(other) => Err(RetrievalError::WrongType {
                tag: tag.clone(),
                found: other.kind(),
            }),
            None => Err(RetrievalError::NotFound(tag.clone())),
        }
    }

    fn put_associations(&mut self, label: &str, associations: Associations) {
        self.products
            .insert(label.to_owned(), Product::Associations(associations));
    }
}
