use serde::{Deserialize, Serialize};

/// A pairing of one tag with one probe, referenced by position.
///
/// Associations are directional: `(i, j)` and `(j, i)` are distinct even when
/// the tag and probe sequences are the same collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Association {
    /// Index into the tag sequence.
    pub tag: usize,

    /// Index into the probe sequence.
    pub probe: usize,
}

impl Association {
    /// Creates a new association.
    #[must_use]
    pub fn new(tag: usize, probe: usize) -> Self {
        Self { tag, probe }
    }
}

impl From<(usize, usize)> for Association {
    fn from((tag, probe): (usize, usize)) -> Self {
        Self::new(tag, probe)
    }
}

/// An ordered, many-to-many collection of associations.
///
/// Entries keep the order in which they were discovered. A tag may pair with
/// several probes and a probe with several tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Associations(Vec<Association>);

impl Associations {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends an association.
    pub fn push(&mut self, association: Association) {
        self.0.push(association);
    }

    /// Returns the number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection holds no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the associations in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Association> {
        self.0.iter()
    }

    /// Returns the associations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Association] {
        &self.0
    }

    /// Returns `true` if the `(tag, probe)` pair is present.
    #[must_use]
    pub fn contains(&self, tag: usize, probe: usize) -> bool {
        self.0.contains(&Association::new(tag, probe))
    }

    /// Returns the probe indices paired with `tag`, in discovery order.
    pub fn probes_for(&self, tag: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter(move |a| a.tag == tag).map(|a| a.probe)
    }

    /// Returns the tag indices paired with `probe`, in discovery order.
    pub fn tags_for(&self, probe: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter(move |a| a.probe == probe).map(|a| a.tag)
    }

    /// Consumes the collection and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Association> {
        self.0
    }
}

impl From<Vec<Association>> for Associations {
    fn from(associations: Vec<Association>) -> Self {
        Self(associations)
    }
}

impl FromIterator<Association> for Associations {
    fn from_iter<I: IntoIterator<Item = Association>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Association> for Associations {
    fn extend<I: IntoIterator<Item = Association>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Associations {
    type Item = Association;
    type IntoIter = std::vec::IntoIter<Association>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Associations {
    type Item = &'a Association;
    type IntoIter = std::slice::Iter<'a, Association>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Associations {
        [(0, 1), (0, 2), (1, 1), (2, 0)]
            .into_iter()
            .map(Association::from)
            .collect()
    }

    #[test]
    fn keeps_discovery_order() {
        let tags: Vec<_> = sample().iter().map(|a| a.tag).collect();
        assert_eq!(tags, vec![0, 0, 1, 2]);
    }

    #[test]
    fn many_to_many_lookups() {
        let associations = sample();

        assert_eq!(associations.probes_for(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(associations.tags_for(1).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(associations.probes_for(3).count(), 0);
    }

    #[test]
    fn direction_matters() {
        let associations = sample();

        assert!(associations.contains(2, 0));
        assert!(!associations.contains(1, 0));
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let associations = Associations::from(vec![Association::new(3, 4)]);
        let json = serde_json::to_string(&associations).unwrap();

        assert_eq!(json, r#"[{"tag":3,"probe":4}]"#);
    }
}
