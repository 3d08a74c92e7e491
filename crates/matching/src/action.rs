/// Actions an observer can take during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the enumeration and return the associations found so far.
    StopEarly,
}
