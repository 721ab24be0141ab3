/// Why an accumulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The sequence ran out of terms.
    Exhausted,

    /// Reached the term limit with terms remaining.
    MaxTerms,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of [`accumulate`](super::accumulate).
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulation<T> {
    /// Final status.
    pub status: Status,

    /// Sum of the consumed terms.
    pub value: T,

    /// Number of terms consumed.
    pub terms: usize,
}
