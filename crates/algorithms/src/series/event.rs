/// Emitted after each term is added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a, T> {
    /// Zero-based position of the term.
    pub index: usize,

    /// The term just added.
    pub term: &'a T,

    /// The running total, including `term`.
    pub partial: &'a T,
}

/// Actions an observer can take during accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the running total, including the observed term.
    StopEarly,
}
