use strand_core::Sequence;

/// Counts the remaining elements of `s`.
///
/// Never returns for an unbounded sequence.
pub fn length<S: Sequence>(mut s: S) -> usize {
    let mut n = 0;
    while s.has_value() {
        n += 1;
        s.advance();
    }
    n
}

/// Returns `s` advanced by `n` elements, or exhausted if it has fewer.
pub fn drop<S: Sequence>(n: usize, mut s: S) -> S {
    for _ in 0..n {
        if !s.has_value() {
            break;
        }
        s.advance();
    }
    s
}

/// Returns `s` positioned at its final element.
///
/// Returns `None` if `s` is already exhausted.
pub fn last<S>(mut s: S) -> Option<S>
where
    S: Sequence + Clone,
{
    if !s.has_value() {
        return None;
    }

    // `trailing` stays one element behind `s`.
    let mut trailing = s.clone();
    s.advance();
    while s.has_value() {
        trailing.advance();
        s.advance();
    }
    Some(trailing)
}

/// Returns the final element of `s`.
///
/// Returns `None` if `s` is already exhausted.
pub fn back<S>(s: S) -> Option<S::Item>
where
    S: Sequence + Clone,
{
    last(s).map(|s| s.current())
}

/// Returns `true` if `u` and `v` have the same length and equal elements.
pub fn same<U, V>(mut u: U, mut v: V) -> bool
where
    U: Sequence,
    V: Sequence,
    U::Item: PartialEq<V::Item>,
{
    while u.has_value() && v.has_value() {
        if u.current() != v.current() {
            return false;
        }
        u.advance();
        v.advance();
    }
    !u.has_value() && !v.has_value()
}
