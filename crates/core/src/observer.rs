/// Receives events from a sequence consumer and decides how it should proceed.
///
/// Observers let callers monitor or steer a long-running fold without
/// changing its API, enabling logging, early stopping, or custom policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// consumer-specific action and `None` lets the consumer continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

/// An observer that may be switched off.
///
/// `None` never acts, so a fold can be given `flag.then_some(observer)`.
impl<E, A, O> Observer<E, A> for Option<O>
where
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.as_mut().and_then(|observer| observer.observe(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some(Action::Stop)
            },
            10,
        );

        assert_eq!(stopped_at, Some(3));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn optional_observer_acts_only_when_present() {
        let stop_at_two = |event: &usize| (*event == 2).then_some(Action::Stop);

        assert_eq!(drive(Some(stop_at_two), 10), Some(2));
        assert_eq!(drive(None::<fn(&usize) -> Option<Action>>, 10), None);
    }
}
