/// Watches a running solver and optionally steers it.
///
/// A solver hands each iteration's event to its observer. Returning `None`
/// leaves the iteration untouched; returning `Some(action)` asks the solver to
/// apply one of its own control actions (for example stopping early).
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the no-op
/// observer used by the `*_unobserved` solver entry points.
pub trait Observer<E, A> {
    /// Receives one solver event and returns an optional control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
