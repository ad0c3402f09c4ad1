/// Actions an observer can take during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the current iterate.
    ///
    /// The step computed for the observed iteration is not applied.
    StopEarly,
}
