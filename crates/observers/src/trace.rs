//! Observer that records per-iteration series.
//!
//! See [`Trace`] and [`Traceable`] for usage.

use newt_core::Observer;
use newt_solvers::optimization::newton;

/// Extracts recordable data from a solver event.
///
/// Implement this on an event type to pass [`Trace`] directly as a solver
/// observer. Return `None` from [`key`][Traceable::key] to skip the event
/// entirely; return `None` in a series slot to skip only that series.
pub trait Traceable<const N: usize> {
    /// The key (typically the iteration number) for this event.
    fn key(&self) -> Option<f64>;

    /// The value recorded in each series.
    fn values(&self) -> [Option<f64>; N];
}

/// Records `x`, the objective, and the step against the iteration number.
///
/// The step is skipped for iterations that took the damped gradient fallback,
/// so the series only contains Newton steps.
impl<I, O> Traceable<3> for newton::Event<'_, I, O> {
    #[allow(clippy::cast_precision_loss)]
    fn key(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn values(&self) -> [Option<f64>; 3] {
        [
            Some(self.x),
            Some(self.objective),
            (!self.fallback).then_some(self.step),
        ]
    }
}

/// An observer that collects named series of `[key, value]` pairs.
///
/// The const generic `N` is the number of series. Record data by either:
///
/// - **Direct path** — pass `&mut Trace` as the solver observer for events
///   that implement [`Traceable<N>`][Traceable].
/// - **Closure path** — wrap `&mut Trace` in a closure and call
///   [`record`][Trace::record] with whatever values are of interest.
///
/// # Example — closure path
///
/// ```ignore
/// let mut trace = Trace::<1>::new(["|g|"]);
///
/// newton::minimize(&model, &problem, 1.0, &config, |event: &newton::Event<'_, _, _>| {
///     trace.record(event.iter as f64, [Some(event.gradient.abs())]);
///     None
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct Trace<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> Trace<N> {
    /// Creates a new `Trace` with the given series names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single key across all series.
    ///
    /// For each slot, `None` skips recording for that series while leaving the
    /// others unaffected.
    pub fn record(&mut self, key: f64, values: [Option<f64>; N]) {
        for (i, value) in values.into_iter().enumerate() {
            if let Some(value) = value {
                self.data[i].push([key, value]);
            }
        }
    }

    /// Returns the recorded points of the named series.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[[f64; 2]]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Iterates over `(name, points)` for every series.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[[f64; 2]])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(Vec::as_slice))
    }
}

impl<const N: usize, E, A> Observer<E, A> for Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(key) = event.key() {
            self.record(key, event.values());
        }
        None
    }
}

/// Allows `&mut Trace<N>` to be passed to solvers that take an observer by
/// value, so the series can be read after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut Trace<N>
where
    E: Traceable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
