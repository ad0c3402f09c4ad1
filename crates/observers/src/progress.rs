use std::{fmt::Display, io};

use newt_core::Observer;

/// An observer that writes one line per event to a writer.
///
/// Each event is rendered with its [`Display`] impl, so for the Newton solver
/// the output matches what `Config::with_verbose(true)` prints to stdout.
/// Write failures never interrupt the solver: the first error is kept and
/// returned by [`Progress::finish`], and later events are ignored.
///
/// # Example
///
/// ```ignore
/// let mut progress = Progress::new(Vec::new());
/// newton::minimize(&model, &problem, 10.0, &config, &mut progress)?;
/// let log = String::from_utf8(progress.finish()?)?;
/// ```
#[derive(Debug)]
pub struct Progress<W> {
    writer: W,
    error: Option<io::Error>,
}

impl Progress<io::Stdout> {
    /// Creates a progress observer that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> Progress<W> {
    /// Creates a progress observer that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Writes a single line for `event`.
    pub fn write<E: Display>(&mut self, event: &E) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{event}") {
            self.error = Some(err);
        }
    }

    /// Flushes and returns the writer.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write, E: Display, A> Observer<E, A> for Progress<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.write(event);
        None
    }
}

/// Allows `&mut Progress` to be passed to solvers that take an observer by
/// value, so [`Progress::finish`] can be called after the solve completes.
impl<W: io::Write, E: Display, A> Observer<E, A> for &mut Progress<W> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).write(event);
        None
    }
}
