/// ProgressReporter port for narrating a report run
///
/// This port abstracts progress reporting (e.g., to stderr) so that the
/// collector can tell the user what it is querying without touching stdout,
/// which is reserved for the report path or document.
pub trait ProgressReporter {
    /// Reports the start of a collection step
    ///
    /// # Arguments
    /// * `message` - What is being queried
    fn report_step(&self, message: &str);

    /// Reports an informational message, ending the current step
    fn report(&self, message: &str);

    /// Reports a degraded query or another non-fatal problem
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &P {
    fn report_step(&self, message: &str) {
        (**self).report_step(message)
    }

    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
