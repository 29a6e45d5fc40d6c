use std::time::Duration;

/// Suspends the current run, e.g. to respect the rate limit of a service.
pub trait Pacer {
    fn pause(&self, delay: Duration);
}
