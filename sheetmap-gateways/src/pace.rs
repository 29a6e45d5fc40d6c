use sheetmap_core::gateways::pace::Pacer;
use std::{thread, time::Duration};

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        log::trace!("Pausing for {delay:?}");
        thread::sleep(delay);
    }
}
