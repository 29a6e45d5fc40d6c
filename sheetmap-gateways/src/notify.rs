use std::collections::HashSet;

use sheetmap_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};

/// Reports pipeline events through the log.
#[derive(Debug, Clone)]
pub struct LogNotifier {
    notify_on: HashSet<NotificationType>,
}

impl LogNotifier {
    pub fn new(notify_on: HashSet<NotificationType>) -> Self {
        Self { notify_on }
    }

    pub fn all() -> Self {
        Self::new(
            [
                NotificationType::Resolved,
                NotificationType::UsingSavedReference,
                NotificationType::Failed,
            ]
            .into_iter()
            .collect(),
        )
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for LogNotifier {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        match event {
            E::Resolved { reference, places } => {
                let names: usize = places.iter().map(|p| p.names.len()).sum();
                log::info!(
                    "Location data of {reference} loaded: {} places with {names} names",
                    places.len()
                );
            }
            E::UsingSavedReference { reference } => {
                log::info!("Using saved reference {reference}");
            }
            E::Failed { message } => {
                log::error!("Can't fetch location data: {message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_unselected_events() {
        let notifier = LogNotifier::new([NotificationType::Failed].into_iter().collect());
        assert!(notifier.skip(&NotificationEvent::UsingSavedReference { reference: "x" }));
        assert!(!notifier.skip(&NotificationEvent::Failed { message: "x" }));
        let all = LogNotifier::all();
        assert!(!all.skip(&NotificationEvent::UsingSavedReference { reference: "x" }));
    }
}
