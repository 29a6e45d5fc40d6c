use sheetmap_entities::{place::ResolvedPlace, reference::DatasetReference};

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    /// A run finished and replaced the current places.
    Resolved {
        reference: &'a DatasetReference,
        places: &'a [ResolvedPlace],
    },
    /// A saved reference is replayed without user interaction.
    UsingSavedReference { reference: &'a str },
    /// A run failed; the message is meant for humans.
    Failed { message: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Resolved,
    UsingSavedReference,
    Failed,
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::Resolved { .. } => NotificationType::Resolved,
            Self::UsingSavedReference { .. } => NotificationType::UsingSavedReference,
            Self::Failed { .. } => NotificationType::Failed,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
