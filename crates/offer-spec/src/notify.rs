use serde::Serialize;

/// User-visible notification request handed to the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// The single success notification emitted per published letter.
    pub fn letter_generated() -> Self {
        Self {
            title: "Offer letter generated!".to_string(),
            description: "Your offer letter has been generated successfully.".to_string(),
        }
    }
}

/// Collaborator that receives notifications. Queuing and display policy
/// belong to the implementor, not to the form controller.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _notification: Notification) {}
}
