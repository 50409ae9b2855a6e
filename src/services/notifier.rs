//! In-process broadcast of "something was created" events to admin clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use utoipa::ToSchema;

/// Named events pushed to connected dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum NotificationEvent {
    NewQuote,
    DeleteQuote,
    NewMessage,
    NewEquipmentBooking,
    NewBooking,
    NewEquipmentAdded,
    EquipmentUpdated,
    EquipmentDeleted,
}

impl NotificationEvent {
    /// Wire name, also used as the SSE event name
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationEvent::NewQuote => "newQuote",
            NotificationEvent::DeleteQuote => "deleteQuote",
            NotificationEvent::NewMessage => "newMessage",
            NotificationEvent::NewEquipmentBooking => "newEquipmentBooking",
            NotificationEvent::NewBooking => "newBooking",
            NotificationEvent::NewEquipmentAdded => "newEquipmentAdded",
            NotificationEvent::EquipmentUpdated => "equipmentUpdated",
            NotificationEvent::EquipmentDeleted => "equipmentDeleted",
        }
    }
}

/// One broadcast message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub event: NotificationEvent,
    #[schema(value_type = Object)]
    pub data: Value,
    pub sent_at: DateTime<Utc>,
}

/// Fire-and-forget fan-out over a bounded broadcast channel.
///
/// Subscribers that fall more than `capacity` events behind lose the oldest
/// ones. Nothing is replayed to late subscribers.
#[derive(Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event. Never fails: serialization problems and the absence
    /// of subscribers are logged and otherwise ignored.
    pub fn publish<T: Serialize>(&self, event: NotificationEvent, data: &T) {
        let data = match serde_json::to_value(data) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(event = event.as_str(), "Failed to serialize notification: {}", e);
                return;
            }
        };
        let notification = Notification {
            event,
            data,
            sent_at: Utc::now(),
        };
        match self.sender.send(notification) {
            Ok(receivers) => tracing::debug!(event = event.as_str(), receivers, "Notification sent"),
            Err(_) => tracing::debug!(event = event.as_str(), "No subscribers, notification dropped"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::RecvError;

    #[test]
    fn test_publish_without_subscribers() {
        let notifier = Notifier::new(4);
        notifier.publish(NotificationEvent::NewMessage, &serde_json::json!({"id": 1}));
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_every_subscriber_receives() {
        let notifier = Notifier::new(4);
        let mut a = notifier.subscribe();
        let mut b = notifier.subscribe();

        notifier.publish(NotificationEvent::NewQuote, &serde_json::json!({"fullName": "Jane"}));

        for rx in [&mut a, &mut b] {
            let n = rx.recv().await.unwrap();
            assert_eq!(n.event, NotificationEvent::NewQuote);
            assert_eq!(n.data["fullName"], "Jane");
        }
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_oldest() {
        let notifier = Notifier::new(2);
        let mut rx = notifier.subscribe();

        for i in 0..4 {
            notifier.publish(NotificationEvent::NewMessage, &i);
        }

        assert!(matches!(rx.recv().await, Err(RecvError::Lagged(2))));
        assert_eq!(rx.recv().await.unwrap().data, serde_json::json!(2));
        assert_eq!(rx.recv().await.unwrap().data, serde_json::json!(3));
    }

    #[test]
    fn test_wire_shape() {
        let n = Notification {
            event: NotificationEvent::NewEquipmentBooking,
            data: serde_json::json!({}),
            sent_at: Utc::now(),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["event"], "newEquipmentBooking");
        assert!(json.get("sentAt").is_some());
        assert_eq!(NotificationEvent::NewEquipmentBooking.as_str(), "newEquipmentBooking");
    }
}
