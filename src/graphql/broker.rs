//! In-process change fan-out backing the subscription roots.
//!
//! Delivery contract: at-most-once, no replay. Events published while a
//! client is not subscribed are never seen, and a subscriber that lags more
//! than the channel capacity skips the missed events.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct ChangeBroker {
    parkings: broadcast::Sender<entity::parking::Model>,
    reservations: broadcast::Sender<entity::reservation::Model>,
    notifications: broadcast::Sender<entity::notification::Model>,
}

impl ChangeBroker {
    pub fn new() -> Self {
        ChangeBroker {
            parkings: broadcast::channel(CHANNEL_CAPACITY).0,
            reservations: broadcast::channel(CHANNEL_CAPACITY).0,
            notifications: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }

    // Publishing with no subscribers is not an error.
    pub fn publish_parking(&self, model: entity::parking::Model) {
        let _ = self.parkings.send(model);
    }

    pub fn publish_reservation(&self, model: entity::reservation::Model) {
        let _ = self.reservations.send(model);
    }

    pub fn publish_notification(&self, model: entity::notification::Model) {
        let _ = self.notifications.send(model);
    }

    pub fn subscribe_parkings(&self) -> broadcast::Receiver<entity::parking::Model> {
        self.parkings.subscribe()
    }

    pub fn subscribe_reservations(&self) -> broadcast::Receiver<entity::reservation::Model> {
        self.reservations.subscribe()
    }

    pub fn subscribe_notifications(&self) -> broadcast::Receiver<entity::notification::Model> {
        self.notifications.subscribe()
    }
}

impl Default for ChangeBroker {
    fn default() -> Self {
        Self::new()
    }
}
