//! Notification payloads and their templates

use std::collections::BTreeMap;

use booking_core::{DomainEvent, UserId};

/// Message kinds the platform sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTemplate {
    ReservationConfirmed,
    ReservationCancelled,
}

impl NotificationTemplate {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReservationConfirmed => "reservation_confirmed",
            Self::ReservationCancelled => "reservation_cancelled",
        }
    }

    const fn subject(self) -> &'static str {
        match self {
            Self::ReservationConfirmed => "Your stay at {offer_title} is confirmed",
            Self::ReservationCancelled => "Your stay at {offer_title} was cancelled",
        }
    }

    const fn body(self) -> &'static str {
        match self {
            Self::ReservationConfirmed => {
                "Reservation {reservation_id} is confirmed.\n\n\
                 Check-in: {start_date}\n\
                 Check-out: {end_date}\n\
                 Guests: {guests}\n\
                 Total price: {total_price}\n"
            }
            Self::ReservationCancelled => {
                "Reservation {reservation_id} for {start_date} to {end_date} has been cancelled.\n"
            }
        }
    }
}

/// Where a notification goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Email(String),
    /// Account whose address the worker looks up at delivery time
    User(UserId),
}

impl From<&str> for Recipient {
    fn from(email: &str) -> Self {
        Self::Email(email.to_string())
    }
}

impl From<String> for Recipient {
    fn from(email: String) -> Self {
        Self::Email(email)
    }
}

impl From<UserId> for Recipient {
    fn from(user_id: UserId) -> Self {
        Self::User(user_id)
    }
}

/// A queued notification: recipient, template and the values merged into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: Recipient,
    pub template: NotificationTemplate,
    pub merge_fields: BTreeMap<String, String>,
}

impl Notification {
    pub fn new(recipient: impl Into<Recipient>, template: NotificationTemplate) -> Self {
        Self {
            recipient: recipient.into(),
            template,
            merge_fields: BTreeMap::new(),
        }
    }

    /// Add a merge field
    pub fn field(mut self, key: &str, value: impl ToString) -> Self {
        self.merge_fields.insert(key.to_string(), value.to_string());
        self
    }

    /// Notification telling the guest about a reservation event
    pub fn for_event(event: &DomainEvent) -> Self {
        match event {
            DomainEvent::ReservationConfirmed(e) => {
                Self::new(e.guest_id, NotificationTemplate::ReservationConfirmed)
                    .field("reservation_id", e.reservation_id)
                    .field("offer_title", &e.offer_title)
                    .field("start_date", e.start_date)
                    .field("end_date", e.end_date)
                    .field("guests", e.guests)
                    .field("total_price", e.total_price)
            }
            DomainEvent::ReservationCancelled(e) => {
                Self::new(e.guest_id, NotificationTemplate::ReservationCancelled)
                    .field("reservation_id", e.reservation_id)
                    .field("offer_title", &e.offer_title)
                    .field("start_date", e.start_date)
                    .field("end_date", e.end_date)
            }
        }
    }

    /// Fill the template for the resolved address. Placeholders without a
    /// merge field stay as written.
    pub fn render(&self, to: &str) -> RenderedNotification {
        RenderedNotification {
            to: to.to_string(),
            subject: fill(self.template.subject(), &self.merge_fields),
            body: fill(self.template.body(), &self.merge_fields),
        }
    }
}

/// Final text handed to a sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotification {
    pub to: String,
    pub subject: String,
    pub body: String,
}

fn fill(template: &str, fields: &BTreeMap<String, String>) -> String {
    fields.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::events::ReservationConfirmedEvent;
    use booking_core::{OfferId, ReservationId, UserId};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_render_confirmation() {
        let event = DomainEvent::ReservationConfirmed(ReservationConfirmedEvent {
            reservation_id: ReservationId::new(),
            offer_id: OfferId::new(),
            guest_id: UserId::new(),
            offer_title: "Sea view loft".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
            guests: 2,
            total_price: 400,
            timestamp: Utc::now(),
        });

        let notification = Notification::for_event(&event);
        assert!(matches!(notification.recipient, Recipient::User(_)));

        let rendered = notification.render("guest@example.com");
        assert_eq!(rendered.to, "guest@example.com");
        assert_eq!(rendered.subject, "Your stay at Sea view loft is confirmed");
        assert!(rendered.body.contains("Check-in: 2025-07-01"));
        assert!(rendered.body.contains("Total price: 400"));
    }

    #[test]
    fn test_missing_field_left_in_place() {
        let rendered = Notification::new("a@b.c", NotificationTemplate::ReservationCancelled)
            .field("offer_title", "Cabin")
            .render("a@b.c");
        assert_eq!(rendered.subject, "Your stay at Cabin was cancelled");
        assert!(rendered.body.contains("{reservation_id}"));
    }
}
