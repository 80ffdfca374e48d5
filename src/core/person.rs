// A person has a mandatory full name and optional contact details.
//
// Responsibilities
// - Own the count of events this person is currently registered to.
// - Keep that count inside [0, MAX_EVENTS]. Writes outside the range are dropped, not clamped.
//
// Boundaries
// - A person never references the events it belongs to. Events move the counter through
//   `enroll` and `withdraw`, never by touching the field.

use crate::core::ids::PersonId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of events a single person may be registered to at once.
pub const MAX_EVENTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    email_address: Option<String>,
    phone_number: Option<String>,
    registered_event_count: usize,
}

/// Serialized shape of a person. Only turned into a `Person` through `TryFrom`,
/// which refuses a registration count above MAX_EVENTS.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub registered_event_count: usize,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("registration count {count} exceeds {max}", max = MAX_EVENTS)]
pub struct PersonRecordError {
    pub count: usize,
}

impl TryFrom<PersonRecord> for Person {
    type Error = PersonRecordError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        if record.registered_event_count > MAX_EVENTS {
            return Err(PersonRecordError {
                count: record.registered_event_count,
            });
        }
        Ok(Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email_address: record.email_address,
            phone_number: record.phone_number,
            registered_event_count: record.registered_event_count,
        })
    }
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: None,
            phone_number: None,
            registered_event_count: 0,
        }
    }

    pub fn with_contact(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let mut person = Self::new(first_name, last_name);
        person.email_address = Some(email_address.into());
        person.phone_number = Some(phone_number.into());
        person
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn set_email_address(&mut self, email_address: Option<String>) {
        self.email_address = email_address;
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        self.phone_number = phone_number;
    }

    pub fn registered_event_count(&self) -> usize {
        self.registered_event_count
    }

    /// Overwrites the registration count when `count <= MAX_EVENTS`.
    /// Any other value is ignored and the previous count stays in place.
    pub fn set_registered_event_count(&mut self, count: usize) {
        self.apply_count(Some(count));
    }

    pub fn has_free_registration(&self) -> bool {
        self.registered_event_count < MAX_EVENTS
    }

    pub(crate) fn enroll(&mut self) -> bool {
        self.apply_count(self.registered_event_count.checked_add(1))
    }

    pub(crate) fn withdraw(&mut self) -> bool {
        self.apply_count(self.registered_event_count.checked_sub(1))
    }

    fn apply_count(&mut self, count: Option<usize>) -> bool {
        match count {
            Some(count) if count <= MAX_EVENTS => {
                self.registered_event_count = count;
                true
            }
            _ => {
                debug!(
                    person_id = %self.id,
                    current = self.registered_event_count,
                    requested = ?count,
                    "registration count write out of range, ignored"
                );
                false
            }
        }
    }
}
