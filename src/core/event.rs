// An event has an invitor, a title, a date and a bounded list of participants.
//
// Responsibilities
// - Enforce the registration rules: open event, free slot, not yet registered, and the
//   person still below MAX_EVENTS.
// - Move each participant's registration count through `Person::enroll` / `Person::withdraw`.
//
// Lifecycle
// - Open -> Cancelled via `cancel`. Cancelled is terminal: participants are released, the
//   capacity drops to zero and every later registration is refused.

use crate::core::ids::{EventId, PersonId};
use crate::core::person::Person;
use crate::core::ports::ParticipantDirectory;
use crate::core::registration::RegistrationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Open,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    id: EventId,
    invitor: PersonId,
    title: String,
    date: NaiveDate,
    capacity: usize,
    participants: Vec<PersonId>,
    status: EventStatus,
}

/// Serialized shape of an event. Only turned into an `Event` through `TryFrom`,
/// which checks the participant list against capacity and status.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub invitor: PersonId,
    pub title: String,
    pub date: NaiveDate,
    pub capacity: usize,
    pub participants: Vec<PersonId>,
    pub status: EventStatus,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum EventRecordError {
    #[error("{participants} participants exceed the capacity of {capacity}")]
    OverCapacity { participants: usize, capacity: usize },

    #[error("{0} appears more than once")]
    DuplicateParticipant(PersonId),

    #[error("a cancelled event must have no participants and no capacity")]
    CancelledNotEmpty,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventRecordError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        if record.status == EventStatus::Cancelled
            && (record.capacity != 0 || !record.participants.is_empty())
        {
            return Err(EventRecordError::CancelledNotEmpty);
        }
        if record.participants.len() > record.capacity {
            return Err(EventRecordError::OverCapacity {
                participants: record.participants.len(),
                capacity: record.capacity,
            });
        }
        let mut seen = HashSet::with_capacity(record.participants.len());
        if let Some(duplicate) = record.participants.iter().find(|id| !seen.insert(**id)) {
            return Err(EventRecordError::DuplicateParticipant(*duplicate));
        }
        Ok(Self {
            id: record.id,
            invitor: record.invitor,
            title: record.title,
            date: record.date,
            capacity: record.capacity,
            participants: record.participants,
            status: record.status,
        })
    }
}

impl Event {
    pub fn new(
        invitor: &Person,
        title: impl Into<String>,
        date: NaiveDate,
        max_participants: usize,
    ) -> Self {
        Self {
            id: EventId::new(),
            invitor: invitor.id(),
            title: title.into(),
            date,
            capacity: max_participants,
            participants: Vec::new(),
            status: EventStatus::Open,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn invitor(&self) -> PersonId {
        self.invitor
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Number of slots. Zero once the event is cancelled.
    pub fn max_participants(&self) -> usize {
        self.capacity
    }

    pub fn participants(&self) -> &[PersonId] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity.saturating_sub(self.participants.len())
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == EventStatus::Cancelled
    }

    /// Registers `person` and bumps their registration count.
    /// Returns false, leaving both sides untouched, if any rule refuses it.
    pub fn register(&mut self, person: &mut Person) -> bool {
        self.try_register(person).is_ok()
    }

    pub fn try_register(&mut self, person: &mut Person) -> Result<(), RegistrationError> {
        let refusal = if self.is_cancelled() {
            Some(RegistrationError::EventCancelled { event_id: self.id })
        } else if !person.has_free_registration() {
            Some(RegistrationError::PersonFullyBooked { person_id: person.id() })
        } else if self.is_registered(&person.id()) {
            Some(RegistrationError::AlreadyRegistered {
                event_id: self.id,
                person_id: person.id(),
            })
        } else if self.free_slots() == 0 {
            Some(RegistrationError::EventFullyBooked {
                event_id: self.id,
                capacity: self.capacity,
            })
        } else {
            None
        };

        if let Some(error) = refusal {
            debug!(event_id = %self.id, person_id = %person.id(), %error, "registration refused");
            return Err(error);
        }

        // has_free_registration held above, so enroll cannot be rejected here.
        person.enroll();
        self.participants.push(person.id());
        info!(
            event_id = %self.id,
            person_id = %person.id(),
            participants = self.participants.len(),
            capacity = self.capacity,
            "participant registered"
        );
        Ok(())
    }

    /// Frees the slot held by `person` and lowers their registration count.
    /// Returns false if `person` is not registered.
    pub fn unregister(&mut self, person: &mut Person) -> bool {
        self.try_unregister(person).is_ok()
    }

    pub fn try_unregister(&mut self, person: &mut Person) -> Result<(), RegistrationError> {
        let Some(slot) = self.find_registration(&person.id()) else {
            let error = RegistrationError::NotRegistered {
                event_id: self.id,
                person_id: person.id(),
            };
            debug!(event_id = %self.id, person_id = %person.id(), %error, "unregister refused");
            return Err(error);
        };

        self.participants.remove(slot);
        person.withdraw();
        info!(event_id = %self.id, person_id = %person.id(), "participant unregistered");
        Ok(())
    }

    /// Cancels the event. Every participant found in `directory` loses one registration,
    /// then the participant list is cleared and the capacity drops to zero.
    /// Returns the participants `directory` did not know, whose counts were left untouched.
    /// Calling it again has no further effect.
    pub fn cancel<D>(&mut self, directory: &mut D) -> Vec<PersonId>
    where
        D: ParticipantDirectory + ?Sized,
    {
        self.status = EventStatus::Cancelled;
        let mut unresolved = Vec::new();
        for person_id in self.participants.drain(..) {
            match directory.person_mut(&person_id) {
                Some(person) => {
                    person.withdraw();
                }
                None => {
                    warn!(
                        event_id = %self.id,
                        person_id = %person_id,
                        "participant missing from directory, count not released"
                    );
                    unresolved.push(person_id);
                }
            }
        }
        self.capacity = 0;
        info!(event_id = %self.id, unresolved = unresolved.len(), "event cancelled");
        unresolved
    }

    fn is_registered(&self, person_id: &PersonId) -> bool {
        self.find_registration(person_id).is_some()
    }

    fn find_registration(&self, person_id: &PersonId) -> Option<usize> {
        self.participants.iter().position(|id| id == person_id)
    }
}
