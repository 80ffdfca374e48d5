// Reasons an event refuses to register or unregister a person.
//
// The boolean `Event::register` and `Event::unregister` are thin wrappers over the
// `try_` variants that return these.

use crate::core::ids::{EventId, PersonId};
use crate::core::person::MAX_EVENTS;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("{event_id} is cancelled")]
    EventCancelled { event_id: EventId },

    #[error("{person_id} is already registered to {max} events", max = MAX_EVENTS)]
    PersonFullyBooked { person_id: PersonId },

    #[error("{person_id} is already registered to {event_id}")]
    AlreadyRegistered { event_id: EventId, person_id: PersonId },

    #[error("{event_id} is fully booked ({capacity} participants)")]
    EventFullyBooked { event_id: EventId, capacity: usize },

    #[error("{person_id} is not registered to {event_id}")]
    NotRegistered { event_id: EventId, person_id: PersonId },
}
