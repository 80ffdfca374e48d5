// Facts recorded by the calendar after a mutation succeeded.
//
// Purpose
// - Provide a single type to pattern match on when inspecting what happened to a calendar.
//
// Versioning and evolution
// - Prefer additive changes. Do not change the meaning of a recorded variant.

use crate::core::ids::{EventId, PersonId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CalendarChange {
    EventScheduled {
        event_id: EventId,
        invitor: PersonId,
        title: String,
        date: NaiveDate,
        max_participants: usize,
    },
    ParticipantRegistered {
        event_id: EventId,
        person_id: PersonId,
    },
    ParticipantUnregistered {
        event_id: EventId,
        person_id: PersonId,
    },
    EventCancelled {
        event_id: EventId,
        released: Vec<PersonId>,
    },
    EventRenamed {
        event_id: EventId,
        title: String,
    },
    EventRescheduled {
        event_id: EventId,
        date: NaiveDate,
    },
}

impl CalendarChange {
    pub fn event_id(&self) -> EventId {
        match self {
            Self::EventScheduled { event_id, .. }
            | Self::ParticipantRegistered { event_id, .. }
            | Self::ParticipantUnregistered { event_id, .. }
            | Self::EventCancelled { event_id, .. }
            | Self::EventRenamed { event_id, .. }
            | Self::EventRescheduled { event_id, .. } => *event_id,
        }
    }
}

/// A change together with its position in the journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedChange {
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub change: CalendarChange,
}
