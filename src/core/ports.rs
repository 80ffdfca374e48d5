// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - ParticipantDirectory: reach a participant's counter by identity when an event is cancelled.
// - ChangeLog: journal successful calendar mutations.
//
// Boundaries
// - No concrete storage here. The in memory change log lives in the adapters layer; the
//   directory is implemented for the plain collections callers already hold.

use crate::core::changes::{CalendarChange, RecordedChange};
use crate::core::ids::PersonId;
use crate::core::person::Person;
use std::collections::HashMap;

pub trait ParticipantDirectory {
    fn person_mut(&mut self, person_id: &PersonId) -> Option<&mut Person>;
}

impl ParticipantDirectory for HashMap<PersonId, Person> {
    fn person_mut(&mut self, person_id: &PersonId) -> Option<&mut Person> {
        self.get_mut(person_id)
    }
}

impl ParticipantDirectory for [Person] {
    fn person_mut(&mut self, person_id: &PersonId) -> Option<&mut Person> {
        self.iter_mut().find(|person| person.id() == *person_id)
    }
}

impl ParticipantDirectory for [&mut Person] {
    fn person_mut(&mut self, person_id: &PersonId) -> Option<&mut Person> {
        self.iter_mut()
            .find(|person| person.id() == *person_id)
            .map(|person| &mut **person)
    }
}

pub trait ChangeLog {
    fn record(&mut self, change: CalendarChange);
    fn changes(&self) -> &[RecordedChange];
}
