// Calendar service: owns people and events and routes operations by identity.
//
// Responsibilities
// - Resolve identifiers to the Person and Event they name, refusing unknown ones.
// - Delegate the registration rules to `Event`.
// - Record every successful mutation in the change log.

use crate::adapters::in_memory::in_memory_change_log::InMemoryChangeLog;
use crate::application::errors::CalendarError;
use crate::core::changes::CalendarChange;
use crate::core::event::Event;
use crate::core::ids::{EventId, PersonId};
use crate::core::person::Person;
use crate::core::ports::ChangeLog;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, info};

pub struct Calendar<TChangeLog = InMemoryChangeLog>
where
    TChangeLog: ChangeLog,
{
    people: HashMap<PersonId, Person>,
    events: HashMap<EventId, Event>,
    change_log: TChangeLog,
}

impl Calendar<InMemoryChangeLog> {
    pub fn in_memory() -> Self {
        Self::new(InMemoryChangeLog::new())
    }
}

impl<TChangeLog> Calendar<TChangeLog>
where
    TChangeLog: ChangeLog,
{
    pub fn new(change_log: TChangeLog) -> Self {
        Self {
            people: HashMap::new(),
            events: HashMap::new(),
            change_log,
        }
    }

    pub fn change_log(&self) -> &TChangeLog {
        &self.change_log
    }

    pub fn add_person(&mut self, person: Person) -> PersonId {
        let person_id = person.id();
        info!(%person_id, name = %person.full_name(), "person added");
        self.people.insert(person_id, person);
        person_id
    }

    pub fn person(&self, person_id: &PersonId) -> Option<&Person> {
        self.people.get(person_id)
    }

    /// Mutable access for contact details. The registration count is better left to
    /// `register`, `unregister` and `cancel`.
    pub fn person_mut(&mut self, person_id: &PersonId) -> Option<&mut Person> {
        self.people.get_mut(person_id)
    }

    pub fn event(&self, event_id: &EventId) -> Option<&Event> {
        self.events.get(event_id)
    }

    pub fn invitor_of(&self, event_id: &EventId) -> Option<&Person> {
        self.event(event_id)
            .and_then(|event| self.people.get(&event.invitor()))
    }

    /// Events the person currently holds a slot in, ordered by date.
    pub fn events_of(&self, person_id: &PersonId) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .values()
            .filter(|event| event.participants().contains(person_id))
            .collect();
        events.sort_by_key(|event| (event.date(), event.id()));
        events
    }

    pub fn schedule_event(
        &mut self,
        invitor: &PersonId,
        title: impl Into<String>,
        date: NaiveDate,
        max_participants: usize,
    ) -> Result<EventId, CalendarError> {
        let invitor = self
            .people
            .get(invitor)
            .ok_or(CalendarError::UnknownPerson(*invitor))?;
        let event = Event::new(invitor, title, date, max_participants);
        let event_id = event.id();

        info!(%event_id, invitor = %event.invitor(), %date, max_participants, "event scheduled");
        self.change_log.record(CalendarChange::EventScheduled {
            event_id,
            invitor: event.invitor(),
            title: event.title().to_string(),
            date,
            max_participants,
        });
        self.events.insert(event_id, event);
        Ok(event_id)
    }

    pub fn rename_event(
        &mut self,
        event_id: &EventId,
        title: impl Into<String>,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::UnknownEvent(*event_id))?;
        event.set_title(title);
        self.change_log.record(CalendarChange::EventRenamed {
            event_id: *event_id,
            title: event.title().to_string(),
        });
        Ok(())
    }

    pub fn reschedule_event(
        &mut self,
        event_id: &EventId,
        date: NaiveDate,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::UnknownEvent(*event_id))?;
        event.set_date(date);
        self.change_log.record(CalendarChange::EventRescheduled {
            event_id: *event_id,
            date,
        });
        Ok(())
    }

    pub fn register(
        &mut self,
        event_id: &EventId,
        person_id: &PersonId,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::UnknownEvent(*event_id))?;
        let person = self
            .people
            .get_mut(person_id)
            .ok_or(CalendarError::UnknownPerson(*person_id))?;

        event.try_register(person)?;
        self.change_log.record(CalendarChange::ParticipantRegistered {
            event_id: *event_id,
            person_id: *person_id,
        });
        Ok(())
    }

    pub fn unregister(
        &mut self,
        event_id: &EventId,
        person_id: &PersonId,
    ) -> Result<(), CalendarError> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::UnknownEvent(*event_id))?;
        let person = self
            .people
            .get_mut(person_id)
            .ok_or(CalendarError::UnknownPerson(*person_id))?;

        event.try_unregister(person)?;
        self.change_log.record(CalendarChange::ParticipantUnregistered {
            event_id: *event_id,
            person_id: *person_id,
        });
        Ok(())
    }

    /// Cancels the event and returns the participants it released.
    /// An event that is already cancelled is left alone and nothing is journaled.
    pub fn cancel(&mut self, event_id: &EventId) -> Result<Vec<PersonId>, CalendarError> {
        let event = self
            .events
            .get_mut(event_id)
            .ok_or(CalendarError::UnknownEvent(*event_id))?;
        if event.is_cancelled() {
            debug!(%event_id, "event already cancelled");
            return Ok(Vec::new());
        }

        let participants = event.participants().to_vec();
        let unresolved = event.cancel(&mut self.people);
        let released: Vec<PersonId> = participants
            .into_iter()
            .filter(|person_id| !unresolved.contains(person_id))
            .collect();
        self.change_log.record(CalendarChange::EventCancelled {
            event_id: *event_id,
            released: released.clone(),
        });
        Ok(released)
    }
}

#[cfg(test)]
mod calendar_tests {
    use super::*;
    use crate::core::person::MAX_EVENTS;
    use crate::core::registration::RegistrationError;
    use crate::test_support::fixtures::people::PersonBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (Calendar, PersonId, EventId);

    #[fixture]
    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 10, 25).unwrap()
    }

    #[fixture]
    fn before_each(date: NaiveDate) -> BeforeEachReturn {
        let mut calendar = Calendar::in_memory();
        let invitor = calendar.add_person(PersonBuilder::new().first_name("Max").last_name("Müller").build());
        let party = calendar
            .schedule_event(&invitor, "Party", date, 2)
            .expect("schedule failed");
        (calendar, invitor, party)
    }

    #[rstest]
    fn it_should_schedule_an_event_for_a_known_invitor(before_each: BeforeEachReturn, date: NaiveDate) {
        let (calendar, invitor, party) = before_each;
        let event = calendar.event(&party).unwrap();
        assert_eq!(event.invitor(), invitor);
        assert_eq!(event.date(), date);
        assert_eq!(calendar.invitor_of(&party).unwrap().first_name(), "Max");
        assert!(matches!(
            calendar.change_log().changes()[0].change,
            CalendarChange::EventScheduled { max_participants: 2, .. }
        ));
    }

    #[rstest]
    fn it_should_refuse_to_schedule_for_an_unknown_invitor(before_each: BeforeEachReturn, date: NaiveDate) {
        let (mut calendar, _, _) = before_each;
        let stranger = PersonId::new();
        assert_eq!(
            calendar.schedule_event(&stranger, "Party", date, 2),
            Err(CalendarError::UnknownPerson(stranger))
        );
        assert_eq!(calendar.change_log().len(), 1);
    }

    #[rstest]
    fn it_should_register_three_people_into_two_slots(before_each: BeforeEachReturn) {
        let (mut calendar, _, party) = before_each;
        let a = calendar.add_person(PersonBuilder::new().first_name("A").build());
        let b = calendar.add_person(PersonBuilder::new().first_name("B").build());
        let c = calendar.add_person(PersonBuilder::new().first_name("C").build());

        assert_eq!(calendar.register(&party, &a), Ok(()));
        assert_eq!(calendar.register(&party, &b), Ok(()));
        assert!(matches!(
            calendar.register(&party, &c),
            Err(CalendarError::Registration(RegistrationError::EventFullyBooked { .. }))
        ));
        assert_eq!(calendar.person(&c).unwrap().registered_event_count(), 0);
        assert_eq!(calendar.change_log().len(), 3);
    }

    #[rstest]
    fn it_should_refuse_unknown_identifiers(before_each: BeforeEachReturn) {
        let (mut calendar, invitor, party) = before_each;
        let missing_event = EventId::new();
        let missing_person = PersonId::new();

        assert_eq!(
            calendar.register(&missing_event, &invitor),
            Err(CalendarError::UnknownEvent(missing_event))
        );
        assert_eq!(
            calendar.unregister(&party, &missing_person),
            Err(CalendarError::UnknownPerson(missing_person))
        );
        assert_eq!(calendar.cancel(&missing_event), Err(CalendarError::UnknownEvent(missing_event)));
        assert_eq!(
            calendar.rename_event(&missing_event, "x"),
            Err(CalendarError::UnknownEvent(missing_event))
        );
    }

    #[rstest]
    fn it_should_unregister_and_journal_it(before_each: BeforeEachReturn) {
        let (mut calendar, _, party) = before_each;
        let susi = calendar.add_person(PersonBuilder::new().build());

        calendar.register(&party, &susi).unwrap();
        calendar.unregister(&party, &susi).unwrap();

        assert_eq!(
            calendar.unregister(&party, &susi),
            Err(CalendarError::Registration(RegistrationError::NotRegistered {
                event_id: party,
                person_id: susi
            }))
        );
        assert_eq!(calendar.person(&susi).unwrap().registered_event_count(), 0);
        assert_eq!(
            calendar.change_log().changes().last().unwrap().change,
            CalendarChange::ParticipantUnregistered { event_id: party, person_id: susi }
        );
    }

    #[rstest]
    fn it_should_release_every_participant_on_cancel(before_each: BeforeEachReturn, date: NaiveDate) {
        let (mut calendar, invitor, party) = before_each;
        let susi = calendar.add_person(PersonBuilder::new().build());
        let gretl = calendar.add_person(PersonBuilder::new().first_name("Gretl").build());
        let other = calendar.schedule_event(&invitor, "Heuriger", date, 5).unwrap();
        calendar.register(&party, &susi).unwrap();
        calendar.register(&party, &gretl).unwrap();
        calendar.register(&other, &susi).unwrap();

        let released = calendar.cancel(&party).unwrap();

        assert_eq!(released, vec![susi, gretl]);
        assert_eq!(calendar.person(&susi).unwrap().registered_event_count(), 1);
        assert_eq!(calendar.person(&gretl).unwrap().registered_event_count(), 0);
        assert_eq!(calendar.event(&party).unwrap().max_participants(), 0);
        assert!(matches!(
            calendar.register(&party, &gretl),
            Err(CalendarError::Registration(RegistrationError::EventCancelled { .. }))
        ));
        let journaled = calendar.change_log().len();
        assert_eq!(calendar.cancel(&party), Ok(vec![]));
        assert_eq!(calendar.change_log().len(), journaled);
        assert_eq!(calendar.person(&susi).unwrap().registered_event_count(), 1);
    }

    #[rstest]
    fn it_should_rename_and_reschedule(before_each: BeforeEachReturn, date: NaiveDate) {
        let (mut calendar, _, party) = before_each;
        let next_day = date.succ_opt().unwrap();

        calendar.rename_event(&party, "Aufräumparty").unwrap();
        calendar.reschedule_event(&party, next_day).unwrap();

        let event = calendar.event(&party).unwrap();
        assert_eq!(event.title(), "Aufräumparty");
        assert_eq!(event.date(), next_day);
        assert_eq!(calendar.change_log().len(), 3);
    }

    #[rstest]
    fn it_should_list_the_events_of_a_person_by_date(before_each: BeforeEachReturn, date: NaiveDate) {
        let (mut calendar, invitor, party) = before_each;
        let susi = calendar.add_person(PersonBuilder::new().build());
        let earlier = calendar
            .schedule_event(&invitor, "Brunch", date.pred_opt().unwrap(), 3)
            .unwrap();
        calendar.schedule_event(&invitor, "Unvisited", date, 3).unwrap();
        calendar.register(&party, &susi).unwrap();
        calendar.register(&earlier, &susi).unwrap();

        let titles: Vec<&str> = calendar.events_of(&susi).into_iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Brunch", "Party"]);
    }

    #[rstest]
    fn it_should_cap_a_person_at_max_events(before_each: BeforeEachReturn, date: NaiveDate) {
        let (mut calendar, invitor, _) = before_each;
        let susi = calendar.add_person(PersonBuilder::new().build());
        for i in 0..MAX_EVENTS {
            let event = calendar.schedule_event(&invitor, format!("Title-{i}"), date, 2).unwrap();
            calendar.register(&event, &susi).unwrap();
        }
        let eleventh = calendar.schedule_event(&invitor, "Title-11", date, 2).unwrap();

        assert_eq!(
            calendar.register(&eleventh, &susi),
            Err(CalendarError::Registration(RegistrationError::PersonFullyBooked { person_id: susi }))
        );
        assert_eq!(calendar.person(&susi).unwrap().registered_event_count(), MAX_EVENTS);
    }

    #[rstest]
    fn it_should_update_contact_details_through_person_mut(before_each: BeforeEachReturn) {
        let (mut calendar, invitor, _) = before_each;
        calendar
            .person_mut(&invitor)
            .unwrap()
            .set_email_address(Some("max@example.com".into()));
        assert_eq!(calendar.person(&invitor).unwrap().email_address(), Some("max@example.com"));
    }
}
