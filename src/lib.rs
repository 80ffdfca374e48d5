// Crate entry point. Declares and exposes modules so tests and callers can import them.
//
// Layout
// - core: people, events, registration rules and the ports they rely on.
// - application: the calendar service routing operations by identity.
// - adapters: in memory implementations of the ports.
// - shell: configuration, tracing setup and wiring.

pub mod core {
    pub mod changes;
    pub mod event;
    pub mod ids;
    pub mod person;
    pub mod ports;
    pub mod registration;
}

pub mod application {
    pub mod calendar;
    pub mod errors;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_change_log;
    }
}

pub mod shell;

pub use crate::application::calendar::Calendar;
pub use crate::application::errors::CalendarError;
pub use crate::core::event::{Event, EventStatus};
pub use crate::core::ids::{EventId, PersonId};
pub use crate::core::person::{MAX_EVENTS, Person};
pub use crate::core::registration::RegistrationError;
