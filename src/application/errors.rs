use crate::core::ids::{EventId, PersonId};
use crate::core::registration::RegistrationError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("unknown event: {0}")]
    UnknownEvent(EventId),

    #[error("unknown person: {0}")]
    UnknownPerson(PersonId),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
