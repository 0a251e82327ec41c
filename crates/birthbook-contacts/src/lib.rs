//! Contacts, contact books and date-keyed schedules.
//!
//! ## Overview
//!
//! - [`Contact`] wraps one upstream [`ContactRecord`] and derives names,
//!   birthdays and ages from it. Identity is the record identifier alone.
//! - [`ContactBook`] is a keyed, mutable collection of contacts with bulk
//!   operations, refresh lookups and random sampling.
//! - [`ContactSchedule`] groups identifier lists under formatted date keys.
//!
//! None of the end-user accessors fail: missing data renders as an empty
//! string or `None`.

pub mod birthday;
pub mod book;
pub mod contact;
pub mod error;
pub mod name;
pub mod ordering;
pub mod schedule;

pub use birthday::BirthdayComponents;
pub use book::ContactBook;
pub use contact::{Contact, ContactRecord};
pub use error::{ContactError, ContactResult};
pub use name::{NameFormatter, NameParts, NameStyle, WesternNameFormatter};
pub use schedule::ContactSchedule;
