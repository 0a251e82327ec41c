//! A named, keyed collection of contacts.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use birthbook_core::config::Settings;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::contact::Contact;

/// Mutable store of contacts keyed by string.
///
/// Contacts are normally keyed by their own identifier, but any key may be
/// used. Removal by contact always goes through the identifier, so a contact
/// stored under a custom key can only be removed by that key.
///
/// Not synchronised: share it across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    name: String,
    entries: HashMap<String, Contact>,
}

impl ContactBook {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores `contact` under its identifier, replacing any previous entry.
    pub fn add(&mut self, contact: Contact) {
        let key = contact.id().to_string();
        self.add_with_key(contact, key);
    }

    /// Stores `contact` under `key`, replacing any previous entry.
    pub fn add_with_key(&mut self, contact: Contact, key: impl Into<String>) {
        let key = key.into();
        tracing::trace!(book = %self.name, %key, contact = %contact.id(), "Adding contact");
        self.entries.insert(key, contact);
    }

    /// Adds each contact in order; later duplicates win.
    pub fn add_all(&mut self, contacts: impl IntoIterator<Item = Contact>) {
        for contact in contacts {
            self.add(contact);
        }
    }

    /// Removes the entry stored under `key`, if any.
    pub fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            tracing::trace!(book = %self.name, %key, "Removed contact");
        }
    }

    /// Removes the entry keyed by `contact`'s identifier.
    pub fn remove_contact(&mut self, contact: &Contact) {
        self.remove(contact.id());
    }

    pub fn remove_contacts<'a>(&mut self, contacts: impl IntoIterator<Item = &'a Contact>) {
        for contact in contacts {
            self.remove_contact(contact);
        }
    }

    #[must_use]
    pub fn contact(&self, key: &str) -> Option<&Contact> {
        self.entries.get(key)
    }

    /// Looks up each key, skipping misses.
    #[must_use]
    pub fn contacts_for_keys<S: AsRef<str>>(&self, keys: &[S]) -> Vec<&Contact> {
        keys.iter()
            .filter_map(|key| self.contact(key.as_ref()))
            .collect()
    }

    /// ## Summary
    /// Refreshes possibly stale contacts: returns what the book currently holds
    /// under each contact's identifier, skipping those no longer present.
    #[must_use]
    pub fn refreshed<'a>(&self, contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<&Contact> {
        contacts
            .into_iter()
            .filter_map(|contact| self.contact(contact.id()))
            .collect()
    }

    /// Whether any stored contact has `contact`'s identifier, whatever its key.
    #[must_use]
    pub fn contains(&self, contact: &Contact) -> bool {
        self.entries.values().any(|stored| stored == contact)
    }

    /// Storage keys, in no particular order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn contacts(&self) -> Vec<&Contact> {
        self.entries.values().collect()
    }

    /// Identifiers of the stored contacts; differs from [`Self::identifiers`]
    /// when custom keys are in use.
    #[must_use]
    pub fn contact_identifiers(&self) -> Vec<&str> {
        self.entries.values().map(Contact::id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All contacts sorted with `compare`, e.g. [`crate::ordering::by_full_name`].
    #[must_use]
    pub fn sorted_contacts<F>(&self, mut compare: F) -> Vec<&Contact>
    where
        F: FnMut(&Contact, &Contact) -> Ordering,
    {
        let mut contacts = self.contacts();
        contacts.sort_by(|a, b| compare(a, b));
        contacts
    }

    /// ## Summary
    /// Contacts whose birthday falls in `from + 1 ..= from + within_days`,
    /// soonest first.
    #[must_use]
    pub fn upcoming_birthdays(&self, within_days: u32, from: NaiveDate) -> Vec<&Contact> {
        let mut upcoming: Vec<(u32, &Contact)> = self
            .unique_contacts(&[])
            .into_iter()
            .filter_map(|contact| {
                contact
                    .days_until_birthday_from(from, within_days)
                    .map(|days| (days, contact))
            })
            .collect();
        upcoming.sort_by(|(a_days, a), (b_days, b)| a_days.cmp(b_days).then_with(|| a.cmp(b)));
        upcoming.into_iter().map(|(_, contact)| contact).collect()
    }

    /// [`Self::upcoming_birthdays`] over the configured `birthdays.upcoming_days` window.
    #[must_use]
    pub fn upcoming_birthdays_from_config(
        &self,
        settings: &Settings,
        from: NaiveDate,
    ) -> Vec<&Contact> {
        self.upcoming_birthdays(settings.birthdays.upcoming_days, from)
    }

    /// Random sample using the thread-local generator. See [`Self::random_elements_with`].
    #[must_use]
    pub fn random_elements(&self, count: usize, except: &[Contact]) -> Vec<&Contact> {
        self.random_elements_with(&mut rand::thread_rng(), count, except)
    }

    /// ## Summary
    /// Draws `count` distinct contacts, never one of `except`.
    ///
    /// Candidates are the stored contacts minus `except`, deduplicated by
    /// identifier. When `count` is not less than the number of candidates
    /// every candidate is returned, in unspecified order; in particular asking
    /// for exactly the number available returns all of them. Otherwise `count`
    /// candidates are drawn uniformly without replacement.
    #[must_use]
    pub fn random_elements_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        except: &[Contact],
    ) -> Vec<&Contact> {
        let mut candidates = self.unique_contacts(except);
        if count >= candidates.len() {
            return candidates;
        }

        let (chosen, _) = candidates.partial_shuffle(rng, count);
        chosen.to_vec()
    }

    /// Removes every entry.
    pub fn reset(&mut self) {
        tracing::trace!(book = %self.name, count = self.entries.len(), "Resetting contact book");
        self.entries.clear();
    }

    fn unique_contacts(&self, except: &[Contact]) -> Vec<&Contact> {
        let mut seen: HashSet<&str> = except.iter().map(Contact::id).collect();
        self.entries
            .values()
            .filter(|contact| seen.insert(contact.id()))
            .collect()
    }
}
