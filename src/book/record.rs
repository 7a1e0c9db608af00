//! Record model representing one contact.

use super::{RecordError, RecordResult};
use crate::domain::{Birthday, ContactName, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A contact: a name, zero or more phones, and an optional birthday.
///
/// The record performs no business checks of its own. Rejecting duplicate
/// phones or a second birthday is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone without checking for duplicates.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Whether an equal (normalized) phone is already stored.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Discard every phone and keep only `phone`.
    pub fn replace_phones(&mut self, phone: Phone) {
        self.phones = vec![phone];
    }

    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    /// Assign the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_until_birthday(&self) -> RecordResult<i64> {
        self.days_until_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns 0 when the birthday is today.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::BirthdayNotSet` if the record has no birthday.
    pub fn days_until_birthday_from(&self, today: NaiveDate) -> RecordResult<i64> {
        let birthday = self
            .birthday
            .as_ref()
            .ok_or_else(|| RecordError::BirthdayNotSet(self.name.to_string()))?
            .date();

        let this_year = occurrence_in(birthday, today.year());
        let next = if this_year >= today {
            this_year
        } else {
            occurrence_in(birthday, today.year() + 1)
        };

        Ok((next - today).num_days())
    }
}

/// The birthday's month and day in `year`. 29 February maps to 28 February
/// in non-leap years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        .unwrap_or(birthday)
}

/// Renders a phone list as `[a, b]`, or `None` when empty.
pub(crate) struct PhoneList<'a>(pub &'a [Phone]);

impl fmt::Display for PhoneList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "None");
        }
        write!(f, "[")?;
        for (i, phone) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", phone)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact Name: {}, Phones: {}, Birthday: ",
            self.name,
            PhoneList(&self.phones)
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(ContactName::new(name).unwrap())
    }

    fn phone(raw: &str) -> Phone {
        Phone::new(raw).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let rec = record("Ann");
        assert_eq!(rec.name().as_str(), "Ann");
        assert!(rec.phones().is_empty());
        assert!(rec.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut rec = record("Ann");
        rec.add_phone(phone("380671234567"));
        rec.add_phone(phone("380501112233"));
        rec.add_phone(phone("380671234567"));

        let stored: Vec<&str> = rec.phones().iter().map(Phone::as_str).collect();
        assert_eq!(stored, vec!["380671234567", "380501112233", "380671234567"]);
        assert!(rec.has_phone(&phone("+38 (050) 111-22-33")));
    }

    #[test]
    fn test_replace_phones_leaves_exactly_one() {
        let mut rec = record("Ann");
        rec.replace_phones(phone("380671234567"));
        assert_eq!(rec.phones().len(), 1);

        rec.add_phone(phone("380501112233"));
        rec.add_phone(phone("380931112233"));
        rec.replace_phones(phone("380991234567"));
        assert_eq!(rec.phones(), &[phone("380991234567")]);
    }

    #[test]
    fn test_clear_phones() {
        let mut rec = record("Ann");
        rec.add_phone(phone("380671234567"));
        rec.clear_phones();
        assert!(rec.phones().is_empty());
    }

    #[test]
    fn test_days_until_birthday_requires_birthday() {
        let rec = record("Ann");
        assert_eq!(
            rec.days_until_birthday_from(ymd(2024, 1, 1)),
            Err(RecordError::BirthdayNotSet("Ann".to_string()))
        );
    }

    #[test]
    fn test_days_until_birthday_later_this_year() {
        let mut rec = record("Ann");
        rec.set_birthday(Birthday::new("10.03.1990").unwrap());
        assert_eq!(rec.days_until_birthday_from(ymd(2023, 3, 1)).unwrap(), 9);
    }

    #[test]
    fn test_days_until_birthday_today() {
        let mut rec = record("Ann");
        rec.set_birthday(Birthday::new("1990-03-10").unwrap());
        assert_eq!(rec.days_until_birthday_from(ymd(2023, 3, 10)).unwrap(), 0);
    }

    #[test]
    fn test_days_until_birthday_already_passed_rolls_to_next_year() {
        let mut rec = record("Ann");
        rec.set_birthday(Birthday::new("01.01.1990").unwrap());
        assert_eq!(rec.days_until_birthday_from(ymd(2023, 12, 31)).unwrap(), 1);
        assert_eq!(rec.days_until_birthday_from(ymd(2023, 1, 2)).unwrap(), 364);
    }

    #[test]
    fn test_days_until_leap_day_birthday() {
        let mut rec = record("Ann");
        rec.set_birthday(Birthday::new("29.02.2000").unwrap());
        assert_eq!(rec.days_until_birthday_from(ymd(2023, 2, 20)).unwrap(), 8);
        assert_eq!(rec.days_until_birthday_from(ymd(2024, 2, 20)).unwrap(), 9);
    }

    #[test]
    fn test_display_without_phones_or_birthday() {
        let rec = record("Ann");
        assert_eq!(
            rec.to_string(),
            "Contact Name: Ann, Phones: None, Birthday: None"
        );
    }

    #[test]
    fn test_display_with_phones_and_birthday() {
        let mut rec = record("Ann");
        rec.add_phone(phone("380671234567"));
        rec.add_phone(phone("380501112233"));
        rec.set_birthday(Birthday::new("01.02.2000").unwrap());
        assert_eq!(
            rec.to_string(),
            "Contact Name: Ann, Phones: [380671234567, 380501112233], Birthday: 2000-02-01"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut rec = record("Ann");
        rec.add_phone(phone("380671234567"));
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"name":"Ann","phones":["380671234567"]}"#);
    }
}
