//! Command handlers.
//!
//! Each handler takes the positional arguments parsed from the input line.
//! Business rules the book and records do not enforce themselves (unique
//! names, unique phones, a single birthday) are checked here.

use super::Reply;
use crate::book::record::PhoneList;
use crate::book::{AddressBook, Record};
use crate::config::Config;
use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{AssistantError, AssistantResult};
use tracing::debug;

/// Take exactly `N` arguments.
fn exactly<const N: usize>(args: Vec<String>) -> AssistantResult<[String; N]> {
    args.try_into()
        .map_err(|_| AssistantError::MissingArguments)
}

/// Look up an existing record for mutation.
fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> AssistantResult<&'a mut Record> {
    book.get_mut(name)
        .ok_or_else(|| AssistantError::NotFound(name.to_string()))
}

pub fn hello<'a>(
    _book: &'a mut AddressBook,
    _config: &Config,
    _args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    Ok(Reply::Text("How can I help you?".to_string()))
}

pub fn exit<'a>(
    _book: &'a mut AddressBook,
    _config: &Config,
    _args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    Ok(Reply::Exit("Goodbye!".to_string()))
}

/// `add contact <name> [phone]`
pub fn add_contact<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let mut args = args.into_iter();
    let (name, phone) = match (args.next(), args.next(), args.next()) {
        (Some(name), phone, None) => (name, phone),
        _ => return Err(AssistantError::MissingArguments),
    };

    if book.contains(&name) {
        return Ok(Reply::Text(format!("Contact Name: {} already exists", name)));
    }

    let mut record = Record::new(ContactName::new(name)?);
    if let Some(phone) = phone {
        record.add_phone(Phone::new(phone)?);
    }

    let reply = format!(
        "Added contact Name: {} with Phone: {}",
        record.name(),
        PhoneList(record.phones())
    );
    book.add_record(record);
    Ok(Reply::Text(reply))
}

/// `add phone <name> <phone>`
pub fn add_phone<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name, raw_phone] = exactly::<2>(args)?;
    let record = record_mut(book, &name)?;
    let phone = Phone::new(&raw_phone)?;

    if record.has_phone(&phone) {
        return Ok(Reply::Text(format!(
            "Phone: {} for contact Name: {} already exists",
            phone,
            record.name()
        )));
    }

    debug!(name = %record.name(), phone = %phone, "adding phone");
    record.add_phone(phone);
    Ok(Reply::Text(format!(
        "Contact Name: {} new Phones: {}",
        record.name(),
        PhoneList(record.phones())
    )))
}

/// `change phone <name> <phone>`
pub fn change_phone<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name, raw_phone] = exactly::<2>(args)?;
    let record = record_mut(book, &name)?;
    let phone = Phone::new(&raw_phone)?;

    debug!(name = %record.name(), phone = %phone, "replacing phones");
    record.replace_phones(phone);
    Ok(Reply::Text(format!(
        "Contact Name: {} has new Phone: {}",
        record.name(),
        PhoneList(record.phones())
    )))
}

/// `remove phones <name>`
pub fn remove_phones<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name] = exactly::<1>(args)?;
    let record = record_mut(book, &name)?;

    record.clear_phones();
    Ok(Reply::Text(record.to_string()))
}

/// `add birthday <name> <date>`
pub fn add_birthday<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name, raw_date] = exactly::<2>(args)?;
    let record = record_mut(book, &name)?;

    if let Some(existing) = record.birthday() {
        return Ok(Reply::Text(format!(
            "Contact Name: {} already has Birthday: {}",
            record.name(),
            existing
        )));
    }

    let birthday = Birthday::new(&raw_date)?;
    record.set_birthday(birthday);
    Ok(Reply::Text(format!(
        "Contact Name: {}, Birthday: {} is added",
        record.name(),
        birthday
    )))
}

/// `change birthday <name> <date>`
pub fn change_birthday<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name, raw_date] = exactly::<2>(args)?;
    let record = record_mut(book, &name)?;
    let birthday = Birthday::new(&raw_date)?;

    record.set_birthday(birthday);
    Ok(Reply::Text(format!(
        "Contact Name: {}, Birthday: {} is updated",
        record.name(),
        birthday
    )))
}

/// `show contact <name>`
pub fn show_contact<'a>(
    book: &'a mut AddressBook,
    _config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let [name] = exactly::<1>(args)?;
    let record = book
        .get(&name)
        .ok_or_else(|| AssistantError::NotFound(name.clone()))?;

    if record.birthday().is_some() {
        let days = record.days_until_birthday()?;
        Ok(Reply::Text(format!("{}\nDays to birthday - {}", record, days)))
    } else {
        Ok(Reply::Text(record.to_string()))
    }
}

/// `show all [page size]`
pub fn show_all<'a>(
    book: &'a mut AddressBook,
    config: &Config,
    args: Vec<String>,
) -> AssistantResult<Reply<'a>> {
    let page_size = match args.as_slice() {
        [] => config.page_size,
        [size] => match size.trim().parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(AssistantError::InvalidPageSize(size.clone())),
        },
        _ => return Err(AssistantError::MissingArguments),
    };

    if book.is_empty() {
        return Ok(Reply::Text("No contacts, please add".to_string()));
    }

    let book: &'a AddressBook = book;
    Ok(Reply::Pages(book.paginate(page_size)?))
}
