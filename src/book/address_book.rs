//! In-memory address book.

use super::{BookError, BookResult, Paginator, Record};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// All contacts, keyed by name, in insertion order.
///
/// Records live in a `Vec` so iteration and pagination follow insertion
/// order; `index` maps each name to its slot. Every key in `index` points at
/// a record whose name equals that key.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// An existing record with the same name is replaced in place, keeping
    /// its position. Rejecting duplicate names is the caller's job.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                debug!(name = %key, "replacing record");
                self.records[slot] = record;
            }
            None => {
                debug!(name = %key, "adding record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        self.records.get_mut(slot)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Start a page-by-page traversal with `page_size` records per page.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ZeroPageSize` if `page_size` is 0.
    pub fn paginate(&self, page_size: usize) -> BookResult<Paginator<'_>> {
        if page_size == 0 {
            return Err(BookError::ZeroPageSize);
        }
        Ok(Paginator::new(&self.records, page_size))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
