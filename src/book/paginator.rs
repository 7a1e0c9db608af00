//! Page-by-page traversal of the address book.

use super::Record;
use std::fmt;

/// One bounded slice of the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// 1-based page number
    pub number: usize,

    /// Total number of pages in the traversal
    pub total: usize,

    /// Records on this page, in book order
    pub records: &'a [Record],
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.number, self.total)?;
        for record in self.records {
            write!(f, "\n{}", record)?;
        }
        Ok(())
    }
}

/// Cursor over the address book that yields one page per call.
///
/// The paginator never waits on anything itself: whoever holds it decides
/// when to ask for the next page, and can stop at any time by dropping it.
/// A fresh traversal needs a new paginator.
#[derive(Debug, Clone)]
pub struct Paginator<'a> {
    records: &'a [Record],
    page_size: usize,
    cursor: usize,
}

impl<'a> Paginator<'a> {
    /// `page_size` must be non-zero; `AddressBook::paginate` enforces this.
    pub(crate) fn new(records: &'a [Record], page_size: usize) -> Self {
        debug_assert!(page_size > 0);
        Self {
            records,
            page_size,
            cursor: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages in the whole traversal (rounded up).
    pub fn total_pages(&self) -> usize {
        self.records.len().div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.records.len()
    }

    /// Produce the next page, or `None` once every record has been emitted.
    pub fn next_page(&mut self) -> Option<Page<'a>> {
        if !self.has_next() {
            return None;
        }

        let end = (self.cursor + self.page_size).min(self.records.len());
        let page = Page {
            number: self.cursor / self.page_size + 1,
            total: self.total_pages(),
            records: &self.records[self.cursor..end],
        };
        self.cursor = end;
        Some(page)
    }
}

impl<'a> Iterator for Paginator<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_page()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.records.len() - self.cursor).div_ceil(self.page_size);
        (remaining, Some(remaining))
    }
}
