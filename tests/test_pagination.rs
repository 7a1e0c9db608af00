//! Pagination properties over the public API.

mod fixtures;
use contact_assistant::{AddressBook, ContactName, Record, Reply};
use fixtures::*;

fn book_of(n: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..n {
        book.add_record(Record::new(ContactName::new(format!("C{}", i)).unwrap()));
    }
    book
}

#[test]
fn test_pages_cover_every_record_once_in_order() {
    for total in 1..=12 {
        for page_size in 1..=5 {
            let book = book_of(total);
            let pages: Vec<_> = book.paginate(page_size).unwrap().collect();

            assert_eq!(pages.len(), total.div_ceil(page_size));

            let names: Vec<String> = pages
                .iter()
                .flat_map(|p| p.records.iter())
                .map(|r| r.name().to_string())
                .collect();
            let expected: Vec<String> = (0..total).map(|i| format!("C{}", i)).collect();
            assert_eq!(names, expected, "total={} page_size={}", total, page_size);
        }
    }
}

#[test]
fn test_page_headers_number_pages() {
    let book = book_of(5);
    let headers: Vec<String> = book
        .paginate(2)
        .unwrap()
        .map(|p| p.to_string().lines().next().unwrap().to_string())
        .collect();
    assert_eq!(headers, vec!["Page 1 of 3", "Page 2 of 3", "Page 3 of 3"]);
}

#[test]
fn test_rendered_lines_match_book_display() {
    let book = book_of(7);
    let lines: Vec<String> = book
        .paginate(3)
        .unwrap()
        .flat_map(|p| {
            p.to_string()
                .lines()
                .skip(1)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(lines.join("\n"), book.to_string());
}

#[test]
fn test_paginator_is_not_restartable() {
    let book = book_of(2);
    let mut pages = book.paginate(5).unwrap();
    assert!(pages.next_page().is_some());
    assert!(pages.next_page().is_none());
    assert!(pages.next_page().is_none());

    let mut fresh = book.paginate(5).unwrap();
    assert!(fresh.next_page().is_some());
}

#[test]
fn test_show_all_reply_is_driven_by_caller() {
    let mut assistant = assistant_with_contacts(3);
    match assistant.handle("show all 2") {
        Reply::Pages(mut pages) => {
            assert!(pages.has_next());
            assert_eq!(pages.next_page().unwrap().records.len(), 2);
            assert!(pages.has_next());
            assert_eq!(pages.next_page().unwrap().records.len(), 1);
            assert!(!pages.has_next());
        }
        other => panic!("Expected pages, got: {:?}", other),
    }

    assert_eq!(
        expect_text(assistant.handle("show all 0")),
        "Page size must be a positive number, got: 0"
    );
}
