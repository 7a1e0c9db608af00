//! End-to-end session scenarios driven through the terminal.

mod fixtures;
use contact_assistant::terminal::{CONTINUE_PROMPT, PROMPT};
use contact_assistant::Config;
use fixtures::*;

/// Replies only, with prompts removed.
fn replies(output: &str) -> Vec<String> {
    output
        .split(PROMPT)
        .flat_map(|chunk| chunk.lines())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_contact_lifecycle() {
    let script = "\
hello
add contact Ann, +38 (067) 123-45-67
add phone Ann, 380501112233
add phone Ann 380501112233
add birthday Ann 01.02.2000
add birthday Ann 2001-01-01
change birthday Ann 2001/01/01
change phone Ann 380991234567
remove phones Ann
exit
";
    let (assistant, output) = run_script(script, Config::default());

    assert_eq!(
        replies(&output),
        vec![
            "How can I help you?",
            "Added contact Name: Ann with Phone: [380671234567]",
            "Contact Name: Ann new Phones: [380671234567, 380501112233]",
            "Phone: 380501112233 for contact Name: Ann already exists",
            "Contact Name: Ann, Birthday: 2000-02-01 is added",
            "Contact Name: Ann already has Birthday: 2000-02-01",
            "Contact Name: Ann, Birthday: 2001-01-01 is updated",
            "Contact Name: Ann has new Phone: [380991234567]",
            "Contact Name: Ann, Phones: None, Birthday: 2001-01-01",
            "Goodbye!",
        ]
    );

    let record = assistant.book().get("Ann").unwrap();
    assert!(record.phones().is_empty());
}

#[test]
fn test_errors_do_not_end_session() {
    let script = "\
dance
add contact
+c Ann 12345
+c Ann
+b Ann 31.02.2000
?c Bob
show contact Ann
";
    let (_, output) = run_script(script, Config::default());

    assert_eq!(
        replies(&output),
        vec![
            "Unknown command \"dance\"",
            "Missing contact name or phone or date",
            "Wrong phone format",
            "Added contact Name: Ann with Phone: None",
            "Wrong date format",
            "Name: Bob not in address book",
            "Contact Name: Ann, Phones: None, Birthday: None",
        ]
    );
}

#[test]
fn test_duplicate_contact_is_not_overwritten() {
    let script = "+c Ann 380671234567\n+c Ann 380501112233\n";
    let (assistant, output) = run_script(script, Config::default());

    assert!(output.contains("Contact Name: Ann already exists"));
    let phones = assistant.book().get("Ann").unwrap().phones().to_vec();
    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].as_str(), "380671234567");
}

#[test]
fn test_show_all_on_empty_book_skips_paging() {
    let (_, output) = run_script("show all\n", Config::default());
    assert!(output.contains("No contacts, please add"));
    assert!(!output.contains("Showing all contacts"));
}

#[test]
fn test_show_all_uses_configured_page_size() {
    let config = Config {
        page_size: 2,
        ..Config::default()
    };
    let (_, output) = run_script("+c A\n+c B\n+c C\n+c D\nshow all\n\nclose\n", config);

    assert!(output.contains("Page 1 of 2"));
    assert!(output.contains("Page 2 of 2"));
    assert!(!output.contains("Page 3"));
    assert_eq!(output.matches(CONTINUE_PROMPT).count(), 1);
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_acknowledgment_line_is_not_a_command() {
    let script = "+c A\n+c B\nshow all 1\nexit\nhello\nexit\n";
    let (_, output) = run_script(script, Config::default());

    // "exit" acknowledges the first page; the session keeps going
    assert!(output.contains("How can I help you?"));
    assert_eq!(output.matches("Goodbye!").count(), 1);
}
