//! Domain value objects and types.
//!
//! Contact names, phone numbers and birthdays are immutable value objects.
//! Each constructor is the only place where raw input is normalized and
//! validated, so a value that exists is always well formed.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::Phone;

use std::fmt::Display;

/// A validated, printable contact field.
///
/// Implementors can only be obtained through a validating constructor, so
/// `value()` always satisfies the field's format rules.
pub trait Field: Display {
    /// The stored value type.
    type Value: ?Sized;

    /// Borrow the validated value.
    fn value(&self) -> &Self::Value;
}
