//! Plan enrollment: a four-step application that ends in a submitted record carrying a
//! generated application number.

mod application;
pub mod format;
pub mod numbers;

#[cfg(test)]
mod tests;

pub use application::{
    enrollment_schema, fields, ApplicantDetails, ContactDetails, EnrollmentApplication,
    EnrollmentRecord, EnrollmentStatus, Gender, SupportingDocuments, GENDER_CHOICES,
    STATE_CHOICES,
};
pub use format::{format_national_id, format_phone};
pub use numbers::{
    ApplicationNumber, ApplicationNumberGenerator, RandomApplicationNumbers,
    SequentialApplicationNumbers,
};
