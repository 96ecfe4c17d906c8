use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clock::Clock;
use crate::workflows::intake::{
    CompletionError, CompletionHandler, FieldRule, FieldSpec, FieldValue, FieldValues, PatternKind,
    StepDefinition, StepSchema, StepSequencer, SubmitError,
};
use crate::workflows::plans::Plan;

use super::format::{format_national_id, format_phone, mask_national_id};
use super::numbers::{ApplicationNumber, ApplicationNumberGenerator};

pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const MIDDLE_NAME: &str = "middleName";
    pub const LAST_NAME: &str = "lastName";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const SSN: &str = "ssn";
    pub const GENDER: &str = "gender";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const ZIP_CODE: &str = "zipCode";
    pub const PROOF_OF_INCOME: &str = "proofOfIncome";
    pub const PROOF_OF_IDENTITY: &str = "proofOfIdentity";
    pub const PROOF_OF_RESIDENCE: &str = "proofOfResidence";
    pub const SIGNATURE: &str = "signature";
}

pub const GENDER_CHOICES: &[&str] = &["Male", "Female", "Other"];

pub const STATE_CHOICES: &[&str] = &["AL", "CA", "FL", "NY", "TX"];

/// Four-step enrollment form: personal, contact, documents, review and sign.
pub fn enrollment_schema() -> StepSchema {
    use fields::*;

    let steps = vec![
        StepDefinition::new("personal", "Personal Information")
            .field(FieldSpec::new(FIRST_NAME).check(FieldRule::Required, "First name is required"))
            .field(FieldSpec::new(MIDDLE_NAME))
            .field(FieldSpec::new(LAST_NAME).check(FieldRule::Required, "Last name is required"))
            .field(
                FieldSpec::new(DATE_OF_BIRTH)
                    .check(FieldRule::Required, "Date of birth is required")
                    .check(
                        FieldRule::Pattern(PatternKind::IsoDate),
                        "Enter date of birth as YYYY-MM-DD",
                    ),
            )
            .field(FieldSpec::new(SSN).check(
                FieldRule::Pattern(PatternKind::NationalId),
                "Valid SSN required (XXX-XX-XXXX)",
            ))
            .field(
                FieldSpec::new(GENDER).check(FieldRule::OneOf(GENDER_CHOICES), "Gender is required"),
            ),
        StepDefinition::new("contact", "Contact Information")
            .field(
                FieldSpec::new(EMAIL)
                    .check(FieldRule::Pattern(PatternKind::Email), "Valid email is required"),
            )
            .field(FieldSpec::new(PHONE).check(
                FieldRule::Pattern(PatternKind::Phone),
                "Valid phone number required",
            ))
            .field(FieldSpec::new(ADDRESS).check(FieldRule::Required, "Address is required"))
            .field(FieldSpec::new(CITY).check(FieldRule::Required, "City is required"))
            .field(FieldSpec::new(STATE).check(FieldRule::OneOf(STATE_CHOICES), "State is required"))
            .field(FieldSpec::new(ZIP_CODE).check(
                FieldRule::Pattern(PatternKind::PostalCode),
                "Valid 5-digit ZIP code required",
            )),
        StepDefinition::new("documents", "Upload Documents")
            .field(
                FieldSpec::new(PROOF_OF_INCOME)
                    .check(FieldRule::Required, "Proof of income is required"),
            )
            .field(
                FieldSpec::new(PROOF_OF_IDENTITY)
                    .check(FieldRule::Required, "Proof of identity is required"),
            )
            .field(
                FieldSpec::new(PROOF_OF_RESIDENCE)
                    .check(FieldRule::Required, "Proof of residence is required"),
            ),
        StepDefinition::new("review", "Review & Submit")
            .field(FieldSpec::new(SIGNATURE).check(FieldRule::Required, "Signature is required")),
    ];

    StepSchema::new(steps).expect("enrollment schema declares each field once")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub ssn: String,
    pub gender: Gender,
}

impl ApplicantDetails {
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn masked_ssn(&self) -> String {
        mask_national_id(&self.ssn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Uploaded document names. Only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingDocuments {
    pub proof_of_income: String,
    pub proof_of_identity: String,
    pub proof_of_residence: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub application_number: ApplicationNumber,
    pub applicant: ApplicantDetails,
    pub contact: ContactDetails,
    pub documents: SupportingDocuments,
    pub signature: String,
    pub selected_plan: Option<Plan>,
    pub submitted_at: DateTime<Utc>,
    pub status: EnrollmentStatus,
}

fn required_text(values: &FieldValues, field: &'static str) -> Result<String, CompletionError> {
    values
        .get(field)
        .and_then(FieldValue::to_answer_text)
        .ok_or(CompletionError::MissingField(field))
}

fn applicant_from_values(values: &FieldValues) -> Result<ApplicantDetails, CompletionError> {
    let raw_birth = required_text(values, fields::DATE_OF_BIRTH)?;
    let date_of_birth = NaiveDate::parse_from_str(&raw_birth, "%Y-%m-%d").map_err(|err| {
        CompletionError::InvalidField {
            field: fields::DATE_OF_BIRTH,
            reason: err.to_string(),
        }
    })?;

    let raw_gender = required_text(values, fields::GENDER)?;
    let gender = Gender::parse(&raw_gender).ok_or_else(|| CompletionError::InvalidField {
        field: fields::GENDER,
        reason: format!("unrecognised gender {raw_gender}"),
    })?;

    Ok(ApplicantDetails {
        first_name: required_text(values, fields::FIRST_NAME)?,
        middle_name: required_text(values, fields::MIDDLE_NAME).ok(),
        last_name: required_text(values, fields::LAST_NAME)?,
        date_of_birth,
        ssn: required_text(values, fields::SSN)?,
        gender,
    })
}

fn contact_from_values(values: &FieldValues) -> Result<ContactDetails, CompletionError> {
    Ok(ContactDetails {
        email: required_text(values, fields::EMAIL)?,
        phone: required_text(values, fields::PHONE)?,
        address: required_text(values, fields::ADDRESS)?,
        city: required_text(values, fields::CITY)?,
        state: required_text(values, fields::STATE)?,
        zip_code: required_text(values, fields::ZIP_CODE)?,
    })
}

fn documents_from_values(values: &FieldValues) -> Result<SupportingDocuments, CompletionError> {
    Ok(SupportingDocuments {
        proof_of_income: required_text(values, fields::PROOF_OF_INCOME)?,
        proof_of_identity: required_text(values, fields::PROOF_OF_IDENTITY)?,
        proof_of_residence: required_text(values, fields::PROOF_OF_RESIDENCE)?,
    })
}

struct RecordHandler<'a, G, C> {
    numbers: &'a mut G,
    clock: &'a C,
    selected_plan: Option<&'a Plan>,
}

impl<G, C> CompletionHandler for RecordHandler<'_, G, C>
where
    G: ApplicationNumberGenerator,
    C: Clock,
{
    type Output = EnrollmentRecord;

    fn complete(&mut self, values: &FieldValues) -> Result<EnrollmentRecord, CompletionError> {
        let applicant = applicant_from_values(values)?;
        let contact = contact_from_values(values)?;
        let documents = documents_from_values(values)?;
        let signature = required_text(values, fields::SIGNATURE)?;

        Ok(EnrollmentRecord {
            application_number: self.numbers.next_number(),
            applicant,
            contact,
            documents,
            signature,
            selected_plan: self.selected_plan.cloned(),
            submitted_at: self.clock.now(),
            status: EnrollmentStatus::Submitted,
        })
    }
}

/// Enrollment flow for a chosen plan, producing a submitted record on completion.
pub struct EnrollmentApplication<G, C> {
    sequencer: StepSequencer,
    selected_plan: Option<Plan>,
    numbers: G,
    clock: C,
}

impl<G, C> EnrollmentApplication<G, C>
where
    G: ApplicationNumberGenerator,
    C: Clock,
{
    pub fn new(selected_plan: Option<Plan>, numbers: G, clock: C) -> Self {
        Self {
            sequencer: StepSequencer::new(enrollment_schema()),
            selected_plan,
            numbers,
            clock,
        }
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut StepSequencer {
        &mut self.sequencer
    }

    pub fn selected_plan(&self) -> Option<&Plan> {
        self.selected_plan.as_ref()
    }

    /// Store a national id typed in any shape as `NNN-NN-NNNN`.
    pub fn set_national_id(&mut self, raw: &str) {
        self.sequencer.set_field(fields::SSN, format_national_id(raw));
    }

    /// Store a phone number typed in any shape as `(NNN) NNN-NNNN`.
    pub fn set_phone(&mut self, raw: &str) {
        self.sequencer.set_field(fields::PHONE, format_phone(raw));
    }

    pub fn submit(&mut self) -> Result<EnrollmentRecord, SubmitError> {
        let mut handler = RecordHandler {
            numbers: &mut self.numbers,
            clock: &self.clock,
            selected_plan: self.selected_plan.as_ref(),
        };
        let record = self.sequencer.submit(&mut handler)?;

        info!(
            application_number = %record.application_number,
            plan = record.selected_plan.as_ref().map(|plan| plan.id.as_str()).unwrap_or("none"),
            "enrollment application submitted"
        );

        Ok(record)
    }
}
