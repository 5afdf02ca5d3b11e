use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mutable field state owned by the form controller.
///
/// Field names follow the JSON input shape (`candidateName`, `startDate`,
/// ...), so a draft file can be deserialized straight into the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferDraft {
    #[schemars(length(min = 2))]
    pub candidate_name: String,
    #[schemars(length(min = 2))]
    pub position: String,
    #[schemars(length(min = 2))]
    pub department: String,
    #[schemars(length(min = 1))]
    pub salary: String,
    pub start_date: Option<NaiveDate>,
    #[schemars(length(min = 1))]
    pub benefits_package: String,
    #[schemars(length(min = 2))]
    pub company_name: String,
    #[schemars(length(min = 5))]
    pub company_address: String,
    pub additional_notes: String,
    /// Raw selection key, e.g. `fullTime`. Validated for presence only.
    pub employment_type: Option<String>,
    #[schemars(length(min = 2))]
    pub signatory_name: String,
    #[schemars(length(min = 2))]
    pub signatory_title: String,
}

/// Immutable snapshot published on a successful submission.
///
/// Constructed only by [`crate::validate::validate`]; every field holds the
/// validated input exactly as entered. A new submission replaces the prior
/// snapshot entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferLetterData {
    pub candidate_name: String,
    pub position: String,
    pub department: String,
    pub salary: String,
    pub start_date: NaiveDate,
    pub benefits_package: String,
    pub company_name: String,
    pub company_address: String,
    /// Stored verbatim; an empty string means "no notes".
    pub additional_notes: String,
    pub employment_type: EmploymentType,
    pub signatory_name: String,
    pub signatory_title: String,
}

/// Employment type selection.
///
/// Unknown keys are preserved in [`EmploymentType::Other`] so the renderer
/// can pass them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Other(String),
}

impl EmploymentType {
    /// Selection keys offered by the form, in display order.
    pub const CHOICES: [&'static str; 4] = ["fullTime", "partTime", "contract", "internship"];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "fullTime" => EmploymentType::FullTime,
            "partTime" => EmploymentType::PartTime,
            "contract" => EmploymentType::Contract,
            "internship" => EmploymentType::Internship,
            other => EmploymentType::Other(other.to_string()),
        }
    }

    /// Wire key for serialization, the inverse of [`EmploymentType::parse`].
    pub fn key(&self) -> &str {
        match self {
            EmploymentType::FullTime => "fullTime",
            EmploymentType::PartTime => "partTime",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
            EmploymentType::Other(raw) => raw,
        }
    }

    /// Display text used in the rendered letter.
    pub fn label(&self) -> &str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
            EmploymentType::Other(raw) => raw,
        }
    }
}

impl From<String> for EmploymentType {
    fn from(raw: String) -> Self {
        EmploymentType::parse(&raw)
    }
}

impl From<EmploymentType> for String {
    fn from(kind: EmploymentType) -> Self {
        kind.key().to_string()
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier for each form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CandidateName,
    Position,
    Department,
    Salary,
    StartDate,
    BenefitsPackage,
    CompanyName,
    CompanyAddress,
    AdditionalNotes,
    EmploymentType,
    SignatoryName,
    SignatoryTitle,
}

impl Field {
    /// JSON/camelCase name, as used in drafts and error reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CandidateName => "candidateName",
            Field::Position => "position",
            Field::Department => "department",
            Field::Salary => "salary",
            Field::StartDate => "startDate",
            Field::BenefitsPackage => "benefitsPackage",
            Field::CompanyName => "companyName",
            Field::CompanyAddress => "companyAddress",
            Field::AdditionalNotes => "additionalNotes",
            Field::EmploymentType => "employmentType",
            Field::SignatoryName => "signatoryName",
            Field::SignatoryTitle => "signatoryTitle",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field validation failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_type_parses_known_keys() {
        assert_eq!(EmploymentType::parse("fullTime"), EmploymentType::FullTime);
        assert_eq!(EmploymentType::parse("contract"), EmploymentType::Contract);
    }

    #[test]
    fn employment_type_preserves_unknown_keys() {
        let kind = EmploymentType::parse("freelance");
        assert_eq!(kind, EmploymentType::Other("freelance".into()));
        assert_eq!(kind.label(), "freelance");
        assert_eq!(kind.key(), "freelance");
    }

    #[test]
    fn employment_type_round_trips_through_serde() {
        let json = serde_json::to_string(&EmploymentType::PartTime).expect("serialize");
        assert_eq!(json, "\"partTime\"");
        let back: EmploymentType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, EmploymentType::PartTime);
    }
}
