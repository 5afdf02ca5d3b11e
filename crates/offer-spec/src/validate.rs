use chrono::NaiveDate;

use crate::data::{EmploymentType, Field, FieldError, OfferDraft, OfferLetterData};

const CANDIDATE_NAME_TOO_SHORT: &str = "Candidate name must be at least 2 characters.";
const POSITION_TOO_SHORT: &str = "Position must be at least 2 characters.";
const DEPARTMENT_TOO_SHORT: &str = "Department must be at least 2 characters.";
const SALARY_REQUIRED: &str = "Salary is required.";
const START_DATE_REQUIRED: &str = "Start date is required.";
const BENEFITS_REQUIRED: &str = "Benefits package is required.";
const COMPANY_NAME_TOO_SHORT: &str = "Company name must be at least 2 characters.";
const COMPANY_ADDRESS_TOO_SHORT: &str = "Company address must be at least 5 characters.";
const EMPLOYMENT_TYPE_REQUIRED: &str = "Please select an employment type.";
const SIGNATORY_NAME_TOO_SHORT: &str = "Signatory name must be at least 2 characters.";
const SIGNATORY_TITLE_TOO_SHORT: &str = "Signatory title must be at least 2 characters.";

/// Validate every field of the draft and build the snapshot.
///
/// Each field is checked independently; all failures are reported, not just
/// the first. On any failure no snapshot is produced.
pub fn validate(draft: &OfferDraft) -> Result<OfferLetterData, Vec<FieldError>> {
    let mut errors = Vec::new();

    let candidate_name = collect(
        min_chars(Field::CandidateName, &draft.candidate_name, 2, CANDIDATE_NAME_TOO_SHORT),
        &mut errors,
    );
    let position = collect(
        min_chars(Field::Position, &draft.position, 2, POSITION_TOO_SHORT),
        &mut errors,
    );
    let department = collect(
        min_chars(Field::Department, &draft.department, 2, DEPARTMENT_TOO_SHORT),
        &mut errors,
    );
    let salary = collect(
        min_chars(Field::Salary, &draft.salary, 1, SALARY_REQUIRED),
        &mut errors,
    );
    let start_date = collect(
        required_date(Field::StartDate, draft.start_date, START_DATE_REQUIRED),
        &mut errors,
    );
    let benefits_package = collect(
        min_chars(Field::BenefitsPackage, &draft.benefits_package, 1, BENEFITS_REQUIRED),
        &mut errors,
    );
    let company_name = collect(
        min_chars(Field::CompanyName, &draft.company_name, 2, COMPANY_NAME_TOO_SHORT),
        &mut errors,
    );
    let company_address = collect(
        min_chars(Field::CompanyAddress, &draft.company_address, 5, COMPANY_ADDRESS_TOO_SHORT),
        &mut errors,
    );
    let employment_type = collect(
        required_choice(
            Field::EmploymentType,
            draft.employment_type.as_deref(),
            EMPLOYMENT_TYPE_REQUIRED,
        ),
        &mut errors,
    );
    let signatory_name = collect(
        min_chars(Field::SignatoryName, &draft.signatory_name, 2, SIGNATORY_NAME_TOO_SHORT),
        &mut errors,
    );
    let signatory_title = collect(
        min_chars(Field::SignatoryTitle, &draft.signatory_title, 2, SIGNATORY_TITLE_TOO_SHORT),
        &mut errors,
    );

    if let (
        Some(candidate_name),
        Some(position),
        Some(department),
        Some(salary),
        Some(start_date),
        Some(benefits_package),
        Some(company_name),
        Some(company_address),
        Some(employment_type),
        Some(signatory_name),
        Some(signatory_title),
    ) = (
        candidate_name,
        position,
        department,
        salary,
        start_date,
        benefits_package,
        company_name,
        company_address,
        employment_type,
        signatory_name,
        signatory_title,
    ) {
        Ok(OfferLetterData {
            candidate_name,
            position,
            department,
            salary,
            start_date,
            benefits_package,
            company_name,
            company_address,
            additional_notes: draft.additional_notes.clone(),
            employment_type,
            signatory_name,
            signatory_title,
        })
    } else {
        Err(errors)
    }
}

fn collect<T>(checked: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match checked {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

/// Text field with a minimum character count.
fn min_chars(
    field: Field,
    value: &str,
    min: usize,
    message: &str,
) -> Result<String, FieldError> {
    if value.chars().count() < min {
        Err(FieldError::new(field, message))
    } else {
        Ok(value.to_string())
    }
}

/// Date field that must be present. No range rule: past dates are only
/// discouraged by the wizard prompt, never rejected here.
fn required_date(
    field: Field,
    value: Option<NaiveDate>,
    message: &str,
) -> Result<NaiveDate, FieldError> {
    value.ok_or_else(|| FieldError::new(field, message))
}

/// Selection field that must be present. The key set is open: unknown keys
/// survive as [`EmploymentType::Other`] and render verbatim downstream.
fn required_choice(
    field: Field,
    value: Option<&str>,
    message: &str,
) -> Result<EmploymentType, FieldError> {
    match value {
        Some(raw) if !raw.is_empty() => Ok(EmploymentType::parse(raw)),
        _ => Err(FieldError::new(field, message)),
    }
}
