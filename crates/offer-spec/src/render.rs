use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};

use crate::data::OfferLetterData;
use crate::dates::long_date;

/// Static placeholder for the candidate's postal address.
pub const CANDIDATE_ADDRESS_PLACEHOLDER: &str = "[Candidate Address]";

/// Static placeholder for the response deadline in the acceptance paragraph.
pub const RESPONSE_DEADLINE_PLACEHOLDER: &str = "[Response Deadline]";

/// Fully formatted letter, ready for the text/JSON/HTML renderers.
///
/// Built exclusively from an already-validated snapshot; carries no raw form
/// state and performs no checks of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterDocument {
    pub company_name: String,
    pub company_address: String,
    /// Long-form date the letter was produced on.
    pub issued_on: String,
    pub candidate_name: String,
    pub candidate_address: String,
    pub subject: String,
    pub salutation: String,
    pub opening: String,
    pub start_date: String,
    pub compensation: String,
    pub benefits: String,
    /// Present only when the snapshot carries non-empty notes.
    pub additional_notes: Option<String>,
    pub response_instructions: String,
    pub closing: String,
    pub signatory_name: String,
    pub signatory_title: String,
    pub acceptance_statement: String,
}

/// Project a validated snapshot into a letter issued on the given date.
///
/// Pure: the same snapshot and date always yield the same document.
pub fn build_letter(data: &OfferLetterData, issued_on: NaiveDate) -> LetterDocument {
    let additional_notes = if data.additional_notes.is_empty() {
        None
    } else {
        Some(data.additional_notes.clone())
    };

    LetterDocument {
        company_name: data.company_name.clone(),
        company_address: data.company_address.clone(),
        issued_on: long_date(issued_on),
        candidate_name: data.candidate_name.clone(),
        candidate_address: CANDIDATE_ADDRESS_PLACEHOLDER.to_string(),
        subject: format!("Offer of Employment - {}", data.position),
        salutation: format!("Dear {},", data.candidate_name),
        opening: format!(
            "We are pleased to offer you the {} position of {} in the {} department at {}, \
             with the following terms and conditions:",
            data.employment_type.label(),
            data.position,
            data.department,
            data.company_name
        ),
        start_date: long_date(data.start_date),
        compensation: data.salary.clone(),
        benefits: data.benefits_package.clone(),
        additional_notes,
        response_instructions: format!(
            "To accept this offer, please sign and return a copy of this letter by {}. \
             If you have any questions or need further clarification, please don't \
             hesitate to contact us.",
            RESPONSE_DEADLINE_PLACEHOLDER
        ),
        closing: format!(
            "We look forward to welcoming you to our team and are confident that you \
             will make a valuable contribution to {}.",
            data.company_name
        ),
        signatory_name: data.signatory_name.clone(),
        signatory_title: data.signatory_title.clone(),
        acceptance_statement: format!(
            "I, {}, accept the offer of employment as outlined above.",
            data.candidate_name
        ),
    }
}

const SIGNATURE_RULE: &str = "________________________";

/// Render the letter as plain text.
pub fn render_text(letter: &LetterDocument) -> String {
    let mut lines = Vec::new();

    lines.push(letter.company_name.clone());
    lines.push(letter.company_address.clone());
    lines.push(letter.issued_on.clone());
    lines.push(String::new());

    lines.push(letter.candidate_name.clone());
    lines.push(letter.candidate_address.clone());
    lines.push(String::new());

    lines.push(format!("Subject: {}", letter.subject));
    lines.push(String::new());

    lines.push(letter.salutation.clone());
    lines.push(String::new());

    lines.push(letter.opening.clone());
    lines.push(String::new());
    lines.push(format!("  Start Date: {}", letter.start_date));
    lines.push(format!("  Compensation: {}", letter.compensation));
    lines.push(format!("  Benefits: {}", letter.benefits));
    lines.push(String::new());

    if let Some(notes) = &letter.additional_notes {
        lines.push(notes.clone());
        lines.push(String::new());
    }

    lines.push(letter.response_instructions.clone());
    lines.push(String::new());
    lines.push(letter.closing.clone());
    lines.push(String::new());

    lines.push("Sincerely,".to_string());
    lines.push(String::new());
    lines.push(SIGNATURE_RULE.to_string());
    lines.push(letter.signatory_name.clone());
    lines.push(letter.signatory_title.clone());
    lines.push(letter.company_name.clone());
    lines.push(String::new());

    lines.push("Acceptance of Offer:".to_string());
    lines.push(letter.acceptance_statement.clone());
    lines.push(String::new());
    lines.push(SIGNATURE_RULE.to_string());
    lines.push("Signature".to_string());
    lines.push(String::new());
    lines.push(SIGNATURE_RULE.to_string());
    lines.push("Date".to_string());

    lines.join("\n")
}

/// Render the letter as a structured JSON value.
pub fn render_json(letter: &LetterDocument) -> Value {
    json!({
        "header": {
            "company_name": letter.company_name,
            "company_address": letter.company_address,
            "issued_on": letter.issued_on,
        },
        "recipient": {
            "candidate_name": letter.candidate_name,
            "candidate_address": letter.candidate_address,
        },
        "subject": letter.subject,
        "salutation": letter.salutation,
        "body": {
            "opening": letter.opening,
            "terms": {
                "start_date": letter.start_date,
                "compensation": letter.compensation,
                "benefits": letter.benefits,
            },
            "additional_notes": letter.additional_notes,
            "response_instructions": letter.response_instructions,
            "closing": letter.closing,
        },
        "signatory": {
            "name": letter.signatory_name,
            "title": letter.signatory_title,
            "company": letter.company_name,
        },
        "acceptance": {
            "statement": letter.acceptance_statement,
        },
    })
}
