use chrono::NaiveDate;

use offer_spec::{EmploymentType, Field, FieldError, Notification, NotificationSink};

/// Controls which bits of state the wizard prints.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Verbosity {
    /// Clean output: prompts and field errors only.
    Clean,
    /// Verbose output: parse expectations alongside error messages.
    Verbose,
}

impl Verbosity {
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Clean
        }
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Verbosity::Verbose)
    }
}

/// What kind of input a field prompt expects.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum PromptKind {
    Text,
    OptionalText,
    Date,
    Choice,
}

/// One field prompt: display label, example placeholder, input kind.
pub struct FieldPrompt {
    pub field: Field,
    pub label: &'static str,
    pub example: &'static str,
    pub kind: PromptKind,
}

impl FieldPrompt {
    /// Prompt text with the kind-specific hint, without the trailing colon.
    pub fn prompt_text(&self) -> String {
        match self.kind {
            PromptKind::Text => format!("{} (e.g. {})", self.label, self.example),
            PromptKind::OptionalText => format!("{} (optional)", self.label),
            PromptKind::Date => format!("{} (YYYY-MM-DD, e.g. {})", self.label, self.example),
            PromptKind::Choice => {
                format!("{} ({})", self.label, EmploymentType::CHOICES.join("/"))
            }
        }
    }
}

/// Prompt order mirrors the on-screen form.
pub const FIELD_PROMPTS: [FieldPrompt; 12] = [
    FieldPrompt {
        field: Field::CandidateName,
        label: "Candidate Name",
        example: "Jane Doe",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::Position,
        label: "Position",
        example: "Software Engineer",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::Department,
        label: "Department",
        example: "Engineering",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::EmploymentType,
        label: "Employment Type",
        example: "fullTime",
        kind: PromptKind::Choice,
    },
    FieldPrompt {
        field: Field::Salary,
        label: "Salary",
        example: "$120,000 per year",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::StartDate,
        label: "Start Date",
        example: "2025-06-01",
        kind: PromptKind::Date,
    },
    FieldPrompt {
        field: Field::BenefitsPackage,
        label: "Benefits Package",
        example: "Health insurance, 401(k), paid time off",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::CompanyName,
        label: "Company Name",
        example: "Acme Inc.",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::CompanyAddress,
        label: "Company Address",
        example: "123 Main St, City, State, ZIP",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::AdditionalNotes,
        label: "Additional Notes",
        example: "Any additional information for the candidate",
        kind: PromptKind::OptionalText,
    },
    FieldPrompt {
        field: Field::SignatoryName,
        label: "Signatory Name",
        example: "John Smith",
        kind: PromptKind::Text,
    },
    FieldPrompt {
        field: Field::SignatoryTitle,
        label: "Signatory Title",
        example: "HR Director",
        kind: PromptKind::Text,
    },
];

/// The prompt descriptor for a field.
pub fn prompt_for(field: Field) -> Option<&'static FieldPrompt> {
    FIELD_PROMPTS.iter().find(|prompt| prompt.field == field)
}

/// Console presenter for the wizard flow.
pub struct Presenter {
    verbosity: Verbosity,
    header_printed: bool,
}

impl Presenter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            header_printed: false,
        }
    }

    pub fn show_header(&mut self) {
        if self.header_printed {
            return;
        }
        println!("Offer Letter Generator");
        println!("Answer each field; validation runs when the form is submitted.");
        self.header_printed = true;
    }

    pub fn show_field_errors(&self, errors: &[FieldError]) {
        eprintln!("Some fields need attention:");
        for error in errors {
            eprintln!("  {}: {}", error.field, error.message);
        }
    }

    pub fn show_parse_error(&self, error: &AnswerParseError) {
        eprintln!("Invalid answer: {}", error.user_message);
        if self.verbosity.is_verbose()
            && let Some(debug) = &error.debug_message
        {
            eprintln!("  Expected: {}", debug);
        }
    }
}

/// Sink that prints notifications straight to the console.
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, notification: Notification) {
        println!("{}", notification.title);
        println!("{}", notification.description);
    }
}

/// Error produced when parsing answers from the user.
#[derive(Debug)]
pub struct AnswerParseError {
    pub user_message: String,
    pub debug_message: Option<String>,
}

impl AnswerParseError {
    pub fn new(user_message: impl Into<String>, debug_message: Option<String>) -> Self {
        Self {
            user_message: user_message.into(),
            debug_message,
        }
    }
}

/// Parse a start date answer. Dates before `earliest` are re-prompted, the
/// terminal analog of a date picker that only offers future days; the form
/// itself never enforces this.
pub fn parse_start_date(raw: &str, earliest: NaiveDate) -> Result<NaiveDate, AnswerParseError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AnswerParseError::new(
            "Please enter the date as YYYY-MM-DD.",
            Some("expected an ISO calendar date".to_string()),
        )
    })?;
    if date < earliest {
        return Err(AnswerParseError::new(
            "Start date must not be in the past.",
            Some(format!("expected a date on or after {}", earliest)),
        ));
    }
    Ok(date)
}

/// Parse an employment type answer into its canonical selection key.
pub fn parse_choice(raw: &str) -> Result<String, AnswerParseError> {
    if let Some(choice) = EmploymentType::CHOICES
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(raw))
    {
        Ok(choice.to_string())
    } else {
        Err(AnswerParseError::new(
            format!("Choose one of: {}.", EmploymentType::CHOICES.join(", ")),
            Some(format!(
                "allowed values: {}",
                EmploymentType::CHOICES.join(", ")
            )),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earliest() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }

    #[test]
    fn parse_start_date_accepts_iso_dates() {
        let date = parse_start_date("2025-06-01", earliest()).expect("valid input");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn parse_start_date_rejects_other_shapes() {
        assert!(parse_start_date("06/01/2025", earliest()).is_err());
        assert!(parse_start_date("tomorrow", earliest()).is_err());
    }

    #[test]
    fn parse_start_date_rejects_past_dates() {
        let error = parse_start_date("2024-12-31", earliest()).expect_err("past date");
        assert_eq!(error.user_message, "Start date must not be in the past.");
    }

    #[test]
    fn parse_choice_is_case_insensitive_and_canonical() {
        assert_eq!(parse_choice("FULLTIME").expect("known key"), "fullTime");
        assert_eq!(parse_choice("contract").expect("known key"), "contract");
    }

    #[test]
    fn parse_choice_rejects_unknown_keys() {
        assert!(parse_choice("freelance").is_err());
    }

    #[test]
    fn prompts_cover_every_field_once() {
        let mut seen = Vec::new();
        for prompt in &FIELD_PROMPTS {
            assert!(!seen.contains(&prompt.field));
            seen.push(prompt.field);
        }
        assert_eq!(seen.len(), 12);
    }
}
