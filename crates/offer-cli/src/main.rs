mod wizard;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use offer_spec::{
    FieldError, OfferDraft, OfferForm, OfferLetterData, TemplateEngine, build_letter, draft_schema,
    render_json, render_text, today, validate,
};
use wizard::{
    ConsoleSink, FIELD_PROMPTS, FieldPrompt, Presenter, PromptKind, Verbosity, parse_choice,
    parse_start_date, prompt_for,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Offer letter generator CLI",
    long_about = "Fills, validates, and renders employment offer letters as text, JSON, or a print-ready HTML page"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RenderMode {
    Text,
    Html,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in the offer form interactively and render the letter.
    Wizard {
        /// Optional JSON file with initial field values.
        #[arg(long, value_name = "ANSWERS")]
        answers: Option<PathBuf>,
        /// Render output mode for the generated letter.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
        /// Write the rendered letter to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Overwrite the output file if present.
        #[arg(long)]
        force: bool,
        /// Also emit the published snapshot as JSON.
        #[arg(long)]
        data_json: bool,
        /// Show parse expectations alongside error messages.
        #[arg(long, alias = "debug")]
        verbose: bool,
    },
    /// Render a letter from a JSON draft without prompting.
    Generate {
        /// JSON file with the draft field values.
        #[arg(long, value_name = "INPUT")]
        input: PathBuf,
        /// Render output mode for the generated letter.
        #[arg(long, value_enum, default_value_t = RenderMode::Text)]
        format: RenderMode,
        /// Write the rendered letter to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Overwrite the output file if present.
        #[arg(long)]
        force: bool,
        /// Also emit the published snapshot as JSON.
        #[arg(long)]
        data_json: bool,
    },
    /// Check a JSON draft against the field rules.
    Validate {
        /// JSON file with the draft field values.
        #[arg(long, value_name = "INPUT")]
        input: PathBuf,
    },
    /// Print the JSON schema for draft files.
    Schema,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Wizard {
            answers,
            format,
            out,
            force,
            data_json,
            verbose,
        } => run_wizard(answers, format, out, force, data_json, verbose),
        Command::Generate {
            input,
            format,
            out,
            force,
            data_json,
        } => run_generate(input, format, out, force, data_json),
        Command::Validate { input } => run_validate(input),
        Command::Schema => run_schema(),
    }
}

fn run_wizard(
    answers: Option<PathBuf>,
    format: RenderMode,
    out: Option<PathBuf>,
    force: bool,
    data_json: bool,
    verbose: bool,
) -> CliResult<()> {
    let mut form = OfferForm::new();
    if let Some(path) = answers {
        let contents = fs::read_to_string(path)?;
        form.load_draft(serde_json::from_str(&contents)?);
    }

    let mut presenter = Presenter::new(Verbosity::from_verbose(verbose));
    presenter.show_header();

    for prompt in &FIELD_PROMPTS {
        fill_field(&mut form, prompt, &presenter)?;
    }

    let mut sink = ConsoleSink;
    loop {
        let failed = match form.submit(&mut sink) {
            Ok(_) => break,
            Err(errors) => errors.to_vec(),
        };
        presenter.show_field_errors(&failed);
        for error in &failed {
            if let Some(prompt) = prompt_for(error.field) {
                fill_field(&mut form, prompt, &presenter)?;
            }
        }
    }

    let published = form
        .published()
        .ok_or("wizard finished without a published letter")?
        .clone();
    if data_json {
        println!("{}", serde_json::to_string_pretty(&published)?);
    }
    emit_letter(&published, format, out.as_deref(), force)
}

/// Prompt for one field until the raw input parses, then store it.
///
/// Text fields are stored as entered; length rules only run on submit, so
/// failures surface as inline field errors rather than prompt errors.
fn fill_field(form: &mut OfferForm, prompt: &FieldPrompt, presenter: &Presenter) -> CliResult<()> {
    loop {
        let raw = prompt_line(&prompt.prompt_text())?;
        match prompt.kind {
            PromptKind::Date => {
                if raw.is_empty() {
                    form.set_start_date(None);
                    return Ok(());
                }
                match parse_start_date(&raw, today()) {
                    Ok(date) => {
                        form.set_start_date(Some(date));
                        return Ok(());
                    }
                    Err(error) => presenter.show_parse_error(&error),
                }
            }
            PromptKind::Choice => {
                if raw.is_empty() {
                    form.set_employment_type(None);
                    return Ok(());
                }
                match parse_choice(&raw) {
                    Ok(choice) => {
                        form.set_employment_type(Some(choice));
                        return Ok(());
                    }
                    Err(error) => presenter.show_parse_error(&error),
                }
            }
            PromptKind::Text | PromptKind::OptionalText => {
                set_text_field(form, prompt, raw);
                return Ok(());
            }
        }
    }
}

fn set_text_field(form: &mut OfferForm, prompt: &FieldPrompt, value: String) {
    use offer_spec::Field;

    match prompt.field {
        Field::CandidateName => form.set_candidate_name(value),
        Field::Position => form.set_position(value),
        Field::Department => form.set_department(value),
        Field::Salary => form.set_salary(value),
        Field::BenefitsPackage => form.set_benefits_package(value),
        Field::CompanyName => form.set_company_name(value),
        Field::CompanyAddress => form.set_company_address(value),
        Field::AdditionalNotes => form.set_additional_notes(value),
        Field::SignatoryName => form.set_signatory_name(value),
        Field::SignatoryTitle => form.set_signatory_title(value),
        Field::StartDate | Field::EmploymentType => {}
    }
}

fn run_generate(
    input: PathBuf,
    format: RenderMode,
    out: Option<PathBuf>,
    force: bool,
    data_json: bool,
) -> CliResult<()> {
    let contents = fs::read_to_string(&input)?;
    let draft: OfferDraft = serde_json::from_str(&contents)?;
    let mut form = OfferForm::new();
    form.load_draft(draft);

    let mut sink = ConsoleSink;
    let published = match form.submit(&mut sink) {
        Ok(data) => data.clone(),
        Err(errors) => {
            print_field_errors(errors);
            return Err("validation failed".into());
        }
    };

    if data_json {
        println!("{}", serde_json::to_string_pretty(&published)?);
    }
    emit_letter(&published, format, out.as_deref(), force)
}

fn run_validate(input: PathBuf) -> CliResult<()> {
    let contents = fs::read_to_string(&input)?;
    let draft: OfferDraft = serde_json::from_str(&contents)?;

    match validate(&draft) {
        Ok(_) => {
            println!("Validation result: valid");
            Ok(())
        }
        Err(errors) => {
            println!("Validation result: invalid");
            for error in &errors {
                println!("  {} - {}", error.field, error.message);
            }
            Err("validation failed".into())
        }
    }
}

fn run_schema() -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(&draft_schema())?);
    Ok(())
}

fn emit_letter(
    data: &OfferLetterData,
    format: RenderMode,
    out: Option<&Path>,
    force: bool,
) -> CliResult<()> {
    let letter = build_letter(data, today());
    let rendered = match format {
        RenderMode::Text => render_text(&letter),
        RenderMode::Json => serde_json::to_string_pretty(&render_json(&letter))?,
        RenderMode::Html => TemplateEngine::new()?.render_html(&letter)?,
    };

    match out {
        Some(path) => write_output(path, &rendered, force),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}

fn write_output(path: &Path, contents: &str, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(format!(
            "{} already exists; rerun with --force to overwrite",
            path.display()
        )
        .into());
    }
    fs::write(path, contents)?;
    println!("Wrote letter to {}", path.display());
    Ok(())
}

fn print_field_errors(errors: &[FieldError]) {
    eprintln!("Field errors:");
    for error in errors {
        eprintln!("  {}: {}", error.field, error.message);
    }
}

fn prompt_line(prompt: &str) -> CliResult<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err("input stream closed before the form was complete".into());
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use serde_json::{Value, json};

    fn complete_draft() -> Value {
        json!({
            "candidateName": "Jane Doe",
            "position": "Software Engineer",
            "department": "Engineering",
            "salary": "$120,000 per year",
            "startDate": "2025-06-01",
            "benefitsPackage": "Health insurance, 401(k)",
            "companyName": "Acme Inc.",
            "companyAddress": "123 Main St, City, State, ZIP",
            "employmentType": "fullTime",
            "signatoryName": "John Smith",
            "signatoryTitle": "HR Director"
        })
    }

    fn write_draft(dir: &assert_fs::TempDir, value: &Value) -> CliResult<PathBuf> {
        let path = dir.path().join("draft.json");
        fs::write(&path, value.to_string())?;
        Ok(path)
    }

    #[test]
    fn generate_renders_letter_from_draft() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let input = write_draft(&dir, &complete_draft())?;

        let output = Command::cargo_bin("offerdesk")?
            .arg("generate")
            .arg("--input")
            .arg(&input)
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.contains("Offer letter generated!"));
        assert!(stdout.contains("Full-time"));
        assert!(stdout.contains("June 1, 2025"));
        Ok(())
    }

    #[test]
    fn generate_rejects_short_fields_without_output() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let mut draft = complete_draft();
        draft["candidateName"] = Value::String("J".into());
        let input = write_draft(&dir, &draft)?;

        let output = Command::cargo_bin("offerdesk")?
            .arg("generate")
            .arg("--input")
            .arg(&input)
            .output()?;

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr)?;
        assert!(stderr.contains("Candidate name must be at least 2 characters."));
        let stdout = String::from_utf8(output.stdout)?;
        assert!(!stdout.contains("Offer letter generated!"));
        Ok(())
    }

    #[test]
    fn generate_writes_html_with_print_treatment() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let input = write_draft(&dir, &complete_draft())?;
        let out_dir = tempfile::TempDir::new()?;
        let out = out_dir.path().join("letter.html");

        Command::cargo_bin("offerdesk")?
            .arg("generate")
            .arg("--input")
            .arg(&input)
            .arg("--format")
            .arg("html")
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(&out)?;
        assert!(html.contains("@media print"));
        assert!(html.contains("print-hidden"));
        assert!(html.contains("Jane Doe"));
        Ok(())
    }

    #[test]
    fn existing_output_requires_force() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let input = write_draft(&dir, &complete_draft())?;
        let out_dir = tempfile::TempDir::new()?;
        let out = out_dir.path().join("letter.txt");
        fs::write(&out, "already here")?;

        Command::cargo_bin("offerdesk")?
            .arg("generate")
            .arg("--input")
            .arg(&input)
            .arg("--out")
            .arg(&out)
            .assert()
            .failure();
        assert_eq!(fs::read_to_string(&out)?, "already here");

        Command::cargo_bin("offerdesk")?
            .arg("generate")
            .arg("--input")
            .arg(&input)
            .arg("--out")
            .arg(&out)
            .arg("--force")
            .assert()
            .success();
        assert!(fs::read_to_string(&out)?.contains("Jane Doe"));
        Ok(())
    }

    #[test]
    fn wizard_accepts_answers_on_stdin() -> CliResult<()> {
        let answers = [
            "Jane Doe",
            "Software Engineer",
            "Engineering",
            "fullTime",
            "$120,000 per year",
            "2099-01-01",
            "Health insurance, 401(k)",
            "Acme Inc.",
            "123 Main St, City, State, ZIP",
            "",
            "John Smith",
            "HR Director",
        ];
        let stdin = format!("{}\n", answers.join("\n"));

        let output = Command::cargo_bin("offerdesk")?
            .arg("wizard")
            .write_stdin(stdin)
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.contains("Offer letter generated!"));
        assert!(stdout.contains("January 1, 2099"));
        assert!(stdout.contains("Dear Jane Doe,"));
        Ok(())
    }

    #[test]
    fn validate_reports_missing_fields() -> CliResult<()> {
        let dir = assert_fs::TempDir::new()?;
        let input = write_draft(&dir, &json!({}))?;

        let output = Command::cargo_bin("offerdesk")?
            .arg("validate")
            .arg("--input")
            .arg(&input)
            .output()?;

        assert!(!output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.contains("Validation result: invalid"));
        assert!(stdout.contains("startDate - Start date is required."));
        Ok(())
    }

    #[test]
    fn schema_lists_draft_fields_and_limits() -> CliResult<()> {
        let output = Command::cargo_bin("offerdesk")?.arg("schema").output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        assert!(stdout.contains("candidateName"));
        assert!(stdout.contains("minLength"));
        Ok(())
    }
}
