//! Extract command - read the recipient from a single invoice PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use briefkopf_core::models::config::BriefkopfConfig;
use briefkopf_core::pdf::{PdfTextSource, TextSource};
use briefkopf_core::{extract_from_file, ExtractionResponse, MessageTemplate, RecipientExtractor};

use super::config::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also render the e-mail message for the extracted recipient
    #[arg(short, long)]
    message: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());

    let response = process_pdf(&args.input, &config);

    let mut output = format_response(&response, args.format)?;

    if args.message {
        if let Some(data) = response.data() {
            let template = MessageTemplate::from_config(&config.template)?;
            let rendered = template.render_for(data);
            output.push_str(&format!("\nSubject: {}\n\n{}\n", rendered.subject, rendered.body));
        }
    }

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if let Some(error) = response.error() {
        eprintln!("{} {}", style("!").yellow(), error);
        eprintln!("  Please enter salutation and name manually.");
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read a PDF and extract its recipient; failures come back as values.
pub fn process_pdf(path: &Path, config: &BriefkopfConfig) -> ExtractionResponse {
    let min_text_length = config.pdf.min_text_length;
    let source = |data: &[u8]| -> briefkopf_core::pdf::Result<String> {
        let text = PdfTextSource::new().read_text(data)?;
        let length = text.trim().chars().count();
        if length < min_text_length {
            warn!(
                "{}: only {} characters of text, the PDF may be scanned",
                path.display(),
                length
            );
        }
        Ok(text)
    };

    let extractor = RecipientExtractor::from_config(&config.extraction);
    extract_from_file(&extractor, &source, path)
}

pub fn format_response(response: &ExtractionResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
        OutputFormat::Csv => format_csv(response),
        OutputFormat::Text => Ok(format_text(response)),
    }
}

fn format_csv(response: &ExtractionResponse) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["success", "anrede", "name", "parsing_method", "error"])?;

    match response {
        ExtractionResponse::Success(data) => wtr.write_record([
            "true",
            data.anrede.as_str(),
            data.name.as_str(),
            data.parsing_method.as_str(),
            "",
        ])?,
        ExtractionResponse::Failure(error) => {
            wtr.write_record(["false", "", "", "", error.as_str()])?
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(response: &ExtractionResponse) -> String {
    let mut output = String::new();

    match response {
        ExtractionResponse::Success(data) => {
            output.push_str(&format!("Extracted: {}\n", data.display_name()));
            output.push_str(&format!("Method: {}\n", data.parsing_method));
            if !data.extracted_text.is_empty() {
                output.push_str("\nMatched text:\n");
                for line in data.extracted_text.lines() {
                    output.push_str(&format!("  {}\n", line));
                }
            }
        }
        ExtractionResponse::Failure(error) => {
            output.push_str(&format!("Not extracted: {}\n", error));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefkopf_core::{RecipientData, StrategyKind};

    fn success() -> ExtractionResponse {
        ExtractionResponse::Success(RecipientData {
            name: "Erika Muster".to_string(),
            anrede: "Frau".to_string(),
            extracted_text: "Frau\nErika Muster".to_string(),
            parsing_method: StrategyKind::SalutationPattern,
        })
    }

    #[test]
    fn test_format_text() {
        let text = format_text(&success());
        assert!(text.starts_with("Extracted: Frau Erika Muster\nMethod: Anrede pattern search\n"));
        assert!(text.contains("  Erika Muster\n"));
    }

    #[test]
    fn test_format_csv() {
        let csv = format_response(&success(), OutputFormat::Csv).unwrap();
        assert_eq!(
            csv,
            "success,anrede,name,parsing_method,error\ntrue,Frau,Erika Muster,Anrede pattern search,\n"
        );
    }

    #[test]
    fn test_format_failure_json() {
        let json = format_response(&ExtractionResponse::Failure("nope".to_string()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "nope");
    }
}
