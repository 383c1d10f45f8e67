mod document;
mod error;
mod parser;
mod payload;
mod pipeline;
mod script;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use settings::Settings;

#[derive(Parser)]
#[command(name = "mermaid_builder", about = "Build the MermAId assistant update script from a prompt file")]
struct Cli {
    /// Settings file (TOML); missing file means defaults plus BUILDER_* env vars
    #[arg(short, long, default_value = "assistant.toml")]
    config: PathBuf,
    /// Prompt markdown to read (overrides prompt_path)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Script to write (overrides output_path)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the script to stdout instead of writing it
    #[arg(long)]
    stdout: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    if let Some(input) = cli.input {
        settings.prompt_path = input;
    }
    if let Some(output) = cli.output {
        settings.output_path = output;
    }
    info!(assistant = %settings.assistant_name, "settings loaded");

    if cli.stdout {
        let generated = pipeline::generate(&settings)?;
        print!("{}", generated.script);
        return Ok(());
    }

    println!("Reading prompt from: {}", settings.prompt_path.display());
    let generated = pipeline::build(&settings)?;

    for line in report_lines(&generated.payload) {
        println!("{}", line);
    }

    println!("\nScript written: {}", settings.output_path.display());
    println!("To update your assistant, run:\n  {}", script_invocation(&settings.output_path));
    Ok(())
}

/// One warning per empty field, then one size line per extracted field.
fn report_lines(payload: &payload::Payload) -> Vec<String> {
    let sizes = payload.extracted_sizes();
    let warnings = sizes
        .iter()
        .filter(|(_, size)| size.is_empty())
        .map(|(name, _)| format!("  ! {} is empty", name));
    let counts = sizes.iter().map(|(name, size)| format!("  {}: {}", name, size));
    warnings.chain(counts).collect()
}

fn script_invocation(path: &std::path::Path) -> String {
    let shown = path.display().to_string();
    if path.is_absolute() || shown.starts_with("./") {
        shown
    } else {
        format!("./{}", shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract::Extracted;

    #[test]
    fn each_empty_field_reported_once() {
        let payload = payload::Payload::assemble(
            &Settings::default(),
            Extracted {
                postlude: "## FLUXO DE ATENDIMENTO\n1. Oi".into(),
                ..Extracted::default()
            },
        );
        let lines = report_lines(&payload);
        let warnings: Vec<_> = lines.iter().filter(|l| l.contains("is empty")).collect();
        assert_eq!(
            warnings,
            vec![
                "  ! assistantRole is empty",
                "  ! assistantPersonality is empty",
                "  ! organizationInfo is empty",
            ]
        );
        assert_eq!(lines.len(), 7);
        assert!(lines.contains(&"  organizationInfo: 0 items".to_string()));
    }

    #[test]
    fn relative_script_gets_dot_slash() {
        assert_eq!(script_invocation(std::path::Path::new("update_assistant.sh")), "./update_assistant.sh");
        assert_eq!(script_invocation(std::path::Path::new("/tmp/u.sh")), "/tmp/u.sh");
    }
}
