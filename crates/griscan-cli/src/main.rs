//! griscan — extract GRI disclosure coverage from a sustainability report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use griscan_core::{DetectionConfig, DetectionMethod, Error, GRI_CATALOG};
use griscan_llm::{ChatCompletionClient, LlmConfig};
use griscan_match::{
    format_duration, found_by_standard, standard_coverage, write_csv, write_json, CsvLayout,
};
use griscan_runtime::{Extraction, Extractor};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "griscan", version, about = "Extract GRI disclosures from sustainability report PDFs")]
struct Args {
    /// Path to the sustainability report (PDF, or form-feed separated .txt)
    pdf_path: PathBuf,

    /// JSON output path
    #[arg(short, long, default_value = "gri_results.json")]
    output: PathBuf,

    /// Also write a CSV export to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Omit the description column from the CSV export
    #[arg(long)]
    csv_compact: bool,

    /// Groq API key for the classifier fallback (or set GROQ_API_KEY)
    #[arg(long)]
    groq_key: Option<String>,

    /// LLM provider configuration (JSON)
    #[arg(long)]
    llm_config: Option<PathBuf>,

    /// Detection configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Section detection method: auto, pattern, similarity, classifier
    #[arg(short, long, default_value = "auto")]
    method: DetectionMethod,

    /// Print summary statistics only; don't write result files
    #[arg(short, long)]
    summary_only: bool,

    /// List the found codes grouped by standard
    #[arg(long)]
    list_found: bool,

    /// Show coverage per standard
    #[arg(long)]
    by_standard: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nExtraction failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if !args.pdf_path.is_file() {
        bail!(Error::SourceUnavailable(args.pdf_path.clone()));
    }

    let config = DetectionConfig::load(args.config.as_deref())?;
    let llm = LlmConfig::load(args.llm_config.as_deref())?.with_groq_key(args.groq_key.clone());

    println!("GRI Extraction Tool");
    println!("Processing: {}", args.pdf_path.display());

    let mut extractor = Extractor::new(GRI_CATALOG, config.clone()).with_method(args.method);
    if let Some(target) = llm.resolve_provider() {
        let client = ChatCompletionClient::new(target)?;
        let target = client.target();
        println!("Using {} LLM fallback ({})", target.provider, target.model);
        extractor = extractor.with_classifier(Box::new(client), config);
    }

    if !extractor.has_classifier() {
        if args.method == DetectionMethod::Classifier {
            bail!(Error::Config(
                "classifier method requires an API key (--groq-key, --llm-config or GROQ_API_KEY/OPENAI_API_KEY)"
                    .into()
            ));
        }
        info!("No LLM key configured; classifier fallback disabled");
    }

    let extraction = extractor.extract(&args.pdf_path)?;

    print_summary(&extraction);
    if args.by_standard {
        print_by_standard(&extraction);
    }
    if args.list_found {
        print_found_codes(&extraction);
    }

    if !args.summary_only {
        write_json(&extraction.records, &args.output)
            .with_context(|| format!("writing {}", args.output.display()))?;
        println!("\nResults saved to: {}", args.output.display());

        if let Some(csv_path) = &args.csv {
            let layout = if args.csv_compact {
                CsvLayout::Compact
            } else {
                CsvLayout::Full
            };
            write_csv(&extraction.records, csv_path, layout)
                .with_context(|| format!("writing {}", csv_path.display()))?;
            println!("CSV saved to: {}", csv_path.display());
        }
    }

    println!("\nExtraction completed successfully!");
    Ok(())
}

fn print_summary(extraction: &Extraction) {
    let summary = extraction.summary();
    println!("\nGRI Extraction Summary");
    println!("{}", "=".repeat(40));
    println!("Pages processed: {}", extraction.page_count);
    match &extraction.section {
        Some(hit) => println!("GRI section: page {} ({} strategy)", hit.page, hit.strategy),
        None => println!("GRI section: not found"),
    }
    println!("Processing time: {}", format_duration(extraction.elapsed));
    println!("Total GRI codes: {}", summary.total);
    println!("Found GRI codes: {}", summary.found);
    println!("Coverage rate: {:.1}%", summary.coverage);
    println!("Extraction quality: {}", summary.quality());
}

fn print_by_standard(extraction: &Extraction) {
    println!("\nCoverage by standard");
    println!("{}", "-".repeat(50));
    for row in standard_coverage(&extraction.records) {
        println!(
            "{:<55} {:>3}/{:<3} {:>5.1}%",
            row.standard, row.found, row.total, row.coverage
        );
    }
}

fn print_found_codes(extraction: &Extraction) {
    let grouped = found_by_standard(&extraction.records);
    if grouped.is_empty() {
        println!("\nNo GRI codes found");
        return;
    }

    let total: usize = grouped.values().map(Vec::len).sum();
    println!("\nFound GRI Codes ({} total)", total);
    println!("{}", "-".repeat(50));
    for (standard, codes) in &grouped {
        println!("\n{}", standard);
        println!("   {}", codes.join(", "));
    }
}
