//! unboil CLI - boilerplate removal for segmented page text

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use unboil::{read_document, JsonFormat, Locale, PipelineOptions, TextDocument, Unboil};

#[derive(Parser)]
#[command(name = "unboil")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Remove navigation, legal notices and footers from segmented page text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a document and write it back as JSON
    Filter {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Filter a document and write only its content text
    Text {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Show the per-block classification of a document
    Inspect {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Show version information
    Version,
}

/// Pipeline flags shared by all filtering commands.
#[derive(Args, Clone)]
struct PipelineArgs {
    /// Locale of the terminating phrase list
    #[arg(long, default_value = "fr", env = "UNBOIL_LOCALE")]
    locale: String,

    /// Additional terminating phrase (repeatable)
    #[arg(long = "phrase", value_name = "PHRASE")]
    phrases: Vec<String>,

    /// Only blocks with fewer words are checked for terminating phrases
    #[arg(long, default_value = "20")]
    max_words: usize,

    /// Content words required before an end-of-text marker takes effect
    #[arg(long, default_value = "60")]
    end_min_words: usize,

    /// Do not label the block matching the document title
    #[arg(long)]
    no_title_match: bool,

    /// Re-run the pipeline until the document stops changing
    #[arg(long)]
    until_stable: bool,
}

impl PipelineArgs {
    fn builder(&self) -> unboil::Result<Unboil> {
        let locale: Locale = self.locale.parse()?;
        let options = PipelineOptions::new()
            .with_locale(locale)
            .with_end_of_text_min_words(self.end_min_words)
            .with_title_matching(!self.no_title_match);

        let mut builder = Unboil::new()
            .with_options(options)
            .with_phrases(self.phrases.iter().cloned())
            .with_max_words(self.max_words);
        if self.until_stable {
            builder = builder.until_stable();
        }
        Ok(builder)
    }

    fn run(&self, input: &Path) -> Result<TextDocument, Box<dyn std::error::Error>> {
        let mut doc = read_document(input)?;
        let report = self.builder()?.process(&mut doc)?;
        log::info!(
            "{}: {} pass(es), converged={}",
            input.display(),
            report.passes,
            report.converged
        );
        for change in &report.changes {
            log::debug!("{} changed in {} pass(es)", change.filter, change.passes_changed);
        }
        Ok(doc)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Filter {
            input,
            output,
            compact,
            pipeline,
        } => cmd_filter(&input, output.as_deref(), compact, &pipeline),
        Commands::Text {
            input,
            output,
            pipeline,
        } => cmd_text(&input, output.as_deref(), &pipeline),
        Commands::Inspect { input, pipeline } => cmd_inspect(&input, &pipeline),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_filter(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    pipeline: &PipelineArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = pipeline.run(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = unboil::document_to_json(&doc, format)?;

    write_output(output, &json)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pipeline: &PipelineArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = pipeline.run(input)?;
    write_output(output, &doc.content_text())
}

fn cmd_inspect(input: &Path, pipeline: &PipelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let doc = pipeline.run(input)?;

    println!("{}", "Document Classification".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!();

    for (idx, block) in doc.blocks.iter().enumerate() {
        let flag = if block.is_content {
            "[+]".green().bold()
        } else {
            "[-]".red()
        };
        let labels = format!(
            "[{}]",
            block
                .labels
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(",")
        );
        let text = block.text.trim();
        let text = if block.is_content {
            text.normal()
        } else {
            text.dimmed()
        };
        println!(
            "{:>4} {} {:>4}w {} {}",
            idx,
            flag,
            block.word_count,
            labels.as_str().yellow(),
            text
        );
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Blocks".bold(), doc.len());
    println!("{}: {}", "Content blocks".bold(), doc.content_blocks().count());
    println!("{}: {}", "Content words".bold(), doc.content_word_count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unboil".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Boilerplate removal for segmented page text");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unboil".dimmed());
    println!("License: MIT");
}
