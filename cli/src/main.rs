//! repage CLI - reflow pagination tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::debug;

use repage::{
    Anchor, CleanupPreset, JsonFormat, LayoutBudget, LayoutMetrics, PageSelection, ReaderSession,
    Repage, TextOptions, TitleRule, VirtualPage,
};

#[derive(Parser)]
#[command(name = "repage")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Reflow extracted document text into screen-sized pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Paginate a document and print its pages
    Paginate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output pages as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Show offset ranges in page headers
        #[arg(long)]
        offsets: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Find the page holding an offset or snippet
    Locate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Character offset into the document text
        #[arg(long, conflicts_with = "snippet", required_unless_present = "snippet")]
        offset: Option<usize>,

        /// Text snippet to search for
        #[arg(long)]
        snippet: Option<String>,

        /// Print the located page
        #[arg(long)]
        show: bool,
    },

    /// Show where an offset lands before and after a budget change
    Reflow {
        #[command(flatten)]
        source: SourceArgs,

        /// Character offset into the document text
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Characters per page before the change
        #[arg(long, value_name = "CHARS")]
        from: usize,

        /// Characters per page after the change
        #[arg(long, value_name = "CHARS")]
        to: usize,
    },

    /// Show document information
    Info {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct SourceArgs {
    /// Input file (.json array of pages, or text with form-feed page breaks)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Text cleanup preset
    #[arg(long, value_enum)]
    cleanup: Option<CleanupLevel>,

    /// Keep blank-line paragraph breaks inside source pages
    #[arg(long)]
    paragraph_breaks: bool,
}

#[derive(Args)]
struct LayoutArgs {
    /// Characters per page
    #[arg(short, long, env = "REPAGE_CHARS_PER_PAGE", value_name = "CHARS")]
    chars_per_page: Option<usize>,

    /// Viewport width in pixels
    #[arg(long, requires = "height", conflicts_with = "chars_per_page")]
    width: Option<f32>,

    /// Viewport height in pixels
    #[arg(long, requires = "width")]
    height: Option<f32>,

    /// Font size in pixels
    #[arg(long, default_value = "16")]
    font_size: f32,

    /// Line height as a multiple of the font size
    #[arg(long, default_value = "1.6")]
    line_height: f32,
}

impl LayoutArgs {
    fn budget(&self) -> repage::Result<LayoutBudget> {
        let budget = match (self.chars_per_page, self.width, self.height) {
            (Some(chars), _, _) => LayoutBudget::new(chars),
            (None, Some(width), Some(height)) => {
                let metrics = LayoutMetrics::new(width, height)
                    .with_font_size(self.font_size)
                    .with_line_height(self.line_height);
                LayoutBudget::from_metrics(&metrics)
            }
            _ => Ok(LayoutBudget::default()),
        }?;
        debug!("using {} chars per page", budget.chars_per_page());
        Ok(budget)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (whitespace only)
    Minimal,
    /// Standard cleanup (default)
    Standard,
    /// Aggressive cleanup (also strips private-use characters)
    Aggressive,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
            CleanupLevel::Aggressive => CleanupPreset::Aggressive,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Paginate {
            source,
            layout,
            output,
            json,
            compact,
            offsets,
            pages,
        }) => cmd_paginate(
            &source,
            &layout,
            output.as_deref(),
            json.then_some(compact),
            offsets,
            pages.as_deref(),
        ),
        Some(Commands::Locate {
            source,
            layout,
            offset,
            snippet,
            show,
        }) => match offset.map(Anchor::Offset).or(snippet.map(Anchor::Snippet)) {
            Some(anchor) => cmd_locate(&source, &layout, &anchor, show),
            None => Err("An --offset or --snippet is required".into()),
        },
        Some(Commands::Reflow {
            source,
            offset,
            from,
            to,
        }) => cmd_reflow(&source, offset, from, to),
        Some(Commands::Info { source, layout }) => cmd_info(&source, &layout),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: repage <COMMAND> <FILE>".yellow());
            println!("       repage --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn open_session(source: &SourceArgs, budget: LayoutBudget) -> repage::Result<ReaderSession> {
    let mut builder = Repage::new().with_budget(budget);
    if let Some(level) = source.cleanup {
        builder = builder.with_cleanup(level.into());
    }
    if source.paragraph_breaks {
        builder = builder.with_paragraph_breaks();
    }
    builder.open(&source.input)
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

fn page_summary(page: &VirtualPage, page_count: usize) -> String {
    let mut summary = format!(
        "page {} / {} [{}, {}], {} chars",
        page.number(),
        page_count,
        page.start,
        page.end,
        page.char_count()
    );
    if let Some(label) = page.source_label() {
        summary.push_str(&format!(", source {}", label));
    }
    if page.split {
        summary.push_str(" (split)");
    }
    summary
}

fn cmd_paginate(
    source: &SourceArgs,
    layout: &LayoutArgs,
    output: Option<&Path>,
    json_compact: Option<bool>,
    offsets: bool,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(source, layout.budget()?)?;

    let rendered = match json_compact {
        Some(compact) => {
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            repage::render::to_json(session.pages(), format)?
        }
        None => {
            let page_selection = if let Some(p) = pages {
                PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?
            } else {
                PageSelection::All
            };
            let options = TextOptions::new()
                .with_offsets(offsets)
                .with_pages(page_selection);
            repage::render::to_text(session.pages(), &options)?
        }
    };

    write_output(output, &rendered)
}

fn cmd_locate(
    source: &SourceArgs,
    layout: &LayoutArgs,
    anchor: &Anchor,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(source, layout.budget()?)?;

    let Some(index) = session.resolve(anchor) else {
        println!("{}", "Not found".yellow());
        return Ok(());
    };

    let page = &session.pages().pages[index];
    println!(
        "{} {}",
        "Located".green(),
        page_summary(page, session.page_count())
    );
    if show {
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", page.plain_text());
    }

    Ok(())
}

fn cmd_reflow(
    source: &SourceArgs,
    offset: usize,
    from: usize,
    to: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(source, LayoutBudget::new(from)?)?;

    if session.open_anchor(&Anchor::Offset(offset)).is_none() {
        println!("{} offset {}", "Not found".yellow(), offset);
        return Ok(());
    }
    if let Some(page) = session.current_page() {
        println!(
            "{:>8} {}",
            "before".bold(),
            page_summary(page, session.page_count())
        );
    }

    let outcome = session.relayout(LayoutBudget::new(to)?)?;
    if let Some(page) = session.current_page() {
        println!(
            "{:>8} {}",
            "after".bold(),
            page_summary(page, session.page_count())
        );
    }
    if !outcome.anchored {
        println!("{}", "Position was clamped, not anchored".yellow());
    }

    Ok(())
}

fn cmd_info(source: &SourceArgs, layout: &LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let blocks = repage::read_blocks(&source.input)?;
    let session = open_session(source, layout.budget()?)?;
    let text = session.text();
    let paragraphs = text.paragraphs(&TitleRule::default());
    let stats = &session.pages().stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), source.input.display());
    println!("{}: {}", "Source pages".bold(), blocks.len());
    println!("{}: {}", "Kept blocks".bold(), text.block_count());
    println!("{}: {}", "Characters".bold(), text.len());
    println!("{}: {}", "Words".bold(), text.as_str().split_whitespace().count());
    println!("{}: {}", "Paragraphs".bold(), paragraphs.len());
    println!(
        "{}: {}",
        "Titles".bold(),
        paragraphs.iter().filter(|p| p.is_title()).count()
    );

    println!();
    println!("{}", "Layout".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!(
        "{}: {}",
        "Chars per page".bold(),
        session.budget().chars_per_page()
    );
    println!("{}: {}", "Pages".bold(), session.page_count());
    println!(
        "{}: {}",
        "Split paragraphs".bold(),
        stats.split_paragraph_count
    );
    println!("{}: {}", "Chunk pages".bold(), stats.chunk_page_count);
    println!("{}: {}", "Dropped pages".bold(), stats.dropped_page_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "repage".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Reflow pagination tool for document readers");
    println!();
    println!("License: MIT");
}
