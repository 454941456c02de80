use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mdview::{Config, MarkdownDocument, Renderer, files};

#[derive(Parser)]
#[command(name = "mdview")]
#[command(about = "Preview Markdown documents as a styled view tree")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file and print the view tree
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Outline)]
        format: Format,

        /// Theme config (defaults to config.toml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the HTML converted from a Markdown file
    Html {
        /// Input Markdown file
        input: PathBuf,
    },
    /// Copy a Markdown document to another file
    Export {
        /// Input Markdown file
        input: PathBuf,

        /// Destination file
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Outline,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(message) = run(cli.command) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Render {
            input,
            format,
            config,
            output,
        } => {
            let config = match config {
                Some(path) => Config::load(&path).map_err(|e| e.to_string())?,
                None => Config::load_or_default(Path::new("config.toml")),
            };
            let document = open(&input)?;
            let tree = Renderer::new(config).render_markdown(document.content());

            let rendered = match format {
                Format::Outline => mdview::to_outline(&tree),
                Format::Json => serde_json::to_string_pretty(&tree).map_err(|e| e.to_string())?,
            };

            match output {
                Some(path) => {
                    files::save(&path, &rendered).map_err(|e| e.to_string())?;
                    println!("Created {}", path.display());
                }
                None => println!("{}", rendered.trim_end()),
            }
        }
        Command::Html { input } => {
            let document = open(&input)?;
            print!("{}", mdview::markdown_to_html(document.content()));
        }
        Command::Export { input, output } => {
            let document = open(&input)?;
            files::export(&output, document.content()).map_err(|e| e.to_string())?;
            println!("Exported {}", output.display());
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<MarkdownDocument, String> {
    if !files::is_markdown_path(path) {
        tracing::warn!("{} does not look like a Markdown file", path.display());
    }
    let content = files::load(path).map_err(|e| e.to_string())?;
    let mut document = MarkdownDocument::with_content(content);
    document.set_path(path);
    tracing::debug!("Opened {}", document.title());
    Ok(document)
}
