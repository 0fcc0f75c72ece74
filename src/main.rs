//! CLI entry point for `attachview`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

use attachview::classify::classify;
use attachview::compose::{compose, Slot};
use attachview::config::{self, Config};
use attachview::error::PreviewError;
use attachview::gallery::Gallery;
use attachview::input::load_attachments;
use attachview::render::PreviewUnit;
use attachview::resolve::{GlyphIconRenderer, IconRenderer};

#[derive(Parser)]
#[command(
    name = "attachview",
    version,
    about = "Classify attachments and preview them, with a shared image gallery"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $ATTACHVIEW_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the preview strategy of every attachment
    Classify {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Compose previews for the whole list
    Compose {
        path: PathBuf,
        /// Render images without the metadata wrapper
        #[arg(long)]
        simple: bool,
        /// Spacing after each slot
        #[arg(long, value_name = "N")]
        margin_bottom: Option<u32>,
        /// Text appended to every metadata block
        #[arg(long, value_name = "TEXT")]
        additional: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the gallery opened from one image
    Gallery {
        path: PathBuf,
        /// Index of the image in the input list
        #[arg(short, long)]
        index: usize,
        #[arg(long)]
        json: bool,
    },
    /// Browse the list in the terminal viewer
    View {
        path: PathBuf,
        #[arg(long)]
        simple: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let to_stderr = !matches!(cli.command, Commands::View { .. });
    setup_logging(log_level, &config, to_stderr);

    match cli.command {
        Commands::Classify { path, json } => cmd_classify(&path, json),
        Commands::Compose {
            path,
            simple,
            margin_bottom,
            additional,
            json,
        } => cmd_compose(&path, &config, simple, margin_bottom, additional, json),
        Commands::Gallery { path, index, json } => cmd_gallery(&path, index, json),
        Commands::View { path, simple } => cmd_view(&path, &config, simple),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Manpage => cmd_manpage(),
    }
}

/// Set up tracing with optional stderr output and file logging.
///
/// The viewer owns the terminal, so it only logs to the file.
fn setup_logging(level: &str, config: &Config, to_stderr: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer =
        to_stderr.then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let log_path = config::log_file_path(config);
    let log_dir = config::cache_dir(config);
    let file_layer = std::fs::create_dir_all(&log_dir).is_ok().then(|| {
        let file_name = log_path.file_name().unwrap_or_default();
        let file_appender = tracing_appender::rolling::never(&log_dir, file_name);
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn cmd_classify(path: &Path, json: bool) -> anyhow::Result<()> {
    let attachments = load_attachments(path)?;

    if json {
        let items: Vec<serde_json::Value> = attachments
            .iter()
            .enumerate()
            .map(|(i, att)| {
                serde_json::json!({
                    "index": i,
                    "name": att.display_name(),
                    "strategy": classify(att),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!();
    println!("  {:<4} {:<40} {}", "#", "Name", "Strategy");
    println!("  {}", "-".repeat(60));
    for (i, att) in attachments.iter().enumerate() {
        let strategy = classify(att).map_or("-", |s| s.label());
        let name: String = att.display_name().chars().take(39).collect();
        println!("  {:<4} {:<40} {}", i + 1, name, strategy);
    }
    println!();
    Ok(())
}

fn cmd_compose(
    path: &Path,
    config: &Config,
    simple: bool,
    margin_bottom: Option<u32>,
    additional: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let attachments = load_attachments(path)?;

    let mut options = config.preview_options();
    options.simple = options.simple || simple;
    if let Some(margin) = margin_bottom {
        options.margin_bottom = margin;
    }
    if additional.is_some() {
        options.additional_item = additional;
    }
    let resolver = config.file_resolver();
    let slots = compose(&attachments, &options, &*resolver);

    if json {
        let items: Vec<serde_json::Value> = slots.iter().map(slot_json).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!();
    for slot in &slots {
        println!("  {}", describe_slot(slot));
    }
    println!();
    Ok(())
}

fn cmd_gallery(path: &Path, index: usize, json: bool) -> anyhow::Result<()> {
    let attachments = load_attachments(path)?;
    if index >= attachments.len() {
        return Err(PreviewError::IndexOutOfRange {
            index,
            len: attachments.len(),
        }
        .into());
    }
    let gallery = Gallery::open(&attachments, index).ok_or(PreviewError::NotAnImage(index))?;

    if json {
        let output = serde_json::json!({
            "current": gallery.current_index(),
            "images": gallery.members().iter().map(|m| serde_json::json!({
                "index": m.source_index,
                "name": m.attachment.display_name(),
                "url": m.attachment.url,
            })).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!(
        "  Image {} of {}",
        gallery.current_index() + 1,
        gallery.len()
    );
    for (i, member) in gallery.members().iter().enumerate() {
        let marker = if i == gallery.current_index() { ">" } else { " " };
        println!(
            "  {marker} {:<4} #{:<5} {}",
            i + 1,
            member.source_index + 1,
            member.attachment.display_name()
        );
    }
    println!();
    Ok(())
}

fn cmd_view(path: &Path, config: &Config, simple: bool) -> anyhow::Result<()> {
    let attachments = load_attachments(path)?;
    let app = attachview::tui::app::App::new(attachments, config, simple);
    attachview::tui::run_viewer(app)
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "attachview", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// One human-readable line per slot.
fn describe_slot(slot: &Slot<'_>) -> String {
    let icons = GlyphIconRenderer;
    let position = format!("{:<4}", slot.key.index + 1);
    let body = match &slot.preview {
        None => "(no preview)".to_string(),
        Some(PreviewUnit::Video(player)) => format!("► {} [{}]", player.src, player.mime_hint),
        Some(PreviewUnit::Image(image)) => {
            let badge = format!(
                "[image {}/{}]",
                image.gallery.current_index() + 1,
                image.gallery.len()
            );
            match &image.metadata {
                None => badge,
                Some(meta) => format!("{badge} {}", describe_meta(meta)),
            }
        }
        Some(PreviewUnit::File { icon, metadata }) => {
            format!("{} {}", icons.render_icon(*icon), describe_meta(metadata))
        }
    };
    format!("{position} {body}")
}

fn describe_meta(meta: &attachview::render::MetadataBlock) -> String {
    let mut out = format!("{}  ↓ {}", meta.name, meta.download);
    if let Some(size) = &meta.size_label {
        out.push_str("  ");
        out.push_str(size);
    }
    if let Some(extra) = &meta.additional_item {
        out.push_str("  ");
        out.push_str(extra);
    }
    out
}

fn slot_json(slot: &Slot<'_>) -> serde_json::Value {
    let preview = slot.preview.as_ref().map(|unit| match unit {
        PreviewUnit::Image(image) => serde_json::json!({
            "kind": unit.kind(),
            "metadata": image.metadata,
            "gallery": {
                "current": image.gallery.current_index(),
                "images": image.gallery.members().iter().map(|m| m.source_index).collect::<Vec<_>>(),
            },
        }),
        PreviewUnit::Video(player) => serde_json::json!({
            "kind": unit.kind(),
            "player": player,
        }),
        PreviewUnit::File { icon, metadata } => serde_json::json!({
            "kind": unit.kind(),
            "icon": icon,
            "metadata": metadata,
        }),
    });

    serde_json::json!({
        "key": slot.key.to_string(),
        "index": slot.key.index,
        "margin_bottom": slot.margin_bottom,
        "preview": preview,
    })
}
