use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use promockup::export::{build_manifest, ExportMode};
use promockup::host::{DirDownloader, PlanSnapshotter};
use promockup::layout::{plan_all, router_for};
use promockup::{MockupConfig, ProductModel, Studio};

#[derive(Parser, Debug)]
#[command(name = "promockup")]
#[command(about = "Derive, inspect and export product mockup pages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Product model JSON file (default content when omitted)
    #[arg(short, long, global = true)]
    model: Option<PathBuf>,

    /// Features shown per features page
    #[arg(long, global = true, default_value_t = 2)]
    features_per_page: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every view index and its section
    Views,

    /// Print the export manifest
    Manifest {
        /// Single-surface manifest for this view instead of the full one
        #[arg(long)]
        view: Option<usize>,
    },

    /// Print the layout plan of every surface as JSON
    Plan,

    /// Export every surface's plan into a directory
    Export {
        #[arg(short, long)]
        out: PathBuf,

        /// Delay before and between snapshots
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },

    /// Generate a model from product details and photos
    #[cfg(feature = "assistant")]
    Generate {
        #[arg(long)]
        name: String,

        #[arg(long)]
        details: String,

        /// Reference photos; the first becomes the main image
        #[arg(long = "image", required = true)]
        images: Vec<PathBuf>,

        /// Write the model here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn load_model(path: Option<&Path>) -> Result<ProductModel> {
    match path {
        Some(p) => {
            let json = std::fs::read_to_string(p)
                .with_context(|| format!("reading {}", p.display()))?;
            ProductModel::from_json(&json).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(ProductModel::default()),
    }
}

#[cfg(feature = "assistant")]
fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => promockup::model::DEFAULT_MIME,
    }
}

#[cfg(feature = "assistant")]
async fn generate(
    name: String,
    details: String,
    images: Vec<PathBuf>,
    out: Option<PathBuf>,
    config: MockupConfig,
) -> Result<()> {
    use promockup::assistant::{AssistantConfig, AssistantRequest, GeminiService};
    use promockup::model::ImageRef;

    let mut refs = Vec::with_capacity(images.len());
    for path in &images {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        refs.push(ImageRef::from_bytes(mime_for(path), &bytes));
    }
    let service = GeminiService::new(AssistantConfig::default())?;
    let mut studio = Studio::new(config)?;
    studio
        .run_assistant(&service, &AssistantRequest::new(name, details, refs))
        .await?;

    let json = studio.model().to_json_pretty()?;
    match out {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = MockupConfig {
        features_per_page: cli.features_per_page,
        ..Default::default()
    };
    let model = load_model(cli.model.as_deref())?;

    match cli.command {
        Commands::Views => {
            let router = router_for(&model, &config);
            for (i, section) in router.sections().enumerate() {
                println!("{:>3}  {}", i, section);
            }
        }
        Commands::Manifest { view } => {
            config.validate()?;
            let mode = match view {
                Some(v) => ExportMode::Single(router_for(&model, &config).clamp(v)),
                None => ExportMode::All,
            };
            let ts = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_millis() as u64;
            let entries = build_manifest(&model, mode, &config, ts);
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Plan => {
            config.validate()?;
            println!("{}", serde_json::to_string_pretty(&plan_all(&model, &config))?);
        }
        Commands::Export { out, delay_ms } => {
            config.export.initial_delay_ms = delay_ms;
            config.export.step_delay_ms = delay_ms;
            config.export.extension = "json".to_string();
            std::fs::create_dir_all(&out).with_context(|| format!("creating {}", out.display()))?;

            let studio = Studio::with_model(model, config)?;
            let snapshotter = PlanSnapshotter::new(studio.model(), studio.config());
            let report = studio.export_all(&snapshotter, &DirDownloader::new(&out)).await;
            for name in &report.saved {
                println!("saved {}", name);
            }
            for (name, reason) in &report.failed {
                eprintln!("failed {}: {}", name, reason);
            }
            if !report.is_complete() {
                std::process::exit(1);
            }
        }
        #[cfg(feature = "assistant")]
        Commands::Generate {
            name,
            details,
            images,
            out,
        } => generate(name, details, images, out, config).await?,
    }
    Ok(())
}
