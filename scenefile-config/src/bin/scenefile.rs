use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scenefile_config::{ConfigSource, SceneFileConfig};
use scenefile_core::{Discipline, FilenameDescriptor};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scenefile", about = "Scene file naming and versioning helper")]
struct Cli {
    /// Config file to use instead of the environment lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the fields inferred from an existing filename
    Parse {
        filename: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a filename from explicit fields
    Render {
        #[arg(long, default_value = "untitled")]
        description: String,
        #[arg(long, default_value = "MDL")]
        discipline: Discipline,
        #[arg(long, default_value_t = 1)]
        version: i64,
        #[arg(long)]
        initials: Option<String>,
        #[arg(long)]
        optional: Option<String>,
        #[arg(long, default_value = "ma")]
        extension: String,
    },
    /// Print the filename of the next version of an existing file
    Next {
        filename: String,
        /// Jump straight to this version
        #[arg(long)]
        version: Option<i64>,
        #[arg(long, default_value_t = 1)]
        step: i64,
        #[arg(long)]
        initials: Option<String>,
    },
    /// Show the job/scene/shot candidates in a path
    Segments { path: String },
}

fn load_config(path: Option<&PathBuf>) -> Result<SceneFileConfig> {
    let (config, source) = match path {
        Some(path) => (
            SceneFileConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => SceneFileConfig::load_from_env().context("failed to load configuration")?,
    };

    match &source {
        ConfigSource::Default => debug!("using default configuration"),
        ConfigSource::EnvPath(path) => {
            info!(path = %path.display(), "config loaded from env path")
        }
        ConfigSource::EnvInline => info!("config loaded from inline environment json"),
        ConfigSource::File(path) => info!(path = %path.display(), "config loaded from file"),
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let template = &config.naming.template;

    match cli.command {
        Command::Parse { filename, json } => {
            let descriptor = FilenameDescriptor::from_existing(&filename);
            if json {
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
            } else {
                println!("description: {}", descriptor.description);
                println!("discipline:  {}", descriptor.discipline);
                println!("version:     {}", descriptor.version);
                println!("initials:    {}", descriptor.initials);
                println!("extension:   {}", descriptor.extension);
            }
        }
        Command::Render {
            description,
            discipline,
            version,
            initials,
            optional,
            extension,
        } => {
            let initials = initials
                .or_else(|| config.naming.initials.clone())
                .unwrap_or_default();
            let mut descriptor = FilenameDescriptor::new(description, discipline, version, initials)
                .with_extension(extension);
            descriptor.optional = optional;
            println!("{}", descriptor.try_render_with(template)?);
        }
        Command::Next {
            filename,
            version,
            step,
            initials,
        } => {
            let mut descriptor = FilenameDescriptor::from_existing(&filename);
            descriptor.next(version, step);
            if let Some(initials) = initials.or_else(|| config.naming.initials.clone()) {
                descriptor.initials = initials;
            }
            println!("{}", descriptor.try_render_with(template)?);
        }
        Command::Segments { path } => {
            let ids = config.hierarchy.parse_path(&path);
            println!("job:   {}", ids.job.as_deref().unwrap_or("-"));
            println!("scene: {}", ids.scene.as_deref().unwrap_or("-"));
            println!("shot:  {}", ids.shot.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}
