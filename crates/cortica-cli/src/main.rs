//! Cortica CLI — volume extraction, mesh validation, template management.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cortica")]
#[command(version, about = "Cortica — surface/volume mesh conditioning pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a normalized mesh from a scalar volume.
    Extract {
        /// Path to the volume (JSON).
        volume: String,

        /// Output mesh path (JSON).
        #[arg(short, long)]
        out: String,

        /// Level: an integer label to isolate, or a float isovalue.
        /// Omit for mask-like volumes.
        #[arg(short, long)]
        level: Option<String>,

        /// Volumetric smoothing kernel width.
        #[arg(short, long, default_value_t = 3)]
        smooth: usize,

        /// Invert normal orientation.
        #[arg(long)]
        invert_normals: bool,
    },

    /// Validate a mesh file.
    Validate {
        /// Path to mesh file (JSON).
        path: String,
    },

    /// Manage the template repository.
    Template {
        /// Template directory.
        #[arg(short, long, default_value = "templates")]
        dir: String,

        #[command(subcommand)]
        action: TemplateAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List stored templates.
    List,

    /// Add a mesh as a named template.
    Add {
        /// Template name.
        name: String,
        /// Path to mesh file (JSON).
        mesh: String,
        /// Left/right hemisphere split index.
        #[arg(long)]
        lr_index: Option<usize>,
    },

    /// Remove a template by name.
    Remove {
        /// Template name.
        name: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            volume,
            out,
            level,
            smooth,
            invert_normals,
        } => commands::extract(&volume, &out, level.as_deref(), smooth, invert_normals),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Template { dir, action } => match action {
            TemplateAction::List => commands::template_list(&dir),
            TemplateAction::Add {
                name,
                mesh,
                lr_index,
            } => commands::template_add(&dir, &name, &mesh, lr_index),
            TemplateAction::Remove { name } => commands::template_remove(&dir, &name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
