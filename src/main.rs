use clap::{Parser, Subcommand};
use folio_one::{compose, config, output, render};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-one")]
#[command(about = "Single-page portfolio site generator")]
#[command(long_about = "\
Single-page portfolio site generator

A config.toml is the data source: owner identity, skills, projects and
colors become a one-page site with hero, about, skills, projects and
contact sections under a fixed navigation bar.

Content structure:

  content/
  ├── config.toml              # Site config (optional — stock defaults apply)
  ├── about.md                 # About section body (optional, markdown)
  └── assets/                  # Static assets → copied to output root
      ├── profile.jpg          # Hero/about portrait referenced by config
      └── cv/My_CV.pdf         # CV linked from the hero

The page's client-side behavior (scroll reveals, the portrait crossfade,
skill counters, the mailto contact form) ships as a small vanilla script
whose timing constants are generated — and tested — in this binary.

Run 'folio-one gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (plan manifest)
    #[arg(long, default_value = ".folio-one-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose the page plan from config and content
    Compose,
    /// Produce the final HTML site from a composed plan
    Render,
    /// Run the full pipeline: compose → render
    Build,
    /// Validate config and content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compose => {
            let plan = compose::compose_to_manifest(&cli.source, &cli.temp_dir)?;
            output::print_compose_output(&plan);
        }
        Command::Render => {
            let manifest_path = cli.temp_dir.join("plan.json");
            let plan = compose::read_manifest(&cli.temp_dir)?;
            render::render(&manifest_path, &cli.output, &cli.source)?;
            output::print_render_output(&plan);
        }
        Command::Build => {
            println!("==> Stage 1: Composing {}", cli.source.display());
            let plan = compose::compose_to_manifest(&cli.source, &cli.temp_dir)?;
            output::print_compose_output(&plan);

            println!("==> Stage 2: Rendering → {}", cli.output.display());
            let manifest_path = cli.temp_dir.join("plan.json");
            render::render(&manifest_path, &cli.output, &cli.source)?;
            output::print_render_output(&plan);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let plan = compose::compose(&cli.source)?;
            output::print_compose_output(&plan);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
