use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use lab_app::{AppResult, LabConfig, RunReport, load_scenario, render_text, run_scenario};
use lab_catalog::{Catalog, MemCatalog};
use lab_core::ExperimentId;

#[derive(Parser)]
#[command(name = "lab-cli")]
#[command(about = "Virtual physics lab - build and run experiments from the command line", long_about = None)]
struct Cli {
    /// Catalog file (YAML or JSON); defaults to the built-in demo catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List experiments in the catalog
    Experiments,
    /// List the tools of one experiment
    Tools {
        /// Experiment ID
        experiment_id: u32,
    },
    /// Replay a scenario file and run its simulation
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Workspace and run configuration (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the built-in demo catalog to a file
    DemoCatalog {
        /// Output path; `.json` writes JSON, anything else YAML
        output: PathBuf,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Experiments => cmd_experiments(&open_catalog(cli.catalog.as_deref())?),
        Commands::Tools { experiment_id } => cmd_tools(
            &open_catalog(cli.catalog.as_deref())?,
            ExperimentId(experiment_id),
        ),
        Commands::Run {
            scenario_path,
            config,
            json,
        } => cmd_run(
            &open_catalog(cli.catalog.as_deref())?,
            &scenario_path,
            config.as_deref(),
            json,
        ),
        Commands::DemoCatalog { output } => cmd_demo_catalog(&output),
    }
}

fn open_catalog(path: Option<&Path>) -> AppResult<MemCatalog> {
    let catalog = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            MemCatalog::from_def(lab_catalog::load_path(path)?)?
        }
        None => MemCatalog::demo()?,
    };
    Ok(catalog)
}

fn cmd_experiments(catalog: &MemCatalog) -> AppResult<()> {
    let experiments = catalog.experiments()?;
    if experiments.is_empty() {
        println!("No experiments in catalog");
        return Ok(());
    }

    println!("Experiments:");
    for exp in experiments {
        let tools = catalog.tools_for(exp.id)?.len();
        println!(
            "  {} - {} [{}] ({}, {} tools)",
            exp.id, exp.title, exp.category, exp.kind, tools
        );
    }
    Ok(())
}

fn cmd_tools(catalog: &MemCatalog, experiment_id: ExperimentId) -> AppResult<()> {
    let experiment = catalog.experiment(experiment_id)?;
    println!("Tools for {} - {}:", experiment.id, experiment.title);
    for tool in catalog.tools_for(experiment_id)? {
        println!("  {} - {} ({})", tool.id, tool.name, tool.kind);
    }

    if !experiment.required_tool_types.is_empty() {
        let required: Vec<&str> = experiment
            .required_tool_types
            .iter()
            .map(|k| k.as_str())
            .collect();
        println!("Required: {}", required.join(", "));
    }
    Ok(())
}

fn cmd_run(
    catalog: &MemCatalog,
    scenario_path: &Path,
    config_path: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let scenario = load_scenario(scenario_path)?;
    let config = match config_path {
        Some(path) => LabConfig::load(path)?,
        None => LabConfig::default(),
    };

    let report = run_scenario(catalog, &scenario, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Experiment {}: {} components, {} connections",
        report.experiment_id, report.components, report.connections
    );
    for notice in &report.notices {
        let marker = if notice.destructive { "✗" } else { "·" };
        println!("  {} {}: {}", marker, notice.title, notice.message);
    }

    match &report.run {
        RunReport::Completed { record } => {
            println!("✓ Simulation completed: {}", record.run_id);
            print!("{}", render_text(Some(&record.result)));
        }
        RunReport::Rejected { title, message } => {
            println!("✗ {}: {}", title, message);
        }
    }
    Ok(())
}

fn cmd_demo_catalog(output: &Path) -> AppResult<()> {
    let def = lab_catalog::demo::demo_catalog()?;
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("json") => lab_catalog::save_json(output, &def)?,
        _ => lab_catalog::save_yaml(output, &def)?,
    }
    println!("✓ Demo catalog written to {}", output.display());
    Ok(())
}
