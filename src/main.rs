use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use graph_cluster_filter::config::{Config, InitialSelection};
use graph_cluster_filter::data::{load_snapshot, AuxiliarySource, EmbeddedAttributes, InterestsFile};
use graph_cluster_filter::interaction::{HtmlFileSink, InteractionController};
use graph_cluster_filter::{storage, FilterEngine};

#[derive(Parser, Debug)]
#[clap(
    name = "graph-cluster-filter",
    about = "Filter a participant graph snapshot by cluster and report what stays visible"
)]
struct Cli {
    /// Path to the graph snapshot JSON
    #[clap(long)]
    snapshot: PathBuf,

    /// Optional interests JSON keyed by node key
    #[clap(long)]
    interests: Option<PathBuf>,

    /// Start with only these clusters enabled (repeatable)
    #[clap(long = "enable", value_name = "CLUSTER")]
    enable: Vec<String>,

    /// Start with every cluster disabled
    #[clap(long, conflicts_with = "enable")]
    none: bool,

    /// Clusters to toggle after loading (repeatable, applied in order)
    #[clap(long = "toggle", value_name = "CLUSTER")]
    toggle: Vec<String>,

    /// Tags to toggle after loading (repeatable)
    #[clap(long = "toggle-tag", value_name = "TAG")]
    toggle_tag: Vec<String>,

    /// Enable every cluster before applying toggles
    #[clap(long)]
    select_all: bool,

    /// Disable every cluster before applying toggles
    #[clap(long, conflicts_with = "select_all")]
    clear: bool,

    /// Node key to hover after filtering
    #[clap(long)]
    hover: Option<String>,

    /// Node key to click after filtering
    #[clap(long)]
    click: Option<String>,

    /// Directory for clicked profile pages
    #[clap(long, default_value = "profiles")]
    profile_dir: PathBuf,

    /// Write a JSON summary of the resulting view
    #[clap(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let initial_selection = if args.none {
        InitialSelection::Empty
    } else if !args.enable.is_empty() {
        InitialSelection::Only(args.enable.clone())
    } else {
        InitialSelection::All
    };
    let config = Config::new(initial_selection, args.profile_dir.clone(), Config::default().palette);

    // 1. Load snapshot
    let snapshot = load_snapshot(&args.snapshot, &config.palette)?;
    let filter = config.initial_filter(&snapshot.catalog)?;
    let mut engine = FilterEngine::from_snapshot(snapshot, filter);

    // 2. Apply filter changes
    if args.select_all {
        engine.select_all();
    }
    if args.clear {
        engine.clear_all();
    }
    for cluster in &args.toggle {
        if let Err(err) = engine.toggle(cluster) {
            log::warn!("Ignoring toggle: {}", err);
        }
    }
    for tag in &args.toggle_tag {
        if let Err(err) = engine.toggle_tag(tag) {
            log::warn!("Ignoring tag toggle: {}", err);
        }
    }

    // 3. Next frame: recompute visibility
    engine.on_frame();

    // 4. Pointer interactions
    let mut controller = InteractionController::new();
    if let Some(key) = &args.hover {
        match controller.hover_enter(engine.graph(), key) {
            Ok(true) => log::info!(
                "Hovering {} with {} visible neighbors",
                key,
                controller.hover_state().neighbors.len()
            ),
            Ok(false) => log::info!("Node {} is hidden, hover ignored", key),
            Err(err) => log::warn!("Ignoring hover: {}", err),
        }
    }

    if let Some(key) = &args.click {
        let source: Box<dyn AuxiliarySource> = match &args.interests {
            Some(path) => Box::new(InterestsFile::load(path)),
            None => Box::new(EmbeddedAttributes),
        };
        let mut sink = HtmlFileSink::new(&config.profile_dir)?;
        match controller.click(engine.graph(), source.as_ref(), &mut sink, key) {
            Ok(true) => {}
            Ok(false) => log::info!("No profile shown for {}", key),
            Err(err) => log::warn!("Ignoring click: {}", err),
        }
    }

    // 5. Report
    let header = engine.panel_header();
    log::info!("Clusters enabled: {} / {}", header.enabled, header.total);
    for row in engine.cluster_rows() {
        log::info!(
            "[{}] {} ({}): {}",
            if row.enabled { "x" } else { " " },
            row.label,
            row.id,
            row.caption
        );
    }

    if let Some(path) = &args.output {
        storage::save_view_summary(&engine, path)?;
    }

    Ok(())
}
