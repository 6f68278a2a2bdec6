//! Guidebook viewer - Entry Point

use clap::Parser;
use guidebook::content::{ContentServices, MarkupRenderer};
use guidebook::model::{AppError, Diagnostics};
use guidebook::source::{Manifest, ManifestOverrides};
use guidebook::state::{AppState, GuidebookState, SplitState};
use guidebook::view::{ColorConfig, GuideStyles};
use std::path::PathBuf;
use tracing::info;

/// Guidebook viewer - browse a tree of cross-linked guide documents
#[derive(Parser, Debug)]
#[command(name = "guidebook")]
#[command(version)]
#[command(about = "TUI viewer for hierarchical, cross-linked guide documents")]
pub struct Args {
    /// Path to the guide manifest (TOML, or JSON with a .json extension)
    pub manifest: PathBuf,

    /// Entry to select on startup
    #[arg(short, long)]
    pub select: Option<String>,

    /// Entry to place above all other roots
    #[arg(long = "root")]
    pub force_root: Option<String>,

    /// Explicit top-level entries, comma separated
    #[arg(long, value_delimiter = ',')]
    pub roots: Option<Vec<String>>,

    /// Tree pane width in percent of the window
    #[arg(long)]
    pub tree_width: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ManifestOverrides {
        ManifestOverrides {
            roots: self.roots.clone(),
            force_root: self.force_root.clone(),
            select: self.select.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = guidebook::config::load_config_with_precedence(args.config.clone())?;
        let merged = guidebook::config::merge_config(config_file);
        let with_env = guidebook::config::apply_env_overrides(merged);
        guidebook::config::apply_cli_overrides(with_env, args.tree_width)
    };

    guidebook::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let guidebook_state = load_guidebook(&args, config.tree_width_percent)?;

    let mut app_state = AppState::new(guidebook_state);
    app_state.help_visible = config.show_help_on_start;

    let styles = GuideStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    guidebook::view::run_app(app_state, styles)?;

    Ok(())
}

/// Load the manifest named on the command line and build the initial guidebook.
fn load_guidebook(args: &Args, tree_width_percent: u16) -> Result<GuidebookState, AppError> {
    let manifest = Manifest::load(&args.manifest)?.with_overrides(&args.overrides())?;
    let (request, catalog, content_root) = manifest.into_parts();

    let services = ContentServices::new(catalog, content_root, MarkupRenderer::new());
    let mut guidebook_state = GuidebookState::new(
        services,
        SplitState::new(tree_width_percent),
        Diagnostics::default(),
    );
    guidebook_state.update_guides(request);

    info!(
        entries = guidebook_state.store().len(),
        nodes = guidebook_state.tree().len(),
        "Guidebook ready"
    );
    Ok(guidebook_state)
}
