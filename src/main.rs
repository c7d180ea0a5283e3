use botanical::core::catalog::{Catalog, Plant};
use botanical::core::config::{self, CliOverrides, ResolvedConfig};
use botanical::core::error::CatalogError;
use botanical::core::state::{App, Theme};
use botanical::core::view::{DifficultyFilter, SortKey, SortOrder};
use botanical::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

#[derive(Parser)]
#[command(name = "botanical", about = "Browse the Botanical Haven plant catalog")]
struct Args {
    /// Initial search text (matched against plant names)
    #[arg(long)]
    search: Option<String>,

    /// Difficulty filter
    #[arg(short, long, value_enum)]
    difficulty: Option<DifficultyFilter>,

    /// Sort key
    #[arg(short, long, value_enum)]
    sort: Option<SortKey>,

    /// Sort order
    #[arg(short, long, value_enum)]
    order: Option<SortOrder>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Print the filtered and sorted catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config file: {}", e);
            Default::default()
        }
    };
    let cli = CliOverrides {
        search: args.search,
        difficulty: args.difficulty,
        sort: args.sort,
        order: args.order,
        theme: args.theme,
    };
    let resolved = match config::resolve(&file_config, &cli) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("botanical: {}", e);
            std::process::exit(2);
        }
    };

    // Initialize file logger - writes to botanical.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("botanical.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "Botanical Haven starting up (theme: {}, sort: {} {})",
        resolved.theme,
        resolved.sort.label(),
        resolved.order.arrow()
    );

    let app = match build_app(&resolved) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Built-in catalog is invalid: {}", e);
            return Err(std::io::Error::other(e));
        }
    };
    if args.list {
        print_list(&app);
        return Ok(());
    }

    tui::run(app)
}

fn build_app(config: &ResolvedConfig) -> Result<App, CatalogError> {
    let catalog = Catalog::builtin()?;
    Ok(App::from_config(Arc::new(catalog), config))
}

fn print_list(app: &App) {
    let plants = app.visible_plants();
    let name_width = plants.iter().map(|p| p.name.width()).max().unwrap_or(0);
    for plant in plants {
        println!("{}", list_row(plant, name_width));
    }
}

fn list_row(plant: &Plant, name_width: usize) -> String {
    let pad = name_width.saturating_sub(plant.name.width());
    format!(
        "{:>2}  {}{}  {:<12}  {:.1}",
        plant.id.0,
        plant.name,
        " ".repeat(pad),
        plant.difficulty.label(),
        plant.rating
    )
}
