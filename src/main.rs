use clap::Parser;
use log::{debug, warn};

use recipe_catalog::{
    initial_selections, load_from_with_config, render, select, CatalogConfig, Scale,
    SessionState, SortKey,
};

/// Browse a static recipe catalog
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL or local directory of the catalog (defaults to the configured source)
    source: Option<String>,

    /// Case-insensitive search over titles, tags and ingredient names
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only show recipes carrying this tag (repeatable, all must match)
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Sort order: name-asc, name-desc, time-asc or time-desc
    #[arg(long)]
    sort: Option<String>,

    /// Scale multiplier: 0.5, 1, 2, 3 or 4
    #[arg(long)]
    scale: Option<Scale>,

    /// List every tag in the catalog and exit
    #[arg(long)]
    list_tags: bool,

    /// Show the full recipe with this id
    #[arg(long)]
    show: Option<String>,

    /// Pick an option for a modular recipe component, as component=option (repeatable)
    #[arg(long = "select", value_parser = parse_selection)]
    selections: Vec<(String, String)>,
}

fn parse_selection(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(key, option)| (key.to_string(), option.to_string()))
        .ok_or_else(|| format!("expected component=option, got '{}'", value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = CatalogConfig::load()?;
    debug!("{:#?}", config);

    let location = args
        .source
        .clone()
        .or_else(|| config.source.clone())
        .ok_or("Please provide a catalog URL or directory as an argument")?;

    let catalog = load_from_with_config(&location, &config).await?;

    if args.list_tags {
        for tag in catalog.all_tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let sort = match args.sort.as_deref() {
        Some(key) => match key.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("{}; keeping catalog order", e);
                None
            }
        },
        None => config.initial_sort(),
    };
    let scale = match args.scale {
        Some(scale) => scale,
        None => config.initial_scale()?,
    };

    let state = SessionState {
        search: args.search.clone(),
        active_tags: args.tags.iter().cloned().collect(),
        ..SessionState::new(sort, scale)
    };

    if let Some(id) = &args.show {
        let recipe = catalog.get(id)?;
        let selections = args
            .selections
            .iter()
            .fold(initial_selections(recipe), |selections, (key, option)| {
                select(recipe, &selections, key, option)
            });
        println!("{}", render::detail(recipe, state.scale, &selections));
        return Ok(());
    }

    let visible = state.visible(&catalog);
    if visible.is_empty() {
        println!("No recipes match the current filters.");
    }
    for recipe in visible {
        println!("{}", render::card(recipe));
    }

    Ok(())
}
