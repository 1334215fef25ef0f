//! Showcase CLI
//!
//! Local entry point for building and browsing the project catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showcase::{
    error::{AppError, Result},
    models::{Catalog, Config, FilterCriteria, Project},
    pipeline::{self, extract_facets},
    storage::{CatalogData, LocalStorage},
    urlstate,
};
use url::Url;

/// Showcase - Creative-Work Catalog
#[derive(Parser, Debug)]
#[command(
    name = "showcase",
    version,
    about = "Validates, normalizes, and filters a catalog of project records"
)]
struct Cli {
    /// Path to storage directory containing config and data files
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate configuration and source files
    Validate,

    /// Build the catalog snapshot from raw source groups
    Build,

    /// List catalog entries matching the given criteria
    List {
        /// Selected category
        #[arg(long)]
        category: Option<String>,

        /// Selected year
        #[arg(long)]
        year: Option<String>,

        /// Selected tag (repeatable; a project must carry every one)
        #[arg(long)]
        tag: Vec<String>,

        /// Free-text search query
        #[arg(short, long)]
        query: Option<String>,

        /// Take criteria from a shared address instead of flags
        #[arg(long, conflicts_with_all = ["category", "year", "tag", "query"])]
        address: Option<Url>,
    },

    /// Show a randomized related set for a project
    Related {
        /// Project id (as listed by `list` with a {id} template)
        id: String,

        /// Draw from projects sharing an author instead of tags/categories
        #[arg(long)]
        by_author: bool,
    },

    /// List keynotes, most recent year first
    Keynotes,

    /// Show snapshot stats and facet summary
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the exported snapshot, or fail telling the user to build first.
fn load_snapshot(storage: &LocalStorage, config: &Config) -> Result<Catalog> {
    match storage.load_catalog(&config.paths.output)? {
        Some(data) => Ok(Catalog::from_projects(data.projects)),
        None => {
            log::error!(
                "No snapshot found at {}. Run 'build' first.",
                storage.path(&config.paths.output).display()
            );
            Err(AppError::config("Catalog snapshot not found"))
        }
    }
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("✓ Config OK");

            let groups = storage.read_source_groups(&config.paths.projects_dir)?;
            let outcome = pipeline::load_catalog(&groups);
            log::info!(
                "✓ Source groups: {}/{} accepted, {} projects",
                outcome.accepted_groups(),
                outcome.group_total,
                outcome.catalog.len()
            );
            for skipped in &outcome.skipped {
                log::warn!("  rejected {}: {}", skipped.name, skipped.reason);
            }

            let keynotes = storage.read_keynotes(&config.paths.keynotes_dir)?;
            log::info!("✓ Keynotes: {} loaded", keynotes.len());

            log::info!("All validations passed!");
        }

        Command::Build => {
            let groups = storage.read_source_groups(&config.paths.projects_dir)?;
            log::info!("Loaded {} source groups", groups.len());

            let outcome = pipeline::load_catalog(&groups);
            if outcome.has_skips() {
                log::warn!(
                    "Skipped {} of {} groups",
                    outcome.skipped.len(),
                    outcome.group_total
                );
            }

            let data = CatalogData::new(outcome.catalog.into_projects());
            storage.write_catalog(&config.paths.output, &data)?;
            log::info!(
                "Snapshot: {} projects written to {}",
                data.count,
                storage.path(&config.paths.output).display()
            );
        }

        Command::List {
            category,
            year,
            tag,
            query,
            address,
        } => {
            let catalog = load_snapshot(&storage, &config)?;

            let criteria = match address {
                Some(address) => urlstate::read_criteria(&address),
                None => FilterCriteria {
                    category,
                    year,
                    tags: tag,
                    query: query.unwrap_or_default(),
                },
            };

            let visible = pipeline::apply(&catalog, &criteria);
            if visible.is_empty() {
                log::info!("No projects found. Try adjusting the filters.");
            }
            for project in &visible {
                println!("{}", project.format(&config.display.list_template));
            }

            let mut share = Url::parse(&config.display.site_url)?;
            urlstate::write_criteria(&mut share, &criteria);
            log::info!("{} of {} projects shown", visible.len(), catalog.len());
            log::info!("Share: {share}");
        }

        Command::Related { id, by_author } => {
            let catalog = load_snapshot(&storage, &config)?;
            let current = catalog
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::config(format!("No project with id '{id}'")))?;

            let pool: Vec<&Project> = if by_author {
                catalog.more_by_authors(&current)
            } else {
                catalog.related(&current)
            };

            let drawn = pipeline::sample_n(&pool, config.display.related_count);
            if drawn.is_empty() {
                log::info!("Nothing related to show for '{}'", current.title);
            }
            for project in drawn {
                println!("{}", project.format(&config.display.list_template));
            }
        }

        Command::Keynotes => {
            let mut keynotes = storage.read_keynotes(&config.paths.keynotes_dir)?;
            keynotes.sort_by(|a, b| b.year.cmp(&a.year));
            for keynote in keynotes {
                println!("{}  {} ({})", keynote.year, keynote.title, keynote.department);
            }
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.load_catalog(&config.paths.output)? {
                Some(data) => {
                    log::info!("Snapshot: {} projects", data.count);
                    log::info!("Last updated: {}", data.updated_at);

                    let catalog = Catalog::from_projects(data.projects);
                    let facets = extract_facets(&catalog);
                    log::info!("Categories: {}", facets.categories.join(", "));
                    log::info!(
                        "Years: {}",
                        facets
                            .years
                            .iter()
                            .map(|y| y.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    log::info!("Tags: {}", facets.tags.len());
                }
                None => log::info!("No snapshot found yet."),
            }
        }
    }

    Ok(())
}
