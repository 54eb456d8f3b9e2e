mod commands;
mod config;
mod debounce;
mod error;
mod fetch;
mod filters;
mod format;
mod pagination;
mod query;
mod types;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use filters::{FilterState, Order, SortBy};

#[derive(Parser)]
#[command(name = "gitdash")]
#[command(about = "Search GitHub repositories without leaving your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search once and print a page of results (the dashboard is the
    /// default when no subcommand is given)
    #[command(short_flag = 's')]
    Search {
        /// Free-text search term (defaults to "react")
        query: Option<String>,
        /// Primary language filter ("any" disables it)
        #[arg(long, default_value = "any")]
        language: String,
        /// License identifier filter ("any" disables it)
        #[arg(long, default_value = "any")]
        license: String,
        /// Minimum star count
        #[arg(long)]
        stars_min: Option<u64>,
        /// Maximum star count
        #[arg(long)]
        stars_max: Option<u64>,
        /// Sort field
        #[arg(long, value_enum, default_value = "stars")]
        sort: SortBy,
        /// Sort direction
        #[arg(long, value_enum, default_value = "desc")]
        order: Order,
        /// Result page, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Results per page
        #[arg(long, default_value_t = 10)]
        per_page: u32,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => commands::run_dashboard(),
        Some(Commands::Search {
            query,
            language,
            license,
            stars_min,
            stars_max,
            sort,
            order,
            page,
            per_page,
        }) => {
            let mut filters = FilterState::default();
            if let Some(query) = query {
                filters.set_query(query);
            }
            filters.set_language(language);
            filters.set_license(license);
            if let Some(min) = stars_min {
                filters.set_stars_min(min.to_string());
            }
            if let Some(max) = stars_max {
                filters.set_stars_max(max.to_string());
            }
            filters.set_sort_by(sort);
            filters.set_order(order);
            filters.per_page = per_page.clamp(1, 100);
            filters.set_page(page);
            commands::search_repos(&filters);
        }
        Some(Commands::Completions { shell }) => commands::generate_completions(shell),
    }
}
