mod catalog;
mod cli;
mod config;
mod error;
mod model;
mod output;
mod search;
mod view;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use catalog::{Catalogs, COURSE_CATEGORIES, COURSE_FORMATS, RESOURCE_CATEGORIES};
use cli::{Cli, Commands, FacetCatalog};
use config::Config;
use error::AppError;
use view::{CareerPage, CoursePage, FacetPage, ProfilePage, ResourcePage};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    debug!(
        skill_preview = config.skill_preview,
        tag_preview = config.tag_preview,
        "configuration loaded"
    );

    let catalogs = Catalogs::load()?;
    run(cli, &config, &catalogs)
}

fn run(cli: Cli, config: &Config, catalogs: &Catalogs) -> anyhow::Result<()> {
    match cli.command {
        Commands::Courses {
            query,
            category,
            format,
        } => {
            let state = search::course_state(
                query.as_deref(),
                category.as_deref(),
                format.as_deref(),
            )
            .map_err(AppError::from)?;
            let page = CoursePage::new(search::list_courses(&catalogs.courses, state));
            info!(outcome = ?page.outcome, summary = %page.summary, "courses listed");
            output::print_page(cli.json, &page)
        }
        Commands::Resources { query, category } => {
            let state = search::resource_state(query.as_deref(), category.as_deref())
                .map_err(AppError::from)?;
            let page = ResourcePage::new(
                search::list_resources(&catalogs.resources, state),
                config,
            );
            info!(
                outcome = ?page.outcome,
                featured = page.featured.len(),
                summary = %page.summary,
                "resources listed"
            );
            output::print_page(cli.json, &page)
        }
        Commands::Careers { assessment } => {
            debug!(?assessment, "career assessment submitted");
            let careers = search::list_careers(&catalogs.careers);
            let page = CareerPage::new(assessment, careers, config);
            output::print_page(cli.json, &page)
        }
        Commands::Profile { tab } => {
            let page = ProfilePage::new(&catalogs.dashboard, tab);
            output::print_page(cli.json, &page)
        }
        Commands::Facets { catalog } => {
            let page = match catalog {
                FacetCatalog::Courses => FacetPage {
                    catalog: "courses",
                    facets: vec![COURSE_CATEGORIES.into(), COURSE_FORMATS.into()],
                },
                FacetCatalog::Resources => FacetPage {
                    catalog: "resources",
                    facets: vec![RESOURCE_CATEGORIES.into()],
                },
            };
            output::print_page(cli.json, &page)
        }
    }
}
