//! mediahub - movie, book and weather lookup CLI.

/// Application configuration (TOML).
mod config;
/// Output line rendering.
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mediahub_api::ClientError;
use mediahub_api::books::{BookClient, BookQuery, DEFAULT_LIMIT, LocalBookApi};
use mediahub_api::movies::{LocalMovieApi, MediaType, MovieClient, MovieSummary};
use mediahub_api::weather::{LocalWeatherApi, WeatherClient, weather_for};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use crate::render::{Output, book_lines, detail_lines, movie_lines, weather_lines};

/// User-Agent sent to every upstream.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the OMDb API key.
const OMDB_API_KEY_ENV: &str = "OMDB_API_KEY";

/// JSON printed for a list command with nothing to show.
const EMPTY_LIST_JSON: &str = "[]";

/// JSON printed for a single-record command with nothing to show.
const EMPTY_RECORD_JSON: &str = "null";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Query the OMDb movie API.
    Movies(MoviesCommand),
    /// Query the Open Library search API.
    Books(BooksCommand),
    /// Show current weather for a place.
    Weather(WeatherArgs),
}

/// Arguments for the `movies` subcommand.
#[derive(clap::Args)]
struct MoviesCommand {
    /// Movies subcommand to run.
    #[command(subcommand)]
    command: MoviesSubcommands,
}

/// Available movies subcommands.
#[derive(Subcommand)]
enum MoviesSubcommands {
    /// Search titles by name.
    Search(MoviesSearchArgs),
    /// Show the full record for one IMDb id.
    Details(MoviesDetailsArgs),
    /// Search titles of one type; prints nothing on failure.
    SearchType(MoviesSearchTypeArgs),
}

/// Arguments for the `movies search` subcommand.
#[derive(clap::Args)]
struct MoviesSearchArgs {
    /// Search query (e.g. "batman").
    #[arg(long, required = true)]
    query: String,
    /// Result page (1-100).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `movies details` subcommand.
#[derive(clap::Args)]
struct MoviesDetailsArgs {
    /// IMDb id (e.g. "tt0111161").
    #[arg(long, required = true)]
    id: String,
}

/// Arguments for the `movies search-type` subcommand.
#[derive(clap::Args)]
struct MoviesSearchTypeArgs {
    /// Search query.
    #[arg(long, required = true)]
    query: String,
    /// Title type: movie, series or episode.
    #[arg(long = "type", default_value = "movie")]
    media_type: MediaType,
    /// Result page (1-100).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `books` subcommand.
#[derive(clap::Args)]
struct BooksCommand {
    /// Books subcommand to run.
    #[command(subcommand)]
    command: BooksSubcommands,
}

/// Available books subcommands.
#[derive(Subcommand)]
enum BooksSubcommands {
    /// Search books by text, title or author.
    Search(BooksSearchArgs),
}

/// Arguments for the `books search` subcommand.
#[derive(clap::Args)]
struct BooksSearchArgs {
    /// What to search by.
    #[command(flatten)]
    target: BookTarget,
    /// Maximum number of results (default: config `books.limit`, then 20).
    #[arg(long)]
    limit: Option<usize>,
}

/// Exactly one of the book search fields.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct BookTarget {
    /// Free-text query.
    #[arg(long)]
    query: Option<String>,
    /// Title query.
    #[arg(long)]
    title: Option<String>,
    /// Author query.
    #[arg(long)]
    author: Option<String>,
}

impl BookTarget {
    /// Converts the selected field into a `BookQuery`.
    fn into_query(self) -> BookQuery {
        match (self.query, self.title, self.author) {
            (Some(q), _, _) => BookQuery::text(q),
            (None, Some(t), _) => BookQuery::title(t),
            (None, None, a) => BookQuery::author(a.unwrap_or_default()),
        }
    }
}

/// Arguments for the `weather` subcommand.
#[derive(clap::Args)]
struct WeatherArgs {
    /// Place name (e.g. "Москва").
    #[arg(long, required = true)]
    location: String,
}

/// Loads the config file from `dir` or the default location.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file is invalid.
fn load_config(dir: Option<&Path>) -> Result<AppConfig> {
    let path = resolve_config_path(dir)?;
    AppConfig::load(&path)
}

/// Builds a `MovieClient` from `OMDB_API_KEY` or the config file.
///
/// # Errors
///
/// Returns an error if no API key is configured or the client fails to build.
#[instrument(skip_all)]
fn build_movie_client(config: &AppConfig) -> Result<MovieClient> {
    let api_key = config
        .omdb_api_key(std::env::var(OMDB_API_KEY_ENV).ok())
        .with_context(|| {
            format!(
                "{OMDB_API_KEY_ENV} environment variable or omdb.api_key in config is required"
            )
        })?;

    MovieClient::builder()
        .api_key(api_key)
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build OMDb client")
}

/// Builds a `BookClient`.
///
/// # Errors
///
/// Returns an error if the client fails to build.
fn build_book_client() -> Result<BookClient> {
    BookClient::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to build Open Library client")
}

/// Builds a `WeatherClient` using the configured language.
///
/// # Errors
///
/// Returns an error if the client fails to build.
fn build_weather_client(config: &AppConfig) -> Result<WeatherClient> {
    let mut builder = WeatherClient::builder().user_agent(USER_AGENT);
    if let Some(language) = &config.weather.language {
        builder = builder.language(language);
    }
    builder.build().context("failed to build Open-Meteo client")
}

/// Picks the book result limit: CLI flag, then config, then the default.
///
/// # Errors
///
/// Returns an error if the chosen limit is zero.
fn resolve_book_limit(flag: Option<usize>, config: &AppConfig) -> Result<usize> {
    let limit = flag.or(config.books.limit).unwrap_or(DEFAULT_LIMIT);
    anyhow::ensure!(limit > 0, "--limit must be at least 1");
    Ok(limit)
}

/// Log destination: stderr in JSON mode so stdout stays parseable.
fn log_writer(json: bool) -> BoxMakeWriter {
    if json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    }
}

/// Output for an upstream "not found": the message, or an empty JSON value.
fn not_found(message: String, json: bool, empty: &str) -> Output {
    if json {
        tracing::info!("{message}");
        Output::Json(String::from(empty))
    } else {
        Output::Lines(vec![message])
    }
}

/// Renders search hits as JSON or a table.
fn movies_output(movies: &[MovieSummary], json: bool) -> Result<Output> {
    if json {
        Output::json(movies)
    } else {
        Ok(Output::Lines(movie_lines(movies)))
    }
}

/// Runs `movies search`.
///
/// An upstream "not found" is reported as a message, not a failure.
///
/// # Errors
///
/// Returns an error on validation or transport failure.
#[instrument(skip_all)]
async fn run_movies_search(
    api: &impl LocalMovieApi,
    args: &MoviesSearchArgs,
    json: bool,
) -> Result<Output> {
    match api.search_movies(&args.query, args.page).await {
        Ok(movies) => movies_output(&movies, json),
        Err(ClientError::NotFound(message)) => Ok(not_found(message, json, EMPTY_LIST_JSON)),
        Err(err) => Err(err).context("OMDb search request failed"),
    }
}

/// Runs `movies details`.
///
/// # Errors
///
/// Returns an error on validation or transport failure.
#[instrument(skip_all)]
async fn run_movies_details(
    api: &impl LocalMovieApi,
    args: &MoviesDetailsArgs,
    json: bool,
) -> Result<Output> {
    match api.movie_details(&args.id).await {
        Ok(detail) if json => Output::json(&detail),
        Ok(detail) => Ok(Output::Lines(detail_lines(&detail))),
        Err(ClientError::NotFound(message)) => Ok(not_found(message, json, EMPTY_RECORD_JSON)),
        Err(err) => Err(err).context("OMDb details request failed"),
    }
}

/// Runs `movies search-type`. Failures print an empty result.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip_all)]
async fn run_movies_search_type(
    api: &impl LocalMovieApi,
    args: &MoviesSearchTypeArgs,
    json: bool,
) -> Result<Output> {
    let movies = api
        .search_by_type(&args.query, args.media_type, args.page)
        .await;
    movies_output(&movies, json)
}

/// Runs `books search`. Failures print an empty result.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[instrument(skip_all)]
async fn run_books_search(
    api: &impl LocalBookApi,
    query: &BookQuery,
    limit: usize,
    json: bool,
) -> Result<Output> {
    let books = api.search(query, limit).await;
    if json {
        Output::json(&books)
    } else {
        Ok(Output::Lines(book_lines(&books)))
    }
}

/// Runs `weather` through [`weather_for`].
///
/// # Errors
///
/// Returns an error if the place is blank or either request fails.
#[instrument(skip_all)]
async fn run_weather(
    api: &(impl LocalWeatherApi + Sync),
    args: &WeatherArgs,
    json: bool,
) -> Result<Output> {
    match weather_for(api, &args.location).await {
        Ok(summary) if json => Output::json(&summary),
        Ok(summary) => Ok(Output::Lines(weather_lines(&summary))),
        Err(ClientError::NotFound(message)) => Ok(not_found(message, json, EMPTY_RECORD_JSON)),
        Err(err) => Err(err).context("weather request failed"),
    }
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(log_writer(json))
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(log_writer(json));

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let config = load_config(cli.dir.as_deref())?;

    let output = match cli.command {
        Commands::Movies(cmd) => {
            let client = build_movie_client(&config)?;
            match cmd.command {
                MoviesSubcommands::Search(args) => run_movies_search(&client, &args, json).await,
                MoviesSubcommands::Details(args) => run_movies_details(&client, &args, json).await,
                MoviesSubcommands::SearchType(args) => {
                    run_movies_search_type(&client, &args, json).await
                }
            }
        }
        Commands::Books(cmd) => match cmd.command {
            BooksSubcommands::Search(args) => {
                let limit = resolve_book_limit(args.limit, &config)?;
                let client = build_book_client()?;
                run_books_search(&client, &args.target.into_query(), limit, json).await
            }
        },
        Commands::Weather(args) => {
            let client = build_weather_client(&config)?;
            run_weather(&client, &args, json).await
        }
    }?;

    output.write_to(&mut std::io::stdout().lock())
}
