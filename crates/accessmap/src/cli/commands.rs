//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Initialize the API, config and selection state
//! 3. **Dispatch**: Route each command to its handler
//! 4. **Error Handling**: Turn library errors into readable messages

use super::render::{self, RenderScale};
use super::setup::{AddPlaceArgs, Cli, Commands, RateArgs, ScaleArg, YesNo};
use accessmapapp::api::{AccessmapApi, ScaleAction};
use accessmapapp::error::AccessmapError;
use accessmapapp::init::initialize;
use accessmapapp::model::{Accessibility, PlaceCategory};
use accessmapapp::state::AppState;
use accessmapapp::store::FsBackend;
use accessmapapp::wizard::{FieldValue, FieldValues};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

type Api = AccessmapApi<FsBackend, RenderScale>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scale = RenderScale::default();
    let mut ctx = initialize(cli.data.as_ref().map(PathBuf::from), scale.clone())
        .context("failed to initialize accessmap")?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), locality = %ctx.locality, "context ready");
    let state = ctx.api.initial_state(&ctx.locality);

    let command = cli.command.unwrap_or(Commands::List {
        locality: None,
        categories: Vec::new(),
        accessibility: Vec::new(),
    });

    let api = &mut ctx.api;
    match command {
        Commands::List {
            locality,
            categories,
            accessibility,
        } => handle_list(api, state, locality, &categories, &accessibility, &scale),
        Commands::View { place_id } => handle_view(api, &place_id, &scale),
        Commands::Favorites => handle_favorites(api, &state, &scale),
        Commands::Fav { place_id } => handle_fav(api, &place_id),
        Commands::Localities => handle_localities(api, &state),
        Commands::Categories { search, all } => handle_categories(api, search.as_deref(), all),
        Commands::Scale { action } => handle_scale(api, action),
        Commands::AddPlace(args) => handle_add_place(api, args),
        Commands::Rate(args) => handle_rate(api, args),
    }
}

fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(verbose, env.as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `RUST_LOG` (or `warn` when unset or invalid), with `-v` raising the
/// default level to debug. Per-module directives from `RUST_LOG` still apply.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Library errors with a user-facing rendering of their own.
fn describe(err: AccessmapError) -> anyhow::Error {
    match err {
        AccessmapError::PlaceNotFound(id) => anyhow!("Место не найдено: {}", id),
        AccessmapError::Validation { step, errors } => {
            let details: Vec<String> = errors
                .iter()
                .map(|(field, message)| format!("  {}: {}", field, message))
                .collect();
            anyhow!("Шаг «{}» заполнен неверно:\n{}", step, details.join("\n"))
        }
        other => anyhow!("{}", other),
    }
}

fn handle_list(
    api: &Api,
    mut state: AppState,
    locality: Option<String>,
    categories: &[PlaceCategory],
    accessibility: &[Accessibility],
    scale: &RenderScale,
) -> Result<()> {
    if let Some(id) = locality {
        if !api.catalog().has_locality(&id) {
            bail!("Неизвестный населенный пункт: {}", id);
        }
        state = state.with_locality(id);
    }
    for category in categories {
        if !state.categories().contains(category) {
            state = state.toggle_category(*category);
        }
    }
    for tag in accessibility {
        if !state.accessibility().contains(tag) {
            state = state.toggle_accessibility(*tag);
        }
    }

    let result = api.list_places(&state).map_err(describe)?;
    let locality_name = api
        .catalog()
        .locality(state.locality())
        .map(|l| l.name.as_str())
        .unwrap_or(state.locality());
    print!(
        "{}",
        render::render_list_header(locality_name, state.active_filter_count())
    );
    print!(
        "{}",
        render::render_place_list(&result.listed_places, scale.line_width())
    );
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &Api, place_id: &str, scale: &RenderScale) -> Result<()> {
    let result = api.view_place(place_id).map_err(describe)?;
    if let Some(detail) = &result.detail {
        print!("{}", render::render_detail(detail, scale.line_width()));
    }
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(api: &Api, state: &AppState, scale: &RenderScale) -> Result<()> {
    let result = api.list_favorites(state).map_err(describe)?;
    print!(
        "{}",
        render::render_place_list(&result.listed_places, scale.line_width())
    );
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_fav(api: &mut Api, place_id: &str) -> Result<()> {
    let result = api.toggle_favorite(place_id).map_err(describe)?;
    api.flush_favorites().context("failed to save favorites")?;
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_localities(api: &Api, state: &AppState) -> Result<()> {
    let result = api.localities().map_err(describe)?;
    print!(
        "{}",
        render::render_localities(&result.localities, state.locality())
    );
    Ok(())
}

fn handle_categories(api: &Api, search: Option<&str>, all: bool) -> Result<()> {
    let result = api.categories(search, all).map_err(describe)?;
    print!("{}", render::render_categories(&result.categories));
    render::print_messages(&result.messages);
    Ok(())
}

fn handle_scale(api: &mut Api, action: ScaleArg) -> Result<()> {
    let action = match action {
        ScaleArg::Show => ScaleAction::Show,
        ScaleArg::Up => ScaleAction::Increase,
        ScaleArg::Down => ScaleAction::Decrease,
        ScaleArg::Reset => ScaleAction::Reset,
    };
    let result = api.text_scale(action).map_err(describe)?;
    render::print_messages(&result.messages);
    if let Some(status) = &result.text_scale {
        print!("{}", render::render_scale(status));
    }
    Ok(())
}

fn handle_add_place(api: &Api, args: AddPlaceArgs) -> Result<()> {
    let values = add_place_values(args);
    let result = api.add_place(&values).map_err(describe)?;
    render::print_messages(&result.messages);
    if let Some(receipt) = &result.receipt {
        print!("{}", render::render_receipt(receipt));
    }
    Ok(())
}

fn handle_rate(api: &Api, args: RateArgs) -> Result<()> {
    let place_id = args.place_id.clone();
    let values = rate_values(args);
    let result = api.rate_place(&place_id, &values).map_err(describe)?;
    render::print_messages(&result.messages);
    if let Some(receipt) = &result.receipt {
        print!("{}", render::render_receipt(receipt));
    }
    Ok(())
}

fn insert_text(values: &mut FieldValues, field: &str, value: Option<String>) {
    if let Some(value) = value {
        values.insert(field.to_string(), FieldValue::from(value));
    }
}

fn insert_list(values: &mut FieldValues, field: &str, items: Vec<String>) {
    if !items.is_empty() {
        values.insert(field.to_string(), FieldValue::from(items));
    }
}

fn add_place_values(args: AddPlaceArgs) -> FieldValues {
    let mut values = FieldValues::new();
    insert_text(&mut values, "locality_id", args.locality);
    insert_text(&mut values, "address", args.address);
    insert_text(&mut values, "name", args.name);
    insert_text(&mut values, "description", args.description);
    insert_text(&mut values, "category", args.category);
    insert_text(&mut values, "phone", args.phone);
    insert_text(&mut values, "website", args.website);
    insert_text(&mut values, "work_hours", args.hours);
    insert_list(&mut values, "accessibility", args.accessibility);
    insert_text(
        &mut values,
        "additional_accessibility_info",
        args.access_info,
    );
    values
}

fn rate_values(args: RateArgs) -> FieldValues {
    let mut values = FieldValues::new();
    if let Some(stars) = args.stars {
        values.insert("rating".to_string(), FieldValue::from(stars));
    }
    if let Some(recommend) = args.recommend {
        values.insert(
            "recommend".to_string(),
            FieldValue::from(recommend == YesNo::Yes),
        );
    }
    insert_list(&mut values, "confirmed_accessibility", args.confirmed);
    insert_text(&mut values, "accessibility_notes", args.notes);
    insert_text(&mut values, "comment", args.comment);
    values
}
