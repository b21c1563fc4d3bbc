//! Context setup and per-command handlers.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, loads config, starts logging
//! - `handle_*()`: Call the API and hand the result to `print`

use super::print::{
    print_config, print_directory, print_full_records, print_locations, print_messages,
    print_records, print_status,
};
use super::setup::{Cli, Commands, CounterCommand};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{ConfigAction, CounterAction, RosterApi, RosterPaths};
use roster::clock::SystemClock;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::logging::init_logging;
use roster::model::{Gender, StudentDraft, StudentPatch};
use roster::store::fs::FileBackend;
use std::path::PathBuf;

struct AppContext {
    api: RosterApi<FileBackend, SystemClock>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Status) | None => handle_status(&ctx),
        Some(Commands::Add {
            name,
            email,
            phone,
            gender,
        }) => handle_add(&mut ctx, name, email, phone, gender),
        Some(Commands::Edit {
            index,
            name,
            email,
            phone,
            gender,
        }) => handle_edit(
            &mut ctx,
            index,
            StudentPatch {
                name,
                email,
                phone,
                gender,
            },
        ),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Directory { limit }) => handle_directory(&ctx, limit),
        Some(Commands::Counter { action }) => handle_counter(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Paths) => handle_paths(&ctx),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            RosterError::Config("Could not determine data dir; pass --data-dir".to_string())
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let paths = RosterPaths::new(&data_dir);
    let config = RosterConfig::load(&data_dir)?;

    if let Err(err) = init_logging(&config.log_level, &paths.log_dir) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let backend = FileBackend::new(&data_dir);
    let api = RosterApi::open(backend, SystemClock, config, paths);
    Ok(AppContext { api })
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status();
    if let Some(status) = &result.status {
        print_status(status);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    gender: Gender,
) -> Result<()> {
    let draft = StudentDraft::new(name, email, phone, gender);
    let result = ctx.api.add_student(&draft)?;
    print_messages(&result.messages);
    print_records(&result.listed_records);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, patch: StudentPatch) -> Result<()> {
    let result = ctx.api.edit_student(&index, patch)?;
    print_messages(&result.messages);
    print_full_records(&result.listed_records);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_students(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_students(&term),
        None => ctx.api.list_students(),
    };
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_students(&indexes)?;
    print_full_records(&result.listed_records);
    Ok(())
}

fn handle_directory(ctx: &AppContext, limit: Option<usize>) -> Result<()> {
    let result = ctx.api.directory(limit)?;
    print_directory(&result.directory);
    print_messages(&result.messages);
    Ok(())
}

fn handle_counter(ctx: &mut AppContext, action: Option<CounterCommand>) -> Result<()> {
    let action = match action.unwrap_or(CounterCommand::Show) {
        CounterCommand::Show => CounterAction::Show,
        CounterCommand::Increment => CounterAction::Increment,
        CounterCommand::Decrement => CounterAction::Decrement,
        CounterCommand::Reset => CounterAction::Reset,
    };
    let result = ctx.api.counter(action)?;
    if let Some(value) = result.counter {
        println!("{}", value);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    if showing_all && let Some(config) = &result.config {
        print_config(config);
    }
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    print_locations(&ctx.api.storage_locations());
    Ok(())
}
