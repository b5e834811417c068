//! # CLI Layer
//!
//! This module is **one possible UI client** for invtrack, not the application
//! itself. It is the only place that knows about stdout, stderr, exit codes
//! and argument parsing.
//!
//! ## One-shot commands
//!
//! Every subcommand except `session` follows the same shape:
//!
//! 1. Build the context (settings loaded once, paths resolved for the scope)
//! 2. Load the inventory file
//! 3. Dispatch to the `InvApi` method
//! 4. Save, but only if the command changed the inventory
//! 5. Print the `CmdResult`
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext`
//! - `handle_*()`: per-command handlers that call the API and print output

use super::print::{print_messages, render_item_detail, render_item_list, render_json};
use super::session;
use super::setup::{
    print_grouped_help, print_help_for_command, Cli, Commands, CoreCommands, DataCommands,
    ItemCommands, MiscCommands,
};
use clap::{CommandFactory, FromArgMatches};
use invtrack::api::{ConfigAction, InvApi, ItemUpdate, MessageLevel, NewItem};
use invtrack::codec::Delimiter;
use invtrack::config::InvConfig;
use invtrack::error::Result;
use invtrack::init::initialize;
use invtrack::model::Scope;
use invtrack::store::fs::FileStore;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: InvApi<FileStore>,
    scope: Scope,
}

pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    init_tracing(cli.verbose);

    if cli.help {
        match matches.subcommand_name() {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.as_deref());
    }

    let mut ctx = init_context(&cli)?;
    debug!(scope = ?ctx.scope, "context ready");

    if let Some(Commands::Misc(MiscCommands::Session)) = &cli.command {
        return handle_session(&mut ctx);
    }

    load_quietly(&mut ctx)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                name,
                description,
                amount,
                image,
            } => handle_add(&mut ctx, name, description, amount, image),
            CoreCommands::List { search, json } => handle_list(&ctx, search, json),
            CoreCommands::Show { name } => handle_show(&ctx, &name),
        },
        Some(Commands::Item(cmd)) => match cmd {
            ItemCommands::Rename { name, new_name } => {
                handle_update(&mut ctx, &name, ItemUpdate::Rename(new_name))
            }
            ItemCommands::Describe { name, description } => {
                handle_update(&mut ctx, &name, ItemUpdate::Description(description))
            }
            ItemCommands::Image { name, path } => {
                handle_update(&mut ctx, &name, ItemUpdate::ImagePath(path))
            }
            ItemCommands::Incr { name } => handle_incr(&mut ctx, &name),
            ItemCommands::Decr { name } => handle_decr(&mut ctx, &name),
            ItemCommands::Delete { name } => handle_delete(&mut ctx, &name),
        },
        Some(Commands::Data(cmd)) => match cmd {
            DataCommands::Export { name } => handle_export(&mut ctx, name),
            DataCommands::Import { path, delimiter } => handle_import(&mut ctx, &path, delimiter),
            DataCommands::Init => handle_init(&mut ctx),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Session | MiscCommands::Help { .. } => Ok(()),
        },
        None => handle_list(&ctx, None, false),
    }?;

    save_if_dirty(&mut ctx)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "invtrack=debug"
    } else {
        "invtrack=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let ctx = initialize(&cwd, cli.global)?;

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
    })
}

/// Loads the inventory file, surfacing only skipped-record warnings.
fn load_quietly(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.load()?;
    let warnings: Vec<_> = result
        .messages
        .into_iter()
        .filter(|m| m.level == MessageLevel::Warning)
        .collect();
    print_messages(&warnings);
    Ok(())
}

fn save_if_dirty(ctx: &mut AppContext) -> Result<()> {
    if !ctx.api.is_dirty() {
        return Ok(());
    }
    let result = ctx.api.save()?;
    debug!(paths = ?result.paths, "inventory saved");
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    description: String,
    amount: u32,
    image: String,
) -> Result<()> {
    let item = NewItem::new(name)
        .description(description)
        .amount(amount)
        .image_path(image);
    let result = ctx.api.add_item(item)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, json: bool) -> Result<()> {
    let result = ctx.api.list_items(search.as_deref())?;
    if json {
        println!("{}", render_json(&result.listed_items)?);
        return Ok(());
    }
    print!("{}", render_item_list(&result.listed_items));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: &str) -> Result<()> {
    let result = ctx.api.view_item(name)?;
    for di in &result.listed_items {
        print!("{}", render_item_detail(di));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, name: &str, update: ItemUpdate) -> Result<()> {
    let result = ctx.api.update_item(name, update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_incr(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.increment(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_decr(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.decrement(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_item(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, name: Option<String>) -> Result<()> {
    let result = ctx.api.export(name.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: &str, delimiter: Option<String>) -> Result<()> {
    let delimiter = delimiter
        .map(|d| d.parse::<Delimiter>())
        .transpose()?;
    let result = ctx.api.import(Path::new(path), delimiter)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            for k in InvConfig::keys() {
                println!("{} = {}", k, config.get(k).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_session(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut ctx.api, stdin.lock(), stdout.lock())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
