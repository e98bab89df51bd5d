//! PromptMaster CLI binary.
//!
//! Subcommands: `serve` (run the API), `categories`, `templates`, `history`, `delete`,
//! `optimize` (one-shot calls against a running API) and `client` (interactive tabs).

mod log_format;
mod logging;

use clap::{Parser, Subcommand};
use cli::{commands, run_client, TerminalClipboard};
use client::{App, HttpApi};
use config::{ClientSettings, ServerSettings};
use logging::Console;

#[derive(Parser, Debug)]
#[command(name = "promptmaster")]
#[command(about = "PromptMaster: optimize prompts with an LLM, keep a history, browse templates")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// API base URL for client commands (default: PROMPTMASTER_API_URL or http://127.0.0.1:8001/api)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Print JSON instead of text (client commands)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP API (PROMPTMASTER_ADDR, default 0.0.0.0:8001)
    Serve(ServeArgs),
    /// List prompt categories
    Categories,
    /// List templates, optionally for one category
    Templates {
        #[arg(short, long, value_name = "ID")]
        category: Option<String>,
    },
    /// List past optimizations, newest first
    History {
        #[arg(short = 'n', long, value_name = "N")]
        limit: Option<u32>,
    },
    /// Delete one history item by id
    Delete {
        id: String,
    },
    /// Optimize a prompt and print the result
    Optimize {
        /// Category id, e.g. email_templates
        #[arg(short, long, value_name = "ID")]
        category: String,
        /// Prompt text (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        prompt: Vec<String>,
    },
    /// Interactive client with optimize/history/templates tabs
    Client,
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address, overrides PROMPTMASTER_ADDR
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
    /// SQLite path or `:memory:`, overrides PROMPTMASTER_DB
    #[arg(long, value_name = "PATH")]
    db: Option<String>,
}

fn server_settings(sa: &ServeArgs) -> ServerSettings {
    let addr = sa.addr.clone();
    let db = sa.db.clone();
    ServerSettings::from_lookup(|key| match key {
        "PROMPTMASTER_ADDR" if addr.is_some() => addr.clone(),
        "PROMPTMASTER_DB" if db.is_some() => db.clone(),
        _ => std::env::var(key).ok(),
    })
}

fn http_api(args: &Args) -> HttpApi {
    match &args.api_url {
        Some(url) => HttpApi::new(url.clone()),
        None => HttpApi::from_settings(&ClientSettings::from_env()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("promptmaster", None) {
        eprintln!("promptmaster: config: {}", e);
    }
    let args = Args::parse();

    if let Command::Serve(sa) = &args.cmd {
        logging::init(Console::Stderr)?;
        let settings = server_settings(sa);
        if let Err(e) = serve::run_serve(&settings).await {
            eprintln!("serve error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    logging::init(Console::Off)?;
    let api = http_api(&args);
    tracing::debug!(api = %api.base_url(), cmd = ?args.cmd, "client command");

    let out = match &args.cmd {
        Command::Serve(_) => return Ok(()),
        Command::Categories => commands::categories(&api, args.json).await,
        Command::Templates { category } => {
            commands::templates(&api, category.as_deref(), args.json).await
        }
        Command::History { limit } => commands::history(&api, *limit, args.json).await,
        Command::Delete { id } => commands::delete(&api, id).await,
        Command::Optimize { category, prompt } => {
            commands::optimize(&api, category, &prompt.join(" "), args.json).await
        }
        Command::Client => {
            let mut app = App::new(api, TerminalClipboard);
            run_client(&mut app).await?;
            return Ok(());
        }
    };

    match out {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            eprintln!("promptmaster: {}", e);
            std::process::exit(1);
        }
    }
}
