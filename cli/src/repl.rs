//! Interactive client: read a command, apply it to the view model, redraw, repeat until EOF or quit.

use std::io::Write;

use client::{App, ClientError, Clipboard, PromptApi, Tab};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

pub const HELP: &str = "\
commands:
  tab optimize|history|templates   switch tab
  category <id|n>                  select a category (n from `categories`)
  categories                       list categories
  prompt <text>                    set the original prompt
  optimize                         optimize the current prompt
  template <n>                     load template n of the templates tab
  load <n>                         load history item n
  delete <n>                       delete history item n
  copy original|optimized          copy a pane to the clipboard
  refresh                          refetch categories, history and templates
  show                             redraw the current tab
  help                             this text
  quit                             leave";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    Original,
    Optimized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Tab(Tab),
    Category(String),
    Categories,
    Prompt(String),
    Optimize,
    Template(usize),
    Load(usize),
    Delete(usize),
    Copy(CopyTarget),
    Refresh,
    Show,
    Help,
    Quit,
}

/// 1-based lookup.
fn nth<T>(items: &[T], n: usize) -> Option<&T> {
    n.checked_sub(1).and_then(|i| items.get(i))
}

fn index_arg(name: &str, arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("usage: {} <n> (n starts at 1)", name)),
    }
}

/// Parses one input line. `prompt` keeps everything after the keyword as typed.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r),
        None => (line.trim_end(), ""),
    };
    match word.to_lowercase().as_str() {
        "tab" => Tab::parse(rest)
            .map(ReplCommand::Tab)
            .ok_or_else(|| "usage: tab optimize|history|templates".to_string()),
        "history" | "templates" => Tab::parse(word)
            .map(ReplCommand::Tab)
            .ok_or_else(|| format!("unknown tab: {}", word)),
        "optimize" => Ok(ReplCommand::Optimize),
        "category" | "cat" if !rest.trim().is_empty() => {
            Ok(ReplCommand::Category(rest.trim().to_string()))
        }
        "category" | "cat" => Err("usage: category <id|n>".to_string()),
        "categories" => Ok(ReplCommand::Categories),
        "prompt" => Ok(ReplCommand::Prompt(rest.to_string())),
        "template" => index_arg("template", rest).map(ReplCommand::Template),
        "load" => index_arg("load", rest).map(ReplCommand::Load),
        "delete" => index_arg("delete", rest).map(ReplCommand::Delete),
        "copy" => match rest.trim().to_lowercase().as_str() {
            "original" => Ok(ReplCommand::Copy(CopyTarget::Original)),
            "optimized" => Ok(ReplCommand::Copy(CopyTarget::Optimized)),
            _ => Err("usage: copy original|optimized".to_string()),
        },
        "refresh" => Ok(ReplCommand::Refresh),
        "show" | "" => Ok(ReplCommand::Show),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "/quit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command: {} (try `help`)", other)),
    }
}

/// Applies `cmd` to `app`. Returns the text to print, if any besides the redraw.
pub async fn apply<A: PromptApi, C: Clipboard>(
    app: &mut App<A, C>,
    cmd: ReplCommand,
) -> Result<Option<String>, String> {
    match cmd {
        ReplCommand::Tab(tab) => app.set_tab(tab),
        ReplCommand::Category(arg) => {
            let id = match arg.parse::<usize>() {
                Ok(n) => nth(app.categories(), n)
                    .map(|c| c.id.clone())
                    .ok_or_else(|| format!("no category {}", n))?,
                Err(_) => arg,
            };
            app.select_category(id);
        }
        ReplCommand::Categories => {
            return Ok(Some(render::categories_table(app.categories())));
        }
        ReplCommand::Prompt(text) => app.set_original_prompt(text),
        ReplCommand::Optimize => {
            app.set_tab(Tab::Optimize);
            app.optimize().await;
        }
        ReplCommand::Template(n) => {
            let template = nth(&app.templates_for_selected(), n)
                .map(|t| (*t).clone())
                .ok_or_else(|| format!("no template {}", n))?;
            app.load_template(&template);
        }
        ReplCommand::Load(n) => {
            let item = nth(app.history(), n)
                .cloned()
                .ok_or_else(|| format!("no history item {}", n))?;
            app.load_history_item(&item);
        }
        ReplCommand::Delete(n) => {
            let id = nth(app.history(), n)
                .map(|h| h.id.clone())
                .ok_or_else(|| format!("no history item {}", n))?;
            app.delete_history_item(&id).await;
            app.set_tab(Tab::History);
        }
        ReplCommand::Copy(CopyTarget::Original) => app.copy_original(),
        ReplCommand::Copy(CopyTarget::Optimized) => app.copy_optimized(),
        ReplCommand::Refresh => app.mount().await,
        ReplCommand::Show | ReplCommand::Quit => {}
        ReplCommand::Help => return Ok(Some(HELP.to_string())),
    }
    Ok(None)
}

/// Clipboard for a terminal session: prints the copied text verbatim between rules.
#[derive(Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClientError> {
        fn write_block(text: &str) -> std::io::Result<()> {
            let mut out = std::io::stdout().lock();
            writeln!(out, "----- copied -----")?;
            out.write_all(text.as_bytes())?;
            writeln!(out, "\n------------------")?;
            out.flush()
        }
        write_block(text).map_err(|e| ClientError::Clipboard(e.to_string()))
    }
}

fn print_notices<A: PromptApi, C: Clipboard>(app: &mut App<A, C>) {
    for n in app.take_notices() {
        println!("{}", render::notice(&n));
    }
}

/// Mounts the app, then loops: prompt, read line, apply, redraw.
///
/// Exits on EOF (Ctrl+D) or `quit`/`exit`. Parse errors go to stderr and the loop continues.
pub async fn run_client<A: PromptApi, C: Clipboard>(
    app: &mut App<A, C>,
) -> Result<(), Box<dyn std::error::Error>> {
    app.mount().await;
    println!("{}", render::view(app));
    println!("\n(type `help` for commands)");
    let mut reader = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match reader.next_line().await? {
            None => break,
            Some(s) => s,
        };
        let cmd = match parse_command(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        let redraw = !matches!(cmd, ReplCommand::Help | ReplCommand::Categories);
        match apply(app, cmd).await {
            Ok(Some(text)) => println!("{}", text),
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
        print_notices(app);
        if redraw {
            println!("{}", render::view(app));
        }
    }

    println!("Bye.");
    Ok(())
}
