//! Plain-text rendering of categories, templates, history and the client tabs.

use client::{App, Clipboard, Notice, PromptApi, Tab};
use promptmaster::{Category, HistoryItem, Template};
use unicode_width::UnicodeWidthStr;

/// Indent for fields under a numbered entry.
const INDENT: &str = "   ";

/// Preview length for prompt text in lists.
pub const PREVIEW_LEN: usize = 80;

/// Truncates `s` to at most `max` chars; appends "..." when truncated. UTF-8 safe.
/// Newlines are folded into spaces so a preview stays on one line.
pub fn preview(s: &str, max: usize) -> String {
    const SUFFIX: &str = "...";
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if max <= SUFFIX.len() {
        return flat.chars().take(max).collect();
    }
    if flat.chars().count() <= max {
        return flat.to_string();
    }
    format!(
        "{}{}",
        flat.chars().take(max - SUFFIX.len()).collect::<String>(),
        SUFFIX
    )
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// One row per category: `id  icon name`, ids padded to a common column.
pub fn categories_table(categories: &[Category]) -> String {
    let width = categories
        .iter()
        .map(|c| UnicodeWidthStr::width(c.id.as_str()))
        .max()
        .unwrap_or(0);
    categories
        .iter()
        .map(|c| format!("{}  {} {}", pad(&c.id, width), c.icon, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered template list. `label` resolves a category id for display.
pub fn templates_list(templates: &[&Template], label: impl Fn(&str) -> String) -> String {
    if templates.is_empty() {
        return "(no templates)".to_string();
    }
    let mut lines = Vec::new();
    for (i, t) in templates.iter().enumerate() {
        lines.push(format!("{:>2}. {}  [{}]", i + 1, t.title, label(&t.category)));
        lines.push(format!("{}{}", INDENT, t.description));
        lines.push(format!("{}{}", INDENT, preview(&t.template_text, PREVIEW_LEN)));
    }
    lines.join("\n")
}

/// Numbered history list, newest first as given.
pub fn history_list(items: &[HistoryItem], label: impl Fn(&str) -> String) -> String {
    if items.is_empty() {
        return "(no history)".to_string();
    }
    let mut lines = Vec::new();
    for (i, h) in items.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {}  {}  id={}",
            i + 1,
            label(&h.category),
            h.timestamp,
            h.id
        ));
        lines.push(format!(
            "{}original:  {}",
            INDENT,
            preview(&h.original_prompt, PREVIEW_LEN)
        ));
        lines.push(format!(
            "{}optimized: {}",
            INDENT,
            preview(&h.optimized_prompt, PREVIEW_LEN)
        ));
    }
    lines.join("\n")
}

/// Tab bar with the active tab bracketed: `[optimize]  history   templates`.
pub fn tab_bar(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|t| {
            if *t == active {
                format!("[{}]", t.label())
            } else {
                format!(" {} ", t.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn notice(n: &Notice) -> String {
    match n {
        Notice::Alert(m) => format!("!! {}", m),
        Notice::Info(m) => format!("-- {}", m),
    }
}

/// Full screen for the active tab.
pub fn view<A: PromptApi, C: Clipboard>(app: &App<A, C>) -> String {
    let label = |id: &str| app.category_label(id);
    let body = match app.tab() {
        Tab::Optimize => {
            let category = app
                .selected_category()
                .map(label)
                .unwrap_or_else(|| "(none)".to_string());
            let optimized = if app.optimized_prompt().is_empty() {
                "(nothing yet)"
            } else {
                app.optimized_prompt()
            };
            let control = if app.is_loading() {
                "optimizing..."
            } else if app.can_optimize() {
                "ready: type `optimize`"
            } else {
                "enter a prompt and pick a category"
            };
            format!(
                "Category: {}\n\nOriginal prompt:\n{}\n\nOptimized prompt:\n{}\n\n[{}]",
                category,
                app.original_prompt(),
                optimized,
                control
            )
        }
        Tab::History => history_list(app.history(), label),
        Tab::Templates => templates_list(&app.templates_for_selected(), label),
    };
    format!("{}\n\n{}", tab_bar(app.tab()), body)
}
