//! View model: all UI state plus the user actions that change it.
//!
//! A single owner drives it; every action that talks to the backend awaits exactly one request
//! and then refetches the list it touched. Background refreshes fail silently (logged only);
//! optimize and delete failures queue an [`Notice::Alert`].

use std::collections::VecDeque;

use promptmaster::{Category, HistoryItem, OptimizeRequest, Template};

use crate::{Clipboard, PromptApi};

pub const OPTIMIZE_FAILED: &str = "Error optimizing prompt. Please try again.";
pub const DELETE_FAILED: &str = "Error deleting history item.";
pub const MISSING_INPUT: &str = "Please enter a prompt and select a category.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Optimize,
    History,
    Templates,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Optimize, Tab::History, Tab::Templates];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Optimize => "optimize",
            Tab::History => "history",
            Tab::Templates => "templates",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
    }
}

/// User feedback. `Alert` must be acknowledged; `Info` is a transient toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    Info(String),
}

pub struct App<A, C> {
    api: A,
    clipboard: C,
    tab: Tab,
    categories: Vec<Category>,
    history: Vec<HistoryItem>,
    templates: Vec<Template>,
    selected_category: Option<String>,
    original_prompt: String,
    optimized_prompt: String,
    loading: bool,
    notices: VecDeque<Notice>,
}

impl<A: PromptApi, C: Clipboard> App<A, C> {
    pub fn new(api: A, clipboard: C) -> Self {
        Self {
            api,
            clipboard,
            tab: Tab::default(),
            categories: Vec::new(),
            history: Vec::new(),
            templates: Vec::new(),
            selected_category: None,
            original_prompt: String::new(),
            optimized_prompt: String::new(),
            loading: false,
            notices: VecDeque::new(),
        }
    }

    /// Initial fetch of categories, history and templates.
    pub async fn mount(&mut self) {
        self.refresh_categories().await;
        self.refresh_history().await;
        self.refresh_templates().await;
    }

    pub async fn refresh_categories(&mut self) {
        match self.api.categories().await {
            Ok(c) => self.categories = c,
            Err(e) => tracing::error!("Error fetching categories: {}", e),
        }
    }

    pub async fn refresh_history(&mut self) {
        match self.api.history(None).await {
            Ok(h) => self.history = h,
            Err(e) => tracing::error!("Error fetching history: {}", e),
        }
    }

    pub async fn refresh_templates(&mut self) {
        match self.api.templates(None).await {
            Ok(t) => self.templates = t,
            Err(e) => tracing::error!("Error fetching templates: {}", e),
        }
    }

    pub fn select_category(&mut self, id: impl Into<String>) {
        self.selected_category = Some(id.into());
    }

    pub fn set_original_prompt(&mut self, text: impl Into<String>) {
        self.original_prompt = text.into();
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Whether the optimize control is enabled.
    pub fn can_optimize(&self) -> bool {
        !self.loading && !self.original_prompt.trim().is_empty() && self.selected_category.is_some()
    }

    /// Sends the current prompt for optimization. Missing input queues an alert without any
    /// request; on success the optimized pane is filled and history refetched.
    pub async fn optimize(&mut self) {
        if self.loading {
            return;
        }
        let category = match &self.selected_category {
            Some(c) if !self.original_prompt.trim().is_empty() => c.clone(),
            _ => {
                self.notices.push_back(Notice::Alert(MISSING_INPUT.to_string()));
                return;
            }
        };
        let request = OptimizeRequest::new(self.original_prompt.clone(), category);

        self.loading = true;
        let result = self.api.optimize(&request).await;
        self.loading = false;

        match result {
            Ok(item) => {
                self.optimized_prompt = item.optimized_prompt;
                self.refresh_history().await;
                self.notices
                    .push_back(Notice::Info("Prompt optimized successfully!".to_string()));
            }
            Err(e) => {
                tracing::error!("Error optimizing prompt: {}", e);
                self.notices.push_back(Notice::Alert(OPTIMIZE_FAILED.to_string()));
            }
        }
    }

    /// Copies a template into the editor, selects its category and switches to the optimize tab.
    pub fn load_template(&mut self, template: &Template) {
        self.original_prompt = template.template_text.clone();
        self.selected_category = Some(template.category.clone());
        self.tab = Tab::Optimize;
        self.notices
            .push_back(Notice::Info(format!("Template \"{}\" loaded", template.title)));
    }

    /// Restores both panes and the category of a past optimization.
    pub fn load_history_item(&mut self, item: &HistoryItem) {
        self.original_prompt = item.original_prompt.clone();
        self.optimized_prompt = item.optimized_prompt.clone();
        self.selected_category = Some(item.category.clone());
        self.tab = Tab::Optimize;
    }

    pub async fn delete_history_item(&mut self, id: &str) {
        match self.api.delete_history(id).await {
            Ok(()) => {
                self.refresh_history().await;
                self.notices
                    .push_back(Notice::Info("History item deleted".to_string()));
            }
            Err(e) => {
                tracing::error!(id = %id, "Error deleting history item: {}", e);
                self.notices.push_back(Notice::Alert(DELETE_FAILED.to_string()));
            }
        }
    }

    pub fn copy_original(&mut self) {
        let text = self.original_prompt.clone();
        self.copy(&text);
    }

    pub fn copy_optimized(&mut self) {
        let text = self.optimized_prompt.clone();
        self.copy(&text);
    }

    /// Empty panes have nothing to copy and leave the clipboard alone.
    fn copy(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.clipboard.set_text(text) {
            Ok(()) => self
                .notices
                .push_back(Notice::Info("Copied to clipboard!".to_string())),
            Err(e) => {
                tracing::error!("Error copying to clipboard: {}", e);
                self.notices
                    .push_back(Notice::Alert("Could not copy to clipboard.".to_string()));
            }
        }
    }

    /// `"<icon> <name>"` for a known id, otherwise the raw id.
    pub fn category_label(&self, id: &str) -> String {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| format!("{} {}", c.icon, c.name))
            .unwrap_or_else(|| id.to_string())
    }

    /// Templates of the selected category, or all of them when none is selected.
    pub fn templates_for_selected(&self) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| match &self.selected_category {
                Some(c) => &t.category == c,
                None => true,
            })
            .collect()
    }

    /// Drains queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn original_prompt(&self) -> &str {
        &self.original_prompt
    }

    pub fn optimized_prompt(&self) -> &str {
        &self.optimized_prompt
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
