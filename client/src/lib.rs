//! PromptMaster client.
//!
//! [`HttpApi`] talks to the REST API; [`App`] is the view model a front end drives: three tabs,
//! the selected category, the two prompt panes, a loading flag, and a queue of [`Notice`]s.
//! Network and clipboard access go through the [`PromptApi`] and [`Clipboard`] traits so the
//! view model can be exercised without a server.

mod api;
mod app;
mod clipboard;
mod error;

pub use api::{HttpApi, PromptApi};
pub use app::{App, Notice, Tab};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use error::ClientError;
