//! Launcher core: query, focus, dispatch
//!
//! - [`item`]: result items and their opaque action forms
//! - [`render`]: result list → display rows (pure)
//! - [`focus`]: the single focused row, with wraparound and minimal scroll
//! - [`session`]: query text, result list, stale-response guard
//! - [`controller`]: input → state changes + effects
//! - [`driver`]: runs effects against the backend on tokio tasks
//!
//! Nothing here touches the terminal. The TUI owns a [`Controller`] and a
//! [`Driver`] and shuttles inputs and effects between them.

pub mod controller;
pub mod driver;
pub mod focus;
pub mod item;
pub mod render;
pub mod session;

pub use controller::{Controller, Effect, Input, Notice, TextEdit};
pub use driver::Driver;
pub use item::{Form, ResultItem};
