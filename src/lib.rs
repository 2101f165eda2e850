//! Read-more and FAQ-answer toggles for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and loaded by a static page. It owns
//! two small behaviors: a "read more" button that expands and collapses a text
//! container, and an answer toggle that shows or hides an element by id. The
//! page markup is the only state store; every toggle reads the current
//! presentation attribute, inverts it, and writes it back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggle`] | Read-more and answer toggles over any [`dom::Dom`] |
//! | [`dom`] | Presentation-attribute access by element id, plus the in-memory [`dom::MemoryDom`] |
//! | [`events`] | Explicit click subscriptions for non-browser hosts |
//! | [`config`] | Element ids, class name and labels for the read-more control |
//! | [`error`] | [`error::ToggleError`] |
//! | [`consts`] | Default ids, labels and display values |
//! | `web` | `web-sys` backend and `#[wasm_bindgen]` exports (feature `web`) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod events;
pub mod toggle;
#[cfg(feature = "web")]
pub mod web;

pub use config::ReadMoreConfig;
pub use dom::{Dom, ElementState, MemoryDom};
pub use error::ToggleError;
pub use events::{ClickRegistry, Subscription};
pub use toggle::{Expansion, ReadMore, Visibility, answer_visibility, toggle_answer_visibility};
