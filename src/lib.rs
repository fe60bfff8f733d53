//! Cinematic image generator - a small web app that turns a text prompt into a
//! vertical 9:16 image.
//!
//! The server proxies prompts to an upstream image-generation API and serves a
//! single page that edits the prompt and previews the result.

pub mod ai;
pub mod error;
pub mod models;
pub mod prompts;
pub mod proxy;
pub mod server;
pub mod view;

pub use error::{Error, Result};
pub use server::build_router;
