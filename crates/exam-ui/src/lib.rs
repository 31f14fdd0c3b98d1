//! WASM page behaviors for the exam scheduling web application
//!
//! The server renders every page; this crate adds the few client-side
//! behaviors those pages rely on:
//! - alert banners fade out and disappear on their own
//! - required form fields are checked before submission
//! - deletions ask for confirmation
//! - a loading indicator can be shown and hidden
//! - tables can be filtered by a search box
//!
//! ## Architecture
//! - Behaviors are plain functions over the [`dom::Page`] trait
//! - [`dom::WebPage`] drives the live document through web-sys
//! - [`dom::MemoryPage`] and [`timers::ManualScheduler`] run the same code headless
//! - The `bindings` module (wasm32 only) exports the functions templates call
//!
//! ## Module Structure
//! - `behaviors`: the five page behaviors
//! - `config`: timings, selectors, colors and wording
//! - `dom`: document access
//! - `timers`: deferred task scheduling
//! - `lifecycle`: startup hooks run when the page is ready
//! - `logging`: `tracing` to browser console bridge
//! - `error`: error types and handling

#![forbid(unsafe_code)]

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod timers;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

pub use config::BehaviorConfig;
pub use error::{PageError, Result};

#[cfg(test)]
mod tests;
