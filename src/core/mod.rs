//! # Core Application Logic
//!
//! This module contains Shelf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (catalog data) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • partition()          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `CatalogState` struct, all screen data in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`catalog`]: Stable partition of a fetched page by book type
//! - [`navigation`]: Route stack for the home and chapter list screens
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;
