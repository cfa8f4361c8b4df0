//! # Dotview Architecture
//!
//! Dotview reads structured documents two ways:
//!
//! - as a tree of **lazy attribute views** ([`view`]), where every mapping key
//!   is read like an attribute and nested mappings are wrapped only when read;
//! - as a **record store** ([`store`]), where the flat records of a grouped
//!   document are indexed under `"<record_type>.<serial>"` keys.
//!
//! The two are independent: a view never touches the store and the store never
//! builds views.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                    │
//! │  - Parses arguments, sets up logging, prints results        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - One module per subcommand, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (view.rs, record.rs, store/)                          │
//! │  - FrozenView, Record, RecordDb + InMemoryDb                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document loading (document.rs)                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the CLI writes to stdout or stderr; diagnostics go through
//! `tracing`.
//!
//! ## Module Overview
//!
//! - [`view`]: `FrozenView`, `wrap`, mapping operations, reserved-key renaming
//! - [`record`]: flat `Record`
//! - [`store`]: `RecordDb`, `load_db`, in-memory backend
//! - [`document`]: JSON document loading
//! - [`commands`]: subcommand logic
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod record;
pub mod store;
pub mod view;
