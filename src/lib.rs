//! # invite-report
//!
//! A single-pass batch tool that collects pending and failed member
//! invitations across one or more organizations and commits a CSV
//! (optionally JSON) report back into a repository.
//!
//! ## Usage
//!
//! ```bash
//! invite-report --org my-org
//! invite-report --enterprise my-enterprise --sort created_at --json
//! ```
//!
//! ## Modules
//!
//! - `cli` - Command-line argument structures
//! - `config` - Run configuration resolved once at startup
//! - `github` - Trait-based GitHub API layer (REST + GraphQL)
//! - `scope` - Report scope resolution and enterprise org enumeration
//! - `collector` - Invitation records and per-organization collection
//! - `report` - Sorting, CSV/JSON rendering, and the upsert publisher
//! - `run` - The four-stage pipeline wiring it all together
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod github;
pub mod report;
pub mod run;
pub mod scope;
