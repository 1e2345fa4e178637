// src/specs/mod.rs
//! # Source "specs" module
//!
//! This module hosts the **source-specific extraction specifications**.
//! Each spec focuses on a single data source and encodes *where the
//! ground truth lives in that source* and *how to extract it*.
//!
//! ## What lives here
//! - `ratings` - the per-round player-rating CSV exports. Row order is
//!   the performance ranking; every match occupies a fixed 46-row block,
//!   and a row's rank within its block is what earns votes.
//! - `brownlow` - the official Brownlow count page. One documented
//!   `<tr>` shape per player; zero matching rows means the markup has
//!   drifted and is reported as an error, never as an empty count.
//!
//! ## What does **not** live here
//! - **Caching/persistence** (`store`) - handled by higher layers
//!   (`official::load`).
//! - **Vote arithmetic and aggregation** - `votes` and `season` own the
//!   counting rules; specs only extract and shape.
//! - **GUI concerns and export formatting** - the GUI reads computed
//!   data and applies view/export transforms elsewhere.
//!
//! ## Typical call chain
//! ```text
//! GUI / runner → runner::tally_season → specs::ratings::load_round()
//!              → official::load      → specs::brownlow::parse_doc()
//! ```
//!
//! ## Conventions & invariants
//! - **Case-insensitive** tag detection on the HTML side; avoid brittle
//!   full-document regexes.
//! - Return **stable shapes** per spec (documented in each) so the rest
//!   of the pipeline can rely on them.
//! - Specs are testable **offline** against synthetic fixtures.
pub mod brownlow;
pub mod ratings;
