//! SILL ソフトウェアカタログ
//!
//! カタログのスナップショットに対して、あいまい検索・絞り込み・
//! 自次元除外のファセット集計・並べ替えを行う。
//!
//! ```no_run
//! use sill_catalog::catalog::{CatalogSource, JsonFileSource};
//! use sill_catalog::engine::CatalogEngine;
//! use sill_catalog::filter::FilterState;
//!
//! let snapshot = JsonFileSource::new("catalog.json").load()?;
//! let engine = CatalogEngine::new(snapshot);
//!
//! let mut state = FilterState::new();
//! state.set("search", Some("office"))?;
//! state.set("environment", Some("linux"))?;
//!
//! let view = engine.view(&state);
//! println!("{} software(s)", view.softwares.len());
//! # Ok::<(), sill_catalog::error::SillError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod facet;
pub mod filter;
pub mod output;
pub mod search;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;
