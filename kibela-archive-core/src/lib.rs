#![doc = "kibela-archive-core: conversion pipeline for kibela-archive."]

//! Turns an exported notes directory (markdown with YAML front-matter) into a
//! static HTML archive: one page per note, a chronological index, and a
//! verbatim copy of the attachments tree.
//!
//! # Layout
//! - [`loader`]: source files → [`note::Note`]s
//! - [`archive`]: notes → output pages (paths, note pages, index)
//! - [`materialize`]: pages + attachments → directory tree on disk
//! - [`pipeline`]: the three steps wired together behind [`pipeline::run`]
//! - [`contract`]: the front-matter and markdown capabilities the loader consumes,
//!   implemented by [`frontmatter`] and [`render`]

pub mod archive;
pub mod config;
pub mod contract;
pub mod error;
pub mod frontmatter;
pub mod loader;
pub mod materialize;
pub mod note;
pub mod pipeline;
pub mod render;

pub use config::ArchiveConfig;
pub use error::{ArchiveError, InputError};
pub use pipeline::{run, run_default, ArchiveReport};
