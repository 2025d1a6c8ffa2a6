//! # Postlink Core Library
//!
//! This crate contains the core logic of the `postlink` tool – a post-install
//! lifecycle hook that keeps a project's `package.json` in sync with its git
//! remote and makes its declared executable available globally.
//!
//! Invoked once after an install, it derives the repository name from the
//! local `remote.origin.url`, rewrites the manifest's `repository` and `name`
//! fields, and links the first declared binary into the user's `~/bin`.
//!
//! The binary runs the whole sequence; the library exposes each step for
//! reuse in other tooling.
//!
//! ## Modules Overview
//! - [`format`] – Kebab-case conversion for package names
//! - [`manifest`] – Reading and writing `package.json`
//! - [`repo`] – Deriving the repository name from the git remote
//! - [`project`] – Manifest rewrites and binary linking for one project directory
//! - [`report`] – Colorized console status lines

pub mod format;
pub mod manifest;
pub mod project;
pub mod repo;
pub mod report;

pub use format::*;
pub use manifest::*;
pub use project::*;
pub use repo::*;
