//! Library entry for pkgshelf exposing the package browser and page generator.

pub mod app;
pub mod args;
pub mod browser;
pub mod logic;
pub mod pages;
pub mod settings;
pub mod sources;
pub mod state;
pub mod ui;

pub use browser::PackageBrowser;
