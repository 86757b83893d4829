//! Shared test fixtures for the lifexp workspace.

pub mod fixtures;
