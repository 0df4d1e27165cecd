//! Plan Am Well Admin - Leptos Frontend Library

pub mod api;
pub mod app;
pub mod components;
pub mod formatters;
pub mod pages;
pub mod stores;
