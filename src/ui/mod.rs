pub mod app;
pub mod catalog_view;
pub mod detail_view;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod reveal;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod visualizer;
