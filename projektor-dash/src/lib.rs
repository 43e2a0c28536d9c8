pub mod config;
pub mod engine;
pub mod nav;
pub mod page;
pub mod repository;
pub mod selection;
pub mod state;
