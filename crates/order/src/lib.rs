pub mod abstract_trait;
pub mod command;
pub mod di;
pub mod domain;
pub mod model;
pub mod notifier;
pub mod repository;
