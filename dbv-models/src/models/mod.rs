//! Entity model definitions.

pub mod agent;
pub mod common;
pub mod dispatch;
pub mod entry;
pub mod form;
pub mod project;
