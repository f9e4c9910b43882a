//! Domain types shared across services: pagination and tag colors.

pub mod color;
pub mod pagination;
