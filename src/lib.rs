//! ConnectSphere engagement core - headless client logic for the social web app
//!
//! This library owns per-post engagement state (likes, bookmarks, shares),
//! the creator dashboard aggregations, and the row API adapters behind both.
//! Rendering and session acquisition stay with the host application.

pub mod adapters;
pub mod analytics;
pub mod engagement;
pub mod models;
pub mod share;
pub mod traits;
