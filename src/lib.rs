//! LevelUp server library.
//!
//! This library provides the core functionality for the LevelUp server,
//! including database operations, token authentication, and the REST API
//! for games, events and event signups.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
