//! Business logic services.

pub mod accounts;
pub mod profile;
pub mod signup;
