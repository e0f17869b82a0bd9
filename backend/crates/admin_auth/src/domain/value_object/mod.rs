//! Value Object Module

pub mod principal_password;
pub mod principal_role;
pub mod username;
