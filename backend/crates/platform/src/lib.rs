//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, secure random bytes)
//! - Password hashing (Argon2id, NIST SP 800-63B oriented)
//! - Bearer credential extraction from HTTP headers

pub mod bearer;
pub mod crypto;
pub mod password;
