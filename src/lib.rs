//! # gavel
//!
//! Rust client for the gavel auction backend. The backend authenticates via
//! a JWT stored in an `Authorization` cookie; this crate wraps its HTTP API
//! (login, registration, sale items, bids) and maintains the client-side
//! session state derived from the server's login check.
//!
//! The crate contains configuration, the HTTP API client with its wire
//! types, and the shared session state consumed by callers such as the
//! `gavel-cli` binary.

pub mod config;
pub mod net;
pub mod state;
