//! HTTP layer for the auction backend.
//!
//! DESIGN
//! ======
//! `api` owns the `reqwest` client and its cookie jar (the backend keeps the
//! session JWT in an `Authorization` cookie); `types` holds the wire shapes
//! the backend's JSON endpoints produce and consume.

pub mod api;
pub mod types;
