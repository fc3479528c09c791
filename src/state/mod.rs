//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State objects are owned explicitly and handed to consumers rather than
//! living in globals; construction is the initialization point and there is
//! no teardown beyond drop.

pub mod session;
