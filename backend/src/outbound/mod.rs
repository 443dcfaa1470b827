//! Outbound adapters implementing domain port traits.
//!
//! - **memory**: process-local stores for tasks, achievement records and
//!   user identities.
//!
//! Adapters are thin translators between domain types and their storage. They
//! contain no scoring logic.

pub mod memory;
