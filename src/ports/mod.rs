//! Port traits defining external boundaries.
//!
//! The guidance core itself performs no I/O; the loader reaches the outside
//! world only through these traits. Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
