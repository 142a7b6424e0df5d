//! Filesystem utilities for kubewrap.

pub mod atomic;

pub use atomic::atomic_write;
