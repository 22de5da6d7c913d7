//! Domain models for textkv
//!
//! Contains the record type shared by codecs and stores, without any I/O.

mod entry;

pub use entry::Entry;
