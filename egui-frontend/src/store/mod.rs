//! # Store Module
//!
//! In-memory record keeping for the clinic: one [`RecordStore`] owned by the
//! app struct and handed by reference to whichever view needs it. There is no
//! persistence layer; the store lives and dies with the process.

pub mod record_store;

pub use record_store::RecordStore;
