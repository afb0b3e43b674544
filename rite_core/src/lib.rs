#![forbid(unsafe_code)]

//! Core domain model and business logic for the Rite ceremony booking system.
//!
//! This crate provides:
//! - Domain types (religions, ceremonies, officiants, bookings, transactions)
//! - The built-in catalog
//! - The in-memory session ledger
//! - Query views (filtering, sorting, partitioning, totals)
//! - The booking flow

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod query;
pub mod booking;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use session::Session;
pub use query::{
    bookings_in_tab, ceremony_categories, filter_ceremonies, filter_transactions, list_officiants,
    net_total, officiants_for_ceremony, BookingTab, OfficiantSort, TransactionFilter,
};
pub use booking::{
    cancel_booking, complete_booking, confirm_booking, place_booking, BookingRequest,
    CancelledBooking, PlacedBooking,
};
