//! In-memory session ledger of bookings and transactions.
//!
//! The ledger is append-only: bookings and transactions are never removed,
//! and transactions are never mutated after insert. The only permitted
//! mutation is a guarded booking status change. Everything lives for the
//! duration of one session; nothing is persisted.

use crate::{Booking, BookingStatus, Error, Religion, Result, Transaction, User, UserRole};
use chrono::Utc;

/// One user session: the active profile plus every booking and transaction
/// recorded since the session started.
#[derive(Clone, Debug)]
pub struct Session {
    user: User,
    bookings: Vec<Booking>,
    transactions: Vec<Transaction>,
    /// High-water mark for minted ids, in epoch milliseconds
    last_id_millis: i64,
}

impl Session {
    pub fn new(user: User) -> Self {
        Session {
            user,
            bookings: Vec::new(),
            transactions: Vec::new(),
            last_id_millis: 0,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn set_religion(&mut self, religion: Religion) {
        tracing::debug!("Session religion set to {}", religion.as_str());
        self.user.religion = Some(religion);
    }

    pub fn set_role(&mut self, role: UserRole) {
        tracing::debug!("Session role set to {}", role.as_str());
        self.user.role = Some(role);
    }

    /// All bookings, in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Mint a fresh booking id ("booking-<epoch millis>")
    pub fn next_booking_id(&mut self) -> String {
        format!("booking-{}", self.next_id_millis())
    }

    /// Mint a fresh transaction id ("transaction-<epoch millis>")
    pub fn next_transaction_id(&mut self) -> String {
        format!("transaction-{}", self.next_id_millis())
    }

    /// Wall-clock milliseconds, bumped past the previous mint so two ids
    /// minted within the same millisecond never collide
    fn next_id_millis(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis
    }

    /// Append a booking to the ledger
    ///
    /// Rejects a booking whose id is already present.
    pub fn add_booking(&mut self, booking: Booking) -> Result<()> {
        if booking.id.is_empty() {
            return Err(Error::Ledger("booking has empty id".to_string()));
        }
        if self.booking(&booking.id).is_some() {
            return Err(Error::Ledger(format!(
                "duplicate booking id '{}'",
                booking.id
            )));
        }
        tracing::debug!("Ledger append booking {}", booking.id);
        self.bookings.push(booking);
        Ok(())
    }

    /// Append a transaction to the ledger
    ///
    /// Rejects a transaction whose id is already present or whose
    /// `booking_id` does not reference a recorded booking.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<()> {
        if transaction.id.is_empty() {
            return Err(Error::Ledger("transaction has empty id".to_string()));
        }
        if self.transaction(&transaction.id).is_some() {
            return Err(Error::Ledger(format!(
                "duplicate transaction id '{}'",
                transaction.id
            )));
        }
        if self.booking(&transaction.booking_id).is_none() {
            return Err(Error::Ledger(format!(
                "transaction '{}' references unknown booking '{}'",
                transaction.id, transaction.booking_id
            )));
        }
        tracing::debug!("Ledger append transaction {}", transaction.id);
        self.transactions.push(transaction);
        Ok(())
    }

    /// Change a booking's status, enforcing the lifecycle
    /// pending -> confirmed -> completed, or pending -> cancelled.
    pub fn update_booking_status(
        &mut self,
        id: &str,
        new_status: BookingStatus,
    ) -> Result<&Booking> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(format!("booking '{}'", id)))?;

        let allowed = matches!(
            (booking.status, new_status),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        );
        if !allowed {
            return Err(Error::Booking(format!(
                "cannot change booking '{}' from {} to {}",
                id,
                booking.status.as_str(),
                new_status.as_str()
            )));
        }

        tracing::debug!(
            "Booking {} status {} -> {}",
            id,
            booking.status.as_str(),
            new_status.as_str()
        );
        booking.status = new_status;
        Ok(booking)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(User::guest())
    }
}
