//! Booking flow: placing, confirming, completing, and cancelling bookings.
//!
//! Placing a booking writes two ledger records in one step: the booking
//! itself (always `pending`) and a completed payment transaction for the
//! officiant's full fee. Cancelling a paid booking writes a completed
//! refund transaction for the same amount.

use crate::{
    Booking, BookingStatus, Catalog, Error, Result, Session, Transaction, TransactionKind,
    TransactionStatus,
};
use chrono::{NaiveDate, Utc};

/// Customer id recorded when the session profile carries no usable id
pub const DEFAULT_CUSTOMER_ID: &str = "customer-1";

/// Everything needed to place a booking
#[derive(Clone, Debug)]
pub struct BookingRequest {
    pub officiant_id: String,
    /// Optional: absent when booking straight from an officiant profile
    pub ceremony_id: Option<String>,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    /// Time slot label, e.g. `10:00 AM`
    pub time: String,
    pub notes: Option<String>,
}

/// The two ledger records produced by a successful booking
#[derive(Clone, Debug)]
pub struct PlacedBooking {
    pub booking: Booking,
    pub payment: Transaction,
}

/// The outcome of cancelling a booking
#[derive(Clone, Debug)]
pub struct CancelledBooking {
    pub booking: Booking,
    /// Present when a settled payment existed and was refunded
    pub refund: Option<Transaction>,
}

/// Place a booking and record its payment
///
/// Validates the request, resolves the officiant (and ceremony, when given)
/// against the catalog, then appends a pending booking and a completed
/// payment transaction for the officiant's fee.
pub fn place_booking(
    session: &mut Session,
    catalog: &Catalog,
    request: &BookingRequest,
) -> Result<PlacedBooking> {
    if request.date.trim().is_empty() || request.time.trim().is_empty() {
        return Err(Error::Booking("Please select date and time".to_string()));
    }

    let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
        Error::Booking(format!(
            "Invalid date '{}' (expected YYYY-MM-DD)",
            request.date
        ))
    })?;

    let officiant = catalog
        .officiant(&request.officiant_id)
        .ok_or_else(|| Error::NotFound(format!("officiant '{}'", request.officiant_id)))?;

    let ceremony_id = match &request.ceremony_id {
        Some(id) => {
            let ceremony = catalog
                .ceremony(id)
                .ok_or_else(|| Error::NotFound(format!("ceremony '{}'", id)))?;
            Some(ceremony.id.clone())
        }
        None => None,
    };

    let customer_id = if session.user().id.is_empty() {
        DEFAULT_CUSTOMER_ID.to_string()
    } else {
        session.user().id.clone()
    };

    let booking = Booking {
        id: session.next_booking_id(),
        customer_id,
        officiant_id: officiant.id.clone(),
        ceremony_id,
        date,
        time: request.time.clone(),
        status: BookingStatus::Pending,
        amount: officiant.fee,
        currency: officiant.currency.clone(),
        notes: request.notes.clone(),
    };
    let payment = Transaction {
        id: session.next_transaction_id(),
        booking_id: booking.id.clone(),
        amount: officiant.fee,
        currency: officiant.currency.clone(),
        status: TransactionStatus::Completed,
        date: Utc::now(),
        kind: TransactionKind::Payment,
    };

    session.add_booking(booking.clone())?;
    session.add_transaction(payment.clone())?;

    tracing::info!(
        "Placed booking {} with {} for {} {}",
        booking.id,
        officiant.name,
        booking.amount,
        booking.currency
    );

    Ok(PlacedBooking { booking, payment })
}

/// Confirm a pending booking
pub fn confirm_booking(session: &mut Session, booking_id: &str) -> Result<Booking> {
    let booking = session
        .update_booking_status(booking_id, BookingStatus::Confirmed)?
        .clone();
    tracing::info!("Confirmed booking {}", booking.id);
    Ok(booking)
}

/// Mark a confirmed booking as completed
pub fn complete_booking(session: &mut Session, booking_id: &str) -> Result<Booking> {
    let booking = session
        .update_booking_status(booking_id, BookingStatus::Completed)?
        .clone();
    tracing::info!("Completed booking {}", booking.id);
    Ok(booking)
}

/// Cancel a pending booking, refunding its settled payment if one exists
pub fn cancel_booking(session: &mut Session, booking_id: &str) -> Result<CancelledBooking> {
    let booking = session
        .update_booking_status(booking_id, BookingStatus::Cancelled)?
        .clone();

    let paid = session
        .transactions()
        .iter()
        .find(|t| {
            t.booking_id == booking.id
                && t.kind == TransactionKind::Payment
                && t.status.is_settled()
        })
        .map(|t| (t.amount, t.currency.clone()));

    let refund = match paid {
        Some((amount, currency)) => {
            let refund = Transaction {
                id: session.next_transaction_id(),
                booking_id: booking.id.clone(),
                amount,
                currency,
                status: TransactionStatus::Completed,
                date: Utc::now(),
                kind: TransactionKind::Refund,
            };
            session.add_transaction(refund.clone())?;
            tracing::info!(
                "Cancelled booking {} and refunded {} {}",
                booking.id,
                amount,
                refund.currency
            );
            Some(refund)
        }
        None => {
            tracing::info!("Cancelled booking {} (nothing to refund)", booking.id);
            None
        }
    };

    Ok(CancelledBooking { booking, refund })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, net_total, User};

    fn request(officiant_id: &str, ceremony_id: Option<&str>) -> BookingRequest {
        BookingRequest {
            officiant_id: officiant_id.to_string(),
            ceremony_id: ceremony_id.map(str::to_string),
            date: "2025-05-01".to_string(),
            time: "10:00 AM".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_place_booking_records_booking_and_payment() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let placed = place_booking(
            &mut session,
            &catalog,
            &request("pandit-rajesh-sharma", Some("hindu-marriage")),
        )
        .unwrap();

        assert!(placed.booking.id.starts_with("booking-"));
        assert_eq!(placed.booking.status, BookingStatus::Pending);
        assert_eq!(placed.booking.amount, 11000);
        assert_eq!(placed.booking.currency, "INR");
        assert_eq!(placed.booking.ceremony_id.as_deref(), Some("hindu-marriage"));
        assert_eq!(placed.booking.time, "10:00 AM");

        assert!(placed.payment.id.starts_with("transaction-"));
        assert_eq!(placed.payment.booking_id, placed.booking.id);
        assert_eq!(placed.payment.amount, 11000);
        assert_eq!(placed.payment.status, TransactionStatus::Completed);
        assert_eq!(placed.payment.kind, TransactionKind::Payment);

        assert_eq!(session.bookings().len(), 1);
        assert_eq!(session.transactions().len(), 1);
    }

    #[test]
    fn test_amount_follows_officiant_fee() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();
        assert_eq!(placed.booking.amount, 5000);

        let placed = place_booking(
            &mut session,
            &catalog,
            &request("pandit-krishna-iyer", None),
        )
        .unwrap();
        assert_eq!(placed.booking.amount, 15000);
    }

    #[test]
    fn test_customer_id_comes_from_session_user() {
        let catalog = build_default_catalog();
        let mut session = Session::default();
        let user_id = session.user().id.clone();

        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();
        assert_eq!(placed.booking.customer_id, user_id);
    }

    #[test]
    fn test_customer_id_falls_back_when_profile_has_none() {
        let catalog = build_default_catalog();
        let mut user = User::guest();
        user.id = String::new();
        let mut session = Session::new(user);

        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();
        assert_eq!(placed.booking.customer_id, DEFAULT_CUSTOMER_ID);
    }

    #[test]
    fn test_place_booking_requires_date_and_time() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let mut blank_date = request("pandit-mohan-verma", None);
        blank_date.date = "  ".to_string();
        let err = place_booking(&mut session, &catalog, &blank_date).unwrap_err();
        assert!(matches!(err, Error::Booking(_)));
        assert!(err.to_string().contains("select date and time"));

        let mut blank_time = request("pandit-mohan-verma", None);
        blank_time.time = String::new();
        let err = place_booking(&mut session, &catalog, &blank_time).unwrap_err();
        assert!(matches!(err, Error::Booking(_)));

        assert!(session.bookings().is_empty());
        assert!(session.transactions().is_empty());
    }

    #[test]
    fn test_place_booking_rejects_malformed_date() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let mut bad = request("pandit-mohan-verma", None);
        bad.date = "01/05/2025".to_string();
        let err = place_booking(&mut session, &catalog, &bad).unwrap_err();
        assert!(matches!(err, Error::Booking(_)));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_place_booking_unknown_officiant() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let err = place_booking(&mut session, &catalog, &request("pandit-nobody", None))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(session.bookings().is_empty());
    }

    #[test]
    fn test_place_booking_unknown_ceremony() {
        let catalog = build_default_catalog();
        let mut session = Session::default();

        let err = place_booking(
            &mut session,
            &catalog,
            &request("pandit-rajesh-sharma", Some("hindu-nothing")),
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(session.bookings().is_empty());
        assert!(session.transactions().is_empty());
    }

    #[test]
    fn test_confirm_then_complete() {
        let catalog = build_default_catalog();
        let mut session = Session::default();
        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();

        let confirmed = confirm_booking(&mut session, &placed.booking.id).unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);

        let completed = complete_booking(&mut session, &placed.booking.id).unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);
    }

    #[test]
    fn test_cancel_refunds_the_settled_payment() {
        let catalog = build_default_catalog();
        let mut session = Session::default();
        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();
        assert_eq!(net_total(session.transactions()), 5000);

        let cancelled = cancel_booking(&mut session, &placed.booking.id).unwrap();
        assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);

        let refund = cancelled.refund.expect("refund should be recorded");
        assert_eq!(refund.booking_id, placed.booking.id);
        assert_eq!(refund.amount, 5000);
        assert_eq!(refund.kind, TransactionKind::Refund);
        assert_eq!(refund.status, TransactionStatus::Completed);

        // Payment and refund cancel out
        assert_eq!(net_total(session.transactions()), 0);
        assert_eq!(session.transactions().len(), 2);
    }

    #[test]
    fn test_cancel_confirmed_booking_is_rejected() {
        let catalog = build_default_catalog();
        let mut session = Session::default();
        let placed = place_booking(&mut session, &catalog, &request("pandit-mohan-verma", None))
            .unwrap();
        confirm_booking(&mut session, &placed.booking.id).unwrap();

        let err = cancel_booking(&mut session, &placed.booking.id).unwrap_err();
        assert!(matches!(err, Error::Booking(_)));
        // No refund was written
        assert_eq!(session.transactions().len(), 1);
    }

    #[test]
    fn test_cancel_unknown_booking() {
        let mut session = Session::default();
        let err = cancel_booking(&mut session, "booking-404").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
