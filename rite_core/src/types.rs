//! Core domain types for the ceremony booking system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Religions, user roles, and availability modes
//! - Ceremonies and officiants (catalog entries)
//! - Bookings and transactions (session ledger records)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identity Types
// ============================================================================

/// Religious tradition a ceremony or officiant belongs to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Religion {
    Hindu,
    Muslim,
    Sikh,
    Christian,
}

impl Religion {
    /// All religions, in onboarding display order
    pub const ALL: [Religion; 4] = [
        Religion::Hindu,
        Religion::Muslim,
        Religion::Sikh,
        Religion::Christian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Religion::Hindu => "hindu",
            Religion::Muslim => "muslim",
            Religion::Sikh => "sikh",
            Religion::Christian => "christian",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Religion::Hindu => "Hindu",
            Religion::Muslim => "Muslim",
            Religion::Sikh => "Sikh",
            Religion::Christian => "Christian",
        }
    }

    /// Plural title used when listing officiants of this tradition
    pub fn officiant_title(&self) -> &'static str {
        match self {
            Religion::Hindu => "Pandits",
            Religion::Muslim => "Maulvis",
            Religion::Sikh => "Granthis",
            Religion::Christian => "Priests",
        }
    }
}

impl std::str::FromStr for Religion {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hindu" => Ok(Religion::Hindu),
            "muslim" => Ok(Religion::Muslim),
            "sikh" => Ok(Religion::Sikh),
            "christian" => Ok(Religion::Christian),
            other => Err(crate::Error::Other(format!(
                "unknown religion '{}' (expected hindu, muslim, sikh, or christian)",
                other
            ))),
        }
    }
}

/// Role a user acts under within the app
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Officiant,
    Admin,
}

impl UserRole {
    /// All roles, in onboarding display order
    pub const ALL: [UserRole; 3] = [UserRole::Customer, UserRole::Officiant, UserRole::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Officiant => "officiant",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Officiant => "Officiant",
            UserRole::Admin => "Admin",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Customer => "Book religious ceremonies and find officiants",
            UserRole::Officiant => "Provide religious services and manage bookings",
            UserRole::Admin => "Manage the platform and oversee operations",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "customer" => Ok(UserRole::Customer),
            "officiant" => Ok(UserRole::Officiant),
            "admin" => Ok(UserRole::Admin),
            other => Err(crate::Error::Other(format!(
                "unknown role '{}' (expected customer, officiant, or admin)",
                other
            ))),
        }
    }
}

/// A user profile for the current session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub religion: Option<Religion>,
    pub role: Option<UserRole>,
}

impl User {
    /// An anonymous profile with a fresh random id and nothing selected yet
    pub fn guest() -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: "Guest".to_string(),
            email: None,
            religion: None,
            role: None,
        }
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

/// How an officiant conducts ceremonies
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Online,
    Offline,
    Both,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Online => "online",
            Availability::Offline => "offline",
            Availability::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Online => "Online Only",
            Availability::Offline => "Offline Only",
            Availability::Both => "Online & Offline",
        }
    }
}

/// A ceremony offered through the catalog (e.g., "Nikkah")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Ceremony {
    pub id: String,
    pub name: String,
    pub religion: Religion,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

/// An officiant who can be booked to conduct ceremonies
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Officiant {
    pub id: String,
    pub name: String,
    pub religion: Religion,
    /// Ceremony names this officiant conducts; matched exactly against
    /// `Ceremony::name` when listing officiants for a ceremony
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub experience_years: u32,
    /// Flat fee per ceremony, in minor-free units of `currency`
    pub fee: u32,
    pub currency: String,
    pub availability: Availability,
    pub verified: bool,
    pub image_url: String,
}

// ============================================================================
// Ledger Types
// ============================================================================

/// Lifecycle state of a booking
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Pending and confirmed bookings still have their ceremony ahead of them;
    /// completed and cancelled ones are history
    pub fn is_upcoming(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// Settlement state of a transaction
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Refunded => "refunded",
        }
    }

    /// Only completed transactions count toward money totals
    pub fn is_settled(&self) -> bool {
        matches!(self, TransactionStatus::Completed)
    }
}

/// Direction of money movement
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payment,
    Refund,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Payment => "payment",
            TransactionKind::Refund => "refund",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Payment => "Payment",
            TransactionKind::Refund => "Refund",
        }
    }
}

/// A recorded booking of an officiant for a ceremony
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub officiant_id: String,
    /// Absent when the booking was made from an officiant profile without
    /// choosing a specific ceremony
    pub ceremony_id: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub status: BookingStatus,
    pub amount: u32,
    pub currency: String,
    pub notes: Option<String>,
}

/// A money movement tied to a booking
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub booking_id: String,
    pub amount: u32,
    pub currency: String,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Display symbol for a currency code
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "INR" => "₹",
        "USD" => "$",
        "EUR" => "€",
        _ => code,
    }
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete catalog of ceremonies and officiants
///
/// Both collections preserve authoring order; listings and category menus
/// follow that order unless a sort is requested.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub ceremonies: Vec<Ceremony>,
    pub officiants: Vec<Officiant>,
}

impl Catalog {
    pub fn ceremony(&self, id: &str) -> Option<&Ceremony> {
        self.ceremonies.iter().find(|c| c.id == id)
    }

    pub fn officiant(&self, id: &str) -> Option<&Officiant> {
        self.officiants.iter().find(|o| o.id == id)
    }
}
