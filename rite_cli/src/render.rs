//! Terminal rendering for catalog and ledger views.
//!
//! Table output is for humans; json and csv are for piping into other
//! tools. CSV rows flatten list fields into `;`-joined cells.

use rite_core::*;
use serde::Serialize;
use std::io;

/// How a listing is written to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::Other(format!(
                "unknown output format '{}' (expected table, json, or csv)",
                other
            ))),
        }
    }
}

/// Boxed screen title with an optional subtitle line
pub fn header(title: &str, subtitle: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    if !subtitle.is_empty() {
        println!("  {}", subtitle);
    }
    println!();
}

/// Format an amount with its currency symbol and thousands separators
pub fn format_amount(amount: i64, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    if amount < 0 {
        format!("-{}{}", symbol, group_thousands(amount.unsigned_abs()))
    } else {
        format!("{}{}", symbol, group_thousands(amount as u64))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Officiant display name, falling back to the raw id
pub fn officiant_name<'a>(catalog: &'a Catalog, id: &'a str) -> &'a str {
    catalog.officiant(id).map(|o| o.name.as_str()).unwrap_or(id)
}

/// Ceremony display name for an optional reference
pub fn ceremony_name<'a>(catalog: &'a Catalog, id: Option<&'a str>) -> &'a str {
    id.and_then(|id| catalog.ceremony(id))
        .map(|c| c.name.as_str())
        .unwrap_or("Ceremony")
}

/// Write any serializable view as pretty JSON
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::Other(format!("JSON error: {}", e)))?;
    println!("{}", text);
    Ok(())
}

// ============================================================================
// Tables
// ============================================================================

pub fn ceremonies_table(ceremonies: &[&Ceremony]) {
    if ceremonies.is_empty() {
        println!("  No ceremonies found");
        println!();
        return;
    }
    for ceremony in ceremonies {
        println!(
            "  {:<22} {:<18} {:<10} {}",
            ceremony.id, ceremony.name, ceremony.category, ceremony.description
        );
    }
    println!();
    println!("  {} ceremonies", ceremonies.len());
}

pub fn officiants_table(officiants: &[&Officiant]) {
    if officiants.is_empty() {
        println!("  No officiants found");
        println!();
        return;
    }
    for officiant in officiants {
        let verified = if officiant.verified { " ✓" } else { "" };
        println!("  {:<26} {}{}", officiant.id, officiant.name, verified);
        println!(
            "    ★ {:.1} ({} reviews)   {} yrs   {}   {}",
            officiant.rating,
            officiant.review_count,
            officiant.experience_years,
            format_amount(officiant.fee.into(), &officiant.currency),
            officiant.availability.label()
        );
    }
    println!();
    println!("  {} officiants", officiants.len());
}

pub fn ceremony_details(
    ceremony: &Ceremony,
    officiants: &[&Officiant],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            header(&ceremony.name, &ceremony.description);
            println!("  Religion: {}", ceremony.religion.label());
            println!("  Category: {}", ceremony.category);
            println!();
            println!("  Available {}:", ceremony.religion.officiant_title());
            if officiants.is_empty() {
                println!("  No officiants available for this ceremony");
            }
            for officiant in officiants {
                let verified = if officiant.verified { " ✓" } else { "" };
                println!(
                    "  → {}{} (★ {:.1}, {} yrs, {})",
                    officiant.name,
                    verified,
                    officiant.rating,
                    officiant.experience_years,
                    format_amount(officiant.fee.into(), &officiant.currency)
                );
            }
            Ok(())
        }
        OutputFormat::Json => json(&serde_json::json!({
            "ceremony": ceremony,
            "officiants": officiants,
        })),
        OutputFormat::Csv => officiants_csv(officiants),
    }
}

pub fn officiant_profile(officiant: &Officiant, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            header(&officiant.name, "");
            println!("  Religion: {}", officiant.religion.label());
            println!(
                "  Rating: ★ {:.1} ({} reviews)",
                officiant.rating, officiant.review_count
            );
            println!("  Experience: {} years", officiant.experience_years);
            println!("  Specialties: {}", officiant.specialties.join(", "));
            println!("  Languages: {}", officiant.languages.join(", "));
            println!("  Availability: {}", officiant.availability.label());
            if officiant.verified {
                println!("  Verified: ✓");
            }
            println!();
            println!(
                "  Fee: {}",
                format_amount(officiant.fee.into(), &officiant.currency)
            );
            Ok(())
        }
        OutputFormat::Json => json(officiant),
        OutputFormat::Csv => write_csv(std::iter::once(OfficiantRow::from(officiant))),
    }
}

pub fn bookings_table(bookings: &[&Booking], catalog: &Catalog, tab: BookingTab) {
    if bookings.is_empty() {
        match tab {
            BookingTab::Upcoming => println!("  No upcoming bookings"),
            BookingTab::Completed => println!("  No completed bookings"),
        }
        return;
    }
    for booking in bookings {
        println!(
            "  {:<18} {} with {}",
            booking.id,
            ceremony_name(catalog, booking.ceremony_id.as_deref()),
            officiant_name(catalog, &booking.officiant_id)
        );
        println!(
            "    {} at {}   [{}]   {}",
            booking.date.format("%a, %b %-d, %Y"),
            booking.time,
            booking.status.label(),
            format_amount(booking.amount.into(), &booking.currency)
        );
        if let Some(notes) = &booking.notes {
            println!("    Notes: {}", notes);
        }
    }
}

pub fn transactions_table(transactions: &[&Transaction], filter: TransactionFilter) {
    if transactions.is_empty() {
        match filter {
            TransactionFilter::All => println!("  No transactions yet"),
            _ => println!("  No {} transactions", filter.as_str()),
        }
        return;
    }
    for transaction in transactions {
        let sign = match transaction.kind {
            TransactionKind::Payment => "-",
            TransactionKind::Refund => "+",
        };
        println!(
            "  {:<22} {:<8} {}{}   {}   {}",
            transaction.id,
            transaction.kind.label(),
            sign,
            format_amount(transaction.amount.into(), &transaction.currency),
            transaction.status.as_str(),
            transaction.date.format("%a, %b %-d, %Y, %I:%M %p")
        );
        println!("    Booking: {}", transaction.booking_id);
    }
}

/// Post-booking confirmation card
pub fn confirmation(placed: &PlacedBooking, catalog: &Catalog) {
    let booking = &placed.booking;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ✓ Booking Confirmed!");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Your ceremony booking has been successfully confirmed");
    println!();
    println!("  Booking ID: {}", booking.id);
    if let Some(ceremony) = booking
        .ceremony_id
        .as_deref()
        .and_then(|id| catalog.ceremony(id))
    {
        println!("  Ceremony: {}", ceremony.name);
    }
    println!(
        "  Officiant: {}",
        officiant_name(catalog, &booking.officiant_id)
    );
    println!("  Date: {}", booking.date.format("%A, %B %-d, %Y"));
    println!("  Time: {}", booking.time);
    println!("  Status: {}", booking.status.as_str().to_uppercase());
    println!(
        "  Amount Paid: {}",
        format_amount(booking.amount.into(), &booking.currency)
    );
    println!(
        "  Payment: {} ({})",
        placed.payment.id,
        placed.payment.status.as_str()
    );
    println!();
    println!("  ℹ The officiant will confirm your booking within 24 hours");
}

// ============================================================================
// CSV Rows
// ============================================================================

#[derive(Debug, Serialize)]
struct CeremonyRow<'a> {
    id: &'a str,
    name: &'a str,
    religion: &'a str,
    category: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Ceremony> for CeremonyRow<'a> {
    fn from(ceremony: &'a Ceremony) -> Self {
        CeremonyRow {
            id: &ceremony.id,
            name: &ceremony.name,
            religion: ceremony.religion.as_str(),
            category: &ceremony.category,
            description: &ceremony.description,
        }
    }
}

#[derive(Debug, Serialize)]
struct OfficiantRow<'a> {
    id: &'a str,
    name: &'a str,
    religion: &'a str,
    specialties: String,
    languages: String,
    rating: f32,
    review_count: u32,
    experience_years: u32,
    fee: u32,
    currency: &'a str,
    availability: &'a str,
    verified: bool,
}

impl<'a> From<&'a Officiant> for OfficiantRow<'a> {
    fn from(officiant: &'a Officiant) -> Self {
        OfficiantRow {
            id: &officiant.id,
            name: &officiant.name,
            religion: officiant.religion.as_str(),
            specialties: officiant.specialties.join("; "),
            languages: officiant.languages.join("; "),
            rating: officiant.rating,
            review_count: officiant.review_count,
            experience_years: officiant.experience_years,
            fee: officiant.fee,
            currency: &officiant.currency,
            availability: officiant.availability.as_str(),
            verified: officiant.verified,
        }
    }
}

#[derive(Debug, Serialize)]
struct BookingRow<'a> {
    id: &'a str,
    customer_id: &'a str,
    officiant_id: &'a str,
    ceremony_id: &'a str,
    date: String,
    time: &'a str,
    status: &'a str,
    amount: u32,
    currency: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a Booking> for BookingRow<'a> {
    fn from(booking: &'a Booking) -> Self {
        BookingRow {
            id: &booking.id,
            customer_id: &booking.customer_id,
            officiant_id: &booking.officiant_id,
            ceremony_id: booking.ceremony_id.as_deref().unwrap_or(""),
            date: booking.date.to_string(),
            time: &booking.time,
            status: booking.status.as_str(),
            amount: booking.amount,
            currency: &booking.currency,
            notes: booking.notes.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    id: &'a str,
    booking_id: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    amount: u32,
    currency: &'a str,
    status: &'a str,
    date: String,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        TransactionRow {
            id: &transaction.id,
            booking_id: &transaction.booking_id,
            kind: transaction.kind.as_str(),
            amount: transaction.amount,
            currency: &transaction.currency,
            status: transaction.status.as_str(),
            date: transaction.date.to_rfc3339(),
        }
    }
}

fn write_csv<R: Serialize>(rows: impl Iterator<Item = R>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::Other(format!("CSV error: {}", e)))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn ceremonies_csv(ceremonies: &[&Ceremony]) -> Result<()> {
    write_csv(ceremonies.iter().map(|c| CeremonyRow::from(*c)))
}

pub fn officiants_csv(officiants: &[&Officiant]) -> Result<()> {
    write_csv(officiants.iter().map(|o| OfficiantRow::from(*o)))
}

pub fn bookings_csv(bookings: &[&Booking]) -> Result<()> {
    write_csv(bookings.iter().map(|b| BookingRow::from(*b)))
}

pub fn transactions_csv(transactions: &[&Transaction]) -> Result<()> {
    write_csv(transactions.iter().map(|t| TransactionRow::from(*t)))
}
