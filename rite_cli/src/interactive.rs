//! Interactive session flow: onboarding, browsing, booking, and ledger
//! screens driven from stdin.
//!
//! The screens mirror the subcommand views but thread one mutable session
//! through them, so bookings placed here show up on the ledger screens.

use crate::render::{self, OutputFormat};
use rite_core::*;
use std::io::{self, Write};

/// What a screen asks the main loop to do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Stay,
    Quit,
}

/// Read one trimmed input line; `None` means stdin was closed
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Resolve a 1-based menu choice against a list
fn pick_from<T: Copy>(options: &[T], choice: &str) -> Option<T> {
    choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| options.get(i))
        .copied()
}

fn pick_slot(slots: &[String], choice: &str) -> Option<String> {
    choice
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| slots.get(i))
        .cloned()
}

/// Run the interactive app until the user quits or stdin closes
pub fn run(config: &Config, catalog: &Catalog) -> Result<()> {
    let mut session = Session::new(config.profile.user());

    render::header("Rite", "Religious ceremony booking");
    println!("  Welcome, {}!", session.user().name);

    if session.user().role.is_none() {
        let Some(role) = pick_role()? else {
            return Ok(());
        };
        session.set_role(role);
    }
    if session.user().religion.is_none() {
        let Some(religion) = pick_religion()? else {
            return Ok(());
        };
        session.set_religion(religion);
    }

    loop {
        println!();
        println!("  ─────────────────────────────────────────");
        println!("  1. Browse ceremonies");
        println!("  2. Browse officiants");
        println!("  3. My bookings");
        println!("  4. Transactions");
        println!("  q. Quit");
        let Some(choice) = prompt("> ")? else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => ceremonies_screen(&mut session, catalog, config)?,
            "2" => officiants_screen(&mut session, catalog, config)?,
            "3" => bookings_screen(&mut session, catalog)?,
            "4" => transactions_screen(&session)?,
            "q" | "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("  Unknown option: {}", other);
                Outcome::Stay
            }
        };
        if outcome == Outcome::Quit {
            break;
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

// ============================================================================
// Onboarding
// ============================================================================

fn pick_role() -> Result<Option<UserRole>> {
    render::header("Choose Your Role", "Select how you'd like to use the app");
    for (i, role) in UserRole::ALL.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, role.label(), role.description());
    }
    loop {
        let Some(choice) = prompt("> ")? else {
            return Ok(None);
        };
        if let Some(role) = pick_from(&UserRole::ALL, &choice) {
            return Ok(Some(role));
        }
        if let Ok(role) = choice.parse::<UserRole>() {
            return Ok(Some(role));
        }
        println!("  Enter a number between 1 and {}", UserRole::ALL.len());
    }
}

fn pick_religion() -> Result<Option<Religion>> {
    render::header("Choose Your Religion", "Select your religious preference");
    for (i, religion) in Religion::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, religion.label());
    }
    loop {
        let Some(choice) = prompt("> ")? else {
            return Ok(None);
        };
        if let Some(religion) = pick_from(&Religion::ALL, &choice) {
            return Ok(Some(religion));
        }
        if let Ok(religion) = choice.parse::<Religion>() {
            return Ok(Some(religion));
        }
        println!("  Enter a number between 1 and {}", Religion::ALL.len());
    }
}

// ============================================================================
// Browse Screens
// ============================================================================

fn ceremonies_screen(
    session: &mut Session,
    catalog: &Catalog,
    config: &Config,
) -> Result<Outcome> {
    let Some(religion) = session.user().religion else {
        return Ok(Outcome::Stay);
    };
    let mut query = String::new();
    let mut category: Option<String> = None;

    loop {
        let ceremonies = filter_ceremonies(catalog, religion, &query, category.as_deref());
        render::header(
            &format!("{} Ceremonies", religion.label()),
            "Find the perfect ceremony for your needs",
        );
        if !query.is_empty() {
            println!("  Search: {}", query);
        }
        if let Some(picked) = &category {
            println!("  Category: {}", picked);
        }
        if ceremonies.is_empty() {
            println!("  No ceremonies found");
        }
        for (i, ceremony) in ceremonies.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, ceremony.name, ceremony.category);
        }
        println!();
        println!(
            "  Enter a number for details, 's' to search, 'c' to pick a category, 'b' to go back"
        );
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "s" => {
                let Some(text) = prompt("  Search: ")? else {
                    return Ok(Outcome::Quit);
                };
                query = text;
            }
            "c" => {
                let categories = ceremony_categories(catalog, religion);
                println!("  1. All");
                for (i, name) in categories.iter().enumerate() {
                    println!("  {}. {}", i + 2, name);
                }
                let Some(picked) = prompt("> ")? else {
                    return Ok(Outcome::Quit);
                };
                if let Ok(n) = picked.parse::<usize>() {
                    if n == 1 {
                        category = None;
                    } else if let Some(name) = n.checked_sub(2).and_then(|i| categories.get(i)) {
                        category = Some(name.to_string());
                    }
                }
            }
            "b" | "" => return Ok(Outcome::Stay),
            other => match pick_from(&ceremonies, other) {
                Some(ceremony) => {
                    if ceremony_detail_screen(session, catalog, config, ceremony)? == Outcome::Quit
                    {
                        return Ok(Outcome::Quit);
                    }
                }
                None => println!("  Unknown option: {}", other),
            },
        }
    }
}

fn ceremony_detail_screen(
    session: &mut Session,
    catalog: &Catalog,
    config: &Config,
    ceremony: &Ceremony,
) -> Result<Outcome> {
    let officiants = officiants_for_ceremony(catalog, ceremony);

    render::header(&ceremony.name, &ceremony.description);
    println!("  Category: {}", ceremony.category);
    println!();
    println!("  Available {}:", ceremony.religion.officiant_title());
    if officiants.is_empty() {
        println!("  No officiants available for this ceremony");
    }
    for (i, officiant) in officiants.iter().enumerate() {
        let verified = if officiant.verified { " ✓" } else { "" };
        println!(
            "  {}. {}{} (★ {:.1}, {} yrs, {})",
            i + 1,
            officiant.name,
            verified,
            officiant.rating,
            officiant.experience_years,
            render::format_amount(officiant.fee.into(), &officiant.currency)
        );
    }
    println!();
    println!("  Enter a number to book, 'b' to go back");

    loop {
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "b" | "" => return Ok(Outcome::Stay),
            other => match pick_from(&officiants, other) {
                Some(officiant) => {
                    return book_screen(session, catalog, config, officiant, Some(ceremony))
                }
                None => println!("  Unknown option: {}", other),
            },
        }
    }
}

fn officiants_screen(
    session: &mut Session,
    catalog: &Catalog,
    config: &Config,
) -> Result<Outcome> {
    let Some(religion) = session.user().religion else {
        return Ok(Outcome::Stay);
    };
    let mut query = String::new();
    let mut sort = OfficiantSort::default();

    loop {
        let officiants = list_officiants(catalog, religion, &query, sort);
        render::header(
            religion.officiant_title(),
            "Find experienced religious officiants",
        );
        println!("  Sorted by {}", sort.as_str());
        if !query.is_empty() {
            println!("  Search: {}", query);
        }
        if officiants.is_empty() {
            println!("  No officiants found");
        }
        for (i, officiant) in officiants.iter().enumerate() {
            let verified = if officiant.verified { " ✓" } else { "" };
            println!("  {}. {}{}", i + 1, officiant.name, verified);
            println!(
                "     ★ {:.1} ({} reviews)   {} yrs   {}   {}",
                officiant.rating,
                officiant.review_count,
                officiant.experience_years,
                render::format_amount(officiant.fee.into(), &officiant.currency),
                officiant.availability.label()
            );
        }
        println!();
        println!(
            "  Enter a number for a profile, 's' to search, 'r'/'e'/'f' to sort, 'b' to go back"
        );
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "s" => {
                let Some(text) = prompt("  Search: ")? else {
                    return Ok(Outcome::Quit);
                };
                query = text;
            }
            "r" => sort = OfficiantSort::Rating,
            "e" => sort = OfficiantSort::Experience,
            "f" => sort = OfficiantSort::Fee,
            "b" | "" => return Ok(Outcome::Stay),
            other => match pick_from(&officiants, other) {
                Some(officiant) => {
                    if officiant_profile_screen(session, catalog, config, officiant)?
                        == Outcome::Quit
                    {
                        return Ok(Outcome::Quit);
                    }
                }
                None => println!("  Unknown option: {}", other),
            },
        }
    }
}

fn officiant_profile_screen(
    session: &mut Session,
    catalog: &Catalog,
    config: &Config,
    officiant: &Officiant,
) -> Result<Outcome> {
    render::officiant_profile(officiant, OutputFormat::Table)?;
    println!();
    println!("  'y' to book this officiant, 'b' to go back");
    loop {
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "y" | "yes" | "book" => return book_screen(session, catalog, config, officiant, None),
            "b" | "n" | "no" | "" => return Ok(Outcome::Stay),
            other => println!("  Unknown option: {}", other),
        }
    }
}

// ============================================================================
// Booking
// ============================================================================

fn book_screen(
    session: &mut Session,
    catalog: &Catalog,
    config: &Config,
    officiant: &Officiant,
    ceremony: Option<&Ceremony>,
) -> Result<Outcome> {
    render::header("Book Ceremony", "Select date and time");
    println!("  Officiant: {}", officiant.name);
    if let Some(ceremony) = ceremony {
        println!("  Ceremony: {}", ceremony.name);
    }
    println!(
        "  Fee: {}",
        render::format_amount(officiant.fee.into(), &officiant.currency)
    );
    println!();

    let date = loop {
        let Some(text) = prompt("  Date (YYYY-MM-DD): ")? else {
            return Ok(Outcome::Quit);
        };
        if text.is_empty() {
            println!("  Please select date and time");
            continue;
        }
        break text;
    };

    println!();
    for (i, slot) in config.booking.time_slots.iter().enumerate() {
        println!("  {}. {}", i + 1, slot);
    }
    let time = loop {
        let Some(choice) = prompt("  Time slot: ")? else {
            return Ok(Outcome::Quit);
        };
        match pick_slot(&config.booking.time_slots, &choice) {
            Some(slot) => break slot,
            None => println!("  Please select date and time"),
        }
    };

    let Some(notes) = prompt("  Notes (optional): ")? else {
        return Ok(Outcome::Quit);
    };
    let notes = if notes.is_empty() { None } else { Some(notes) };

    let request = BookingRequest {
        officiant_id: officiant.id.clone(),
        ceremony_id: ceremony.map(|c| c.id.clone()),
        date,
        time,
        notes,
    };
    match place_booking(session, catalog, &request) {
        Ok(placed) => {
            render::confirmation(&placed, catalog);
            Ok(Outcome::Stay)
        }
        Err(Error::Booking(message)) => {
            println!("  {}", message);
            Ok(Outcome::Stay)
        }
        Err(err) => Err(err),
    }
}

// ============================================================================
// Ledger Screens
// ============================================================================

fn bookings_screen(session: &mut Session, catalog: &Catalog) -> Result<Outcome> {
    let mut tab = BookingTab::default();

    loop {
        render::header("My Bookings", "Manage your ceremony bookings");
        println!("  Tab: {}", tab.as_str());
        println!();

        // Owned ids so the list borrow ends before any status change below
        let ids: Vec<String> = {
            let bookings = bookings_in_tab(session.bookings(), tab);
            if bookings.is_empty() {
                match tab {
                    BookingTab::Upcoming => println!("  No upcoming bookings"),
                    BookingTab::Completed => println!("  No completed bookings"),
                }
            }
            for (i, booking) in bookings.iter().enumerate() {
                println!(
                    "  {}. {} with {} [{}]",
                    i + 1,
                    render::ceremony_name(catalog, booking.ceremony_id.as_deref()),
                    render::officiant_name(catalog, &booking.officiant_id),
                    booking.status.label()
                );
                println!(
                    "     {} at {}   {}",
                    booking.date.format("%a, %b %-d, %Y"),
                    booking.time,
                    render::format_amount(booking.amount.into(), &booking.currency)
                );
            }
            bookings.iter().map(|b| b.id.clone()).collect()
        };

        println!();
        println!("  Enter a number to manage a booking, 'u'/'c' to switch tabs, 'b' to go back");
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "u" => tab = BookingTab::Upcoming,
            "c" => tab = BookingTab::Completed,
            "b" | "" => return Ok(Outcome::Stay),
            other => {
                let picked = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| ids.get(i));
                match picked {
                    Some(id) => {
                        let id = id.clone();
                        if manage_booking_screen(session, catalog, &id)? == Outcome::Quit {
                            return Ok(Outcome::Quit);
                        }
                    }
                    None => println!("  Unknown option: {}", other),
                }
            }
        }
    }
}

fn manage_booking_screen(
    session: &mut Session,
    catalog: &Catalog,
    booking_id: &str,
) -> Result<Outcome> {
    let status = {
        let Some(booking) = session.booking(booking_id) else {
            println!("  Booking not found");
            return Ok(Outcome::Stay);
        };
        println!();
        println!(
            "  {} with {}",
            render::ceremony_name(catalog, booking.ceremony_id.as_deref()),
            render::officiant_name(catalog, &booking.officiant_id)
        );
        println!(
            "  {} at {}   [{}]   {}",
            booking.date.format("%a, %b %-d, %Y"),
            booking.time,
            booking.status.label(),
            render::format_amount(booking.amount.into(), &booking.currency)
        );
        if let Some(notes) = &booking.notes {
            println!("  Notes: {}", notes);
        }
        booking.status
    };

    match status {
        BookingStatus::Pending => {
            println!();
            println!("  'c' to confirm, 'x' to cancel, 'b' to go back");
            loop {
                let Some(choice) = prompt("> ")? else {
                    return Ok(Outcome::Quit);
                };
                match choice.as_str() {
                    "c" => {
                        let booking = confirm_booking(session, booking_id)?;
                        println!("  ✓ Booking confirmed ({})", booking.id);
                        return Ok(Outcome::Stay);
                    }
                    "x" => {
                        let cancelled = cancel_booking(session, booking_id)?;
                        println!("  ✓ Booking cancelled ({})", cancelled.booking.id);
                        if let Some(refund) = &cancelled.refund {
                            println!(
                                "  ✓ Refund of {} recorded",
                                render::format_amount(refund.amount.into(), &refund.currency)
                            );
                        }
                        return Ok(Outcome::Stay);
                    }
                    "b" | "" => return Ok(Outcome::Stay),
                    other => println!("  Unknown option: {}", other),
                }
            }
        }
        BookingStatus::Confirmed => {
            println!();
            println!("  'd' to mark completed, 'b' to go back");
            loop {
                let Some(choice) = prompt("> ")? else {
                    return Ok(Outcome::Quit);
                };
                match choice.as_str() {
                    "d" => {
                        let booking = complete_booking(session, booking_id)?;
                        println!("  ✓ Booking completed ({})", booking.id);
                        return Ok(Outcome::Stay);
                    }
                    "b" | "" => return Ok(Outcome::Stay),
                    other => println!("  Unknown option: {}", other),
                }
            }
        }
        BookingStatus::Completed | BookingStatus::Cancelled => Ok(Outcome::Stay),
    }
}

fn transactions_screen(session: &Session) -> Result<Outcome> {
    let mut filter = TransactionFilter::default();

    loop {
        render::header("Transactions", "Track your payments and refunds");
        println!("  Filter: {}", filter.as_str());
        println!();

        let transactions = filter_transactions(session.transactions(), filter);
        render::transactions_table(&transactions, filter);

        println!();
        println!(
            "  Total Spent: {}",
            render::format_amount(net_total(session.transactions()), "INR")
        );
        println!();
        println!("  'a'/'p'/'r' to filter, 'b' to go back");
        let Some(choice) = prompt("> ")? else {
            return Ok(Outcome::Quit);
        };
        match choice.as_str() {
            "a" => filter = TransactionFilter::All,
            "p" => filter = TransactionFilter::Payment,
            "r" => filter = TransactionFilter::Refund,
            "b" | "" => return Ok(Outcome::Stay),
            other => println!("  Unknown option: {}", other),
        }
    }
}
