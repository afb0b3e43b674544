use clap::{Parser, Subcommand};
use rite_core::*;
use std::path::PathBuf;

mod interactive;
mod render;

use render::OutputFormat;

#[derive(Parser)]
#[command(name = "rite")]
#[command(about = "Religious ceremony booking system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse ceremonies for a religion
    Ceremonies {
        /// Religion (hindu, muslim, sikh, christian); defaults to the configured profile
        #[arg(long)]
        religion: Option<String>,

        /// Case-insensitive search over name and description
        #[arg(long, default_value = "")]
        query: String,

        /// Exact category filter (e.g. Wedding, Festival)
        #[arg(long)]
        category: Option<String>,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show one ceremony with the officiants who conduct it
    Ceremony {
        /// Ceremony id, e.g. hindu-marriage
        id: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Browse officiants for a religion
    Officiants {
        /// Religion (hindu, muslim, sikh, christian); defaults to the configured profile
        #[arg(long)]
        religion: Option<String>,

        /// Case-insensitive search over name, specialties, and languages
        #[arg(long, default_value = "")]
        query: String,

        /// Sort key (rating, experience, fee)
        #[arg(long, default_value = "rating")]
        sort: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show one officiant's profile
    Officiant {
        /// Officiant id, e.g. pandit-rajesh-sharma
        id: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Book an officiant and record the payment
    Book {
        /// Officiant id
        #[arg(long)]
        officiant: String,

        /// Ceremony id (optional)
        #[arg(long)]
        ceremony: Option<String>,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Time slot, e.g. "10:00 AM"
        #[arg(long)]
        time: String,

        /// Notes for the officiant
        #[arg(long)]
        notes: Option<String>,
    },

    /// List this session's bookings
    Bookings {
        /// Tab (upcoming, completed)
        #[arg(long, default_value = "upcoming")]
        tab: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List this session's transactions
    Transactions {
        /// Kind filter (all, payment, refund)
        #[arg(long, default_value = "all")]
        filter: String,

        /// Output format (table, json, csv)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        rite_core::logging::init_with_level("debug");
    } else {
        rite_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }
    tracing::debug!(
        "Catalog ready: {} ceremonies, {} officiants",
        catalog.ceremonies.len(),
        catalog.officiants.len()
    );

    match cli.command {
        Some(Commands::Ceremonies {
            religion,
            query,
            category,
            format,
        }) => cmd_ceremonies(
            catalog,
            &config,
            religion.as_deref(),
            &query,
            category.as_deref(),
            &format,
        ),
        Some(Commands::Ceremony { id, format }) => cmd_ceremony(catalog, &id, &format),
        Some(Commands::Officiants {
            religion,
            query,
            sort,
            format,
        }) => cmd_officiants(catalog, &config, religion.as_deref(), &query, &sort, &format),
        Some(Commands::Officiant { id, format }) => cmd_officiant(catalog, &id, &format),
        Some(Commands::Book {
            officiant,
            ceremony,
            date,
            time,
            notes,
        }) => cmd_book(
            catalog,
            &config,
            &officiant,
            ceremony.as_deref(),
            &date,
            &time,
            notes,
        ),
        Some(Commands::Bookings { tab, format }) => cmd_bookings(catalog, &config, &tab, &format),
        Some(Commands::Transactions { filter, format }) => {
            cmd_transactions(&config, &filter, &format)
        }
        None => interactive::run(&config, catalog),
    }
}

/// Religion comes from the flag when given, else from the configured profile
fn resolve_religion(arg: Option<&str>, config: &Config) -> Result<Religion> {
    match arg {
        Some(value) => value.parse(),
        None => config.profile.religion.ok_or_else(|| {
            Error::Config(
                "no religion selected (pass --religion or set profile.religion in config)"
                    .to_string(),
            )
        }),
    }
}

fn cmd_ceremonies(
    catalog: &Catalog,
    config: &Config,
    religion: Option<&str>,
    query: &str,
    category: Option<&str>,
    format: &str,
) -> Result<()> {
    let religion = resolve_religion(religion, config)?;
    let format: OutputFormat = format.parse()?;
    let ceremonies = filter_ceremonies(catalog, religion, query, category);

    match format {
        OutputFormat::Table => {
            render::header(
                &format!("{} Ceremonies", religion.label()),
                "Find the perfect ceremony for your needs",
            );
            render::ceremonies_table(&ceremonies);
            let categories = ceremony_categories(catalog, religion);
            println!("  Categories: All, {}", categories.join(", "));
        }
        OutputFormat::Json => render::json(&ceremonies)?,
        OutputFormat::Csv => render::ceremonies_csv(&ceremonies)?,
    }
    Ok(())
}

fn cmd_ceremony(catalog: &Catalog, id: &str, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let ceremony = match catalog.ceremony(id) {
        Some(ceremony) => ceremony,
        None => {
            println!("Ceremony not found");
            return Ok(());
        }
    };
    let officiants = officiants_for_ceremony(catalog, ceremony);
    render::ceremony_details(ceremony, &officiants, format)
}

fn cmd_officiants(
    catalog: &Catalog,
    config: &Config,
    religion: Option<&str>,
    query: &str,
    sort: &str,
    format: &str,
) -> Result<()> {
    let religion = resolve_religion(religion, config)?;
    let format: OutputFormat = format.parse()?;
    let sort: OfficiantSort = sort.parse().unwrap_or_else(|_| {
        eprintln!("Unknown sort key: {}. Using rating.", sort);
        OfficiantSort::default()
    });
    let officiants = list_officiants(catalog, religion, query, sort);

    match format {
        OutputFormat::Table => {
            render::header(
                religion.officiant_title(),
                "Find experienced religious officiants",
            );
            render::officiants_table(&officiants);
        }
        OutputFormat::Json => render::json(&officiants)?,
        OutputFormat::Csv => render::officiants_csv(&officiants)?,
    }
    Ok(())
}

fn cmd_officiant(catalog: &Catalog, id: &str, format: &str) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let officiant = match catalog.officiant(id) {
        Some(officiant) => officiant,
        None => {
            println!("Officiant not found");
            return Ok(());
        }
    };
    render::officiant_profile(officiant, format)
}

fn cmd_book(
    catalog: &Catalog,
    config: &Config,
    officiant_id: &str,
    ceremony_id: Option<&str>,
    date: &str,
    time: &str,
    notes: Option<String>,
) -> Result<()> {
    // Look the references up first so a bad id renders the same fallback
    // line the browse screens use instead of failing the process
    if catalog.officiant(officiant_id).is_none() {
        println!("Officiant not found");
        return Ok(());
    }
    if let Some(id) = ceremony_id {
        if catalog.ceremony(id).is_none() {
            println!("Ceremony not found");
            return Ok(());
        }
    }

    let mut session = Session::new(config.profile.user());
    let request = BookingRequest {
        officiant_id: officiant_id.to_string(),
        ceremony_id: ceremony_id.map(str::to_string),
        date: date.to_string(),
        time: time.to_string(),
        notes,
    };
    let placed = place_booking(&mut session, catalog, &request)?;
    render::confirmation(&placed, catalog);
    Ok(())
}

fn cmd_bookings(catalog: &Catalog, config: &Config, tab: &str, format: &str) -> Result<()> {
    let tab: BookingTab = tab.parse()?;
    let format: OutputFormat = format.parse()?;
    let session = Session::new(config.profile.user());
    let bookings = bookings_in_tab(session.bookings(), tab);

    match format {
        OutputFormat::Table => {
            render::header("My Bookings", "Manage your ceremony bookings");
            render::bookings_table(&bookings, catalog, tab);
        }
        OutputFormat::Json => render::json(&bookings)?,
        OutputFormat::Csv => render::bookings_csv(&bookings)?,
    }
    Ok(())
}

fn cmd_transactions(config: &Config, filter: &str, format: &str) -> Result<()> {
    let filter: TransactionFilter = filter.parse()?;
    let format: OutputFormat = format.parse()?;
    let session = Session::new(config.profile.user());
    let transactions = filter_transactions(session.transactions(), filter);

    match format {
        OutputFormat::Table => {
            render::header("Transactions", "Track your payments and refunds");
            render::transactions_table(&transactions, filter);
            println!();
            println!(
                "  Total Spent: {}",
                render::format_amount(net_total(session.transactions()), "INR")
            );
        }
        OutputFormat::Json => render::json(&transactions)?,
        OutputFormat::Csv => render::transactions_csv(&transactions)?,
    }
    Ok(())
}
