use anyhow::{Context, Result};
use catalog::{Category, Extension};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{FilterSpec, PageItem, PageResult};
use services::Latency;
use std::path::PathBuf;
use storefront::{SellerSubmission, Storefront};
use suggest::{LengthPreference, SuggestionRequest, DEFAULT_SUGGESTION_COUNT};

/// NameFast - Premium Domain Marketplace
#[derive(Parser)]
#[command(name = "namefast")]
#[command(about = "Browse, buy, and sell premium domain names", long_about = None)]
struct Cli {
    /// Path to the seed data directory
    #[arg(short, long, default_value = "data/seed")]
    data_dir: PathBuf,

    /// Skip the simulated backend latency
    #[arg(long)]
    no_delay: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse listings with filters, sorting, and pagination
    Browse {
        /// Substring matched against name or description
        #[arg(long)]
        search: Option<String>,

        /// Category ("Technology", "Real Estate", ...)
        #[arg(long)]
        category: Option<String>,

        /// Extension (".com", ".io", ...)
        #[arg(long)]
        extension: Option<String>,

        /// Inclusive minimum price
        #[arg(long)]
        min_price: Option<String>,

        /// Inclusive maximum price
        #[arg(long)]
        max_price: Option<String>,

        /// Inclusive minimum name length
        #[arg(long)]
        min_length: Option<String>,

        /// Inclusive maximum name length
        #[arg(long)]
        max_length: Option<String>,

        /// Sort key: newest, oldest, price-low, price-high, name
        #[arg(long, default_value = "newest")]
        sort: String,

        /// 1-indexed page to show
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show one listing in detail
    Show {
        /// Listing id
        #[arg(long)]
        id: u32,
    },

    /// Get name suggestions from the assistant
    Suggest {
        /// Comma- or space-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,

        /// Business type ("Startup", "E-commerce", ...)
        #[arg(long, default_value = "")]
        business_type: String,

        /// Industry category
        #[arg(long)]
        industry: Option<String>,

        /// Preferred tone ("Professional", "Tech-focused", ...)
        #[arg(long)]
        tone: Option<String>,

        /// Preferred length: short, medium, long, any
        #[arg(long, default_value = "any")]
        length: String,

        /// Preferred extension
        #[arg(long)]
        extension: Option<String>,

        /// Number of suggestions
        #[arg(long, default_value_t = DEFAULT_SUGGESTION_COUNT)]
        limit: usize,
    },

    /// Submit a domain for listing (queued for review)
    Submit {
        /// Domain name without extension
        #[arg(long)]
        name: String,

        /// Asking price in whole dollars
        #[arg(long)]
        price: u64,

        /// Category
        #[arg(long)]
        category: String,

        /// Extension
        #[arg(long, default_value = ".com")]
        extension: String,

        /// Listing description
        #[arg(long)]
        description: String,

        /// Seller identifier
        #[arg(long, default_value = "seller-123")]
        seller: String,

        /// Confirm you own this domain
        #[arg(long)]
        confirm_ownership: bool,

        /// Accept the marketplace terms
        #[arg(long)]
        accept_terms: bool,
    },

    /// Show the admin overview (review queue, purchases, revenue)
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let latency = if cli.no_delay {
        Latency::none()
    } else {
        Latency::simulated()
    };
    let storefront = Storefront::from_seed_dir(&cli.data_dir, latency)
        .with_context(|| format!("Failed to load seed data from {}", cli.data_dir.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            search,
            category,
            extension,
            min_price,
            max_price,
            min_length,
            max_length,
            sort,
            page,
        } => {
            let spec = FilterSpec {
                search: search.unwrap_or_default(),
                category: category.unwrap_or_default(),
                extension: extension.unwrap_or_default(),
                min_price: min_price.unwrap_or_default(),
                max_price: max_price.unwrap_or_default(),
                min_length: min_length.unwrap_or_default(),
                max_length: max_length.unwrap_or_default(),
                sort_by: sort,
            };
            handle_browse(&storefront, &spec, page.max(1)).await?
        }
        Commands::Show { id } => handle_show(&storefront, id).await?,
        Commands::Suggest {
            keywords,
            business_type,
            industry,
            tone,
            length,
            extension,
            limit,
        } => {
            let request = SuggestionRequest {
                business_type,
                keywords,
                industry: parse_optional::<Category>(industry, "industry")?,
                tone: parse_optional(tone, "tone")?,
                length: LengthPreference::parse(&length),
                extension: parse_optional::<Extension>(extension, "extension")?,
            };
            handle_suggest(&storefront, &request, limit).await?
        }
        Commands::Submit {
            name,
            price,
            category,
            extension,
            description,
            seller,
            confirm_ownership,
            accept_terms,
        } => {
            let submission = SellerSubmission {
                name,
                price,
                category: Some(
                    category
                        .parse::<Category>()
                        .context("Unknown category")?,
                ),
                extension: extension
                    .parse::<Extension>()
                    .context("Unknown extension")?,
                description,
                seller_id: seller,
                ownership_confirmed: confirm_ownership,
                terms_accepted: accept_terms,
            };
            handle_submit(&storefront, submission).await?
        }
        Commands::Stats => handle_stats(&storefront).await?,
    }

    Ok(())
}

/// Parse an optional flag into an optional enum value.
fn parse_optional<T>(raw: Option<String>, what: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => Ok(Some(
            value
                .parse::<T>()
                .with_context(|| format!("Unknown {what}: {value}"))?,
        )),
        None => Ok(None),
    }
}

/// Handle the 'browse' command
async fn handle_browse(storefront: &Storefront, spec: &FilterSpec, page: usize) -> Result<()> {
    let result = storefront.browse(spec, page).await?;

    println!("{}", "Browse Premium Domains".bold().blue());
    if result.total_matches == 0 {
        println!("No domains match your criteria. Try adjusting your filters.");
        return Ok(());
    }

    for listing in &result.items {
        println!(
            "{:>4}. {} - {} [{}] {}",
            listing.id.to_string().green(),
            listing.name.bold(),
            format!("${}", listing.price).cyan(),
            listing.category,
            listing.status.label().dimmed()
        );
    }

    println!(
        "Showing {}-{} of {} domains",
        result.start_record, result.end_record, result.total_matches
    );
    if result.total_pages > 1 {
        println!("{}", render_window(&result));
    }
    Ok(())
}

/// Render the pagination strip, highlighting the current page.
fn render_window(result: &PageResult) -> String {
    result
        .window
        .iter()
        .map(|item| match item {
            PageItem::Page(p) if *p == result.page => format!("[{p}]"),
            PageItem::Page(p) => p.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Handle the 'show' command
async fn handle_show(storefront: &Storefront, id: u32) -> Result<()> {
    let listing = storefront.listing(id).await?;

    println!("{}", listing.name.bold().blue());
    println!("{}Price: ${}", "• ".green(), listing.price);
    println!("{}Category: {}", "• ".green(), listing.category);
    println!("{}Extension: {}", "• ".green(), listing.extension);
    println!("{}Status: {}", "• ".green(), listing.status.label());
    println!("{}Seller: {}", "• ".cyan(), listing.seller_id);
    println!("{}", listing.description);
    Ok(())
}

/// Handle the 'suggest' command
async fn handle_suggest(
    storefront: &Storefront,
    request: &SuggestionRequest,
    limit: usize,
) -> Result<()> {
    let suggestions = storefront.suggest(request, limit).await?;

    println!("{}", "AI Domain Assistant".bold().blue());
    for (i, suggestion) in suggestions.iter().enumerate() {
        let availability = if suggestion.available {
            "available".green()
        } else {
            "taken".red()
        };
        println!(
            "{:>2}. {} - ${} (score {}, {})",
            (i + 1).to_string().green(),
            suggestion.name.bold(),
            suggestion.price,
            suggestion.score,
            availability
        );
    }
    Ok(())
}

/// Handle the 'submit' command
async fn handle_submit(storefront: &Storefront, submission: SellerSubmission) -> Result<()> {
    match storefront.submit_listing(submission).await {
        Ok(listing) => {
            println!(
                "{} Submitted {} for review (id {}, {})",
                "✓".green(),
                listing.name.bold(),
                listing.id,
                listing.status.label()
            );
            Ok(())
        }
        Err(storefront::StorefrontError::Validation(errors)) => {
            println!("{}", "Please fix the form errors:".red().bold());
            for error in errors {
                println!("  - {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
        Err(other) => Err(other.into()),
    }
}

/// Handle the 'stats' command
async fn handle_stats(storefront: &Storefront) -> Result<()> {
    let overview = storefront.admin_overview().await?;

    println!("{}", "Admin Overview".bold().blue());
    println!(
        "{}Pending review: {}",
        "• ".cyan(),
        overview.pending_listings.len()
    );
    for listing in &overview.pending_listings {
        println!("    {} - ${} ({})", listing.name, listing.price, listing.seller_id);
    }
    println!("{}Purchases: {}", "• ".cyan(), overview.purchases.len());
    println!(
        "{}Transfers in progress: {}",
        "• ".cyan(),
        overview.transfers_in_progress
    );
    println!(
        "{}Total revenue: {}",
        "• ".cyan(),
        format!("${}", overview.total_revenue).bold()
    );
    Ok(())
}
