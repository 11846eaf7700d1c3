//! Storefront CLI - browse, shop and manage a seller catalog from the terminal
//!
//! Every subcommand maps onto one call of `storefront-api-client` and prints
//! the server's response body.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::process::ExitCode;
use std::sync::Arc;
use storefront_api_client::credentials::StaticToken;
use storefront_api_client::{ClientConfig, FileTokenStore, StorefrontClient};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{account, auth, cart, catalog, orders, payments, seller, vouchers};
use storefront_api_client::endpoints::PaymentGateway;

/// Command-line client for the Storefront API
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// API base URL
    #[arg(long, global = true, env = "STOREFRONT_API_URL")]
    api_url: Option<String>,

    /// Use this bearer token instead of the stored one
    #[arg(long, global = true, env = "STOREFRONT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// How responses are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Heading plus pretty-printed body
    Text,
    /// Body only, as JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse products and reviews
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },

    /// List product categories
    Categories,

    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// List or place orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },

    /// Start a payment or check its status
    Pay {
        #[command(subcommand)]
        action: PayAction,
    },

    /// Manage your seller catalog
    Seller {
        #[command(subcommand)]
        action: SellerAction,
    },

    /// Buy or list vouchers
    Vouchers {
        #[command(subcommand)]
        action: VouchersAction,
    },

    /// Log in and store the returned tokens
    Login {
        /// Registered phone number
        phone_number: String,

        /// Account password
        #[arg(short, long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored tokens
    Logout,

    /// Create an account
    Signup {
        /// Account fields as JSON, or @path to a JSON file
        #[arg(short, long)]
        data: String,
    },

    /// Show or edit the logged-in user's profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Swap the stored refresh token for a new access token
    Refresh,

    /// Read notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationsAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products
    List {
        /// Search product titles
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category slug
        #[arg(short, long)]
        category: Option<String>,

        /// Sort field, e.g. -created_at
        #[arg(short, long)]
        ordering: Option<String>,

        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Show one product
    Get {
        /// Product slug
        slug: String,
    },

    /// List reviews of a product
    Reviews {
        /// Product slug
        slug: String,
    },

    /// Review a product
    Review {
        /// Product slug
        slug: String,

        /// Star rating
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the profile (the default)
    Show,

    /// Change profile fields
    Update {
        /// Changed fields as JSON, or @path to a JSON file
        #[arg(short, long)]
        data: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,

    /// Add a product
    Add {
        /// Product id
        product_id: u64,

        /// Quantity
        #[arg(default_value = "1")]
        qty: u32,
    },

    /// Change the quantity of a cart line (0 removes it)
    Update {
        /// Cart item id
        item_id: u64,

        /// New quantity
        qty: u32,
    },

    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List your orders
    List,

    /// Place an order from the current cart
    Create,
}

#[derive(Subcommand)]
enum PayAction {
    /// Start a payment for an order
    Initiate {
        /// Order id
        order_id: u64,

        /// razorpay, payu, stripe or paypal
        gateway: PaymentGateway,
    },

    /// Payment status of an order
    Status {
        /// Order id
        order_id: u64,
    },
}

#[derive(Subcommand)]
enum SellerAction {
    /// List your products
    Products,

    /// Show one of your products
    Get {
        /// Product id
        id: u64,
    },

    /// Create a product
    Create {
        /// Product fields as JSON, or @path to a JSON file
        #[arg(short, long)]
        data: String,
    },

    /// Update a product
    Update {
        /// Product id
        id: u64,

        /// Changed fields as JSON, or @path to a JSON file
        #[arg(short, long)]
        data: String,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: u64,
    },

    /// Upload product images
    Upload {
        /// Product id
        product_id: u64,

        /// Image files
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Orders containing your products
    Orders,

    /// Show your seller registration
    Registration,

    /// Apply for a seller account
    Register {
        /// Seller profile as JSON, or @path to a JSON file
        #[arg(short, long)]
        data: String,
    },
}

#[derive(Subcommand)]
enum VouchersAction {
    /// List your vouchers
    List,

    /// Buy a voucher
    Buy {
        /// Voucher value, e.g. 500.00
        value: String,
    },
}

#[derive(Subcommand)]
enum NotificationsAction {
    /// List notifications
    List,

    /// Mark a notification as read
    Read {
        /// Notification id
        id: u64,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        Some(EnvFilter::new("storefront=debug,storefront_api_client=debug"))
    } else {
        std::env::var("RUST_LOG").ok().map(EnvFilter::new)
    };

    if let Some(filter) = filter {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn build_client(cli: &Cli, store: &FileTokenStore) -> anyhow::Result<StorefrontClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.clone());
    }

    let client = StorefrontClient::with_config(config)?;
    Ok(match &cli.token {
        Some(token) => client.with_credentials(Arc::new(StaticToken::new(token.clone()))),
        None => client.with_credentials(Arc::new(store.clone())),
    })
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = FileTokenStore::from_env()?;
    let client = build_client(&cli, &store)?;
    let format = cli.format;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                search,
                category,
                ordering,
                page,
                page_size,
            } => {
                let params = catalog::ListArgs {
                    search,
                    category,
                    ordering,
                    page,
                    page_size,
                };
                catalog::list(&client, params, format).await
            }
            ProductsAction::Get { slug } => catalog::get(&client, &slug, format).await,
            ProductsAction::Reviews { slug } => catalog::reviews(&client, &slug, format).await,
            ProductsAction::Review {
                slug,
                rating,
                comment,
            } => catalog::review(&client, &slug, rating, comment, format).await,
        },

        Commands::Categories => catalog::categories(&client, format).await,

        Commands::Cart { action } => match action {
            CartAction::Show => cart::show(&client, format).await,
            CartAction::Add { product_id, qty } => cart::add(&client, product_id, qty, format).await,
            CartAction::Update { item_id, qty } => {
                cart::update(&client, item_id, qty, format).await
            }
            CartAction::Clear => cart::clear(&client, format).await,
        },

        Commands::Orders { action } => match action {
            OrdersAction::List => orders::list(&client, format).await,
            OrdersAction::Create => orders::create(&client, format).await,
        },

        Commands::Pay { action } => match action {
            PayAction::Initiate { order_id, gateway } => {
                payments::initiate(&client, order_id, gateway, format).await
            }
            PayAction::Status { order_id } => payments::status(&client, order_id, format).await,
        },

        Commands::Seller { action } => match action {
            SellerAction::Products => seller::products(&client, format).await,
            SellerAction::Get { id } => seller::get(&client, id, format).await,
            SellerAction::Create { data } => seller::create(&client, &data, format).await,
            SellerAction::Update { id, data } => seller::update(&client, id, &data, format).await,
            SellerAction::Delete { id } => seller::delete(&client, id, format).await,
            SellerAction::Upload { product_id, files } => {
                seller::upload(&client, product_id, &files, format).await
            }
            SellerAction::Orders => seller::orders(&client, format).await,
            SellerAction::Registration => seller::registration(&client, format).await,
            SellerAction::Register { data } => seller::register(&client, &data, format).await,
        },

        Commands::Vouchers { action } => match action {
            VouchersAction::List => vouchers::list(&client, format).await,
            VouchersAction::Buy { value } => vouchers::buy(&client, value, format).await,
        },

        Commands::Login {
            phone_number,
            password,
        } => auth::login(&client, &store, phone_number, password, format).await,
        Commands::Logout => auth::logout(&store, format),
        Commands::Signup { data } => auth::signup(&client, &data, format).await,
        Commands::Profile { action } => match action.unwrap_or(ProfileAction::Show) {
            ProfileAction::Show => auth::profile(&client, format).await,
            ProfileAction::Update { data } => auth::update_profile(&client, &data, format).await,
        },
        Commands::Refresh => auth::refresh(&client, &store, format).await,

        Commands::Notifications { action } => match action {
            NotificationsAction::List => account::notifications(&client, format).await,
            NotificationsAction::Read { id } => account::mark_read(&client, id, format).await,
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
