//! SunShop CLI - operator access to the store API

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use sunshop_lib::config::SESSION_FILE_ENV;
use sunshop_lib::{
    AdminClient, ApiClient, ApiError, CategoryForm, ClientConfig, ConfigError, CustomerClient,
    JsonFileStore, ListQuery, LoginResponse, SessionError,
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(name = "sunshop", version)]
#[command(about = "Operator CLI for the SunShop store API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API base URL [default: $SUNSHOP_API_URL or https://api.sunshop.store]
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Session file [default: $SUNSHOP_SESSION_FILE or ~/.sunshop/session.json]
    #[arg(long, global = true, value_name = "PATH")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    role: RoleCommand,
}

#[derive(Subcommand)]
enum RoleCommand {
    /// Admin dashboard commands
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Storefront customer commands
    Customer {
        #[command(subcommand)]
        command: CustomerCommand,
    },
}

#[derive(Subcommand)]
enum AdminCommand {
    /// Sign in and store the admin token
    Login(LoginArgs),
    /// Submit an OTP code to finish signing in
    Verify(VerifyArgs),
    /// Forget the stored admin token
    Logout,
    /// Show whether an admin token is stored
    Status,
    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    /// Browse products
    Products {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Browse orders
    Orders {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Browse payment transactions
    Transactions {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Show dashboard counters
    Dashboard,
}

#[derive(Subcommand)]
enum CustomerCommand {
    /// Sign in and store the customer token
    Login(LoginArgs),
    /// Submit an OTP code to finish signing in
    Verify(VerifyArgs),
    /// Forget the stored customer token and user
    Logout,
    /// Show whether a customer token is stored
    Status,
    /// Browse the catalog
    Products {
        #[command(subcommand)]
        command: ListCommand,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Show saved products
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },
    /// Browse your orders
    Orders {
        #[command(subcommand)]
        command: ListCommand,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// List categories
    List(ListArgs),
    /// Create a category
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
enum ListCommand {
    /// List entries
    List(ListArgs),
}

#[derive(Subcommand)]
enum CartCommand {
    /// Show the cart
    List,
    /// Add a product to the cart
    Add {
        #[arg(long)]
        product_id: u64,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum WishlistCommand {
    /// Show the wishlist
    List,
}

#[derive(Args)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
}

#[derive(Args)]
struct VerifyArgs {
    #[arg(long)]
    user_id: String,
    #[arg(long)]
    code: String,
}

#[derive(Args)]
struct ListArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    per_page: Option<u32>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

impl ListArgs {
    fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            per_page: self.per_page,
            search: self.search.clone(),
            status: self.status.clone(),
            filters: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Picks the log filter: `RUST_LOG` wins, otherwise the `-v` count.
fn log_filter(verbose: u8, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) => filter,
        None => match verbose {
            0 => "warn".to_string(),
            1 => "warn,sunshop_lib=info,sunshop=info".to_string(),
            2 => "info,sunshop_lib=debug,sunshop=debug".to_string(),
            _ => "debug,sunshop_lib=trace,sunshop=trace".to_string(),
        },
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = log_filter(verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn session_store(explicit: Option<PathBuf>) -> Result<JsonFileStore, SessionError> {
    match explicit.or_else(|| std::env::var_os(SESSION_FILE_ENV).map(PathBuf::from)) {
        Some(path) => Ok(JsonFileStore::new(path)),
        None => JsonFileStore::default_path(),
    }
}

/// Summarizes a sign-in without echoing the token.
fn login_summary(login: &LoginResponse) -> Value {
    json!({
        "authenticated": login.is_complete(),
        "requires_verification": login.needs_verification(),
        "user_id": login.user_id.clone(),
        "user": login.user.clone(),
        "message": login.message.clone(),
    })
}

/// OTP user ids are numeric on most backends; anything else is sent as text.
fn user_id_value(raw: &str) -> Value {
    raw.parse::<u64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}

async fn run_admin(
    admin: AdminClient,
    command: AdminCommand,
    session: &JsonFileStore,
) -> Result<Value, CliError> {
    let value: Value = match command {
        AdminCommand::Login(args) => {
            login_summary(&admin.auth().login(&args.email, &args.password).await?)
        }
        AdminCommand::Verify(args) => login_summary(
            &admin
                .auth()
                .verify(user_id_value(&args.user_id), &args.code)
                .await?,
        ),
        AdminCommand::Logout => {
            admin.auth().logout()?;
            json!({ "role": "admin", "authenticated": false })
        }
        AdminCommand::Status => json!({
            "role": "admin",
            "authenticated": admin.auth().is_authenticated()?,
            "session_file": session.path().display().to_string(),
            "base_url": admin.api().endpoints().base_url().as_str(),
        }),
        AdminCommand::Categories { command } => match command {
            CategoryCommand::List(args) => admin.categories().list(&args.to_query()).await?,
            CategoryCommand::Create { name, description } => {
                let form = match description {
                    Some(description) => CategoryForm::new(name).description(description),
                    None => CategoryForm::new(name),
                };
                admin.categories().create(form).await?
            }
        },
        AdminCommand::Products {
            command: ListCommand::List(args),
        } => admin.products().list(&args.to_query()).await?,
        AdminCommand::Orders {
            command: ListCommand::List(args),
        } => admin.orders().list(&args.to_query()).await?,
        AdminCommand::Transactions {
            command: ListCommand::List(args),
        } => {
            let page = admin
                .transactions()
                .list::<Value>(&args.to_query())
                .await?;
            serde_json::to_value(page)?
        }
        AdminCommand::Dashboard => admin.dashboard().stats().await?,
    };
    Ok(value)
}

async fn run_customer(
    customer: CustomerClient,
    command: CustomerCommand,
    session: &JsonFileStore,
) -> Result<Value, CliError> {
    let value: Value = match command {
        CustomerCommand::Login(args) => {
            login_summary(&customer.auth().login(&args.email, &args.password).await?)
        }
        CustomerCommand::Verify(args) => login_summary(
            &customer
                .auth()
                .verify(user_id_value(&args.user_id), &args.code)
                .await?,
        ),
        CustomerCommand::Logout => {
            customer.auth().logout()?;
            json!({ "role": "customer", "authenticated": false })
        }
        CustomerCommand::Status => json!({
            "role": "customer",
            "authenticated": customer.auth().is_authenticated()?,
            "user": customer.auth().current_user()?,
            "session_file": session.path().display().to_string(),
            "base_url": customer.api().endpoints().base_url().as_str(),
        }),
        CustomerCommand::Products {
            command: ListCommand::List(args),
        } => customer.products().list(&args.to_query()).await?,
        CustomerCommand::Cart { command } => match command {
            CartCommand::List => customer.cart().list().await?,
            CartCommand::Add {
                product_id,
                quantity,
            } => customer.cart().add(product_id, quantity).await?,
        },
        CustomerCommand::Wishlist {
            command: WishlistCommand::List,
        } => customer.wishlist().list().await?,
        CustomerCommand::Orders {
            command: ListCommand::List(args),
        } => customer.orders().list(&args.to_query()).await?,
    };
    Ok(value)
}

async fn run(cli: Cli) -> Result<Value, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config.base_url = Url::parse(base_url)?;
    }

    let session = session_store(cli.session_file)?;
    debug!(
        base_url = %config.base_url,
        session_file = %session.path().display(),
        "client configured"
    );
    let builder = ApiClient::from_config(&config).store(Arc::new(session.clone()));

    match cli.role {
        RoleCommand::Admin { command } => run_admin(builder.admin()?, command, &session).await,
        RoleCommand::Customer { command } => {
            run_customer(builder.customer()?, command, &session).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    match run(cli).await.and_then(|value| Ok(serde_json::to_string_pretty(&value)?)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
