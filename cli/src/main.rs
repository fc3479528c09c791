use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use gavel::config::Config;
use gavel::net::api::{ApiClient, ApiError};
use gavel::net::types::NewSaleItem;
use gavel::state::session::SessionStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("login succeeded but no auth cookie was set")]
    MissingAuthCookie,
    #[error("image path has no file name")]
    MissingFileName,
    #[error("failed to read image file: {0}")]
    ReadImage(#[from] std::io::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gavel", about = "Auction backend API CLI")]
struct Cli {
    /// Backend base URL; defaults to GAVEL_BASE_URL or the local dev backend.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(long, env = "GAVEL_AUTH_TOKEN")]
    auth_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Item(ItemCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    /// Create an account and print the session token.
    Register { username: String, password: String },
    /// Log in and print the session token.
    Login { username: String, password: String },
    /// Ask the server whether the current token is a valid session.
    Check,
}

#[derive(Args, Debug)]
struct ItemCommand {
    #[command(subcommand)]
    command: ItemSubcommand,
}

#[derive(Subcommand, Debug)]
enum ItemSubcommand {
    List,
    Read {
        item_id: Uuid,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        starting_price: i64,
        #[arg(long, help = "Auction close time, ISO-8601 (e.g. 2026-09-01T12:00:00)")]
        end_date: String,
    },
    Bid {
        item_id: Uuid,
        price: i64,
    },
    Images {
        item_id: Uuid,
    },
    UploadImage {
        item_id: Uuid,
        #[arg(long, help = "Path to a .jpeg, .jpg, or .png file")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.base_url.as_deref().map_or_else(Config::from_env, Config::new);
    let client = match &cli.auth_token {
        Some(token) => ApiClient::with_auth_token(&config, token)?,
        None => ApiClient::new(&config)?,
    };

    match cli.command {
        Command::Auth(auth) => run_auth(&client, auth).await,
        Command::Item(item) => run_item(&client, item).await,
    }
}

async fn run_auth(client: &ApiClient, auth: AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::Register { username, password } => {
            let response = client.register(&username, &password).await?;
            print_json(&response)?;
            print_auth_token(client)
        }
        AuthSubcommand::Login { username, password } => {
            let response = client.login(&username, &password).await?;
            print_json(&response)?;
            print_auth_token(client)
        }
        AuthSubcommand::Check => {
            let store = SessionStore::new(client.clone());
            store.refresh_user().await;
            if store.is_logged_in() {
                println!("logged in");
            } else {
                println!("logged out");
            }
            Ok(())
        }
    }
}

async fn run_item(client: &ApiClient, item: ItemCommand) -> Result<(), CliError> {
    match item.command {
        ItemSubcommand::List => {
            let items = client.list_items().await?;
            print_json(&items)
        }
        ItemSubcommand::Read { item_id } => {
            let detail = client.get_item(item_id).await?;
            print_json(&detail)
        }
        ItemSubcommand::Create {
            title,
            description,
            starting_price,
            end_date,
        } => {
            let new_item = NewSaleItem {
                title,
                description,
                starting_price,
                end_date,
            };
            let response = client.create_item(&new_item).await?;
            print_json(&response)
        }
        ItemSubcommand::Bid { item_id, price } => {
            let response = client.place_bid(item_id, price).await?;
            print_json(&response)
        }
        ItemSubcommand::Images { item_id } => {
            let images = client.item_images(item_id).await?;
            print_json(&images)
        }
        ItemSubcommand::UploadImage { item_id, file } => {
            let bytes = std::fs::read(&file)?;
            let filename = file
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or(CliError::MissingFileName)?;
            let response = client.upload_image(item_id, filename, bytes).await?;
            print_json(&response)
        }
    }
}

fn print_auth_token(client: &ApiClient) -> Result<(), CliError> {
    let token = client.auth_token().ok_or(CliError::MissingAuthCookie)?;
    eprintln!("export GAVEL_AUTH_TOKEN={token}");
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
