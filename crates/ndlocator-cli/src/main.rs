mod commands;

use clap::{Parser, Subcommand};
use ndlocator_store::{RecordClient, ResellerStore};

#[derive(Debug, Parser)]
#[command(name = "ndlocator")]
#[command(about = "ND Drones unit locator command line interface")]
struct Cli {
    /// Emit raw JSON instead of formatted lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every unit.
    List,
    /// Free-text search across name, address and type.
    Search { query: String },
    /// Structured filter by type, region and sort key.
    Filter {
        /// Unit type to keep, or "all".
        #[arg(long = "type", value_name = "TYPE", default_value = "all")]
        unit_type: String,
        /// Region code ("sp", "mg") or "all".
        #[arg(long, default_value = "all")]
        region: String,
        /// Sort key: name, type or region.
        #[arg(long, default_value = "name")]
        sort: String,
    },
    /// Create a unit on the remote store.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        #[arg(long = "type", value_name = "TYPE", default_value = "Unidade Regional")]
        unit_type: String,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a unit by id.
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ndlocator_core::load_app_config()?;
    let client = RecordClient::new(
        &config.remote_url,
        config.remote_api_key.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let mut store = ResellerStore::new(client);

    match cli.command {
        Commands::List => commands::list(&mut store, cli.json).await,
        Commands::Search { query } => commands::search(&mut store, &query, cli.json).await,
        Commands::Filter {
            unit_type,
            region,
            sort,
        } => commands::filter(&mut store, &unit_type, &region, &sort, cli.json).await,
        Commands::Add {
            name,
            address,
            phone,
            email,
            lat,
            lng,
            unit_type,
            website,
            description,
        } => {
            commands::add(
                &mut store,
                commands::AddArgs {
                    name,
                    address,
                    phone,
                    email,
                    lat,
                    lng,
                    unit_type,
                    website,
                    description,
                },
                cli.json,
            )
            .await
        }
        Commands::Remove { id } => commands::remove(&mut store, id).await,
    }
}
