//! rentstore-provider: drive single lifecycle operations by hand.
//!
//! Reads a resource instance document (`{"id": ..., "attributes": {...}}`),
//! runs one controller operation against the store and prints the resulting
//! instance. Useful for checking a store deployment without a host.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rentstore_provider::{
    CustomerResource, GenreResource, Instance, MovieResource, Provider, ProviderConfig,
    RentalResource, Resource, ResourceKind,
};

/// rentstore provider debug driver
#[derive(Parser, Debug)]
#[command(name = "rentstore-provider", version, about)]
struct Args {
    #[command(flatten)]
    provider: ProviderConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the remote object for a declared instance
    Create {
        /// Resource type (store_genres, store_customers, store_movies, store_rentals)
        kind: String,
        /// Instance document
        #[arg(long)]
        state: PathBuf,
    },
    /// Refresh an instance from the store
    Read {
        kind: String,
        #[arg(long)]
        state: PathBuf,
    },
    /// Apply desired attributes to a bound instance in place
    Update {
        kind: String,
        #[arg(long)]
        state: PathBuf,
        /// Instance document holding the desired attributes
        #[arg(long)]
        desired: PathBuf,
    },
    /// Delete the remote object of an instance
    Delete {
        kind: String,
        #[arg(long)]
        state: PathBuf,
    },
    /// Check whether the remote object of an instance exists
    Exists {
        kind: String,
        #[arg(long)]
        state: PathBuf,
    },
    /// Adopt an existing remote object and read it
    Import { kind: String, id: String },
}

impl Command {
    fn kind(&self) -> &str {
        match self {
            Command::Create { kind, .. }
            | Command::Read { kind, .. }
            | Command::Update { kind, .. }
            | Command::Delete { kind, .. }
            | Command::Exists { kind, .. }
            | Command::Import { kind, .. } => kind,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean JSON document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rentstore_provider=info,reqwest=warn,hyper=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let provider = Provider::configure(&args.provider)?;

    let kind = ResourceKind::from_type_name(args.command.kind())
        .ok_or_else(|| anyhow!("unknown resource type: {}", args.command.kind()))?;
    info!("Running {:?} on {}", args.command, kind);

    match kind {
        ResourceKind::Genre => run(GenreResource, &provider, args.command).await,
        ResourceKind::Customer => run(CustomerResource, &provider, args.command).await,
        ResourceKind::Movie => run(MovieResource, &provider, args.command).await,
        ResourceKind::Rental => run(RentalResource, &provider, args.command).await,
    }
}

async fn run<R: Resource>(resource: R, provider: &Provider, command: Command) -> Result<()> {
    match command {
        Command::Create { state, .. } => {
            let mut instance = load::<R>(&state).await?;
            resource.create(provider, &mut instance).await?;
            print(&instance)
        }
        Command::Read { state, .. } => {
            let mut instance = load::<R>(&state).await?;
            resource.read(provider, &mut instance).await?;
            print(&instance)
        }
        Command::Update { state, desired, .. } => {
            let mut instance = load::<R>(&state).await?;
            let desired = load::<R>(&desired).await?;
            resource
                .update(provider, &mut instance, desired.attributes)
                .await?;
            print(&instance)
        }
        Command::Delete { state, .. } => {
            let mut instance = load::<R>(&state).await?;
            resource.delete(provider, &mut instance).await?;
            print(&instance)
        }
        Command::Exists { state, .. } => {
            let instance = load::<R>(&state).await?;
            let exists = resource.exists(provider, &instance).await?;
            println!("{}", exists);
            Ok(())
        }
        Command::Import { id, .. } => {
            let mut instance = resource.import(id);
            resource.read(provider, &mut instance).await?;
            print(&instance)
        }
    }
}

async fn load<R: Resource>(path: &Path) -> Result<Instance<R::Attrs>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid instance document {}", path.display()))
}

fn print<A: serde::Serialize>(instance: &Instance<A>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(instance)?);
    Ok(())
}
