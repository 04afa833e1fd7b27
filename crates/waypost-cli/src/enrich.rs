//! `enrich` subcommand: run the address-enrichment pipeline from a terminal.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use uuid::Uuid;
use waypost_db::PgPlaceStore;
use waypost_enrich::{enrich_addresses, EnrichMode};
use waypost_geocode::{NominatimClient, RateLimiter, Resolver};

#[derive(Debug, Args)]
pub struct EnrichArgs {
    /// Place id to enrich; repeat for multiple places.
    #[arg(long = "id", value_name = "UUID", conflicts_with = "all")]
    ids: Vec<Uuid>,

    /// Enrich every place still missing street or city.
    #[arg(long)]
    all: bool,

    /// Maximum number of places to select with --all.
    #[arg(long, default_value_t = 100)]
    limit: i64,

    /// Resolve one by one without batch telemetry.
    #[arg(long)]
    single: bool,
}

/// Exits non-zero only when the run aborts before per-item processing;
/// per-item failures are printed and the exit code stays zero.
pub async fn run(args: EnrichArgs) -> anyhow::Result<()> {
    let config = waypost_core::load_app_config()?;
    let pool = waypost_db::connect_pool(
        &config.database_url,
        waypost_db::PoolConfig::from_app_config(&config),
    )
    .await?;

    let ids = if args.all {
        let ids = waypost_db::list_candidate_place_ids(&pool, args.limit).await?;
        if ids.is_empty() {
            println!("All places already have address information");
            return Ok(());
        }
        ids
    } else {
        if args.ids.is_empty() {
            anyhow::bail!("no place ids given; pass --id at least once or use --all");
        }
        args.ids
    };

    let limiter = Arc::new(RateLimiter::new(Duration::from_millis(
        config.geocoder.min_interval_ms,
    )));
    let client = NominatimClient::with_base_url(
        &config.geocoder.user_agent,
        config.geocoder.request_timeout_secs,
        &config.geocoder.base_url,
    )?;
    let resolver = Resolver::new(client, limiter, config.geocoder.language.clone());

    let mode = if args.single {
        EnrichMode::Single
    } else {
        EnrichMode::Batch
    };

    let store = PgPlaceStore::new(pool);
    let report = enrich_addresses(&store, &resolver, &ids, mode).await?;

    println!("{}", report.message);
    for error in &report.errors {
        println!("  error: {error}");
    }

    Ok(())
}
