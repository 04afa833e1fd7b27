//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! nightly address-backfill job.

use std::sync::Arc;

use sqlx::PgPool;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use waypost_db::PgPlaceStore;
use waypost_enrich::{enrich_addresses, EnrichMode};
use waypost_geocode::Resolver;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// a job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    pool: PgPool,
    config: Arc<waypost_core::AppConfig>,
    resolver: Arc<Resolver>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_backfill_job(&scheduler, pool, config, resolver).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the nightly address-backfill job.
///
/// Runs every day at 03:00 UTC (`0 0 3 * * *`): selects places still
/// missing street or city, up to the configured limit, and runs them
/// through batch enrichment. Failures are logged and never fatal to the
/// process; whatever is left over is picked up by the next run.
async fn register_backfill_job(
    scheduler: &JobScheduler,
    pool: PgPool,
    config: Arc<waypost_core::AppConfig>,
    resolver: Arc<Resolver>,
) -> Result<(), JobSchedulerError> {
    let pool = Arc::new(pool);

    let job = Job::new_async("0 0 3 * * *", move |_uuid, _lock| {
        let pool = Arc::clone(&pool);
        let config = Arc::clone(&config);
        let resolver = Arc::clone(&resolver);

        Box::pin(async move {
            tracing::info!("scheduler: starting nightly address backfill");
            run_backfill(&pool, &config, &resolver).await;
            tracing::info!("scheduler: nightly address backfill complete");
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}

/// Select candidates and drive one batch-mode enrichment run.
async fn run_backfill(pool: &PgPool, config: &waypost_core::AppConfig, resolver: &Resolver) {
    let ids = match waypost_db::list_candidate_place_ids(pool, config.enrich_backfill_limit).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, "scheduler: failed to select backfill candidates");
            return;
        }
    };

    if ids.is_empty() {
        tracing::info!("scheduler: no places awaiting enrichment; skipping");
        return;
    }

    tracing::info!(count = ids.len(), "scheduler: enriching places");

    let store = PgPlaceStore::new(pool.clone());
    match enrich_addresses(&store, resolver, &ids, EnrichMode::Batch).await {
        Ok(report) => {
            tracing::info!(
                enriched = report.enriched,
                total = report.total,
                errors = report.errors.len(),
                "scheduler: backfill run finished"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "scheduler: backfill run failed before processing");
        }
    }
}
