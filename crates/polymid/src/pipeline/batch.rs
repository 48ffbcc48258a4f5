use std::fmt::Debug;

use rayon::prelude::*;

use crate::error::{MedialError, Result};

use super::outcome::{Feature, FeatureResult, FallbackReason, Outcome};
use super::process::Pipeline;

/// Process `features` independently on a pool of `cfg.workers` threads.
///
/// Results keep input order and carry their input index. Per-feature failures
/// are logged and returned as fallbacks; only pool construction can fail.
pub fn run_batch<P>(pipeline: &Pipeline, features: Vec<Feature<P>>) -> Result<Vec<FeatureResult<P>>>
where
    P: Send + Debug,
{
    let workers = pipeline.cfg().workers;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| MedialError::invalid(format!("worker pool: {e}")))?;
    let total = features.len();
    tracing::info!(features = total, workers, "batch start");

    let results: Vec<FeatureResult<P>> = pool.install(|| {
        features
            .into_par_iter()
            .enumerate()
            .map(|(index, feature)| {
                let outcome = pipeline.process(&feature.polygon);
                if let Outcome::Fallback {
                    reason: FallbackReason::Failed(err),
                    ..
                } = &outcome
                {
                    tracing::warn!(index, properties = ?feature.properties, error = %err, "fell back to centroid");
                }
                FeatureResult {
                    index,
                    properties: feature.properties,
                    outcome,
                }
            })
            .collect()
    });

    let fallbacks = results.iter().filter(|r| r.outcome.is_fallback()).count();
    tracing::info!(features = total, fallbacks, "batch done");
    Ok(results)
}
