use crate::core::{FlashPlan, Pipeline};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct TransmitReport {
    pub plan: FlashPlan,
    /// Paths written by the load stage; empty on a dry run.
    pub outputs: Vec<String>,
}

pub struct TransmitEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> TransmitEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn new_with_dry_run(pipeline: P, dry_run: bool) -> Self {
        Self { pipeline, dry_run }
    }

    pub async fn run(&self) -> Result<TransmitReport> {
        tracing::info!("Starting morse transmission plan...");

        tracing::debug!("Reading message...");
        let message = self.pipeline.extract().await?;
        tracing::info!("Message has {} characters", message.chars().count());

        tracing::debug!("Encoding message...");
        let plan = self.pipeline.transform(message).await?;
        tracing::info!(
            "Encoded {} elements ({} units, {:?} at {:?} per dot)",
            plan.len(),
            plan.total_units(),
            plan.total_duration(),
            plan.base_unit
        );

        if self.dry_run {
            tracing::info!("Dry run: skipping exports");
            return Ok(TransmitReport {
                plan,
                outputs: Vec::new(),
            });
        }

        tracing::debug!("Writing exports...");
        let outputs = self.pipeline.load(&plan).await?;
        for output in &outputs {
            tracing::info!("Output saved to: {}", output);
        }

        Ok(TransmitReport { plan, outputs })
    }
}
