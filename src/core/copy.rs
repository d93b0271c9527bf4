use crate::core::{ConfigProvider, CopyPlan, Storage};
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::validate_required_field;
use std::path::PathBuf;

/// Duplicates the configured input next to itself under the `processed_` prefix.
pub struct CopyCommand<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CopyCommand<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Returns the output path. Nothing is written unless both checks pass.
    pub async fn run(&self) -> Result<PathBuf> {
        let input_path = self.config.input_path();
        let input = *validate_required_field("input_path", &input_path)?;

        if !self.storage.is_file(input).await {
            tracing::debug!("Not a regular file: {}", input.display());
            return Err(ProcessorError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let plan = CopyPlan::for_input(input)?;
        tracing::info!(
            "Copying {} -> {}",
            plan.input.display(),
            plan.output.display()
        );

        let bytes = self.storage.copy_file(&plan.input, &plan.output).await?;
        tracing::info!("Copied {} bytes to {}", bytes, plan.output.display());

        Ok(plan.output)
    }
}
