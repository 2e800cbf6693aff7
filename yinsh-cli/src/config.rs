//! Ruleset selection shared by all commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use yinsh_core::RuleSet;

#[derive(Args, Clone, Debug, Default)]
pub struct RuleSetArgs {
    /// Ruleset JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board radius, overrides the ruleset
    #[arg(long)]
    pub radius: Option<f32>,

    /// Rings per player, overrides the ruleset
    #[arg(long)]
    pub rings: Option<u8>,
}

impl RuleSetArgs {
    /// Load the ruleset file (or the default) and apply overrides
    pub fn resolve(&self) -> Result<RuleSet> {
        let mut ruleset = match &self.config {
            Some(path) => RuleSet::load(path)
                .with_context(|| format!("Failed to load ruleset: {}", path.display()))?,
            None => RuleSet::default(),
        };

        if let Some(radius) = self.radius {
            ruleset.radius = radius;
        }
        if let Some(rings) = self.rings {
            ruleset.rings_per_player = rings;
        }

        ruleset.validate().context("Invalid ruleset")?;
        tracing::debug!(?ruleset, "ruleset resolved");
        Ok(ruleset)
    }
}
