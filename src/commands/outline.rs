//! @acp:module "Outline Command"
//! @acp:summary "Generate a blog outline"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;

use super::{build_generator, print_saved, RunFlags};
use crate::config::Config;
use crate::synth::ContentKind;

/// Options for the outline command
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    pub topic: String,
    pub flags: RunFlags,
}

/// Execute the outline command
pub fn execute_outline(options: OutlineOptions, config: &Config) -> Result<()> {
    let generator = build_generator(&options.flags, config)?;
    let request = options
        .flags
        .request(config, &options.topic, ContentKind::Outline);

    let outline = generator.generate_outline(&request)?;
    print_saved(&outline);
    Ok(())
}
