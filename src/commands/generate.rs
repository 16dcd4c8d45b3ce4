//! @acp:module "Generate Command"
//! @acp:summary "Generate one article"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;

use super::{build_generator, print_saved, RunFlags};
use crate::config::Config;
use crate::synth::ContentKind;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub topic: String,
    pub flags: RunFlags,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let generator = build_generator(&options.flags, config)?;
    let request = options
        .flags
        .request(config, &options.topic, ContentKind::Article);

    let article = generator.generate_article(&request)?;
    print_saved(&article);
    Ok(())
}
