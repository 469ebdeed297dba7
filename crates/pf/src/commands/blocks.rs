//! Blocks command implementation.
//!
//! Lists the parsed blocks of a filter: the structured view the evaluator
//! walks when matching an item.

use std::path::PathBuf;

use poe_filter_rs::filter::parse_blocks;
use tracing::debug;

use super::{read_filter, CommandContext, Result};
use crate::output::{format_blocks_json, format_blocks_table};

/// Options for the blocks command.
#[derive(Debug)]
pub struct BlocksOptions {
    /// Filter file ("-" for stdin).
    pub file: PathBuf,
}

/// Executes the blocks command.
pub fn execute(ctx: &CommandContext, opts: &BlocksOptions) -> Result<()> {
    let filter_text = read_filter(&opts.file)?;
    let blocks = parse_blocks(&filter_text);
    debug!(count = blocks.len(), "parsed blocks");

    if ctx.json_output {
        println!("{}", format_blocks_json(&blocks)?);
    } else if !ctx.quiet {
        print!("{}", format_blocks_table(&blocks, ctx.use_colors));
    }

    Ok(())
}
