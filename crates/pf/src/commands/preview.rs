//! Preview command implementation.
//!
//! Evaluates a filter against one item and reports how it would be displayed.

use std::path::{Path, PathBuf};

use poe_filter_rs::filter::{get_item_style, FilterContext};
use tracing::{debug, warn};

use super::config::{load_config, PreviewConfig};
use super::{read_file, read_filter, CommandContext, CommandError, Result};
use crate::cli::ItemArgs;
use crate::output::{format_preview_json, format_preview_table};

/// Options for the preview command.
#[derive(Debug, Default)]
pub struct PreviewOptions {
    /// Filter file; `None` falls back to the configured default.
    pub file: Option<PathBuf>,
    /// Item description.
    pub item: ItemArgs,
}

/// Picks the filter to preview: the argument, else `preview.default_filter`.
pub fn resolve_filter_path(file: Option<&Path>, config: &PreviewConfig) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }

    config.default_filter.clone().ok_or_else(|| {
        CommandError::Config(
            "No filter file given and preview.default_filter is not set".to_string(),
        )
    })
}

/// Builds the item from `--item` JSON, then applies flag overrides.
pub fn build_context(args: &ItemArgs) -> Result<FilterContext> {
    let mut item = match &args.item {
        Some(path) => {
            let content = read_file(path)?;
            serde_json::from_str(&content).map_err(|e| {
                CommandError::Item(format!("{}: {}", path.display(), e))
            })?
        }
        None => FilterContext::default(),
    };

    if let Some(base_type) = &args.base_type {
        item.base_type = base_type.clone();
    }
    if let Some(class) = &args.class {
        item.item_class = Some(class.clone());
    }
    if let Some(rarity) = &args.rarity {
        item.rarity = Some(rarity.clone());
    }
    let numbers = [
        (&mut item.area_level, args.area_level),
        (&mut item.item_level, args.item_level),
        (&mut item.drop_level, args.drop_level),
        (&mut item.quality, args.quality),
        (&mut item.sockets, args.sockets),
        (&mut item.stack_size, args.stack_size),
        (&mut item.waystone_tier, args.waystone_tier),
    ];
    for (field, flag) in numbers {
        if flag.is_some() {
            *field = flag;
        }
    }

    Ok(item)
}

/// Executes the preview command.
pub fn execute(ctx: &CommandContext, opts: &PreviewOptions) -> Result<()> {
    let path = match &opts.file {
        Some(file) => file.clone(),
        None => resolve_filter_path(None, &load_config()?.preview)?,
    };
    let item = build_context(&opts.item)?;
    if !item.has_base_type() {
        warn!("item has no base type; the default style applies");
    }

    let filter_text = read_filter(&path)?;
    debug!(filter = %path.display(), base_type = %item.base_type, "previewing item");
    let result = get_item_style(&filter_text, &item);

    if ctx.json_output {
        println!("{}", format_preview_json(&item, &result)?);
    } else if !ctx.quiet {
        print!("{}", format_preview_table(&item, &result, ctx.use_colors));
    }

    Ok(())
}
