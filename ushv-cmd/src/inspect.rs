//! The `conditions` and `map` subcommands.

use anyhow::Context;
use log::info;
use std::io::Write;
use std::path::Path;
use ushv_survey::Condition;
use ushv_table::DatasetCache;

/// Write one `id<TAB>label` line per condition, in registry order.
pub fn write_conditions(out: &mut impl Write) -> anyhow::Result<()> {
    for condition in Condition::ALL {
        writeln!(out, "{}\t{}", condition.id(), condition.label())?;
    }
    Ok(())
}

/// Load `data` and write the state map for `condition_id` as one JSON array.
pub fn write_state_map(out: &mut impl Write, data: &Path, condition_id: &str) -> anyhow::Result<()> {
    let table = DatasetCache::new()
        .load(data)
        .with_context(|| format!("Failed to load survey data from {}", data.display()))?;
    let rows = table.query_state_map(condition_id)?;
    info!("State map for {} covers {} states", condition_id, rows.len());
    serde_json::to_writer(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
