//! The `render` subcommand.

use anyhow::Context;
use log::info;
use std::io::Write;
use std::path::Path;
use ushv_dashboard::{Dashboard, MapClickEvent};
use ushv_table::DatasetCache;

/// Load `data`, apply the optional map click and write one render pass as JSON.
pub fn write_render(
    out: &mut impl Write,
    data: &Path,
    condition_id: &str,
    click: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let table = DatasetCache::new()
        .load(data)
        .with_context(|| format!("Failed to load survey data from {}", data.display()))?;

    let mut dashboard = Dashboard::new(table);
    if let Some(state) = click {
        dashboard.click(condition_id, &MapClickEvent::on_state(state))?;
    }

    let pass = dashboard.render(condition_id)?;
    info!(
        "Rendered {} panels for {} ({})",
        pass.panels.len(),
        pass.condition_id,
        pass.scope
    );

    if pretty {
        serde_json::to_writer_pretty(&mut *out, &pass)?;
    } else {
        serde_json::to_writer(&mut *out, &pass)?;
    }
    writeln!(out)?;
    Ok(())
}
