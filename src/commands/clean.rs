//! Clean the site directory

use anyhow::Result;
use std::fs;

use crate::Vomit;

/// Remove the generated site
pub fn run(vomit: &Vomit) -> Result<()> {
    if vomit.site_dir.exists() {
        fs::remove_dir_all(&vomit.site_dir)?;
        tracing::info!("Deleted: {:?}", vomit.site_dir);
    }

    Ok(())
}
