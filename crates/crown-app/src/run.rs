use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use crown_config::Config;
use crown_core::{Catalog, MatchKind, MenuDocument, PassReport, Resolver};

use crate::assets;

pub struct RunOptions {
    pub menu_path: PathBuf,
    pub dry_run: bool,
    pub check_assets: bool,
}

/// Load, resolve every item, print progress, then write the menu once.
///
/// Nothing is written when loading fails or `dry_run` is set.
pub fn run(
    config: &Config,
    options: &RunOptions,
    out: &mut impl Write,
) -> anyhow::Result<PassReport> {
    let catalog = Catalog::from_config(&config.catalog).context("invalid image catalog")?;

    if options.check_assets {
        let public_dir = Path::new(&config.public_dir);
        let missing = assets::missing_images(&catalog, public_dir);
        for path in &missing {
            tracing::warn!("Catalog image missing on disk: {}", path.display());
        }
        writeln!(
            out,
            "{} catalog image(s) missing under {}",
            missing.len(),
            public_dir.display()
        )?;
    }

    let resolver = Resolver::new(catalog);
    let mut document = MenuDocument::load(&options.menu_path)?;

    let mut progress_error = None;
    let report = document.attach_images(&config.menu.sections, &resolver, |assignment| {
        tracing::debug!(
            "{} / {:?} -> {} ({})",
            assignment.section,
            assignment.name,
            assignment.image,
            assignment.kind
        );
        if progress_error.is_some() {
            return;
        }
        if let Err(e) = writeln!(
            out,
            "Added image for {}: {}",
            assignment.name, assignment.image
        ) {
            progress_error = Some(e);
        }
    });
    if let Some(e) = progress_error {
        return Err(e.into());
    }

    if options.dry_run {
        tracing::info!("Dry run, {} left unchanged", options.menu_path.display());
        writeln!(out, "\nDry run: menu not written.")?;
    } else {
        document.save(&options.menu_path)?;
        writeln!(out, "\nMenu updated with image paths!")?;
    }

    write_summary(&report, out)?;
    Ok(report)
}

fn write_summary(report: &PassReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{} item(s) updated, {} skipped",
        report.assignments.len(),
        report.skipped
    )?;
    for kind in MatchKind::ALL {
        let count = report.count(kind);
        if count > 0 {
            writeln!(out, "  {kind}: {count}")?;
        }
    }
    Ok(())
}
