//! Render jobs: one (asset, theme, path) triple per output file.

use std::path::{Path, PathBuf};

use isomark_geometry::AnyAsset;
use isomark_svg::{file_name, variants, write_asset, EmitError, Theme};
use rayon::prelude::*;

/// A single file to write.
#[derive(Debug, Clone)]
pub struct Job {
    pub asset: AnyAsset,
    pub theme: Theme,
    pub path: PathBuf,
}

/// Expands assets into one job per [`variants`] theme.
pub fn plan(assets: Vec<AnyAsset>, themes: &[Theme], out_dir: &Path) -> Vec<Job> {
    let mut jobs = Vec::new();
    for asset in assets {
        for theme in variants(&asset, themes) {
            jobs.push(Job {
                path: out_dir.join(file_name(&asset, theme)),
                theme: theme.clone(),
                asset: asset.clone(),
            });
        }
    }
    jobs
}

/// Writes every job in parallel. Each job renders its own document; the
/// first failure is returned.
pub fn run(jobs: &[Job]) -> Result<Vec<PathBuf>, EmitError> {
    jobs.par_iter()
        .map(|job| write_asset(&job.asset, &job.theme, &job.path).map(|()| job.path.clone()))
        .collect()
}
