use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a scan. Target resolution errors are fatal for the
/// whole run: no diagnostics are emitted once one occurs.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("could not resolve target {0:?}: no such file or directory")]
    TargetNotFound(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile correction rules")]
    Rules(#[from] fst::Error),

    #[error("failed to write diagnostic output")]
    Output(#[from] io::Error),
}
