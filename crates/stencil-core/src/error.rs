//! Errors raised while encoding or decoding scenes.
//!
//! Editing operations themselves never fail: they are silent no-ops on bad
//! input. Only the codecs behind history snapshots and the storage blob can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to encode scene snapshot: {0}")]
    SnapshotEncode(#[from] rmp_serde::encode::Error),

    #[error("failed to decode scene snapshot: {0}")]
    SnapshotDecode(#[from] rmp_serde::decode::Error),

    #[error("invalid stored scene: {0}")]
    Blob(#[from] serde_json::Error),
}
