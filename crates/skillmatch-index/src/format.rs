//! On-disk index file.
//!
//! Layout (little-endian):
//!
//! ```text
//! magic      [u8; 4]   "SMVI"
//! version    u16
//! metric     u8        0 = l2, 1 = cosine
//! reserved   u8
//! dimensions u32
//! count      u32
//! ids        [i64; count]
//! vectors    [f32; count * dimensions]
//! checksum   [u8; 32]  blake3 of every preceding byte
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use skillmatch_core::constants::{INDEX_FORMAT_VERSION, INDEX_MAGIC};
use skillmatch_core::errors::IndexError;
use skillmatch_core::traits::IVectorStore;
use tracing::debug;

use crate::metric::{metric_code, metric_from_code};
use crate::store::VectorStore;

const HEADER_LEN: usize = 4 + 2 + 1 + 1 + 4 + 4;
const CHECKSUM_LEN: usize = 32;

fn io_err(path: &Path, e: std::io::Error) -> IndexError {
    IndexError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn corrupt(details: impl Into<String>) -> IndexError {
    IndexError::Corrupt {
        details: details.into(),
    }
}

/// Serialize a store into a byte buffer, checksum included.
pub fn encode(store: &VectorStore) -> Result<Vec<u8>, IndexError> {
    let dims = u32::try_from(store.dimensions()).map_err(|_| corrupt("dimensions exceed u32"))?;
    let count = u32::try_from(store.len()).map_err(|_| corrupt("vector count exceeds u32"))?;

    let mut buf =
        Vec::with_capacity(HEADER_LEN + store.len() * 8 + store.slab().len() * 4 + CHECKSUM_LEN);
    buf.extend_from_slice(&INDEX_MAGIC);
    buf.extend_from_slice(&INDEX_FORMAT_VERSION.to_le_bytes());
    buf.push(metric_code(store.metric()));
    buf.push(0);
    buf.extend_from_slice(&dims.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());
    for id in store.ids() {
        buf.extend_from_slice(&id.to_le_bytes());
    }
    for v in store.slab() {
        buf.extend_from_slice(&v.to_le_bytes());
    }
    let checksum = blake3::hash(&buf);
    buf.extend_from_slice(checksum.as_bytes());
    Ok(buf)
}

/// Parse a buffer produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<VectorStore, IndexError> {
    if bytes.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(corrupt(format!("file too short ({} bytes)", bytes.len())));
    }
    let (body, stored_sum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if blake3::hash(body).as_bytes()[..] != stored_sum[..] {
        return Err(corrupt("checksum mismatch"));
    }

    if body[0..4] != INDEX_MAGIC {
        return Err(corrupt("bad magic"));
    }
    let version = u16::from_le_bytes([body[4], body[5]]);
    if version != INDEX_FORMAT_VERSION {
        return Err(corrupt(format!(
            "unsupported version {version} (expected {INDEX_FORMAT_VERSION})"
        )));
    }
    let metric =
        metric_from_code(body[6]).ok_or_else(|| corrupt(format!("unknown metric code {}", body[6])))?;
    let dims = u32::from_le_bytes([body[8], body[9], body[10], body[11]]) as usize;
    let count = u32::from_le_bytes([body[12], body[13], body[14], body[15]]) as usize;
    if dims == 0 {
        return Err(corrupt("zero dimensions"));
    }

    let ids_len = count
        .checked_mul(8)
        .ok_or_else(|| corrupt("id table size overflow"))?;
    let slab_len = count
        .checked_mul(dims)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| corrupt("vector slab size overflow"))?;
    let expected = HEADER_LEN + ids_len + slab_len;
    if body.len() != expected {
        return Err(corrupt(format!(
            "expected {expected} payload bytes for {count} x {dims}, found {}",
            body.len()
        )));
    }

    let ids_bytes = &body[HEADER_LEN..HEADER_LEN + ids_len];
    let ids: Vec<i64> = ids_bytes
        .chunks_exact(8)
        .map(|c| i64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();
    let slab: Vec<f32> = body[HEADER_LEN + ids_len..]
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    VectorStore::from_parts(metric, dims, ids, slab)
}

/// Load and verify an index file.
pub fn load(path: &Path) -> Result<VectorStore, IndexError> {
    let bytes = std::fs::read(path).map_err(|e| io_err(path, e))?;
    let store = decode(&bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "index file decoded");
    Ok(store)
}

/// Write an index file atomically: temp file, fsync, rename.
pub fn save(store: &VectorStore, path: &Path) -> Result<(), IndexError> {
    let bytes = encode(store)?;
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;

    let temp_path = path.with_extension("smvi.tmp");
    let mut file = File::create(&temp_path).map_err(|e| io_err(&temp_path, e))?;
    file.write_all(&bytes).map_err(|e| io_err(&temp_path, e))?;
    file.sync_all().map_err(|e| io_err(&temp_path, e))?;
    drop(file);

    std::fs::rename(&temp_path, path).map_err(|e| io_err(path, e))?;
    sync_dir(parent).map_err(|e| io_err(parent, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "index file written");
    Ok(())
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> std::io::Result<()> {
    File::open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
