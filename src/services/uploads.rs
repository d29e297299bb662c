use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::common::UploadError;

const BUCKETS: &[&str] = &["images", "files"];

/// Stores uploaded files on the static tree and hands back the public URL.
pub struct UploadStore {
    root: PathBuf,
    public_base: String,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into(),
        }
    }

    pub fn store(
        &self,
        bucket: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        if !BUCKETS.contains(&bucket) {
            return Err(UploadError::UnknownBucket(bucket.to_string()));
        }

        let ext = extension_of(filename)
            .ok_or_else(|| UploadError::BadFileName(filename.to_string()))?;

        let dir = self.root.join(bucket);
        fs::create_dir_all(&dir)?;

        let name = format!("{}.{}", Uuid::new_v4(), ext);
        fs::write(dir.join(&name), bytes)?;

        Ok(format!("{}/{}/{}", self.public_base, bucket, name))
    }
}

fn extension_of(filename: &str) -> Option<String> {
    let ext = Path::new(filename).extension()?.to_str()?.to_lowercase();

    // Keep the public tree to plain media and documents.
    let ok = matches!(
        ext.as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "svg" | "pdf" | "doc" | "docx"
    );

    ok.then_some(ext)
}
