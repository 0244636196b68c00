/// Read the response body as text.
///
/// With the `test-mode` feature and `LITLINK_RECORD=1`, the body is also saved as
/// `<dir>/<endpoint>_<id>.<ext>`, where `<dir>` is `LITLINK_FIXDIR` or `tests/fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _id: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if std::env::var("LITLINK_RECORD").ok().as_deref() == Some("1") {
            match record::write(&format!("{_endpoint}_{_id}.{_ext}"), &text) {
                Ok(path) => tracing::debug!(path = %path.display(), "recorded fixture"),
                Err(e) => tracing::warn!(id = _id, error = %e, "failed to record fixture"),
            }
        }
    }

    Ok(text)
}

#[cfg(feature = "test-mode")]
mod record {
    use std::path::{Path, PathBuf};

    fn dir() -> PathBuf {
        std::env::var_os("LITLINK_FIXDIR").map_or_else(
            || Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
            PathBuf::from,
        )
    }

    pub(super) fn write(file_name: &str, body: &str) -> std::io::Result<PathBuf> {
        let dir = dir();
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(file_name);
        std::fs::write(&path, body)?;
        Ok(path)
    }
}
