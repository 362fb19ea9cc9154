use crate::model::SnapshotError;
use crate::snapshot::traits::SnapshotSource;
use scraper::{ElementRef, Html};
use std::path::{Path, PathBuf};
use tracing::info;

/// Frame the storefront renders its listing into.
pub const DEFAULT_FRAME_NAME: &str = "blstoremain";

/// A storefront page saved to disk, optionally with its listing in a frame.
pub struct FileSnapshot {
    page_path: PathBuf,
    frame_name: Option<String>,
}

impl FileSnapshot {
    pub fn new(page_path: impl Into<PathBuf>, frame_name: Option<String>) -> Self {
        Self {
            page_path: page_path.into(),
            frame_name,
        }
    }

    /// Path of the document embedded under `frame_name`, relative to the page.
    fn frame_path(&self, page_html: &str, frame_name: &str) -> Result<PathBuf, SnapshotError> {
        let document = Html::parse_document(page_html);

        let frame = document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| {
                matches!(el.value().name(), "frame" | "iframe")
                    && el.value().attr("name") == Some(frame_name)
            })
            .ok_or_else(|| SnapshotError::FrameNotFound(frame_name.to_string()))?;

        let src = frame
            .value()
            .attr("src")
            .map(str::trim)
            .filter(|src| !src.is_empty())
            .ok_or_else(|| SnapshotError::FrameWithoutSource(frame_name.to_string()))?;

        let base = self.page_path.parent().unwrap_or_else(|| Path::new(""));
        Ok(base.join(src))
    }
}

async fn read_document(path: &Path) -> Result<String, SnapshotError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })
}

#[async_trait::async_trait]
impl SnapshotSource for FileSnapshot {
    async fn load(&self) -> Result<String, SnapshotError> {
        info!("Reading page snapshot {}", self.page_path.display());
        let page = read_document(&self.page_path).await?;

        let Some(frame_name) = self.frame_name.as_deref() else {
            return Ok(page);
        };

        let frame_path = self.frame_path(&page, frame_name)?;
        info!("Reading embedded frame `{}` from {}", frame_name, frame_path.display());
        read_document(&frame_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cart-allocator-{}-{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn follows_named_frame() {
        let dir = scratch_dir("frame");
        fs::create_dir_all(dir.join("files")).unwrap();
        fs::write(
            dir.join("store.html"),
            r#"<html><head></head><frameset rows="20%,80%">
                <frame name="top" src="files/top.html">
                <frame name="blstoremain" src="files/main.html">
            </frameset></html>"#,
        )
        .unwrap();
        fs::write(dir.join("files/main.html"), "<table id=\"listing\"></table>").unwrap();

        let snapshot = FileSnapshot::new(dir.join("store.html"), Some(DEFAULT_FRAME_NAME.into()));
        let html = snapshot.load().await.unwrap();
        assert!(html.contains("listing"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn reads_page_when_no_frame_configured() {
        let dir = scratch_dir("plain");
        fs::write(dir.join("page.html"), "<p>plain</p>").unwrap();

        let html = FileSnapshot::new(dir.join("page.html"), None).load().await.unwrap();
        assert_eq!(html, "<p>plain</p>");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_frame_is_an_error() {
        let dir = scratch_dir("noframe");
        fs::write(dir.join("page.html"), r#"<iframe name="ads" src="ads.html"></iframe>"#).unwrap();

        let result = FileSnapshot::new(dir.join("page.html"), Some("blstoremain".into())).load().await;
        assert!(matches!(result, Err(SnapshotError::FrameNotFound(name)) if name == "blstoremain"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn frame_without_src_is_an_error() {
        let dir = scratch_dir("nosrc");
        fs::write(dir.join("page.html"), r#"<iframe name="blstoremain"></iframe>"#).unwrap();

        let result = FileSnapshot::new(dir.join("page.html"), Some("blstoremain".into())).load().await;
        assert!(matches!(result, Err(SnapshotError::FrameWithoutSource(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_page_is_an_error() {
        let dir = scratch_dir("missing");
        let result = FileSnapshot::new(dir.join("absent.html"), None).load().await;
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }
}
