//! Product image downloads into category folders

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::observer::CrawlEvent;
use crate::traits::{CrawlObserver, Fetcher};

/// Result of one image download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Image written at this path
    Saved(PathBuf),
    /// Request failed, answered with a non-success status, or the file could not be written
    Failed,
}

/// File name of an image, the last segment of its URL path
pub fn image_file_name(image_url: &str) -> Option<&str> {
    let path = image_url.split(['?', '#']).next()?;
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Download `image_url` into `<output_dir>/<folder>/`.
///
/// Failures are reported to the observer and returned, never propagated.
/// The folder is only created once the response is known to be good.
pub async fn download_image<F: Fetcher + ?Sized>(
    fetcher: &F,
    observer: &dyn CrawlObserver,
    image_url: &str,
    output_dir: &Path,
    folder: &str,
) -> ImageOutcome {
    match try_download(fetcher, image_url, output_dir, folder).await {
        Ok((name, path)) => {
            observer.observe(CrawlEvent::ImageSaved {
                name: name.to_string(),
                path: path.clone(),
            });
            ImageOutcome::Saved(path)
        }
        Err(e) => {
            observer.observe(CrawlEvent::ImageFailed {
                url: image_url.to_string(),
                reason: format!("{e:#}"),
            });
            ImageOutcome::Failed
        }
    }
}

/// Returns the file name and the path it was written to
async fn try_download<'u, F: Fetcher + ?Sized>(
    fetcher: &F,
    image_url: &'u str,
    output_dir: &Path,
    folder: &str,
) -> Result<(&'u str, PathBuf)> {
    let name = image_file_name(image_url).ok_or_else(|| anyhow!("no file name in {image_url}"))?;

    let response = fetcher.get(image_url).await?;
    if !response.is_success() {
        return Err(anyhow!("status {}", response.status));
    }

    let dir = output_dir.join(folder);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(name);
    tokio::fs::write(&path, &response.body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok((name, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::HIMALAYAS_IMAGE_URL;
    use crate::http::testing::StaticFetcher;
    use crate::observer::testing::RecordingObserver;

    #[test]
    fn file_name_is_last_path_segment() {
        assert_eq!(
            image_file_name(HIMALAYAS_IMAGE_URL),
            Some("6d418a73cc7d4ecfd75ca11d854041db.jpg")
        );
        assert_eq!(image_file_name("http://books.toscrape.com/media/a.png?v=2"), Some("a.png"));
        assert_eq!(image_file_name("http://books.toscrape.com/media/"), None);
    }

    #[tokio::test]
    async fn saves_image_into_category_folder() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StaticFetcher::new().bytes(HIMALAYAS_IMAGE_URL, 200, b"\xff\xd8jpeg");
        let observer = RecordingObserver::default();

        let outcome = download_image(&fetcher, &observer, HIMALAYAS_IMAGE_URL, dir.path(), "Travel").await;

        let expected = dir.path().join("Travel").join("6d418a73cc7d4ecfd75ca11d854041db.jpg");
        assert_eq!(outcome, ImageOutcome::Saved(expected.clone()));
        assert_eq!(std::fs::read(&expected).unwrap(), b"\xff\xd8jpeg");
        assert_eq!(
            observer.events(),
            vec![CrawlEvent::ImageSaved {
                name: "6d418a73cc7d4ecfd75ca11d854041db.jpg".to_string(),
                path: expected,
            }]
        );
    }

    #[tokio::test]
    async fn error_status_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StaticFetcher::new().bytes(HIMALAYAS_IMAGE_URL, 500, b"");
        let observer = RecordingObserver::default();

        let outcome = download_image(&fetcher, &observer, HIMALAYAS_IMAGE_URL, dir.path(), "Travel").await;

        assert_eq!(outcome, ImageOutcome::Failed);
        assert!(!dir.path().join("Travel").exists());
        assert!(matches!(
            observer.events().as_slice(),
            [CrawlEvent::ImageFailed { .. }]
        ));
    }

    #[tokio::test]
    async fn url_without_file_name_is_not_requested() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StaticFetcher::new();
        let observer = RecordingObserver::default();

        let outcome = download_image(&fetcher, &observer, "http://books.toscrape.com/media/", dir.path(), "Travel").await;

        assert_eq!(outcome, ImageOutcome::Failed);
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn transport_error_is_not_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = StaticFetcher::new().fail(HIMALAYAS_IMAGE_URL);
        let observer = RecordingObserver::default();

        let outcome = download_image(&fetcher, &observer, HIMALAYAS_IMAGE_URL, dir.path(), "Travel").await;

        assert_eq!(outcome, ImageOutcome::Failed);
    }
}
