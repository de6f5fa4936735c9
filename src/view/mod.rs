pub mod detail;
pub mod gallery;
pub mod header;
pub mod home;

use std::path::Path;

/// Image URI for the loaders, or `None` when the picture is not available.
pub(crate) fn image_uri(source: &str) -> Option<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return Some(source.to_string());
    }
    let path = Path::new(source);
    if !path.is_file() {
        return None;
    }
    let absolute = path.canonicalize().ok()?;
    Some(format!("file://{}", absolute.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_uri() {
        assert_eq!(
            image_uri("https://example.com/a.png"),
            Some("https://example.com/a.png".to_string())
        );
        assert_eq!(image_uri("assets/does-not-exist.png"), None);

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cover.png");
        std::fs::write(&file, b"png").unwrap();
        let uri = image_uri(file.to_str().unwrap()).unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("cover.png"));
    }
}
