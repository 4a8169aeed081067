//! Static assets embedded in the binary.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

use crate::error::DashboardError;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Serve one embedded file with a content type guessed from its extension.
pub fn serve(path: &str) -> Result<Response, DashboardError> {
    let file = Assets::get(path).ok_or_else(|| DashboardError::NotFound(format!("asset '{path}'")))?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        file.data.into_owned(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_script_is_embedded() {
        let file = Assets::get("toast.js").expect("toast.js embedded");
        let text = std::str::from_utf8(file.data.as_ref()).unwrap();
        assert!(text.contains("/api/notification/dismiss"));
    }

    #[test]
    fn test_serve_sets_content_type() {
        let resp = serve("toast.js").unwrap();
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().contains("javascript"));
    }

    #[test]
    fn test_missing_asset() {
        assert!(matches!(serve("nope.css"), Err(DashboardError::NotFound(_))));
    }
}
