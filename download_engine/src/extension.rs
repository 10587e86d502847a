use url::Url;

/// Content-Type fragments mapped to extensions, checked in order; the
/// first match wins.
const CONTENT_TYPE_EXTENSIONS: &[(&str, &str)] = &[
    ("pdf", ".pdf"),
    ("zip", ".zip"),
    ("doc", ".doc"),
    ("excel", ".xlsx"),
    ("spreadsheet", ".xlsx"),
];

/// Picks the extension for a downloaded resource. The URL path wins
/// when its last segment carries one; the response Content-Type is the
/// fallback, since dynamically-served URLs often have bare paths. An
/// empty result means the caller leaves the filename without one.
pub fn resolve_extension(url: &Url, content_type: Option<&str>) -> String {
    if let Some(ext) = path_extension(url) {
        return ext;
    }

    if let Some(content_type) = content_type {
        let content_type = content_type.to_lowercase();
        for (token, ext) in CONTENT_TYPE_EXTENSIONS {
            if content_type.contains(token) {
                return (*ext).to_string();
            }
        }
    }

    String::new()
}

/// Extension of the last path segment, dot included and case
/// preserved. A dot in a parent segment does not count, and neither
/// does one that starts the segment.
fn path_extension(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let idx = segment.rfind('.')?;
    if idx == 0 {
        return None;
    }
    Some(segment[idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn path_extension_wins_and_preserves_case() {
        let u = url("https://host/path/report.PDF");
        assert_eq!(resolve_extension(&u, Some("application/zip")), ".PDF");
    }

    #[test]
    fn dot_in_parent_segment_does_not_count() {
        let u = url("https://host/v1.2/download");
        assert_eq!(resolve_extension(&u, None), "");
    }

    #[test]
    fn content_type_fallback() {
        let u = url("https://host/download?id=5");
        assert_eq!(resolve_extension(&u, Some("application/pdf")), ".pdf");
        assert_eq!(resolve_extension(&u, Some("APPLICATION/ZIP")), ".zip");
        assert_eq!(resolve_extension(&u, Some("application/msword")), ".doc");
        assert_eq!(
            resolve_extension(&u, Some("application/vnd.ms-excel")),
            ".xlsx"
        );
        assert_eq!(resolve_extension(&u, Some("text/spreadsheet")), ".xlsx");
    }

    #[test]
    fn first_match_wins_in_ladder_order() {
        // "officedocument" contains "doc", which sits before the
        // spreadsheet tokens in the ladder.
        let u = url("https://host/download?id=5");
        assert_eq!(
            resolve_extension(
                &u,
                Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            ),
            ".doc"
        );
    }

    #[test]
    fn unknown_content_type_yields_nothing() {
        let u = url("https://host/download");
        assert_eq!(resolve_extension(&u, Some("text/html")), "");
        assert_eq!(resolve_extension(&u, None), "");
    }

    #[test]
    fn multi_dot_names_keep_only_the_last_part() {
        let u = url("https://host/files/archive.tar.gz");
        assert_eq!(resolve_extension(&u, None), ".gz");
    }

    #[test]
    fn hidden_file_style_segment_has_no_extension() {
        let u = url("https://host/files/.hidden");
        assert_eq!(resolve_extension(&u, None), "");
    }
}
