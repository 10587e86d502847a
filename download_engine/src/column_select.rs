//! Which roster columns and rows take part in a run.
//!
//! Kept apart from the fetch path so the selection policy can change
//! without touching the downloader: the orchestrator only ever sees
//! tasks.

/// Subject-column headers recognized in the wild, checked in order.
const SUBJECT_COLUMN_CANDIDATES: &[&str] = &[
    "姓名",
    "学生姓名",
    "学生",
    "name",
    "Name",
    "学员姓名",
    "1、你的姓名：",
];

/// Placeholder used when stripping the marker leaves nothing of a
/// field label.
const FALLBACK_FIELD_LABEL: &str = "文件";

/// Indices of headers whose label contains the marker substring.
pub fn download_columns(headers: &[String], marker: &str) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.contains(marker))
        .map(|(idx, _)| idx)
        .collect()
}

/// Index of the subject column: the first recognized candidate header,
/// else column zero.
pub fn subject_column_index(headers: &[String]) -> usize {
    for candidate in SUBJECT_COLUMN_CANDIDATES {
        if let Some(idx) = headers.iter().position(|h| h == candidate) {
            return idx;
        }
    }
    0
}

/// Whether a subject cell identifies a row worth processing.
/// Spreadsheet exports render missing cells as empty strings or the
/// literal "nan".
pub fn usable_subject(label: &str) -> bool {
    let label = label.trim();
    !label.is_empty() && !label.eq_ignore_ascii_case("nan")
}

/// Field label with the marker stripped, for use in filenames. Falls
/// back to a generic label when nothing is left.
pub fn field_base_label(field_label: &str, marker: &str) -> String {
    let stripped = field_label.replace(marker, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        FALLBACK_FIELD_LABEL.to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn download_columns_match_by_substring() {
        let h = headers(&["姓名", "资料下载", "备注", "作业下载链接"]);
        assert_eq!(download_columns(&h, "下载"), vec![1, 3]);
        assert!(download_columns(&h, "上传").is_empty());
    }

    #[test]
    fn subject_column_prefers_known_candidates() {
        let h = headers(&["序号", "学生姓名", "资料下载"]);
        assert_eq!(subject_column_index(&h), 1);

        let h = headers(&["whatever", "资料下载"]);
        assert_eq!(subject_column_index(&h), 0);
    }

    #[test]
    fn candidate_order_is_fixed() {
        // Both 姓名 and name present: the earlier candidate wins even
        // when it sits later in the roster.
        let h = headers(&["name", "姓名"]);
        assert_eq!(subject_column_index(&h), 1);
    }

    #[test]
    fn rejects_unusable_subjects() {
        assert!(!usable_subject(""));
        assert!(!usable_subject("   "));
        assert!(!usable_subject("nan"));
        assert!(!usable_subject("NaN"));
        assert!(!usable_subject(" NAN "));
        assert!(usable_subject("张三"));
        assert!(usable_subject("nancy")); // whole-token match only
    }

    #[test]
    fn field_base_label_strips_marker() {
        assert_eq!(field_base_label("资料下载", "下载"), "资料");
        assert_eq!(field_base_label("下载", "下载"), "文件");
        assert_eq!(field_base_label(" 作业 下载 ", "下载"), "作业");
    }
}
