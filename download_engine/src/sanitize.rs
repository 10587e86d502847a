/// Characters that cannot appear in a file name on common filesystems.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maps an arbitrary label to a string usable as a path segment.
///
/// Invalid characters become `_`, whitespace runs collapse to a single
/// space, and surrounding whitespace and dots are trimmed. Total: bad
/// input yields an empty string rather than an error, and the result is
/// stable under repeated application.
pub fn sanitize_label(label: &str) -> String {
    let replaced: String = label
        .chars()
        .map(|c| if INVALID_CHARS.contains(&c) { '_' } else { c })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_invalid_characters() {
        assert_eq!(sanitize_label("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_label("<report>?*\"|"), "______");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(sanitize_label("张  三\t丰"), "张 三 丰");
        assert_eq!(sanitize_label("a \n b"), "a b");
    }

    #[test]
    fn trims_surrounding_whitespace_and_dots() {
        assert_eq!(sanitize_label("  name  "), "name");
        assert_eq!(sanitize_label("..name.."), "name");
        assert_eq!(sanitize_label(" . a . "), "a");
    }

    #[test]
    fn tolerates_degenerate_input() {
        assert_eq!(sanitize_label(""), "");
        assert_eq!(sanitize_label(" ... "), "");
        assert_eq!(sanitize_label("   "), "");
    }

    #[test]
    fn never_emits_invalid_characters() {
        let samples = ["a<b>c", "x:y/z", "\\|?*", "清单: 下载/上传", "  .a?b.  "];
        for s in samples {
            let out = sanitize_label(s);
            assert!(
                !out.contains(INVALID_CHARS),
                "{:?} sanitized to {:?}",
                s,
                out
            );
        }
    }

    #[test]
    fn idempotent() {
        let samples = ["", "张三", "a / b", " . a . ", "..x..", "a\t\tb?", "nan"];
        for s in samples {
            let once = sanitize_label(s);
            assert_eq!(sanitize_label(&once), once, "not idempotent for {:?}", s);
        }
    }
}
