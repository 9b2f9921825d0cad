//! Selection, renaming, and ordering of raw uploads.
//!
//! A raw upload is a video whose title contains no period: the period is the
//! marker of an already-numbered video, so the rewrite is one-way and a
//! second run never picks the same video up again. Eligible titles are
//! rewritten to `<module>.<n>` and the batch is ordered by the numeric
//! suffix.

use crate::models::VideoEntry;

/// Select and renumber the entries to publish for the given module.
///
/// Entries whose title is empty or already contains a period are dropped.
/// Surviving titles are rewritten and the result is sorted ascending by the
/// integer suffix after the `<module>.` prefix. A raw title starting with
/// `'0'` has that placeholder digit stripped, so `"05"` under module 3
/// becomes `"3.5"` while `"12"` becomes `"3.12"`.
pub fn select_for_module(entries: Vec<VideoEntry>, module: u64) -> Vec<VideoEntry> {
    let mut selected: Vec<VideoEntry> = entries
        .into_iter()
        .filter(|entry| is_raw_title(&entry.title))
        .map(|entry| VideoEntry {
            title: numbered_title(module, &entry.title),
            ..entry
        })
        .collect();

    let prefix_len = format!("{}.", module).len();
    selected.sort_by_key(|entry| numeric_suffix(&entry.title, prefix_len));
    selected
}

/// A title is raw (eligible for numbering) iff it is non-empty and carries
/// no period.
fn is_raw_title(title: &str) -> bool {
    !title.is_empty() && !title.contains('.')
}

/// Rewrite a raw title as `<module>.<rest>`, stripping a single leading
/// `'0'` placeholder digit if present.
fn numbered_title(module: u64, raw: &str) -> String {
    let rest = raw.strip_prefix('0').unwrap_or(raw);
    format!("{}.{}", module, rest)
}

/// Sort key for a renamed title: the integer value of the suffix after the
/// module prefix. An unparseable suffix is not an error; it orders before
/// every valid number.
fn numeric_suffix(title: &str, prefix_len: usize) -> Option<i64> {
    title.get(prefix_len..)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> VideoEntry {
        VideoEntry {
            video_id: id.to_string(),
            title: title.to_string(),
        }
    }

    fn titles(entries: &[VideoEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_leading_zero_is_stripped() {
        let out = select_for_module(vec![entry("a", "05")], 3);
        assert_eq!(titles(&out), vec!["3.5"]);
    }

    #[test]
    fn test_multi_digit_title_kept_whole() {
        let out = select_for_module(vec![entry("a", "12")], 3);
        assert_eq!(titles(&out), vec!["3.12"]);
    }

    #[test]
    fn test_only_first_zero_is_stripped() {
        let out = select_for_module(vec![entry("a", "007")], 3);
        assert_eq!(titles(&out), vec!["3.07"]);
    }

    #[test]
    fn test_numbered_titles_are_excluded() {
        // A period marks an already-processed video, regardless of module
        let out = select_for_module(vec![entry("a", "2.1"), entry("b", "3.5")], 3);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_titles_are_excluded() {
        let out = select_for_module(vec![entry("a", ""), entry("b", "4")], 3);
        assert_eq!(titles(&out), vec!["3.4"]);
    }

    #[test]
    fn test_sorted_by_numeric_suffix_not_lexically() {
        let out = select_for_module(
            vec![entry("a", "10"), entry("b", "2"), entry("c", "1")],
            3,
        );
        assert_eq!(titles(&out), vec!["3.1", "3.2", "3.10"]);
    }

    #[test]
    fn test_unparseable_suffix_sorts_first() {
        let out = select_for_module(vec![entry("a", "2"), entry("b", "intro")], 3);
        assert_eq!(titles(&out), vec!["3.intro", "3.2"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(select_for_module(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_video_ids_survive_renaming() {
        let out = select_for_module(vec![entry("vid-1", "07")], 2);
        assert_eq!(out[0].video_id, "vid-1");
        assert_eq!(out[0].title, "2.7");
    }

    #[test]
    fn test_rename_is_one_way() {
        // Feeding a renamed title back through always yields exclusion
        let once = select_for_module(vec![entry("a", "05")], 3);
        let twice = select_for_module(once, 3);
        assert!(twice.is_empty());
    }
}
