/// Split raw tag text on commas, trimming whitespace around each segment.
///
/// Empty segments are kept: `"a,,b"` yields `["a", "", "b"]` and an empty
/// input yields a single empty tag.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
