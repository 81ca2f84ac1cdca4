/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    contains_lowered(haystack, &needle.to_lowercase())
}
