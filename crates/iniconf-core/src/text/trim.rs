//! Whitespace trimming for INI lines, keys, and values.
//!
//! The trimmed character set is exactly space, tab, carriage return, and
//! line feed — the characters that can plausibly pad an INI line.  This is
//! narrower than [`str::trim`], which strips all Unicode whitespace (and
//! would, for example, eat a non-breaking space out of a value).

/// Returns the maximal subslice of `s` with no leading or trailing space,
/// tab, CR, or LF.
///
/// Borrows from the input and never allocates, so it is safe to call for
/// every line, key, and value inside the parse loop.  An input consisting
/// entirely of such characters (or nothing at all) yields `""`.
///
/// # Examples
///
/// ```rust
/// use iniconf_core::trim;
///
/// assert_eq!(trim("  port = 8080 \r\n"), "port = 8080");
/// assert_eq!(trim("\t\t"), "");
/// assert_eq!(trim("no padding"), "no padding");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}
