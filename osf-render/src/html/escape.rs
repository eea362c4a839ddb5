//! The escaping primitive. All user text passes through [`escape`] exactly
//! once before it reaches the output.

/// Replace `& < > " '` with HTML entities.
///
/// The first four become the named entities `&amp; &lt; &gt; &quot;`. The
/// apostrophe becomes the numeric `&#39;`, since `&apos;` is not defined in
/// HTML4 and some embedded webviews do not decode it.
///
/// `&` goes first so entities introduced by the later replacements are not
/// escaped again.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
