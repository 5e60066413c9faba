//! Text pass turning font markers into `@font-face` rules.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<embeddedFont font-family="([^"]*)" font-type="([^"]*)" font-base64="([^"]*)"\s*/>"#,
    )
    .expect("Invalid regex")
});

/// Replace every `<embeddedFont .../>` marker with a CDATA-wrapped
/// `@font-face` rule.
///
/// Returns the rewritten text and the number of markers replaced.
pub fn splice_font_faces(svg: &str) -> (String, usize) {
    let mut count = 0;
    let spliced = MARKER_RE.replace_all(svg, |caps: &Captures<'_>| {
        count += 1;
        font_face(&caps[1], &caps[2], &caps[3])
    });
    (spliced.into_owned(), count)
}

fn font_face(family: &str, extension: &str, base64: &str) -> String {
    format!(
        "<![CDATA[\n        @font-face {{ font-family: \"{family}\"; src: url(\"data:application/x-font-{extension};base64,{base64}\"); }}\n      ]]>"
    )
}
