/// Filesystem-safe artifact name for a URL: leading `http://`/`https://`
/// stripped, forbidden characters replaced with `_`, `.jpeg` appended.
pub fn artifact_filename(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    let mut name: String = stripped
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    if name.is_empty() {
        name.push('_');
    }
    name.push_str(".jpeg");
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
