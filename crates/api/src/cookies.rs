//! Minimal cookie-header helpers shared by session and flash handling.

/// Extract the value of a named cookie from a `Cookie` request header.
pub fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}
