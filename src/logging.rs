//! Logging helpers.

/// Mask the password of a database URL so it can be logged.
///
/// `mysql://cms:secret@db:3306/site` becomes `mysql://cms:***@db:3306/site`.
/// URLs without credentials are returned unchanged.
pub fn mask_connection_password(url: &str) -> String {
    let authority_start = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at_offset) = url[authority_start..].rfind('@') else {
        return url.to_string();
    };
    let at_pos = authority_start + at_offset;

    match url[authority_start..at_pos].find(':') {
        Some(colon_offset) => {
            let colon_pos = authority_start + colon_offset;
            format!("{}:***{}", &url[..colon_pos], &url[at_pos..])
        }
        None => url.to_string(),
    }
}
