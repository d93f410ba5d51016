/// Redact the password portion of a database URL for safe display.
///
/// Unparseable input is returned unchanged.
pub(crate) fn redact_url_password(url: &str) -> String {
    let Ok(mut parsed) = url::Url::parse(url) else {
        return url.to_string();
    };

    if parsed.password().is_some() {
        let _ = parsed.set_password(Some("***"));
    }

    parsed.to_string()
}
