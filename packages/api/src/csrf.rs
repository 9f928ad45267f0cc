//! Reading the `XSRF-TOKEN` cookie set by the CSRF bootstrap endpoint.
//!
//! Native builds see the `Set-Cookie` headers of the bootstrap response.
//! Browsers hide those from scripts, so the web build reads `document.cookie`
//! after the browser has stored the cookie.

use percent_encoding::percent_decode_str;

pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Find `name` in a list of `name=value` pairs and percent-decode its value.
fn find_cookie<'a>(pairs: impl IntoIterator<Item = &'a str>, name: &str) -> Option<String> {
    pairs.into_iter().find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let decoded = percent_decode_str(value.trim()).decode_utf8().ok()?;
        Some(decoded.into_owned()).filter(|v| !v.is_empty())
    })
}

/// Extract the XSRF token from `Set-Cookie` header values.
pub fn from_set_cookie<'a>(headers: impl IntoIterator<Item = &'a str>) -> Option<String> {
    // Attributes (`; Path=/; SameSite=Lax`) follow the first `;`.
    find_cookie(
        headers
            .into_iter()
            .filter_map(|header| header.split(';').next()),
        XSRF_COOKIE,
    )
}

/// Extract the XSRF token from a `document.cookie` string.
pub fn from_cookie_string(cookies: &str) -> Option<String> {
    find_cookie(cookies.split(';'), XSRF_COOKIE)
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn from_document() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    from_cookie_string(&html.cookie().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_set_cookie() {
        let headers = [
            "laravel_session=abc; path=/; httponly",
            "XSRF-TOKEN=eyJpdiI6IkF%3D%3D; expires=Fri, 10 Jan 2025 12:00:00 GMT; path=/; samesite=lax",
        ];
        assert_eq!(
            from_set_cookie(headers).as_deref(),
            Some("eyJpdiI6IkF==")
        );
        assert_eq!(from_set_cookie(["laravel_session=abc"]), None);
    }

    #[test]
    fn test_from_cookie_string() {
        assert_eq!(
            from_cookie_string("theme=dark; XSRF-TOKEN=a%2Bb; other=1").as_deref(),
            Some("a+b")
        );
        assert_eq!(from_cookie_string("XSRF-TOKEN="), None);
        assert_eq!(from_cookie_string(""), None);
    }
}
