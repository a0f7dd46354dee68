//! Cookie jar backends

use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Minimal cookie access used by the session store
pub trait CookieJar {
    /// Current value of a cookie, `None` if absent or expired
    fn get(&self, name: &str) -> Option<String>;

    /// Write a cookie that expires at `expires`
    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>);

    /// Remove a cookie entirely
    fn remove(&self, name: &str);
}

/// `document.cookie` backed jar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserCookieJar;

impl BrowserCookieJar {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
    }

    fn write(raw: &str) {
        if let Some(document) = Self::document() {
            if let Err(e) = document.set_cookie(raw) {
                tracing::error!("Failed to write cookie: {:?}", e);
            }
        }
    }
}

impl CookieJar for BrowserCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        let raw = find_cookie(&header, name)?;
        js_sys::decode_uri_component(raw)
            .ok()
            .and_then(|decoded| decoded.as_string())
    }

    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) {
        let encoded: String = js_sys::encode_uri_component(value).into();
        Self::write(&format!(
            "{name}={encoded}; expires={}; path=/; SameSite=Lax",
            http_date(expires)
        ));
    }

    fn remove(&self, name: &str) {
        Self::write(&format!(
            "{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; max-age=0; path=/; SameSite=Lax"
        ));
    }
}

/// Find the raw (still URI-encoded) value of `name` in a `document.cookie` string
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Format a timestamp the way the `expires` attribute wants it
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// In-memory jar with expiry tracking
///
/// Clones share the same storage, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    entries: Rc<RefCell<BTreeMap<String, (String, DateTime<Utc>)>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry recorded for a cookie
    pub fn expires_at(&self, name: &str) -> Option<DateTime<Utc>> {
        self.entries.borrow().get(name).map(|(_, expires)| *expires)
    }

    /// Whether a cookie is stored at all, expired or not
    pub fn contains(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let entries = self.entries.borrow();
        let (value, expires) = entries.get(name)?;
        (*expires > Utc::now()).then(|| value.clone())
    }

    fn set(&self, name: &str, value: &str, expires: DateTime<Utc>) {
        self.entries
            .borrow_mut()
            .insert(name.to_string(), (value.to_string(), expires));
    }

    fn remove(&self, name: &str) {
        self.entries.borrow_mut().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_find_cookie() {
        let header = "theme=dark; accessToken=tok%201; userId=u1";
        assert_eq!(find_cookie(header, "accessToken"), Some("tok%201"));
        assert_eq!(find_cookie(header, "userId"), Some("u1"));
        assert_eq!(find_cookie(header, "roleName"), None);
        // No prefix matches
        assert_eq!(find_cookie(header, "access"), None);
    }

    #[test]
    fn test_find_cookie_keeps_empty_values() {
        assert_eq!(find_cookie("accessToken=; userId=u1", "accessToken"), Some(""));
        assert_eq!(find_cookie("", "accessToken"), None);
    }

    #[test]
    fn test_http_date_format() {
        let at = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();
        assert_eq!(http_date(at), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn test_memory_jar_hides_expired_entries() {
        let jar = MemoryCookieJar::new();
        jar.set("fresh", "1", Utc::now() + Duration::hours(1));
        jar.set("stale", "2", Utc::now() - Duration::hours(1));

        assert_eq!(jar.get("fresh").as_deref(), Some("1"));
        assert_eq!(jar.get("stale"), None);
        assert!(jar.contains("stale"));

        jar.remove("fresh");
        assert!(!jar.contains("fresh"));
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_memory_jar_clones_share_storage() {
        let jar = MemoryCookieJar::new();
        let view = jar.clone();
        jar.set("userId", "u1", Utc::now() + Duration::days(1));
        assert_eq!(view.get("userId").as_deref(), Some("u1"));
    }
}
