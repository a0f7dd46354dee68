//! Session store against the real `document.cookie`
//!
//! Run with `wasm-pack test --headless --firefox crates/frontend-common`.

#![cfg(target_arch = "wasm32")]

use chrono::Utc;
use folio_frontend_common::auth::{GuardDecision, evaluate_guard};
use folio_frontend_common::session::{BrowserCookieJar, CookieJar, Credentials, SessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn credentials() -> Credentials {
    Credentials {
        access_token: "tok 1;=".into(),
        refresh_token: "ref1".into(),
        user_id: "u1".into(),
        role: "editor".into(),
    }
}

#[wasm_bindgen_test]
fn persisted_credentials_survive_encoding() {
    let store = SessionStore::new(BrowserCookieJar);
    store.persist(&credentials(), Utc::now());

    assert_eq!(store.access_token().as_deref(), Some("tok 1;="));
    assert_eq!(store.user_id().as_deref(), Some("u1"));
    assert_eq!(evaluate_guard(&store), GuardDecision::Allow);

    store.clear();
    assert_eq!(BrowserCookieJar.get("accessToken"), None);
}

#[wasm_bindgen_test]
fn sentinel_cookie_is_wiped_by_the_guard() {
    let store = SessionStore::new(BrowserCookieJar);
    store.persist(&credentials(), Utc::now());
    BrowserCookieJar.set("accessToken", "undefined", Utc::now() + chrono::Duration::days(1));

    assert_eq!(evaluate_guard(&store), GuardDecision::RedirectToLogin);
    for name in ["accessToken", "refreshToken", "userId", "roleName"] {
        assert_eq!(BrowserCookieJar.get(name), None, "{name}");
    }
}
