//! Request/response cookies as a [`CookieStore`].

use axum_extra::extract::cookie::{Cookie, CookieJar};
use servanda_core::{CookieSpec, CookieStore};

/// Wraps the request's [`CookieJar`]; writes become `Set-Cookie` headers
/// once the jar is returned from a handler.
#[derive(Debug, Clone, Default)]
pub struct JarCookies {
    jar: CookieJar,
}

impl JarCookies {
    /// Adapter over `jar`.
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// The jar with every write applied.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl CookieStore for JarCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.jar.get(name).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, spec: &CookieSpec) {
        // Removals are sent as `Max-Age=0` even when the request carried no
        // cookie, so the browser state is always overwritten.
        match Cookie::parse(spec.to_header()) {
            Ok(cookie) => {
                self.jar = std::mem::take(&mut self.jar).add(cookie);
            }
            Err(err) => {
                tracing::warn!(cookie = %spec.name, error = %err, "could not encode cookie");
            }
        }
    }
}
