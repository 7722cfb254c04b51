//! Moodle single sign-on: log the user into Moodle behind the scenes and
//! hand the resulting session cookies back to the host for the browser.

mod jar_file;

pub use jar_file::CookieJarFile;

use crate::{SyncContext, SyncResult};

use ms_config::CookieSource;
use ms_core::{RelayCookie, SetCookie, set_cookie};
use ms_moodle::Method;

use chrono::Utc;
use log::{debug, error, warn};

/// Call the Moodle login endpoint for `username` and collect the cookies to
/// relay, rescoped to the configured cookie domain and path.
pub async fn relay_login_cookies(ctx: &SyncContext, username: &str) -> SyncResult<Vec<RelayCookie>> {
    let username = username.to_lowercase();

    let response = ctx
        .moodle
        .custom_request(
            &ctx.sso.login_path,
            &[("username", username.as_str())],
            Method::POST,
        )
        .await?;

    if !response.is_success() {
        warn!(
            "Moodle login endpoint answered HTTP {} for {}",
            response.status, username
        );
    }

    let now = Utc::now().timestamp();
    let live = set_cookie::collect(response.set_cookies.iter().map(String::as_str), now);
    let dropped = response.set_cookies.len() - live.len();
    if dropped > 0 {
        debug!("{} Set-Cookie header(s) were unparsable, expired or replaced", dropped);
    }

    let received = match ctx.sso.cookie_source {
        CookieSource::Headers => into_pairs(live),
        CookieSource::CookieJar => match CookieJarFile::create(&ctx.sso.tmp_dir()) {
            Ok(jar) => cookies_via_jar(jar, &live, &ctx.sso.cookie_domain, now)?,
            Err(err) => {
                error!("{}; reading Set-Cookie headers instead", err);
                into_pairs(live)
            }
        },
    };

    Ok(received
        .into_iter()
        .map(|(name, value)| {
            RelayCookie::new(name, value, &ctx.sso.cookie_domain, &ctx.sso.cookie_path)
        })
        .collect())
}

fn into_pairs(cookies: Vec<SetCookie>) -> Vec<(String, String)> {
    cookies
        .into_iter()
        .map(|cookie| (cookie.name, cookie.value))
        .collect()
}

/// Legacy path: store the received cookies in a jar file and read them back.
/// The file is removed when `jar` drops. Cookies without a `Domain`
/// attribute are recorded under the relay domain.
fn cookies_via_jar(
    mut jar: CookieJarFile,
    cookies: &[SetCookie],
    relay_domain: &str,
    now: i64,
) -> SyncResult<Vec<(String, String)>> {
    jar.write(
        cookies
            .iter()
            .map(|cookie| cookie.to_jar_cookie(relay_domain, now)),
    )?;

    Ok(jar
        .read()?
        .into_iter()
        .filter(|cookie| !cookie.is_expired(now))
        .map(|cookie| (cookie.name, cookie.value))
        .collect())
}
