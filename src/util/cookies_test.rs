use super::*;

// =============================================================================
// cookie_names
// =============================================================================

#[test]
fn cookie_names_empty_string() {
    assert!(cookie_names("").is_empty());
}

#[test]
fn cookie_names_trims_leading_spaces() {
    assert_eq!(cookie_names("a=1; b=2;c=3"), vec!["a", "b", "c"]);
}

#[test]
fn cookie_names_keeps_valueless_cookie() {
    assert_eq!(cookie_names("flag; sid=abc"), vec!["flag", "sid"]);
}

#[test]
fn cookie_names_value_may_contain_equals() {
    assert_eq!(cookie_names("q=a=b"), vec!["q"]);
}

// =============================================================================
// expired_cookie
// =============================================================================

#[test]
fn expired_cookie_targets_root_path_in_the_past() {
    assert_eq!(expired_cookie("sid"), "sid=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;");
}

// =============================================================================
// MemoryCookies
// =============================================================================

#[test]
fn memory_cookies_set_and_read() {
    let jar = MemoryCookies::new();
    jar.set_cookie("sid=abc;path=/");
    jar.set_cookie("theme=dark");
    assert_eq!(jar.cookie_string(), "sid=abc; theme=dark");
}

#[test]
fn memory_cookies_past_expiry_removes() {
    let jar = MemoryCookies::new();
    jar.set_cookie("sid=abc");
    jar.set_cookie(&expired_cookie("sid"));
    assert_eq!(jar.cookie_string(), "");
}

#[test]
fn memory_cookies_future_expiry_keeps() {
    let jar = MemoryCookies::new();
    jar.set_cookie("sid=abc;expires=Fri, 01 Jan 2100 00:00:00 GMT;path=/");
    assert_eq!(jar.cookie_string(), "sid=abc");
}

#[test]
fn memory_cookies_zero_max_age_removes() {
    let jar = MemoryCookies::new();
    jar.set_cookie("sid=abc");
    jar.set_cookie("sid=;max-age=0");
    assert!(jar.cookie_string().is_empty());
}

// =============================================================================
// expire_all_cookies
// =============================================================================

#[test]
fn expire_all_cookies_leaves_no_names() {
    let jar = MemoryCookies::new();
    jar.set_cookie("sid=abc");
    jar.set_cookie("theme=dark");
    jar.set_cookie("_ga=GA1.1");

    assert_eq!(expire_all_cookies(&jar), 3);
    assert!(cookie_names(&jar.cookie_string()).is_empty());
}

#[test]
fn expire_all_cookies_on_empty_jar_is_noop() {
    let jar = MemoryCookies::new();
    assert_eq!(expire_all_cookies(&jar), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn document_cookies_empty_off_browser() {
    let jar = DocumentCookies;
    jar.set_cookie("sid=abc");
    assert_eq!(jar.cookie_string(), "");
    assert_eq!(expire_all_cookies(&jar), 0);
}
