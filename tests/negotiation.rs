use accept_negotiation::header::{
    Accept, AcceptCharset, AcceptEncoding, AcceptLanguage, Header, Negotiate,
};
use accept_negotiation::{Headers, RequestHeader};
use http::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use matches::assert_matches;

fn init() {
    let _ = pretty_env_logger::try_init();
}

#[test]
fn empty_accept_encoding_prefers_identity() {
    init();
    let encoding = AcceptEncoding::parse_header("");
    assert_eq!(encoding.preferred(), Some("identity"));
    assert!(encoding.accepts("identity"));
}

#[test]
fn absent_accept_charset_accepts_anything() {
    init();
    let charset = AcceptCharset::new();
    assert!(charset.accepts("utf-8"));
    assert!(charset.accepts("x-made-up"));
}

#[test]
fn accept_charset_implicit_iso_8859_1() {
    init();
    let charset = AcceptCharset::parse_header("iso-8859-5, unicode-1-1;q=0.8");
    assert!(charset.accepts("iso-8859-1"));
    assert_eq!(charset.preferred(), Some("iso-8859-5"));
}

#[test]
fn accept_prefers_most_specific_range() {
    init();
    let accept = Accept::parse_header(
        "text/*;q=0.3, text/html;q=0.7, text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5",
    );
    assert_eq!(accept.preferred(), Some("text/html;level=1"));
    assert!(accept.accepts("text/plain"));
    assert!(accept.accepts("image/jpeg"));
}

#[test]
fn accept_encoding_rfc_example() {
    init();
    let encoding = AcceptEncoding::parse_header("gzip;q=1.0, identity;q=0.5, *;q=0");
    assert!(!encoding.accepts("compress"));
    assert!(encoding.accepts("gzip"));
    assert_eq!(encoding.preferred(), Some("gzip"));
}

#[test]
fn accept_language_primary_subtag() {
    init();
    let lang = AcceptLanguage::parse_header("da, en-gb;q=0.8, en;q=0.7");
    assert_eq!(lang.preferred(), Some("da"));
    assert!(lang.accepts("en-GB"));
    assert!(lang.accepts("en-US"));
    assert_eq!(lang.quality("en"), Some(0.7));
}

#[test]
fn parse_twice_is_idempotent() {
    init();
    let raw = "text/*;q=0.3, text/html;q=0.7, text/html;level=1, */*;q=0.5";
    let mut accept = Accept::parse_header(raw);
    let once = accept.clone();
    accept.parse(raw);
    assert_eq!(accept.all(), once.all());
    assert_eq!(accept.preferred(), once.preferred());

    let raw = "fr-CA, fr;q=0.9, *;q=0";
    let mut lang = AcceptLanguage::parse_header(raw);
    let once = lang.clone();
    lang.parse(raw);
    assert_eq!(lang, once);
    assert_eq!(lang.accepts("fr-FR"), once.accepts("fr-FR"));
}

#[test]
fn out_of_range_quality_is_full_preference() {
    init();
    let lang = AcceptLanguage::parse_header("de;q=-0.5, fr;q=7, en;q=abc, it;q=0.2");
    assert_eq!(lang.quality("de"), Some(1.0));
    assert_eq!(lang.quality("fr"), Some(1.0));
    assert_eq!(lang.quality("en"), Some(1.0));
    assert_eq!(lang.all(), vec!["de", "fr", "en", "it"]);

    let encoding = AcceptEncoding::parse_header("gzip;q=NaN, deflate;q=inf");
    assert_eq!(encoding.quality("gzip"), Some(1.0));
    assert_eq!(encoding.quality("deflate"), Some(1.0));
}

#[test]
fn header_lines_round_trip() {
    init();
    let raw = "iso-8859-5, unicode-1-1;q=0.8";
    let charset = AcceptCharset::parse_header(raw);
    assert_eq!(charset.raw_value(), raw);
    assert_eq!(AcceptCharset::header_name(), "Accept-Charset");
    assert_eq!(charset.to_header_line(), format!("Accept-Charset: {}", raw));
}

#[test]
fn request_header_dispatch() {
    init();
    let header = RequestHeader::parse("accept", "application/json, */*;q=0.1");
    assert_matches!(header, RequestHeader::Accept(_));
    assert_eq!(header.preferred(), Some(Some("application/json")));
    assert_eq!(header.accepts("text/html"), Some(true));

    let header = RequestHeader::parse("Referer", "http://example.org/");
    assert_matches!(header, RequestHeader::Referer(ref r) if r.as_str() == "http://example.org/");
    assert_eq!(header.preferred(), None);
}

#[test]
fn headers_from_map() {
    init();
    let mut map = HeaderMap::new();
    map.insert(ACCEPT, HeaderValue::from_static("text/html"));
    map.append(ACCEPT_ENCODING, HeaderValue::from_static("br"));
    map.append(ACCEPT_ENCODING, HeaderValue::from_static("gzip;q=0.5"));
    map.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("nl-BE, nl;q=0.8"));

    let headers = Headers::from_map(&map).expect("visible ascii");
    assert_eq!(headers.len(), 3);

    let encoding = headers.accept_encoding().expect("accept-encoding");
    assert_eq!(encoding.raw_value(), "br, gzip;q=0.5");
    assert!(encoding.accepts("br"));
    assert!(!encoding.accepts("deflate"));

    let lang = headers.accept_language().expect("accept-language");
    assert!(lang.accepts("nl-NL"));
    assert!(headers.accept_charset().is_none());
    assert!(headers
        .iter()
        .any(|h| h.to_header_line() == "Accept: text/html"));
}

#[test]
fn headers_from_map_rejects_opaque_bytes() {
    init();
    let mut map = HeaderMap::new();
    map.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_bytes(b"fr\xe9").expect("obs-text is a valid value"),
    );
    let err = Headers::from_map(&map).unwrap_err();
    assert!(err.is_header());
    assert!(err.to_string().starts_with("invalid Header provided"));
}
