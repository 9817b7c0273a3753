header! {
    /// `Referer` header, defined in
    /// [RFC7231](http://tools.ietf.org/html/rfc7231#section-5.5.2)
    ///
    /// The `Referer` [sic] header field allows the user agent to specify a
    /// URI reference for the resource from which the target URI was obtained
    /// (i.e., the "referrer", though the field name is misspelled).
    ///
    /// # ABNF
    /// ```plain
    /// Referer = absolute-URI / partial-URI
    /// ```
    ///
    /// # Example values
    /// * `http://www.example.org/hypertext/Overview.html`
    ///
    /// # Examples
    /// ```
    /// use accept_negotiation::header::{Header, Referer};
    ///
    /// let referer = Referer::parse_header("/People.html#tim");
    /// assert_eq!(referer.to_header_line(), "Referer: /People.html#tim");
    /// ```
    (Referer, "Referer") => [String]

    test_referer {
        // Testcase from the RFC
        test_header!(test1, "http://www.example.org/hypertext/Overview.html");
        test_header!(
            test2,
            "http://foo.com/hello:3000",
            HeaderField("http://foo.com/hello:3000".to_owned()));
    }
}
