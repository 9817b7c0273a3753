header! {
    /// `User-Agent` header, defined in
    /// [RFC7231](http://tools.ietf.org/html/rfc7231#section-5.5.3)
    ///
    /// The `User-Agent` header field contains information about the user
    /// agent originating the request. They can contain any value, so it
    /// just wraps a `String`.
    ///
    /// # ABNF
    /// ```plain
    /// User-Agent = product *( RWS ( product / comment ) )
    /// product         = token ["/" product-version]
    /// product-version = token
    /// ```
    ///
    /// # Example values
    /// * `CERN-LineMode/2.15 libwww/2.17b3`
    /// * `Bunnies`
    (UserAgent, "User-Agent") => [String]

    test_user_agent {
        // Testcase from RFC
        test_header!(test1, "CERN-LineMode/2.15 libwww/2.17b3");
        // Own testcase
        test_header!(test2, "Bunnies", HeaderField("Bunnies".to_owned()));
    }
}
