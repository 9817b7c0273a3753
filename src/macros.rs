macro_rules! __negotiation__deref {
    ($from:ty => $to:ty) => {
        impl ::std::ops::Deref for $from {
            type Target = $to;

            #[inline]
            fn deref(&self) -> &$to {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut $to {
                &mut self.0
            }
        }
    }
}

macro_rules! __negotiation__tm {
    ($id:ident, $tm:ident{$($tf:item)*}) => {
        #[allow(unused_imports)]
        #[cfg(test)]
        mod $tm {
            use crate::header::*;
            use super::$id as HeaderField;
            $($tf)*
        }
    }
}

/// Asserts that a raw value parses and formats back unchanged, and
/// optionally that it parses to an expected typed value.
#[cfg(test)]
macro_rules! test_header {
    ($id:ident, $raw:expr) => {
        #[test]
        fn $id() {
            let raw: &str = $raw;
            let value = <HeaderField as Header>::parse_header(raw);
            assert_eq!(value.raw_value(), raw);
            assert_eq!(HeaderFormatter(&value).to_string(), raw);
        }
    };
    ($id:ident, $raw:expr, $typed:expr) => {
        #[test]
        fn $id() {
            let raw: &str = $raw;
            let value = <HeaderField as Header>::parse_header(raw);
            let typed: HeaderField = $typed;
            // Test parsing
            assert_eq!(value, typed);
            // Test formatting
            assert_eq!(HeaderFormatter(&typed).to_string(), raw);
        }
    };
}

/// Defines a header that stores its raw value untouched.
macro_rules! header {
    // $a:meta: Attributes associated with the header item (usually docs)
    // $id:ident: Identifier of the header
    // $n:expr: Nice name of the header

    // Single value header
    ($(#[$a:meta])*($id:ident, $n:expr) => [String]) => {
        $(#[$a])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $id(pub String);
        __negotiation__deref!($id => String);
        impl $crate::header::Header for $id {
            #[inline]
            fn header_name() -> &'static str {
                static NAME: &'static str = $n;
                NAME
            }
            #[inline]
            fn parse_header(raw: &str) -> Self {
                $id(raw.to_owned())
            }
            #[inline]
            fn raw_value(&self) -> &str {
                &self.0
            }
        }
        impl ::std::fmt::Display for $id {
            #[inline]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };

    // optional test module
    ($(#[$a:meta])*($id:ident, $n:expr) => [String] $tm:ident{$($tf:item)*}) => {
        header! {
            $(#[$a])*
            ($id, $n) => [String]
        }

        __negotiation__tm! { $id, $tm { $($tf)* } }
    };
}
