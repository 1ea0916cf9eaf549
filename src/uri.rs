// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};
use url::Url;

/// A URI reference: an absolute URI, a relative reference, a URI Template or
/// the empty string ("no href").
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UriRef(String);

impl UriRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty reference means the link has no target.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for UriRef {
    fn from(s: String) -> Self {
        UriRef(s)
    }
}

impl From<&str> for UriRef {
    fn from(s: &str) -> Self {
        UriRef(s.to_string())
    }
}

/// A parsed URL is a lossless handle over its string form.
///
/// ```
/// use hallink::uri::UriRef;
/// use url::Url;
///
/// let url = Url::parse("https://example.org/orders").unwrap();
/// let uri: UriRef = url.into();
///
/// assert_eq!(uri.as_str(), "https://example.org/orders");
/// ```
impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        UriRef(url.into_string())
    }
}

impl Display for UriRef {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
