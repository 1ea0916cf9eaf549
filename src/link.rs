// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::attribute::Value;
use crate::error::{LinkError, Result};
use crate::uri::UriRef;
use percent_encoding::{utf8_percent_encode, DEFAULT_ENCODE_SET};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// An immutable link: one or more relations, a target reference, a templated
/// flag and a set of attributes.
///
/// Every mutator leaves the receiver untouched. A mutator that would change
/// nothing hands back the receiver itself (`Cow::Borrowed`); otherwise it
/// builds a fresh `Link` with its own relation sequence and attribute map.
///
/// ## Examples
///
/// ```
/// use hallink::Link;
///
/// let link = Link::new("self").with_href("https://example.org/orders/523");
///
/// assert_eq!(link.rels(), ["self"]);
/// assert_eq!(link.href(), "https://example.org/orders/523");
/// assert!(!link.is_templated());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    rels: Vec<String>,
    href: UriRef,
    templated: bool,
    attributes: BTreeMap<String, Value>,
}

impl Link {
    /// A link with a single relation, no target and no attributes.
    pub fn new(rel: impl Into<String>) -> Link {
        Link {
            rels: vec![rel.into()],
            href: UriRef::default(),
            templated: false,
            attributes: BTreeMap::new(),
        }
    }

    /// A link with the given relation sequence, stored as given. Duplicates
    /// are kept; an empty sequence is rejected.
    pub fn from_rels<I, S>(rels: I) -> Result<Link>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rels: Vec<String> = rels.into_iter().map(Into::into).collect();

        ensure!(!rels.is_empty(), LinkError::MissingRelation);

        Ok(Link {
            rels,
            href: UriRef::default(),
            templated: false,
            attributes: BTreeMap::new(),
        })
    }

    /// A link from all four fields at once.
    pub fn from_parts<I, S>(
        rels: I,
        href: impl Into<UriRef>,
        templated: bool,
        attributes: BTreeMap<String, Value>,
    ) -> Result<Link>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rels: Vec<String> = rels.into_iter().map(Into::into).collect();

        ensure!(!rels.is_empty(), LinkError::MissingRelation);

        Ok(Link {
            rels,
            href: href.into(),
            templated,
            attributes,
        })
    }

    /// The relation sequence, in insertion order.
    pub fn rels(&self) -> &[String] {
        &self.rels
    }

    /// The target reference. Empty when the link has no href.
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    /// Whether the target is a URI Template.
    pub fn is_templated(&self) -> bool {
        self.templated
    }

    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Adds a relation at the end of the sequence. A relation already
    /// present is a no-op; an empty one is rejected.
    ///
    /// ```
    /// use hallink::Link;
    ///
    /// let link = Link::new("self");
    /// let link = link.with_rel("item").unwrap();
    ///
    /// assert_eq!(link.rels(), ["self", "item"]);
    /// ```
    pub fn with_rel(&self, rel: &str) -> Result<Cow<Link>> {
        ensure!(!rel.is_empty(), LinkError::InvalidArgument("rel"));

        if self.rels.iter().any(|r| r == rel) {
            return Ok(Cow::Borrowed(self));
        }

        let mut link = self.clone();
        link.rels.push(rel.to_string());

        Ok(Cow::Owned(link))
    }

    /// Removes the first occurrence of a relation. An empty or absent
    /// relation is a no-op, as is removing the last remaining relation: a
    /// link never drops below one relation.
    pub fn without_rel(&self, rel: &str) -> Cow<Link> {
        if rel.is_empty() || self.rels.len() == 1 {
            return Cow::Borrowed(self);
        }

        match self.rels.iter().position(|r| r == rel) {
            Some(index) => {
                let mut link = self.clone();
                link.rels.remove(index);

                Cow::Owned(link)
            }
            None => Cow::Borrowed(self),
        }
    }

    /// Replaces the target. Never a no-op: the result is a fresh instance
    /// even when the reference is unchanged.
    ///
    /// ```
    /// use hallink::Link;
    /// use url::Url;
    ///
    /// let base = Link::new("self");
    /// let link = base.with_href(Url::parse("https://example.org/3").unwrap());
    ///
    /// assert_eq!(link.href(), "https://example.org/3");
    /// assert_eq!(base.href(), "");
    /// ```
    pub fn with_href(&self, href: impl Into<UriRef>) -> Link {
        let mut link = self.clone();
        link.href = href.into();

        link
    }

    /// Sets an attribute, overwriting any previous value under the same
    /// name. An empty name is rejected.
    pub fn with_attribute(&self, name: &str, value: impl Into<Value>) -> Result<Link> {
        ensure!(!name.is_empty(), LinkError::InvalidArgument("name"));

        let mut link = self.clone();
        link.attributes.insert(name.to_string(), value.into());

        Ok(link)
    }

    /// Removes an attribute. An empty or absent name is a no-op.
    pub fn without_attribute(&self, name: &str) -> Cow<Link> {
        if name.is_empty() || !self.attributes.contains_key(name) {
            return Cow::Borrowed(self);
        }

        let mut link = self.clone();
        link.attributes.remove(name);

        Cow::Owned(link)
    }
}

/// Renders one RFC 8288 style entry: target in angle brackets, relations as
/// a space-joined "rel" param, then the attributes. A text value with
/// non-ASCII content uses the RFC 8187 extended form.
///
/// ```
/// use hallink::Link;
///
/// let link = Link::new("self")
///     .with_href("https://example.org/{id}")
///     .with_attribute("title", "Order")
///     .unwrap();
///
/// assert_eq!(
///     link.to_string(),
///     r#"<https://example.org/{id}>; rel="self"; title="Order""#
/// );
/// ```
impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "<{}>; rel=\"{}\"", self.href, self.rels.join(" "))?;

        if self.templated {
            write!(formatter, "; templated=\"true\"")?;
        }

        for (name, value) in &self.attributes {
            match value {
                Value::Text(text) if !text.is_ascii() => {
                    let encoded = utf8_percent_encode(text, DEFAULT_ENCODE_SET);
                    write!(formatter, "; {}*=UTF-8''{}", name, encoded)?;
                }
                _ => {
                    write!(formatter, "; {}=\"{}\"", name, quote(&value.to_string()))?;
                }
            }
        }

        Ok(())
    }
}

fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::ptr;
    use url::Url;

    fn kind(err: &Error) -> &LinkError {
        err.downcast_ref::<LinkError>().expect("a LinkError")
    }

    #[test]
    fn minimal_link() {
        let link = Link::new("self");

        assert_eq!(link.rels(), ["self"]);
        assert_eq!(link.href(), "");
        assert!(!link.is_templated());
        assert!(link.attributes().is_empty());
    }

    #[test]
    fn full_link() {
        let mut attributes = BTreeMap::new();
        attributes.insert("foo".to_string(), Value::from("bar"));

        let link = Link::from_parts(
            vec!["self", "link"],
            "https://x/{id}",
            true,
            attributes.clone(),
        )
        .expect("a valid link");

        assert_eq!(link.rels(), ["self", "link"]);
        assert_eq!(link.href(), "https://x/{id}");
        assert!(link.is_templated());
        assert_eq!(link.attributes(), &attributes);
    }

    #[test]
    fn no_relations_is_rejected() {
        let err = Link::from_rels(Vec::<String>::new()).unwrap_err();

        assert_eq!(kind(&err), &LinkError::MissingRelation);

        let err = Link::from_parts(Vec::<String>::new(), "", false, BTreeMap::new()).unwrap_err();

        assert_eq!(kind(&err), &LinkError::MissingRelation);
    }

    #[test]
    fn duplicate_relations_are_kept() {
        let link = Link::from_rels(vec!["self", "self"]).expect("a valid link");

        assert_eq!(link.rels(), ["self", "self"]);
    }

    #[test]
    fn with_rel_rejects_empty() {
        let link = Link::new("self");
        let err = link.with_rel("").unwrap_err();

        assert_eq!(kind(&err), &LinkError::InvalidArgument("rel"));
    }

    #[test]
    fn with_rel_present_is_identity() {
        let link = Link::new("self");
        let same = link.with_rel("self").expect("a valid relation");

        assert!(ptr::eq(&*same, &link));
    }

    #[test]
    fn with_rel_appends() {
        let link = Link::new("self");
        let next = link.with_rel("link").expect("a valid relation");

        assert_eq!(next.rels(), ["self", "link"]);
        assert_eq!(link.rels(), ["self"]);
        assert!(!ptr::eq(&*next, &link));
    }

    #[test]
    fn without_rel_tolerates_empty() {
        let link = Link::new("self");
        let same = link.without_rel("");

        assert!(ptr::eq(&*same, &link));
    }

    #[test]
    fn without_rel_absent_is_identity() {
        let link = Link::new("self");
        let same = link.without_rel("link");

        assert!(ptr::eq(&*same, &link));
    }

    #[test]
    fn without_rel_removes() {
        let link = Link::from_rels(vec!["self", "link"]).expect("a valid link");
        let next = link.without_rel("link");

        assert_eq!(next.rels(), ["self"]);
        assert_eq!(link.rels(), ["self", "link"]);
    }

    #[test]
    fn without_rel_removes_first_occurrence() {
        let link = Link::from_rels(vec!["a", "b", "a"]).expect("a valid link");
        let next = link.without_rel("a");

        assert_eq!(next.rels(), ["b", "a"]);
    }

    #[test]
    fn without_rel_keeps_the_last_relation() {
        let link = Link::new("self");
        let same = link.without_rel("self");

        assert!(ptr::eq(&*same, &link));
        assert_eq!(link.rels(), ["self"]);
    }

    #[test]
    fn with_href_is_never_identity() {
        let link = Link::new("self").with_href("https://example.org");
        let next = link.with_href("https://example.org");

        assert_eq!(next, link);
        assert_eq!(next.href(), "https://example.org");
    }

    #[test]
    fn with_href_from_url_handle() {
        let link = Link::new("self");
        let url = Url::parse("https://example.org/orders").expect("valid url");
        let next = link.with_href(url);

        assert_eq!(next.href(), "https://example.org/orders");
        assert_eq!(link.href(), "");
    }

    #[test]
    fn with_attribute_rejects_empty_name() {
        let link = Link::new("self");
        let err = link.with_attribute("", "bar").unwrap_err();

        assert_eq!(kind(&err), &LinkError::InvalidArgument("name"));
    }

    #[test]
    fn with_attribute_accepts_every_value_shape() {
        let link = Link::new("self");

        for value in vec![
            Value::from(true),
            Value::from(42),
            Value::from(0.5),
            Value::from("bar"),
            Value::from(vec!["a", "b"]),
        ] {
            let next = link
                .with_attribute("foo", value.clone())
                .expect("a valid attribute");

            assert_eq!(next.attributes().get("foo"), Some(&value));
            assert!(link.attributes().is_empty());
        }
    }

    #[test]
    fn with_attribute_overwrites() {
        let link = Link::new("self")
            .with_attribute("foo", "bar")
            .expect("a valid attribute");
        let next = link
            .with_attribute("foo", "qux")
            .expect("a valid attribute");

        assert_eq!(next.attributes().get("foo"), Some(&Value::from("qux")));
        assert_eq!(link.attributes().get("foo"), Some(&Value::from("bar")));
    }

    #[test]
    fn without_attribute_tolerates_empty_name() {
        let link = Link::new("self")
            .with_attribute("foo", "bar")
            .expect("a valid attribute");
        let same = link.without_attribute("");

        assert!(ptr::eq(&*same, &link));
    }

    #[test]
    fn without_attribute_absent_is_identity() {
        let link = Link::new("self")
            .with_attribute("foo", "bar")
            .expect("a valid attribute");
        let same = link.without_attribute("bar");

        assert!(ptr::eq(&*same, &link));
    }

    #[test]
    fn without_attribute_removes() {
        let link = Link::new("self")
            .with_attribute("foo", "bar")
            .expect("a valid attribute");
        let next = link.without_attribute("foo");

        assert!(next.attributes().is_empty());
        assert_eq!(link.attributes().get("foo"), Some(&Value::from("bar")));
    }

    #[test]
    fn structural_equality() {
        let a = Link::new("self").with_href("/x");
        let b = Link::new("self").with_href("/x");

        assert_eq!(a, b);
        assert_ne!(a, a.with_href("/y"));
    }
}
