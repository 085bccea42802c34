use std::mem;

use crate::{Error, Result};
use http::uri::{Authority, PathAndQuery, Scheme};
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::str::FromStr;

/// Signing context for request.
///
/// A request is decomposed into the parts the signing algorithm works on,
/// mutated in place, then applied back onto the original
/// `http::request::Parts`.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        let query_size = self.query_size();

        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            // Build path and query.
            uri_parts.path_and_query = {
                let paq = if query_size == 0 {
                    self.path
                } else {
                    let mut s = self.path;
                    s.reserve(query_size + 1);

                    s.push('?');
                    for (i, (k, v)) in self.query.iter().enumerate() {
                        if i > 0 {
                            s.push('&');
                        }

                        s.push_str(k);
                        if !v.is_empty() {
                            s.push('=');
                            s.push_str(v);
                        }
                    }

                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }

    /// Normalize header value by trimming leading and trailing spaces.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let starting_index = bs.iter().position(|b| *b != b' ').unwrap_or(0);
        let ending_offset = bs.iter().rev().position(|b| *b != b' ').unwrap_or(0);
        let ending_index = bs.len() - ending_offset;

        // This can't fail because we started with a valid HeaderValue and then only trimmed spaces
        *v = HeaderValue::from_bytes(&bs[starting_index..ending_index])
            .expect("invalid header value")
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts_for(uri: &str) -> http::request::Parts {
        http::Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_build_splits_path_and_query() {
        let mut parts = parts_for("https://example.com/meetings?max-results=3&next-token=abc");
        let req = SigningRequest::build(&mut parts).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.scheme, Scheme::HTTPS);
        assert_eq!(req.authority.as_str(), "example.com");
        assert_eq!(req.path, "/meetings");
        assert_eq!(
            req.query,
            vec![
                ("max-results".to_string(), "3".to_string()),
                ("next-token".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_without_authority_fails() {
        let mut parts = parts_for("/meetings");
        assert!(SigningRequest::build(&mut parts).is_err());
    }

    #[test]
    fn test_apply_round_trips_uri() {
        let uri = "https://example.com/meetings?max-results=3";
        let mut parts = parts_for(uri);

        let req = SigningRequest::build(&mut parts).unwrap();
        req.apply(&mut parts).unwrap();

        assert_eq!(parts.uri.to_string(), uri);
    }

    #[test]
    fn test_header_name_to_vec_sorted() {
        let mut parts = parts_for("https://example.com/");
        parts
            .headers
            .insert("x-amz-date", HeaderValue::from_static("20220313T072004Z"));
        parts
            .headers
            .insert("content-type", HeaderValue::from_static("application/json"));
        parts
            .headers
            .insert("host", HeaderValue::from_static("example.com"));

        let req = SigningRequest::build(&mut parts).unwrap();
        assert_eq!(
            req.header_name_to_vec_sorted(),
            vec!["content-type", "host", "x-amz-date"]
        );
    }

    #[test]
    fn test_header_value_normalize() {
        let mut v = HeaderValue::from_static("  application/json  ");
        SigningRequest::header_value_normalize(&mut v);
        assert_eq!(v, HeaderValue::from_static("application/json"));
    }
}
