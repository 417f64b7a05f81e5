//! Tolerant HTML parsing using html5ever
//!
//! # Overview
//!
//! The parser uses Mozilla's html5ever library, which implements the WHATWG
//! HTML5 parsing algorithm. Malformed markup is handled the same way modern
//! browsers handle it: the parser recovers and produces a tree for whatever
//! it managed to recognize, it never fails.
//!
//! Input is parsed with the *fragment* algorithm against a `<body>` context
//! element rather than as a full document. Full-document parsing synthesizes
//! `html`, `head` and `body` elements that were never present in the input,
//! which would poison any inspection of the tags actually written by the
//! author. The fragment algorithm still creates a single synthetic root
//! element; consumers walking the tree skip it.
//!
//! # Diagnostics
//!
//! Recoverable parse errors (unclosed tags, misnesting, stray markup) are
//! buffered on the per-call [`RcDom`] in `RcDom::errors` and dropped with
//! the document. They are never reported and cannot leak into a later call:
//! every invocation allocates a fresh parser and sink, so concurrent calls
//! from multiple threads are safe without locking.
//!
//! # Examples
//!
//! ```rust
//! use content_checks::parser::parse_body_fragment;
//!
//! // Well-formed markup
//! let dom = parse_body_fragment("<p>hello</p>");
//!
//! // Malformed markup parses too, without error
//! let dom = parse_body_fragment("<div><span>unclosed");
//!
//! // The synthetic fragment root is the document's only element child
//! assert_eq!(dom.document.children.borrow().len(), 1);
//! ```

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::RcDom;

/// Parse text as an HTML body fragment into a DOM tree
///
/// This function is infallible: html5ever recovers from arbitrary malformed
/// markup per the HTML5 specification, so any input (including the empty
/// string or plain text without markup) yields a tree.
///
/// # Arguments
///
/// * `html` - Arbitrary text, possibly containing malformed markup
///
/// # Returns
///
/// The parsed [`RcDom`]. The document's single element child is the root
/// synthesized by the fragment algorithm; the parsed content hangs below it.
pub fn parse_body_fragment(html: &str) -> RcDom {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    parse_fragment(RcDom::default(), Default::default(), context, vec![]).one(html)
}
