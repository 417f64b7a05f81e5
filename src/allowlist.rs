//! HTML tag allowlist validation
//!
//! This module implements the one non-trivial contract of the crate: given
//! raw HTML text and a set of allowed tag names, report whether every
//! distinct element in the markup is on the allowlist.
//!
//! # Threat Model
//!
//! The input is **untrusted HTML**. It may be malformed, adversarially
//! large, or attempt to obscure tags with escape sequences. The check is
//! a pass/fail gate, not a sanitizer: disallowed tags are reported, never
//! removed. Callers needing a report of *which* tags violated must extend
//! [`collect_tag_names`] themselves.
//!
//! # Fail-Closed Policy
//!
//! Any uncertainty resolves to rejection. [`TagAllowlist::is_allowed`]
//! never panics and never surfaces an error: unexpected faults in the
//! parsing layer are contained at the boundary and mapped to `false`.
//! Recoverable malformed-markup diagnostics are not faults; the tolerant
//! parser proceeds and the decision is made over whatever elements it
//! recognized.
//!
//! # Caller Contracts
//!
//! - Tag-name comparison is case-sensitive against the names the parser
//!   emits (lowercase for HTML elements). An allowlist supplied in the
//!   wrong case rejects valid input; this is deliberate and not fixed up.
//! - No size or time limits are imposed here. Callers facing adversarial
//!   payloads bound the input before invoking the check.
//!
//! # Backslash Stripping
//!
//! Every literal backslash is removed from the input before parsing, so an
//! attempt to obscure a tag as `<p\>` is detected as a plain `<p>`. This
//! pre-parse normalization is inherited behavior carried over from the
//! upstream contract, paired with the tolerant parser rather than acting
//! as a security control on its own.

use std::borrow::Cow;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::error::CheckError;
use crate::parser::parse_body_fragment;

/// Set of tag names an HTML input is allowed to contain
///
/// # Examples
///
/// ```rust
/// use content_checks::TagAllowlist;
///
/// let allowlist = TagAllowlist::new(["p", "em"]);
/// assert!(allowlist.is_allowed("<p>hello <em>world</em></p>"));
/// assert!(!allowlist.is_allowed("<p>hello</p><script>evil()</script>"));
/// ```
#[derive(Debug, Clone)]
pub struct TagAllowlist {
    allowed: HashSet<String>,
}

impl TagAllowlist {
    /// Create an allowlist from any collection of tag names
    ///
    /// Names are stored as given; supply them in the case the parser
    /// emits (lowercase for HTML elements).
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a single tag name is on the allowlist
    pub fn contains(&self, tag: &str) -> bool {
        self.allowed.contains(tag)
    }

    /// Check whether every distinct tag in `html` is on the allowlist
    ///
    /// This is the fail-closed boundary: it never panics and never returns
    /// an error. All failure paths, including contained parser faults,
    /// resolve to `false`. Inputs without any markup (including the empty
    /// string) are vacuously allowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_checks::TagAllowlist;
    ///
    /// let allowlist = TagAllowlist::new(["p"]);
    /// assert!(allowlist.is_allowed(""));
    /// assert!(allowlist.is_allowed("plain text"));
    /// assert!(allowlist.is_allowed("<p>hello</p>"));
    /// assert!(!allowlist.is_allowed("<div>hello</div>"));
    /// ```
    pub fn is_allowed(&self, html: &str) -> bool {
        self.check(html).unwrap_or(false)
    }

    /// Result-returning variant of [`is_allowed`](Self::is_allowed)
    ///
    /// Strips backslashes, parses the input as a tolerant body fragment,
    /// collects the distinct element tag names and verifies membership.
    /// Recoverable malformed markup is not an error; the only error path
    /// is an unexpected fault in the parsing layer, contained here and
    /// mapped to [`CheckError::InternalError`].
    pub fn check(&self, html: &str) -> Result<bool, CheckError> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let cleaned = strip_backslashes(html);
            let dom = parse_body_fragment(&cleaned);
            let found = collect_tag_names(&dom);
            found.iter().all(|tag| self.allowed.contains(tag))
        }))
        .map_err(|_| CheckError::InternalError("HTML parsing panicked".to_string()))
    }
}

/// Collect the set of distinct element tag names in a parsed fragment
///
/// The synthetic root element created by the fragment algorithm is skipped;
/// only elements that came from the input are reported. Duplicate tags are
/// deduplicated by the set.
///
/// # Examples
///
/// ```rust
/// use content_checks::allowlist::collect_tag_names;
/// use content_checks::parser::parse_body_fragment;
///
/// let dom = parse_body_fragment("<div><span>hi</span></div><div></div>");
/// let tags = collect_tag_names(&dom);
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains("div"));
/// assert!(tags.contains("span"));
/// ```
pub fn collect_tag_names(dom: &RcDom) -> HashSet<String> {
    let mut tags = HashSet::new();
    for root in dom.document.children.borrow().iter() {
        if let NodeData::Element { .. } = root.data {
            // Skip the synthetic fragment root, walk its subtree.
            for child in root.children.borrow().iter() {
                collect_into(child, &mut tags);
            }
        }
    }
    tags
}

/// Recursively record element names below `node`
fn collect_into(node: &Handle, tags: &mut HashSet<String>) {
    if let NodeData::Element { ref name, .. } = node.data {
        tags.insert(name.local.as_ref().to_string());
    }
    for child in node.children.borrow().iter() {
        collect_into(child, tags);
    }
}

/// Remove every literal backslash before parsing
///
/// Borrows the input unchanged when there is nothing to strip.
fn strip_backslashes(html: &str) -> Cow<'_, str> {
    if html.contains('\\') {
        Cow::Owned(html.replace('\\', ""))
    } else {
        Cow::Borrowed(html)
    }
}
