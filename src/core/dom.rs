// src/core/dom.rs
//! Document-order index over a parsed HTML page.
//!
//! `scraper` (html5ever) does the tolerant parsing; the tree is then flattened
//! into a `Vec<Node>` in source order. Every node records the exclusive end of
//! its subtree, so "the next `<p>` after this `<dt>`" or "all
//! `<p>` before the next `<hr>`" become plain index ranges.
//!
//! Invariant: for node `i`, its descendants are exactly `i + 1 .. end(i)`.

use std::ops::Range;

use scraper::{Html, Node as HtmlNode};

/// Elements whose text never counts as page content.
const OPAQUE: &[&str] = &["script", "style", "noscript", "template"];

#[derive(Clone, Debug, PartialEq, Eq)]
enum NodeKind {
    Element { tag: String, attrs: Vec<(String, String)> },
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    end: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Doc {
    nodes: Vec<Node>,
}

enum Frame<N> {
    Enter(N),
    Exit(usize),
}

impl Doc {
    /// Parse and flatten. Never fails; html5ever repairs whatever it is given.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        let mut nodes: Vec<Node> = Vec::new();

        // Explicit stack: archive pages can nest deeply.
        let mut stack = vec![Frame::Enter(*parsed.root_element())];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Exit(idx) => {
                    let end = nodes.len();
                    nodes[idx].end = end;
                }
                Frame::Enter(node) => match node.value() {
                    HtmlNode::Element(el) => {
                        let idx = nodes.len();
                        let tag = el.name().to_ascii_lowercase();
                        let opaque = OPAQUE.contains(&tag.as_str());
                        nodes.push(Node {
                            kind: NodeKind::Element {
                                tag,
                                attrs: el.attrs().map(|(k, v)| (s!(k), s!(v))).collect(),
                            },
                            end: idx + 1,
                        });
                        stack.push(Frame::Exit(idx));
                        if opaque {
                            continue;
                        }
                        let children: Vec<_> = node.children().collect();
                        for child in children.into_iter().rev() {
                            stack.push(Frame::Enter(child));
                        }
                    }
                    HtmlNode::Text(text) => {
                        let idx = nodes.len();
                        nodes.push(Node {
                            kind: NodeKind::Text(s!(&**text)),
                            end: idx + 1,
                        });
                    }
                    _ => {}
                },
            }
        }

        Doc { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag(&self, i: usize) -> Option<&str> {
        match &self.nodes.get(i)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn is_tag(&self, i: usize, tag: &str) -> bool {
        self.tag(i) == Some(tag)
    }

    pub fn attr(&self, i: usize, name: &str) -> Option<&str> {
        match &self.nodes.get(i)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Exclusive end of node `i`'s subtree.
    pub fn subtree_end(&self, i: usize) -> usize {
        self.nodes.get(i).map_or(i, |n| n.end)
    }

    /// Indices of `<tag>` elements inside `range`, in source order.
    pub fn tags_in<'a>(&'a self, range: Range<usize>, tag: &'a str) -> impl Iterator<Item = usize> + 'a {
        let end = range.end.min(self.nodes.len());
        (range.start.min(end)..end).filter(move |&i| self.is_tag(i, tag))
    }

    pub fn find_all(&self, tag: &str) -> Vec<usize> {
        self.tags_in(0..self.nodes.len(), tag).collect()
    }

    /// First `<tag>` strictly after `from` in source order (descendants included).
    pub fn next_of_tag(&self, from: usize, tag: &str) -> Option<usize> {
        self.tags_in(from + 1..self.nodes.len(), tag).next()
    }

    pub fn descendants_of_tag<'a>(&'a self, i: usize, tag: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.tags_in(i + 1..self.subtree_end(i), tag)
    }

    pub fn first_descendant_of_tag(&self, i: usize, tag: &str) -> Option<usize> {
        self.descendants_of_tag(i, tag).next()
    }

    /// First element that starts after node `i`'s subtree has closed.
    pub fn next_element_after(&self, i: usize) -> Option<usize> {
        (self.subtree_end(i)..self.nodes.len()).find(|&j| self.tag(j).is_some())
    }

    fn span(&self, i: usize) -> &[Node] {
        let end = self.subtree_end(i).min(self.nodes.len());
        &self.nodes[i.min(end)..end]
    }

    /// All text under node `i`, concatenated as-is.
    pub fn text(&self, i: usize) -> String {
        let mut out = s!();
        for n in self.span(i) {
            if let NodeKind::Text(t) = &n.kind {
                out.push_str(t);
            }
        }
        out
    }

    /// Trimmed, non-empty text nodes under node `i`.
    pub fn strings(&self, i: usize) -> Vec<&str> {
        self.span(i)
            .iter()
            .filter_map(|n| match &n.kind {
                NodeKind::Text(t) => Some(t.trim()),
                NodeKind::Element { .. } => None,
            })
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Text of the whole page.
    pub fn page_text(&self) -> String {
        if self.nodes.is_empty() { s!() } else { self.text(0) }
    }
}
