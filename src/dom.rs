//! DOM helpers
//!
//! Thin adapter over the `dom_query` crate. Table traversal only follows
//! direct children: a table nested inside a cell never contributes rows or
//! cells to its parent.

pub use dom_query::{Document, NodeRef, Selection};

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Malformed markup is recovered the way browsers do; this never fails.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Whether `node` is an element named `tag` (ASCII case-insensitive).
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

// === Tree Navigation ===

/// Direct element children of `node` named `tag`, in document order.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>, tag: &str) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(|child| is_tag(child, tag))
        .collect()
}

/// Direct row children of a table's body sections (`table > tbody > tr`).
#[must_use]
pub fn body_rows<'a>(table: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    element_children(table, "tbody")
        .iter()
        .flat_map(|body| element_children(body, "tr"))
        .collect()
}

/// Text of the first `parent_tag > child_tag` grandchild of `node` whose
/// cleaned text is non-empty.
///
/// Used for `td > a` and `td > b` lookups within a row.
#[must_use]
pub fn first_grandchild_text(node: &NodeRef, parent_tag: &str, child_tag: &str) -> Option<String> {
    element_children(node, parent_tag)
        .iter()
        .flat_map(|parent| element_children(parent, child_tag))
        .map(|child| clean_text(&child.text()))
        .find(|text| !text.is_empty())
}

/// Direct, non-blank text nodes of each `cell_tag` child of `node`, cleaned,
/// in document order.
#[must_use]
pub fn own_cell_texts(node: &NodeRef, cell_tag: &str) -> Vec<String> {
    element_children(node, cell_tag)
        .iter()
        .flat_map(|cell| cell.children())
        .filter(NodeRef::is_text)
        .map(|text| clean_text(&text.text()))
        .filter(|text| !text.is_empty())
        .collect()
}

// === Text Content ===

/// Collapse runs of whitespace (non-breaking spaces included) into single
/// spaces and trim the ends.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_node<'a>(doc: &'a Document, selector: &str) -> NodeRef<'a> {
        let sel = doc.select(selector);
        match sel.nodes().first() {
            Some(node) => *node,
            None => panic!("no node for {selector}"),
        }
    }

    #[test]
    fn body_rows_ignores_nested_tables() {
        let doc = parse(
            r#"<table id="outer">
                <tr><td>1</td></tr>
                <tr><td><table><tr><td>inner</td></tr><tr><td>inner</td></tr></table></td></tr>
            </table>"#,
        );
        let table = first_node(&doc, "#outer");
        assert_eq!(body_rows(&table).len(), 2);
    }

    #[test]
    fn first_grandchild_text_skips_blank_and_nested_links() {
        let doc = parse(
            r#"<table><tr id="r">
                <td><span class="flagicon"><a href="/wiki/X">Flag</a></span></td>
                <td><a href="/a"> </a><a href="/b">Steve  Smith</a></td>
            </tr></table>"#,
        );
        let row = first_node(&doc, "#r");
        assert_eq!(first_grandchild_text(&row, "td", "a").as_deref(), Some("Steve Smith"));
        assert_eq!(first_grandchild_text(&row, "td", "b"), None);
    }

    #[test]
    fn own_cell_texts_only_reads_direct_text() {
        let doc = parse(
            r#"<table><tr id="r">
                <td>5</td>
                <td><a href="/x">John Doe</a></td>
                <td>
                </td>
                <td>q</td>
            </tr></table>"#,
        );
        let row = first_node(&doc, "#r");
        assert_eq!(own_cell_texts(&row, "td"), vec!["5", "q"]);
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Steve\n\t Smith\u{a0} "), "Steve Smith");
        assert_eq!(clean_text(" \n "), "");
    }
}
