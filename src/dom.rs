//! Small helpers for building and inspecting detached `rcdom` trees.
//!
//! Nodes are created directly rather than parsed from markup, so text and
//! attribute values are stored verbatim and only escaped on serialization.

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use markup5ever_rcdom::{NodeData, SerializableHandle};

pub use markup5ever_rcdom::Handle;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local))
}

// attributes on HTML elements live in the null namespace
fn attr_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(local))
}

/// Creates a detached HTML element with the given attributes, in order.
pub fn element(tag: &str, attrs: &[(&str, &str)]) -> Handle {
    let attrs = attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: attr_name(name),
            value: StrTendril::from_slice(value),
        })
        .collect();
    markup5ever_rcdom::Node::new(NodeData::Element {
        name: html_name(tag),
        attrs: RefCell::new(attrs),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Appends `child` as the last child of `parent`.
pub fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Appends a text node, merging with a trailing text node if there is one.
pub fn append_text(parent: &Handle, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = parent.children.borrow().last() {
        if let NodeData::Text { contents } = &last.data {
            contents.borrow_mut().push_slice(text);
            return;
        }
    }
    let node = markup5ever_rcdom::Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    });
    append(parent, node);
}

fn serialize_with(handle: &Handle, traversal_scope: TraversalScope) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    if let Err(e) = serialize(&mut buf, &SerializableHandle::from(handle.clone()), opts) {
        tracing::warn!(error = %e, "failed to serialize node");
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Markup of the node itself and everything below it.
pub fn outer_html(handle: &Handle) -> String {
    serialize_with(handle, TraversalScope::IncludeNode)
}

/// Markup of the node's children only.
pub fn inner_html(handle: &Handle) -> String {
    serialize_with(handle, TraversalScope::ChildrenOnly(None))
}

pub fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

pub fn attr(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Whitespace-separated tokens of the `class` attribute, in order.
pub fn class_list(handle: &Handle) -> Vec<String> {
    attr(handle, "class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|c| matches!(c.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// All descendant elements (excluding `handle`) carrying `class`, in document order.
pub fn find_by_class(handle: &Handle, class: &str) -> Vec<Handle> {
    let mut out = Vec::new();
    collect_by_class(handle, class, &mut out);
    out
}

fn collect_by_class(handle: &Handle, class: &str, out: &mut Vec<Handle>) {
    for child in handle.children.borrow().iter() {
        if class_list(child).iter().any(|c| c == class) {
            out.push(child.clone());
        }
        collect_by_class(child, class, out);
    }
}

/// Concatenated text of all descendant text nodes.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// True when the node has no live parent.
pub fn is_detached(handle: &Handle) -> bool {
    let parent = handle.parent.take();
    let detached = parent.as_ref().and_then(|p| p.upgrade()).is_none();
    handle.parent.set(parent);
    detached
}
