//! Small helpers over the `markup5ever_rcdom` tree shared by the HTML parser and serializer.

use crate::error::FormatError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_fragment, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Parse an HTML fragment as the content of a `<body>` and return its top-level nodes.
///
/// html5ever repairs malformed input, so this never fails. Head-only elements such as
/// `<title>` stay where they appear.
pub(crate) fn parse_body(html: &str) -> Vec<Handle> {
    let context = QualName::new(None, ns!(html), LocalName::from("body"));
    let dom = parse_fragment(RcDom::default(), Default::default(), context, Vec::new(), false)
        .one(html);

    // Fragment nodes hang off a synthetic <html> root. Dropping a node empties the
    // children of its whole subtree, so they are detached before `dom` goes away.
    let root = dom.document.children.borrow().first().cloned();
    root.map(|root| std::mem::take(&mut *root.children.borrow_mut()))
        .unwrap_or_default()
}

/// Local name of an element node
pub(crate) fn element_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Value of attribute `name` on an element node
pub(crate) fn attribute(node: &Node, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of `node` and its descendants
pub(crate) fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } if is_dropped(&name.local) => {}
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Elements whose content never reaches the output
pub(crate) fn is_dropped(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "template")
}

/// Create an HTML element node
pub(crate) fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub(crate) fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Append `child` to `parent`, re-parenting it
pub(crate) fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Serialize a single node, including the node itself
pub(crate) fn serialize_node(node: &Handle) -> Result<String, FormatError> {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let mut output = Vec::new();
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| FormatError::SerializationError(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
