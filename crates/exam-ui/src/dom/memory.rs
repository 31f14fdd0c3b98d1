//! In-memory document
//!
//! A small arena-backed element tree implementing [`Page`]. It supports the
//! simple selectors the behaviors use (`.class`, `#id`, `[attr]`, `tag`),
//! inline styles, form values, and scripted answers for confirmation prompts.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use super::Page;
use crate::error::{PageError, Result};

/// Handle to an element of a [`MemoryPage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

/// Description of an element to append to a [`MemoryPage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    text: String,
}

impl ElementSpec {
    /// Element with the given tag name
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark the element with the `required` attribute
    #[must_use]
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    /// Current value of a form control
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Text owned directly by the element
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[derive(Debug)]
struct NodeData {
    spec: ElementSpec,
    style: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(spec: ElementSpec, parent: Option<NodeId>) -> Self {
        Self {
            spec,
            style: BTreeMap::new(),
            parent,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct Dialogs {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

enum SimpleSelector {
    Class(String),
    Id(String),
    Attribute(String),
    Tag(String),
}

impl SimpleSelector {
    fn parse(selector: &str) -> Result<Self> {
        let selector = selector.trim();
        let unsupported = || PageError::Dom(format!("unsupported selector: {selector}"));

        let parsed = if let Some(class) = selector.strip_prefix('.') {
            Self::Class(class.to_string())
        } else if let Some(id) = selector.strip_prefix('#') {
            Self::Id(id.to_string())
        } else if let Some(inner) = selector.strip_prefix('[') {
            Self::Attribute(inner.strip_suffix(']').ok_or_else(unsupported)?.to_string())
        } else {
            Self::Tag(selector.to_ascii_lowercase())
        };

        let name = match &parsed {
            Self::Class(name) | Self::Id(name) | Self::Attribute(name) | Self::Tag(name) => name,
        };
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid { Ok(parsed) } else { Err(unsupported()) }
    }

    fn matches(&self, spec: &ElementSpec) -> bool {
        match self {
            Self::Class(class) => spec.classes.iter().any(|c| c == class),
            Self::Id(id) => spec.id.as_deref() == Some(id.as_str()),
            Self::Attribute(name) => spec.attributes.contains_key(name),
            Self::Tag(tag) => spec.tag == *tag,
        }
    }
}

/// Arena-backed document implementing [`Page`]
///
/// The page starts with a single root element (`body`). Confirmation prompts
/// are answered from a queue filled with [`MemoryPage::answer_next_confirm`];
/// an unanswered prompt counts as dismissed.
#[derive(Debug)]
pub struct MemoryPage {
    nodes: RefCell<Vec<NodeData>>,
    dialogs: RefCell<Dialogs>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::new(ElementSpec::new("body"), None)]),
            dialogs: RefCell::new(Dialogs::default()),
        }
    }

    /// The root element every other element descends from
    #[must_use]
    pub const fn root(&self) -> NodeId {
        ROOT
    }

    /// Append a new element as the last child of `parent`
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData::new(spec, Some(parent)));
        if let Some(parent) = nodes.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    /// Replace the current value of a form control, as typing would
    pub fn set_value(&self, node: NodeId, value: impl Into<String>) {
        if let Some(data) = self.nodes.borrow_mut().get_mut(node.0) {
            data.spec.value = Some(value.into());
        }
    }

    /// Queue the answer for the next confirmation prompt
    pub fn answer_next_confirm(&self, accept: bool) {
        self.dialogs.borrow_mut().answers.push_back(accept);
    }

    /// Every prompt shown so far, oldest first
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.dialogs.borrow().prompts.clone()
    }

    fn with_node<T>(&self, node: NodeId, f: impl FnOnce(&NodeData) -> T) -> Option<T> {
        self.nodes.borrow().get(node.0).map(f)
    }

    /// Pre-order descendants of `root`, excluding `root` itself
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes
            .get(root.0)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(data) = nodes.get(next.0) {
                stack.extend(data.children.iter().rev().copied());
            }
        }
        out
    }

    fn select_from(&self, root: NodeId, include_root: bool, selector: &str) -> Result<Vec<NodeId>> {
        let selector = SimpleSelector::parse(selector)?;
        let candidates = include_root
            .then_some(root)
            .into_iter()
            .chain(self.descendants(root));

        Ok(candidates
            .filter(|id| {
                self.with_node(*id, |n| selector.matches(&n.spec))
                    .unwrap_or(false)
            })
            .collect())
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        std::iter::once(ROOT)
            .chain(self.descendants(ROOT))
            .find(|node| {
                self.with_node(*node, |n| n.spec.id.as_deref() == Some(id))
                    .unwrap_or(false)
            })
    }

    fn select_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        self.select_from(ROOT, true, selector)
    }

    fn select_within(&self, root: &NodeId, selector: &str) -> Result<Vec<NodeId>> {
        self.select_from(*root, false, selector)
    }

    fn elements_by_tag(&self, root: &NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        self.descendants(*root)
            .into_iter()
            .filter(|node| self.with_node(*node, |n| n.spec.tag == tag).unwrap_or(false))
            .collect()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.with_node(*element, |n| match name {
            "id" => n.spec.id.clone(),
            "class" if !n.spec.classes.is_empty() => Some(n.spec.classes.join(" ")),
            _ => n.spec.attributes.get(name).cloned(),
        })
        .flatten()
    }

    fn text_content(&self, element: &NodeId) -> String {
        std::iter::once(*element)
            .chain(self.descendants(*element))
            .filter_map(|node| self.with_node(node, |n| n.spec.text.clone()))
            .collect()
    }

    fn field_value(&self, element: &NodeId) -> String {
        self.with_node(*element, |n| {
            n.spec
                .value
                .clone()
                .or_else(|| n.spec.attributes.get("value").cloned())
                .unwrap_or_default()
        })
        .unwrap_or_default()
    }

    fn style_property(&self, element: &NodeId, property: &str) -> Option<String> {
        self.with_node(*element, |n| n.style.get(property).cloned())
            .flatten()
    }

    fn set_style_property(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        let data = nodes
            .get_mut(element.0)
            .ok_or_else(|| PageError::Dom(format!("unknown node {}", element.0)))?;

        if value.is_empty() {
            data.style.remove(property);
        } else {
            data.style.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, element: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let Some(parent) = nodes.get_mut(element.0).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(parent) = nodes.get_mut(parent.0) {
            parent.children.retain(|child| child != element);
        }
    }

    fn is_attached(&self, element: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = *element;
        loop {
            if current == ROOT {
                return true;
            }
            match nodes.get(current.0).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let mut dialogs = self.dialogs.borrow_mut();
        dialogs.prompts.push(message.to_string());
        dialogs.answers.pop_front().unwrap_or(false)
    }
}
