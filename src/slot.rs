//! Named sub-component placeholders, filled before rendering.

use anyhow::{Result, bail};
use log::debug;

use crate::{component::{Html, ToHtml},
            markup::{Node, TryCollectBody}};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ComponentError {
    #[error("{component}: required slot {slot:?} was not filled")]
    MissingSlot { component: &'static str, slot: &'static str },
}

/// Holds at most one `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    name: &'static str,
    required: bool,
    value: Option<T>,
}

impl<T> Slot<T> {
    pub fn optional(name: &'static str) -> Self {
        Slot { name, required: false, value: None }
    }

    /// Rendering fails while a required slot is empty.
    pub fn required(name: &'static str) -> Self {
        Slot { name, required: true, value: None }
    }

    /// Filling an already filled slot replaces its value.
    pub fn set(&mut self, value: T) {
        if self.value.is_some() {
            debug!("slot {:?} filled again, replacing the previous value", self.name);
        }
        self.value = Some(value);
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ToHtml> Slot<T> {
    /// `component` names the owner, for the error message.
    pub fn to_html(&self, html: &Html, component: &'static str) -> Result<Node> {
        match &self.value {
            Some(value) => value.to_html(html),
            None if self.required =>
                bail!(ComponentError::MissingSlot { component, slot: self.name }),
            None => Ok(Node::None),
        }
    }
}

/// Holds any number of `T`, rendered in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Slots<T> {
    items: Vec<T>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Slots { items: Vec::new() }
    }
}

impl<T> Slots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: ToHtml> Slots<T> {
    pub fn to_html(&self, html: &Html) -> Result<Node> {
        Ok(Node::Fragment(self.iter()
                          .map(|item| item.to_html(html))
                          .try_collect_body()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{icon::IconRenderer, icon_store::MemoryIconStore, markup::Print};

    fn html() -> Html {
        Html::new(IconRenderer::new(MemoryIconStore::new()))
    }

    #[test]
    fn t_slot() -> Result<()> {
        let html = html();
        let mut s: Slot<Node> = Slot::optional("header");
        assert_eq!(s.name(), "header");
        assert!(!s.is_filled());
        assert_eq!(s.to_html(&html, "Card")?, Node::None);
        s.set(Node::text("a"));
        s.set(Node::text("b"));
        assert_eq!(s.get(), Some(&Node::text("b")));
        assert_eq!(s.to_html(&html, "Card")?.to_html_string(), "b");
        Ok(())
    }

    #[test]
    fn t_required_slot() {
        let html = html();
        let s: Slot<Node> = Slot::required("body");
        let err = s.to_html(&html, "page::Content").unwrap_err();
        assert_eq!(err.downcast_ref::<ComponentError>(),
                   Some(&ComponentError::MissingSlot {
                       component: "page::Content", slot: "body" }));
        assert_eq!(err.to_string(), "page::Content: required slot \"body\" was not filled");
    }

    #[test]
    fn t_slots_order() -> Result<()> {
        let html = html();
        let mut s: Slots<Node> = Slots::new();
        assert!(s.is_empty());
        for t in ["1", "2", "3"] {
            s.push(Node::text(t));
        }
        assert_eq!(s.len(), 3);
        assert_eq!(s.iter().map(|n| n.to_html_string()).collect::<Vec<_>>(),
                   ["1", "2", "3"]);
        assert_eq!(s.to_html(&html)?.to_html_string(), "123");
        Ok(())
    }
}
