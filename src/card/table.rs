use anyhow::Result;
use kstring::KString;

use crate::{component::{Html, ToHtml},
            markup::{Node, att, is_present},
            myfrom::{MyFrom, kstring}};

/// Wrapper around a table; `table-responsive` unless a class is given.
#[derive(Debug, Clone, PartialEq)]
pub struct TableComponent {
    class: Option<KString>,
    content: Node,
}

impl Default for TableComponent {
    fn default() -> Self {
        TableComponent { class: None, content: Node::None }
    }
}

impl TableComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class<T>(mut self, class: T) -> Self
    where KString: MyFrom<T>
    {
        self.class = Some(kstring(class));
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = content.into();
        self
    }
}

impl ToHtml for TableComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let class = match self.class.as_deref() {
            Some(class) if is_present(Some(class)) => class,
            _ => "table-responsive",
        };
        html.div([att("class", class)], [self.content.clone()])
    }
}
