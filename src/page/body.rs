use anyhow::Result;

use crate::{component::{Html, ToHtml},
            markup::{Node, att}};

/// `div.page-body > div.container-xl > content`
#[derive(Debug, Clone, PartialEq)]
pub struct BodyComponent {
    content: Node,
}

impl Default for BodyComponent {
    fn default() -> Self {
        BodyComponent { content: Node::None }
    }
}

impl BodyComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = content.into();
        self
    }
}

impl ToHtml for BodyComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        html.div(
            [att("class", "page-body")],
            [html.div([att("class", "container-xl")], [self.content.clone()])?])
    }
}
