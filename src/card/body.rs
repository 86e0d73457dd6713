use anyhow::Result;
use kstring::KString;

use crate::{card::{header::text_div, present},
            component::{ClassList, Html, ToHtml},
            markup::{Node, att},
            myfrom::{MyFrom, kstring}};

#[derive(Debug, Clone, PartialEq)]
pub struct BodyComponent {
    title: Option<KString>,
    class: Option<KString>,
    content: Node,
}

impl Default for BodyComponent {
    fn default() -> Self {
        BodyComponent { title: None, class: None, content: Node::None }
    }
}

impl BodyComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<T>(mut self, title: T) -> Self
    where KString: MyFrom<T>
    {
        self.title = Some(kstring(title));
        self
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

impl ToHtml for BodyComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let class = ClassList::new().with("card-body").with_opt(self.class.as_deref());
        html.div(
            [att("class", class.to_string())],
            [
                text_div(html, "card-title", self.title.as_ref())?,
                present(&self.content),
            ])
    }
}
