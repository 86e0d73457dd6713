use anyhow::Result;
use kstring::KString;

use crate::{component::{ClassList, Html, ToHtml},
            markup::{Node, att},
            myfrom::{MyFrom, kstring}};

#[derive(Debug, Clone, PartialEq)]
pub struct FooterComponent {
    class: Option<KString>,
    content: Node,
}

impl Default for FooterComponent {
    fn default() -> Self {
        FooterComponent { class: None, content: Node::None }
    }
}

impl FooterComponent {
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

impl ToHtml for FooterComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let class = ClassList::new().with("card-footer").with_opt(self.class.as_deref());
        html.div([att("class", class.to_string())], [self.content.clone()])
    }
}
