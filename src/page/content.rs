use anyhow::Result;

use crate::{component::{Html, ToHtml},
            markup::Node,
            page::{BodyComponent, HeaderComponent},
            slot::Slot};

/// Page header followed by the page body. The body is required.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentComponent {
    header: Slot<HeaderComponent>,
    body: Slot<BodyComponent>,
}

impl Default for ContentComponent {
    fn default() -> Self {
        ContentComponent {
            header: Slot::optional("header"),
            body: Slot::required("body"),
        }
    }
}

impl ContentComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: HeaderComponent) -> Self {
        self.header.set(header);
        self
    }

    pub fn body(mut self, body: BodyComponent) -> Self {
        self.body.set(body);
        self
    }
}

impl ToHtml for ContentComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        const NAME: &str = "page::Content";
        Ok(Node::Fragment(vec![
            self.header.to_html(html, NAME)?,
            self.body.to_html(html, NAME)?,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{component::{Render, test_html},
                slot::ComponentError};

    #[test]
    fn t_body_required() {
        let html = test_html();
        let err = ContentComponent::new()
            .header(HeaderComponent::new().title("x"))
            .render(&html)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<ComponentError>(),
                   Some(&ComponentError::MissingSlot { component: "page::Content", slot: "body" }));
    }

    #[test]
    fn t_body_only() -> Result<()> {
        let html = test_html();
        assert_eq!(ContentComponent::new().body(BodyComponent::new().content("x"))
                   .render(&html)?.as_str(),
                   "<div class=\"page-body\"><div class=\"container-xl\">x</div></div>");
        Ok(())
    }
}
