use anyhow::Result;
use kstring::KString;

use crate::{button::ButtonComponent,
            component::{Html, ToHtml},
            markup::{Node, att, is_present},
            myfrom::{MyFrom, kstring},
            slot::Slots};

/// `div.card-header` with title, subtitle and action buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderComponent {
    title: Option<KString>,
    subtitle: Option<KString>,
    actions: Slots<ButtonComponent>,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        HeaderComponent {
            title: None,
            subtitle: None,
            actions: Slots::new(),
        }
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<T>(mut self, title: T) -> Self
    where KString: MyFrom<T>
    {
        self.title = Some(kstring(title));
        self
    }

    pub fn subtitle<T>(mut self, subtitle: T) -> Self
    where KString: MyFrom<T>
    {
        self.subtitle = Some(kstring(subtitle));
        self
    }

    /// Usually a `ButtonComponent::card_action`.
    pub fn action(mut self, button: ButtonComponent) -> Self {
        self.actions.push(button);
        self
    }
}

/// `<div class="<class>">text</div>` if `text` is present.
pub(crate) fn text_div(html: &Html, class: &str, text: Option<&KString>) -> Result<Node> {
    match text {
        Some(text) if is_present(Some(text.as_str())) =>
            html.div([att("class", class)], [html.text(text)?]),
        _ => html.empty_node(),
    }
}

impl ToHtml for HeaderComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let actions = if self.actions.is_empty() {
            html.empty_node()?
        } else {
            html.div([att("class", "card-actions")], self.actions.to_html(html)?)?
        };
        html.div(
            [att("class", "card-header")],
            [
                text_div(html, "card-title", self.title.as_ref())?,
                text_div(html, "card-subtitle", self.subtitle.as_ref())?,
                actions,
            ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Render, test_html};

    #[test]
    fn t_header() -> Result<()> {
        let html = test_html();
        assert_eq!(HeaderComponent::new().render(&html)?.as_str(),
                   "<div class=\"card-header\"></div>");
        assert_eq!(HeaderComponent::new().title(" ").subtitle("Sub")
                   .render(&html)?.as_str(),
                   "<div class=\"card-header\"><div class=\"card-subtitle\">Sub</div></div>");
        Ok(())
    }

    #[test]
    fn t_actions_in_order() -> Result<()> {
        let html = test_html();
        let s = HeaderComponent::new()
            .action(ButtonComponent::card_action("A").url("/a"))
            .action(ButtonComponent::card_action("B").url("/b"))
            .render(&html)?;
        let a = s.as_str().find("href=\"/a\"").unwrap();
        let b = s.as_str().find("href=\"/b\"").unwrap();
        assert!(a < b);
        assert!(s.as_str().starts_with(
            "<div class=\"card-header\"><div class=\"card-actions\"><a "));
        Ok(())
    }
}
