use anyhow::Result;
use kstring::KString;

use crate::{button::ButtonComponent,
            component::{Html, ToHtml},
            markup::{Node, att, is_present},
            myfrom::{MyFrom, kstring},
            slot::Slot};

/// Title block on the left, action buttons on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderComponent {
    title: Option<KString>,
    subtitle: Option<KString>,
    primary_action: Slot<ButtonComponent>,
    secondary_action: Slot<ButtonComponent>,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        HeaderComponent {
            title: None,
            subtitle: None,
            primary_action: Slot::optional("primary_action"),
            secondary_action: Slot::optional("secondary_action"),
        }
    }
}

impl HeaderComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shown small, above the subtitle.
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

    /// Usually a `ButtonComponent::page_primary`.
    pub fn primary_action(mut self, button: ButtonComponent) -> Self {
        self.primary_action.set(button);
        self
    }

    /// Usually a `ButtonComponent::page_secondary`.
    pub fn secondary_action(mut self, button: ButtonComponent) -> Self {
        self.secondary_action.set(button);
        self
    }
}

impl ToHtml for HeaderComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        const NAME: &str = "page::Header";
        let text_elt = |tag: &str, class: &str, text: &Option<KString>| -> Result<Node> {
            match text.as_deref() {
                Some(text) if is_present(Some(text)) =>
                    html.element(tag, [att("class", class)], [html.text(text)?]),
                _ => html.empty_node(),
            }
        };
        let titles = html.div(
            [att("class", "col")],
            [
                text_elt("div", "page-pretitle", &self.title)?,
                text_elt("h2", "page-title", &self.subtitle)?,
            ])?;
        let actions = html.div(
            [att("class", "col-auto ms-auto d-print-none")],
            [html.div(
                [att("class", "btn-list")],
                [
                    self.secondary_action.to_html(html, NAME)?,
                    self.primary_action.to_html(html, NAME)?,
                ])?])?;
        html.div(
            [att("class", "page-header d-print-none")],
            [html.div(
                [att("class", "container-xl")],
                [html.div([att("class", "row g-2 align-items-center")],
                          [titles, actions])?])?])
    }
}
