//! The rendering context and the trait all components implement.

use std::{fmt::{self, Display},
          ops::Deref};

use anyhow::Result;
use itertools::Itertools;

use crate::{icon::IconRenderer,
            markup::{HtmlBuilder, Node, Print, SafeHtml, is_present}};

/// Passed to every `ToHtml::to_html` call: builds (and verifies)
/// elements, and renders the icons components embed.
#[derive(Debug, Clone)]
pub struct Html {
    builder: HtmlBuilder,
    icons: IconRenderer,
}

impl Html {
    /// With DOM structure verification.
    pub fn new(icons: IconRenderer) -> Self {
        Html { builder: HtmlBuilder::new(true), icons }
    }

    pub fn unverified(icons: IconRenderer) -> Self {
        Html { builder: HtmlBuilder::new(false), icons }
    }

    pub fn icons(&self) -> &IconRenderer {
        &self.icons
    }
}

impl Deref for Html {
    type Target = HtmlBuilder;

    fn deref(&self) -> &Self::Target {
        &self.builder
    }
}

pub trait ToHtml {
    fn to_html(&self, html: &Html) -> Result<Node>;
}

pub trait Render {
    /// Serialize the component, ready for inclusion in a page.
    fn render(&self, html: &Html) -> Result<SafeHtml>;
}

impl<T: ToHtml + ?Sized> Render for T {
    fn render(&self, html: &Html) -> Result<SafeHtml> {
        Ok(self.to_html(html)?.to_safe_html())
    }
}

/// Free-form content given by the caller is already a node.
impl ToHtml for Node {
    fn to_html(&self, _html: &Html) -> Result<Node> {
        Ok(self.clone())
    }
}

/// A CSS class attribute value under construction. Blank entries
/// are dropped, the rest joined with single spaces, in insertion
/// order and without de-duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if is_present(Some(class.as_str())) {
            self.0.push(class);
        }
        self
    }

    pub fn with_opt(self, class: Option<impl Into<String>>) -> Self {
        match class {
            Some(class) => self.with(class),
            None => self,
        }
    }

    pub fn with_if(self, cond: bool, class: impl Into<String>) -> Self {
        if cond {
            self.with(class)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|c| c.trim()).join(" "))
    }
}

/// Verifying context over the bundled icon set.
#[cfg(test)]
pub fn test_html() -> Html {
    use crate::{config, icon_store::FsIconStore};
    Html::new(IconRenderer::new(FsIconStore::new(config::bundled_icons_dir())))
}
