use anyhow::Result;
use kstring::KString;

use crate::{component::{Html, ToHtml},
            markup::{Node, att},
            myfrom::{MyFrom, kstring}};

/// Which edge of the card the colored status bar is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPosition {
    #[default]
    Top,
    Start,
    Bottom,
}

impl StatusPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusPosition::Top => "top",
            StatusPosition::Start => "start",
            StatusPosition::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusComponent {
    color: KString,
    position: StatusPosition,
}

impl Default for StatusComponent {
    fn default() -> Self {
        StatusComponent {
            color: KString::from_static("blue"),
            position: StatusPosition::default(),
        }
    }
}

impl StatusComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// A Tabler color name, used as `bg-<color>`.
    pub fn color<T>(mut self, color: T) -> Self
    where KString: MyFrom<T>
    {
        self.color = kstring(color);
        self
    }

    pub fn position(mut self, position: StatusPosition) -> Self {
        self.position = position;
        self
    }
}

impl ToHtml for StatusComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        html.div([att("class", format!("card-status-{} bg-{}",
                                       self.position.as_str(), self.color))],
                 [])
    }
}
