//! Links styled as Tabler buttons.

use anyhow::Result;
use kstring::KString;
use log::warn;

use crate::{attr_name::{dasherize, is_valid_attr_name},
            component::{ClassList, Html, ToHtml},
            config::BUTTON_ICON_SIZE,
            icon::IconRequest,
            markup::{Node, is_present},
            myfrom::{MyFrom, kstring}};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Solid,
    /// Transparent until hovered.
    Ghost,
}

impl ButtonVariant {
    fn class_prefix(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// `<a class="btn …" href="…">[icon]label</a>`
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonComponent {
    label: KString,
    url: KString,
    color: KString,
    size: Option<ButtonSize>,
    icon: Option<KString>,
    full_width: bool,
    variant: ButtonVariant,
    class: Option<KString>,
    attributes: Vec<(KString, KString)>,
    // Set by the presets; replaces the computed class list.
    fixed_classes: Option<&'static str>,
}

impl ButtonComponent {
    /// An empty `label` with an icon makes an icon-only button.
    pub fn new<T>(label: T) -> Self
    where KString: MyFrom<T>
    {
        ButtonComponent {
            label: kstring(label),
            url: KString::from_static("#"),
            color: KString::from_static("primary"),
            size: None,
            icon: None,
            full_width: false,
            variant: ButtonVariant::default(),
            class: None,
            attributes: Vec::new(),
            fixed_classes: None,
        }
    }

    /// For the action area of a card header.
    pub fn card_action<T>(label: T) -> Self
    where KString: MyFrom<T>
    {
        Self::new(label).preset("", Some("arrow-left"), Some("btn btn-action"))
    }

    /// The main call to action of a page header.
    pub fn page_primary<T>(label: T) -> Self
    where KString: MyFrom<T>
    {
        Self::new(label).preset("primary", None, None)
    }

    pub fn page_secondary<T>(label: T) -> Self
    where KString: MyFrom<T>
    {
        Self::new(label).preset("", None, None)
    }

    /// "Back to …" navigation above a page title.
    pub fn page_headline<T>(label: T) -> Self
    where KString: MyFrom<T>
    {
        Self::new(label).preset("", Some("arrow-left"),
                                Some("btn btn-ghost-secondary btn-sm ms-0"))
    }

    // Must stay non-generic, the constructors' `MyFrom<T>` bounds
    // would otherwise fix the type of the literal arguments.
    fn preset(
        mut self,
        color: &'static str,
        icon: Option<&'static str>,
        fixed_classes: Option<&'static str>
    ) -> Self {
        self.color = KString::from_static(color);
        if let Some(icon) = icon {
            self.icon = Some(KString::from_static(icon));
        }
        self.fixed_classes = fixed_classes;
        self
    }

    pub fn url<T>(mut self, url: T) -> Self
    where KString: MyFrom<T>
    {
        self.url = kstring(url);
        self
    }

    /// A Tabler color name (`primary`, `danger`, ...); empty for a
    /// neutral button.
    pub fn color<T>(mut self, color: T) -> Self
    where KString: MyFrom<T>
    {
        self.color = kstring(color);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn icon<T>(mut self, name: T) -> Self
    where KString: MyFrom<T>
    {
        self.icon = Some(kstring(name));
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class<T>(mut self, class: T) -> Self
    where KString: MyFrom<T>
    {
        self.class = Some(kstring(class));
        self
    }

    /// Underscores in `key` become dashes (`data_turbo_method`).
    /// Keys that are not valid attribute names are dropped.
    pub fn attribute<K, V>(mut self, key: K, val: V) -> Self
    where KString: MyFrom<K> + MyFrom<V>
    {
        let key = dasherize(&kstring(key));
        if key.eq_ignore_ascii_case("class") {
            self.class = Some(kstring(val));
        } else if is_valid_attr_name(&key) {
            self.attributes.push((KString::from_string(key), kstring(val)));
        } else {
            warn!("button \"{}\": ignoring invalid attribute name {key:?}", self.label);
        }
        self
    }

    fn has_label(&self) -> bool {
        is_present(Some(self.label.as_str()))
    }

    pub fn classes(&self) -> String {
        if let Some(fixed) = self.fixed_classes {
            return fixed.to_string()
        }
        let color = if is_present(Some(self.color.as_str())) {
            Some(format!("{}-{}", self.variant.class_prefix(), self.color))
        } else {
            None
        };
        ClassList::new()
            .with_opt(self.class.as_deref())
            .with("btn")
            .with_opt(color)
            .with_opt(self.size.map(|s| format!("btn-{}", s.as_str())))
            .with_if(self.icon.is_some() && !self.has_label(), "btn-icon")
            .with_if(self.full_width, "w-100")
            .to_string()
    }
}

impl ToHtml for ButtonComponent {
    fn to_html(&self, html: &Html) -> Result<Node> {
        let icon = match &self.icon {
            Some(name) => {
                let request = IconRequest::new(name)
                    .size(BUTTON_ICON_SIZE)
                    .class(if self.has_label() { Some("me-2") } else { None });
                Node::from(html.icons().render(&request))
            }
            None => Node::None,
        };
        let mut attr = vec![(KString::from_static("class"), KString::from_string(self.classes()))];
        attr.extend(self.attributes.iter().cloned());
        attr.push((KString::from_static("href"), self.url.clone()));
        html.a(attr, [icon, html.text(&self.label)?])
    }
}
