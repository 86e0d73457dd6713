pub mod myfrom;
pub mod html {
    pub mod meta;
}
pub mod markup;
pub mod attr_name;
pub mod util;
pub mod io_util;
pub mod config;
pub mod svg;
pub mod icon_store;
pub mod icon;
pub mod slot;
pub mod component;
pub mod button;
pub mod card;
pub mod page;
pub mod navbar;

pub use crate::{button::ButtonComponent,
                card::CardComponent,
                component::{Html, Render, ToHtml},
                icon::{IconComponent, IconRenderer, IconRequest, Variant},
                navbar::{NavbarComponent, NavbarItemComponent},
                page::PageComponent};
