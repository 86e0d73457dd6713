//! Rendering defaults and where the icon assets live.

use std::path::PathBuf;

use anyhow::Result;

use crate::util::getenv;

pub const DEFAULT_ICON_SIZE: u32 = 24;
pub const DEFAULT_STROKE_WIDTH: f64 = 2.;
/// Size of icons embedded in buttons.
pub const BUTTON_ICON_SIZE: u32 = 20;

/// Env var overriding the icon asset root.
pub const ICONS_DIR_ENV: &str = "TABLER_ICONS_DIR";

/// The icon set shipped with this crate.
pub fn bundled_icons_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/icons"))
}

/// `$TABLER_ICONS_DIR` if set, the bundled icon set otherwise.
pub fn icons_dir() -> Result<PathBuf> {
    Ok(match getenv(ICONS_DIR_ENV)? {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => bundled_icons_dir(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_bundled_icons_dir() {
        let dir = bundled_icons_dir();
        assert!(dir.join("outline").join("home.svg").is_file());
        assert!(dir.join("filled").join("star.svg").is_file());
    }

    // The only test touching this variable.
    #[test]
    fn t_icons_dir_from_env() -> Result<()> {
        use crate::icon::{IconRenderer, IconRequest, RenderedIconKind};

        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("outline"))?;
        std::fs::write(dir.path().join("outline/dot.svg"),
                       "<svg xmlns=\"http://www.w3.org/2000/svg\"/>")?;

        std::env::set_var(ICONS_DIR_ENV, dir.path());
        assert_eq!(icons_dir()?, dir.path());
        let renderer = IconRenderer::from_env()?;
        assert_eq!(renderer.render(&IconRequest::new("dot")).kind(), RenderedIconKind::Asset);
        // Not in the custom dir, though bundled.
        assert_eq!(renderer.render(&IconRequest::new("home")).kind(),
                   RenderedIconKind::Placeholder);

        std::env::set_var(ICONS_DIR_ENV, "");
        assert_eq!(icons_dir()?, bundled_icons_dir());

        std::env::remove_var(ICONS_DIR_ENV);
        assert_eq!(icons_dir()?, bundled_icons_dir());
        assert_eq!(IconRenderer::from_env()?.render(&IconRequest::new("home")).kind(),
                   RenderedIconKind::Asset);
        Ok(())
    }
}
