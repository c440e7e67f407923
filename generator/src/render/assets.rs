//! Static assets shared by every page.

/// Site stylesheet, embedded at compile time.
pub const STYLESHEET: &str = include_str!("../../assets/styles.css");

/// Directory (under the output root) holding shared assets.
pub const ASSETS_DIR: &str = "assets";

/// Stylesheet file name inside [`ASSETS_DIR`].
pub const STYLESHEET_FILE: &str = "styles.css";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_styles_page_classes() {
        for class in [".grid", ".card", ".hero-image", ".facts", ".button", ".list"] {
            assert!(STYLESHEET.contains(class), "missing {}", class);
        }
    }
}
