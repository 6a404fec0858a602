//! Locale-dependent stylesheet for the long button.

use crate::constants::{ASSET_HOST, LONG_BUTTON_WIDTH};
use crate::locale::ResolvedLocale;

/// Generate the long button rules for `locale`.
pub fn long_button_css(locale: &ResolvedLocale) -> String {
    format!(
        "\n.long {{\n  min-width: {min_width}px;\n  width: {LONG_BUTTON_WIDTH}px;\n}}\n\n\
         .white.long {{\n  background-image: url({ASSET_HOST}/light/{code}.svg);\n}}\n\n\
         .black.long {{\n  background-image: url({ASSET_HOST}/dark/{code}.svg);\n}}\n",
        min_width = locale.min_width,
        code = locale.code,
    )
}

#[cfg(test)]
mod tests {
    use paybutton_style::StyleSheet;

    use super::*;

    #[test]
    fn french_rules() {
        let css = long_button_css(&ResolvedLocale {
            code: "fr".into(),
            min_width: 183,
        });
        let sheet = StyleSheet::from_css(&css).unwrap();
        assert_eq!(sheet.len(), 3);

        let long = sheet.rule(".long").unwrap();
        assert_eq!(long.declaration("min-width"), Some("183px"));
        assert_eq!(long.declaration("width"), Some("240px"));

        assert_eq!(
            sheet.rule(".white.long").unwrap().declaration("background-image"),
            Some("url(https://www.gstatic.com/instantbuy/svg/light/fr.svg)")
        );
        assert_eq!(
            sheet.rule(".black.long").unwrap().declaration("background-image"),
            Some("url(https://www.gstatic.com/instantbuy/svg/dark/fr.svg)")
        );
    }
}
