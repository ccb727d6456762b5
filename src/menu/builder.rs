use crate::theme::ThemeDocument;

use super::{Frame, MenuItem, MenuMeta};

/// Bundled themes selectable from the settings menu.
pub const AVAILABLE_THEMES: [&str; 3] = [
    "analogue-os-menu-es-de",
    "atari-50-menu-es-de",
    "mania-menu-es-de",
];

/// `"atari-50-menu-es-de"` → `"ATARI 50"`.
pub fn format_theme_name(theme_id: &str) -> String {
    theme_id
        .trim_end_matches("-menu-es-de")
        .replace('-', " ")
        .to_uppercase()
}

/// `"gamelist-list"` → `"GAMELIST LIST"`.
pub fn format_capability_name(name: &str) -> String {
    name.replace('-', " ").to_uppercase()
}

/// The static root frame of the settings menu.
pub fn main_menu() -> Frame {
    vec![
        MenuItem::new("source", "SOURCE"),
        MenuItem::new("ui-settings", "UI SETTINGS"),
        MenuItem::new("scraper", "SCRAPER"),
        MenuItem::new("systems", "MANAGE SYSTEMS"),
        MenuItem::new("emulators", "MANAGE EMULATORS").with_meta(MenuMeta::EmulatorsRoot),
        MenuItem::new("games", "MANAGE GAMES")
            .with_meta(MenuMeta::GamesRoot)
            .with_sub_items(vec![
                MenuItem::new("select-system", "SELECT SYSTEM")
                    .with_meta(MenuMeta::GamesSelectSystem),
                MenuItem::new("upload", "UPLOAD")
                    .with_meta(MenuMeta::GamesUpload)
                    .disabled(true),
            ]),
        MenuItem::new("filesystem", "VIRTUAL FILE SYSTEM"),
        MenuItem::new("onedrive", "CONNECT ONEDRIVE"),
    ]
}

/// Theme capability selectors: a submenu per override axis, disabled when
/// the document declares nothing for that axis. Selector submenus mark the
/// active choice so the list renderer can highlight it.
pub fn capabilities_menu(doc: Option<&ThemeDocument>, active_theme: &str) -> Frame {
    let capabilities = doc.map(|d| &d.capabilities);
    let variants = capabilities.map(|c| c.variants.as_slice()).unwrap_or(&[]);
    let schemes = capabilities
        .map(|c| c.color_schemes.as_slice())
        .unwrap_or(&[]);
    let ratios = capabilities
        .map(|c| c.aspect_ratios.as_slice())
        .unwrap_or(&[]);

    vec![
        MenuItem::new("theme", "THEME").with_sub_items(
            AVAILABLE_THEMES
                .iter()
                .map(|theme| {
                    MenuItem::new(*theme, format_theme_name(theme))
                        .selected(*theme == active_theme)
                })
                .collect(),
        ),
        selector_item("theme-variant", "THEME VARIANT", variants, true),
        selector_item("theme-color-scheme", "THEME COLOR SCHEME", schemes, true),
        // Aspect ratio labels keep their literal form; "16:9" reads better
        // than a case-folded variant.
        selector_item("theme-aspect-ratio", "THEME ASPECT RATIO", ratios, false),
        MenuItem::new("theme-font-size", "THEME FONT SIZE").disabled(true),
        MenuItem::new("theme-transition", "THEME TRANSITION").disabled(true),
    ]
}

fn selector_item(id: &str, label: &str, choices: &[String], format: bool) -> MenuItem {
    MenuItem::new(id, label)
        .with_sub_items(
            choices
                .iter()
                .map(|choice| {
                    let display = if format {
                        format_capability_name(choice)
                    } else {
                        choice.clone()
                    };
                    MenuItem::new(choice.clone(), display)
                })
                .collect(),
        )
        .disabled(choices.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc_with_capabilities() -> ThemeDocument {
        serde_json::from_value(json!({
            "name": "caps",
            "views": [],
            "capabilities": {
                "variants": ["gamelist-list", "gamelist-grid"],
                "colorSchemes": ["dark", "light"],
                "aspectRatios": ["16:9", "4:3"]
            }
        }))
        .expect("capabilities document should deserialize")
    }

    #[test]
    fn theme_names_format_for_display() {
        assert_eq!(format_theme_name("analogue-os-menu-es-de"), "ANALOGUE OS");
        assert_eq!(format_capability_name("gamelist-list"), "GAMELIST LIST");
    }

    #[test]
    fn capability_submenus_mirror_the_document() {
        let doc = doc_with_capabilities();
        let frame = capabilities_menu(Some(&doc), "mania-menu-es-de");
        let variant = frame
            .iter()
            .find(|i| i.id == "theme-variant")
            .expect("variant selector should exist");
        assert!(!variant.disabled);
        assert_eq!(variant.sub_items.len(), 2);
        assert_eq!(variant.sub_items[0].id, "gamelist-list");
        assert_eq!(variant.sub_items[0].label, "GAMELIST LIST");

        let ratio = frame
            .iter()
            .find(|i| i.id == "theme-aspect-ratio")
            .expect("ratio selector should exist");
        assert_eq!(ratio.sub_items[0].label, "16:9");
    }

    #[test]
    fn empty_capability_axes_disable_their_selectors() {
        let frame = capabilities_menu(None, "mania-menu-es-de");
        for id in ["theme-variant", "theme-color-scheme", "theme-aspect-ratio"] {
            let item = frame
                .iter()
                .find(|i| i.id == id)
                .expect("selector should exist");
            assert!(item.disabled, "{id} should be disabled");
            assert!(item.sub_items.is_empty());
        }
    }

    #[test]
    fn active_theme_is_marked_selected() {
        let frame = capabilities_menu(None, "atari-50-menu-es-de");
        let theme = frame
            .iter()
            .find(|i| i.id == "theme")
            .expect("theme selector should exist");
        let marked: Vec<&str> = theme
            .sub_items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(marked, vec!["atari-50-menu-es-de"]);
    }

    #[test]
    fn main_menu_keeps_upload_gated() {
        let frame = main_menu();
        let games = frame
            .iter()
            .find(|i| i.id == "games")
            .expect("games entry should exist");
        let upload = games
            .sub_items
            .iter()
            .find(|i| i.id == "upload")
            .expect("upload entry should exist");
        assert!(upload.disabled);
    }
}
