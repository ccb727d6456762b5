use serde_json::{json, Map, Value};

use super::normalize::ElementKind;

/// Fallback property table per element type, mirroring the reference theme
/// engine's documented defaults. Raw theme properties are merged on top of
/// these, so an authored key always wins.
pub fn default_properties(kind: ElementKind) -> Map<String, Value> {
    let value = match kind {
        ElementKind::Image => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "tile": false,
            "color": "FFFFFFFF",
            "gradientType": "horizontal",
            "zIndex": 30,
        }),
        ElementKind::TextList => json!({
            "pos": "0 0.1",
            "size": "1 0.8",
            "origin": "0 0",
            "fontPath": "",
            "fontSize": "0.045",
            "lineSpacing": "1.5",
            "selectorColor": "00000000",
            "selectedBackgroundColor": "fafafa",
            "selectedColor": "ffffff",
            "selectedSecondaryColor": "ffffff",
            "primaryColor": "ffffff",
            "secondaryColor": "cccccc",
            "selectedBackgroundCornerRadius": "0.05",
            "letterCaseAutoCollections": "capitalize",
            "zIndex": 50,
        }),
        ElementKind::Carousel => json!({
            "pos": "0 0.38378",
            "size": "1 0.2324",
            "origin": "0 0",
            "type": "horizontal",
            "maxItemCount": "3",
            "itemSize": "0.25 0.155",
            "itemScale": "1.2",
            "imageFit": "contain",
            "imageCornerRadius": "0",
            "imageColor": "FFFFFFFF",
            "imageSelectedColor": "FFFFFFFF",
            "selectedItemOffset": "0 0",
            "textColor": "000000FF",
            "textSelectedColor": "000000FF",
            "textBackgroundColor": "FFFFFF00",
            "textSelectedBackgroundColor": "FFFFFF00",
            "fontSize": "0.085",
            "unfocusedItemOpacity": "0.5",
            "unfocusedItemSaturation": "1",
            "unfocusedItemDimming": "1",
            "fastScrolling": "false",
            // Background panel color pair; equal ends mean no gradient.
            "color": "FFFFFFD8",
            "colorEnd": "FFFFFFD8",
            // Fallback caption when an item has no image (system view).
            "text": "",
            "zIndex": 50,
        }),
        ElementKind::Grid => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "itemScale": "1.05",
            "imageCornerRadius": "0",
            "unfocusedItemOpacity": "1",
            "unfocusedItemSaturation": "1",
            "unfocusedItemDimming": "1",
            "fontSize": "0.045",
            "zIndex": 50,
        }),
        ElementKind::Text => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "color": "ffffff",
            "zIndex": 40,
        }),
        ElementKind::Video => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "zIndex": 30,
        }),
        ElementKind::Animation => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "zIndex": 35,
        }),
        ElementKind::DateTime => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "zIndex": 40,
        }),
        ElementKind::Rating => json!({
            "pos": "0 0",
            "size": "1 1",
            "origin": "0 0",
            "zIndex": 45,
        }),
        ElementKind::Clock => json!({
            "pos": "0 0",
            "size": "0 0",
            "origin": "0 0",
            "color": "cccccc",
            "backgroundColor": "222222",
            "opacity": 1,
            "zIndex": 40,
        }),
        ElementKind::SystemStatus => json!({
            "pos": "0.982 0.016",
            "size": "1 0.035",
            "origin": "1 0",
            "color": "cccccc",
            "backgroundColor": "222222",
            "zIndex": 40,
        }),
        ElementKind::HelpSystem => json!({
            "pos": "0.012 0.9515",
            "origin": "0 0",
            "textColor": "777777FF",
            "iconColor": "777777FF",
            "backgroundColor": "transparent",
            // Help hints always paint above theme content.
            "zIndex": 999,
        }),
    };
    value.as_object().cloned().unwrap_or_default()
}

/// Defaults first, raw properties shallow-merged on top.
pub fn merge_with_defaults(
    kind: Option<ElementKind>,
    raw: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = kind.map(default_properties).unwrap_or_default();
    for (key, value) in raw {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
