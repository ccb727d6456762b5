use serde_json::{Map, Value};

use super::document::{Element, Overlay, ThemeDocument};
use super::normalize::ElementKind;
use super::variables::VariableScope;

/// The flattened output of one view resolution: override-applied elements in
/// final order plus the merged variable map. Ephemeral and pure-functionally
/// derived; rebuilt on every (view, variant, aspectRatio, colorScheme)
/// change, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedScreen {
    pub elements: Vec<Element>,
    pub variables: Map<String, Value>,
}

impl ResolvedScreen {
    pub fn scope(&self) -> VariableScope {
        VariableScope::from_map(self.variables.clone())
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.name == name)
    }
}

/// Resolves one view against the current selector tuple.
///
/// A missing base view yields an empty element list and a missing overlay
/// selector applies no overlay; both are configuration echoes, not errors —
/// a theme's declared capabilities need not list every authored overlay.
/// The base document is never mutated: the working list is a deep copy of
/// the shared, cached parse result.
pub fn resolve_view(
    doc: &ThemeDocument,
    view_name: &str,
    variant: &str,
    aspect_ratio: &str,
    color_scheme: &str,
) -> ResolvedScreen {
    let mut elements = match doc.view(view_name) {
        Some(view) => view.elements.clone(),
        None => {
            tracing::debug!(view = view_name, "view not defined by theme, rendering empty");
            Vec::new()
        }
    };

    let scope = VariableScope::build(doc, variant, aspect_ratio, color_scheme);

    // Aspect ratio is applied after variant so it wins direct collisions.
    apply_overlay(&mut elements, doc.variant_overlay(variant), view_name);
    apply_overlay(&mut elements, doc.aspect_ratio_overlay(aspect_ratio), view_name);

    retain_last_primary_list(&mut elements);

    ResolvedScreen {
        elements,
        variables: scope.into_map(),
    }
}

/// Merges one overlay's element overrides for `view_name` into the working
/// list: matching names get a shallow `properties` merge (overlay keys win,
/// unmatched base keys persist), new names are appended in overlay order.
fn apply_overlay(elements: &mut Vec<Element>, overlay: Option<&Overlay>, view_name: &str) {
    let Some(overlay) = overlay else {
        return;
    };
    let Some(view) = overlay.view(view_name) else {
        return;
    };
    for patch in &view.elements {
        match elements.iter_mut().find(|el| el.name == patch.name) {
            Some(existing) => {
                for (key, value) in &patch.properties {
                    existing.properties.insert(key.clone(), value.clone());
                }
            }
            None => elements.push(patch.clone()),
        }
    }
}

/// Enforces primary-list mutual exclusivity: of all textlist/carousel/grid
/// elements in the merged list, only the one at the highest index survives.
/// Earlier duplicates of the winning type are discarded too, not merged.
fn retain_last_primary_list(elements: &mut Vec<Element>) {
    let winner = elements
        .iter()
        .enumerate()
        .rev()
        .find(|(_, el)| is_primary_list(el))
        .map(|(idx, _)| idx);
    let Some(winner) = winner else {
        return;
    };
    let mut index = 0;
    elements.retain(|el| {
        let keep = !is_primary_list(el) || index == winner;
        index += 1;
        keep
    });
}

fn is_primary_list(element: &Element) -> bool {
    ElementKind::parse(&element.element_type).is_some_and(ElementKind::is_primary_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> ThemeDocument {
        serde_json::from_value(value).expect("test document should deserialize")
    }

    fn element_types(screen: &ResolvedScreen) -> Vec<&str> {
        screen
            .elements
            .iter()
            .map(|el| el.element_type.as_str())
            .collect()
    }

    fn overlay_fixture() -> ThemeDocument {
        document(json!({
            "name": "fixture",
            "variables": { "accent": "base" },
            "views": [
                { "name": "system", "elements": [
                    { "name": "bg", "type": "image", "properties": { "path": "a.png", "tile": false } },
                    { "name": "title", "type": "text", "properties": { "text": "hello" } }
                ]}
            ],
            "variant": [
                { "name": "gamelist-list,gamelist-grid",
                  "variables": { "accent": "variant" },
                  "views": [
                      { "name": "system", "elements": [
                          { "name": "bg", "type": "image", "properties": { "path": "variant.png" } },
                          { "name": "badge", "type": "image", "properties": { "path": "badge.png" } }
                      ]}
                  ]}
            ],
            "aspectRatio": [
                { "name": "16:9",
                  "variables": { "accent": "ratio" },
                  "views": [
                      { "name": "system", "elements": [
                          { "name": "bg", "type": "image", "properties": { "path": "b.png" } }
                      ]}
                  ]}
            ]
        }))
    }

    #[test]
    fn missing_view_resolves_to_empty_screen() {
        let doc = overlay_fixture();
        let screen = resolve_view(&doc, "gamelist", "", "", "");
        assert!(screen.elements.is_empty());
        assert_eq!(screen.variables.get("accent"), Some(&json!("base")));
    }

    #[test]
    fn overlay_merge_keeps_unmatched_base_properties() {
        let doc = overlay_fixture();
        let screen = resolve_view(&doc, "system", "gamelist-list", "none", "none");
        let bg = screen.element("bg").expect("bg should survive the merge");
        assert_eq!(bg.property("path"), Some(&json!("variant.png")));
        // Shallow merge: base keys the overlay does not mention persist.
        assert_eq!(bg.property("tile"), Some(&json!(false)));
        // New overlay names append after the base elements.
        assert_eq!(
            screen.elements.last().map(|el| el.name.as_str()),
            Some("badge")
        );
    }

    #[test]
    fn aspect_ratio_override_wins_over_variant() {
        let doc = overlay_fixture();
        let screen = resolve_view(&doc, "system", "gamelist-list", "16:9", "none");
        let bg = screen.element("bg").expect("bg should survive the merge");
        assert_eq!(bg.property("path"), Some(&json!("b.png")));
        assert_eq!(screen.variables.get("accent"), Some(&json!("ratio")));
    }

    #[test]
    fn aspect_ratio_scenario_preserves_untouched_properties() {
        let doc = document(json!({
            "name": "scenario",
            "views": [
                { "name": "system", "elements": [
                    { "name": "bg", "type": "image", "properties": { "path": "a.png" } }
                ]}
            ],
            "aspectRatio": [
                { "name": "16:9", "views": [
                    { "name": "system", "elements": [
                        { "name": "bg", "type": "image", "properties": { "path": "b.png" } }
                    ]}
                ]}
            ]
        }));
        let screen = resolve_view(&doc, "system", "anything", "16:9", "anything");
        assert_eq!(screen.elements.len(), 1);
        let bg = &screen.elements[0];
        assert_eq!(bg.name, "bg");
        assert_eq!(bg.property("path"), Some(&json!("b.png")));
    }

    #[test]
    fn unresolvable_selectors_degrade_to_no_overlay() {
        let doc = overlay_fixture();
        let screen = resolve_view(&doc, "system", "missing-variant", "21:9", "sepia");
        let bg = screen.element("bg").expect("base bg should remain");
        assert_eq!(bg.property("path"), Some(&json!("a.png")));
        assert_eq!(screen.variables.get("accent"), Some(&json!("base")));
    }

    #[test]
    fn resolution_is_pure_and_repeatable() {
        let doc = overlay_fixture();
        let first = resolve_view(&doc, "system", "gamelist-list", "16:9", "none");
        let second = resolve_view(&doc, "system", "gamelist-list", "16:9", "none");
        assert_eq!(first, second);
    }

    #[test]
    fn resolution_never_mutates_the_document() {
        let doc = overlay_fixture();
        let before = doc.clone();
        let _ = resolve_view(&doc, "system", "gamelist-list", "16:9", "none");
        assert_eq!(doc, before);
    }

    #[test]
    fn last_primary_list_element_wins() {
        let doc = document(json!({
            "name": "exclusive",
            "views": [
                { "name": "gamelist", "elements": [
                    { "name": "list", "type": "textlist", "properties": {} },
                    { "name": "wheel", "type": "carousel", "properties": {} },
                    { "name": "bg", "type": "image", "properties": {} },
                    { "name": "tiles", "type": "grid", "properties": {} }
                ]}
            ]
        }));
        let screen = resolve_view(&doc, "gamelist", "", "", "");
        assert_eq!(element_types(&screen), vec!["image", "grid"]);
    }

    #[test]
    fn duplicate_winning_type_keeps_only_the_last_occurrence() {
        let doc = document(json!({
            "name": "duplicates",
            "views": [
                { "name": "gamelist", "elements": [
                    { "name": "wheel-a", "type": "carousel", "properties": {} },
                    { "name": "wheel-b", "type": "carousel", "properties": {} }
                ]}
            ]
        }));
        let screen = resolve_view(&doc, "gamelist", "", "", "");
        assert_eq!(screen.elements.len(), 1);
        assert_eq!(screen.elements[0].name, "wheel-b");
    }

    #[test]
    fn overlay_introduced_primary_list_displaces_the_base_one() {
        let doc = document(json!({
            "name": "displace",
            "views": [
                { "name": "gamelist", "elements": [
                    { "name": "list", "type": "textlist", "properties": {} }
                ]}
            ],
            "variant": [
                { "name": "gamelist-grid", "views": [
                    { "name": "gamelist", "elements": [
                        { "name": "tiles", "type": "grid", "properties": {} }
                    ]}
                ]}
            ]
        }));
        let screen = resolve_view(&doc, "gamelist", "gamelist-grid", "", "");
        assert_eq!(element_types(&screen), vec!["grid"]);
        // At most one primary list element survives any resolution.
        let primary = screen
            .elements
            .iter()
            .filter(|el| {
                ElementKind::parse(&el.element_type).is_some_and(ElementKind::is_primary_list)
            })
            .count();
        assert_eq!(primary, 1);
    }
}
