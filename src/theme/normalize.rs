use serde_json::{Map, Value};

use crate::geometry::{Rgba, Vec2};

use super::defaults::merge_with_defaults;
use super::document::Element;
use super::variables::{resolve_properties, VariableScope};

/// Closed set of renderable element types. Anything else normalizes to
/// [`ElementProps::Unknown`] and renders as a diagnostic placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Image,
    Text,
    TextList,
    Carousel,
    Grid,
    Video,
    Clock,
    SystemStatus,
    HelpSystem,
    Rating,
    DateTime,
    Animation,
}

impl ElementKind {
    pub const ALL: [Self; 12] = [
        Self::Image,
        Self::Text,
        Self::TextList,
        Self::Carousel,
        Self::Grid,
        Self::Video,
        Self::Clock,
        Self::SystemStatus,
        Self::HelpSystem,
        Self::Rating,
        Self::DateTime,
        Self::Animation,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "image" => Some(Self::Image),
            "text" => Some(Self::Text),
            "textlist" => Some(Self::TextList),
            "carousel" => Some(Self::Carousel),
            "grid" => Some(Self::Grid),
            "video" => Some(Self::Video),
            "clock" => Some(Self::Clock),
            "systemstatus" => Some(Self::SystemStatus),
            "helpsystem" => Some(Self::HelpSystem),
            "rating" => Some(Self::Rating),
            "datetime" => Some(Self::DateTime),
            "animation" => Some(Self::Animation),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::TextList => "textlist",
            Self::Carousel => "carousel",
            Self::Grid => "grid",
            Self::Video => "video",
            Self::Clock => "clock",
            Self::SystemStatus => "systemstatus",
            Self::HelpSystem => "helpsystem",
            Self::Rating => "rating",
            Self::DateTime => "datetime",
            Self::Animation => "animation",
        }
    }

    /// The mutually exclusive "primary list" trio.
    pub const fn is_primary_list(self) -> bool {
        matches!(self, Self::TextList | Self::Carousel | Self::Grid)
    }
}

/// A theme color with the validity flags renderers use to decide whether an
/// overlay composite is worth painting at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    pub rgba: Rgba,
    /// True for plain opaque white, authored or fallback.
    pub is_default: bool,
    /// False when the raw value did not parse; the rgba is then the
    /// documented opaque-white fallback.
    pub is_valid: bool,
}

impl ThemeColor {
    pub const fn fallback() -> Self {
        Self {
            rgba: Rgba::WHITE,
            is_default: true,
            is_valid: false,
        }
    }

    /// Parses a hex color, tolerating non-hex noise characters (`#` prefixes
    /// and the like are stripped). Six digits mean opaque; eight carry
    /// alpha. Anything else is the opaque-white fallback, flagged invalid —
    /// normalization never fails on a bad theme value.
    pub fn parse(raw: &str) -> Self {
        let clean: String = raw
            .chars()
            .filter(char::is_ascii_hexdigit)
            .collect::<String>()
            .to_ascii_uppercase();
        match clean.len() {
            6 | 8 => {
                let Some(rgb) = u32::from_str_radix(&clean[..6], 16).ok() else {
                    return Self::fallback();
                };
                let alpha = if clean.len() == 8 {
                    u8::from_str_radix(&clean[6..8], 16).unwrap_or(0xFF)
                } else {
                    0xFF
                };
                let rgba = Rgba::new(
                    ((rgb >> 16) & 0xFF) as u8,
                    ((rgb >> 8) & 0xFF) as u8,
                    (rgb & 0xFF) as u8,
                    alpha,
                );
                Self {
                    rgba,
                    is_default: clean == "FFFFFF",
                    is_valid: true,
                }
            }
            _ => {
                tracing::debug!(value = raw, "unparseable color, using opaque white");
                Self::fallback()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientType {
    Horizontal,
    Vertical,
}

impl GradientType {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFit {
    Contain,
    Cover,
    Fill,
}

impl ImageFit {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "contain" => Some(Self::Contain),
            "cover" => Some(Self::Cover),
            "fill" => Some(Self::Fill),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl LetterCase {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "capitalize" => Some(Self::Capitalize),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselOrientation {
    Horizontal,
    Vertical,
}

impl CarouselOrientation {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Fractional placement shared by every element type. Values are viewport
/// fractions; nothing is clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    pub size: Vec2,
    pub origin: Vec2,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageProps {
    pub path: Option<String>,
    pub tile: bool,
    pub color: ThemeColor,
    pub color_end: ThemeColor,
    pub gradient_type: GradientType,
}

impl ImageProps {
    /// A gradient needs a valid end color that differs in hue from the start.
    pub fn has_gradient(&self) -> bool {
        self.color_end.is_valid && self.color_end.rgba.hex_rgb() != self.color.rgba.hex_rgb()
    }

    /// Whether a tint/gradient overlay is worth compositing at all.
    pub fn needs_overlay(&self) -> bool {
        (!self.color.is_default && self.color.is_valid) || self.has_gradient()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub text: Option<String>,
    pub color: ThemeColor,
    pub font_path: Option<String>,
    pub font_size: f32,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub letter_case: LetterCase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextListProps {
    pub font_path: Option<String>,
    pub font_size: f32,
    pub line_spacing: f32,
    pub selector_color: ThemeColor,
    pub selected_background_color: ThemeColor,
    pub selected_color: ThemeColor,
    pub selected_secondary_color: ThemeColor,
    pub primary_color: ThemeColor,
    pub secondary_color: ThemeColor,
    pub selected_background_corner_radius: f32,
    pub letter_case_auto_collections: LetterCase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselProps {
    pub orientation: CarouselOrientation,
    pub max_item_count: f32,
    pub item_size: Vec2,
    pub item_scale: f32,
    pub image_fit: ImageFit,
    pub image_corner_radius: f32,
    pub image_color: ThemeColor,
    pub image_selected_color: ThemeColor,
    pub selected_item_offset: Vec2,
    pub text_color: ThemeColor,
    pub text_selected_color: ThemeColor,
    pub text_background_color: ThemeColor,
    pub text_selected_background_color: ThemeColor,
    pub font_size: f32,
    pub unfocused_item_opacity: f32,
    pub unfocused_item_saturation: f32,
    pub unfocused_item_dimming: f32,
    pub fast_scrolling: bool,
    pub color: ThemeColor,
    pub color_end: ThemeColor,
    pub fallback_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    pub item_scale: f32,
    pub image_corner_radius: f32,
    pub unfocused_item_opacity: f32,
    pub unfocused_item_saturation: f32,
    pub unfocused_item_dimming: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoProps {
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClockProps {
    pub color: ThemeColor,
    pub background_color: ThemeColor,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemStatusProps {
    pub color: ThemeColor,
    pub background_color: ThemeColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelpSystemProps {
    pub text_color: ThemeColor,
    pub icon_color: ThemeColor,
    pub background_color: ThemeColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationProps {
    pub path: Option<String>,
}

/// Per-type normalized properties. Exhaustively matched at the rendering
/// boundary; `Unknown` keeps the raw type name for the diagnostic
/// placeholder instead of being silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementProps {
    Image(ImageProps),
    Text(TextProps),
    TextList(TextListProps),
    Carousel(CarouselProps),
    Grid(GridProps),
    Video(VideoProps),
    Clock(ClockProps),
    SystemStatus(SystemStatusProps),
    HelpSystem(HelpSystemProps),
    Rating,
    DateTime,
    Animation(AnimationProps),
    Unknown { type_name: String },
}

impl ElementProps {
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Self::Image(_) => Some(ElementKind::Image),
            Self::Text(_) => Some(ElementKind::Text),
            Self::TextList(_) => Some(ElementKind::TextList),
            Self::Carousel(_) => Some(ElementKind::Carousel),
            Self::Grid(_) => Some(ElementKind::Grid),
            Self::Video(_) => Some(ElementKind::Video),
            Self::Clock(_) => Some(ElementKind::Clock),
            Self::SystemStatus(_) => Some(ElementKind::SystemStatus),
            Self::HelpSystem(_) => Some(ElementKind::HelpSystem),
            Self::Rating => Some(ElementKind::Rating),
            Self::DateTime => Some(ElementKind::DateTime),
            Self::Animation(_) => Some(ElementKind::Animation),
            Self::Unknown { .. } => None,
        }
    }
}

/// An element ready for a renderer: resolved variables, defaults filled in,
/// raw strings converted to semantic values.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedElement {
    pub name: String,
    pub placement: Placement,
    /// Optional view restriction, e.g. `"menu"`-scoped backdrops.
    pub scope: Option<String>,
    pub props: ElementProps,
}

impl NormalizedElement {
    /// Menu-scoped elements only paint on the menu view.
    pub fn hidden_for_view(&self, view: &str) -> bool {
        matches!(&self.scope, Some(scope) if scope == "menu" && view != "menu")
    }
}

/// Normalizes one raw element: substitutes variables, merges the per-type
/// default table underneath (raw wins), then parses semantic values with
/// defensive fallbacks. Never fails, whatever the input values are.
pub fn normalize(element: &Element, scope: &VariableScope) -> NormalizedElement {
    let kind = ElementKind::parse(&element.element_type);
    if kind.is_none() {
        tracing::warn!(
            element = %element.name,
            element_type = %element.element_type,
            "unknown element type, rendering placeholder"
        );
    }
    let resolved = resolve_properties(&element.properties, scope);
    let props = merge_with_defaults(kind, &resolved);

    let placement = Placement {
        pos: pair_field(&props, "pos", Vec2::ZERO, &element.name),
        size: pair_field(&props, "size", Vec2::ONE, &element.name),
        origin: pair_field(&props, "origin", Vec2::ZERO, &element.name),
        z_index: int_field(&props, "zIndex", 0),
    };
    let element_scope = str_field(&props, "scope");

    let typed = match kind {
        Some(ElementKind::Image) => ElementProps::Image(ImageProps {
            path: str_field(&props, "path"),
            tile: bool_field(&props, "tile", false),
            color: color_field(&props, "color"),
            color_end: color_field(&props, "colorEnd"),
            gradient_type: enum_field(&props, "gradientType", GradientType::Horizontal, GradientType::parse),
        }),
        Some(ElementKind::Text) => ElementProps::Text(TextProps {
            text: str_field(&props, "text"),
            color: color_field(&props, "color"),
            font_path: nonempty_str_field(&props, "fontPath"),
            font_size: fraction_field(&props, "fontSize", 0.045),
            horizontal_alignment: enum_field(
                &props,
                "horizontalAlignment",
                HorizontalAlignment::Left,
                HorizontalAlignment::parse,
            ),
            vertical_alignment: enum_field(
                &props,
                "verticalAlignment",
                VerticalAlignment::Top,
                VerticalAlignment::parse,
            ),
            letter_case: enum_field(&props, "letterCase", LetterCase::None, LetterCase::parse),
        }),
        Some(ElementKind::TextList) => ElementProps::TextList(TextListProps {
            font_path: nonempty_str_field(&props, "fontPath"),
            font_size: fraction_field(&props, "fontSize", 0.045),
            line_spacing: fraction_field(&props, "lineSpacing", 1.5),
            selector_color: color_field(&props, "selectorColor"),
            selected_background_color: color_field(&props, "selectedBackgroundColor"),
            selected_color: color_field(&props, "selectedColor"),
            selected_secondary_color: color_field(&props, "selectedSecondaryColor"),
            primary_color: color_field(&props, "primaryColor"),
            secondary_color: color_field(&props, "secondaryColor"),
            selected_background_corner_radius: fraction_field(
                &props,
                "selectedBackgroundCornerRadius",
                0.0,
            ),
            letter_case_auto_collections: enum_field(
                &props,
                "letterCaseAutoCollections",
                LetterCase::Capitalize,
                LetterCase::parse,
            ),
        }),
        Some(ElementKind::Carousel) => ElementProps::Carousel(CarouselProps {
            orientation: enum_field(
                &props,
                "type",
                CarouselOrientation::Horizontal,
                CarouselOrientation::parse,
            ),
            max_item_count: fraction_field(&props, "maxItemCount", 3.0),
            item_size: pair_field(&props, "itemSize", Vec2::new(0.25, 0.155), &element.name),
            item_scale: fraction_field(&props, "itemScale", 1.2),
            image_fit: enum_field(&props, "imageFit", ImageFit::Contain, ImageFit::parse),
            image_corner_radius: fraction_field(&props, "imageCornerRadius", 0.0),
            image_color: color_field(&props, "imageColor"),
            image_selected_color: color_field(&props, "imageSelectedColor"),
            selected_item_offset: pair_field(&props, "selectedItemOffset", Vec2::ZERO, &element.name),
            text_color: color_field(&props, "textColor"),
            text_selected_color: color_field(&props, "textSelectedColor"),
            text_background_color: color_field(&props, "textBackgroundColor"),
            text_selected_background_color: color_field(&props, "textSelectedBackgroundColor"),
            font_size: fraction_field(&props, "fontSize", 0.085),
            unfocused_item_opacity: fraction_field(&props, "unfocusedItemOpacity", 0.5),
            unfocused_item_saturation: fraction_field(&props, "unfocusedItemSaturation", 1.0),
            unfocused_item_dimming: fraction_field(&props, "unfocusedItemDimming", 1.0),
            fast_scrolling: bool_field(&props, "fastScrolling", false),
            color: color_field(&props, "color"),
            color_end: color_field(&props, "colorEnd"),
            fallback_text: nonempty_str_field(&props, "text"),
        }),
        Some(ElementKind::Grid) => ElementProps::Grid(GridProps {
            item_scale: fraction_field(&props, "itemScale", 1.05),
            image_corner_radius: fraction_field(&props, "imageCornerRadius", 0.0),
            unfocused_item_opacity: fraction_field(&props, "unfocusedItemOpacity", 1.0),
            unfocused_item_saturation: fraction_field(&props, "unfocusedItemSaturation", 1.0),
            unfocused_item_dimming: fraction_field(&props, "unfocusedItemDimming", 1.0),
            font_size: fraction_field(&props, "fontSize", 0.045),
        }),
        Some(ElementKind::Video) => ElementProps::Video(VideoProps {
            path: str_field(&props, "path"),
        }),
        Some(ElementKind::Clock) => ElementProps::Clock(ClockProps {
            color: color_field(&props, "color"),
            background_color: color_field(&props, "backgroundColor"),
            opacity: fraction_field(&props, "opacity", 1.0),
        }),
        Some(ElementKind::SystemStatus) => ElementProps::SystemStatus(SystemStatusProps {
            color: color_field(&props, "color"),
            background_color: color_field(&props, "backgroundColor"),
        }),
        Some(ElementKind::HelpSystem) => ElementProps::HelpSystem(HelpSystemProps {
            text_color: color_field(&props, "textColor"),
            icon_color: color_field(&props, "iconColor"),
            background_color: color_field(&props, "backgroundColor"),
        }),
        Some(ElementKind::Rating) => ElementProps::Rating,
        Some(ElementKind::DateTime) => ElementProps::DateTime,
        Some(ElementKind::Animation) => ElementProps::Animation(AnimationProps {
            path: str_field(&props, "path"),
        }),
        None => ElementProps::Unknown {
            type_name: element.element_type.clone(),
        },
    };

    NormalizedElement {
        name: element.name.clone(),
        placement,
        scope: element_scope,
        props: typed,
    }
}

fn str_field(props: &Map<String, Value>, key: &str) -> Option<String> {
    props.get(key).and_then(Value::as_str).map(str::to_string)
}

fn nonempty_str_field(props: &Map<String, Value>, key: &str) -> Option<String> {
    str_field(props, key).filter(|s| !s.is_empty())
}

fn pair_field(props: &Map<String, Value>, key: &str, default: Vec2, element: &str) -> Vec2 {
    let Some(value) = props.get(key) else {
        return default;
    };
    let Some(raw) = value.as_str() else {
        tracing::warn!(element, key, ?value, "coordinate pair is not a string, using 0 0");
        return Vec2::ZERO;
    };
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() == 2 {
        if let (Ok(x), Ok(y)) = (tokens[0].parse::<f32>(), tokens[1].parse::<f32>()) {
            return Vec2::new(x, y);
        }
    }
    tracing::warn!(element, key, value = raw, "malformed coordinate pair, using 0 0");
    Vec2::ZERO
}

fn fraction_field(props: &Map<String, Value>, key: &str, default: f32) -> f32 {
    match props.get(key) {
        Some(Value::Number(n)) => n.as_f64().map_or(default, |v| v as f32),
        Some(Value::String(s)) => s.trim().parse::<f32>().unwrap_or(default),
        _ => default,
    }
}

fn int_field(props: &Map<String, Value>, key: &str, default: i32) -> i32 {
    match props.get(key) {
        Some(Value::Number(n)) => n.as_i64().map_or(default, |v| v as i32),
        Some(Value::String(s)) => s.trim().parse::<i32>().unwrap_or(default),
        _ => default,
    }
}

fn bool_field(props: &Map<String, Value>, key: &str, default: bool) -> bool {
    match props.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}

fn color_field(props: &Map<String, Value>, key: &str) -> ThemeColor {
    match props.get(key).and_then(Value::as_str) {
        Some(raw) => ThemeColor::parse(raw),
        None => ThemeColor::fallback(),
    }
}

fn enum_field<T: Copy>(
    props: &Map<String, Value>,
    key: &str,
    default: T,
    parse: fn(&str) -> Option<T>,
) -> T {
    props
        .get(key)
        .and_then(Value::as_str)
        .and_then(parse)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn element(kind: &str, properties: Value) -> Element {
        Element {
            name: "probe".to_string(),
            element_type: kind.to_string(),
            properties: properties.as_object().cloned().unwrap_or_default(),
        }
    }

    fn normalize_bare(kind: &str, properties: Value) -> NormalizedElement {
        normalize(&element(kind, properties), &VariableScope::empty())
    }

    #[test]
    fn invalid_color_falls_back_to_opaque_white() {
        let color = ThemeColor::parse("xyz");
        assert_eq!(color.rgba, Rgba::WHITE);
        assert!(!color.is_valid);
        assert!(color.is_default);
    }

    #[test]
    fn eight_digit_colors_carry_alpha() {
        let color = ThemeColor::parse("00FF0080");
        assert_eq!(color.rgba, Rgba::new(0x00, 0xFF, 0x00, 0x80));
        assert_eq!(color.rgba.hex_rgb(), "#00FF00");
        assert!(color.is_valid);
        assert!(!color.is_default);
    }

    #[test]
    fn noise_characters_are_stripped_before_parsing() {
        let color = ThemeColor::parse("#ff0000");
        assert_eq!(color.rgba, Rgba::opaque(0xFF, 0x00, 0x00));
        assert!(color.is_valid);
    }

    #[test]
    fn plain_white_is_flagged_default_but_valid() {
        let color = ThemeColor::parse("FFFFFF");
        assert!(color.is_default);
        assert!(color.is_valid);
        // Alpha-qualified white is not the default sentinel.
        assert!(!ThemeColor::parse("FFFFFF80").is_default);
    }

    #[test]
    fn empty_color_input_never_panics() {
        let color = ThemeColor::parse("");
        assert!(!color.is_valid);
    }

    #[test]
    fn image_defaults_fill_unset_properties() {
        let normalized = normalize_bare("image", json!({ "path": "bg.png" }));
        assert_eq!(normalized.placement.pos, Vec2::ZERO);
        assert_eq!(normalized.placement.size, Vec2::ONE);
        assert_eq!(normalized.placement.z_index, 30);
        let ElementProps::Image(image) = normalized.props else {
            panic!("expected image props");
        };
        assert_eq!(image.path.as_deref(), Some("bg.png"));
        assert!(!image.tile);
        assert!(image.color.is_default);
        assert!(!image.needs_overlay());
    }

    #[test]
    fn image_tint_requires_a_non_default_valid_color() {
        let tinted = normalize_bare("image", json!({ "color": "FF000080" }));
        let ElementProps::Image(image) = tinted.props else {
            panic!("expected image props");
        };
        assert!(image.needs_overlay());
        assert!(!image.has_gradient());
    }

    #[test]
    fn image_gradient_requires_distinct_end_color() {
        let graded = normalize_bare(
            "image",
            json!({ "color": "FF0000", "colorEnd": "0000FF" }),
        );
        let ElementProps::Image(image) = graded.props else {
            panic!("expected image props");
        };
        assert!(image.has_gradient());
    }

    #[test]
    fn malformed_positions_fall_back_to_origin() {
        let normalized = normalize_bare("image", json!({ "pos": "not numbers" }));
        assert_eq!(normalized.placement.pos, Vec2::ZERO);
        let wrong_count = normalize_bare("image", json!({ "pos": "0.5" }));
        assert_eq!(wrong_count.placement.pos, Vec2::ZERO);
    }

    #[test]
    fn well_formed_positions_parse_as_fractions() {
        let normalized = normalize_bare("image", json!({ "pos": "0.25 0.75" }));
        assert_eq!(normalized.placement.pos, Vec2::new(0.25, 0.75));
    }

    #[test]
    fn out_of_set_enum_values_fall_back_to_type_default() {
        let normalized = normalize_bare(
            "text",
            json!({ "horizontalAlignment": "middle", "letterCase": "uppercase" }),
        );
        let ElementProps::Text(text) = normalized.props else {
            panic!("expected text props");
        };
        assert_eq!(text.horizontal_alignment, HorizontalAlignment::Left);
        assert_eq!(text.letter_case, LetterCase::Uppercase);
    }

    #[test]
    fn carousel_defaults_match_reference_table() {
        let normalized = normalize_bare("carousel", json!({}));
        assert_eq!(normalized.placement.pos, Vec2::new(0.0, 0.38378));
        let ElementProps::Carousel(carousel) = normalized.props else {
            panic!("expected carousel props");
        };
        assert_eq!(carousel.orientation, CarouselOrientation::Horizontal);
        assert_eq!(carousel.item_size, Vec2::new(0.25, 0.155));
        assert_eq!(carousel.unfocused_item_opacity, 0.5);
        assert!(!carousel.fast_scrolling);
        assert!(carousel.fallback_text.is_none());
    }

    #[test]
    fn numeric_properties_accept_both_strings_and_numbers() {
        let from_string = normalize_bare("textlist", json!({ "fontSize": "0.06" }));
        let from_number = normalize_bare("textlist", json!({ "fontSize": 0.06 }));
        for normalized in [from_string, from_number] {
            let ElementProps::TextList(list) = normalized.props else {
                panic!("expected textlist props");
            };
            assert!((list.font_size - 0.06).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn unknown_types_surface_as_placeholder_variant() {
        let normalized = normalize_bare("starfield", json!({ "pos": "0.1 0.1" }));
        assert_eq!(
            normalized.props,
            ElementProps::Unknown {
                type_name: "starfield".to_string()
            }
        );
        // No default table for unknown kinds, so authored values still parse.
        assert_eq!(normalized.placement.pos, Vec2::new(0.1, 0.1));
    }

    #[test]
    fn variables_resolve_before_parsing() {
        let mut bindings = Map::new();
        bindings.insert("accent".to_string(), json!("00FF00"));
        let scope = VariableScope::from_map(bindings);
        let normalized = normalize(&element("text", json!({ "color": "${accent}" })), &scope);
        let ElementProps::Text(text) = normalized.props else {
            panic!("expected text props");
        };
        assert_eq!(text.color.rgba, Rgba::opaque(0x00, 0xFF, 0x00));
    }

    #[test]
    fn menu_scoped_elements_hide_outside_menu_view() {
        let normalized = normalize_bare("image", json!({ "scope": "menu" }));
        assert!(normalized.hidden_for_view("system"));
        assert!(!normalized.hidden_for_view("menu"));
        let unscoped = normalize_bare("image", json!({}));
        assert!(!unscoped.hidden_for_view("system"));
    }

    #[test]
    fn helpsystem_transparent_background_reads_invalid() {
        let normalized = normalize_bare("helpsystem", json!({}));
        let ElementProps::HelpSystem(help) = normalized.props else {
            panic!("expected helpsystem props");
        };
        // "transparent" strips to a non-hex length; renderers skip painting.
        assert!(!help.background_color.is_valid);
        assert!(help.text_color.is_valid);
    }
}
