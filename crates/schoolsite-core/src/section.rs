//! Typed section payloads.
//!
//! Sections arrive as `{id, type, data, customCss}` objects. The `type` string
//! selects a [`SectionKind`] variant and `data` is read into that variant's
//! payload. Reading never fails: unknown types become
//! [`SectionKind::Unknown`] and payloads that do not fit their shape fall back
//! to the empty payload.

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    link::LinkTarget,
    site::{GalleryItem, Notice},
};

/// Identifier of a section, used for the `section-<id>` anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no id was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// DOM id of the rendered section (`section-<id>`).
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("section-{}", self.0)
    }

    /// CSS id selector of the rendered section (`#section-<id>`).
    #[must_use]
    pub fn selector(&self) -> String {
        format!("#section-{}", self.0)
    }

    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self(s.clone()),
            Some(Value::Number(n)) => Self(n.to_string()),
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One typed content block of a page.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawSection")]
pub struct Section {
    /// Section id.
    pub id: SectionId,
    /// Variant and payload.
    pub kind: SectionKind,
    /// Inline style shared by every variant.
    pub style: SectionStyle,
    /// Raw CSS scoped to this section.
    pub custom_css: Option<String>,
}

impl Section {
    /// Build a section from its wire parts.
    pub fn from_parts(id: SectionId, section_type: &str, data: Value) -> Self {
        let data = stringify_numbers(strip_nulls(data));
        Self {
            id,
            style: payload(section_type, &data),
            kind: SectionKind::from_data(section_type, &data),
            custom_css: None,
        }
    }

    /// Attach a custom CSS fragment.
    #[must_use]
    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    #[serde(default)]
    id: Option<Value>,
    #[serde(rename = "type", default)]
    section_type: Option<String>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    custom_css: Option<String>,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        let section = Self::from_parts(
            SectionId::from_value(raw.id.as_ref()),
            raw.section_type.as_deref().unwrap_or_default(),
            raw.data,
        );
        match raw.custom_css.filter(|css| !css.trim().is_empty()) {
            Some(css) => section.with_custom_css(css),
            None => section,
        }
    }
}

/// Style attributes any section may carry in its `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    /// Background color.
    #[serde(alias = "backgroundColor")]
    pub bg_color: Option<String>,
    /// Text color.
    pub text_color: Option<String>,
    /// Text alignment.
    pub text_align: Option<String>,
    /// Vertical padding.
    pub padding: Option<String>,
}

impl SectionStyle {
    /// Whether no style attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bg_color.is_none()
            && self.text_color.is_none()
            && self.text_align.is_none()
            && self.padding.is_none()
    }
}

/// The closed set of section variants.
#[derive(Debug, Clone)]
pub enum SectionKind {
    /// Legacy centered hero.
    Hero(HeroData),
    /// Multi-slide hero carousel.
    HeroSlider(HeroSliderData),
    /// Single full-width hero slide.
    HeroSimple(HeroSimpleData),
    /// Hero with image and text side by side.
    HeroSplit(HeroSplitData),
    /// Two-column image and text block.
    ContentImageText(ImageTextData),
    /// Grid of cards.
    ContentCards(CardGridData),
    /// Grid of features.
    ContentFeatures(CardGridData),
    /// Four numeric statistics.
    ContentStats(StatsData),
    /// Photo with name, designation and message.
    MessageProfile(ProfileData),
    /// Pull-quote testimonial.
    MessageQuote(QuoteData),
    /// Column grid of images.
    GalleryGrid(GalleryData),
    /// CSS-columns masonry of images.
    GalleryMasonry(GalleryData),
    /// Embedded video.
    VideoSection(VideoData),
    /// Tabbed panels.
    TabsContent(TabsData),
    /// Collapsible items.
    Accordion(AccordionData),
    /// Vertical timeline.
    Timeline(TimelineData),
    /// Legacy prose block.
    About(AboutData),
    /// Legacy principal's message.
    Principal(PrincipalData),
    /// Legacy contact cards.
    Contact(ContactData),
    /// Snapshot of the school's latest notices.
    DynamicNotices(NoticesData),
    /// Snapshot of the school's gallery.
    DynamicGallery(DynamicGalleryData),
    /// Freeform rows and columns of widgets.
    CustomLayout(LayoutData),
    /// A type this generator does not know; renders nothing.
    Unknown(String),
}

impl SectionKind {
    /// Read a payload for the given type name.
    pub fn from_data(section_type: &str, data: &Value) -> Self {
        match section_type {
            "hero" => Self::Hero(payload(section_type, data)),
            "hero-slider" => Self::HeroSlider(payload(section_type, data)),
            "hero-simple" => Self::HeroSimple(payload(section_type, data)),
            "hero-split" => Self::HeroSplit(payload(section_type, data)),
            "content-image-text" => Self::ContentImageText(payload(section_type, data)),
            "content-cards" => Self::ContentCards(payload(section_type, data)),
            "content-features" => Self::ContentFeatures(payload(section_type, data)),
            "content-stats" => Self::ContentStats(payload(section_type, data)),
            "message-profile" => Self::MessageProfile(payload(section_type, data)),
            "message-quote" => Self::MessageQuote(payload(section_type, data)),
            "gallery-grid" => Self::GalleryGrid(payload(section_type, data)),
            "gallery-masonry" => Self::GalleryMasonry(payload(section_type, data)),
            "video-section" => Self::VideoSection(payload(section_type, data)),
            "tabs-content" => Self::TabsContent(payload(section_type, data)),
            "accordion" => Self::Accordion(payload(section_type, data)),
            "timeline" => Self::Timeline(payload(section_type, data)),
            "about" => Self::About(payload(section_type, data)),
            "principal" => Self::Principal(payload(section_type, data)),
            "contact" => Self::Contact(payload(section_type, data)),
            "dynamic_notices" => Self::DynamicNotices(payload(section_type, data)),
            "dynamic_gallery" => Self::DynamicGallery(payload(section_type, data)),
            "custom_layout" => Self::CustomLayout(payload(section_type, data)),
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Type name as written in site configurations.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Hero(_) => "hero",
            Self::HeroSlider(_) => "hero-slider",
            Self::HeroSimple(_) => "hero-simple",
            Self::HeroSplit(_) => "hero-split",
            Self::ContentImageText(_) => "content-image-text",
            Self::ContentCards(_) => "content-cards",
            Self::ContentFeatures(_) => "content-features",
            Self::ContentStats(_) => "content-stats",
            Self::MessageProfile(_) => "message-profile",
            Self::MessageQuote(_) => "message-quote",
            Self::GalleryGrid(_) => "gallery-grid",
            Self::GalleryMasonry(_) => "gallery-masonry",
            Self::VideoSection(_) => "video-section",
            Self::TabsContent(_) => "tabs-content",
            Self::Accordion(_) => "accordion",
            Self::Timeline(_) => "timeline",
            Self::About(_) => "about",
            Self::Principal(_) => "principal",
            Self::Contact(_) => "contact",
            Self::DynamicNotices(_) => "dynamic_notices",
            Self::DynamicGallery(_) => "dynamic_gallery",
            Self::CustomLayout(_) => "custom_layout",
            Self::Unknown(name) => name,
        }
    }

    /// Whether this is an unrecognized type.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// Read `data` into `T`, falling back to `T::default()`.
fn payload<T: DeserializeOwned + Default>(section_type: &str, data: &Value) -> T {
    if data.is_null() {
        return T::default();
    }
    match T::deserialize(data) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(section_type, error = %err, "unreadable section data, using empty payload");
            T::default()
        }
    }
}

/// Numbers in section data are read as text, so `"columns": 3` and
/// `"columns": "3"` are equivalent.
fn stringify_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Array(items) => Value::Array(items.into_iter().map(stringify_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, stringify_numbers(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Drop `null` object members and array elements, so an explicit `null`
/// reads the same as a missing key.
pub(crate) fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        other => other,
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().trim_end_matches("px").parse().ok())
}

/// Legacy hero payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroData {
    pub title: String,
    pub subtitle: String,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub cta_target: Option<LinkTarget>,
    pub image: Option<String>,
}

/// One slide of a hero slider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    pub image: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub button_target: Option<LinkTarget>,
}

/// Hero slider payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSliderData {
    pub slides: Vec<Slide>,
    pub autoplay: Option<bool>,
    pub interval: Option<String>,
    pub show_arrows: Option<bool>,
    pub show_dots: Option<bool>,
    pub height: Option<String>,
}

impl HeroSliderData {
    /// Autoplay interval in milliseconds.
    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        parse_number(self.interval.as_deref())
            .filter(|ms| *ms >= 1000)
            .unwrap_or(5000)
    }

    /// Whether the slider advances on its own.
    #[must_use]
    pub fn autoplays(&self) -> bool {
        self.autoplay.unwrap_or(true) && self.slides.len() > 1
    }
}

/// Single-slide hero payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSimpleData {
    pub image: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub button_target: Option<LinkTarget>,
    pub height: Option<String>,
    pub overlay: Option<String>,
}

/// Split hero payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSplitData {
    pub image: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub button_target: Option<LinkTarget>,
    pub image_position: Option<String>,
}

/// Image and text payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageTextData {
    pub layout: Option<String>,
    pub image: Option<String>,
    pub heading: String,
    pub content: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub button_target: Option<LinkTarget>,
}

/// One card of a card or feature grid.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub link_target: Option<LinkTarget>,
}

/// Card and feature grid payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardGridData {
    pub heading: String,
    pub subheading: Option<String>,
    #[serde(alias = "features")]
    pub cards: Vec<Card>,
    pub columns: Option<String>,
    pub card_style: Option<String>,
}

impl CardGridData {
    /// Column count, clamped to 2..=4.
    #[must_use]
    pub fn column_count(&self, fallback: u8) -> u8 {
        parse_number(self.columns.as_deref())
            .unwrap_or(fallback)
            .clamp(2, 4)
    }

    /// Whether cards are drawn flat instead of elevated.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.card_style.as_deref() == Some("flat")
    }
}

/// One statistic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// Statistics payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsData {
    pub heading: Option<String>,
    pub stats: Vec<Stat>,
}

/// Profile message payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub image: Option<String>,
    pub name: String,
    pub designation: String,
    pub heading: Option<String>,
    pub message: String,
    pub layout: Option<String>,
}

/// Quote payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteData {
    pub quote: String,
    pub author: String,
    pub designation: Option<String>,
    pub image: Option<String>,
}

/// One gallery image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub url: String,
    pub caption: Option<String>,
}

/// Gallery payload, shared by grid and masonry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryData {
    pub heading: Option<String>,
    pub images: Vec<GalleryImage>,
    pub columns: Option<String>,
    pub spacing: Option<String>,
}

impl GalleryData {
    /// Column count, clamped to 1..=6.
    #[must_use]
    pub fn column_count(&self) -> u8 {
        parse_number(self.columns.as_deref()).unwrap_or(4).clamp(1, 6)
    }

    /// Gap between images in pixels.
    #[must_use]
    pub fn gap_px(&self) -> u16 {
        parse_number(self.spacing.as_deref()).unwrap_or(16).min(128)
    }
}

/// Video payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoData {
    pub heading: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,
}

/// One tab.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tab {
    pub label: String,
    pub content: String,
}

/// Tabs payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsData {
    pub heading: Option<String>,
    pub tabs: Vec<Tab>,
}

/// One accordion item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

/// Accordion payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionData {
    pub heading: Option<String>,
    pub items: Vec<AccordionItem>,
}

/// One timeline entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

/// Timeline payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineData {
    pub heading: Option<String>,
    pub events: Vec<TimelineEvent>,
}

/// Legacy about payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutData {
    pub title: Option<String>,
    pub content: String,
}

/// Legacy principal payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrincipalData {
    pub name: Option<String>,
    pub message: String,
    pub image: Option<String>,
}

/// Legacy contact payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactData {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Notices payload. `notices` is filled by the normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoticesData {
    pub title: Option<String>,
    pub limit: Option<String>,
    pub view_all_link: Option<String>,
    #[serde(skip)]
    pub notices: Vec<Notice>,
}

impl NoticesData {
    /// Maximum number of notices shown.
    #[must_use]
    pub fn limit(&self) -> usize {
        parse_number(self.limit.as_deref()).unwrap_or(3)
    }
}

/// Dynamic gallery payload. `images` is filled by the normalizer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicGalleryData {
    pub title: Option<String>,
    pub limit: Option<String>,
    pub view_all_link: Option<String>,
    #[serde(skip)]
    pub images: Vec<GalleryItem>,
}

impl DynamicGalleryData {
    /// Maximum number of images shown.
    #[must_use]
    pub fn limit(&self) -> usize {
        parse_number(self.limit.as_deref()).unwrap_or(6)
    }
}

/// Custom layout payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutData {
    pub rows: Vec<LayoutRow>,
}

/// One row of a custom layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutRow {
    pub columns: Vec<LayoutColumn>,
}

/// One column of a custom layout row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutColumn {
    pub width: Option<String>,
    pub widget: Option<Widget>,
}

/// The single widget a layout column may hold.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Widget {
    Text {
        #[serde(default)]
        content: String,
    },
    Image {
        #[serde(default)]
        url: Option<String>,
    },
    Button {
        #[serde(default)]
        text: String,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        target: Option<LinkTarget>,
    },
    Spacer {
        #[serde(default)]
        height: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}
