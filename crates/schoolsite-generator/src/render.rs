//! Section rendering.
//!
//! [`render_section`] maps one typed section to its HTML fragment. It is total:
//! every variant has a template and unknown types render as the empty string.
//! All configuration text is escaped on the way in.

use schoolsite_core::{
    LinkTarget, Section, SectionKind, SectionStyle, resolve_link,
    section::{
        AboutData, AccordionData, CardGridData, ContactData, DynamicGalleryData, GalleryData,
        HeroData, HeroSimpleData, HeroSliderData, HeroSplitData, ImageTextData, LayoutData,
        NoticesData, PrincipalData, ProfileData, QuoteData, StatsData, TabsData, TimelineData,
        VideoData, Widget,
    },
};

use crate::escape::{escape, escape_attr, escape_multiline};

/// Render a section to HTML.
#[must_use]
pub fn render_section(section: &Section) -> String {
    let body = match &section.kind {
        SectionKind::Hero(data) => hero(data),
        SectionKind::HeroSlider(data) => hero_slider(data),
        SectionKind::HeroSimple(data) => hero_simple(data),
        SectionKind::HeroSplit(data) => hero_split(data),
        SectionKind::ContentImageText(data) => image_text(data),
        SectionKind::ContentCards(data) => card_grid(data, 3),
        SectionKind::ContentFeatures(data) => card_grid(data, 4),
        SectionKind::ContentStats(data) => stats(data),
        SectionKind::MessageProfile(data) => message_profile(data),
        SectionKind::MessageQuote(data) => message_quote(data),
        SectionKind::GalleryGrid(data) => gallery_grid(data),
        SectionKind::GalleryMasonry(data) => gallery_masonry(data),
        SectionKind::VideoSection(data) => video(data),
        SectionKind::TabsContent(data) => tabs(data),
        SectionKind::Accordion(data) => accordion(data),
        SectionKind::Timeline(data) => timeline(data),
        SectionKind::About(data) => about(data),
        SectionKind::Principal(data) => principal(data),
        SectionKind::Contact(data) => contact(data),
        SectionKind::DynamicNotices(data) => notices(data),
        SectionKind::DynamicGallery(data) => dynamic_gallery(data),
        SectionKind::CustomLayout(data) => custom_layout(data),
        SectionKind::Unknown(section_type) => {
            tracing::warn!(section_type = %section_type, id = %section.id, "skipping unknown section type");
            return String::new();
        }
    };

    format!(
        "    <section id=\"{}\" class=\"{}\"{}>\n{}\n    </section>\n",
        escape_attr(&section.id.anchor()),
        section_class(&section.kind),
        style_attr(&section.style),
        body
    )
}

/// CSS classes of the `<section>` element.
fn section_class(kind: &SectionKind) -> String {
    match kind {
        SectionKind::HeroSimple(data) => {
            let overlay = match data.overlay.as_deref() {
                Some("light") => "light",
                Some("none") => "none",
                _ => "dark",
            };
            format!("hero-simple overlay-{overlay}")
        }
        SectionKind::HeroSplit(data) => {
            format!("hero-split {}", image_side(data.image_position.as_deref()))
        }
        SectionKind::ContentImageText(data) => {
            format!("content-image-text {}", image_side(data.layout.as_deref()))
        }
        SectionKind::MessageProfile(data) => {
            if data.layout.as_deref().is_some_and(|l| l.contains("right")) {
                "message-profile layout-right".to_string()
            } else {
                "message-profile layout-left".to_string()
            }
        }
        SectionKind::DynamicNotices(_) => "notices".to_string(),
        SectionKind::DynamicGallery(_) => "dynamic-gallery".to_string(),
        SectionKind::CustomLayout(_) => "custom-layout".to_string(),
        other => other.type_name().to_string(),
    }
}

fn image_side(position: Option<&str>) -> &'static str {
    if position.is_some_and(|p| p.contains("right")) {
        "image-right"
    } else {
        "image-left"
    }
}

/// Inline style built from the common section style fields.
fn style_attr(style: &SectionStyle) -> String {
    if style.is_empty() {
        return String::new();
    }

    let declarations: Vec<String> = [
        ("background", &style.bg_color),
        ("color", &style.text_color),
        ("text-align", &style.text_align),
        ("padding", &style.padding),
    ]
    .into_iter()
    .filter_map(|(property, value)| {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(|v| format!("{property}: {};", escape_attr(v.trim())))
    })
    .collect();

    if declarations.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", declarations.join(" "))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn section_title(text: Option<&str>) -> String {
    non_empty(text)
        .map(|t| format!("            <h2 class=\"section-title\">{}</h2>\n", escape(t)))
        .unwrap_or_default()
}

/// A link styled as a button; nothing when there is no label.
fn button(text: Option<&str>, url: Option<&str>, target: Option<LinkTarget>, class: &str) -> String {
    match non_empty(text) {
        Some(text) => format!(
            r#"<a href="{}" class="{class}">{}</a>"#,
            escape_attr(&resolve_link(url, target)),
            escape(text)
        ),
        None => String::new(),
    }
}

fn image(src: Option<&str>, alt: &str, class: &str) -> String {
    let Some(src) = non_empty(src) else {
        return String::new();
    };
    if class.is_empty() {
        format!(r#"<img src="{}" alt="{}">"#, escape_attr(src), escape_attr(alt))
    } else {
        format!(
            r#"<img src="{}" alt="{}" class="{class}">"#,
            escape_attr(src),
            escape_attr(alt)
        )
    }
}

/// An image whose source is loaded by the behavior script.
fn lazy_image(src: &str, alt: &str) -> String {
    format!(
        r#"<img data-src="{}" alt="{}">"#,
        escape_attr(src),
        escape_attr(alt)
    )
}

fn background_image(src: Option<&str>) -> String {
    non_empty(src)
        .map(|src| format!("background-image: url('{}');", escape_attr(src)))
        .unwrap_or_default()
}

fn paragraph(text: &str, class: &str) -> String {
    if text.trim().is_empty() {
        String::new()
    } else {
        format!(r#"<p class="{class}">{}</p>"#, escape_multiline(text))
    }
}

fn hero(data: &HeroData) -> String {
    format!(
        r#"        <div class="container">
            <h1 class="hero-title">{title}</h1>
            {subtitle}
            {cta}
            {image}
        </div>"#,
        title = escape(&data.title),
        subtitle = paragraph(&data.subtitle, "hero-subtitle"),
        cta = button(
            data.cta_text.as_deref(),
            data.cta_link.as_deref(),
            data.cta_target,
            "btn hero-btn"
        ),
        image = image(data.image.as_deref(), &data.title, "hero-img"),
    )
}

fn hero_slider(data: &HeroSliderData) -> String {
    let mut html = String::new();

    let height = non_empty(data.height.as_deref())
        .map(|h| format!(r#" style="height: {};""#, escape_attr(h)))
        .unwrap_or_default();
    html.push_str(&format!(
        r#"        <div class="slider" data-autoplay="{}" data-interval="{}"{height}>"#,
        data.autoplays(),
        data.interval_ms()
    ));
    html.push('\n');

    for (index, slide) in data.slides.iter().enumerate() {
        html.push_str(&format!(
            r#"            <div class="slide{active}" style="{bg}">
                <div class="slide-overlay"></div>
                <div class="slide-content container">
                    <h2 class="slide-title">{title}</h2>
                    {subtitle}
                    {button}
                </div>
            </div>
"#,
            active = if index == 0 { " active" } else { "" },
            bg = background_image(slide.image.as_deref()),
            title = escape(&slide.title),
            subtitle = paragraph(&slide.subtitle, "slide-subtitle"),
            button = button(
                slide.button_text.as_deref(),
                slide.button_link.as_deref(),
                slide.button_target,
                "btn btn-primary"
            ),
        ));
    }

    if data.slides.len() > 1 && data.show_arrows.unwrap_or(false) {
        html.push_str(
            r#"            <button class="slider-arrow prev" aria-label="Previous slide">&#10094;</button>
            <button class="slider-arrow next" aria-label="Next slide">&#10095;</button>
"#,
        );
    }

    if data.show_dots.unwrap_or(false) && !data.slides.is_empty() {
        html.push_str(r#"            <div class="slider-dots">"#);
        for index in 0..data.slides.len() {
            html.push_str(&format!(
                r#"<button class="slider-dot{}" data-index="{index}" aria-label="Go to slide {}"></button>"#,
                if index == 0 { " active" } else { "" },
                index + 1
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("        </div>");
    html
}

fn hero_simple(data: &HeroSimpleData) -> String {
    let height = non_empty(data.height.as_deref())
        .map(|h| format!(" min-height: {};", escape_attr(h)))
        .unwrap_or_default();

    format!(
        r#"        <div class="hero-simple-inner" style="{bg}{height}">
            <div class="slide-overlay"></div>
            <div class="slide-content container">
                <h1 class="slide-title">{title}</h1>
                {subtitle}
                {button}
            </div>
        </div>"#,
        bg = background_image(data.image.as_deref()),
        title = escape(&data.title),
        subtitle = paragraph(&data.subtitle, "slide-subtitle"),
        button = button(
            data.button_text.as_deref(),
            data.button_link.as_deref(),
            data.button_target,
            "btn btn-primary"
        ),
    )
}

fn hero_split(data: &HeroSplitData) -> String {
    format!(
        r#"        <div class="container hero-split-grid">
            <div class="hero-split-image">{image}</div>
            <div class="hero-split-text">
                <h1>{title}</h1>
                {subtitle}
                {description}
                {button}
            </div>
        </div>"#,
        image = image(data.image.as_deref(), &data.title, ""),
        title = escape(&data.title),
        subtitle = paragraph(&data.subtitle, "hero-split-subtitle"),
        description = paragraph(&data.description, "hero-split-description"),
        button = button(
            data.button_text.as_deref(),
            data.button_link.as_deref(),
            data.button_target,
            "btn btn-primary"
        ),
    )
}

fn image_text(data: &ImageTextData) -> String {
    format!(
        r#"        <div class="container">
            <div class="image-text-grid">
                <div class="image-text-image">{image}</div>
                <div class="image-text-body">
                    <h2>{heading}</h2>
                    <div class="image-text-content">{content}</div>
                    {button}
                </div>
            </div>
        </div>"#,
        image = image(data.image.as_deref(), &data.heading, ""),
        heading = escape(&data.heading),
        content = escape_multiline(&data.content),
        button = button(
            data.button_text.as_deref(),
            data.button_link.as_deref(),
            data.button_target,
            "btn btn-primary"
        ),
    )
}

fn card_grid(data: &CardGridData, default_columns: u8) -> String {
    let mut html = String::from("        <div class=\"container\">\n");
    html.push_str(&section_title(Some(data.heading.as_str())));
    if let Some(sub) = non_empty(data.subheading.as_deref()) {
        html.push_str(&format!(
            "            <p class=\"section-subtitle\">{}</p>\n",
            escape(sub)
        ));
    }

    html.push_str(&format!(
        "            <div class=\"card-grid cols-{} {}\">\n",
        data.column_count(default_columns),
        if data.is_flat() { "flat" } else { "elevated" }
    ));
    for card in &data.cards {
        let icon = if card.icon.trim().is_empty() {
            String::new()
        } else {
            format!(r#"<div class="card-icon">{}</div>"#, escape(&card.icon))
        };
        let link = if non_empty(card.link.as_deref()).is_some() {
            button(Some("Learn more"), card.link.as_deref(), card.link_target, "card-link")
        } else {
            String::new()
        };
        html.push_str(&format!(
            r#"                <div class="card">
                    {icon}
                    <h3 class="card-title">{}</h3>
                    {}
                    {link}
                </div>
"#,
            escape(&card.title),
            paragraph(&card.description, "card-description"),
        ));
    }
    html.push_str("            </div>\n        </div>");
    html
}

fn stats(data: &StatsData) -> String {
    let items: String = data
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"                <div class="stat"><div class="stat-number">{}</div><div class="stat-label">{}</div></div>
"#,
                escape(&stat.number),
                escape(&stat.label)
            )
        })
        .collect();

    format!(
        "        <div class=\"container\">\n{}            <div class=\"stats-grid\">\n{items}            </div>\n        </div>",
        section_title(data.heading.as_deref())
    )
}

fn message_profile(data: &ProfileData) -> String {
    format!(
        r#"        <div class="container">
{heading}            <div class="profile-grid">
                <div class="profile-photo">{image}</div>
                <div class="profile-body">
                    <blockquote class="profile-message">{message}</blockquote>
                    <p class="profile-name">{name}</p>
                    <p class="profile-designation">{designation}</p>
                </div>
            </div>
        </div>"#,
        heading = section_title(data.heading.as_deref()),
        image = image(data.image.as_deref(), &data.name, ""),
        message = escape_multiline(&data.message),
        name = escape(&data.name),
        designation = escape(&data.designation),
    )
}

fn message_quote(data: &QuoteData) -> String {
    let designation = non_empty(data.designation.as_deref())
        .map(|d| format!(r#"<p class="quote-designation">{}</p>"#, escape(d)))
        .unwrap_or_default();

    format!(
        r#"        <div class="container">
            <blockquote class="quote-text">&ldquo;{quote}&rdquo;</blockquote>
            <div class="quote-author">
                {photo}
                <div><p class="quote-name">{author}</p>{designation}</div>
            </div>
        </div>"#,
        quote = escape_multiline(&data.quote),
        photo = image(data.image.as_deref(), &data.author, "quote-photo"),
        author = escape(&data.author),
    )
}

fn gallery_grid(data: &GalleryData) -> String {
    let items: String = data
        .images
        .iter()
        .filter(|img| !img.url.trim().is_empty())
        .map(|img| {
            let caption = non_empty(img.caption.as_deref())
                .map(|c| format!(r#"<figcaption class="gallery-caption">{}</figcaption>"#, escape(c)))
                .unwrap_or_default();
            format!(
                "                <figure class=\"gallery-item\">{}{caption}</figure>\n",
                lazy_image(&img.url, img.caption.as_deref().unwrap_or("Gallery image"))
            )
        })
        .collect();

    format!(
        "        <div class=\"container\">\n{}            <div class=\"gallery-items\" style=\"grid-template-columns: repeat({}, 1fr); gap: {}px;\">\n{items}            </div>\n        </div>",
        section_title(data.heading.as_deref()),
        data.column_count(),
        data.gap_px()
    )
}

fn gallery_masonry(data: &GalleryData) -> String {
    let gap = data.gap_px();
    let items: String = data
        .images
        .iter()
        .filter(|img| !img.url.trim().is_empty())
        .map(|img| {
            format!(
                "                <div class=\"masonry-item\" style=\"margin-bottom: {gap}px;\">{}</div>\n",
                lazy_image(&img.url, img.caption.as_deref().unwrap_or("Gallery image"))
            )
        })
        .collect();

    format!(
        "        <div class=\"container\">\n{}            <div class=\"masonry\" style=\"column-count: {}; column-gap: {gap}px;\">\n{items}            </div>\n        </div>",
        section_title(data.heading.as_deref()),
        data.column_count()
    )
}

fn video(data: &VideoData) -> String {
    let description = non_empty(data.description.as_deref())
        .map(|d| format!("            <p class=\"video-description\">{}</p>\n", escape(d)))
        .unwrap_or_default();
    let frame = non_empty(data.video_url.as_deref())
        .map(|url| {
            format!(
                r#"            <div class="video-wrapper"><iframe src="{}" title="{}" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe></div>
"#,
                escape_attr(url),
                escape_attr(data.heading.as_deref().unwrap_or("Video"))
            )
        })
        .unwrap_or_default();

    format!(
        "        <div class=\"container\">\n{}{description}{frame}        </div>",
        section_title(data.heading.as_deref())
    )
}

fn tabs(data: &TabsData) -> String {
    let mut buttons = String::new();
    let mut panels = String::new();
    for (index, tab) in data.tabs.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        buttons.push_str(&format!(
            r#"<button class="tab-button{active}" data-tab="{index}">{}</button>"#,
            escape(&tab.label)
        ));
        panels.push_str(&format!(
            "                <div class=\"tab-panel{active}\" data-tab=\"{index}\">{}</div>\n",
            escape_multiline(&tab.content)
        ));
    }

    format!(
        "        <div class=\"container\">\n{}            <div class=\"tab-buttons\">{buttons}</div>\n            <div class=\"tab-panels\">\n{panels}            </div>\n        </div>",
        section_title(data.heading.as_deref())
    )
}

fn accordion(data: &AccordionData) -> String {
    let items: String = data
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                r#"                <div class="accordion-item{}">
                    <button class="accordion-header">{}</button>
                    <div class="accordion-content">{}</div>
                </div>
"#,
                if index == 0 { " active" } else { "" },
                escape(&item.title),
                escape_multiline(&item.content)
            )
        })
        .collect();

    format!(
        "        <div class=\"container\">\n{}            <div class=\"accordion-items\">\n{items}            </div>\n        </div>",
        section_title(data.heading.as_deref())
    )
}

fn timeline(data: &TimelineData) -> String {
    let items: String = data
        .events
        .iter()
        .map(|event| {
            format!(
                r#"                <div class="timeline-item">
                    <div class="timeline-dot"></div>
                    <div class="timeline-year">{}</div>
                    <h3 class="timeline-title">{}</h3>
                    {}
                </div>
"#,
                escape(&event.year),
                escape(&event.title),
                paragraph(&event.description, "timeline-description")
            )
        })
        .collect();

    format!(
        "        <div class=\"container\">\n{}            <div class=\"timeline-items\">\n{items}            </div>\n        </div>",
        section_title(data.heading.as_deref())
    )
}

fn about(data: &AboutData) -> String {
    format!(
        r#"        <div class="container">
            <h2 class="section-title">{}</h2>
            <div class="about-content">
                <p>{}</p>
            </div>
        </div>"#,
        escape(non_empty(data.title.as_deref()).unwrap_or("About Us")),
        escape_multiline(&data.content)
    )
}

fn principal(data: &PrincipalData) -> String {
    let name = non_empty(data.name.as_deref()).unwrap_or("Principal");
    let photo = match non_empty(data.image.as_deref()) {
        Some(_) => image(data.image.as_deref(), name, "principal-img"),
        None => r#"<div class="principal-placeholder"></div>"#.to_string(),
    };

    format!(
        r#"        <div class="container">
            <h2 class="section-title">Principal's Message</h2>
            <div class="principal-grid">
                <div>{photo}</div>
                <div>
                    <h3 class="principal-name">{}</h3>
                    <p class="principal-message">{}</p>
                </div>
            </div>
        </div>"#,
        escape(name),
        escape_multiline(&data.message)
    )
}

fn contact(data: &ContactData) -> String {
    let item = |label: &str, value: &str| {
        format!(
            r#"                <div class="contact-item">
                    <h3>{label}</h3>
                    <p>{}</p>
                </div>
"#,
            escape(value)
        )
    };

    format!(
        "        <div class=\"container\">\n            <h2 class=\"section-title\">Contact Us</h2>\n            <div class=\"contact-grid\">\n{}{}{}            </div>\n        </div>",
        item("Address", &data.address),
        item("Phone", &data.phone),
        item("Email", &data.email)
    )
}

fn view_all(link: Option<&str>, label: &str) -> String {
    match non_empty(link) {
        Some(_) => format!(
            "            <div class=\"view-all\">{}</div>\n",
            button(Some(label), link, Some(LinkTarget::Url), "btn btn-outline")
        ),
        None => String::new(),
    }
}

fn notices(data: &NoticesData) -> String {
    let body = if data.notices.is_empty() {
        "            <div class=\"empty-state\">No notices available at the moment.</div>\n".to_string()
    } else {
        let cards: String = data
            .notices
            .iter()
            .map(|notice| {
                let date = notice
                    .date()
                    .map(|d| format!(r#"<div class="notice-date">{}</div>"#, escape(d)))
                    .unwrap_or_default();
                let attachment = non_empty(notice.file_url.as_deref())
                    .map(|url| {
                        format!(
                            r#"<a href="{}" class="notice-link" target="_blank" rel="noopener noreferrer">View Attachment</a>"#,
                            escape_attr(url)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"                <div class="notice-card">
                    {date}
                    <h3 class="notice-title">{}</h3>
                    {}
                    {attachment}
                </div>
"#,
                    escape(&notice.title),
                    paragraph(&notice.description, "notice-description")
                )
            })
            .collect();
        format!("            <div class=\"notice-grid\">\n{cards}            </div>\n")
    };

    format!(
        "        <div class=\"container\">\n{}{body}{}        </div>",
        section_title(Some(non_empty(data.title.as_deref()).unwrap_or("Latest Notices"))),
        view_all(data.view_all_link.as_deref(), "View All Notices")
    )
}

fn dynamic_gallery(data: &DynamicGalleryData) -> String {
    let images: Vec<_> = data
        .images
        .iter()
        .filter_map(|item| item.src().map(|src| (src, item.title.as_deref())))
        .filter(|(src, _)| !src.trim().is_empty())
        .collect();

    let body = if images.is_empty() {
        "            <div class=\"empty-state\">No images in gallery.</div>\n".to_string()
    } else {
        let items: String = images
            .iter()
            .map(|(src, title)| {
                let caption = non_empty(*title)
                    .map(|t| format!(r#"<figcaption class="gallery-caption">{}</figcaption>"#, escape(t)))
                    .unwrap_or_default();
                format!(
                    "                <figure class=\"gallery-item\">{}{caption}</figure>\n",
                    lazy_image(src, title.unwrap_or("Gallery image"))
                )
            })
            .collect();
        format!("            <div class=\"gallery-items\">\n{items}            </div>\n")
    };

    format!(
        "        <div class=\"container\">\n{}{body}{}        </div>",
        section_title(Some(non_empty(data.title.as_deref()).unwrap_or("Photo Gallery"))),
        view_all(data.view_all_link.as_deref(), "View All Photos")
    )
}

fn custom_layout(data: &LayoutData) -> String {
    let mut html = String::from("        <div class=\"container\">\n");
    for row in &data.rows {
        html.push_str("            <div class=\"layout-row\">\n");
        for column in &row.columns {
            let width = non_empty(column.width.as_deref()).unwrap_or("100%");
            let widget = column.widget.as_ref().map(widget).unwrap_or_default();
            html.push_str(&format!(
                "                <div class=\"layout-column\" style=\"width: {};\">{widget}</div>\n",
                escape_attr(width)
            ));
        }
        html.push_str("            </div>\n");
    }
    html.push_str("        </div>");
    html
}

fn widget(widget: &Widget) -> String {
    match widget {
        Widget::Text { content } => {
            format!(r#"<div class="widget-text">{}</div>"#, escape_multiline(content))
        }
        Widget::Image { url } => image(url.as_deref(), "", "widget-image"),
        Widget::Button { text, url, target } => {
            button(Some(text.as_str()), url.as_deref(), *target, "btn btn-primary")
        }
        Widget::Spacer { height } => format!(
            r#"<div class="widget-spacer" style="height: {};"></div>"#,
            escape_attr(non_empty(height.as_deref()).unwrap_or("40px"))
        ),
        Widget::Unsupported => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn render(value: Value) -> String {
        let section: Section = serde_json::from_value(value).unwrap();
        render_section(&section)
    }

    #[test]
    fn test_legacy_hero() {
        let html = render(json!({
            "id": 1,
            "type": "hero",
            "data": {"title": "Welcome", "subtitle": "Learn", "ctaText": "Apply", "ctaLink": "/admissions", "ctaTarget": "page"}
        }));
        assert!(html.contains(r#"<section id="section-1" class="hero">"#));
        assert!(html.contains(r#"<h1 class="hero-title">Welcome</h1>"#));
        assert!(html.contains(r#"<p class="hero-subtitle">Learn</p>"#));
        assert!(html.contains(r#"<a href="admissions.html" class="btn hero-btn">Apply</a>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        assert_eq!(render(json!({"id": 1, "type": "not-a-real-type", "data": {"title": "x"}})), "");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render(json!({
            "id": 1,
            "type": "hero",
            "data": {"title": "<script>alert(1)</script>", "image": "x.png\" onerror=\"alert(1)"}
        }));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains(r#"src="x.png&quot; onerror=&quot;alert(1)""#));
    }

    #[test]
    fn test_common_style_inline() {
        let html = render(json!({
            "id": 5,
            "type": "about",
            "data": {"bgColor": "#fafafa", "textColor": "#111", "textAlign": "left", "padding": "2rem 0"}
        }));
        assert!(html.contains(
            r##"<section id="section-5" class="about" style="background: #fafafa; color: #111; text-align: left; padding: 2rem 0;">"##
        ));
    }

    #[test]
    fn test_slider_markup() {
        let html = render(json!({
            "id": "s",
            "type": "hero-slider",
            "data": {
                "slides": [{"title": "One", "image": "a.jpg"}, {"title": "Two"}, {"title": "Three"}],
                "showDots": true,
                "showArrows": true,
                "interval": 7000
            }
        }));
        assert!(html.contains(r#"data-autoplay="true" data-interval="7000""#));
        assert_eq!(html.matches(r#"class="slide" style="#).count(), 2);
        assert_eq!(html.matches(r#"class="slide active" style="#).count(), 1);
        assert_eq!(html.matches("slider-dot").count(), 4);
        assert!(html.contains(r#"class="slider-dot active" data-index="0""#));
        assert!(html.contains("slider-arrow prev"));
        assert!(html.contains("background-image: url('a.jpg');"));
    }

    #[test]
    fn test_slider_without_dots() {
        let html = render(json!({"id": 1, "type": "hero-slider", "data": {"slides": [{"title": "Only"}]}}));
        assert!(!html.contains("slider-dots"));
        assert!(!html.contains("slider-arrow"));
        assert!(html.contains(r#"data-autoplay="false""#));
    }

    #[test]
    fn test_hero_split_and_image_text_sides() {
        let split = render(json!({"id": 1, "type": "hero-split", "data": {"imagePosition": "right"}}));
        assert!(split.contains(r#"class="hero-split image-right""#));
        let text = render(json!({"id": 2, "type": "content-image-text", "data": {"layout": "image-left"}}));
        assert!(text.contains(r#"class="content-image-text image-left""#));
    }

    #[test]
    fn test_cards_columns_and_style() {
        let html = render(json!({
            "id": 3,
            "type": "content-cards",
            "data": {
                "heading": "Programs",
                "columns": 2,
                "cardStyle": "flat",
                "cards": [{"icon": "🎓", "title": "Science", "description": "Labs", "link": "/science", "linkTarget": "page"}]
            }
        }));
        assert!(html.contains(r#"<h2 class="section-title">Programs</h2>"#));
        assert!(html.contains(r#"class="card-grid cols-2 flat""#));
        assert!(html.contains(r#"<h3 class="card-title">Science</h3>"#));
        assert!(html.contains(r#"href="science.html""#));
    }

    #[test]
    fn test_features_default_columns() {
        let html = render(json!({"id": 3, "type": "content-features", "data": {"features": [{"title": "A"}]}}));
        assert!(html.contains(r#"class="card-grid cols-4 elevated""#));
        assert!(html.contains(r#"class="content-features""#));
    }

    #[test]
    fn test_tabs_first_panel_active() {
        let html = render(json!({
            "id": 9,
            "type": "tabs-content",
            "data": {"tabs": [{"label": "A", "content": "one"}, {"label": "B", "content": "two"}]}
        }));
        assert!(html.contains(r#"<button class="tab-button active" data-tab="0">A</button>"#));
        assert!(html.contains(r#"<button class="tab-button" data-tab="1">B</button>"#));
        assert!(html.contains(r#"<div class="tab-panel active" data-tab="0">one</div>"#));
        assert!(html.contains(r#"<div class="tab-panel" data-tab="1">two</div>"#));
    }

    #[test]
    fn test_accordion_first_item_open() {
        let html = render(json!({
            "id": 4,
            "type": "accordion",
            "data": {"items": [{"title": "Q1", "content": "A1"}, {"title": "Q2", "content": "A2"}]}
        }));
        assert_eq!(html.matches(r#"class="accordion-item active""#).count(), 1);
        assert_eq!(html.matches(r#"class="accordion-item""#).count(), 1);
    }

    #[test]
    fn test_gallery_grid_lazy_images() {
        let html = render(json!({
            "id": 6,
            "type": "gallery-grid",
            "data": {"columns": 3, "spacing": 8, "images": [{"url": "a.jpg", "caption": "Sports day"}, {"url": ""}]}
        }));
        assert!(html.contains("grid-template-columns: repeat(3, 1fr); gap: 8px;"));
        assert!(html.contains(r#"<img data-src="a.jpg" alt="Sports day">"#));
        assert!(html.contains(r#"<figcaption class="gallery-caption">Sports day</figcaption>"#));
        assert_eq!(html.matches("<figure").count(), 1);
    }

    #[test]
    fn test_masonry_columns() {
        let html = render(json!({"id": 6, "type": "gallery-masonry", "data": {"columns": "2", "images": [{"url": "a.jpg"}]}}));
        assert!(html.contains("column-count: 2; column-gap: 16px;"));
    }

    #[test]
    fn test_video_embed() {
        let html = render(json!({
            "id": 7,
            "type": "video-section",
            "data": {"heading": "Tour", "videoUrl": "https://www.youtube.com/embed/abc"}
        }));
        assert!(html.contains(r#"<iframe src="https://www.youtube.com/embed/abc""#));
        assert!(html.contains("video-wrapper"));
    }

    #[test]
    fn test_timeline_and_stats() {
        let html = render(json!({
            "id": 8,
            "type": "timeline",
            "data": {"events": [{"year": 1990, "title": "Founded"}]}
        }));
        assert!(html.contains(r#"<div class="timeline-year">1990</div>"#));

        let html = render(json!({
            "id": 8,
            "type": "content-stats",
            "data": {"stats": [{"number": 1200, "label": "Students"}]}
        }));
        assert!(html.contains(r#"<div class="stat-number">1200</div>"#));
    }

    #[test]
    fn test_legacy_about_defaults() {
        let html = render(json!({"id": "about", "type": "about", "data": {"content": "Line 1\nLine 2"}}));
        assert!(html.contains(r#"<h2 class="section-title">About Us</h2>"#));
        assert!(html.contains("<p>Line 1<br>Line 2</p>"));
    }

    #[test]
    fn test_principal_placeholder() {
        let html = render(json!({"id": "principal", "type": "principal", "data": {"message": "Hello"}}));
        assert!(html.contains("principal-placeholder"));
        assert!(html.contains(r#"<h3 class="principal-name">Principal</h3>"#));
    }

    #[test]
    fn test_contact_cards() {
        let html = render(json!({"id": "contact", "type": "contact", "data": {"phone": "555-0100"}}));
        assert_eq!(html.matches("contact-item").count(), 3);
        assert!(html.contains("<p>555-0100</p>"));
    }

    #[test]
    fn test_notices_empty_state() {
        let html = render(json!({"id": 1, "type": "dynamic_notices", "data": {"viewAllLink": "https://x.com/notices"}}));
        assert!(html.contains("No notices available at the moment."));
        assert!(html.contains(r#"<a href="https://x.com/notices" class="btn btn-outline">View All Notices</a>"#));
    }

    #[test]
    fn test_custom_layout_widgets() {
        let html = render(json!({
            "id": 10,
            "type": "custom_layout",
            "data": {"rows": [{"columns": [
                {"width": "50%", "widget": {"type": "text", "content": "Hi <b>"}},
                {"width": "25%", "widget": {"type": "button", "text": "Go", "url": "/contact", "target": "page"}},
                {"widget": {"type": "spacer", "height": "20px"}},
                {"widget": {"type": "carousel"}}
            ]}]}
        }));
        assert!(html.contains(r#"<div class="layout-column" style="width: 50%;"><div class="widget-text">Hi &lt;b&gt;</div></div>"#));
        assert!(html.contains(r#"<a href="contact.html" class="btn btn-primary">Go</a>"#));
        assert!(html.contains(r#"style="height: 20px;""#));
        assert_eq!(html.matches("layout-column").count(), 4);
    }

    #[test]
    fn test_text_widget_keeps_line_structure_on_one_line() {
        let html = render(json!({
            "id": 11,
            "type": "custom_layout",
            "data": {"rows": [{"columns": [
                {"widget": {"type": "text", "content": "Timings:\n    Mon-Fri 8-2\n    Sat 8-12"}}
            ]}]}
        }));
        assert!(html.contains(
            r#"<div class="widget-text">Timings:<br>    Mon-Fri 8-2<br>    Sat 8-12</div>"#
        ));
    }

    #[test]
    fn test_button_missing_url_is_dead_link() {
        let html = render(json!({"id": 1, "type": "hero-simple", "data": {"buttonText": "Go"}}));
        assert!(html.contains(r##"<a href="#" class="btn btn-primary">Go</a>"##));
        assert!(html.contains(r#"class="hero-simple overlay-dark""#));
    }
}
