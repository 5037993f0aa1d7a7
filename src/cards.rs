use crate::feed::{CardDescriptor, FeedOutcome};

/// What the analyzer grid shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Grid {
    Loading,
    Cards(Vec<CardView>),
    /// The feed was explicitly empty.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub ordinal: i64,
    pub title: String,
    pub title_html: String,
    pub description_html: String,
    pub date_html: String,
    pub cover_image_url: String,
    /// Kept verbatim; translated only when the card is clicked.
    pub raw_video_reference: String,
}

/// Makes feed text safe to splice into markup, quotes included.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `20240923` reads as `2024-09-23`; anything else is shown as given.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        let parsed = raw[0..4].parse().ok().and_then(|y| {
            let m = raw[4..6].parse().ok()?;
            let d = raw[6..8].parse().ok()?;
            chrono::NaiveDate::from_ymd_opt(y, m, d)
        });
        if let Some(date) = parsed {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}

impl CardView {
    pub fn from_descriptor(d: &CardDescriptor) -> Self {
        Self {
            ordinal: d.ordinal,
            title: d.title.clone(),
            title_html: escape_html(&d.title),
            description_html: escape_html(&d.description),
            date_html: escape_html(&display_date(&d.publish_date)),
            cover_image_url: d.cover_image_url.clone(),
            raw_video_reference: d.raw_video_reference.clone(),
        }
    }

    /// Text part of the card. Only escaped fields go in here.
    pub fn body_markup(&self) -> String {
        format!(
            r#"<span class="card-number">#{}</span><h3 class="card-title">{}</h3><p class="card-description">{}</p><span class="card-date">{}</span>"#,
            self.ordinal, self.title_html, self.description_html, self.date_html
        )
    }
}

/// Rebuilds the whole grid. Source order is display order.
pub fn render(outcome: &FeedOutcome) -> Grid {
    match outcome {
        FeedOutcome::Empty => Grid::Placeholder,
        _ => Grid::Cards(outcome.descriptors().iter().map(CardView::from_descriptor).collect()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltProfile {
    pub lift_px: f64,
    pub strength: f64,
}

pub const CARD_TILT: TiltProfile = TiltProfile { lift_px: 5.0, strength: 0.05 };

/// CSS transform for a pointer at (`x`, `y`) over `rect`. Depends on
/// nothing but its arguments.
pub fn tilt_transform(x: f64, y: f64, rect: Rect, profile: TiltProfile) -> String {
    let center_x = rect.left + rect.width / 2.0;
    let center_y = rect.top + rect.height / 2.0;
    let rotate_x = (center_y - y) * profile.strength;
    let rotate_y = (x - center_x) * profile.strength;
    format!(
        "translateY(-{}px) rotateX({}deg) rotateY({}deg)",
        profile.lift_px, rotate_x, rotate_y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{fallback_descriptors, placeholder_cover};

    fn descriptor(ordinal: i64, title: &str) -> CardDescriptor {
        CardDescriptor {
            ordinal,
            title: title.to_string(),
            description: String::new(),
            raw_video_reference: format!("https://www.bilibili.com/video/av{}", ordinal),
            cover_image_url: placeholder_cover(ordinal),
            publish_date: String::new(),
        }
    }

    #[test]
    fn renders_one_card_per_descriptor_in_order() {
        let descriptors = vec![descriptor(3, "c"), descriptor(1, "a"), descriptor(2, "b")];
        let Grid::Cards(cards) = render(&FeedOutcome::Loaded(descriptors)) else {
            panic!("expected cards");
        };
        let ordinals: Vec<_> = cards.iter().map(|c| c.ordinal).collect();
        assert_eq!(ordinals, vec![3, 1, 2]);
    }

    #[test]
    fn empty_feed_renders_placeholder() {
        assert_eq!(render(&FeedOutcome::Empty), Grid::Placeholder);
    }

    #[test]
    fn fallback_renders_the_fallback_cards() {
        let fallback = fallback_descriptors();
        let Grid::Cards(cards) = render(&FeedOutcome::Fallback(fallback.clone())) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), fallback.len());
        assert_eq!(cards[0].title, fallback[0].title);
    }

    #[test]
    fn quotes_and_tags_are_escaped() {
        assert_eq!(
            escape_html(r#"<img src=x onerror="a('b')">"#),
            "&lt;img src=x onerror=&quot;a(&#39;b&#39;)&quot;&gt;"
        );
        assert_eq!(escape_html("R&D"), "R&amp;D");
    }

    #[test]
    fn body_markup_uses_escaped_text_and_keeps_raw_reference() {
        let mut d = descriptor(1, "\"Quoted\" <b>");
        d.raw_video_reference = "<iframe src=\"//player.bilibili.com/player.html?bvid=BV1\"></iframe>".into();
        let view = CardView::from_descriptor(&d);
        let markup = view.body_markup();
        assert!(markup.contains("&quot;Quoted&quot; &lt;b&gt;"));
        assert!(!markup.contains("<b>"));
        assert_eq!(view.raw_video_reference, d.raw_video_reference);
    }

    #[test]
    fn compact_dates_are_formatted() {
        assert_eq!(display_date("20240923"), "2024-09-23");
        assert_eq!(display_date("20241341"), "20241341");
        assert_eq!(display_date("2024年9月"), "2024年9月");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn tilt_is_flat_at_center() {
        let rect = Rect { left: 100.0, top: 50.0, width: 200.0, height: 100.0 };
        assert_eq!(
            tilt_transform(200.0, 100.0, rect, CARD_TILT),
            "translateY(-5px) rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn tilt_follows_pointer_offset() {
        let rect = Rect { left: 0.0, top: 0.0, width: 200.0, height: 200.0 };
        // 100px right of and 40px above centre
        assert_eq!(
            tilt_transform(200.0, 60.0, rect, CARD_TILT),
            "translateY(-5px) rotateX(2deg) rotateY(5deg)"
        );
        assert_eq!(
            tilt_transform(200.0, 60.0, rect, CARD_TILT),
            tilt_transform(200.0, 60.0, rect, CARD_TILT)
        );
    }
}
