use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub ordinal: i64,
    pub title: String,
    pub description: String,
    pub raw_video_reference: String,
    pub cover_image_url: String,
    pub publish_date: String,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(String),
    #[error("feed answered with HTTP {0}")]
    Status(u16),
    #[error("feed is not a JSON array of entries: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    Loaded(Vec<CardDescriptor>),
    /// The feed answered with zero usable entries. Not the same as a failure.
    Empty,
    Fallback(Vec<CardDescriptor>),
}

impl FeedOutcome {
    pub fn descriptors(&self) -> &[CardDescriptor] {
        match self {
            FeedOutcome::Loaded(d) | FeedOutcome::Fallback(d) => d,
            FeedOutcome::Empty => &[],
        }
    }
}

// Wire shape of one entry. Every field is optional so a single bad row
// cannot sink the whole feed.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    num: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    desc: Option<Value>,
    #[serde(default)]
    link: Option<Value>,
    #[serde(default)]
    cover: Option<Value>,
    #[serde(default)]
    date: Option<Value>,
}

fn as_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn as_ordinal(value: &Option<Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn placeholder_cover(ordinal: i64) -> String {
    format!("https://via.placeholder.com/400x250/8B5CF6/ffffff?text=Video+{}", ordinal)
}

impl RawEntry {
    fn into_descriptor(self) -> Option<CardDescriptor> {
        let ordinal = as_ordinal(&self.num)?;
        let title = as_text(&self.title).filter(|t| !t.is_empty())?;
        Some(CardDescriptor {
            ordinal,
            title,
            description: as_text(&self.desc).unwrap_or_default(),
            raw_video_reference: as_text(&self.link).unwrap_or_default(),
            cover_image_url: as_text(&self.cover)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| placeholder_cover(ordinal)),
            publish_date: as_text(&self.date).unwrap_or_default(),
        })
    }
}

/// Entries without `num` or `title` are dropped; the rest keep feed order.
pub fn parse_feed(body: &str) -> Result<Vec<CardDescriptor>, FeedError> {
    let entries: Vec<Value> = serde_json::from_str(body)?;
    let total = entries.len();
    let descriptors: Vec<CardDescriptor> = entries
        .into_iter()
        .filter_map(|v| serde_json::from_value::<RawEntry>(v).ok())
        .filter_map(RawEntry::into_descriptor)
        .collect();
    if descriptors.len() < total {
        warn!("Dropped {} malformed feed entries", total - descriptors.len());
    }
    Ok(descriptors)
}

pub fn fallback_descriptors() -> Vec<CardDescriptor> {
    vec![CardDescriptor {
        ordinal: 1,
        title: "游戏设计解构 · 示例".to_string(),
        description: "视频列表暂时无法加载，先看看这期示例内容吧。".to_string(),
        raw_video_reference: r#"<iframe src="//player.bilibili.com/player.html?isOutside=true&bvid=BV1J48CzUEbt&p=1" scrolling="no" border="0" frameborder="no" framespacing="0" allowfullscreen="true"></iframe>"#.to_string(),
        cover_image_url: placeholder_cover(1),
        publish_date: "20240923".to_string(),
    }]
}

pub fn settle(result: Result<Vec<CardDescriptor>, FeedError>) -> FeedOutcome {
    match result {
        Ok(descriptors) if descriptors.is_empty() => {
            info!("Feed is empty");
            FeedOutcome::Empty
        }
        Ok(descriptors) => {
            info!("Loaded {} feed entries", descriptors.len());
            FeedOutcome::Loaded(descriptors)
        }
        Err(e) => {
            warn!("{}, using fallback entries", e);
            FeedOutcome::Fallback(fallback_descriptors())
        }
    }
}

pub fn from_response(status: u16, body: &str) -> FeedOutcome {
    if !(200..300).contains(&status) {
        return settle(Err(FeedError::Status(status)));
    }
    settle(parse_feed(body))
}

/// One GET, no retry. Always resolves to something renderable.
pub async fn load_feed(url: &str) -> FeedOutcome {
    let response = match Request::get(url).send().await {
        Ok(response) => response,
        Err(e) => return settle(Err(FeedError::Transport(e.to_string()))),
    };
    let status = response.status();
    match response.text().await {
        Ok(body) => from_response(status, &body),
        Err(e) => settle(Err(FeedError::Transport(e.to_string()))),
    }
}
