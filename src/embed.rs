//! Rewrites whatever the feed put in `link` into a bilibili player URL.
//!
//! Accepted input grammar:
//! - iframe markup: the `src="..."` (or single-quoted) attribute is used
//! - a video page link carrying `BV` followed by an alphanumeric run
//! - a video page link carrying `av` followed by a digit run
//! - a player link (`player.bilibili.com/player.html?...`)
//!
//! Protocol-relative references get `https:` prepended. When both id forms
//! are present the `BV` form wins.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::config::{PLAYER_HOST, PLAYER_PATH, VIDEO_DOMAIN};

/// Applied to every player URL, in this order.
pub const PLAYBACK_PARAMS: &[(&str, &str)] = &[
    ("autoplay", "1"),
    ("muted", "0"),
    ("high_quality", "1"),
    ("danmaku", "1"),
    ("as_wide", "1"),
    ("t", "0"),
    ("volume", "0.2"),
];

static IFRAME_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(?:^|\s)src\s*=\s*["']([^"']+)["']"#).expect("valid src pattern"));
static BV_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"BV[0-9A-Za-z]+").expect("valid BV pattern"));
static AV_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bav(\d+)").expect("valid av pattern"));

#[derive(Debug, Error, PartialEq)]
pub enum EmbedError {
    #[error("iframe markup without a src attribute")]
    MissingSource,
    #[error("not a URL: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("{0} is not a bilibili host")]
    ForeignHost(String),
    #[error("no BV or av id in the reference")]
    NoVideoId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum VideoId {
    Bv(String),
    Av(String),
}

impl VideoId {
    fn query_pair(&self) -> (&'static str, &str) {
        match self {
            VideoId::Bv(id) => ("bvid", id),
            VideoId::Av(id) => ("aid", id),
        }
    }
}

fn extract_iframe_src(markup: &str) -> Option<&str> {
    IFRAME_SRC
        .captures(markup)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

fn extract_video_id(text: &str) -> Option<VideoId> {
    if let Some(m) = BV_ID.find(text) {
        return Some(VideoId::Bv(m.as_str().to_string()));
    }
    AV_ID
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| VideoId::Av(m.as_str().to_string()))
}

fn is_video_host(host: &str) -> bool {
    host == VIDEO_DOMAIN || host.ends_with(&format!(".{}", VIDEO_DOMAIN))
}

fn is_player_url(url: &Url) -> bool {
    url.host_str() == Some(PLAYER_HOST) && url.path() == PLAYER_PATH
}

fn with_playback_params(mut url: Url) -> String {
    // http -> https keeps the URL special, so this cannot fail
    let _ = url.set_scheme("https");
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !PLAYBACK_PARAMS.iter().any(|(fixed, _)| fixed == k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(PLAYBACK_PARAMS.iter().copied());
    url.to_string()
}

fn player_url_for(id: &VideoId) -> String {
    let (key, value) = id.query_pair();
    let mut out = format!("https://{}{}?{}={}", PLAYER_HOST, PLAYER_PATH, key, value);
    for (k, v) in PLAYBACK_PARAMS {
        out.push('&');
        out.push_str(k);
        out.push('=');
        out.push_str(v);
    }
    out
}

pub fn try_translate(raw: &str) -> Result<String, EmbedError> {
    let raw = raw.trim();
    let reference = if raw.to_ascii_lowercase().contains("<iframe") {
        extract_iframe_src(raw).ok_or(EmbedError::MissingSource)?
    } else {
        raw
    };

    let reference = if reference.starts_with("//") {
        format!("https:{}", reference)
    } else {
        reference.to_string()
    };

    let url = Url::parse(&reference)?;
    let host = url.host_str().unwrap_or_default();
    if !is_video_host(host) {
        return Err(EmbedError::ForeignHost(host.to_string()));
    }

    if is_player_url(&url) {
        return Ok(with_playback_params(url));
    }

    extract_video_id(&reference)
        .map(|id| player_url_for(&id))
        .ok_or(EmbedError::NoVideoId)
}

/// `None` means the caller should open `raw` as a plain link instead.
pub fn translate(raw: &str) -> Option<String> {
    try_translate(raw)
        .map_err(|e| debug!("Cannot embed {:?}: {}", raw, e))
        .ok()
}
