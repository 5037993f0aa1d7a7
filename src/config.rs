
#[cfg(debug_assertions)]
pub fn get_feed_url() -> &'static str {
    "http://localhost:8000/data/games_video.json"  // Local start_server.py during development
}

#[cfg(not(debug_assertions))]
pub fn get_feed_url() -> &'static str {
    "data/games_video.json"  // Served next to index.html
}

/// localStorage key of the download counter.
pub const DOWNLOADS_KEY: &str = "gameflip_download_count";
pub const DEFAULT_DOWNLOADS: u64 = 1000;

pub const PLAYER_HOST: &str = "player.bilibili.com";
pub const PLAYER_PATH: &str = "/player.html";
pub const VIDEO_DOMAIN: &str = "bilibili.com";

/// Loading this into the iframe is what stops playback.
pub const BLANK_FRAME: &str = "about:blank";

/// Promo clip behind the hero play button.
pub const HERO_VIDEO: &str = "https://www.bilibili.com/video/BV1dhJXz6EBJ";
pub const HERO_VIDEO_TITLE: &str = "GameFlip 宣传片";

pub const TOAST_LIFETIME_MS: u32 = 4000;

/// The volume hint shows up this long after the player opens, and stays longer.
pub const MUTE_HINT_DELAY_MS: u32 = 2000;
pub const MUTE_HINT_LIFETIME_MS: u32 = 5000;

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
