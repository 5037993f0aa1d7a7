use crate::config::BLANK_FRAME;
use crate::state::Command;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub embed_url: String,
    pub title: String,
}

/// The single shared video modal. Opening while open replaces the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoModal {
    session: Option<PlaybackSession>,
}

impl VideoModal {
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// What the iframe should currently load. Blank whenever closed, which
    /// is what stops playback inside the embedded player.
    pub fn frame_src(&self) -> &str {
        self.session
            .as_ref()
            .map_or(BLANK_FRAME, |s| s.embed_url.as_str())
    }

    pub fn open(&mut self, embed_url: String, title: String) -> Vec<Command> {
        let was_open = self.is_open();
        self.session = Some(PlaybackSession { embed_url, title });
        if was_open {
            Vec::new()
        } else {
            vec![Command::LockScroll, Command::BindEscape]
        }
    }

    pub fn close(&mut self) -> Vec<Command> {
        if self.session.take().is_none() {
            return Vec::new();
        }
        vec![Command::UnlockScroll, Command::UnbindEscape]
    }

    /// Keys seen by the modal's own listener. Only Escape does anything.
    pub fn on_key(&mut self, key: &str) -> Vec<Command> {
        if key == "Escape" {
            self.close()
        } else {
            Vec::new()
        }
    }
}
