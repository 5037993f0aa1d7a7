//! Page state and the single place where events change it.
//!
//! `AppState::dispatch` never touches the DOM. It returns the side effects
//! the shell has to carry out, in order.

use crate::cards::{self, CardView, Grid};
use crate::components::notification::{ToastKind, Toasts};
use crate::config::{
    BACK_TO_TOP_OFFSET, HERO_VIDEO, HERO_VIDEO_TITLE, MUTE_HINT_DELAY_MS, MUTE_HINT_LIFETIME_MS,
    TOAST_LIFETIME_MS,
};
use crate::embed;
use crate::feed::FeedOutcome;
use crate::registry;
use crate::session::VideoModal;
use crate::switcher::ViewSwitcher;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(String),
    /// A keydown seen by the page-wide listener.
    Key { key: String, ctrl: bool, on_body: bool },
    /// A keydown seen by the modal's own listener.
    ModalKey(String),
    FeedSettled(FeedOutcome),
    OpenCard(CardView),
    OpenHero,
    CloseModal,
    /// The download button; asks for confirmation first.
    Download,
    ConfirmDownload,
    CancelDownload,
    ToggleMenu,
    DismissToast(u32),
    /// Vertical page offset after a scroll.
    Scrolled(f64),
    BackToTop,
    MuteHint,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetTitle(&'static str),
    LockScroll,
    UnlockScroll,
    BindEscape,
    UnbindEscape,
    OpenExternal(String),
    PersistDownloads(u64),
    ScheduleDismiss { id: u32, after_ms: u32 },
    ScrollToTop,
    /// Feed `event` back into `dispatch` after `after_ms`.
    Defer { after_ms: u32, event: Event },
}

/// Keys the page-wide listener handles itself. The browser default is
/// suppressed for exactly these, before the event is dispatched.
pub fn claims_key(key: &str, ctrl: bool, on_body: bool) -> bool {
    if ctrl {
        registry::shortcut_target(key).is_some()
    } else {
        key == " " && on_body
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: ViewSwitcher,
    pub modal: VideoModal,
    pub grid: Grid,
    pub downloads: u64,
    pub animations_paused: bool,
    pub menu_open: bool,
    pub toasts: Toasts,
    pub download_prompt: bool,
    pub back_to_top: bool,
    /// Bumped on every settled feed so the grid is rebuilt from scratch.
    pub feed_generation: u32,
}

impl AppState {
    pub fn new(downloads: u64) -> Self {
        Self {
            view: ViewSwitcher::default(),
            modal: VideoModal::default(),
            grid: Grid::Loading,
            downloads,
            animations_paused: false,
            menu_open: false,
            toasts: Toasts::default(),
            download_prompt: false,
            back_to_top: false,
            feed_generation: 0,
        }
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Navigate(id) => {
                self.menu_open = false;
                self.navigate(&id)
            }
            Event::Key { key, ctrl, on_body } => self.on_key(&key, ctrl, on_body),
            Event::ModalKey(key) => {
                let commands = self.modal.on_key(&key);
                if !commands.is_empty() {
                    return self.with_toast(commands, ToastKind::Info, "视频播放器已关闭");
                }
                commands
            }
            Event::FeedSettled(outcome) => {
                self.grid = cards::render(&outcome);
                self.feed_generation = self.feed_generation.wrapping_add(1);
                if matches!(outcome, FeedOutcome::Fallback(_)) {
                    return self.with_toast(Vec::new(), ToastKind::Warning, "视频列表加载失败，已显示示例内容");
                }
                Vec::new()
            }
            Event::OpenCard(card) => self.open_video(&card.raw_video_reference, &card.title),
            Event::OpenHero => self.open_video(HERO_VIDEO, HERO_VIDEO_TITLE),
            Event::CloseModal => {
                let commands = self.modal.close();
                if commands.is_empty() {
                    return commands;
                }
                self.with_toast(commands, ToastKind::Info, "视频播放器已关闭")
            }
            Event::Download => {
                self.download_prompt = true;
                Vec::new()
            }
            Event::ConfirmDownload => {
                if !std::mem::take(&mut self.download_prompt) {
                    return Vec::new();
                }
                self.downloads = self.downloads.saturating_add(1);
                let commands = vec![Command::PersistDownloads(self.downloads)];
                self.with_toast(commands, ToastKind::Success, "GameFlip 开始下载！")
            }
            Event::CancelDownload => {
                self.download_prompt = false;
                Vec::new()
            }
            Event::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Vec::new()
            }
            Event::DismissToast(id) => {
                self.toasts.dismiss(id);
                Vec::new()
            }
            Event::Scrolled(offset) => {
                self.back_to_top = offset > BACK_TO_TOP_OFFSET;
                Vec::new()
            }
            Event::BackToTop => vec![Command::ScrollToTop],
            Event::MuteHint => {
                if !self.modal.is_open() {
                    return Vec::new();
                }
                self.push_toast(
                    Vec::new(),
                    ToastKind::Warning,
                    "如果视频静音，请点击播放器右下角音量按钮开启声音",
                    MUTE_HINT_LIFETIME_MS,
                )
            }
        }
    }

    fn navigate(&mut self, id: &str) -> Vec<Command> {
        match self.view.activate(id) {
            Some(title) => vec![Command::SetTitle(title)],
            None => Vec::new(),
        }
    }

    fn on_key(&mut self, key: &str, ctrl: bool, on_body: bool) -> Vec<Command> {
        if ctrl {
            return match registry::shortcut_target(key) {
                Some(id) => self.navigate(id),
                None => Vec::new(),
            };
        }
        if key == " " && on_body {
            self.animations_paused = !self.animations_paused;
            let message = if self.animations_paused { "动画已暂停" } else { "动画已恢复" };
            return self.with_toast(Vec::new(), ToastKind::Info, message);
        }
        Vec::new()
    }

    fn open_video(&mut self, raw: &str, title: &str) -> Vec<Command> {
        if raw.trim().is_empty() {
            return self.with_toast(Vec::new(), ToastKind::Error, "该视频暂无播放链接");
        }
        match embed::translate(raw) {
            Some(url) => {
                let mut commands = self.modal.open(url, title.to_string());
                commands.push(Command::Defer {
                    after_ms: MUTE_HINT_DELAY_MS,
                    event: Event::MuteHint,
                });
                self.with_toast(commands, ToastKind::Info, "B站视频播放器已打开")
            }
            None => vec![Command::OpenExternal(raw.trim().to_string())],
        }
    }

    fn with_toast(&mut self, commands: Vec<Command>, kind: ToastKind, message: &str) -> Vec<Command> {
        self.push_toast(commands, kind, message, TOAST_LIFETIME_MS)
    }

    fn push_toast(
        &mut self,
        mut commands: Vec<Command>,
        kind: ToastKind,
        message: &str,
        after_ms: u32,
    ) -> Vec<Command> {
        let id = self.toasts.push(kind, message);
        commands.push(Command::ScheduleDismiss { id, after_ms });
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BLANK_FRAME;
    use crate::feed::{fallback_descriptors, CardDescriptor};
    use crate::storage::{read_downloads, write_downloads, MemoryStore};

    fn card(reference: &str) -> CardView {
        CardView::from_descriptor(&CardDescriptor {
            ordinal: 1,
            title: "demo".into(),
            description: String::new(),
            raw_video_reference: reference.into(),
            cover_image_url: String::new(),
            publish_date: String::new(),
        })
    }

    fn key(key: &str, ctrl: bool) -> Event {
        Event::Key { key: key.into(), ctrl, on_body: true }
    }

    #[test]
    fn navigation_sets_title_and_closes_menu() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::ToggleMenu);
        let commands = state.dispatch(Event::Navigate("about".into()));
        assert_eq!(commands, vec![Command::SetTitle("GameFlip - 关于我们")]);
        assert!(state.view.is_active("about"));
        assert!(!state.menu_open);
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::Navigate("analyzer".into()));
        assert!(state.dispatch(Event::Navigate("shop".into())).is_empty());
        assert!(state.view.is_active("analyzer"));
    }

    #[test]
    fn ctrl_digits_switch_sections() {
        let mut state = AppState::new(1000);
        let commands = state.dispatch(key("2", true));
        assert_eq!(commands, vec![Command::SetTitle("GameFlip - 解构师")]);
        assert!(state.view.is_active("analyzer"));
        assert!(state.dispatch(key("9", true)).is_empty());
        assert!(state.dispatch(key("1", false)).is_empty());
        assert!(state.view.is_active("analyzer"));
    }

    #[test]
    fn only_shortcuts_and_body_space_are_claimed() {
        assert!(claims_key("3", true, false));
        assert!(!claims_key("k", true, true));
        assert!(claims_key(" ", false, true));
        assert!(!claims_key(" ", false, false));
        assert!(!claims_key("Escape", false, true));
    }

    #[test]
    fn space_on_body_toggles_animations() {
        let mut state = AppState::new(1000);
        state.dispatch(key(" ", false));
        assert!(state.animations_paused);
        state.dispatch(key(" ", false));
        assert!(!state.animations_paused);
        let typed = state.dispatch(Event::Key { key: " ".into(), ctrl: false, on_body: false });
        assert!(typed.is_empty());
    }

    #[test]
    fn feed_failure_renders_fallback_cards() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::FeedSettled(crate::feed::from_response(500, "")));
        let Grid::Cards(cards) = &state.grid else { panic!("expected cards") };
        assert_eq!(cards.len(), fallback_descriptors().len());
        assert_eq!(state.toasts.items()[0].kind, ToastKind::Warning);
    }

    #[test]
    fn empty_feed_renders_placeholder() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::FeedSettled(FeedOutcome::Empty));
        assert_eq!(state.grid, Grid::Placeholder);
    }

    #[test]
    fn playable_card_opens_modal() {
        let mut state = AppState::new(1000);
        let commands = state.dispatch(Event::OpenCard(card("https://www.bilibili.com/video/av12345")));
        assert_eq!(&commands[..2], &[Command::LockScroll, Command::BindEscape]);
        assert!(commands.contains(&Command::Defer { after_ms: 2000, event: Event::MuteHint }));
        assert!(matches!(commands.last(), Some(Command::ScheduleDismiss { after_ms: 4000, .. })));
        assert!(state.modal.frame_src().contains("aid=12345"));
    }

    #[test]
    fn untranslatable_card_opens_raw_link() {
        let mut state = AppState::new(1000);
        let commands = state.dispatch(Event::OpenCard(card("https://example.com/not-a-video")));
        assert_eq!(commands, vec![Command::OpenExternal("https://example.com/not-a-video".into())]);
        assert!(!state.modal.is_open());
    }

    #[test]
    fn card_without_link_raises_error_toast() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::OpenCard(card("")));
        assert!(!state.modal.is_open());
        assert_eq!(state.toasts.items()[0].kind, ToastKind::Error);
    }

    #[test]
    fn escape_closes_modal_other_keys_do_not() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::OpenHero);
        assert!(state.modal.is_open());
        assert!(state.dispatch(Event::ModalKey("Enter".into())).is_empty());
        let commands = state.dispatch(Event::ModalKey("Escape".into()));
        assert!(commands.contains(&Command::UnbindEscape));
        assert_eq!(state.modal.frame_src(), BLANK_FRAME);
    }

    #[test]
    fn open_then_close_leaves_blank_hidden_modal() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::OpenCard(card("https://www.bilibili.com/video/BV1xx411c7mD")));
        let commands = state.dispatch(Event::CloseModal);
        assert!(commands.contains(&Command::UnlockScroll));
        assert!(!state.modal.is_open());
        assert_eq!(state.modal.frame_src(), BLANK_FRAME);
        assert!(state.dispatch(Event::CloseModal).is_empty());
    }

    #[test]
    fn two_downloads_from_empty_store_persist_1002() {
        let mut store = MemoryStore::default();
        let mut state = AppState::new(read_downloads(&store));
        for _ in 0..2 {
            assert!(state.dispatch(Event::Download).is_empty());
            for command in state.dispatch(Event::ConfirmDownload) {
                if let Command::PersistDownloads(count) = command {
                    write_downloads(&mut store, count);
                }
            }
        }
        assert_eq!(read_downloads(&store), 1002);
        assert_eq!(state.downloads, 1002);
    }

    #[test]
    fn toast_timer_dismisses_its_toast() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::Download);
        let commands = state.dispatch(Event::ConfirmDownload);
        let Some(Command::ScheduleDismiss { id, .. }) = commands.last().cloned() else {
            panic!("expected a dismissal");
        };
        state.dispatch(Event::DismissToast(id));
        assert!(state.toasts.items().is_empty());
    }

    #[test]
    fn download_waits_for_confirmation() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::Download);
        assert!(state.download_prompt);
        assert_eq!(state.downloads, 1000);
        assert!(state.toasts.items().is_empty());

        let commands = state.dispatch(Event::ConfirmDownload);
        assert_eq!(commands[0], Command::PersistDownloads(1001));
        assert!(!state.download_prompt);
        assert_eq!(state.toasts.items()[0].kind, ToastKind::Success);
    }

    #[test]
    fn cancelled_download_changes_nothing() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::Download);
        assert!(state.dispatch(Event::CancelDownload).is_empty());
        assert!(!state.download_prompt);
        assert!(state.dispatch(Event::ConfirmDownload).is_empty());
        assert_eq!(state.downloads, 1000);
        assert!(state.toasts.items().is_empty());
    }

    #[test]
    fn counter_saturates_instead_of_overflowing() {
        let mut state = AppState::new(u64::MAX);
        state.dispatch(Event::Download);
        let commands = state.dispatch(Event::ConfirmDownload);
        assert_eq!(commands[0], Command::PersistDownloads(u64::MAX));
        assert_eq!(state.downloads, u64::MAX);
    }

    #[test]
    fn back_to_top_shows_past_300px() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::Scrolled(300.0));
        assert!(!state.back_to_top);
        state.dispatch(Event::Scrolled(301.0));
        assert!(state.back_to_top);
        assert_eq!(state.dispatch(Event::BackToTop), vec![Command::ScrollToTop]);
        state.dispatch(Event::Scrolled(0.0));
        assert!(!state.back_to_top);
    }

    #[test]
    fn mute_hint_is_a_long_lived_warning_while_playing() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::OpenHero);
        let commands = state.dispatch(Event::MuteHint);
        assert!(matches!(commands.as_slice(), [Command::ScheduleDismiss { after_ms: 5000, .. }]));
        let hint = state.toasts.items().last().unwrap();
        assert_eq!(hint.kind, ToastKind::Warning);
    }

    #[test]
    fn mute_hint_is_dropped_once_the_player_closed() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::OpenHero);
        state.dispatch(Event::CloseModal);
        let before = state.toasts.items().len();
        assert!(state.dispatch(Event::MuteHint).is_empty());
        assert_eq!(state.toasts.items().len(), before);
    }

    #[test]
    fn every_settled_feed_starts_a_new_grid_generation() {
        let mut state = AppState::new(1000);
        state.dispatch(Event::FeedSettled(FeedOutcome::Empty));
        let first = state.feed_generation;
        state.dispatch(Event::FeedSettled(FeedOutcome::Empty));
        assert_ne!(state.feed_generation, first);
    }
}
