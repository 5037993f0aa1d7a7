use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent, ScrollBehavior, ScrollToOptions};

use crate::Route;
use crate::config;
use crate::feed;
use crate::components::card_grid::CardGrid;
use crate::components::download_modal::DownloadModal;
use crate::components::nav::Nav;
use crate::components::notification::ToastStack;
use crate::components::video_modal::VideoModal;
use crate::state::{claims_key, AppState, Command, Event};
use crate::storage::{read_downloads, write_downloads, BrowserStorage};

type KeyListener = Closure<dyn Fn(KeyboardEvent)>;
type ScrollListener = Closure<dyn Fn()>;

fn listen_keydown(handler: impl Fn(KeyboardEvent) + 'static) -> Option<KeyListener> {
    let document = window()?.document()?;
    let listener = Closure::<dyn Fn(KeyboardEvent)>::new(handler);
    document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}

fn unlisten_keydown(listener: KeyListener) {
    if let Some(document) = window().and_then(|w| w.document()) {
        let _ = document.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
    }
}

fn listen_scroll(handler: impl Fn() + 'static) -> Option<ScrollListener> {
    let listener = Closure::<dyn Fn()>::new(handler);
    window()?
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}

fn unlisten_scroll(listener: ScrollListener) {
    if let Some(window) = window() {
        let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
}

fn scroll_to_top() {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn set_body_overflow(value: Option<&str>) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let _ = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

fn targets_body(e: &KeyboardEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map_or(false, |el| el.tag_name().eq_ignore_ascii_case("body"))
}

/// The single-page shell: nav, the three sections, the video modal and toasts.
pub struct Home {
    state: AppState,
    store: BrowserStorage,
    page_keys: Option<KeyListener>,
    modal_keys: Option<KeyListener>,
    page_scroll: Option<ScrollListener>,
}

impl Home {
    fn run(&mut self, ctx: &Context<Self>, command: Command) {
        match command {
            Command::SetTitle(title) => set_document_title(title),
            Command::LockScroll => set_body_overflow(Some("hidden")),
            Command::UnlockScroll => set_body_overflow(None),
            Command::BindEscape => {
                if self.modal_keys.is_none() {
                    let link = ctx.link().clone();
                    self.modal_keys = listen_keydown(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            e.prevent_default();
                            link.send_message(Event::ModalKey(e.key()));
                        }
                    });
                }
            }
            Command::UnbindEscape => {
                if let Some(listener) = self.modal_keys.take() {
                    unlisten_keydown(listener);
                }
            }
            Command::OpenExternal(url) => {
                info!("No embeddable player for {}, opening it directly", url);
                if let Some(window) = window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
            Command::PersistDownloads(count) => write_downloads(&mut self.store, count),
            Command::ScheduleDismiss { id, after_ms } => {
                let link = ctx.link().clone();
                let timeout = Timeout::new(after_ms, move || {
                    link.send_message(Event::DismissToast(id));
                });
                timeout.forget();
            }
            Command::ScrollToTop => scroll_to_top(),
            Command::Defer { after_ms, event } => {
                let link = ctx.link().clone();
                Timeout::new(after_ms, move || link.send_message(event)).forget();
            }
        }
    }

    fn section_class(&self, id: &str) -> Classes {
        classes!("content-section", self.state.view.is_active(id).then(|| "active"))
    }
}

impl Component for Home {
    type Message = Event;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            Event::FeedSettled(feed::load_feed(config::get_feed_url()).await)
        });

        let store = BrowserStorage;
        let downloads = read_downloads(&store);
        Self {
            state: AppState::new(downloads),
            store,
            page_keys: None,
            modal_keys: None,
            page_scroll: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, event: Self::Message) -> bool {
        // Scroll events only matter when they flip the button.
        let scrolled = matches!(event, Event::Scrolled(_));
        let back_to_top = self.state.back_to_top;
        for command in self.state.dispatch(event) {
            self.run(ctx, command);
        }
        !scrolled || back_to_top != self.state.back_to_top
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(section) = self.state.view.active() {
            set_document_title(section.display_title);
        }
        let link = ctx.link().clone();
        self.page_keys = listen_keydown(move |e: KeyboardEvent| {
            let key = e.key();
            let ctrl = e.ctrl_key();
            let on_body = targets_body(&e);
            if claims_key(&key, ctrl, on_body) {
                e.prevent_default();
                link.send_message(Event::Key { key, ctrl, on_body });
            }
        });

        let link = ctx.link().clone();
        self.page_scroll = listen_scroll(move || {
            let offset = window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
            link.send_message(Event::Scrolled(offset));
        });
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.page_keys.take() {
            unlisten_keydown(listener);
        }
        if let Some(listener) = self.modal_keys.take() {
            unlisten_keydown(listener);
        }
        if let Some(listener) = self.page_scroll.take() {
            unlisten_scroll(listener);
        }
        if self.state.modal.is_open() {
            set_body_overflow(None);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;
        let session_title = state
            .modal
            .session()
            .map(|s| s.title.clone())
            .unwrap_or_default();

        html! {
            <div class={classes!("gameflip", state.animations_paused.then(|| "animations-paused"))}>
                <Nav
                    active={state.view.active().map(|s| s.id)}
                    menu_open={state.menu_open}
                    on_select={link.callback(Event::Navigate)}
                    on_toggle_menu={link.callback(|_| Event::ToggleMenu)}
                />
                <main class="main-content">
                    <section id="home" class={self.section_class("home")}>
                        <div class="hero">
                            <h1 class="hero-title">{"GameFlip"}</h1>
                            <p class="hero-subtitle">{"发现好游戏，读懂好设计"}</p>
                            <button class="video-play-button" onclick={link.callback(|_| Event::OpenHero)}>
                                <i class="fas fa-play"></i>
                            </button>
                            <div class="hero-cta-group">
                                <button class="download-btn-large" onclick={link.callback(|_| Event::Download)}>
                                    <i class="fas fa-download"></i>
                                    {" 立即下载"}
                                </button>
                                <span class="download-count">{format!("已有 {} 次下载", state.downloads)}</span>
                            </div>
                        </div>
                    </section>

                    <section id="analyzer" class={self.section_class("analyzer")}>
                        <div class="section-header">
                            <h2>{"GMTK 解构师"}</h2>
                            <p>{"拆解游戏机制，看懂设计背后的思考"}</p>
                        </div>
                        <CardGrid key={state.feed_generation} grid={state.grid.clone()} on_open={link.callback(Event::OpenCard)} />
                    </section>

                    <section id="about" class={self.section_class("about")}>
                        <div class="section-header">
                            <h2>{"关于我们"}</h2>
                            <p>{"GameFlip 是一群热爱游戏的人做的游戏推荐与设计分析站。"}</p>
                        </div>
                        <div class="about-cta">
                            <Link<Route> to={Route::Subscribe} classes="btn-primary">
                                {"了解会员计划"}
                            </Link<Route>>
                        </div>
                    </section>
                </main>

                <VideoModal
                    open={state.modal.is_open()}
                    src={state.modal.frame_src().to_string()}
                    title={session_title}
                    on_close={link.callback(|_| Event::CloseModal)}
                />
                <DownloadModal
                    open={state.download_prompt}
                    on_confirm={link.callback(|_| Event::ConfirmDownload)}
                    on_cancel={link.callback(|_| Event::CancelDownload)}
                />
                <button
                    class={classes!("back-to-top", state.back_to_top.then(|| "show"))}
                    onclick={link.callback(|_| Event::BackToTop)}
                >
                    <i class="fas fa-arrow-up"></i>
                </button>
                <ToastStack
                    toasts={state.toasts.items().to_vec()}
                    on_dismiss={link.callback(Event::DismissToast)}
                />

                <style>
                    {r#"
                    .content-section {
                        display: none;
                        padding: 100px 2rem 4rem;
                        min-height: 100vh;
                    }
                    .content-section.active {
                        display: block;
                    }
                    .animations-paused * {
                        animation-play-state: paused !important;
                    }
                    .games-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .game-card {
                        background: rgba(26, 26, 46, 0.85);
                        border-radius: 12px;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .card-image {
                        position: relative;
                    }
                    .card-image img {
                        width: 100%;
                        aspect-ratio: 16 / 10;
                        object-fit: cover;
                        display: block;
                    }
                    .card-content {
                        padding: 1rem 1.25rem;
                        color: #fff;
                    }
                    .card-description {
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .card-date, .card-number {
                        font-size: 0.85rem;
                        color: #4ecdc4;
                    }
                    .back-to-top {
                        position: fixed;
                        bottom: 30px;
                        right: 30px;
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        border: none;
                        background: #8b5cf6;
                        color: #fff;
                        cursor: pointer;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease;
                        z-index: 1000;
                    }
                    .back-to-top.show {
                        opacity: 1;
                        visibility: visible;
                    }
                    .grid-status {
                        text-align: center;
                        color: #999;
                        padding: 4rem 0;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
