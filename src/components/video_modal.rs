use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub src: String,
    pub title: String,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only a click on the dimmed backdrop itself closes.
    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class={classes!("video-modal", props.open.then(|| "show"))} onclick={backdrop_click}>
            <div class="video-modal-content">
                <div class="video-modal-header">
                    <h3>{&props.title}</h3>
                    <button class="close-btn" onclick={close}>{"×"}</button>
                </div>
                <iframe
                    class="video-frame"
                    src={props.src.clone()}
                    allow="autoplay; fullscreen; encrypted-media"
                    allowfullscreen=true
                    scrolling="no"
                    frameborder="0"
                ></iframe>
            </div>
            <style>
                {r#"
                    .video-modal {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.85);
                        display: none;
                        align-items: center;
                        justify-content: center;
                        z-index: 9000;
                    }
                    .video-modal.show {
                        display: flex;
                    }
                    .video-modal-content {
                        width: min(960px, 92vw);
                        background: linear-gradient(135deg, #1a1a2e, #16213e);
                        border-radius: 12px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                    }
                    .video-modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 12px 20px;
                        color: #fff;
                    }
                    .video-frame {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        border: none;
                        display: block;
                    }
                    .close-btn {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
        </div>
    }
}
