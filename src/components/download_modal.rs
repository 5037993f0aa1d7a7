use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DownloadModalProps {
    pub open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Asks before a download counts. Close button, cancel and a backdrop click
/// all cancel.
#[function_component(DownloadModal)]
pub fn download_modal(props: &DownloadModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_cancel.emit(());
            }
        })
    };

    html! {
        <div class="download-modal" onclick={backdrop_click}>
            <div class="download-modal-content">
                <div class="download-modal-header">
                    <h3>{"下载 GameFlip"}</h3>
                    <button class="close-btn" onclick={cancel.clone()}>{"×"}</button>
                </div>
                <p>{"您即将下载 "}<strong>{"GameFlip"}</strong></p>
                <div class="download-buttons">
                    <button class="btn-primary download-confirm" onclick={confirm}>
                        <i class="fas fa-download"></i>
                        {" 开始下载"}
                    </button>
                    <button class="btn-secondary cancel-download" onclick={cancel}>{"取消"}</button>
                </div>
            </div>
            <style>
                {r#"
                    .download-modal {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 9500;
                    }
                    .download-modal-content {
                        background: #16213e;
                        color: #fff;
                        border-radius: 15px;
                        padding: 2rem;
                        max-width: 500px;
                        width: 90%;
                        border: 1px solid rgba(22, 217, 227, 0.2);
                    }
                    .download-modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .download-buttons {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin-top: 2rem;
                    }
                "#}
            </style>
        </div>
    }
}
