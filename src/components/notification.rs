use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "info-circle",
            ToastKind::Success => "check-circle",
            ToastKind::Warning => "exclamation-triangle",
            ToastKind::Error => "times-circle",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ToastKind::Info => "#3498db",
            ToastKind::Success => "#2ecc71",
            ToastKind::Warning => "#f39c12",
            ToastKind::Error => "#e74c3c",
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Unknown ids are ignored; a toast closed by hand may still have its timer pending.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={id} class={classes!("notification", toast.kind.class())}
                        style={format!("border-left: 4px solid {};", toast.kind.color())}>
                        <div class="notification-content">
                            <i class={format!("fas fa-{}", toast.kind.icon())}></i>
                            <span>{&toast.message}</span>
                        </div>
                        <button class="notification-close" onclick={on_close}>{"×"}</button>
                    </div>
                }
            }) }
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        top: 80px;
                        right: 20px;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        z-index: 10000;
                    }
                    @keyframes toastSlideIn {
                        from { transform: translateX(400px); }
                        to { transform: translateX(0); }
                    }
                    .notification {
                        background: rgba(0, 0, 0, 0.9);
                        color: white;
                        padding: 15px 20px;
                        border-radius: 8px;
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
                        max-width: 350px;
                        display: flex;
                        align-items: center;
                        animation: toastSlideIn 0.3s ease;
                    }
                    .notification-content {
                        display: flex;
                        align-items: center;
                        gap: 10px;
                    }
                    .notification-close {
                        background: none;
                        border: none;
                        color: white;
                        cursor: pointer;
                        font-size: 1.2rem;
                        margin-left: 10px;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_keep_increasing_after_dismissal() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastKind::Info, "a");
        assert!(toasts.dismiss(a));
        let b = toasts.push(ToastKind::Error, "b");
        assert!(b > a);
        assert_eq!(toasts.items().len(), 1);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut toasts = Toasts::default();
        let id = toasts.push(ToastKind::Success, "done");
        toasts.push(ToastKind::Warning, "careful");
        assert!(toasts.dismiss(id));
        assert!(!toasts.dismiss(id));
        assert_eq!(toasts.items()[0].message, "careful");
    }

    #[test]
    fn kinds_map_to_icons_and_colors() {
        assert_eq!(ToastKind::Warning.icon(), "exclamation-triangle");
        assert_eq!(ToastKind::Error.color(), "#e74c3c");
    }
}
