use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::registry::SECTIONS;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Option<&'static str>,
    pub menu_open: bool,
    pub on_select: Callback<String>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    let scroll_y = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 100.0);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let menu_class = if props.menu_open {
        "nav-menu active"
    } else {
        "nav-menu"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="/">{"GameFlip"}</a>

                <button class={classes!("hamburger", props.menu_open.then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|section| {
                        let select = {
                            let on_select = props.on_select.clone();
                            let id = section.id;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_select.emit(id.to_string());
                            })
                        };
                        let is_active = props.active == Some(section.id);
                        html! {
                            <a href={format!("#{}", section.id)}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                data-section={section.id}
                                onclick={select}>
                                {section.nav_label}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}
