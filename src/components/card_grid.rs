use yew::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::cards::{tilt_transform, CardView, Grid, Rect, CARD_TILT};
use crate::feed::placeholder_cover;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub card: CardView,
    pub on_open: Callback<CardView>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let card_ref = use_node_ref();
    let body_ref = use_node_ref();

    // Title, description and date arrive escaped, so they go in as markup.
    {
        let body_ref = body_ref.clone();
        use_effect_with_deps(
            move |markup: &String| {
                if let Some(body) = body_ref.cast::<Element>() {
                    body.set_inner_html(markup);
                }
                || ()
            },
            props.card.body_markup(),
        );
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let bounds = card.get_bounding_client_rect();
                let rect = Rect {
                    left: bounds.left(),
                    top: bounds.top(),
                    width: bounds.width(),
                    height: bounds.height(),
                };
                let transform = tilt_transform(e.client_x() as f64, e.client_y() as f64, rect, CARD_TILT);
                let _ = card.style().set_property("transform", &transform);
            }
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let _ = card.style().remove_property("transform");
            }
        })
    };

    let onclick = {
        let on_open = props.on_open.clone();
        let card = props.card.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(card.clone()))
    };

    // Broken covers fall back to the generated placeholder, once.
    let onerror = {
        let fallback = placeholder_cover(props.card.ordinal);
        Callback::from(move |e: Event| {
            let img: Element = e.target_unchecked_into();
            if img.get_attribute("src").as_deref() != Some(fallback.as_str()) {
                let _ = img.set_attribute("src", &fallback);
            }
        })
    };

    html! {
        <div class="game-card" ref={card_ref} onclick={onclick} onmousemove={onmousemove} onmouseleave={onmouseleave}>
            <div class="card-image">
                <img src={props.card.cover_image_url.clone()} alt={props.card.title.clone()} loading="lazy" onerror={onerror} />
                <div class="play-overlay"><i class="fas fa-play"></i></div>
            </div>
            <div class="card-content" ref={body_ref}></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub grid: Grid,
    pub on_open: Callback<CardView>,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    match &props.grid {
        Grid::Loading => html! {
            <div class="grid-status">{"正在加载视频列表..."}</div>
        },
        Grid::Placeholder => html! {
            <div class="grid-status empty">
                <i class="fas fa-film"></i>
                <p>{"暂无内容，敬请期待"}</p>
            </div>
        },
        Grid::Cards(cards) => html! {
            <div class="games-grid">
                { for cards.iter().enumerate().map(|(i, card)| html! {
                    <VideoCard key={i} card={card.clone()} on_open={props.on_open.clone()} />
                }) }
            </div>
        },
    }
}
