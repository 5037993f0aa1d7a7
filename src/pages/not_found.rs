use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"这个页面不存在。"}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"回到首页"}
            </Link<Route>>
        </div>
    }
}
