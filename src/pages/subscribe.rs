use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    premium: bool,
    perks: &'static [&'static str],
}

const PLANS: &[Plan] = &[
    Plan {
        name: "基础会员",
        price: "¥29",
        premium: false,
        perks: &["访问所有基础内容", "每月最新解构分析", "社区讨论权限", "游戏推荐算法"],
    },
    Plan {
        name: "高级会员",
        price: "¥59",
        premium: true,
        perks: &["所有基础会员权限", "独家深度分析", "提前访问新内容", "一对一游戏咨询", "游戏开发者访谈"],
    },
];

#[function_component(Subscribe)]
pub fn subscribe() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="subscription-page">
            <div class="page-header">
                <Link<Route> to={Route::Home} classes="back-btn">
                    <i class="fas fa-arrow-left"></i>{" 返回"}
                </Link<Route>>
                <h1 class="page-title"><i class="fas fa-lock"></i>{" 会员计划"}</h1>
                <div class="page-subtitle">{"解锁GMTK解构师的全部内容，获取深度游戏分析和独家见解。"}</div>
            </div>

            <div class="plans-container">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("plan-card", plan.premium.then(|| "premium"))}>
                        if plan.premium {
                            <div class="popular-badge">{"最受欢迎"}</div>
                        }
                        <h3>{plan.name}</h3>
                        <div class="price">{plan.price}<span>{"/月"}</span></div>
                        <ul class="features-list">
                            { for plan.perks.iter().map(|perk| html! {
                                <li><i class="fas fa-check"></i>{*perk}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .subscription-page {
                    padding: 100px 2rem 4rem;
                    color: #fff;
                    max-width: 900px;
                    margin: 0 auto;
                }
                .plans-container {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .plan-card {
                    background: rgba(255, 255, 255, 0.05);
                    padding: 20px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    position: relative;
                }
                .plan-card.premium {
                    border-color: #ff6b6b;
                    background: rgba(255, 107, 107, 0.1);
                }
                .price {
                    font-size: 1.5rem;
                    font-weight: bold;
                    margin-bottom: 15px;
                }
                .features-list {
                    list-style: none;
                    padding: 0;
                }
                "#}
            </style>
        </div>
    }
}
