use yew::prelude::*;

use crate::content::Brand;
use crate::scroll::navigator::{NavTarget, Section};
use crate::scroll::tracker::use_scrolled_past_threshold;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub on_navigate: Callback<NavTarget>,
}

fn nav_label(section: Section) -> &'static str {
    match section {
        Section::Portfolio => "I am",
        Section::Timeline => "I work",
        Section::Blueprint => "I can",
        Section::Contact => "CONNECT",
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, on_navigate } = props;
    let is_scrolled = use_scrolled_past_threshold();

    let go_to = |target: NavTarget| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target);
        })
    };
    let connect = NavTarget::Section(Section::Contact);

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(NavTarget::Top)}>
                    <span class="nav-logo-accent">{&brand.accent}</span>
                    {" "}
                    <span>{&brand.name}</span>
                </button>
                <div class="nav-right">
                    { for [Section::Portfolio, Section::Timeline, Section::Blueprint].into_iter().map(|section| html! {
                        <button class="nav-link" onclick={go_to(NavTarget::Section(section))}>
                            {nav_label(section)}
                        </button>
                    }) }
                    <button class="nav-connect" onclick={go_to(connect)}>
                        {nav_label(Section::Contact)}
                    </button>
                </div>
                <button class="nav-connect-mobile" onclick={go_to(connect)}>
                    {nav_label(Section::Contact)}
                </button>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 2.5rem 0;
                    transition: all 0.7s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(250, 250, 249, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    border-bottom: 1px solid rgba(228, 228, 231, 0.5);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-weight: 900;
                    font-size: 1.5rem;
                    letter-spacing: -0.05em;
                    color: #18181b;
                }

                .nav-logo-accent {
                    color: #d97706;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 11px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #a1a1aa;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #d97706;
                }

                .nav-connect,
                .nav-connect-mobile {
                    background: #18181b;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    font-size: 10px;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    padding: 0.75rem 2rem;
                    transition: all 0.3s ease;
                }

                .nav-connect:hover {
                    background: #d97706;
                    transform: scale(1.05);
                }

                .nav-connect-mobile {
                    display: none;
                    padding: 0.5rem 1.25rem;
                    font-size: 9px;
                }

                @media (max-width: 1024px) {
                    .nav-right {
                        display: none;
                    }

                    .nav-connect-mobile {
                        display: block;
                    }

                    .top-nav {
                        padding: 1.5rem 0;
                    }

                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
