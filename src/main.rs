use log::{info, warn};
use stylist::css;
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod icons;
mod reveal;
mod components {
    pub mod contact_list;
    pub mod fallback_image;
    pub mod program_card;
    pub mod section_heading;
    pub mod stat_counter;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod programs;
    pub mod quote;
    pub mod stats;
}
mod pages {
    pub mod home;
}

use content::{SectionAnchor, BRAND_INITIAL, ORGANIZATION};
use pages::home::Home;

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let is_scrolled = is_scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                is_scrolled.set(scroll_y > f64::from(config::NAV_SCROLL_THRESHOLD));
                            }
                        }
                    }
                });
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                {
                    warn!("Could not watch scrolling for the nav bar: {:?}", err);
                }
                // Page may be restored mid-scroll
                if let Ok(scroll_y) = window.scroll_y() {
                    is_scrolled.set(scroll_y > f64::from(config::NAV_SCROLL_THRESHOLD));
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#" class="brand">
                    <div class="brand-mark">
                        <span class="serif">{BRAND_INITIAL}</span>
                    </div>
                    <span class="brand-name serif">{ORGANIZATION}</span>
                </a>
                <div class="nav-links">
                    <a href={SectionAnchor::About.href()} class="nav-link">{"About"}</a>
                    <a href={SectionAnchor::Programs.href()} class="nav-link">{"Programs"}</a>
                    <a href={SectionAnchor::Contact.href()} class="nav-donate">{"Donate"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let base = css!(
        r#"
        html {
            scroll-behavior: smooth;
        }
        body {
            margin: 0;
            min-height: 100vh;
            background: #022c22;
            color: #f5f5f4;
            font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        }
        ::selection {
            background: #10b981;
            color: #ffffff;
        }
        .serif {
            font-family: "Playfair Display", Georgia, serif;
        }
        .container {
            max-width: 80rem;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .reveal {
            will-change: opacity, transform;
        }
        .top-nav {
            position: fixed;
            top: 0;
            width: 100%;
            z-index: 50;
            background: rgba(2, 44, 34, 0.8);
            backdrop-filter: blur(12px);
            border-bottom: 1px solid transparent;
            transition: background 0.3s ease, border-color 0.3s ease;
        }
        .top-nav.scrolled {
            background: rgba(2, 44, 34, 0.95);
            border-bottom-color: rgba(6, 78, 59, 0.5);
        }
        .nav-content {
            height: 5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .brand {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            color: inherit;
            text-decoration: none;
        }
        .brand-mark {
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 0.5rem;
            background: #10b981;
            color: #ffffff;
            font-weight: 700;
            font-size: 1.25rem;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .brand-name {
            display: none;
            font-weight: 700;
            font-size: 1.125rem;
            letter-spacing: -0.025em;
        }
        @media (min-width: 640px) {
            .brand-name {
                display: block;
            }
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        .nav-link {
            color: #d6d3d1;
            font-size: 0.875rem;
            font-weight: 500;
            text-decoration: none;
            transition: color 0.2s ease;
        }
        .nav-link:hover {
            color: #34d399;
        }
        .nav-donate, .button-primary {
            background: #059669;
            color: #ffffff;
            border-radius: 9999px;
            font-weight: 600;
            text-decoration: none;
            transition: background 0.2s ease;
        }
        .nav-donate {
            padding: 0.5rem 1.25rem;
            font-size: 0.875rem;
        }
        .nav-donate:hover, .button-primary:hover {
            background: #10b981;
        }
        .button-primary, .button-outline {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 1rem 2rem;
            font-weight: 700;
        }
        .button-outline {
            border: 1px solid #065f46;
            border-radius: 9999px;
            color: #ffffff;
            text-decoration: none;
            transition: background 0.2s ease;
        }
        .button-outline:hover {
            background: rgba(6, 78, 59, 0.5);
        }
        .section-heading {
            margin-bottom: 3rem;
            text-align: center;
        }
        .section-subtitle {
            display: block;
            color: #34d399;
            font-weight: 500;
            letter-spacing: 0.1em;
            text-transform: uppercase;
            font-size: 0.75rem;
            margin-bottom: 0.5rem;
        }
        .section-title {
            font-size: clamp(2.25rem, 4vw, 3rem);
            font-weight: 700;
            color: #f5f5f4;
            margin: 0;
        }
        .section-rule {
            width: 5rem;
            height: 0.25rem;
            background: #10b981;
            margin: 1.5rem auto 0;
            border-radius: 9999px;
        }
        "#
    );

    html! {
        <>
            <Global css={base} />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    for problem in content::validate() {
        warn!("Content problem: {}", problem);
    }

    info!("Starting {} site", ORGANIZATION);
    yew::Renderer::<App>::new().render();
}
