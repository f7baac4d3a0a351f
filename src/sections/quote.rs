use yew::prelude::*;

use crate::content::scripture;
use crate::icons::{Icon, IconView};

#[function_component(ScriptureQuote)]
pub fn scripture_quote() -> Html {
    html! {
        <section class="scripture">
            <div class="scripture-body">
                <IconView icon={Icon::Quote} class="scripture-mark" />
                <p class="scripture-text serif">{scripture::QUOTE}</p>
                <span class="scripture-citation">{scripture::CITATION}</span>
            </div>
            <style>
                {r#"
                .scripture {
                    padding: 3rem 0;
                    background: rgba(6, 78, 59, 0.2);
                    border-top: 1px solid rgba(6, 78, 59, 0.5);
                    border-bottom: 1px solid rgba(6, 78, 59, 0.5);
                }
                .scripture-body {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .scripture-mark {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: rgba(16, 185, 129, 0.3);
                    margin: 0 auto 1.5rem;
                    display: block;
                }
                .scripture-text {
                    font-size: 1.875rem;
                    font-style: italic;
                    color: #d1fae5;
                    margin: 0 0 1rem;
                }
                .scripture-citation {
                    color: #10b981;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
