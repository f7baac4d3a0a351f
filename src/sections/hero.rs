use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::config;
use crate::content::{hero, SectionAnchor};
use crate::icons::{Icon, IconView};
use crate::reveal::{Pose, Reveal, RevealTrigger};

#[function_component(Hero)]
pub fn hero_section() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <FallbackImage
                    src={config::image_url("ministry", 1920, 1080, 8)}
                    alt="Background"
                    class="hero-image"
                />
                <div class="hero-gradient"></div>
            </div>

            <div class="container hero-body">
                <Reveal
                    trigger={RevealTrigger::Mount}
                    pose={Pose::SlideFromLeft(20.0)}
                    duration_seconds={config::HERO_REVEAL_DURATION_SECONDS}
                    class="hero-copy"
                >
                    <span class="hero-badge">{hero::BADGE}</span>
                    <h1 class="hero-title serif">
                        {hero::HEADLINE_LEAD}
                        <span class="hero-emphasis">{hero::HEADLINE_EMPHASIS}</span>
                        {hero::HEADLINE_TAIL}
                    </h1>
                    <p class="hero-lede">{hero::LEDE}</p>
                    <div class="hero-actions">
                        <a href={SectionAnchor::About.href()} class="button-primary">
                            {hero::PRIMARY_CTA}
                            <IconView icon={Icon::ArrowRight} class="button-arrow" />
                        </a>
                        <a href={SectionAnchor::Programs.href()} class="button-outline">
                            {hero::SECONDARY_CTA}
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    padding: 8rem 0 5rem;
                    overflow: hidden;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.2;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to bottom,
                        rgba(2, 44, 34, 0.5) 0%,
                        #022c22 50%,
                        #022c22 100%
                    );
                }
                .hero-body {
                    position: relative;
                    z-index: 1;
                }
                .hero-copy {
                    max-width: 48rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    background: rgba(16, 185, 129, 0.1);
                    border: 1px solid rgba(16, 185, 129, 0.2);
                    color: #34d399;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 1.5rem;
                }
                .hero-title {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    margin: 0 0 2rem;
                    text-wrap: balance;
                }
                .hero-emphasis {
                    color: #34d399;
                    font-style: italic;
                }
                .hero-lede {
                    font-size: 1.25rem;
                    color: #a8a29e;
                    line-height: 1.7;
                    max-width: 42rem;
                    margin-bottom: 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .button-arrow {
                    width: 1rem;
                    height: 1rem;
                    transition: transform 0.2s ease;
                }
                .button-primary:hover .button-arrow {
                    transform: translateX(4px);
                }
                "#}
            </style>
        </section>
    }
}
