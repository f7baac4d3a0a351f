use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::{about, SectionAnchor, ValueEntry, VALUES};
use crate::icons::IconView;
use crate::reveal::{Pose, Reveal};

fn value_item(entry: &ValueEntry) -> Html {
    html! {
        <div class="value-item" key={entry.title}>
            <div class="value-icon">
                <IconView icon={entry.icon} />
            </div>
            <div>
                <h4 class="value-title">{entry.title}</h4>
                <p class="value-text">{entry.description}</p>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about_section() -> Html {
    let featured = about::FEATURED_STAT;

    html! {
        <section id={SectionAnchor::About.id()} class="about">
            <div class="container about-grid">
                <Reveal pose={Pose::Grow(0.95)} class="about-media">
                    <div class="about-photo">
                        <FallbackImage
                            src={config::image_url("community", 800, 1000, 0)}
                            alt="Community work"
                        />
                    </div>
                    <div class="about-badge">
                        <div class="about-badge-value serif">{featured.value}</div>
                        <div class="about-badge-label">{featured.label}</div>
                    </div>
                </Reveal>

                <div>
                    <SectionHeading subtitle={about::SUBTITLE}>{about::HEADING}</SectionHeading>
                    <div class="about-copy">
                        { for about::PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                        <div class="value-grid">
                            { for VALUES.iter().map(value_item) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    padding: 6rem 0;
                }
                .about-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }
                @media (min-width: 768px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .about-media {
                    position: relative;
                }
                .about-photo {
                    aspect-ratio: 4 / 5;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, #064e3b, #022c22);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .about-badge {
                    display: none;
                    position: absolute;
                    bottom: -2rem;
                    right: -2rem;
                    background: #059669;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                @media (min-width: 1024px) {
                    .about-badge {
                        display: block;
                    }
                }
                .about-badge-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .about-badge-label {
                    color: #d1fae5;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .about-copy {
                    color: #a8a29e;
                    line-height: 1.7;
                }
                .about-copy p {
                    margin: 0 0 1.5rem;
                }
                .value-grid {
                    display: grid;
                    gap: 1.5rem;
                    padding-top: 2rem;
                }
                @media (min-width: 640px) {
                    .value-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .value-item {
                    display: flex;
                    gap: 1rem;
                }
                .value-icon {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: rgba(16, 185, 129, 0.1);
                    color: #34d399;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .value-icon .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .value-title {
                    color: #f5f5f4;
                    font-weight: 700;
                    margin: 0 0 0.25rem;
                }
                .value-text {
                    font-size: 0.75rem;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
