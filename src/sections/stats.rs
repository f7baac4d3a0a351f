use yew::prelude::*;

use crate::components::fallback_image::FallbackImage;
use crate::components::stat_counter::StatsGrid;
use crate::config;
use crate::content::STATS;

#[function_component(Impact)]
pub fn impact() -> Html {
    html! {
        <section class="impact">
            <div class="impact-backdrop">
                <FallbackImage
                    src={config::image_url("impact", 1920, 1080, 0)}
                    alt="Impact background"
                />
            </div>
            <div class="container impact-body">
                <StatsGrid stats={STATS} />
            </div>
            <style>
                {r#"
                .impact {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                }
                .impact-backdrop {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                }
                .impact-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .impact-body {
                    position: relative;
                    z-index: 1;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 3rem;
                    text-align: center;
                }
                @media (min-width: 1024px) {
                    .stats-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                .stat-value {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #34d399;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    color: #a8a29e;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                "#}
            </style>
        </section>
    }
}
