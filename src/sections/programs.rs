use yew::prelude::*;

use crate::components::program_card::ProgramGrid;
use crate::components::section_heading::SectionHeading;
use crate::content::{programs, SectionAnchor, PROGRAMS};

#[function_component(Programs)]
pub fn programs_section() -> Html {
    html! {
        <section id={SectionAnchor::Programs.id()} class="programs">
            <div class="container">
                <SectionHeading subtitle={programs::SUBTITLE}>{programs::HEADING}</SectionHeading>
                <ProgramGrid programs={PROGRAMS} />
            </div>
            <style>
                {r#"
                .programs {
                    padding: 6rem 0;
                    background: rgba(6, 78, 59, 0.1);
                }
                .program-grid {
                    display: grid;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .program-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (min-width: 1024px) {
                    .program-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .program-card {
                    background: rgba(6, 78, 59, 0.4);
                    border: 1px solid rgba(6, 95, 70, 0.5);
                    padding: 2rem;
                    border-radius: 1rem;
                    backdrop-filter: blur(4px);
                    transition: transform 0.25s ease;
                }
                .program-card:hover {
                    transform: translateY(-5px);
                }
                .program-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: rgba(16, 185, 129, 0.2);
                    color: #34d399;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }
                .program-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }
                .program-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #d1fae5;
                    margin: 0 0 1rem;
                }
                .program-bullets {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .program-bullet {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #d6d3d1;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .bullet-dot {
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 9999px;
                    background: #10b981;
                    margin-top: 0.375rem;
                    flex-shrink: 0;
                }
                "#}
            </style>
        </section>
    }
}
