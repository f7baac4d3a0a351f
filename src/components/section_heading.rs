use yew::prelude::*;

use crate::reveal::{Pose, Reveal};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal pose={Pose::Rise(10.0)}>
                            <span class="section-subtitle">{subtitle.clone()}</span>
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
            <Reveal pose={Pose::Rise(20.0)}>
                <h2 class="section-title serif">{ for props.children.iter() }</h2>
            </Reveal>
            <div class="section-rule"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[function_component(WithSubtitle)]
    fn with_subtitle() -> Html {
        html! { <SectionHeading subtitle="What We Do">{"Core Program Areas"}</SectionHeading> }
    }

    #[function_component(WithoutSubtitle)]
    fn without_subtitle() -> Html {
        html! { <SectionHeading>{"Core Program Areas"}</SectionHeading> }
    }

    #[tokio::test]
    async fn subtitle_precedes_title() {
        let html = ServerRenderer::<WithSubtitle>::new().hydratable(false).render().await;
        let subtitle = html.find("What We Do").expect("subtitle rendered");
        let title = html.find("Core Program Areas").expect("title rendered");
        assert!(subtitle < title);
    }

    #[tokio::test]
    async fn subtitle_is_optional() {
        let html = ServerRenderer::<WithoutSubtitle>::new().hydratable(false).render().await;
        assert!(!html.contains("section-subtitle"));
        assert!(html.contains("Core Program Areas"));
    }
}
