use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// External image that removes itself if it fails to load. Anything layered
/// around it (gradients, overlays) lives in the parent and stays put.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            warn!("image failed to load: {}", src);
            failed.set(true);
        })
    };

    if *failed {
        return html! {};
    }

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={props.class.clone()}
            loading="lazy"
            referrerpolicy="no-referrer"
            {onerror}
        />
    }
}
