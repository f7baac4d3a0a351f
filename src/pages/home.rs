use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, programs::Programs,
    quote::ScriptureQuote, stats::Impact,
};
use crate::Nav;

/// The whole page. Section order is fixed.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page">
            <Nav />
            <Hero />
            <ScriptureQuote />
            <About />
            <Programs />
            <Impact />
            <Contact />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn sections_render_in_fixed_order() {
        let html = ServerRenderer::<Home>::new().hydratable(false).render().await;

        let markers = [
            "class=\"top-nav",
            "class=\"hero\"",
            "class=\"scripture\"",
            "id=\"about\"",
            "id=\"programs\"",
            "class=\"impact\"",
            "id=\"contact\"",
            "class=\"site-footer\"",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "sections out of order: {:?}",
            positions
        );
    }

    #[tokio::test]
    async fn nav_links_target_page_anchors() {
        let html = ServerRenderer::<Home>::new().hydratable(false).render().await;
        for anchor in ["#about", "#programs", "#contact"] {
            assert!(html.contains(&format!("href=\"{}\"", anchor)), "no link to {}", anchor);
        }
    }

    #[tokio::test]
    async fn page_renders_configured_content() {
        let html = ServerRenderer::<Home>::new().hydratable(false).render().await;
        assert_eq!(html.matches("class=\"program-card\"").count(), 6);
        assert_eq!(html.matches("class=\"contact-row\"").count(), 3);
        assert!(html.contains("Matthew 5:7"));
    }
}
