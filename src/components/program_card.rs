use yew::prelude::*;

use crate::content::ProgramEntry;
use crate::icons::IconView;

#[derive(Properties, PartialEq)]
pub struct ProgramCardProps {
    pub entry: ProgramEntry,
}

/// One program area: icon tile, title, and a row per bullet in order.
#[function_component(ProgramCard)]
pub fn program_card(props: &ProgramCardProps) -> Html {
    let entry = &props.entry;

    html! {
        <div class="program-card">
            <div class="program-icon">
                <IconView icon={entry.icon} />
            </div>
            <h3 class="program-title serif">{entry.title}</h3>
            <ul class="program-bullets">
                { for entry.bullet_items.iter().map(|item| html! {
                    <li class="program-bullet">
                        <span class="bullet-dot"></span>
                        {*item}
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProgramGridProps {
    pub programs: &'static [ProgramEntry],
}

#[function_component(ProgramGrid)]
pub fn program_grid(props: &ProgramGridProps) -> Html {
    html! {
        <div class="program-grid">
            { for props.programs.iter().map(|entry| html! {
                <ProgramCard key={entry.title} entry={*entry} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROGRAMS;
    use crate::icons::Icon;
    use yew::ServerRenderer;

    async fn render_card(entry: ProgramEntry) -> String {
        ServerRenderer::<ProgramCard>::with_props(move || ProgramCardProps { entry })
            .hydratable(false)
            .render()
            .await
    }

    async fn render_grid(programs: &'static [ProgramEntry]) -> String {
        ServerRenderer::<ProgramGrid>::with_props(move || ProgramGridProps { programs })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn one_row_per_bullet_in_order() {
        for entry in PROGRAMS {
            let html = render_card(*entry).await;
            assert_eq!(
                html.matches("class=\"program-bullet\"").count(),
                entry.bullet_items.len(),
                "{}",
                entry.title
            );

            let positions: Vec<usize> = entry
                .bullet_items
                .iter()
                .map(|item| {
                    let escaped = item.replace('&', "&amp;");
                    html.find(&escaped)
                        .unwrap_or_else(|| panic!("missing bullet {}", item))
                })
                .collect();
            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[tokio::test]
    async fn card_without_bullets_renders_empty_list() {
        let html = render_card(ProgramEntry {
            title: "Coming Soon",
            icon: Icon::Sprout,
            bullet_items: &[],
        })
        .await;
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("program-bullets"));
        assert!(!html.contains("class=\"program-bullet\""));
    }

    #[tokio::test]
    async fn grid_renders_every_program() {
        let html = render_grid(PROGRAMS).await;
        assert_eq!(html.matches("class=\"program-card\"").count(), PROGRAMS.len());
    }

    #[tokio::test]
    async fn empty_grid_renders() {
        let html = render_grid(&[]).await;
        assert!(html.contains("program-grid"));
        assert!(!html.contains("program-card"));
    }
}
