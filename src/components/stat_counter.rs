use yew::prelude::*;

use crate::content::StatEntry;
use crate::reveal::{Pose, Reveal};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub entry: StatEntry,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let entry = &props.entry;

    html! {
        <Reveal
            class="stat-counter"
            pose={Pose::Rise(20.0)}
            delay_seconds={entry.reveal_delay_seconds.max(0.0)}
        >
            <div class="stat-value serif">{entry.value}</div>
            <div class="stat-label">{entry.label}</div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: &'static [StatEntry],
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="stats-grid">
            { for props.stats.iter().map(|entry| html! {
                <StatCounter key={entry.label} entry={*entry} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::STATS;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn counters_carry_their_stagger() {
        let html = ServerRenderer::<StatsGrid>::with_props(|| StatsGridProps { stats: STATS })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("stat-counter").count(), STATS.len());
        for delay in ["0.1", "0.2", "0.3"] {
            assert!(html.contains(&format!("transition-delay: {}s;", delay)));
        }

        let labels: Vec<usize> = STATS
            .iter()
            .map(|s| html.find(s.label).expect("label rendered"))
            .collect();
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
