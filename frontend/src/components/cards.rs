use yew::prelude::*;

use crate::content::{CareerEntry, ImpactPlan, PillarEntry};

#[derive(Properties, PartialEq)]
pub struct PillarLabelProps {
    pub pillar: PillarEntry,
}

/// The pillar label with its highlight letter picked out in the pillar colour.
#[function_component(PillarLabel)]
pub fn pillar_label(props: &PillarLabelProps) -> Html {
    let pillar = &props.pillar;
    match pillar.split_label() {
        Some((pre, highlight, post)) => html! {
            <>
                {pre}
                <span class={pillar.color.text_class()}>{highlight}</span>
                {post}
            </>
        },
        None => html! { <>{pillar.label.clone()}</> },
    }
}

#[derive(Properties, PartialEq)]
pub struct PillarListProps {
    pub pillars: Vec<PillarEntry>,
}

#[function_component(PillarList)]
pub fn pillar_list(props: &PillarListProps) -> Html {
    html! {
        <div class="pillar-list">
            { for props.pillars.iter().map(|pillar| html! {
                <div class="reveal-item pillar-card">
                    <h3 class="pillar-label">
                        <PillarLabel pillar={pillar.clone()} />
                    </h3>
                    <div class="pillar-body">
                        <div class="pillar-title-row">
                            <div class={classes!("pillar-rule", pillar.color.rule_class())}></div>
                            <h4 class="pillar-title">{&pillar.title}</h4>
                        </div>
                        <p class="pillar-description">{&pillar.description}</p>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: Vec<CareerEntry>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <div class="timeline">
            { for props.entries.iter().map(|entry| html! {
                <div class="reveal-item timeline-card">
                    <div class="timeline-card-head">
                        <div class="timeline-identity">
                            <div class={classes!("timeline-badge", entry.color.badge_class())}>
                                {entry.icon.glyph()}
                            </div>
                            <div>
                                <h4 class="timeline-role">{&entry.role}</h4>
                                <p class="timeline-org">{&entry.organization}</p>
                            </div>
                        </div>
                        <span class="timeline-date">{&entry.date_range}</span>
                    </div>
                    <ul class="timeline-details">
                        { for entry.details.iter().map(|detail| html! {
                            <li class="timeline-detail">
                                <span class="timeline-check">{"✓"}</span>
                                <p>{detail}</p>
                            </li>
                        }) }
                    </ul>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImpactPlansProps {
    pub plans: Vec<ImpactPlan>,
}

#[function_component(ImpactPlans)]
pub fn impact_plans(props: &ImpactPlansProps) -> Html {
    html! {
        <div class="impact-plans">
            { for props.plans.iter().map(|plan| html! {
                <div class="impact-plan">
                    <h4>{&plan.title}</h4>
                    <p>{&plan.description}</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CareerColor, CareerIcon, Folio, PillarColor};
    use yew::ServerRenderer;

    fn entry(role: &str, details: &[&str]) -> CareerEntry {
        CareerEntry {
            role: role.to_string(),
            organization: format!("{} Org", role),
            date_range: "2001 - 2002".to_string(),
            color: CareerColor::Slate,
            icon: CareerIcon::Rocket,
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect()
    }

    fn ascending(positions: &[usize]) -> bool {
        positions.windows(2).all(|pair| pair[0] < pair[1])
    }

    #[tokio::test]
    async fn timeline_renders_one_card_per_entry_in_order() {
        let entries = vec![
            entry("Alpha", &["a-one", "a-two", "a-three"]),
            entry("Bravo", &["b-one"]),
            entry("Charlie", &["c-one", "c-two"]),
            entry("Delta", &["d-one", "d-two"]),
        ];
        let html = ServerRenderer::<Timeline>::with_props(move || TimelineProps { entries })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("timeline-card\"").count(), 4);
        assert!(ascending(&positions(&html, &["Alpha", "Bravo", "Charlie", "Delta"])));
        assert_eq!(html.matches("class=\"timeline-detail\"").count(), 8);
        assert!(ascending(&positions(
            &html,
            &["a-one", "a-two", "a-three", "b-one", "c-one", "c-two", "d-one", "d-two"]
        )));
    }

    #[tokio::test]
    async fn embedded_career_renders_fully() {
        let entries = Folio::embedded().unwrap().career;
        let expected = entries.clone();
        let html = ServerRenderer::<Timeline>::with_props(move || TimelineProps { entries })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(html.matches("timeline-card\"").count(), expected.len());
        let details: Vec<&str> = expected
            .iter()
            .flat_map(|entry| entry.details.iter().map(String::as_str))
            .collect();
        assert!(ascending(&positions(&html, &details)));
        assert!(html.contains("accent-bg-slate"));
    }

    #[tokio::test]
    async fn pillar_label_highlights_letter() {
        let pillar = PillarEntry {
            label: "Shopping.".to_string(),
            title: "The Scaling Expert".to_string(),
            description: "SOPs".to_string(),
            color: PillarColor::Emerald,
            highlight: 'o',
        };
        let html = ServerRenderer::<PillarLabel>::with_props(move || PillarLabelProps { pillar })
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("Sh"));
        assert!(html.contains("<span class=\"accent-text-emerald\">o</span>"));
        assert!(html.contains("pping."));
    }

    #[tokio::test]
    async fn impact_plans_keep_order() {
        let plans = Folio::embedded().unwrap().impact.plans;
        let titles: Vec<String> = plans.iter().map(|p| p.title.clone()).collect();
        let html = ServerRenderer::<ImpactPlans>::with_props(move || ImpactPlansProps { plans })
            .hydratable(false)
            .render()
            .await;

        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        assert_eq!(html.matches("class=\"impact-plan\"").count(), 3);
        assert!(ascending(&positions(&html, &titles)));
    }
}
