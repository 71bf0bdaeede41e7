use yew::prelude::*;

use crate::content::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub heading: SectionHeading,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let SectionHeading {
        title,
        subtitle,
        annotation,
    } = &props.heading;

    html! {
        <div class={classes!("section-header", props.dark.then(|| "dark"))}>
            <div class="section-header-rule-row">
                <div class="section-header-rule"></div>
                {
                    if let Some(annotation) = annotation {
                        html! { <span class="section-header-annotation">{annotation}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <h2 class="section-header-title">{title}</h2>
            {
                if let Some(subtitle) = subtitle {
                    html! { <p class="section-header-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
