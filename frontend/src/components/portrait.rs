use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageEvent {
    Loaded,
    Errored,
}

impl ImageStatus {
    /// `Failed` absorbs every later event, including a late `load`.
    pub fn apply(self, event: ImageEvent) -> Self {
        match (self, event) {
            (ImageStatus::Failed, _) => ImageStatus::Failed,
            (_, ImageEvent::Errored) => ImageStatus::Failed,
            (_, ImageEvent::Loaded) => ImageStatus::Loaded,
        }
    }

    pub fn failed(self) -> bool {
        self == ImageStatus::Failed
    }
}

impl Reducible for ImageStatus {
    type Action = ImageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroPortraitProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Remote portrait that degrades to a text placeholder once it fails to load.
/// There is no retry; the placeholder stays for the rest of the session.
#[function_component(HeroPortrait)]
pub fn hero_portrait(props: &HeroPortraitProps) -> Html {
    let status = use_reducer_eq(ImageStatus::default);

    let on_event = {
        let status = status.clone();
        let src = props.src.clone();
        Callback::from(move |event: ImageEvent| {
            match event {
                ImageEvent::Errored => warn!("portrait {} failed to load, showing placeholder", src),
                ImageEvent::Loaded => debug!("portrait loaded"),
            }
            status.dispatch(event);
        })
    };

    html! {
        <PortraitFrame
            status={*status}
            src={props.src.clone()}
            alt={props.alt.clone()}
            {on_event}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct PortraitFrameProps {
    pub status: ImageStatus,
    pub src: AttrValue,
    pub alt: AttrValue,
    pub on_event: Callback<ImageEvent>,
}

#[function_component(PortraitFrame)]
pub fn portrait_frame(props: &PortraitFrameProps) -> Html {
    html! {
        <div class="portrait-frame">
            {
                if props.status.failed() {
                    html! {
                        <div class="portrait-placeholder">
                            {"Portrait Fetching..."}<br/>
                            <span class="portrait-placeholder-sub">{"Standardizing pixels"}</span>
                        </div>
                    }
                } else {
                    html! {
                        <img
                            src={props.src.clone()}
                            alt={props.alt.clone()}
                            class="portrait-image"
                            loading="eager"
                            onerror={props.on_event.reform(|_: Event| ImageEvent::Errored)}
                            onload={props.on_event.reform(|_: Event| ImageEvent::Loaded)}
                        />
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    const SRC: &str = "https://images.invalid/portrait.jpg";

    async fn render_frame(status: ImageStatus) -> String {
        ServerRenderer::<PortraitFrame>::with_props(move || PortraitFrameProps {
            status,
            src: SRC.into(),
            alt: "portrait".into(),
            on_event: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[test]
    fn error_is_absorbing() {
        let failed = ImageStatus::Loading.apply(ImageEvent::Errored);
        assert_eq!(failed, ImageStatus::Failed);
        assert_eq!(failed.apply(ImageEvent::Loaded), ImageStatus::Failed);
        assert_eq!(failed.apply(ImageEvent::Errored), ImageStatus::Failed);
    }

    #[test]
    fn error_after_load_still_fails() {
        let loaded = ImageStatus::Loading.apply(ImageEvent::Loaded);
        assert_eq!(loaded, ImageStatus::Loaded);
        assert!(loaded.apply(ImageEvent::Errored).failed());
    }

    #[test]
    fn reducer_keeps_handle_when_state_is_unchanged() {
        let failed = Rc::new(ImageStatus::Failed);
        let next = failed.clone().reduce(ImageEvent::Loaded);
        assert!(Rc::ptr_eq(&failed, &next));
    }

    #[tokio::test]
    async fn failed_portrait_renders_placeholder_only() {
        let html = render_frame(ImageStatus::Failed).await;
        assert!(html.contains("Portrait Fetching..."));
        assert!(html.contains("Standardizing pixels"));
        assert!(!html.contains("<img"));
        assert!(!html.contains(SRC));
    }

    #[tokio::test]
    async fn loading_portrait_renders_image() {
        let html = render_frame(ImageStatus::Loading).await;
        assert!(html.contains("<img"));
        assert!(html.contains(SRC));
        assert!(!html.contains("Portrait Fetching..."));
    }
}
