use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal::controller::{AnimationKind, RevealConfig, RevealController};
use crate::reveal::web::{BrowserMotion, BrowserViewport};

const OFFSET_PX: u32 = 24;
const ZOOM_FROM: f64 = 0.92;

fn hidden_transform(kind: AnimationKind) -> String {
    match kind {
        AnimationKind::FadeUp => format!("translateY({}px)", OFFSET_PX),
        AnimationKind::FadeDown => format!("translateY(-{}px)", OFFSET_PX),
        AnimationKind::FadeLeft => format!("translateX({}px)", OFFSET_PX),
        AnimationKind::FadeRight => format!("translateX(-{}px)", OFFSET_PX),
        AnimationKind::ZoomIn => format!("scale({})", ZOOM_FROM),
    }
}

/// Inline style for one side of the reveal transition.
pub fn reveal_style(config: &RevealConfig, visible: bool, reduced_motion: bool) -> String {
    let (opacity, transform) = if visible {
        (1, "none".to_string())
    } else {
        (0, hidden_transform(config.animation))
    };
    let transition = if reduced_motion {
        "none".to_string()
    } else {
        format!(
            "opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms",
            d = config.duration_ms,
            delay = config.delay_ms
        )
    };
    format!(
        "opacity: {}; transform: {}; transition: {}; will-change: opacity, transform;",
        opacity, transform, transition
    )
}

#[derive(Clone, PartialEq)]
pub struct RevealHandle {
    pub node: NodeRef,
    pub visible: bool,
    pub reduced_motion: bool,
}

/// Binds a [`RevealController`] to the element behind the returned node ref
/// for as long as the component stays mounted.
#[hook]
pub fn use_reveal(config: RevealConfig) -> RevealHandle {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let reduced_motion = use_state_eq(|| false);

    {
        let node = node.clone();
        let set_visible = visible.setter();
        let set_reduced = reduced_motion.setter();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                let on_change = {
                    let set_visible = set_visible.clone();
                    Callback::from(move |v: bool| set_visible.set(v))
                };
                let on_motion_change = {
                    let set_reduced = set_reduced.clone();
                    Callback::from(move |reduced: bool| set_reduced.set(reduced))
                };
                let controller = RevealController::new(config.clone(), BrowserViewport, BrowserMotion)
                    .with_on_change(on_change)
                    .with_on_motion_change(on_motion_change);

                match node.cast::<Element>() {
                    Some(element) => {
                        controller.attach(element);
                        debug!(
                            "reveal: {:?} mounted in {:?}",
                            controller.config().animation,
                            controller.phase()
                        );
                        // A fresh controller only reports flips, so sync
                        // whatever the previous one left behind.
                        set_visible.set(controller.is_visible());
                        set_reduced.set(controller.is_reduced_motion());
                    }
                    None => {
                        warn!("reveal: no element mounted, showing content");
                        set_visible.set(true);
                    }
                }

                move || controller.teardown()
            },
            config,
        );
    }

    RevealHandle {
        node,
        visible: *visible,
        reduced_motion: *reduced_motion,
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub animation: Option<AnimationKind>,
    #[prop_or_default]
    pub duration_ms: Option<u32>,
    #[prop_or_default]
    pub delay_ms: Option<u32>,
    #[prop_or_default]
    pub threshold: Option<f64>,
    #[prop_or_default]
    pub once: Option<bool>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

impl RevealProps {
    /// Site-wide defaults with this instance's overrides applied.
    fn config(&self) -> RevealConfig {
        let defaults = &config::site().reveal;
        RevealConfig {
            animation: self.animation.unwrap_or(defaults.animation),
            duration_ms: self.duration_ms.unwrap_or(defaults.duration_ms),
            delay_ms: self.delay_ms.unwrap_or(defaults.delay_ms),
            threshold: self.threshold.unwrap_or(defaults.threshold),
            once: self.once.unwrap_or(defaults.once),
        }
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = props.config();
    let handle = use_reveal(config.clone());
    let style = reveal_style(&config, handle.visible, handle.reduced_motion);

    html! {
        <div
            ref={handle.node.clone()}
            class={classes!("reveal", handle.visible.then(|| "revealed"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
