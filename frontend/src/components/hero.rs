use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal::platform::MotionPreference;
use crate::reveal::web::BrowserMotion;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Banner whose headline color follows the pointer.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let tint = &config::site().tint;
    let node = use_node_ref();
    let color = use_state_eq(|| None::<String>);
    let reduced_motion = use_state_eq(|| BrowserMotion.prefers_reduced_motion().unwrap_or(false));

    {
        let set_reduced = reduced_motion.setter();
        let set_color = color.setter();
        use_effect_with_deps(
            move |_| {
                let on_change = Callback::from(move |reduced: bool| {
                    if reduced {
                        set_color.set(None);
                    }
                    set_reduced.set(reduced);
                });
                let subscription = match BrowserMotion.subscribe(on_change) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!("hero: motion preference changes unavailable: {}", e);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    let onmousemove = {
        let node = node.clone();
        let color = color.clone();
        let reduced_motion = *reduced_motion;
        Callback::from(move |e: MouseEvent| {
            if reduced_motion {
                return;
            }
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            let rgb = tint.color_at(x, y, rect.width(), rect.height());
            color.set(Some(rgb.to_css()));
        })
    };

    let onmouseleave = {
        let color = color.clone();
        Callback::from(move |_: MouseEvent| color.set(None))
    };

    let title_style = (*color)
        .as_ref()
        .map(|c| format!("color: {}; transition: color 120ms linear;", c));

    html! {
        <section class="hero" ref={node} {onmousemove} {onmouseleave}>
            <h1 class="hero-title" style={title_style}>{ props.title.clone() }</h1>
            {
                match &props.subtitle {
                    Some(subtitle) => html! { <p class="hero-subtitle">{ subtitle.clone() }</p> },
                    None => html! {},
                }
            }
            { for props.children.iter() }
        </section>
    }
}
