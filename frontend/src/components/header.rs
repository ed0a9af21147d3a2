use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, Node};
use yew::prelude::*;

use crate::config;
use crate::nav::mega_menu::MegaMenuLayout;

const CLOSE_DELAY_MS: u32 = 150;
const SCROLLED_AFTER_PX: f64 = 80.0;

/// Geometry captured when a trigger opens its dropdown.
#[derive(Clone, Copy, PartialEq)]
struct OpenMenu {
    index: usize,
    trigger_left: f64,
    trigger_width: f64,
    viewport_width: f64,
}

fn open_menu_from(e: &Event, index: usize) -> Option<OpenMenu> {
    let trigger = e
        .target_dyn_into::<Element>()?
        .closest(".mega-trigger")
        .ok()
        .flatten()?;
    let rect = trigger.get_bounding_client_rect();
    let viewport_width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| rect.right());
    Some(OpenMenu {
        index,
        trigger_left: rect.left(),
        trigger_width: rect.width(),
        viewport_width,
    })
}

/// Whether focus moving to `next` has left the nav. `None` means focus left
/// the document or the nav is not mounted.
fn focus_left_nav(next_inside_nav: Option<bool>) -> bool {
    !next_inside_nav.unwrap_or(false)
}

#[function_component(Header)]
pub fn header() -> Html {
    let site = config::site();
    let open = use_state_eq(|| None::<OpenMenu>);
    let close_timer = use_mut_ref(|| None::<Timeout>);
    let is_scrolled = use_state_eq(|| false);
    let nav_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > SCROLLED_AFTER_PX);
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("header: could not listen for scroll: {:?}", e);
                    }
                    (window, callback)
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open_section = |index: usize| {
        let open = open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |e: MouseEvent| {
            close_timer.borrow_mut().take();
            if let Some(menu) = open_menu_from(&e, index) {
                open.set(Some(menu));
            }
        })
    };

    let focus_section = |index: usize| {
        let open = open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |e: FocusEvent| {
            close_timer.borrow_mut().take();
            if let Some(menu) = open_menu_from(&e, index) {
                open.set(Some(menu));
            }
        })
    };

    let on_focusout = {
        let open = open.clone();
        let nav_ref = nav_ref.clone();
        Callback::from(move |e: FocusEvent| {
            let next_inside_nav = nav_ref.cast::<Node>().map(|nav| {
                let next = e.related_target().and_then(|t| t.dyn_into::<Node>().ok());
                next.map_or(false, |next| nav.contains(Some(&next)))
            });
            if focus_left_nav(next_inside_nav) {
                open.set(None);
            }
        })
    };

    let schedule_close = {
        let open = open.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let open = open.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(CLOSE_DELAY_MS, move || open.set(None)));
        })
    };

    let cancel_close = {
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            close_timer.borrow_mut().take();
        })
    };

    let on_keydown = {
        let open = open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                open.set(None);
            }
        })
    };

    let open_index = (*open).map(|menu| menu.index);

    let dropdown = match *open {
        Some(menu) => match site.sections.get(menu.index) {
            Some(section) => {
                let layout = MegaMenuLayout::compute(
                    section,
                    &site.menu,
                    menu.trigger_left,
                    menu.trigger_width,
                    menu.viewport_width,
                );
                let style = format!("left: {:.0}px; width: {}px;", layout.placement.left, layout.width);
                html! {
                    <div
                        class={classes!("mega-menu", layout.placement.align.class())}
                        style={style}
                        onmouseenter={cancel_close}
                    >
                        { for layout.columns.iter().map(|column| html! {
                            <ul class="mega-column">
                                { for column.iter().map(|link| html! {
                                    <li>
                                        <a href={link.href.clone()} class="mega-link">
                                            <span class="mega-link-label">{ &link.label }</span>
                                            {
                                                match &link.blurb {
                                                    Some(blurb) => html! { <span class="mega-link-blurb">{ blurb }</span> },
                                                    None => html! {},
                                                }
                                            }
                                        </a>
                                    </li>
                                }) }
                            </ul>
                        }) }
                    </div>
                }
            }
            None => html! {},
        },
        None => html! {},
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="/" class="header-logo">{ &site.brand }</a>
                <nav
                    class="header-nav"
                    ref={nav_ref}
                    onmouseleave={schedule_close}
                    onkeydown={on_keydown}
                    onfocusout={on_focusout}
                >
                    { for site.sections.iter().enumerate().map(|(i, section)| html! {
                        <button
                            class="mega-trigger"
                            aria-haspopup="true"
                            aria-expanded={(open_index == Some(i)).to_string()}
                            onmouseenter={open_section(i)}
                            onclick={open_section(i)}
                            onfocus={focus_section(i)}
                        >
                            { &section.title }
                        </button>
                    }) }
                    { dropdown }
                </nav>
            </div>
        </header>
    }
}
