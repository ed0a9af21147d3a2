use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::config;
use crate::reveal::controller::AnimationKind;

const STAGGER_MS: u32 = 120;

#[function_component(Home)]
pub fn home() -> Html {
    let site = config::site();

    html! {
        <main class="home">
            <Hero title={site.brand.clone()} subtitle={AttrValue::from("One platform for the work between your systems")} />

            <Reveal class="feature-grid">
                { for site.sections.iter().enumerate().map(|(i, section)| html! {
                    <Reveal animation={AnimationKind::ZoomIn} delay_ms={i as u32 * STAGGER_MS}>
                        <div class="feature-card">
                            <h3>{ &section.title }</h3>
                            <p>{ format!("{} offerings", section.links.len()) }</p>
                        </div>
                    </Reveal>
                }) }
            </Reveal>

            <Reveal animation={AnimationKind::FadeRight} once={false} threshold={0.5}>
                <blockquote class="testimonial">
                    { "Stackyon replaced four tools for us." }
                </blockquote>
            </Reveal>

            <Reveal animation={AnimationKind::FadeLeft} delay_ms={STAGGER_MS}>
                <section class="cta">
                    <a href="/contact" class="cta-button">{ "Talk to us" }</a>
                </section>
            </Reveal>
        </main>
    }
}
