use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = config::site();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                { for site.sections.iter().map(|section| html! {
                    <div class="footer-column">
                        <h4>{ &section.title }</h4>
                        <ul>
                            { for section.links.iter().map(|link| html! {
                                <li><a href={link.href.clone()}>{ &link.label }</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <p class="footer-brand">{ format!("© {}", site.brand) }</p>
        </footer>
    }
}
