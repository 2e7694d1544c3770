use yew::prelude::*;

use crate::components::{
    about::About,
    certifications::Certifications,
    footer::Footer,
    hero::Hero,
};
use crate::config;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let overrides = use_memo(|_| config::load_overrides(), ());

    html! {
        <div class="portfolio">
            <main>
                <Hero content={overrides.hero.clone()} />
                <About content={overrides.about.clone()} />
                <Certifications />
            </main>
            <Footer content={overrides.footer.clone()} />
        </div>
    }
}
