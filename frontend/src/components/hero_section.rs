use crate::services::logging::Logger;
use shared::HeroConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    #[prop_or_default]
    pub config: HeroConfig,
    /// Called when the call-to-action button is clicked
    #[prop_or_default]
    pub on_cta_click: Option<Callback<()>>,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let config = &props.config;

    let on_click = {
        let on_cta_click = props.on_cta_click.clone();
        Callback::from(move |_: MouseEvent| match &on_cta_click {
            Some(callback) => callback.emit(()),
            None => Logger::info_with_component("hero", "CTA clicked"),
        })
    };

    html! {
        <div class="hero">
            <div
                class="hero-background"
                style={format!("background-image: url({})", config.background_image)}
            >
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <h1 class="hero-title">{&config.title}</h1>
                <p class="hero-subtitle">{&config.subtitle}</p>
                <button type="button" class="btn btn-primary hero-cta" onclick={on_click}>
                    <span class="hero-cta-icon">{"📅"}</span>
                    {&config.cta_text}
                </button>
            </div>

            <div class="hero-fade"></div>
        </div>
    }
}
