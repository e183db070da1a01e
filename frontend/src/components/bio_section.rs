use shared::BioConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BioSectionProps {
    #[prop_or_default]
    pub config: BioConfig,
}

#[function_component(BioSection)]
pub fn bio_section(props: &BioSectionProps) -> Html {
    let config = &props.config;

    html! {
        <section class="bio">
            <div class="bio-container">
                <div class="bio-portrait">
                    <img src={config.image_url.clone()} alt={config.name.clone()} />
                </div>

                <div class="bio-content">
                    <h2 class="bio-name">{&config.name}</h2>
                    <h3 class="bio-title">{&config.title}</h3>
                    <p class="bio-text">{&config.bio}</p>

                    <div class="card bio-credentials">
                        <h4>{"Credentials"}</h4>
                        <ul>
                            {for config.credentials.iter().map(|credential| html! {
                                <li>{credential}</li>
                            })}
                        </ul>
                    </div>

                    <div class="card bio-specialties">
                        <h4>{"Areas of Expertise"}</h4>
                        <div class="specialty-tags">
                            {for config.specialties.iter().map(|specialty| html! {
                                <span class="specialty-tag">{specialty}</span>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
