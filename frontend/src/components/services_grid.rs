use shared::{Service, ServiceIcon, ServicesConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServicesGridProps {
    #[prop_or_default]
    pub config: ServicesConfig,
}

#[function_component(ServicesGrid)]
pub fn services_grid(props: &ServicesGridProps) -> Html {
    let config = &props.config;

    html! {
        <section class="services">
            <div class="services-container">
                <div class="services-header">
                    <h2>{&config.heading}</h2>
                    <p>{&config.intro}</p>
                </div>

                <div class="services-grid">
                    {for config.services.iter().map(|service| html! {
                        <ServiceCard service={service.clone()} />
                    })}
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class="card service-card">
            <div class="service-icon">{icon_glyph(service.icon)}</div>
            <h3>{&service.title}</h3>
            <p>{&service.description}</p>
        </div>
    }
}

fn icon_glyph(icon: ServiceIcon) -> &'static str {
    match icon {
        ServiceIcon::Book => "📖",
        ServiceIcon::GraduationCap => "🎓",
        ServiceIcon::Brain => "🧠",
    }
}
