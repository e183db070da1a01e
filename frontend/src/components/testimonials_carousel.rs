use crate::hooks::use_viewport_width::use_viewport_width;
use shared::{stars, CarouselState, Testimonial, TestimonialsConfig};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TestimonialsCarouselProps {
    #[prop_or_default]
    pub config: TestimonialsConfig,
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel(props: &TestimonialsCarouselProps) -> Html {
    let testimonials = &props.config.testimonials;
    let width = use_viewport_width();
    let carousel = use_state(|| CarouselState::for_width(testimonials.len(), width));

    // Window size changed: adjust the number of visible cards
    {
        let carousel = carousel.clone();
        use_effect_with(width, move |width| {
            let mut resized = *carousel;
            resized.resize(*width);
            if resized != *carousel {
                carousel.set(resized);
            }
            || ()
        });
    }

    let step = |apply: fn(&mut CarouselState)| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut updated = *carousel;
            apply(&mut updated);
            carousel.set(updated);
        })
    };
    let on_prev = step(CarouselState::previous);
    let on_next = step(CarouselState::next);

    let track_style = format!(
        "transform: translateX(-{:.4}%); width: {:.4}%",
        carousel.offset_percent() / carousel.track_width_percent() * 100.0,
        carousel.track_width_percent()
    );
    let card_style = format!("width: {:.4}%", 100.0 / testimonials.len().max(1) as f64);

    html! {
        <div class="testimonials">
            <div class="testimonials-container">
                <h2 class="testimonials-heading">{&props.config.heading}</h2>

                <div class="carousel">
                    <div class="carousel-track" style={track_style}>
                        {for testimonials.iter().enumerate().map(|(i, testimonial)| html! {
                            <div
                                class={classes!(
                                    "carousel-slide",
                                    carousel.visible_range().contains(&i).then_some("visible")
                                )}
                                style={card_style.clone()}
                            >
                                <TestimonialCard testimonial={testimonial.clone()} />
                            </div>
                        })}
                    </div>

                    <button
                        type="button"
                        class="carousel-nav prev"
                        onclick={on_prev}
                        disabled={carousel.at_start()}
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        class="carousel-nav next"
                        onclick={on_next}
                        disabled={carousel.at_end()}
                    >
                        {"›"}
                    </button>
                </div>

                <div class="carousel-dots">
                    {for (0..carousel.position_count()).map(|position| {
                        let carousel = carousel.clone();
                        let active = carousel.index() == position;
                        html! {
                            <button
                                type="button"
                                class={classes!("carousel-dot", active.then_some("active"))}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    let mut updated = *carousel;
                                    updated.go_to(position);
                                    carousel.set(updated);
                                })}
                            />
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;

    html! {
        <div class="card testimonial-card">
            <div class="testimonial-author">
                <img
                    class="testimonial-avatar"
                    src={testimonial.avatar.clone()}
                    alt={testimonial.name.clone()}
                />
                <div>
                    <h3>{&testimonial.name}</h3>
                    <p class="testimonial-role">{&testimonial.role}</p>
                </div>
            </div>
            <div class="testimonial-stars">
                {for stars(testimonial.rating).iter().map(|filled| html! {
                    <span class={classes!("star", filled.then_some("filled"))}>{"★"}</span>
                })}
            </div>
            <p class="testimonial-text">{&testimonial.text}</p>
        </div>
    }
}
