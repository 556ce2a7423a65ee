use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

struct Slide {
    title: &'static str,
    text: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "Savings & Deposits",
        text: "Grow your share capital with regular and time deposits at member rates.",
    },
    Slide {
        title: "Loan Programs",
        text: "Providential, livelihood and emergency loans with cooperative terms.",
    },
    Slide {
        title: "Feeds & Agri Supply",
        text: "Quality feeds and farm inputs at member prices, delivered to your barangay.",
    },
    Slide {
        title: "Member Benefits",
        text: "Patronage refunds, dividends and mutual aid for every member in good standing.",
    },
];

fn next_index(current: usize) -> usize {
    (current + 1) % SLIDES.len()
}

fn prev_index(current: usize) -> usize {
    (current + SLIDES.len() - 1) % SLIDES.len()
}

/// Programs slider. The slide index is owned state; the pending auto-advance
/// timer is re-created whenever the index changes, so manual navigation
/// resets the clock instead of racing it.
#[function_component(Carousel)]
pub fn carousel() -> Html {
    let index = use_state(|| 0usize);
    let current = *index;

    {
        let index = index.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let next = next_index(*current);
                let timer = Timeout::new(config::CAROUSEL_PERIOD_MS, move || {
                    index.set(next);
                });
                move || drop(timer)
            },
            current,
        );
    }

    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set(prev_index(current));
        })
    };
    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set(next_index(current));
        })
    };

    html! {
        <div class="carousel reveal-on-scroll">
            <button class="carousel-arrow" onclick={prev}>{"‹"}</button>
            <div class="carousel-track">
                {
                    SLIDES.iter().enumerate().map(|(i, slide)| {
                        let class = if i == current { "carousel-slide active" } else { "carousel-slide" };
                        html! {
                            <div key={i} class={class}>
                                <h3>{ slide.title }</h3>
                                <p>{ slide.text }</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <button class="carousel-arrow" onclick={next}>{"›"}</button>
            <div class="carousel-dots">
                {
                    (0..SLIDES.len()).map(|i| {
                        let class = if i == current { "carousel-dot active" } else { "carousel-dot" };
                        let index = index.clone();
                        let onclick = Callback::from(move |_: MouseEvent| index.set(i));
                        html! { <button key={i} class={class} {onclick} /> }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_advance_wraps_past_last_slide() {
        let mut current = 0;
        for _ in 0..SLIDES.len() {
            current = next_index(current);
        }
        assert_eq!(current, 0);
    }

    #[test]
    fn prev_from_first_lands_on_last() {
        assert_eq!(prev_index(0), SLIDES.len() - 1);
        assert_eq!(next_index(prev_index(0)), 0);
    }
}
