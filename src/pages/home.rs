use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::particles::ParticleCanvas;
use crate::components::typewriter::Typewriter;
use crate::{config, Route};

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Landing page: typed headline over a particle canvas, scroll reveals, the
/// parallax about photo and the programs carousel.
#[function_component(Home)]
pub fn home() -> Html {
    let hero_entered = use_state(|| false);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Entry animation trigger for the hero headline.
    {
        let hero_entered = hero_entered.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(120, move || hero_entered.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    // One scroll listener drives the reveals and the about-photo entrance
    // and parallax, matching the original page's behavior of replaying the
    // reveal every time a section re-enters the viewport.
    use_effect_with_deps(
        move |_| {
            let mut teardown: Box<dyn FnOnce()> = Box::new(|| {});

            if let Some(window) = web_sys::window() {
                let Some(document) = window.document() else {
                    return teardown;
                };
                let prefers_reduced = window
                    .match_media("(prefers-reduced-motion: reduce)")
                    .ok()
                    .flatten()
                    .map(|m| m.matches())
                    .unwrap_or(false);

                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let vh = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    if vh <= 0.0 {
                        return;
                    }

                    if let Ok(targets) = document.query_selector_all(".reveal-on-scroll") {
                        for i in 0..targets.length() {
                            let element = targets
                                .item(i)
                                .and_then(|node| node.dyn_into::<web_sys::Element>().ok());
                            if let Some(element) = element {
                                let rect = element.get_bounding_client_rect();
                                let in_view = rect.top() < vh * 0.82 && rect.bottom() > 0.0;
                                let classes = element.class_name();
                                if in_view && !classes.contains("in-view") {
                                    element.set_class_name(&format!("{} in-view", classes));
                                } else if !in_view && classes.contains("in-view") {
                                    element.set_class_name(classes.replace(" in-view", "").trim());
                                }
                            }
                        }
                    }

                    if prefers_reduced {
                        return;
                    }

                    // About photo: slides in from outside while scrolling
                    // toward the section, then keeps a small parallax drift.
                    let section = document.query_selector("#about").ok().flatten();
                    let image = document
                        .query_selector(".about-image")
                        .ok()
                        .flatten()
                        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
                    if let (Some(section), Some(image)) = (section, image) {
                        let rect = section.get_bounding_client_rect();
                        let start_point = vh * 0.95;
                        let end_point = vh * 0.55;
                        let raw = (start_point - rect.top()) / (start_point - end_point);
                        let ease = smoothstep(raw.clamp(0.0, 1.0));

                        let x = 240.0 * (1.0 - ease);
                        let y = 140.0 * (1.0 - ease);
                        let rot = 10.0 * (1.0 - ease);
                        let style = image.style();
                        let _ = style.set_property("--about-enter-x", &format!("{x:.2}px"));
                        let _ = style.set_property("--about-enter-y", &format!("{y:.2}px"));
                        let _ = style.set_property("--about-enter-rot", &format!("{rot:.2}deg"));
                        let _ =
                            style.set_property("--about-enter-opacity", &format!("{ease:.3}"));

                        let image_rect = image.get_bounding_client_rect();
                        let center = image_rect.top() + image_rect.height() / 2.0;
                        let delta = (center - vh / 2.0) / (vh / 2.0);
                        let offset = (-delta * 14.0).clamp(-14.0, 14.0);
                        let _ =
                            style.set_property("--about-parallax", &format!("{offset:.2}px"));
                    }
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                let _ = window.add_event_listener_with_callback(
                    "resize",
                    scroll_callback.as_ref().unchecked_ref(),
                );

                // Initial check
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                let cleanup_window = window.clone();
                teardown = Box::new(move || {
                    let _ = cleanup_window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                    let _ = cleanup_window.remove_event_listener_with_callback(
                        "resize",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                });
            }

            teardown
        },
        (),
    );

    // Hero CTA ripple: spawn a span at the click point, remove it once the
    // animation has played out.
    let on_cta_click = Callback::from(move |e: MouseEvent| {
        let button = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok());
        let document = web_sys::window().and_then(|w| w.document());
        if let (Some(button), Some(document)) = (button, document) {
            let rect = button.get_bounding_client_rect();
            let size = rect.width().max(rect.height());
            if let Ok(ripple) = document.create_element("span") {
                ripple.set_class_name("ripple-effect");
                let left = e.client_x() as f64 - rect.left() - size / 2.0;
                let top = e.client_y() as f64 - rect.top() - size / 2.0;
                let _ = ripple.set_attribute(
                    "style",
                    &format!("width: {size}px; height: {size}px; left: {left}px; top: {top}px;"),
                );
                let _ = button.append_child(&ripple);
                Timeout::new(config::RIPPLE_CLEANUP_MS, move || ripple.remove()).forget();
            }
        }
    });

    let hero_class = if *hero_entered {
        "hero-container enter"
    } else {
        "hero-container"
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0b1d12;
                        color: #f2f7f3;
                        overflow-x: hidden;
                    }
                    .particle-canvas {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        z-index: 1;
                    }
                    .hero-container {
                        opacity: 0;
                        transform: translateY(26px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .hero-container.enter {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .typewriter {
                        font-size: 2.4rem;
                        letter-spacing: 0.08em;
                        font-weight: 700;
                    }
                    .hero-quote {
                        margin-top: 14px;
                        color: #bcd8c4;
                    }
                    .btn-primary-custom {
                        position: relative;
                        overflow: hidden;
                        margin-top: 26px;
                        padding: 14px 36px;
                        border: none;
                        border-radius: 28px;
                        background: #2e8b57;
                        color: #fff;
                        font-size: 1.05rem;
                        cursor: pointer;
                        transition: transform 0.25s ease;
                    }
                    .btn-primary-custom:hover {
                        transform: scale(1.07);
                    }
                    .ripple-effect {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.45);
                        transform: scale(0);
                        animation: ripple 0.6s ease-out forwards;
                        pointer-events: none;
                    }
                    @keyframes ripple {
                        to { transform: scale(2.4); opacity: 0; }
                    }
                    .reveal-on-scroll {
                        opacity: 0;
                        transform: translateY(34px);
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .reveal-on-scroll.in-view {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .about-section {
                        position: relative;
                        z-index: 1;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 40px;
                        align-items: center;
                        justify-content: center;
                        padding: 110px 8vw;
                    }
                    .about-content { max-width: 480px; }
                    .about-content .about-anim {
                        opacity: 0;
                        transform: translateY(18px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .about-content.in-view .about-anim {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    /* Stagger replays with the reveal: 120ms base, 110ms per item. */
                    .about-content.in-view .about-anim:nth-child(1) { transition-delay: 120ms; }
                    .about-content.in-view .about-anim:nth-child(2) { transition-delay: 230ms; }
                    .about-content.in-view .about-anim:nth-child(3) { transition-delay: 340ms; }
                    .about-image-frame {
                        border-radius: 18px;
                        overflow: visible;
                    }
                    .about-image {
                        width: min(420px, 80vw);
                        border-radius: 18px;
                        transform:
                            translate(var(--about-enter-x, 220px), calc(var(--about-enter-y, 120px) + var(--about-parallax, 0px)))
                            rotate(var(--about-enter-rot, 8deg));
                        opacity: var(--about-enter-opacity, 0);
                        transition: transform 0.15s linear, opacity 0.15s linear;
                    }
                    .programs-section {
                        position: relative;
                        z-index: 1;
                        padding: 90px 8vw;
                        text-align: center;
                    }
                    .carousel {
                        display: flex;
                        align-items: center;
                        gap: 18px;
                        justify-content: center;
                        margin-top: 36px;
                    }
                    .carousel-track { position: relative; width: min(560px, 80vw); min-height: 150px; }
                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.5s ease;
                        background: rgba(255, 255, 255, 0.06);
                        border-radius: 14px;
                        padding: 26px;
                    }
                    .carousel-slide.active { opacity: 1; }
                    .carousel-arrow {
                        background: none;
                        border: 1px solid #2e8b57;
                        color: #f2f7f3;
                        border-radius: 50%;
                        width: 42px;
                        height: 42px;
                        font-size: 1.4rem;
                        cursor: pointer;
                    }
                    .carousel-dots { position: absolute; margin-top: 180px; display: flex; gap: 8px; }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255,255,255,0.3);
                        cursor: pointer;
                    }
                    .carousel-dot.active { background: #2e8b57; }
                    .landing-footer {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 40px 0 60px;
                        color: #9db8a5;
                    }
                "#}
            </style>

            <ParticleCanvas />

            <header class="hero">
                <div class={hero_class}>
                    <h1>
                        <Typewriter text="LIMCOMA MULTI-PURPOSE COOPERATIVE" />
                    </h1>
                    <p class="hero-quote">
                        {"Serving farmers and families since day one. Own a share of what you build."}
                    </p>
                    <Link<Route> to={Route::Membership}>
                        <button class="btn-primary-custom" onclick={on_cta_click}>
                            {"Apply for Membership"}
                        </button>
                    </Link<Route>>
                </div>
            </header>

            <section id="about" class="about-section">
                <div class="about-content reveal-on-scroll">
                    <h2 class="about-anim">{"About the Cooperative"}</h2>
                    <p class="about-anim">
                        {"LIMCOMA is a community-owned cooperative providing savings, \
                          loans and agricultural supply programs to its members. Every \
                          member is an owner, and every peso of surplus goes back to \
                          the community."}
                    </p>
                    <p class="about-anim">
                        {"Membership is open to residents of the service area who share \
                          the cooperative's goals and complete the application below."}
                    </p>
                </div>
                <div class="about-image-frame">
                    <img class="about-image" src="/assets/about-photo.jpg" alt="Cooperative members at work" loading="lazy" />
                </div>
            </section>

            <section class="programs-section">
                <h2 class="reveal-on-scroll">{"Programs & Services"}</h2>
                <Carousel />
            </section>

            <footer class="landing-footer reveal-on-scroll">
                <p>{"LIMCOMA Multi-Purpose Cooperative"}</p>
            </footer>
        </div>
    }
}
