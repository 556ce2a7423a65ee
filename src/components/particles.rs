use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config;

struct Particle {
    x: f64,
    y: f64,
    size: f64,
    speed_x: f64,
    speed_y: f64,
    opacity: f64,
}

impl Particle {
    fn spawn(width: f64, height: f64) -> Self {
        let random = web_sys::js_sys::Math::random;
        Particle {
            x: random() * width,
            y: random() * height,
            size: random() * 1.5 + 0.5,
            speed_x: random() * 0.3 - 0.15,
            speed_y: random() * 0.3 - 0.15,
            opacity: random() * 0.4,
        }
    }

    // Drift and wrap at the edges.
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        if self.x > width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", self.opacity));
        ctx.begin_path();
        let _ = ctx.arc(self.x, self.y, self.size, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}

fn fit_to_window(window: &web_sys::Window, canvas: &HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Full-viewport canvas with drifting particles, advanced by an
/// animation-frame loop. The frame request and the resize listener are both
/// cancelled when the component unmounts.
#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown: Box<dyn FnOnce()> = Box::new(|| {});

                let window = web_sys::window();
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                if let (Some(window), Some(canvas)) = (window, canvas) {
                    if let Ok(Some(ctx_obj)) = canvas.get_context("2d") {
                        let ctx: CanvasRenderingContext2d = ctx_obj.unchecked_into();

                        fit_to_window(&window, &canvas);
                        let particles: Rc<RefCell<Vec<Particle>>> = Rc::new(RefCell::new(
                            (0..config::PARTICLE_COUNT)
                                .map(|_| {
                                    Particle::spawn(
                                        canvas.width() as f64,
                                        canvas.height() as f64,
                                    )
                                })
                                .collect(),
                        ));

                        // Resize listener keeps the canvas covering the viewport.
                        let resize_closure = {
                            let window = window.clone();
                            let canvas = canvas.clone();
                            Closure::wrap(Box::new(move || {
                                fit_to_window(&window, &canvas);
                            }) as Box<dyn FnMut()>)
                        };
                        let _ = window.add_event_listener_with_callback(
                            "resize",
                            resize_closure.as_ref().unchecked_ref(),
                        );

                        // Animation-frame loop. The closure re-requests itself
                        // through the shared slot.
                        let frame_id = Rc::new(RefCell::new(0i32));
                        let tick_slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        let tick = {
                            let window = window.clone();
                            let canvas = canvas.clone();
                            let particles = particles.clone();
                            let frame_id = frame_id.clone();
                            let tick_slot = tick_slot.clone();
                            Closure::wrap(Box::new(move || {
                                let width = canvas.width() as f64;
                                let height = canvas.height() as f64;
                                ctx.clear_rect(0.0, 0.0, width, height);
                                for particle in particles.borrow_mut().iter_mut() {
                                    particle.step(width, height);
                                    particle.draw(&ctx);
                                }
                                if let Some(tick) = tick_slot.borrow().as_ref() {
                                    if let Ok(id) = window.request_animation_frame(
                                        tick.as_ref().unchecked_ref(),
                                    ) {
                                        *frame_id.borrow_mut() = id;
                                    }
                                }
                            }) as Box<dyn FnMut()>)
                        };
                        *tick_slot.borrow_mut() = Some(tick);
                        if let Some(tick) = tick_slot.borrow().as_ref() {
                            if let Ok(id) =
                                window.request_animation_frame(tick.as_ref().unchecked_ref())
                            {
                                *frame_id.borrow_mut() = id;
                            }
                        }

                        let cleanup_window = window.clone();
                        teardown = Box::new(move || {
                            let _ = cleanup_window.cancel_animation_frame(*frame_id.borrow());
                            let _ = cleanup_window.remove_event_listener_with_callback(
                                "resize",
                                resize_closure.as_ref().unchecked_ref(),
                            );
                            tick_slot.borrow_mut().take();
                            drop(resize_closure);
                        });
                    }
                } else {
                    gloo_console::warn!("particle canvas anchor missing, skipping background");
                }

                teardown
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" />
    }
}
