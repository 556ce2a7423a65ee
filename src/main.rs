use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod session;
mod form {
    pub mod fields;
    pub mod flow;
    pub mod registry;
    pub mod summary;
    pub mod validate;
}
mod components {
    pub mod carousel;
    pub mod modal;
    pub mod particles;
    pub mod typewriter;
}
mod pages {
    pub mod home;
    pub mod membership;
    pub mod signin;
}

use pages::home::Home;
use pages::membership::Membership;
use pages::signin::SignIn;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/membership")]
    Membership,
    #[at("/signin")]
    SignIn,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Membership => {
            info!("Rendering Membership page");
            html! { <Membership /> }
        }
        Route::SignIn => {
            info!("Rendering Sign-in page");
            html! { <SignIn /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub logged_in: bool,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let mut teardown: Box<dyn FnOnce()> = Box::new(|| {});
                if let Some(window) = web_sys::window() {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 80.0);
                    }) as Box<dyn FnMut()>);

                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );

                    let cleanup_window = window.clone();
                    teardown = Box::new(move || {
                        let _ = cleanup_window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    });
                }
                teardown
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"LIMCOMA"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Membership} classes="nav-link">
                            {"Membership"}
                        </Link<Route>>
                    </div>
                    {
                        if !props.logged_in {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={Route::SignIn} classes="nav-login-button">
                                        {"Sign In"}
                                    </Link<Route>>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let logged_in = use_state(session::is_logged_in);

    html! {
        <BrowserRouter>
            <Nav logged_in={*logged_in} />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
