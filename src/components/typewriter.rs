use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or(config::TYPING_SPEED_MS)]
    pub speed_ms: u32,
}

/// Reveals `text` one character per tick. The pending timeout is owned
/// state: a prop change or unmount drops the handle, which cancels the
/// stale timer instead of letting it race the new one.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state(|| 0usize);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let shown_setter = shown.setter();
        let count = *shown;
        let total = props.text.chars().count();
        let speed = props.speed_ms;
        let pending = pending.clone();
        let pending_cleanup = pending.clone();
        use_effect_with_deps(
            move |_| {
                if count < total {
                    let timeout = Timeout::new(speed, move || {
                        shown_setter.set(count + 1);
                    });
                    *pending.borrow_mut() = Some(timeout);
                }
                move || {
                    pending_cleanup.borrow_mut().take();
                }
            },
            (count, props.text.clone()),
        );
    }

    // Reset when the headline itself changes.
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                shown.set(0);
                || ()
            },
            props.text.clone(),
        );
    }

    let visible: String = props.text.chars().take(*shown).collect();
    html! {
        <span class="typewriter" style="white-space: pre-line;">{ visible }</span>
    }
}
