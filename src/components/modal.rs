use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    pub children: Children,
    /// Extra buttons under the body, e.g. the confirm button.
    #[prop_or_default]
    pub footer: Html,
}

/// Dialog surface shared by the incomplete-fields and confirm-submission
/// dialogs. Clicking the backdrop or the close button dismisses it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_dialog = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_btn = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={on_dialog}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="modal-close" onclick={on_close_btn}>{"×"}</button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
                <div class="modal-footer">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}
