use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::form::fields::{Field, FieldValue, FormSnapshot, PhotoField};
use crate::form::flow::{FlowState, SubmitFlow};
use crate::{config, session};

const SERVICE_OPTIONS: &[&str] = &["Savings", "Loans", "Feeds Supply", "Training"];
const CIVIL_STATUS_OPTIONS: &[&str] = &["Single", "Married", "Widowed", "Separated"];

/// Membership application page. Guarded by the per-tab session flag; all
/// validation and the confirmation summary run client-side, and nothing is
/// ever sent anywhere.
#[function_component(Membership)]
pub fn membership() -> Html {
    let logged_in = session::is_logged_in();

    // Session guard: bounce to sign-in before any page logic matters.
    {
        use_effect_with_deps(
            move |_| {
                if !session::is_logged_in() {
                    gloo_console::warn!("no session flag, redirecting to sign-in");
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(config::SIGNIN_PATH);
                    }
                }
                || ()
            },
            (),
        );
    }

    let last_name = use_state(String::new);
    let first_name = use_state(String::new);
    let middle_name = use_state(String::new);
    // Pre-filled from the session when the sign-in page stored an email.
    let email = use_state(session::stored_email);
    let contact_number = use_state(String::new);
    let address = use_state(String::new);
    let birth_date = use_state(String::new);
    let gender = use_state(|| None::<String>);
    let civil_status = use_state(String::new);
    let occupation = use_state(String::new);
    let services = use_state(Vec::<String>::new);
    let agreement = use_state(|| false);
    let photo_name = use_state(|| None::<String>);
    let preview_url = use_state(|| None::<String>);

    let flow = use_state(SubmitFlow::new);
    let banner_timer = use_mut_ref(|| None::<Timeout>);

    // Revoke the previous preview URL when a new file replaces it, and the
    // last one on unmount.
    {
        let previous = (*preview_url).clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(url) = previous {
                        let _ = web_sys::Url::revoke_object_url(&url);
                    }
                }
            },
            (*preview_url).clone(),
        );
    }

    // Auto-hide the success banner. Dropping the handle on re-trigger or
    // unmount cancels the stale timer.
    {
        let flow = flow.clone();
        let banner_timer = banner_timer.clone();
        let submitted = matches!(flow.state(), FlowState::Submitted);
        use_effect_with_deps(
            move |showing: &bool| {
                if *showing {
                    let flow_handle = flow.clone();
                    let timer = Timeout::new(config::BANNER_HIDE_MS, move || {
                        let mut next = (*flow_handle).clone();
                        next.acknowledge();
                        flow_handle.set(next);
                    });
                    *banner_timer.borrow_mut() = Some(timer);
                }
                let banner_timer = banner_timer.clone();
                move || {
                    banner_timer.borrow_mut().take();
                }
            },
            submitted,
        );
    }

    let snapshot = {
        let last_name = last_name.clone();
        let first_name = first_name.clone();
        let middle_name = middle_name.clone();
        let email = email.clone();
        let contact_number = contact_number.clone();
        let address = address.clone();
        let birth_date = birth_date.clone();
        let gender = gender.clone();
        let civil_status = civil_status.clone();
        let occupation = occupation.clone();
        let services = services.clone();
        let agreement = agreement.clone();
        let photo_name = photo_name.clone();
        move || -> FormSnapshot {
            // Checked services in document order, whatever the click order was.
            let checked: Vec<String> = SERVICE_OPTIONS
                .iter()
                .filter(|option| services.contains(&option.to_string()))
                .map(|option| option.to_string())
                .collect();
            FormSnapshot {
                fields: vec![
                    Field::required("last_name", FieldValue::Text((*last_name).clone())),
                    Field::required("first_name", FieldValue::Text((*first_name).clone())),
                    Field::optional("middle_name", FieldValue::Text((*middle_name).clone())),
                    Field::required("email", FieldValue::Text((*email).clone())),
                    Field::required(
                        "contact_number",
                        FieldValue::Text((*contact_number).clone()),
                    ),
                    Field::required("address", FieldValue::TextArea((*address).clone())),
                    Field::required("birth_date", FieldValue::Text((*birth_date).clone())),
                    Field::required("gender", FieldValue::RadioGroup((*gender).clone())),
                    Field::required("civil_status", FieldValue::Select((*civil_status).clone())),
                    Field::optional("occupation", FieldValue::Text((*occupation).clone())),
                    Field::optional("services", FieldValue::CheckboxGroup(checked)),
                    Field::required("agreement", FieldValue::Checkbox(*agreement)),
                ],
                photo: PhotoField {
                    required: true,
                    file_name: (*photo_name).clone(),
                },
            }
        }
    };

    let on_submit = {
        let flow = flow.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |e: SubmitEvent| {
            // This flow never performs a real submission.
            e.prevent_default();
            let form = snapshot();
            let mut next = (*flow).clone();
            next.submit(Some(&form));
            match next.state() {
                FlowState::Incomplete(labels) => {
                    gloo_console::log!("submit blocked, missing fields:", labels.len() as u32)
                }
                FlowState::Confirming(_) => gloo_console::log!("submit valid, confirming"),
                _ => {}
            }
            flow.set(next);
        })
    };

    let on_dismiss = {
        let flow = flow.clone();
        Callback::from(move |_: ()| {
            let mut next = (*flow).clone();
            next.dismiss();
            flow.set(next);
        })
    };

    let on_confirm = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*flow).clone();
            next.confirm();
            flow.set(next);
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })
    };

    let on_photo_change = {
        let photo_name = photo_name.clone();
        let preview_url = preview_url.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            photo_name.set(Some(file.name()));
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => preview_url.set(Some(url)),
                Err(_) => gloo_console::warn!("could not create photo preview URL"),
            }
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        let sure = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to logout?").ok())
            .unwrap_or(false);
        if !sure {
            return;
        }
        session::clear_login();
        gloo_console::log!("member logged out");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(config::SIGNIN_PATH);
        }
    });

    // Redirect is in flight; render nothing the guard would have to undo.
    if !logged_in {
        return html! {};
    }

    let toggle_service = |option: &'static str| {
        let services = services.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*services).clone();
            if input.checked() {
                if !current.contains(&option.to_string()) {
                    current.push(option.to_string());
                }
            } else {
                current.retain(|value| value != option);
            }
            services.set(current);
        })
    };

    let pick_gender = |option: &'static str| {
        let gender = gender.clone();
        Callback::from(move |_: Event| gender.set(Some(option.to_string())))
    };

    html! {
        <div class="membership-page">
            <style>
                {r#"
                    .membership-page {
                        min-height: 100vh;
                        background: #f4f8f5;
                        color: #15301e;
                        padding: 40px 6vw 80px;
                    }
                    .membership-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 28px;
                    }
                    .logout-button {
                        background: none;
                        border: 1px solid #2e8b57;
                        color: #2e8b57;
                        border-radius: 8px;
                        padding: 8px 18px;
                        cursor: pointer;
                    }
                    .submit-banner {
                        background: #2e8b57;
                        color: #fff;
                        border-radius: 10px;
                        padding: 14px 20px;
                        margin-bottom: 22px;
                    }
                    .membership-form {
                        display: grid;
                        gap: 16px;
                        max-width: 640px;
                    }
                    .membership-form label { font-weight: 600; display: block; margin-bottom: 4px; }
                    .membership-form input[type="text"],
                    .membership-form input[type="email"],
                    .membership-form input[type="date"],
                    .membership-form select,
                    .membership-form textarea {
                        width: 100%;
                        padding: 10px;
                        border: 1px solid #b9cfc0;
                        border-radius: 8px;
                    }
                    .field-row { display: flex; gap: 18px; flex-wrap: wrap; }
                    .photo-preview { display: block; margin-top: 10px; width: 120px; height: 120px; object-fit: cover; border-radius: 8px; }
                    .submit-button {
                        background: #2e8b57;
                        color: #fff;
                        border: none;
                        border-radius: 10px;
                        padding: 14px;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.55);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 50;
                    }
                    .modal-dialog {
                        background: #fff;
                        border-radius: 12px;
                        width: min(520px, 92vw);
                        max-height: 80vh;
                        overflow-y: auto;
                        padding: 20px;
                    }
                    .modal-header { display: flex; justify-content: space-between; align-items: center; }
                    .modal-close { background: none; border: none; font-size: 1.6rem; cursor: pointer; }
                    .modal-footer { text-align: right; margin-top: 14px; }
                    .confirm-button {
                        background: #2e8b57;
                        color: #fff;
                        border: none;
                        border-radius: 8px;
                        padding: 10px 22px;
                        cursor: pointer;
                    }
                    .summary-table { width: 100%; border-collapse: collapse; }
                    .summary-table td { padding: 6px 8px; border-bottom: 1px solid #e3ece6; vertical-align: top; }
                    .summary-table td:first-child { font-weight: 600; white-space: nowrap; }
                "#}
            </style>

            <div class="membership-header">
                <h1>{"Membership Application"}</h1>
                <button class="logout-button" onclick={on_logout}>{"Logout"}</button>
            </div>

            {
                if matches!(flow.state(), FlowState::Submitted) {
                    html! {
                        <div class="submit-banner">
                            {"Application submitted! Thank you for joining LIMCOMA."}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <form class="membership-form" onsubmit={on_submit}>
                <div class="field-row">
                    <div>
                        <label for="last_name">{"Last Name"}</label>
                        <input
                            id="last_name"
                            type="text"
                            value={(*last_name).clone()}
                            onchange={let last_name = last_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                last_name.set(input.value());
                            }}
                        />
                    </div>
                    <div>
                        <label for="first_name">{"First Name"}</label>
                        <input
                            id="first_name"
                            type="text"
                            value={(*first_name).clone()}
                            onchange={let first_name = first_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                first_name.set(input.value());
                            }}
                        />
                    </div>
                    <div>
                        <label for="middle_name">{"Middle Name (optional)"}</label>
                        <input
                            id="middle_name"
                            type="text"
                            value={(*middle_name).clone()}
                            onchange={let middle_name = middle_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                middle_name.set(input.value());
                            }}
                        />
                    </div>
                </div>

                <div>
                    <label for="autoEmail">{"Email Address"}</label>
                    <input
                        id="autoEmail"
                        type="email"
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>

                <div>
                    <label for="contact_number">{"Contact Number"}</label>
                    <input
                        id="contact_number"
                        type="text"
                        value={(*contact_number).clone()}
                        onchange={let contact_number = contact_number.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            contact_number.set(input.value());
                        }}
                    />
                </div>

                <div>
                    <label for="address">{"Home Address"}</label>
                    <textarea
                        id="address"
                        rows="2"
                        value={(*address).clone()}
                        onchange={let address = address.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            address.set(input.value());
                        }}
                    />
                </div>

                <div>
                    <label for="birth_date">{"Date of Birth"}</label>
                    <input
                        id="birth_date"
                        type="date"
                        value={(*birth_date).clone()}
                        onchange={let birth_date = birth_date.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            birth_date.set(input.value());
                        }}
                    />
                </div>

                <div>
                    <label>{"Gender"}</label>
                    <label>
                        <input
                            type="radio"
                            name="gender"
                            checked={(*gender).as_deref() == Some("Male")}
                            onchange={pick_gender("Male")}
                        />
                        {" Male"}
                    </label>
                    <label>
                        <input
                            type="radio"
                            name="gender"
                            checked={(*gender).as_deref() == Some("Female")}
                            onchange={pick_gender("Female")}
                        />
                        {" Female"}
                    </label>
                </div>

                <div>
                    <label for="civil_status">{"Civil Status"}</label>
                    <select
                        id="civil_status"
                        onchange={let civil_status = civil_status.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            civil_status.set(select.value());
                        }}
                    >
                        <option value="" selected={civil_status.is_empty()}>{"-- select --"}</option>
                        {
                            CIVIL_STATUS_OPTIONS.iter().map(|option| html! {
                                <option value={*option} selected={*civil_status == *option}>{*option}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div>
                    <label for="occupation">{"Occupation (optional)"}</label>
                    <input
                        id="occupation"
                        type="text"
                        value={(*occupation).clone()}
                        onchange={let occupation = occupation.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            occupation.set(input.value());
                        }}
                    />
                </div>

                <div>
                    <label>{"Preferred Services"}</label>
                    {
                        SERVICE_OPTIONS.iter().map(|option| html! {
                            <label>
                                <input
                                    type="checkbox"
                                    name="services"
                                    checked={services.contains(&option.to_string())}
                                    onchange={toggle_service(*option)}
                                />
                                { format!(" {option}") }
                            </label>
                        }).collect::<Html>()
                    }
                </div>

                <div>
                    <label for="photoInput">{"2x2 Photo"}</label>
                    <input id="photoInput" type="file" accept="image/*" onchange={on_photo_change} />
                    {
                        if let Some(url) = (*preview_url).clone() {
                            html! { <img id="photoPreview" class="photo-preview" src={url} alt="2x2 photo preview" /> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div>
                    <label>
                        <input
                            type="checkbox"
                            checked={*agreement}
                            onchange={let agreement = agreement.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                agreement.set(input.checked());
                            }}
                        />
                        {" I consent to the processing of my personal data for this application."}
                    </label>
                </div>

                <button class="submit-button" type="submit">{"Submit Application"}</button>
            </form>

            {
                match flow.state() {
                    FlowState::Incomplete(labels) => html! {
                        <Modal
                            title="Incomplete Application"
                            open={true}
                            on_close={on_dismiss.clone()}
                        >
                            <p>{"Please fill out the following fields:"}</p>
                            <ul>
                                { for labels.iter().map(|label| html! { <li>{ label.clone() }</li> }) }
                            </ul>
                        </Modal>
                    },
                    FlowState::Confirming(rows) => html! {
                        <Modal
                            title="Confirm Submission"
                            open={true}
                            on_close={on_dismiss.clone()}
                            footer={html! {
                                <button class="confirm-button" onclick={on_confirm.clone()}>
                                    {"Confirm"}
                                </button>
                            }}
                        >
                            <p>{"Please review your application before confirming:"}</p>
                            <table class="summary-table">
                                <tbody>
                                    {
                                        for rows.iter().map(|row| html! {
                                            <tr>
                                                <td>{ row.label.clone() }</td>
                                                <td>{ row.value.clone() }</td>
                                            </tr>
                                        })
                                    }
                                </tbody>
                            </table>
                        </Modal>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}
