use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::form_state::{ConsoleSink, ContactFormState};
use crate::contact::validation::{Field, ServiceOption};
use crate::observers::reveal::use_reveal;

#[derive(Debug, PartialEq)]
pub enum ContactAction {
    Edit(Field, String),
    Submit,
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Submit => {
                next.submit(&ConsoleSink);
            }
        }
        next.into()
    }
}

/// Reads the `name`/`value` pair off whichever control fired the event.
fn read_edit(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some((input.name(), input.value()))
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        Some((textarea.name(), textarea.value()))
    } else {
        target
            .dyn_ref::<HtmlSelectElement>()
            .map(|select| (select.name(), select.value()))
    }
}

/// Maps a control's `name` attribute onto a field edit. Unknown names are
/// logged and dropped.
fn edit_action(name: &str, value: String) -> Option<ContactAction> {
    match name.parse::<Field>() {
        Ok(field) => Some(ContactAction::Edit(field, value)),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

fn field_class(state: &ContactFormState, field: Field) -> Classes {
    classes!("form-control", state.errors().contains(field).then_some("invalid"))
}

fn field_error(state: &ContactFormState, field: Field) -> Html {
    match state.errors().get(field) {
        Some(error) => html! {
            <p id={field.error_id()} class="field-error" role="alert">
                {error.to_string()}
            </p>
        },
        None => html! {},
    }
}

fn described_by(state: &ContactFormState, field: Field) -> Option<&'static str> {
    state.errors().contains(field).then_some(field.error_id())
}

fn invalid_attr(state: &ContactFormState, field: Field) -> &'static str {
    if state.errors().contains(field) {
        "true"
    } else {
        "false"
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), config::CONTACT_REVEAL_MARGIN_PX);
    let state = use_reducer(ContactFormState::default);

    let on_edit = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let action = read_edit(&e).and_then(|(name, value)| edit_action(&name, value));
            if let Some(action) = action {
                state.dispatch(action);
            }
        })
    };
    let on_input = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| on_edit.emit(e.into()))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };

    let form = state.form();

    html! {
        <section id="contact" ref={section_ref} class="contact" aria-labelledby="contact-heading">
            <style>
                {r#"
                    .contact {
                        padding: 5rem 1.5rem;
                        background: #fff;
                    }
                    .contact-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: start;
                    }
                    @media (min-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr 1fr;
                            gap: 5rem;
                        }
                    }
                    .contact-copy h2 {
                        font-size: 2.25rem;
                        font-weight: 800;
                        color: var(--navy);
                        margin: 0 0 1rem;
                    }
                    .contact-copy p {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.6;
                    }
                    .contact-copy a {
                        font-weight: 600;
                        color: var(--navy);
                        text-underline-offset: 2px;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                        border: 1px solid #e2e8f0;
                        background: #f8fafc;
                        border-radius: 0.75rem;
                        padding: 2rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: var(--navy);
                        margin-bottom: 0.375rem;
                    }
                    .contact-form .optional {
                        font-weight: 400;
                        color: #94a3b8;
                    }
                    .form-control {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid #cbd5e1;
                        border-radius: 0.5rem;
                        background: #fff;
                        padding: 0.625rem 1rem;
                        color: #0f172a;
                        font: inherit;
                    }
                    .form-control:focus {
                        outline: 2px solid var(--navy);
                        border-color: var(--navy);
                    }
                    .form-control.invalid { border-color: #dc2626; }
                    textarea.form-control { resize: vertical; }
                    .field-error, .send-error {
                        margin: 0.25rem 0 0;
                        font-size: 0.875rem;
                        color: #dc2626;
                    }
                    .submit-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        width: 100%;
                        background: var(--navy);
                        color: #fff;
                        font-weight: 700;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.5rem;
                        cursor: pointer;
                    }
                    .submit-button:hover { background: var(--navy-light); }
                    .confirmation {
                        border: 1px solid #bbf7d0;
                        background: #f0fdf4;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .confirmation-icon {
                        font-size: 2.5rem;
                        color: #16a34a;
                        margin-bottom: 1rem;
                    }
                    .confirmation h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: var(--navy);
                        margin: 0 0 0.5rem;
                    }
                    .confirmation p { color: #475569; margin: 0; }
                "#}
            </style>
            <div class="section-container contact-grid">
                <div class={classes!("contact-copy", reveal.class())}>
                    <div class="reveal-item">
                        <h2 id="contact-heading">{"Let's have a chat"}</h2>
                        <p>
                            {"No hard sell, no jargon. Just a straight conversation about where your business is now and where you want it to be. Fill in the form and we will get back to you within a working day."}
                        </p>
                        <p>
                            {"Prefer to just call? Ring us on "}
                            <a href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a>
                            {" during working hours. If we miss you, leave a message and we will ring you back the same day."}
                        </p>
                    </div>
                </div>

                <div class={reveal.class()}>
                    <div class="reveal-item" style="animation-delay: 150ms;">
                    if state.is_submitted() {
                        <div class="confirmation" role="status">
                            <div class="confirmation-icon" aria-hidden="true">{"✓"}</div>
                            <h3>{"Message received"}</h3>
                            <p>{state.greeting()}</p>
                        </div>
                    } else {
                        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                            <div>
                                <label for={Field::Name.input_id()}>{"Your name"}</label>
                                <input
                                    id={Field::Name.input_id()}
                                    name={Field::Name.as_str()}
                                    type="text"
                                    autocomplete="name"
                                    class={field_class(&state, Field::Name)}
                                    value={form.name.clone()}
                                    oninput={on_input.clone()}
                                    aria-invalid={invalid_attr(&state, Field::Name)}
                                    aria-describedby={described_by(&state, Field::Name)}
                                    placeholder="e.g. James Wilson"
                                />
                                { field_error(&state, Field::Name) }
                            </div>

                            <div>
                                <label for={Field::Contact.input_id()}>{"Email or phone number"}</label>
                                <input
                                    id={Field::Contact.input_id()}
                                    name={Field::Contact.as_str()}
                                    type="text"
                                    autocomplete="email tel"
                                    class={field_class(&state, Field::Contact)}
                                    value={form.contact.clone()}
                                    oninput={on_input.clone()}
                                    aria-invalid={invalid_attr(&state, Field::Contact)}
                                    aria-describedby={described_by(&state, Field::Contact)}
                                    placeholder="e.g. james@email.com or 07700 900123"
                                />
                                { field_error(&state, Field::Contact) }
                            </div>

                            <div>
                                <label for={Field::Service.input_id()}>{"What do you need help with?"}</label>
                                <select
                                    id={Field::Service.input_id()}
                                    name={Field::Service.as_str()}
                                    class={field_class(&state, Field::Service)}
                                    onchange={on_edit.clone()}
                                    aria-invalid={invalid_attr(&state, Field::Service)}
                                    aria-describedby={described_by(&state, Field::Service)}
                                >
                                    <option value="" disabled={true} selected={form.service.is_empty()}>
                                        {"Pick a service..."}
                                    </option>
                                    { for ServiceOption::ALL.into_iter().map(|option| html! {
                                        <option
                                            key={option.label()}
                                            value={option.label()}
                                            selected={form.service == option.label()}
                                        >
                                            {option.label()}
                                        </option>
                                    }) }
                                </select>
                                { field_error(&state, Field::Service) }
                            </div>

                            <div>
                                <label for={Field::Message.input_id()}>
                                    {"Anything else you want us to know? "}
                                    <span class="optional">{"(optional)"}</span>
                                </label>
                                <textarea
                                    id={Field::Message.input_id()}
                                    name={Field::Message.as_str()}
                                    rows="4"
                                    class="form-control"
                                    value={form.message.clone()}
                                    oninput={on_input}
                                    placeholder="Tell us a bit about your business and what you are looking for."
                                />
                            </div>

                            if let Some(message) = state.send_error() {
                                <p class="send-error" role="alert">{message}</p>
                            }

                            <button type="submit" class="submit-button">
                                {"Send message"}
                                <span aria-hidden="true">{"➤"}</span>
                            </button>
                        </form>
                    }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected_empty_form() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.submit(&ConsoleSink);
        state
    }

    #[test]
    fn errors_point_at_their_paragraph() {
        let state = rejected_empty_form();
        for field in Field::ALL {
            if state.errors().contains(field) {
                assert_eq!(described_by(&state, field), Some(field.error_id()));
                assert_eq!(invalid_attr(&state, field), "true");
            } else {
                assert_eq!(described_by(&state, field), None);
                assert_eq!(invalid_attr(&state, field), "false");
            }
        }
        assert_eq!(described_by(&state, Field::Name), Some("name-error"));
        assert_eq!(described_by(&state, Field::Message), None);
    }

    #[test]
    fn edited_field_drops_its_description() {
        let mut state = rejected_empty_form();
        state.edit(Field::Contact, "x".to_string());
        assert_eq!(described_by(&state, Field::Contact), None);
        assert_eq!(invalid_attr(&state, Field::Contact), "false");
        assert_eq!(described_by(&state, Field::Service), Some("service-error"));
    }

    #[test]
    fn control_names_map_onto_edits() {
        for field in Field::ALL {
            assert_eq!(
                edit_action(field.as_str(), "v".to_string()),
                Some(ContactAction::Edit(field, "v".to_string()))
            );
        }
        assert_eq!(edit_action("contact-name", "v".to_string()), None);
        assert_eq!(edit_action("", String::new()), None);
    }

    #[test]
    fn dom_ids_are_distinct() {
        let mut ids: Vec<&str> = Field::ALL
            .into_iter()
            .flat_map(|field| [field.input_id(), field.error_id()])
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Field::ALL.len() * 2);
    }
}
