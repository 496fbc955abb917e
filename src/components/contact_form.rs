use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::ContactSection;
use crate::forms::contact::{ContactForm as FormState, Field, Phase};
use crate::hooks::now_ms;
use crate::motion::entrance::Entrance;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub section: ContactSection,
}

/// Contact form. Nothing is sent anywhere: the submission is logged, a
/// thank-you note shows for a few seconds and the form clears.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let section = &props.section;
    let form = use_state(FormState::default);

    // Schedule the reset for the deadline the form chose. Dropping the
    // timeout on teardown cancels it.
    {
        let phase = form.phase();
        let form = form.clone();
        use_effect_with_deps(
            move |phase: &Phase| {
                let pending = match *phase {
                    Phase::Submitted { reset_at_ms } => {
                        let wait = (reset_at_ms - now_ms()).max(0.0).ceil() as u32;
                        Some(Timeout::new(wait, move || {
                            let mut next = (*form).clone();
                            if next.tick(reset_at_ms.max(now_ms())) {
                                log::debug!("contact form reset");
                                form.set(next);
                            }
                        }))
                    }
                    Phase::Editing => None,
                };
                move || drop(pending)
            },
            phase,
        );
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*form).clone();
            next.update(field, value);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit(now_ms()) {
                Ok(payload) => gloo_console::log!("contact form submitted:", payload),
                Err(err) => log::info!("contact form rejected: {}", err),
            }
            form.set(next);
        })
    };

    let fields = form.fields();
    let submitted = form.is_submitted();

    html! {
        <section class="contact" id={section.id.clone()}>
            <style>
                {r#"
                    .contact {
                        padding: 6rem 1rem;
                    }
                    .contact .card {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1));
                        border: 1px solid rgba(96, 165, 250, 0.2);
                        backdrop-filter: blur(16px);
                    }
                    .contact h2 {
                        margin: 0 0 1rem;
                        text-align: center;
                        font-size: clamp(2rem, 5vw, 3rem);
                        background: linear-gradient(90deg, #60a5fa, #c084fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .contact .intro {
                        text-align: center;
                        color: #94a3b8;
                        margin: 0 0 2.5rem;
                    }
                    .contact form {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                    }
                    @media (min-width: 700px) {
                        .contact form { grid-template-columns: 1fr 1fr; }
                        .contact form .wide { grid-column: 1 / -1; }
                    }
                    .contact input,
                    .contact textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.9rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        background: rgba(2, 6, 23, 0.6);
                        color: #e2e8f0;
                        font: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact input:focus,
                    .contact textarea:focus {
                        outline: none;
                        border-color: #22d3ee;
                        box-shadow: 0 0 0 3px rgba(34, 211, 238, 0.2);
                    }
                    .contact textarea {
                        min-height: 9rem;
                        resize: vertical;
                    }
                    .contact button {
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        font-size: 1rem;
                        color: white;
                        cursor: pointer;
                        background: linear-gradient(90deg, #06b6d4, #3b82f6);
                        transition: transform 0.2s ease, opacity 0.2s ease;
                    }
                    .contact button:hover { transform: scale(1.02); }
                    .contact button:active { transform: scale(0.97); }
                    .contact button:disabled { opacity: 0.6; cursor: default; }
                    .contact .note {
                        text-align: center;
                        padding: 1rem;
                        border-radius: 0.75rem;
                    }
                    .contact .note.success {
                        color: #6ee7b7;
                        background: rgba(16, 185, 129, 0.12);
                        animation: noteIn 0.4s ease-out;
                    }
                    .contact .note.error {
                        color: #fca5a5;
                        background: rgba(239, 68, 68, 0.12);
                    }
                    @keyframes noteIn {
                        from { opacity: 0; transform: scale(0.95); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <Reveal entrance={Entrance::scale(0.95)} class="card">
                <h2>{ &section.heading }</h2>
                <p class="intro">{ &section.intro }</p>
                <form {onsubmit}>
                    <input type="text" name="name" placeholder="Name" required=true
                        value={fields.name.clone()} oninput={on_input(Field::Name)} />
                    <input type="email" name="email" placeholder="Email" required=true
                        value={fields.email.clone()} oninput={on_input(Field::Email)} />
                    <input type="tel" name="phone" placeholder="Phone"
                        value={fields.phone.clone()} oninput={on_input(Field::Phone)} />
                    <input type="text" name="company" placeholder="Company"
                        value={fields.company.clone()} oninput={on_input(Field::Company)} />
                    <textarea class="wide" name="message" placeholder="Message" required=true
                        value={fields.message.clone()} oninput={on_input(Field::Message)} />
                    <button class="wide" type="submit" disabled={submitted}>{ &section.submit_label }</button>
                    {
                        if submitted {
                            html! { <div class="wide note success">{ &section.success }</div> }
                        } else if let Some(err) = form.rejection() {
                            html! { <div class="wide note error">{ err.to_string() }</div> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </Reveal>
        </section>
    }
}
