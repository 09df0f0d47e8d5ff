//! The referral form: field signals, eager/blur validation, the
//! Editing → Submitting → Submitted lifecycle, and the QR back-link panel.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config;
use crate::lead::{FormStatus, Lead, AGENTS};
use crate::phone::format_phone;
use crate::qr::qr_svg;
use crate::submit::send_lead;
use crate::validate::{
    validate_agent, validate_confirmation, validate_email, validate_lead, validate_name,
    validate_phone, validate_property, FieldErrors,
};

#[component]
pub fn ReferralForm() -> impl IntoView {
    let client_name = RwSignal::new(String::new());
    let client_phone = RwSignal::new(String::new());
    let client_email = RwSignal::new(String::new());
    let agent_name = RwSignal::new(String::new());
    let property_interest = RwSignal::new(String::new());
    let observations = RwSignal::new(String::new());
    let confirmation = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::default());
    let status = RwSignal::new(FormStatus::Editing);

    let current_lead = move || Lead {
        client_name: client_name.get_untracked(),
        client_phone: client_phone.get_untracked(),
        client_email: client_email.get_untracked(),
        agent_name: agent_name.get_untracked(),
        property_interest: property_interest.get_untracked(),
        observations: observations.get_untracked(),
        confirmation: confirmation.get_untracked(),
    };

    let reset_fields = move || {
        client_name.set(String::new());
        client_phone.set(String::new());
        client_email.set(String::new());
        agent_name.set(String::new());
        property_interest.set(String::new());
        observations.set(String::new());
        confirmation.set(false);
        errors.set(FieldErrors::default());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // The button is disabled while submitting, but an Enter keypress
        // still fires the submit event. One request in flight, ever.
        if status.get_untracked() == FormStatus::Submitting {
            return;
        }

        let lead = current_lead();
        let field_errors = validate_lead(&lead);
        if !field_errors.is_clear() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());
        status.set(FormStatus::Submitting);

        leptos::task::spawn_local(async move {
            match send_lead(&lead).await {
                Ok(()) => {
                    reset_fields();
                    status.set(FormStatus::Submitted);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("erro ao enviar indicação: {err}").into(),
                    );
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Ocorreu um erro ao enviar o formulário. \
                             Por favor, tente novamente.",
                        );
                    }
                    // Entered values stay put so the user can retry.
                    status.set(FormStatus::Editing);
                }
            }
        });
    };

    view! {
        <div class="referral-form">
            <h1 class="form-title">"Indicação de Cliente Lago Azul"</h1>

            <Show
                when=move || status.get() == FormStatus::Submitted
                fallback=move || {
                    view! {
                        <form class="form-body" on:submit=on_submit>
                            <div class="form-field">
                                <label for="client-name">"Nome do Cliente"</label>
                                <input
                                    id="client-name"
                                    placeholder="Nome e sobrenome"
                                    prop:value=move || client_name.get()
                                    class:invalid=move || errors.get().name.is_some()
                                    on:input=move |ev| client_name.set(event_target_value(&ev))
                                    on:blur=move |_| {
                                        errors.update(|e| {
                                            e.name = validate_name(&client_name.get_untracked()).err()
                                        })
                                    }
                                />
                                <ErrorMsg message=Signal::derive(move || errors.get().name) />
                            </div>

                            <div class="form-field">
                                <label for="client-phone">"Telefone/WhatsApp do Cliente"</label>
                                <input
                                    id="client-phone"
                                    placeholder="(00)00000-0000"
                                    prop:value=move || client_phone.get()
                                    on:input=move |ev| {
                                        client_phone.set(format_phone(&event_target_value(&ev)))
                                    }
                                    on:blur=move |_| {
                                        errors.update(|e| {
                                            e.phone = validate_phone(&client_phone.get_untracked()).err()
                                        })
                                    }
                                />
                                <ErrorMsg message=Signal::derive(move || errors.get().phone) />
                            </div>

                            <div class="form-field">
                                <label for="client-email">"Email do Cliente"</label>
                                <input
                                    id="client-email"
                                    type="email"
                                    placeholder="email@exemplo.com"
                                    prop:value=move || client_email.get()
                                    class:invalid=move || errors.get().email.is_some()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        // Don't flag a half-typed address; re-check
                                        // once it could plausibly be complete.
                                        if value.contains('@') {
                                            errors.update(|e| e.email = validate_email(&value).err());
                                        }
                                        client_email.set(value);
                                    }
                                    on:blur=move |_| {
                                        errors.update(|e| {
                                            e.email = validate_email(&client_email.get_untracked()).err()
                                        })
                                    }
                                />
                                <ErrorMsg message=Signal::derive(move || errors.get().email) />
                            </div>

                            <div class="form-field">
                                <label for="agent-name">"Nome do Corretor"</label>
                                <select
                                    id="agent-name"
                                    prop:value=move || agent_name.get()
                                    class:invalid=move || errors.get().agent.is_some()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        errors.update(|e| e.agent = validate_agent(&value).err());
                                        agent_name.set(value);
                                    }
                                >
                                    <option value="" disabled selected>
                                        "Selecione um corretor"
                                    </option>
                                    {AGENTS
                                        .iter()
                                        .map(|agent| {
                                            view! {
                                                <option value=agent.value>{agent.label}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                                <ErrorMsg message=Signal::derive(move || errors.get().agent) />
                            </div>

                            <div class="form-field">
                                <label for="property-interest">
                                    "Terreno de Interesse (Lote/Quadra)"
                                </label>
                                <input
                                    id="property-interest"
                                    placeholder="Ex: Lote 15 / Quadra 7"
                                    prop:value=move || property_interest.get()
                                    class:invalid=move || errors.get().property.is_some()
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        if value.len() > 3 {
                                            errors.update(|e| {
                                                e.property = validate_property(&value).err()
                                            });
                                        }
                                        property_interest.set(value);
                                    }
                                    on:blur=move |_| {
                                        errors.update(|e| {
                                            e.property =
                                                validate_property(&property_interest.get_untracked())
                                                    .err()
                                        })
                                    }
                                />
                                <ErrorMsg message=Signal::derive(move || errors.get().property) />
                            </div>

                            <div class="form-field">
                                <label for="observations">"Observações"</label>
                                <textarea
                                    id="observations"
                                    placeholder="Informações adicionais sobre o cliente ou interesse"
                                    prop:value=move || observations.get()
                                    on:input=move |ev| observations.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div
                                class="confirmation-box"
                                class:invalid=move || errors.get().confirmation.is_some()
                            >
                                <label class="confirmation-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || confirmation.get()
                                        on:change=move |ev| {
                                            let checked = event_target_checked(&ev);
                                            errors.update(|e| {
                                                e.confirmation =
                                                    validate_confirmation(checked).err()
                                            });
                                            confirmation.set(checked);
                                        }
                                    />
                                    <span>
                                        "Confirmo que este cliente foi indicado por mim e que \
                                         autorizou o contato pelo time da FPoles e/ou Skan Hous."
                                    </span>
                                </label>
                                <ErrorMsg message=Signal::derive(move || {
                                    errors.get().confirmation
                                }) />
                            </div>

                            <button
                                type="submit"
                                class="submit-btn"
                                disabled=move || status.get() == FormStatus::Submitting
                            >
                                {move || {
                                    if status.get() == FormStatus::Submitting {
                                        "Enviando..."
                                    } else {
                                        "Enviar a Indicação"
                                    }
                                }}
                            </button>
                        </form>
                    }
                }
            >
                <SuccessPanel status=status />
            </Show>

            <QrPanel />
        </div>
    }
}

/// Inline validation message under a field. Renders nothing when clear.
#[component]
fn ErrorMsg(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Terminal display state after a successful dispatch, with the single
/// exit back to a fresh form.
#[component]
fn SuccessPanel(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        <div class="success-panel">
            <div class="success-check">"✓"</div>
            <h3>"Indicação enviada com sucesso!"</h3>
            <p>"Obrigado por sua indicação. Nossa equipe entrará em contato em breve."</p>
            <button class="btn-outline" on:click=move |_| status.set(FormStatus::Editing)>
                "Fazer nova indicação"
            </button>
        </div>
    }
}

/// Static QR code pointing back at this page. Falls back to a plain link
/// if encoding ever fails.
#[component]
fn QrPanel() -> impl IntoView {
    view! {
        <div class="qr-panel">
            <p>"Escaneie o QR code para acessar este formulário"</p>
            {match qr_svg(config::FORM_URL, config::QR_SIZE) {
                Ok(markup) => view! { <div class="qr-box" inner_html=markup></div> }.into_any(),
                Err(_) => {
                    view! {
                        <a href=config::FORM_URL target="_blank">{config::FORM_URL}</a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
