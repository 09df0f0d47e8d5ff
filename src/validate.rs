//! Field validators for the referral form.
//!
//! Each validator is a pure predicate over the raw field value, returning
//! the user-facing message on failure. The form re-runs individual
//! validators on blur/change and the whole set on submit; dispatch to the
//! webhook is blocked until [`FieldErrors::is_clear`] holds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lead::{is_roster_agent, Lead};

// Advisory client-side check, not RFC 5322: one `@`, no whitespace, a dot
// somewhere in the domain.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate_name(value: &str) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Nome é obrigatório");
    }
    if !trimmed.contains(' ') {
        return Err("Por favor, informe nome e sobrenome");
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Telefone é obrigatório");
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Email é obrigatório");
    }
    if !EMAIL_RE.is_match(value.trim()) {
        return Err("Email inválido");
    }
    Ok(())
}

pub fn validate_agent(value: &str) -> Result<(), &'static str> {
    if !is_roster_agent(value) {
        return Err("Selecione um corretor");
    }
    Ok(())
}

pub fn validate_property(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Informe o lote/quadra de interesse");
    }
    Ok(())
}

pub fn validate_confirmation(confirmed: bool) -> Result<(), &'static str> {
    if !confirmed {
        return Err("Você precisa confirmar esta declaração");
    }
    Ok(())
}

/// One slot per validated field. Observations are free-form and have none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
    pub agent: Option<&'static str>,
    pub property: Option<&'static str>,
    pub confirmation: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.agent.is_none()
            && self.property.is_none()
            && self.confirmation.is_none()
    }
}

/// Run every validator against a candidate lead.
pub fn validate_lead(lead: &Lead) -> FieldErrors {
    FieldErrors {
        name: validate_name(&lead.client_name).err(),
        phone: validate_phone(&lead.client_phone).err(),
        email: validate_email(&lead.client_email).err(),
        agent: validate_agent(&lead.agent_name).err(),
        property: validate_property(&lead.property_interest).err(),
        confirmation: validate_confirmation(lead.confirmation).err(),
    }
}
