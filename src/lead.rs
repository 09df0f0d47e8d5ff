//! Referral data model.
//!
//! A [`Lead`] lives for exactly one form interaction: it is assembled from the
//! field signals on submit, validated, serialized once for the webhook, and
//! discarded when the form resets. There is no identity and no persistence.

use serde::{Deserialize, Serialize};

/// One prospective-buyer referral, using the webhook's camelCase key names
/// on the wire (`clientName`, `clientPhone`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Must be one of [`AGENTS`].
    pub agent_name: String,
    /// Free-form lot/block identifier, e.g. "Lote 15 / Quadra 7".
    pub property_interest: String,
    /// Optional free text; sent as an empty string when absent.
    pub observations: String,
    /// The partner's declaration checkbox. Must be `true` to dispatch.
    pub confirmation: bool,
}

/// Form lifecycle. `Submitted` is a display state with a single exit
/// ("Fazer nova indicação") back to `Editing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// An entry in the closed agent roster. `value` goes on the wire, `label`
/// is what the dropdown shows (they differ for Eric, whose label carries
/// his phone number).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    pub value: &'static str,
    pub label: &'static str,
}

/// The fixed set of agents a referral can be attributed to.
pub static AGENTS: [Agent; 5] = [
    Agent { value: "Maria Rosa", label: "Maria Rosa" },
    Agent { value: "Vladimir Lima", label: "Vladimir Lima" },
    Agent { value: "Anderson Bertola", label: "Anderson Bertola" },
    Agent { value: "William Fidencio", label: "William Fidencio" },
    Agent { value: "Eric Nice", label: "Eric Nice - (11) 95050 7175" },
];

/// True if `name` is a member of the roster (exact wire value match).
pub fn is_roster_agent(name: &str) -> bool {
    AGENTS.iter().any(|agent| agent.value == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_lead() -> Lead {
        Lead {
            client_name: "Ana Souza".into(),
            client_phone: "(11)98765-4321".into(),
            client_email: "ana.souza@example.com".into(),
            agent_name: "Maria Rosa".into(),
            property_interest: "Lote 15 / Quadra 7".into(),
            observations: "Prefere contato à tarde".into(),
            confirmation: true,
        }
    }

    #[test]
    fn serializes_with_webhook_key_names() {
        let value = serde_json::to_value(sample_lead()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "clientName",
            "clientPhone",
            "clientEmail",
            "agentName",
            "propertyInterest",
            "observations",
            "confirmation",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object["confirmation"], serde_json::Value::Bool(true));
    }

    #[test]
    fn wire_round_trip_preserves_every_field() {
        let lead = sample_lead();
        let json = serde_json::to_string(&lead).unwrap();
        let back: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lead);
    }

    #[test]
    fn roster_membership_is_exact() {
        assert!(is_roster_agent("Eric Nice"));
        assert!(!is_roster_agent("Eric Nice - (11) 95050 7175"));
        assert!(!is_roster_agent("eric nice"));
        assert!(!is_roster_agent(""));
    }
}
