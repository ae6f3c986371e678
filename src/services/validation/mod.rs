// Validation service
// Field-level checks for the contact and location forms

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::models::intake::{Contact, LocationForm};

/// Field name (as sent on the wire) → message shown under that field.
pub type ValidationErrors = BTreeMap<&'static str, String>;

const LETTERS: &str = r"A-Za-zÀ-ÖØ-öø-ÿ";

fn alpha() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"^[{LETTERS}\s'-]+$")).expect("valid alpha regex"))
}

fn alphanum() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^[{LETTERS}0-9\s'-]+$")).expect("valid alphanumeric regex")
    })
}

fn numeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("valid numeric regex"))
}

fn email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"))
}

/// Letters, digits and the punctuation people use in door codes and directions.
fn text_with_symbols() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"^[{LETTERS}0-9\s#*@\-_.:,;!'()/?]+$"))
            .expect("valid free-text regex")
    })
}

fn required(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    pattern: &Regex,
    missing: &str,
    invalid: &str,
) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, missing.to_string());
    } else if !pattern.is_match(value) {
        errors.insert(field, invalid.to_string());
    }
}

fn optional(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    pattern: &Regex,
    invalid: &str,
) {
    let value = value.trim();
    if !value.is_empty() && !pattern.is_match(value) {
        errors.insert(field, invalid.to_string());
    }
}

pub fn validate_contact(contact: &Contact) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    required(
        &mut errors,
        "lastName",
        &contact.last_name,
        alpha(),
        "Nom requis",
        "Nom : lettres uniquement",
    );
    required(
        &mut errors,
        "firstName",
        &contact.first_name,
        alpha(),
        "Prénom requis",
        "Prénom : lettres uniquement",
    );
    required(
        &mut errors,
        "email",
        &contact.email,
        email(),
        "Email requis",
        "Format d’email invalide",
    );
    required(
        &mut errors,
        "phone",
        &contact.phone,
        phone(),
        "Téléphone requis",
        "Téléphone : 10 chiffres requis",
    );

    errors
}

pub fn validate_location(location: &LocationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    required(
        &mut errors,
        "number",
        &location.number,
        alphanum(),
        "Numéro requis",
        "Numéro : alphanumérique uniquement",
    );
    required(
        &mut errors,
        "street",
        &location.street,
        alphanum(),
        "Rue requise",
        "Rue : alphanumérique uniquement",
    );

    let postal_code = location.postal_code.trim();
    if postal_code.is_empty() {
        errors.insert("postalCode", "Code postal requis".to_string());
    } else if !numeric().is_match(postal_code) {
        errors.insert("postalCode", "Code postal : chiffres uniquement".to_string());
    } else if postal_code.len() != 5 {
        errors.insert("postalCode", "Code postal : 5 chiffres".to_string());
    }

    required(
        &mut errors,
        "city",
        &location.city,
        alpha(),
        "Ville requise",
        "Ville : lettres uniquement",
    );

    optional(
        &mut errors,
        "floor",
        &location.floor,
        numeric(),
        "Étage : chiffres uniquement",
    );
    optional(
        &mut errors,
        "accessCode1",
        &location.access_code1,
        text_with_symbols(),
        "Code d’accès 1 : caractères non autorisés",
    );
    optional(
        &mut errors,
        "accessCode2",
        &location.access_code2,
        text_with_symbols(),
        "Code d’accès 2 : caractères non autorisés",
    );
    optional(
        &mut errors,
        "notes",
        &location.notes,
        text_with_symbols(),
        "Description : caractères non autorisés",
    );

    errors
}
