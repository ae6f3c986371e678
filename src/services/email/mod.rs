// Email service
// Renders an intake request into the message the artisan receives

use crate::models::availability::AvailabilityInterval;
use crate::models::intake::IntakeRequest;
use crate::utils::date;

pub const NOT_PROVIDED: &str = "Non renseigné";

pub fn build_subject(request: &IntakeRequest) -> String {
    format!(
        "Nouvelle demande d’intervention - {} {}",
        request.contact.last_name, request.contact.first_name
    )
}

/// One line per interval, or the placeholder when nothing was booked.
pub fn availability_lines(availabilities: &[AvailabilityInterval]) -> String {
    if availabilities.is_empty() {
        return NOT_PROVIDED.to_string();
    }

    availabilities
        .iter()
        .map(|a| format!("- {} : {} → {}", date::format_iso(a.day), a.start, a.end))
        .collect::<Vec<_>>()
        .join("\n")
}

fn optional_line(label: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("- {} : {}", label, value)
    }
}

pub fn build_email_text(request: &IntakeRequest, artisan_name: &str) -> String {
    let contact = &request.contact;
    let location = &request.location;
    let problem = request.last_client_message().unwrap_or(NOT_PROVIDED);

    let lines = [
        "Nouvelle demande d’intervention".to_string(),
        String::new(),
        "🧍 Client :".to_string(),
        format!("- Nom : {} {}", contact.last_name, contact.first_name),
        format!("- Email : {}", contact.email),
        format!("- Téléphone : {}", contact.phone),
        String::new(),
        "📍 Lieu d’intervention :".to_string(),
        format!("- Adresse : {} {}", location.number, location.street),
        format!("- Code postal : {}", location.postal_code),
        format!("- Ville : {}", location.city),
        format!("- Type de logement : {}", location.dwelling),
        optional_line("Étage", &location.floor),
        optional_line("Code d’accès 1", &location.access_code1),
        optional_line("Code d’accès 2", &location.access_code2),
        optional_line("Notes", &location.notes),
        format!("- Parking : {}", location.parking),
        String::new(),
        "🛠 Description du problème (dernier message du client) :".to_string(),
        problem.to_string(),
        String::new(),
        "📆 Disponibilités proposées :".to_string(),
        availability_lines(&request.availabilities),
        String::new(),
        format!("— Message généré automatiquement par le formulaire {}.", artisan_name),
    ];

    // Blank separators go too; the sections are told apart by their headings.
    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_email_html(request: &IntakeRequest, artisan_name: &str) -> String {
    let text = build_email_text(request, artisan_name)
        .replace('\n', "<br />")
        .replace("  ", "&nbsp;&nbsp;");

    format!(
        "<div style=\"font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; line-height: 1.4; font-size: 14px;\">\n    {}\n  </div>",
        text
    )
}
