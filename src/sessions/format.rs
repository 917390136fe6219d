//! Plain-text rendering of sessions, used as model input and as fallback source.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::sessions::types::Session;

/// Text produced for an empty session list.
pub const NO_SESSIONS_TEXT: &str = "Nenhuma sessão encontrada.";
/// Separator placed between session paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n---\n\n";
/// Number of agenda items listed per session.
pub const MAX_AGENDA_ITEMS: usize = 5;
/// Note appended when a session has no agenda.
pub const AGENDA_UNAVAILABLE: &str = "Pauta não disponível ou não coletada.";

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Render sessions as one paragraph each, joined by [`PARAGRAPH_SEPARATOR`].
#[must_use]
pub fn format_sessions_for_llm(sessions: &[Session], tz: Tz) -> String {
    if sessions.is_empty() {
        return NO_SESSIONS_TEXT.to_string();
    }

    sessions
        .iter()
        .map(|session| format_session(session, tz))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

fn format_session(session: &Session, tz: Tz) -> String {
    let date = match session.opening_local_date(tz) {
        Some(date) => spoken_date(date),
        None => session.opening_date.clone().unwrap_or_default(),
    };

    let mut text = format!(
        "Sessão {} - {} realizada em {}. Legislatura: {}, Sessão Legislativa: {}.",
        or_default(session.kind.as_deref(), "N/A"),
        or_default(session.title.as_deref(), "Sem título"),
        date,
        or_default(session.legislature.as_deref(), "N/A"),
        or_default(session.legislative_session.as_deref(), "N/A"),
    );

    if session.agenda.is_empty() {
        text.push_str("\n\n");
        text.push_str(AGENDA_UNAVAILABLE);
        return text;
    }

    let total = session.agenda.len();
    let _ = write!(text, "\n\nPauta da sessão ({total} itens):");

    // Items without text still take their position in the numbering.
    for (position, item) in session.agenda.iter().take(MAX_AGENDA_ITEMS).enumerate() {
        let Some(headline) = item.headline() else {
            continue;
        };
        let _ = write!(text, "\n{}. {headline}", position + 1);
        if let Some(outcome) = item.outcome() {
            let _ = write!(text, " (Resultado: {outcome})");
        }
    }

    if total > MAX_AGENDA_ITEMS {
        let _ = write!(text, "\n... e mais {} itens.", total - MAX_AGENDA_ITEMS);
    }

    text
}

/// Whether `line` belongs to a paragraph's agenda block rather than its headline.
#[must_use]
pub fn is_agenda_line(line: &str) -> bool {
    let line = line.trim();
    line == AGENDA_UNAVAILABLE
        || line.starts_with("Pauta da sessão (")
        || line.starts_with("... e mais ")
        || is_numbered_item(line)
}

fn is_numbered_item(line: &str) -> bool {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with(". ")
}

/// `06 de janeiro de 2025`.
fn spoken_date(date: NaiveDate) -> String {
    let month = MONTHS_PT[date.month0() as usize];
    format!("{:02} de {month} de {}", date.day(), date.year())
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::types::AgendaItem;

    const TZ: Tz = chrono_tz::America::Fortaleza;

    fn session(title: &str, opening: &str) -> Session {
        Session {
            session_id: Some(119),
            kind: Some("ORDINÁRIA".to_string()),
            title: Some(title.to_string()),
            opening_date: Some(opening.to_string()),
            legislature: Some("19ª Legislatura".to_string()),
            legislative_session: Some("1ª Sessão Legislativa".to_string()),
            agenda: Vec::new(),
        }
    }

    fn item(ementa: &str, result: Option<&str>) -> AgendaItem {
        AgendaItem {
            ementa: Some(ementa.to_string()),
            content: None,
            result: result.map(str::to_string),
            order_number: None,
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_sessions_for_llm(&[], TZ), NO_SESSIONS_TEXT);
    }

    #[test]
    fn test_sessions_without_agenda() {
        let sessions = vec![
            session("119ª Sessão Ordinária", "2025-01-06T14:00:00Z"),
            session("Sessão Solene de Abertura", "2025-01-05T10:00:00Z"),
        ];

        let text = format_sessions_for_llm(&sessions, TZ);
        let paragraphs: Vec<&str> = text.split(PARAGRAPH_SEPARATOR).collect();

        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs.iter().all(|p| p.ends_with(AGENDA_UNAVAILABLE)));
        assert_eq!(
            paragraphs[0],
            "Sessão ORDINÁRIA - 119ª Sessão Ordinária realizada em 06 de janeiro de 2025. \
             Legislatura: 19ª Legislatura, Sessão Legislativa: 1ª Sessão Legislativa.\
             \n\nPauta não disponível ou não coletada."
        );
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let text = format_sessions_for_llm(&[Session::default()], TZ);
        assert!(text.starts_with(
            "Sessão N/A - Sem título realizada em . Legislatura: N/A, Sessão Legislativa: N/A."
        ));
    }

    #[test]
    fn test_unparseable_date_is_kept_verbatim() {
        let text = format_sessions_for_llm(&[session("Extra", "segunda-feira")], TZ);
        assert!(text.contains("realizada em segunda-feira."));
    }

    #[test]
    fn test_agenda_truncated_to_five_items() {
        let mut s = session("120ª Sessão Ordinária", "2025-03-11T14:00:00Z");
        s.agenda = (1..=8)
            .map(|n| item(&format!("Projeto de Lei {n}/2025"), Some("Aprovado")))
            .collect();

        let text = format_sessions_for_llm(&[s], TZ);

        assert!(text.contains("realizada em 11 de março de 2025."));
        assert!(text.contains("\n\nPauta da sessão (8 itens):"));
        assert!(text.contains("\n1. Projeto de Lei 1/2025 (Resultado: Aprovado)"));
        assert!(text.contains("\n5. Projeto de Lei 5/2025"));
        assert!(!text.contains("Projeto de Lei 6/2025"));
        assert!(text.ends_with("\n... e mais 3 itens."));
        assert!(!text.contains(AGENDA_UNAVAILABLE));
    }

    #[test]
    fn test_agenda_lines_are_recognised() {
        let mut s = session("122ª Sessão Ordinária", "2025-03-13T14:00:00Z");
        s.agenda = (1..=7).map(|n| item(&format!("Requerimento {n}"), None)).collect();
        let text = format_sessions_for_llm(&[s, session("Solene", "2025-03-13T18:00:00Z")], TZ);

        let headlines: Vec<&str> = text
            .lines()
            .filter(|l| !l.trim().is_empty() && l.trim() != "---" && !is_agenda_line(l))
            .collect();
        assert_eq!(headlines.len(), 2);
        assert!(headlines.iter().all(|l| l.starts_with("Sessão ORDINÁRIA - ")));
        assert!(!is_agenda_line("2025 foi um ano"));
        assert!(!is_agenda_line("Sessão ORDINÁRIA - 1. Abertura"));
    }

    #[test]
    fn test_agenda_item_fallbacks() {
        let mut s = session("121ª Sessão Ordinária", "2025-03-12T14:00:00Z");
        s.agenda = vec![
            item("Requerimento 10", Some("-")),
            AgendaItem {
                content: Some(" Indicação 3 ".to_string()),
                ..AgendaItem::default()
            },
            AgendaItem::default(),
            item("Moção de aplauso", Some(" Rejeitado ")),
        ];

        let text = format_sessions_for_llm(&[s], TZ);

        assert!(text.contains("\n1. Requerimento 10\n"));
        assert!(text.contains("\n2. Indicação 3\n"));
        assert!(!text.contains("\n3."));
        assert!(text.ends_with("\n4. Moção de aplauso (Resultado: Rejeitado)"));
        assert!(!text.contains("e mais"));
    }
}
