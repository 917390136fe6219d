//! Template-based speech text for when no model is available.

use crate::report::prompts::PromptKind;
use crate::sessions::format::{NO_SESSIONS_TEXT, is_agenda_line};

/// Spoken when there is nothing to report.
pub const NO_RECENT_SESSIONS: &str =
    "Não encontrei sessões recentes na Câmara Municipal de Campina Grande.";

const DAILY_INTRO: &str = "Hoje na Câmara Municipal de Campina Grande, ";
const RECENT_INTRO: &str = "Nas sessões recentes da Câmara Municipal: ";
/// Lines read out before the remainder is only counted.
const SPOKEN_LINES: usize = 3;

/// Build speech text from formatted session lines without a model.
///
/// Each remaining line is one session: blank lines, paragraph separators and
/// agenda blocks are skipped. Lines are lower-cased and a period is appended
/// as is, even after one the line already ends with.
#[must_use]
pub fn format_text_for_alexa(sessions_text: &str, kind: PromptKind) -> String {
    let trimmed = sessions_text.trim();
    if trimmed.is_empty() || trimmed == NO_SESSIONS_TEXT {
        return NO_RECENT_SESSIONS.to_string();
    }

    let lines: Vec<String> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "---" && !is_agenda_line(line))
        .map(str::to_lowercase)
        .collect();
    if lines.is_empty() {
        return NO_RECENT_SESSIONS.to_string();
    }

    match kind {
        PromptKind::DailySummary => daily_summary(&lines),
        PromptKind::SingleDay | PromptKind::SessionDetails => format!(
            "{RECENT_INTRO}{}.",
            lines
                .iter()
                .take(SPOKEN_LINES)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(". ")
        ),
    }
}

fn daily_summary(lines: &[String]) -> String {
    if let [only] = lines {
        return format!("{DAILY_INTRO}{only}.");
    }

    let mut text = format!("{DAILY_INTRO}foram realizadas {} sessões. ", lines.len());
    let spoken: Vec<String> = lines
        .iter()
        .take(SPOKEN_LINES)
        .map(|line| format!("{line}."))
        .collect();
    text.push_str(&spoken.join(" "));

    if lines.len() > SPOKEN_LINES {
        text.push_str(&format!(
            " E mais {} outras sessões.",
            lines.len() - SPOKEN_LINES
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PromptKind; 3] = [
        PromptKind::DailySummary,
        PromptKind::SingleDay,
        PromptKind::SessionDetails,
    ];

    #[test]
    fn test_empty_and_sentinel_inputs() {
        for kind in ALL_KINDS {
            assert_eq!(format_text_for_alexa("", kind), NO_RECENT_SESSIONS);
            assert_eq!(format_text_for_alexa("  \n ", kind), NO_RECENT_SESSIONS);
            assert_eq!(format_text_for_alexa(NO_SESSIONS_TEXT, kind), NO_RECENT_SESSIONS);
        }
    }

    #[test]
    fn test_single_line_daily_summary() {
        let text = format_text_for_alexa("Sessão ORDINÁRIA - 119ª Sessão Ordinária", PromptKind::DailySummary);
        assert_eq!(
            text,
            "Hoje na Câmara Municipal de Campina Grande, sessão ordinária - 119ª sessão ordinária."
        );
        assert!(!text.contains("foram realizadas"));
    }

    #[test]
    fn test_five_lines_daily_summary() {
        let input = "Sessão A\nSessão B\nSessão C\nSessão D\nSessão E";
        let text = format_text_for_alexa(input, PromptKind::DailySummary);
        assert_eq!(
            text,
            "Hoje na Câmara Municipal de Campina Grande, foram realizadas 5 sessões. \
             sessão a. sessão b. sessão c. E mais 2 outras sessões."
        );
    }

    #[test]
    fn test_three_lines_have_no_remainder() {
        let text = format_text_for_alexa("Um\nDois\nTrês", PromptKind::DailySummary);
        assert!(text.contains("foram realizadas 3 sessões."));
        assert!(!text.contains("E mais"));
    }

    #[test]
    fn test_other_kinds_use_generic_lead_in() {
        let input = "Sessão A\nSessão B\nSessão C\nSessão D";
        for kind in [PromptKind::SingleDay, PromptKind::SessionDetails] {
            assert_eq!(
                format_text_for_alexa(input, kind),
                "Nas sessões recentes da Câmara Municipal: sessão a. sessão b. sessão c."
            );
        }
    }

    #[test]
    fn test_agenda_blocks_do_not_count_as_sessions() {
        let input = "Sessão ORDINÁRIA - 119ª.\n\nPauta da sessão (6 itens):\n1. Projeto de Lei 1/2025\n\
                     2. Requerimento 4 (Resultado: Aprovado)\n... e mais 4 itens.\n\n---\n\n\
                     Sessão SOLENE - Abertura.\n\nPauta não disponível ou não coletada.";
        let text = format_text_for_alexa(input, PromptKind::DailySummary);
        assert_eq!(
            text,
            "Hoje na Câmara Municipal de Campina Grande, foram realizadas 2 sessões. \
             sessão ordinária - 119ª.. sessão solene - abertura.."
        );
    }

    #[test]
    fn test_line_ending_in_period_gets_another() {
        let line = "Sessão ORDINÁRIA - 119ª Sessão Ordinária.";
        assert_eq!(
            format_text_for_alexa(line, PromptKind::DailySummary),
            "Hoje na Câmara Municipal de Campina Grande, sessão ordinária - 119ª sessão ordinária.."
        );

        let input = "Sessão SOLENE - Abertura.\n\n---\n\nSessão ORDINÁRIA - 119ª.";
        assert_eq!(
            format_text_for_alexa(input, PromptKind::SessionDetails),
            "Nas sessões recentes da Câmara Municipal: sessão solene - abertura.. sessão ordinária - 119ª.."
        );
    }
}
