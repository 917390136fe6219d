//! Prompt templates for the news-report model call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the formatted session text.
const SESSIONS_PLACEHOLDER: &str = "{sessions_data}";

/// System message sent ahead of every prompt.
pub const SYSTEM_PROMPT: &str =
    "Você é um assistente jornalístico especializado em política municipal brasileira.";

const DAILY_SUMMARY_PROMPT: &str = r#"Você é um jornalista objetivo e imparcial especializado em cobertura política municipal.
Com base nos dados abaixo sobre sessões da Câmara Municipal de Campina Grande,
gere um resumo jornalístico em formato de notícia radiofônica, curto (máximo 150 palavras),
em português brasileiro.

DIRETRIZES IMPORTANTES:
- Seja objetivo e factual, relatando apenas os fatos
- Mantenha tom neutro e imparcial, sem adjetivos elogiosos ou valorativos
- Evite termos como "importante", "relevante", "grande", "excelente", "destaque"
- Use linguagem clara e direta, apropriada para jornalismo sério
- Apresente informações sem emitir juízo de valor
- Foque nos dados: tipo de sessão, data, pautas discutidas

Dados das sessões:
{sessions_data}

Gere apenas o texto da notícia, sem títulos ou formatação."#;

const SINGLE_DAY_PROMPT: &str = r"Você é um jornalista objetivo e imparcial especializado em cobertura política municipal.
Com base nos dados abaixo sobre sessões da Câmara Municipal de Campina Grande realizadas em um dia específico,
gere um resumo jornalístico em formato de notícia radiofônica, curto (máximo 150 palavras),
em português brasileiro.

DIRETRIZES IMPORTANTES:
- Seja objetivo e factual, relatando apenas os fatos
- Mantenha tom neutro e imparcial, sem adjetivos elogiosos
- Evite enumerar sessões com números ordinais extensos (119ª, 118ª, etc)
- PRIORIZE informar O QUE foi discutido/votado (as ementas da pauta)
- Se houver múltiplas sessões, mencione brevemente e foque nas pautas mais relevantes
- Use linguagem natural e conversacional, apropriada para ser ouvida
- Foque no conteúdo das ementas, não nos números das sessões
- Se houver informação sobre pautas/ementas, SEMPRE mencione as principais
- Se não houver pauta disponível, mencione apenas tipo de sessão e data
- Evite jargões técnicos complexos, use linguagem acessível

Dados da sessão (incluindo pauta quando disponível):
{sessions_data}

Gere apenas o texto da notícia para ser falado, focando no que foi discutido.";

const SESSION_DETAILS_PROMPT: &str = r"Você é um jornalista objetivo e imparcial especializado em política municipal.
Com base nos dados abaixo sobre uma sessão da Câmara Municipal,
gere uma explicação curta (máximo 100 palavras), em português brasileiro.

DIRETRIZES IMPORTANTES:
- Seja objetivo e factual, sem adjetivos valorativos
- Mantenha tom neutro e profissional
- Relate apenas os fatos, sem interpretações ou elogios
- Use linguagem jornalística séria

Dados da sessão:
{sessions_data}

Gere apenas o texto explicativo.";

/// Which report to produce.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Radio-style summary of the day's sessions.
    #[default]
    DailySummary,
    /// Summary focused on what one day's agenda covered.
    SingleDay,
    /// Short explanation of recent sessions.
    SessionDetails,
}

impl PromptKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailySummary => "daily_summary",
            Self::SingleDay => "single_day",
            Self::SessionDetails => "session_details",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::DailySummary => DAILY_SUMMARY_PROMPT,
            Self::SingleDay => SINGLE_DAY_PROMPT,
            Self::SessionDetails => SESSION_DETAILS_PROMPT,
        }
    }

    /// Fill this kind's template with the formatted sessions.
    #[must_use]
    pub fn render(self, sessions_text: &str) -> String {
        self.template().replace(SESSIONS_PLACEHOLDER, sessions_text)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKind {
    type Err = std::convert::Infallible;

    /// Unknown names map to [`PromptKind::DailySummary`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "single_day" => Self::SingleDay,
            "session_details" => Self::SessionDetails,
            _ => Self::DailySummary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_sessions() {
        let prompt = PromptKind::SingleDay.render("Sessão ORDINÁRIA - 119ª");
        assert!(prompt.contains("realizadas em um dia específico"));
        assert!(prompt.contains("Dados da sessão (incluindo pauta quando disponível):\nSessão ORDINÁRIA - 119ª\n"));
        assert!(!prompt.contains(SESSIONS_PLACEHOLDER));
    }

    #[test]
    fn test_each_kind_has_its_own_template() {
        let daily = PromptKind::DailySummary.render("x");
        let details = PromptKind::SessionDetails.render("x");
        assert!(daily.contains("máximo 150 palavras"));
        assert!(details.contains("máximo 100 palavras"));
        assert_ne!(daily, details);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("single_day".parse::<PromptKind>(), Ok(PromptKind::SingleDay));
        assert_eq!("session_details".parse::<PromptKind>(), Ok(PromptKind::SessionDetails));
        assert_eq!("anything".parse::<PromptKind>(), Ok(PromptKind::DailySummary));
        assert_eq!(PromptKind::SessionDetails.to_string(), "session_details");
    }
}
