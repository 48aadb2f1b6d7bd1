use nutype::nutype;
use serde::Serialize;

/// Lifecycle of the most recent submission attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Failure,
}

impl SubmissionStatus {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Returns `true` if a new submission may be started.
    pub fn can_submit(self) -> bool {
        !self.is_pending()
    }

    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Pending => "Enviando...",
            Self::Idle | Self::Success | Self::Failure => "Enviar Mensagem",
        }
    }

    /// The banner shown above the form after a submission has resolved.
    pub fn banner(self) -> Option<Banner> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Success => Some(Banner {
                kind: BannerKind::Success,
                title: "Mensagem enviada com sucesso!",
                detail: "Retornaremos em breve.",
            }),
            Self::Failure => Some(Banner {
                kind: BannerKind::Failure,
                title: "Erro ao enviar mensagem",
                detail: "Tente novamente ou use outro meio de contato.",
            }),
        }
    }
}

/// Result of a single submission attempt as seen by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Ok,
    Error,
}

impl From<SubmissionOutcome> for SubmissionStatus {
    fn from(value: SubmissionOutcome) -> Self {
        match value {
            SubmissionOutcome::Ok => Self::Success,
            SubmissionOutcome::Error => Self::Failure,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Failure,
}

/// Probability that a simulated submission succeeds.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionSuccessRate(f64);
