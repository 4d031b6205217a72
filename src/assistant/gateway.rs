use super::client::{CompletionClient, CompletionError, ModelTier, ModelTiers};
use super::context::build_request_text;
use crate::session::Session;
use crate::transcript::Message;
use tracing::{error, info, warn};

/// What happened to a submitted prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank prompt; nothing was appended or sent.
    Ignored,
    /// An assistant reply was appended.
    Replied {
        tier: ModelTier,
        warning: Option<String>,
    },
    /// No reply. The user message stays in the transcript.
    Failed {
        error: CompletionError,
        warning: Option<String>,
    },
}

impl SendOutcome {
    pub fn warning(&self) -> Option<&str> {
        match self {
            SendOutcome::Replied { warning, .. } | SendOutcome::Failed { warning, .. } => {
                warning.as_deref()
            }
            SendOutcome::Ignored => None,
        }
    }
}

/// Turns prompts into assistant replies using a primary model tier and a
/// single fallback attempt.
pub struct AssistantGateway {
    client: Box<dyn CompletionClient>,
    tiers: ModelTiers,
}

impl AssistantGateway {
    pub fn new(client: Box<dyn CompletionClient>, tiers: ModelTiers) -> Self {
        Self { client, tiers }
    }

    pub fn tiers(&self) -> &ModelTiers {
        &self.tiers
    }

    pub fn fallback_warning(&self) -> String {
        format!(
            "Switching to {} due to model availability...",
            self.tiers.fallback
        )
    }

    /// Submit a prompt on behalf of the session.
    ///
    /// The user message is appended before any remote call. Only the latest
    /// prompt plus the business context is sent; earlier turns are not
    /// replayed. Any primary failure is retried once on the fallback tier with
    /// the identical request text.
    pub fn send(&self, session: &mut Session, prompt: &str) -> SendOutcome {
        if prompt.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        session.append_message(Message::user(prompt));
        let request = build_request_text(session.profile(), prompt);
        info!(
            session = %session.id(),
            prompt_len = prompt.len(),
            model = %self.tiers.primary,
            "sending prompt"
        );

        let primary_err = match self.call(ModelTier::Primary, &request) {
            Ok(reply) => return self.accept(session, ModelTier::Primary, reply, None),
            Err(err) => err,
        };

        let warning = self.fallback_warning();
        warn!(
            session = %session.id(),
            transient = primary_err.is_transient(),
            status = ?primary_err.status(),
            error = %primary_err,
            fallback = %self.tiers.fallback,
            "primary model failed, falling back"
        );

        match self.call(ModelTier::Fallback, &request) {
            Ok(reply) => self.accept(session, ModelTier::Fallback, reply, Some(warning)),
            Err(err) => {
                error!(session = %session.id(), error = %err, "fallback model failed");
                SendOutcome::Failed {
                    error: err,
                    warning: Some(warning),
                }
            }
        }
    }

    fn call(&self, tier: ModelTier, request: &str) -> Result<String, CompletionError> {
        self.client.generate(self.tiers.model(tier), request)
    }

    fn accept(
        &self,
        session: &mut Session,
        tier: ModelTier,
        reply: String,
        warning: Option<String>,
    ) -> SendOutcome {
        info!(session = %session.id(), %tier, reply_len = reply.len(), "assistant replied");
        session.append_message(Message::assistant(reply));
        SendOutcome::Replied { tier, warning }
    }
}
