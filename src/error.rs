use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Discord error: {0}")]
    Discord(Box<serenity::Error>),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::Discord(Box::new(err))
    }
}

/// Riot endpoints the resolver talks to, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Account,
    Summoner,
    League,
    ActiveGame,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Account => "account-v1",
            Self::Summoner => "summoner-v4",
            Self::League => "league-v4",
            Self::ActiveGame => "spectator-v4",
        })
    }
}

/// Outcome of a failed player lookup step.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid Riot ID {0:?}, expected GameName#TagLine")]
    Format(String),

    #[error("{0} reported no such player")]
    NotFound(Endpoint),

    #[error("{0} denied access to this endpoint")]
    Forbidden(Endpoint),

    #[error("{endpoint} request failed ({}): {reason}", display_status(.status))]
    Upstream {
        endpoint: Endpoint,
        status: Option<StatusCode>,
        reason: String,
    },

    #[error("request cancelled by shutdown")]
    Cancelled,
}

impl LookupError {
    pub fn upstream(endpoint: Endpoint, status: Option<StatusCode>, reason: impl Into<String>) -> Self {
        Self::Upstream {
            endpoint,
            status,
            reason: reason.into(),
        }
    }

    /// Whether the upstream refused the call because of its rate limits.
    pub fn is_throttled(&self) -> bool {
        matches!(
            self,
            Self::Upstream {
                status: Some(StatusCode::TOO_MANY_REQUESTS),
                ..
            }
        )
    }

    /// Text shown to the Discord user for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            Self::Format(_) => {
                "❌ Invalid Riot ID format. Use: `GameName#TagLine` (e.g. Zanshoes#EUW)".into()
            }
            Self::NotFound(Endpoint::Account) => "❌ No player found with this Riot ID!".into(),
            Self::NotFound(_) => "❌ Could not retrieve this player's profile.".into(),
            Self::Forbidden(Endpoint::ActiveGame) => {
                "🔒 Live game lookups are restricted by Riot to partner applications.".into()
            }
            Self::Forbidden(endpoint) => format!("🔒 Access to {endpoint} was denied."),
            Self::Upstream { .. } if self.is_throttled() => {
                "⏳ Riot API rate limit reached, try again in a moment.".into()
            }
            Self::Upstream { endpoint, .. } => {
                format!("❌ Riot API error while calling {endpoint}, try again later.")
            }
            Self::Cancelled => "🛑 The bot is shutting down.".into(),
        }
    }
}

fn display_status(status: &Option<StatusCode>) -> String {
    status
        .map(|s| s.as_u16().to_string())
        .unwrap_or_else(|| "no status".into())
}

/// Failure of one of the non-Riot providers (quotes, sentiment index, deals).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} answered with status {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
    },

    #[error("{service} has no data for {query}")]
    Missing { service: &'static str, query: String },

    #[error("{service} request cancelled by shutdown")]
    Cancelled { service: &'static str },
}
