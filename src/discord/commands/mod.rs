mod clown;
mod deals;
mod fng;
mod game;
mod help;
mod lookup;
mod price;
mod smurf;

pub use clown::clown;
pub use deals::deals;
pub use fng::fng;
pub use game::game;
pub use help::{help_lol, help_price};
pub use lookup::lookup;
pub use price::price;
pub use smurf::smurf;

use tracing::warn;

use crate::discord::bot::Context;
use crate::error::{AppError, LookupError};

/// Answers a failed player lookup with its user-facing text.
async fn report_lookup_error(ctx: Context<'_>, err: LookupError) -> Result<(), AppError> {
    warn!(error = %err, "🎮 ⚠️ Player lookup failed");
    ctx.say(err.user_message()).await?;
    Ok(())
}
