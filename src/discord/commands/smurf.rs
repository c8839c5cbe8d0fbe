use poise::CreateReply;
use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::embeds::smurf_embed;
use crate::error::AppError;
use crate::riot::smurf::classify;

use super::report_lookup_error;

/// Check whether an account looks like a smurf
#[poise::command(prefix_command, slash_command, category = "League of Legends")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn smurf(
    ctx: Context<'_>,
    #[rest]
    #[description = "Riot ID, e.g. Faker#KR1"]
    riot_id: String,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let player = match ctx.data().riot.lookup(&riot_id).await {
        Ok(player) => player,
        Err(err) => return report_lookup_error(ctx, err).await,
    };

    let verdict = classify(&player.profile, player.rank.as_ref());
    info!(is_smurf = verdict.is_smurf, "🕵️ Smurf check done");

    ctx.send(CreateReply::default().embed(smurf_embed(&player, &verdict)))
        .await?;
    Ok(())
}
