use poise::CreateReply;
use tracing::instrument;

use crate::discord::bot::Context;
use crate::discord::embeds::player_embed;
use crate::error::AppError;

use super::report_lookup_error;

/// Show a player's level and solo/duo rank
#[poise::command(prefix_command, slash_command, category = "League of Legends")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn lookup(
    ctx: Context<'_>,
    #[rest]
    #[description = "Riot ID, e.g. Faker#KR1"]
    riot_id: String,
) -> Result<(), AppError> {
    ctx.defer().await?;

    match ctx.data().riot.lookup(&riot_id).await {
        Ok(player) => {
            ctx.send(CreateReply::default().embed(player_embed(&player)))
                .await?;
            Ok(())
        }
        Err(err) => report_lookup_error(ctx, err).await,
    }
}
