use poise::CreateReply;
use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::embeds::game_embed;
use crate::error::AppError;

use super::report_lookup_error;

/// Show the ranks of everyone in a player's current game
#[poise::command(prefix_command, slash_command, category = "League of Legends")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn game(
    ctx: Context<'_>,
    #[rest]
    #[description = "Riot ID, e.g. Faker#KR1"]
    riot_id: String,
) -> Result<(), AppError> {
    ctx.defer().await?;

    match ctx.data().riot.current_game(&riot_id).await {
        Ok(Some(game)) => {
            info!(
                participants = game.participants.len(),
                degraded = game.degraded(),
                "🎮 Live game found"
            );
            ctx.send(CreateReply::default().embed(game_embed(riot_id.trim(), &game)))
                .await?;
            Ok(())
        }
        Ok(None) => {
            ctx.say(format!("**{}** is not in a game right now.", riot_id.trim()))
                .await?;
            Ok(())
        }
        Err(err) => report_lookup_error(ctx, err).await,
    }
}
