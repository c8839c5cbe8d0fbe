use poise::CreateReply;
use tracing::instrument;

use crate::discord::bot::Context;
use crate::discord::embeds::fng_embed;
use crate::error::AppError;

/// Show the crypto Fear & Greed index
#[poise::command(prefix_command, slash_command, category = "Crypto")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn fng(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let index = ctx.data().fear_greed.get_index().await?;
    ctx.send(CreateReply::default().embed(fng_embed(&index)))
        .await?;
    Ok(())
}
