use poise::CreateReply;
use tracing::{info, instrument};

use crate::discord::bot::Context;
use crate::discord::embeds::deals_embed;
use crate::error::AppError;

/// Show the best current discounts on PC games
#[poise::command(prefix_command, slash_command, category = "Deals")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn deals(ctx: Context<'_>) -> Result<(), AppError> {
    let Some(client) = &ctx.data().deals else {
        ctx.say("❌ Game deals are not configured on this bot.")
            .await?;
        return Ok(());
    };

    ctx.defer().await?;

    let deals = client.get_deals().await?;
    info!(count = deals.len(), "🎮 Deals fetched");

    ctx.send(CreateReply::default().embed(deals_embed(&deals)))
        .await?;
    Ok(())
}
