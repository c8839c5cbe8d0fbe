use poise::CreateReply;

use crate::discord::bot::Context;
use crate::discord::embeds::{help_lol_embed, help_price_embed};
use crate::error::AppError;

/// List the League of Legends commands
#[poise::command(prefix_command, slash_command, category = "Help")]
pub async fn help_lol(ctx: Context<'_>) -> Result<(), AppError> {
    let embed = help_lol_embed(&ctx.data().prefix);
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// List the crypto and deals commands
#[poise::command(prefix_command, slash_command, category = "Help")]
pub async fn help_price(ctx: Context<'_>) -> Result<(), AppError> {
    let embed = help_price_embed(&ctx.data().prefix);
    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
