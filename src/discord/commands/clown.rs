use poise::CreateReply;
use poise::serenity_prelude::CreateAttachment;
use tracing::{instrument, warn};

use crate::discord::bot::Context;
use crate::error::AppError;

const INTRO: &str = "Red nose, big foot, yellow jacket..";

/// 🤡
#[poise::command(prefix_command, slash_command, user_cooldown = 30, category = "Fun")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn clown(ctx: Context<'_>) -> Result<(), AppError> {
    let path = &ctx.data().clown_image;

    let image = match tokio::fs::read(path).await {
        Ok(image) => image,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "🤡 ⚠️ Clown image unavailable");
            ctx.say(INTRO).await?;
            return Ok(());
        }
    };

    let attachment = CreateAttachment::bytes(image, "clown.webp");
    ctx.send(CreateReply::default().content(INTRO).attachment(attachment))
        .await?;
    Ok(())
}
