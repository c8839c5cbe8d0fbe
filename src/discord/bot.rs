use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::deals::DealsClient;
use crate::error::AppError;
use crate::market::{CoinMarketCapClient, FearGreedClient};
use crate::riot::RiotClient;

use super::commands;

/// Shared data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub riot: RiotClient,
    /// `None` when no CoinMarketCap key is configured.
    pub cmc: Option<CoinMarketCapClient>,
    pub fear_greed: FearGreedClient,
    /// `None` when no IsThereAnyDeal key is configured.
    pub deals: Option<DealsClient>,
    pub clown_image: PathBuf,
    pub prefix: String,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data) -> poise::Framework<Data, AppError> {
    let prefix = data.prefix.clone();

    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::lookup(),
                commands::game(),
                commands::smurf(),
                commands::help_lol(),
                commands::price(),
                commands::help_price(),
                commands::fng(),
                commands::deals(),
                commands::clown(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                case_insensitive_commands: true,
                ..Default::default()
            },
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );
                Ok(data)
            })
        })
        .build()
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command_name = ctx.command().name.as_str();
            error!(
                error = ?error,
                command = command_name,
                user_id = %ctx.author().id,
                "🎮 ❌ Command execution failed"
            );
            let _ = ctx.say(user_message(&error)).await;
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            warn!(
                error = %error,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Invalid command argument"
            );
            let _ = ctx.say(format!("Invalid argument: {}", error)).await;
        }
        poise::FrameworkError::CooldownHit {
            remaining_cooldown,
            ctx,
            ..
        } => {
            let remaining = remaining_cooldown.as_secs_f64().ceil() as u64;
            info!(
                user_id = %ctx.author().id,
                command = ctx.command().name.as_str(),
                remaining,
                "🎮 ⏳ Command on cooldown"
            );
            let _ = ctx
                .say(format!(
                    "Calm down! Wait {remaining} more second(s) before using this command again."
                ))
                .await;
        }
        poise::FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            warn!(
                permissions = %missing_permissions,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Bot missing permissions"
            );
            let _ = ctx
                .say(format!("Missing permissions: {}", missing_permissions))
                .await;
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}

fn user_message(error: &AppError) -> String {
    match error {
        AppError::Lookup(err) => err.user_message(),
        AppError::Service(err) => format!("❌ {err}"),
        _ => "❌ Something went wrong, try again later.".to_string(),
    }
}
