use poise::CreateReply;
use reqwest::StatusCode;
use tracing::{instrument, warn};

use crate::discord::bot::Context;
use crate::discord::embeds::quote_embed;
use crate::error::{AppError, ServiceError};

/// Upper-cased, whitespace separated symbols, duplicates removed.
fn parse_symbols(input: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();
    for symbol in input.split_whitespace().map(str::to_uppercase) {
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

/// CoinMarketCap answers 400 to symbols it does not list. Other statuses (bad key, rate limit,
/// outage) concern every symbol and abort the command.
fn is_unknown_symbol(err: &ServiceError) -> bool {
    match err {
        ServiceError::Missing { .. } => true,
        ServiceError::Status { status, .. } => *status == StatusCode::BAD_REQUEST,
        _ => false,
    }
}

/// Show the price and market analysis of one or more cryptocurrencies
#[poise::command(prefix_command, slash_command, category = "Crypto")]
#[instrument(skip(ctx), fields(user_id = %ctx.author().id))]
pub async fn price(
    ctx: Context<'_>,
    #[rest]
    #[description = "Symbols, e.g. BTC ETH"]
    symbols: Option<String>,
) -> Result<(), AppError> {
    let symbols = parse_symbols(symbols.as_deref().unwrap_or_default());
    let prefix = &ctx.data().prefix;

    if symbols.is_empty() {
        ctx.say(format!(
            "❌ Give at least one symbol. Example: `{prefix}price btc` or `{prefix}price btc eth sol`"
        ))
        .await?;
        return Ok(());
    }

    let Some(cmc) = &ctx.data().cmc else {
        ctx.say("❌ Crypto prices are not configured on this bot.")
            .await?;
        return Ok(());
    };

    ctx.defer().await?;

    for symbol in &symbols {
        let quote = match cmc.get_quote(symbol).await {
            Ok(quote) => quote,
            Err(err) if is_unknown_symbol(&err) => {
                ctx.say(format!("❌ No data found for **{symbol}**.")).await?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        // A quote without its logo is still worth sending.
        let logo = cmc.get_logo(symbol).await.unwrap_or_else(|err| {
            warn!(symbol, error = %err, "💰 ⚠️ Logo lookup failed");
            None
        });

        ctx.send(CreateReply::default().embed(quote_embed(&quote, logo.as_deref())))
            .await?;
    }

    Ok(())
}
