use chrono::{DateTime, Utc};
use num_format::{Locale, ToFormattedString};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};

use crate::deals::Deal;
use crate::market::{CryptoQuote, FearGreedIndex};
use crate::riot::smurf::Verdict;
use crate::riot::{LiveGame, LiveGameParticipant, ParticipantRank, PlayerLookup, RankedRecord, Team};

const PLAYER_COLOUR: u32 = 0x00ff00;
const GAME_COLOUR: u32 = 0x0099ff;
const QUOTE_COLOUR: u32 = 0x4682b4;
const HELP_COLOUR: u32 = 0x9b59b6;
const DEALS_COLOUR: u32 = 0xe67e22;
const SMURF_COLOUR: u32 = 0xe74c3c;
const CLEAN_COLOUR: u32 = 0x2ecc71;

/// `🥇 Gold II - 42 LP\nWin rate: 55% (11W/9L)`
pub fn rank_summary(rank: Option<&RankedRecord>) -> String {
    match rank {
        Some(rank) => format!(
            "{} {} - {} LP\nWin rate: {}% ({}W/{}L)",
            rank.tier.emoji(),
            rank.rank_label(),
            rank.league_points,
            rank.win_rate(),
            rank.wins,
            rank.losses
        ),
        None => "Unranked".to_string(),
    }
}

fn level_label(level: Option<u32>) -> String {
    level.map_or_else(|| "Unknown".to_string(), |l| l.to_string())
}

pub fn player_embed(lookup: &PlayerLookup) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("🎮 {}", lookup.handle))
        .color(PLAYER_COLOUR)
        .field("Level", level_label(lookup.profile.level), true)
        .field("Solo/Duo", rank_summary(lookup.rank.as_ref()), true)
}

/// One line per player: `🥇 Faker - Gold II (42 LP)`.
pub fn team_lines<'a>(participants: impl Iterator<Item = &'a LiveGameParticipant>) -> String {
    let lines: Vec<String> = participants
        .map(|p| match &p.rank {
            ParticipantRank::Ranked(rank) => format!(
                "{} {} - {} ({} LP)",
                rank.tier.emoji(),
                p.display_name,
                rank.rank_label(),
                rank.league_points
            ),
            ParticipantRank::Unranked => format!("❓ {} - Unranked", p.display_name),
            ParticipantRank::Unknown => format!("⚠️ {} - Rank unknown", p.display_name),
        })
        .collect();

    if lines.is_empty() {
        "No players".to_string()
    } else {
        lines.join("\n")
    }
}

pub fn game_embed(handle: &str, game: &LiveGame) -> CreateEmbed {
    let mode = game.game_mode.as_deref().unwrap_or("Unknown mode");

    let mut embed = CreateEmbed::new()
        .title(format!("🎯 Live game of {handle}"))
        .description(format!("Mode: {mode}"))
        .color(GAME_COLOUR)
        .field("🔵 Blue team", team_lines(game.team(Team::Blue)), false)
        .field("🔴 Red team", team_lines(game.team(Team::Red)), false);

    let degraded = game.degraded();
    if degraded > 0 {
        embed = embed.footer(CreateEmbedFooter::new(format!(
            "Rank lookup failed for {degraded} player(s)"
        )));
    }

    embed
}

pub fn smurf_embed(lookup: &PlayerLookup, verdict: &Verdict) -> CreateEmbed {
    let (title, colour) = if verdict.is_smurf {
        ("🕵️ Probable smurf", SMURF_COLOUR)
    } else {
        ("✅ No smurf detected", CLEAN_COLOUR)
    };

    let mut embed = CreateEmbed::new()
        .title(format!("{title}: {}", lookup.handle))
        .color(colour)
        .field("Level", level_label(lookup.profile.level), true)
        .field("Solo/Duo", rank_summary(lookup.rank.as_ref()), true);

    if let Some(reason) = &verdict.reason {
        embed = embed.field("Reason", reason.clone(), false);
    } else if lookup.rank.is_none() {
        embed = embed.field("Reason", "Not enough ranked data to judge.", false);
    }

    embed
}

/// Formats a dollar amount with thousands separators, `$1,234,567.89`.
pub fn usd(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// Prices under one dollar keep more precision.
fn price(amount: f64) -> String {
    if amount > 0.0 && amount < 1.0 {
        format!("${amount:.6}")
    } else {
        usd(amount)
    }
}

fn change(percent: f64) -> String {
    let arrow = if percent >= 0.0 { "🟢" } else { "🔴" };
    format!("{arrow} {percent:+.2}%")
}

pub fn quote_embed(quote: &CryptoQuote, logo: Option<&str>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("💰 {}", quote.symbol))
        .color(QUOTE_COLOUR)
        .field("Price", price(quote.price), true)
        .field("24h", change(quote.change_24h), true)
        .field("7d", change(quote.change_7d), true)
        .field("24h volume", usd(quote.volume_24h), true)
        .field("Market cap", usd(quote.market_cap), true)
        .field("📊 Analysis", quote.sentiment(), false)
        .footer(CreateEmbedFooter::new(format!(
            "Last updated {}",
            last_updated(quote.last_updated)
        )));

    if let Some(logo) = logo {
        embed = embed.thumbnail(logo);
    }

    embed
}

fn last_updated(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M UTC").to_string()
}

pub fn fng_embed(index: &FearGreedIndex) -> CreateEmbed {
    CreateEmbed::new()
        .title("Crypto Fear & Greed Index")
        .color(QUOTE_COLOUR)
        .description(format!(
            "{} **{}/100** ({})",
            index.emoji(),
            index.value,
            index.classification
        ))
}

pub fn deals_embed(deals: &[Deal]) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🎮 Best game deals")
        .color(DEALS_COLOUR);

    if deals.is_empty() {
        return embed.description("No deal right now.");
    }

    // Discord caps an embed at 25 fields.
    embed.fields(
        deals
            .iter()
            .take(25)
            .map(|deal| (deal.title.clone(), format!("{}\n{}", deal.summary(), deal.url), false)),
    )
}

pub fn help_lol_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("📖 League of Legends commands")
        .color(HELP_COLOUR)
        .field(
            format!("{prefix}lookup Name#Tag"),
            "Level and solo/duo rank of a player.",
            false,
        )
        .field(
            format!("{prefix}game Name#Tag"),
            "Ranks of everyone in the player's current game.",
            false,
        )
        .field(
            format!("{prefix}smurf Name#Tag"),
            "Checks whether the account looks like a smurf.",
            false,
        )
}

pub fn help_price_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("📖 Crypto commands")
        .color(HELP_COLOUR)
        .field(
            format!("{prefix}price SYMBOL [SYMBOL...]"),
            format!("Price, variations and market analysis. Example: `{prefix}price btc eth`"),
            false,
        )
        .field(
            format!("{prefix}fng"),
            "Current crypto Fear & Greed index.",
            false,
        )
        .field(format!("{prefix}deals"), "Best discounts on PC games.", false)
}
