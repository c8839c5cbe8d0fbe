use std::fmt;
use std::str::FromStr;

use super::types::LeagueEntryDto;
use crate::error::LookupError;

/// A Riot ID typed by a user, `GameName#TagLine`.
///
/// The input is split at the first `#`: the game name never contains one, everything after it
/// is the tag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHandle {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for PlayerHandle {
    type Err = LookupError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let (game_name, tag_line) = raw
            .split_once('#')
            .ok_or_else(|| LookupError::Format(raw.to_string()))?;

        let (game_name, tag_line) = (game_name.trim(), tag_line.trim());
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(LookupError::Format(raw.to_string()));
        }

        Ok(Self {
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        })
    }
}

impl fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub puuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummonerProfile {
    pub internal_id: String,
    /// `None` when Riot did not report a level, which is not the same as level 0.
    pub level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
    Unranked,
}

impl Tier {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Iron => "🤎",
            Self::Bronze => "🥉",
            Self::Silver => "🥈",
            Self::Gold => "🥇",
            Self::Platinum | Self::Diamond => "💎",
            Self::Emerald => "💚",
            Self::Master | Self::Grandmaster => "👑",
            Self::Challenger => "🏆",
            Self::Unranked => "❓",
        }
    }

    pub fn is_high_elo(&self) -> bool {
        matches!(
            self,
            Self::Platinum
                | Self::Emerald
                | Self::Diamond
                | Self::Master
                | Self::Grandmaster
                | Self::Challenger
        )
    }

    /// Apex tiers have no division.
    pub fn is_apex(&self) -> bool {
        matches!(self, Self::Master | Self::Grandmaster | Self::Challenger)
    }
}

impl FromStr for Tier {
    type Err = std::convert::Infallible;

    /// Unknown values fall back to [`Tier::Unranked`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "IRON" => Self::Iron,
            "BRONZE" => Self::Bronze,
            "SILVER" => Self::Silver,
            "GOLD" => Self::Gold,
            "PLATINUM" => Self::Platinum,
            "EMERALD" => Self::Emerald,
            "DIAMOND" => Self::Diamond,
            "MASTER" => Self::Master,
            "GRANDMASTER" => Self::Grandmaster,
            "CHALLENGER" => Self::Challenger,
            _ => Self::Unranked,
        })
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Iron => "Iron",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Emerald => "Emerald",
            Self::Diamond => "Diamond",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Challenger => "Challenger",
            Self::Unranked => "Unranked",
        })
    }
}

/// Solo/duo standing of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRecord {
    pub tier: Tier,
    pub division: String,
    pub league_points: u32,
    pub wins: u32,
    pub losses: u32,
}

impl RankedRecord {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    /// Win percentage rounded to one decimal, `0.0` when no game was played.
    pub fn win_rate(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        (1000.0 * f64::from(self.wins) / f64::from(games)).round() / 10.0
    }

    /// `Gold II`, or just `Master` for apex tiers.
    pub fn rank_label(&self) -> String {
        if self.tier.is_apex() || self.division.is_empty() {
            self.tier.to_string()
        } else {
            format!("{} {}", self.tier, self.division)
        }
    }
}

impl TryFrom<LeagueEntryDto> for RankedRecord {
    /// Name of the missing or out of range field.
    type Error = &'static str;

    fn try_from(entry: LeagueEntryDto) -> Result<Self, Self::Error> {
        fn counter(value: Option<i64>, field: &'static str) -> Result<u32, &'static str> {
            value
                .and_then(|v| u32::try_from(v).ok())
                .ok_or(field)
        }

        let tier = entry.tier.ok_or("tier")?;

        Ok(Self {
            tier: tier.parse().unwrap_or(Tier::Unranked),
            division: entry.rank.unwrap_or_default(),
            league_points: counter(entry.league_points, "leaguePoints")?,
            wins: counter(entry.wins, "wins")?,
            losses: counter(entry.losses, "losses")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub fn from_id(team_id: u16) -> Option<Self> {
        match team_id {
            100 => Some(Self::Blue),
            200 => Some(Self::Red),
            _ => None,
        }
    }
}

/// Rank of a live game participant after the per-player fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRank {
    Ranked(RankedRecord),
    Unranked,
    /// The rank lookup for this participant failed.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveGameParticipant {
    pub puuid: Option<String>,
    pub team: Team,
    pub display_name: String,
    pub rank: ParticipantRank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveGame {
    pub game_mode: Option<String>,
    pub participants: Vec<LiveGameParticipant>,
}

impl LiveGame {
    pub fn team(&self, team: Team) -> impl Iterator<Item = &LiveGameParticipant> {
        self.participants.iter().filter(move |p| p.team == team)
    }

    /// Number of participants whose rank could not be resolved.
    pub fn degraded(&self) -> usize {
        self.participants
            .iter()
            .filter(|p| p.rank == ParticipantRank::Unknown)
            .count()
    }
}
