use serde::Deserialize;

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: Option<String>,
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: Option<String>,
    pub summoner_level: Option<u32>,
}

// ============================================================================
// League-v4
// ============================================================================

pub const RANKED_SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Only `queueType` is required: entries of other queues may carry another shape and are
/// validated once selected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: Option<i64>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
}

impl LeagueEntryDto {
    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == RANKED_SOLO_QUEUE
    }
}

// ============================================================================
// Spectator-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfoDto {
    pub game_mode: Option<String>,
    #[serde(default)]
    pub participants: Vec<CurrentGameParticipantDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipantDto {
    pub puuid: Option<String>,
    pub team_id: u16,
    pub summoner_id: Option<String>,
    pub summoner_name: Option<String>,
    pub riot_id: Option<String>,
}

impl CurrentGameParticipantDto {
    pub fn display_name(&self) -> String {
        [self.riot_id.as_deref(), self.summoner_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or("Unknown")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_entries_deserialize_from_riot_payload() {
        let entries: Vec<LeagueEntryDto> = serde_json::from_value(serde_json::json!([
            {
                "queueType": "RANKED_FLEX_SR",
                "tier": "GOLD",
                "rank": "II",
                "leaguePoints": 12,
                "wins": 3,
                "losses": 4,
                "summonerId": "ignored"
            },
            {
                "queueType": "RANKED_SOLO_5x5",
                "tier": "EMERALD",
                "rank": "IV",
                "leaguePoints": 75,
                "wins": 40,
                "losses": 38
            }
        ]))
        .unwrap();

        assert!(!entries[0].is_solo_queue());
        assert!(entries[1].is_solo_queue());
        assert_eq!(entries[1].league_points, Some(75));
    }

    #[test]
    fn entries_of_other_queues_may_miss_ranked_fields() {
        let entries: Vec<LeagueEntryDto> = serde_json::from_value(serde_json::json!([
            { "queueType": "CHERRY", "wins": 3, "losses": 1, "leaguePoints": 0 }
        ]))
        .unwrap();

        assert_eq!(entries[0].tier, None);
        assert_eq!(entries[0].rank, None);
    }

    #[test]
    fn participant_display_name_prefers_riot_id() {
        let participant: CurrentGameParticipantDto = serde_json::from_value(serde_json::json!({
            "puuid": "p",
            "teamId": 100,
            "summonerName": "",
            "riotId": "Zanshoes#EUW"
        }))
        .unwrap();
        assert_eq!(participant.display_name(), "Zanshoes#EUW");

        let anonymous: CurrentGameParticipantDto =
            serde_json::from_value(serde_json::json!({ "teamId": 200 })).unwrap();
        assert_eq!(anonymous.display_name(), "Unknown");
    }
}
