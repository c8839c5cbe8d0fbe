//! Player lookup flows chaining the Riot endpoints.
//!
//! The chain (account → summoner → league / active game) stops at the first failing step. The
//! per-participant rank lookups of a live game are independent: a failure there only degrades
//! the affected participant.

use futures::future::join_all;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use super::client::RiotClient;
use super::models::{
    LiveGame, LiveGameParticipant, ParticipantRank, PlayerHandle, PlayerIdentity, RankedRecord,
    SummonerProfile, Team,
};
use super::types::{CurrentGameParticipantDto, LeagueEntryDto};
use crate::error::{Endpoint, LookupError};

/// Result of the `lookup` flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLookup {
    pub handle: PlayerHandle,
    pub profile: SummonerProfile,
    pub rank: Option<RankedRecord>,
}

/// Picks the ranked solo/duo entry, ignoring every other queue whatever its position or shape.
///
/// Only the selected entry has to be complete, otherwise the body is reported as malformed.
pub fn select_solo_queue(entries: Vec<LeagueEntryDto>) -> Result<Option<RankedRecord>, LookupError> {
    entries
        .into_iter()
        .find(LeagueEntryDto::is_solo_queue)
        .map(|entry| {
            RankedRecord::try_from(entry).map_err(|field| {
                LookupError::upstream(
                    Endpoint::League,
                    Some(StatusCode::OK),
                    format!("malformed body: solo/duo entry has no valid {field}"),
                )
            })
        })
        .transpose()
}

impl RiotClient {
    pub async fn resolve_identity(
        &self,
        handle: &PlayerHandle,
    ) -> Result<PlayerIdentity, LookupError> {
        let account = self
            .get_account_by_riot_id(&handle.game_name, &handle.tag_line)
            .await?;

        match account.puuid {
            Some(puuid) if !puuid.is_empty() => Ok(PlayerIdentity { puuid }),
            _ => Err(LookupError::NotFound(Endpoint::Account)),
        }
    }

    pub async fn resolve_profile(
        &self,
        identity: &PlayerIdentity,
    ) -> Result<SummonerProfile, LookupError> {
        let summoner = self.get_summoner_by_puuid(&identity.puuid).await?;

        let internal_id = summoner.id.filter(|id| !id.is_empty()).ok_or_else(|| {
            LookupError::upstream(Endpoint::Summoner, None, "malformed body: missing summoner id")
        })?;

        Ok(SummonerProfile {
            internal_id,
            level: summoner.summoner_level,
        })
    }

    /// `Ok(None)` means the player is unranked in solo/duo.
    pub async fn resolve_rank(
        &self,
        profile: &SummonerProfile,
    ) -> Result<Option<RankedRecord>, LookupError> {
        let entries = self
            .get_league_entries_by_summoner(&profile.internal_id)
            .await?;
        select_solo_queue(entries)
    }

    /// `Ok(None)` means the player is not currently in a game.
    pub async fn resolve_live_game(
        &self,
        profile: &SummonerProfile,
    ) -> Result<Option<LiveGame>, LookupError> {
        let Some(game) = self.get_active_game_by_summoner(&profile.internal_id).await? else {
            return Ok(None);
        };

        if game.participants.is_empty() {
            return Ok(None);
        }

        let participants = join_all(
            game.participants
                .into_iter()
                .map(|participant| self.enrich_participant(participant)),
        )
        .await
        .into_iter()
        .flatten()
        .collect();

        Ok(Some(LiveGame {
            game_mode: game.game_mode,
            participants,
        }))
    }

    /// Resolves a handle to its profile and solo/duo rank.
    #[instrument(skip_all, fields(handle = %raw_handle))]
    pub async fn lookup(&self, raw_handle: &str) -> Result<PlayerLookup, LookupError> {
        let handle: PlayerHandle = raw_handle.parse()?;
        let profile = self.resolve_summoner(&handle).await?;
        let rank = self.resolve_rank(&profile).await?;

        debug!(ranked = rank.is_some(), "lookup resolved");

        Ok(PlayerLookup {
            handle,
            profile,
            rank,
        })
    }

    /// Resolves a handle to the game it is currently playing, with every participant's rank.
    #[instrument(skip_all, fields(handle = %raw_handle))]
    pub async fn current_game(&self, raw_handle: &str) -> Result<Option<LiveGame>, LookupError> {
        let handle: PlayerHandle = raw_handle.parse()?;
        let profile = self.resolve_summoner(&handle).await?;
        let game = self.resolve_live_game(&profile).await?;

        if let Some(game) = &game {
            debug!(
                participants = game.participants.len(),
                degraded = game.degraded(),
                "live game resolved"
            );
        }

        Ok(game)
    }

    async fn resolve_summoner(&self, handle: &PlayerHandle) -> Result<SummonerProfile, LookupError> {
        let identity = self.resolve_identity(handle).await?;
        self.resolve_profile(&identity).await
    }

    /// A participant whose rank cannot be fetched is kept with an unknown rank, one from an
    /// unknown team is dropped.
    async fn enrich_participant(
        &self,
        participant: CurrentGameParticipantDto,
    ) -> Option<LiveGameParticipant> {
        let display_name = participant.display_name();
        let Some(team) = Team::from_id(participant.team_id) else {
            warn!(team_id = participant.team_id, player = %display_name, "skipping participant of unknown team");
            return None;
        };

        let rank = match self.participant_rank(&participant).await {
            Ok(Some(record)) => ParticipantRank::Ranked(record),
            Ok(None) => ParticipantRank::Unranked,
            Err(e) => {
                warn!(error = %e, player = %display_name, "rank unavailable for live game participant");
                ParticipantRank::Unknown
            }
        };

        Some(LiveGameParticipant {
            puuid: participant.puuid,
            team,
            display_name,
            rank,
        })
    }

    async fn participant_rank(
        &self,
        participant: &CurrentGameParticipantDto,
    ) -> Result<Option<RankedRecord>, LookupError> {
        let profile = match (&participant.summoner_id, &participant.puuid) {
            (Some(id), _) if !id.is_empty() => SummonerProfile {
                internal_id: id.clone(),
                level: None,
            },
            (_, Some(puuid)) => {
                self.resolve_profile(&PlayerIdentity {
                    puuid: puuid.clone(),
                })
                .await?
            }
            _ => return Err(LookupError::NotFound(Endpoint::Summoner)),
        };

        self.resolve_rank(&profile).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::riot::Platform;
    use crate::riot::models::Tier;
    use crate::shutdown::Shutdown;

    fn client(server: &MockServer) -> RiotClient {
        RiotClient::new(
            "RGAPI-TEST".into(),
            Platform::EUW1,
            Duration::from_secs(5),
            Shutdown::never(),
        )
        .unwrap()
        .with_base_url(&server.base_url())
    }

    fn entry(queue: &str, tier: &str, wins: u32, losses: u32) -> serde_json::Value {
        json!({
            "queueType": queue,
            "tier": tier,
            "rank": "I",
            "leaguePoints": 42,
            "wins": wins,
            "losses": losses
        })
    }

    async fn mock_account(server: &MockServer, name: &str, tag: &str, puuid: &str) {
        let path = format!("/riot/account/v1/accounts/by-riot-id/{name}/{tag}");
        let body = json!({ "puuid": puuid, "gameName": name, "tagLine": tag });
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(body);
            })
            .await;
    }

    async fn mock_summoner(server: &MockServer, puuid: &str, id: &str, level: u32) {
        let path = format!("/lol/summoner/v4/summoners/by-puuid/{puuid}");
        let body = json!({ "id": id, "puuid": puuid, "summonerLevel": level });
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(body);
            })
            .await;
    }

    async fn mock_entries(server: &MockServer, summoner_id: &str, status: u16, body: serde_json::Value) {
        let path = format!("/lol/league/v4/entries/by-summoner/{summoner_id}");
        server
            .mock_async(|when, then| {
                when.method(GET).path(path);
                then.status(status).json_body(body);
            })
            .await;
    }

    #[test]
    fn solo_queue_is_selected_whatever_its_position() {
        let entries: Vec<LeagueEntryDto> = serde_json::from_value(json!([
            entry("RANKED_FLEX_SR", "CHALLENGER", 100, 0),
            entry("RANKED_SOLO_5x5", "SILVER", 5, 5),
            entry("RANKED_TFT", "GOLD", 1, 1),
        ]))
        .unwrap();

        let record = select_solo_queue(entries).unwrap().unwrap();
        assert_eq!(record.tier, Tier::Silver);
        assert_eq!(record.wins, 5);

        let flex_only: Vec<LeagueEntryDto> =
            serde_json::from_value(json!([entry("RANKED_FLEX_SR", "GOLD", 1, 1)])).unwrap();
        assert_eq!(select_solo_queue(flex_only).unwrap(), None);
    }

    #[tokio::test]
    async fn malformed_handle_fails_before_any_request() {
        let server = MockServer::start_async().await;
        let catch_all = server
            .mock_async(|when, then| {
                when.path_contains("/");
                then.status(500);
            })
            .await;
        let client = client(&server);

        for raw in ["NoDelimiter", "#EUW", "Name#"] {
            assert!(matches!(client.lookup(raw).await, Err(LookupError::Format(_))));
            assert!(matches!(client.current_game(raw).await, Err(LookupError::Format(_))));
        }

        assert_eq!(catch_all.hits_async().await, 0);
    }

    #[tokio::test]
    async fn lookup_chains_account_summoner_and_rank() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Zanshoes", "EUW", "puuid-1").await;
        mock_summoner(&server, "puuid-1", "sum-1", 245).await;
        mock_entries(
            &server,
            "sum-1",
            200,
            json!([
                entry("RANKED_FLEX_SR", "GOLD", 3, 3),
                entry("RANKED_SOLO_5x5", "DIAMOND", 70, 20),
            ]),
        )
        .await;

        let lookup = client(&server).lookup("Zanshoes#EUW").await.unwrap();

        assert_eq!(lookup.handle.to_string(), "Zanshoes#EUW");
        assert_eq!(lookup.profile.internal_id, "sum-1");
        assert_eq!(lookup.profile.level, Some(245));
        let rank = lookup.rank.unwrap();
        assert_eq!(rank.tier, Tier::Diamond);
        assert_eq!(rank.win_rate(), 77.8);
    }

    #[tokio::test]
    async fn lookup_without_solo_entry_is_unranked() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Fresh", "EUW", "puuid-2").await;
        mock_summoner(&server, "puuid-2", "sum-2", 12).await;
        mock_entries(&server, "sum-2", 200, json!([])).await;

        let lookup = client(&server).lookup("Fresh#EUW").await.unwrap();

        assert_eq!(lookup.rank, None);
    }

    #[tokio::test]
    async fn unknown_account_short_circuits_the_chain() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path_contains("/riot/account/v1/accounts/by-riot-id/");
                then.status(404);
            })
            .await;
        let summoner = server
            .mock_async(|when, then| {
                when.path_contains("/lol/summoner/v4/");
                then.status(200);
            })
            .await;

        let res = client(&server).lookup("Ghost#EUW").await;

        assert!(matches!(res, Err(LookupError::NotFound(Endpoint::Account))));
        assert_eq!(summoner.hits_async().await, 0);
    }

    #[tokio::test]
    async fn account_without_puuid_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path_contains("/riot/account/v1/accounts/by-riot-id/");
                then.status(200).json_body(json!({ "gameName": "Ghost" }));
            })
            .await;

        let res = client(&server).lookup("Ghost#EUW").await;

        assert!(matches!(res, Err(LookupError::NotFound(Endpoint::Account))));
    }

    #[tokio::test]
    async fn summoner_without_id_is_an_upstream_error() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Half", "EUW", "puuid-3").await;
        server
            .mock_async(|when, then| {
                when.path("/lol/summoner/v4/summoners/by-puuid/puuid-3");
                then.status(200).json_body(json!({ "summonerLevel": 30 }));
            })
            .await;
        let league = server
            .mock_async(|when, then| {
                when.path_contains("/lol/league/v4/");
                then.status(200).json_body(json!([]));
            })
            .await;

        let res = client(&server).lookup("Half#EUW").await;

        assert!(matches!(
            res,
            Err(LookupError::Upstream { endpoint: Endpoint::Summoner, .. })
        ));
        assert_eq!(league.hits_async().await, 0);
    }

    #[tokio::test]
    async fn league_failure_surfaces_status_and_endpoint() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Busy", "EUW", "puuid-4").await;
        mock_summoner(&server, "puuid-4", "sum-4", 80).await;
        mock_entries(&server, "sum-4", 503, json!({ "status": "unavailable" })).await;

        let res = client(&server).lookup("Busy#EUW").await;

        assert!(matches!(
            res,
            Err(LookupError::Upstream {
                endpoint: Endpoint::League,
                status: Some(s),
                ..
            }) if s.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn odd_entries_of_other_queues_do_not_hide_solo_rank() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Arena", "EUW", "puuid-a").await;
        mock_summoner(&server, "puuid-a", "sum-a", 150).await;
        mock_entries(
            &server,
            "sum-a",
            200,
            json!([
                { "queueType": "CHERRY", "wins": 3, "losses": 1, "leaguePoints": 0 },
                entry("RANKED_SOLO_5x5", "GOLD", 5, 5),
            ]),
        )
        .await;

        let lookup = client(&server).lookup("Arena#EUW").await.unwrap();

        let rank = lookup.rank.unwrap();
        assert_eq!(rank.tier, Tier::Gold);
        assert_eq!(rank.games_played(), 10);
    }

    #[tokio::test]
    async fn incomplete_solo_entry_is_a_malformed_body() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Broken", "EUW", "puuid-b").await;
        mock_summoner(&server, "puuid-b", "sum-b", 150).await;
        mock_entries(
            &server,
            "sum-b",
            200,
            json!([{ "queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "wins": 5 }]),
        )
        .await;

        let res = client(&server).lookup("Broken#EUW").await;

        assert!(matches!(
            res,
            Err(LookupError::Upstream {
                endpoint: Endpoint::League,
                status: Some(s),
                ref reason,
            }) if s == StatusCode::OK && reason.contains("malformed body")
        ));
    }

    #[tokio::test]
    async fn forbidden_live_game_is_distinct_from_not_in_game() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Locked", "EUW", "puuid-5").await;
        mock_summoner(&server, "puuid-5", "sum-5", 100).await;
        mock_account(&server, "Idle", "EUW", "puuid-6").await;
        mock_summoner(&server, "puuid-6", "sum-6", 100).await;
        server
            .mock_async(|when, then| {
                when.path("/lol/spectator/v4/active-games/by-summoner/sum-5");
                then.status(403);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.path("/lol/spectator/v4/active-games/by-summoner/sum-6");
                then.status(404);
            })
            .await;
        let client = client(&server);

        let locked = client.current_game("Locked#EUW").await;
        assert!(matches!(locked, Err(LookupError::Forbidden(Endpoint::ActiveGame))));

        let idle = client.current_game("Idle#EUW").await;
        assert!(matches!(idle, Ok(None)));
    }

    #[tokio::test]
    async fn empty_participant_list_means_not_in_game() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Lobby", "EUW", "puuid-7").await;
        mock_summoner(&server, "puuid-7", "sum-7", 100).await;
        server
            .mock_async(|when, then| {
                when.path("/lol/spectator/v4/active-games/by-summoner/sum-7");
                then.status(200).json_body(json!({ "participants": [] }));
            })
            .await;

        assert!(matches!(client(&server).current_game("Lobby#EUW").await, Ok(None)));
    }

    #[tokio::test]
    async fn one_failing_participant_degrades_only_itself() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Host", "EUW", "puuid-host").await;
        mock_summoner(&server, "puuid-host", "sum-host", 150).await;

        let participants: Vec<_> = (0..10)
            .map(|i| {
                json!({
                    "puuid": format!("p{i}"),
                    "teamId": if i < 5 { 100 } else { 200 },
                    "summonerId": format!("s{i}"),
                    "riotId": format!("Player{i}#EUW")
                })
            })
            .collect();
        server
            .mock_async(|when, then| {
                when.path("/lol/spectator/v4/active-games/by-summoner/sum-host");
                then.status(200)
                    .json_body(json!({ "gameMode": "CLASSIC", "participants": participants }));
            })
            .await;
        for i in 0..9 {
            mock_entries(
                &server,
                &format!("s{i}"),
                200,
                json!([entry("RANKED_SOLO_5x5", "GOLD", 10 + i, 10)]),
            )
            .await;
        }
        mock_entries(&server, "s9", 500, json!({ "status": "boom" })).await;

        let game = client(&server)
            .current_game("Host#EUW")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(game.participants.len(), 10);
        assert_eq!(game.team(Team::Blue).count(), 5);
        assert_eq!(game.team(Team::Red).count(), 5);
        assert_eq!(game.degraded(), 1);

        let failed = game
            .participants
            .iter()
            .find(|p| p.display_name == "Player9#EUW")
            .unwrap();
        assert_eq!(failed.rank, ParticipantRank::Unknown);
        assert!(
            game.participants
                .iter()
                .filter(|p| p.display_name != "Player9#EUW")
                .all(|p| matches!(p.rank, ParticipantRank::Ranked(_)))
        );
    }

    #[tokio::test]
    async fn participant_without_summoner_id_is_re_resolved_by_puuid() {
        let server = MockServer::start_async().await;
        mock_account(&server, "Host", "EUW", "puuid-host").await;
        mock_summoner(&server, "puuid-host", "sum-host", 150).await;
        server
            .mock_async(|when, then| {
                when.path("/lol/spectator/v4/active-games/by-summoner/sum-host");
                then.status(200).json_body(json!({
                    "participants": [
                        { "puuid": "p-blue", "teamId": 100, "summonerName": "Blue" },
                        { "puuid": "p-red", "teamId": 200, "summonerName": "Red" }
                    ]
                }));
            })
            .await;
        mock_summoner(&server, "p-blue", "s-blue", 40).await;
        mock_entries(&server, "s-blue", 200, json!([])).await;
        server
            .mock_async(|when, then| {
                when.path("/lol/summoner/v4/summoners/by-puuid/p-red");
                then.status(404);
            })
            .await;

        let game = client(&server)
            .current_game("Host#EUW")
            .await
            .unwrap()
            .unwrap();

        let blue: Vec<_> = game.team(Team::Blue).collect();
        let red: Vec<_> = game.team(Team::Red).collect();
        assert_eq!(blue[0].rank, ParticipantRank::Unranked);
        assert_eq!(red[0].rank, ParticipantRank::Unknown);
        assert_eq!(game.degraded(), 1);
    }
}
