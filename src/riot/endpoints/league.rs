use crate::error::{Endpoint, LookupError};
use crate::riot::client::RiotClient;
use crate::riot::types::LeagueEntryDto;

impl RiotClient {
    /// Get league entries (ranked info) of every queue for a summoner
    /// Uses platform routing (euw1, na1, kr, etc.)
    pub async fn get_league_entries_by_summoner(
        &self,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntryDto>, LookupError> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_url(),
            urlencoding::encode(summoner_id)
        );

        self.get(&url, Endpoint::League).await
    }
}
