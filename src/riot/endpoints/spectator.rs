use crate::error::{Endpoint, LookupError};
use crate::riot::client::RiotClient;
use crate::riot::types::CurrentGameInfoDto;

impl RiotClient {
    /// Get the game a summoner is currently playing, `None` when not in game.
    ///
    /// Riot restricts this endpoint to partner keys, others get [`LookupError::Forbidden`].
    pub async fn get_active_game_by_summoner(
        &self,
        summoner_id: &str,
    ) -> Result<Option<CurrentGameInfoDto>, LookupError> {
        let url = format!(
            "{}/lol/spectator/v4/active-games/by-summoner/{}",
            self.platform_url(),
            urlencoding::encode(summoner_id)
        );

        match self.get(&url, Endpoint::ActiveGame).await {
            Ok(game) => Ok(Some(game)),
            Err(LookupError::NotFound(Endpoint::ActiveGame)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
