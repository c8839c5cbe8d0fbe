use crate::error::{Endpoint, LookupError};
use crate::riot::client::RiotClient;
use crate::riot::types::AccountDto;

pub(crate) fn account_url(base: &str, game_name: &str, tag_line: &str) -> String {
    format!(
        "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
        base,
        urlencoding::encode(game_name),
        urlencoding::encode(tag_line)
    )
}

impl RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, LookupError> {
        let url = account_url(self.region_url(), game_name, tag_line);

        self.get(&url, Endpoint::Account).await
    }
}
