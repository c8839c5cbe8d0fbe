//! Rule based smurf detection over a player's level and solo/duo record.

use tracing::debug;

use super::models::{RankedRecord, SummonerProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub is_smurf: bool,
    pub reason: Option<String>,
}

impl Verdict {
    fn smurf(reason: String) -> Self {
        Self {
            is_smurf: true,
            reason: Some(reason),
        }
    }

    fn clean() -> Self {
        Self {
            is_smurf: false,
            reason: None,
        }
    }

    /// Not flagged, with the reason the rules could not be applied.
    fn inconclusive(reason: &str) -> Self {
        Self {
            is_smurf: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Rules are evaluated in order, the first one matching wins.
///
/// Without ranked data there is not enough evidence and the account is reported clean. A
/// ranked account whose level is unknown is not flagged either, the verdict says why.
pub fn classify(profile: &SummonerProfile, rank: Option<&RankedRecord>) -> Verdict {
    let Some(rank) = rank else {
        return Verdict::clean();
    };

    let Some(level) = profile.level else {
        debug!(tier = %rank.tier, "summoner level unknown, smurf rules skipped");
        return Verdict::inconclusive("Summoner level unknown, not enough evidence to judge.");
    };

    let games = rank.games_played();
    let win_rate = rank.win_rate();

    if level < 30 && win_rate > 65.0 {
        return Verdict::smurf(format!(
            "Likely smurf: level under 30 with a high win rate ({win_rate}%)."
        ));
    }

    if level < 50 && win_rate > 60.0 && games > 20 {
        return Verdict::smurf(format!(
            "Low level ({level}) with a {win_rate}% ranked win rate over {games} games."
        ));
    }

    if rank.tier.is_high_elo() && level < 60 {
        return Verdict::smurf(format!(
            "High rank ({}) for a low level account ({level}).",
            rank.tier
        ));
    }

    Verdict::clean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riot::models::Tier;

    fn profile(level: Option<u32>) -> SummonerProfile {
        SummonerProfile {
            internal_id: "id".into(),
            level,
        }
    }

    fn rank(tier: Tier, wins: u32, losses: u32) -> RankedRecord {
        RankedRecord {
            tier,
            division: "I".into(),
            league_points: 0,
            wins,
            losses,
        }
    }

    #[test]
    fn low_level_with_high_win_rate_is_flagged_by_first_rule() {
        let verdict = classify(&profile(Some(25)), Some(&rank(Tier::Silver, 70, 20)));

        assert!(verdict.is_smurf);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("under 30"));
        assert!(reason.contains("77.8%"));
    }

    #[test]
    fn second_rule_needs_enough_games() {
        let verdict = classify(&profile(Some(45)), Some(&rank(Tier::Gold, 30, 15)));

        assert!(verdict.is_smurf);
        let reason = verdict.reason.unwrap();
        assert!(reason.contains("(45)"));
        assert!(reason.contains("66.7%"));
        assert!(reason.contains("45 games"));

        let few_games = classify(&profile(Some(45)), Some(&rank(Tier::Gold, 14, 6)));
        assert_eq!(few_games, Verdict::clean());
    }

    #[test]
    fn high_tier_on_low_level_is_flagged_by_third_rule() {
        let verdict = classify(&profile(Some(55)), Some(&rank(Tier::Diamond, 10, 10)));

        assert!(verdict.is_smurf);
        assert!(verdict.reason.unwrap().contains("Diamond"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // Matches all three rules, the first one is reported.
        let verdict = classify(&profile(Some(20)), Some(&rank(Tier::Master, 90, 10)));

        assert!(verdict.reason.unwrap().contains("under 30"));
    }

    #[test]
    fn missing_rank_is_never_a_smurf() {
        for level in [None, Some(0), Some(1), Some(29), Some(500)] {
            assert_eq!(classify(&profile(level), None), Verdict::clean());
        }
    }

    #[test]
    fn missing_level_is_never_a_smurf_but_says_why() {
        for record in [rank(Tier::Challenger, 100, 0), rank(Tier::Diamond, 70, 20)] {
            let verdict = classify(&profile(None), Some(&record));

            assert!(!verdict.is_smurf);
            assert!(verdict.reason.unwrap().contains("level unknown"));
        }
    }

    #[test]
    fn no_games_played_does_not_trigger_win_rate_rules() {
        assert_eq!(
            classify(&profile(Some(10)), Some(&rank(Tier::Unranked, 0, 0))),
            Verdict::clean()
        );
    }

    #[test]
    fn seasoned_account_is_clean() {
        assert_eq!(
            classify(&profile(Some(312)), Some(&rank(Tier::Diamond, 200, 150))),
            Verdict::clean()
        );
    }
}
