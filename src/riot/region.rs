use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(String);

/// Platform routing values (Summoner-v4, League-v4, Spectator-v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    BR1,
    LA1,
    LA2,
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
    ME1,
    RU,
    TR1,
    OC1,
    PH2,
    SG2,
    TH2,
    TW2,
    VN2,
}

impl Platform {
    /// Routing host, human readable name and regional cluster.
    fn routing(self) -> (&'static str, &'static str, Region) {
        match self {
            Self::BR1 => ("br1", "Brazil", Region::Americas),
            Self::LA1 => ("la1", "Latin America North", Region::Americas),
            Self::LA2 => ("la2", "Latin America South", Region::Americas),
            Self::NA1 => ("na1", "North America", Region::Americas),
            Self::JP1 => ("jp1", "Japan", Region::Asia),
            Self::KR => ("kr", "Korea", Region::Asia),
            Self::EUN1 => ("eun1", "EU Nordic & East", Region::Europe),
            Self::EUW1 => ("euw1", "EU West", Region::Europe),
            Self::ME1 => ("me1", "Middle East", Region::Europe),
            Self::RU => ("ru", "Russia", Region::Europe),
            Self::TR1 => ("tr1", "Turkey", Region::Europe),
            Self::OC1 => ("oc1", "Oceania", Region::Sea),
            Self::PH2 => ("ph2", "Philippines", Region::Sea),
            Self::SG2 => ("sg2", "Singapore", Region::Sea),
            Self::TH2 => ("th2", "Thailand", Region::Sea),
            Self::TW2 => ("tw2", "Taiwan", Region::Sea),
            Self::VN2 => ("vn2", "Vietnam", Region::Sea),
        }
    }

    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        self.routing().0
    }

    pub fn display_name(&self) -> &'static str {
        self.routing().1
    }

    pub fn to_region(self) -> Region {
        self.routing().2
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "NA" | "NA1" => Ok(Self::NA1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "ME" | "ME1" => Ok(Self::ME1),
            "RU" => Ok(Self::RU),
            "TR" | "TR1" => Ok(Self::TR1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "PH" | "PH2" => Ok(Self::PH2),
            "SG" | "SG2" => Ok(Self::SG2),
            "TH" | "TH2" => Ok(Self::TH2),
            "TW" | "TW2" => Ok(Self::TW2),
            "VN" | "VN2" => Ok(Self::VN2),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Regional routing values (Account-v1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Region {
    pub fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self.as_str())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_parse_case_insensitively() {
        assert_eq!("euw".parse::<Platform>().unwrap(), Platform::EUW1);
        assert_eq!("EUNE".parse::<Platform>().unwrap(), Platform::EUN1);
        assert_eq!(" kr ".parse::<Platform>().unwrap(), Platform::KR);
        assert!("atlantis".parse::<Platform>().is_err());
    }

    #[test]
    fn platform_routes_to_its_cluster() {
        assert_eq!(Platform::EUW1.to_region(), Region::Europe);
        assert_eq!(Platform::NA1.to_region(), Region::Americas);
        assert_eq!(Platform::EUW1.base_url(), "https://euw1.api.riotgames.com");
        assert_eq!(Region::Europe.base_url(), "https://europe.api.riotgames.com");
        assert_eq!(Platform::EUW1.to_string(), "EUW1");
    }
}
