mod account;
mod league;
mod spectator;
mod summoner;
