pub mod download;
pub mod falling_logos;
pub mod skill_network;
