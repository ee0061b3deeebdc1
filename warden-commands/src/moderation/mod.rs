pub mod ban;
pub mod embeds;
pub mod kick;
pub mod purge;
pub mod timeout;
pub mod unban;
pub mod untimeout;
pub mod warn;
pub mod warnings;
