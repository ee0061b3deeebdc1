pub mod fun;
pub mod moderation;
pub mod registry;
pub mod utility;

use warden_core::{Data, Error};

/// Registry metadata for one command.
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

/// Every command in registration order. Categories group in order of first
/// appearance; the help viewer renders one page per category.
pub const COMMANDS: &[CommandMeta] = &[
    fun::joke::META,
    fun::roll::META,
    fun::coinflip::META,
    fun::eightball::META,
    fun::quote::META,
    fun::meme::META,
    fun::cat::META,
    fun::dog::META,
    moderation::kick::META,
    moderation::ban::META,
    moderation::unban::META,
    moderation::timeout::META,
    moderation::untimeout::META,
    moderation::purge::META,
    moderation::warn::META,
    moderation::warnings::META,
    utility::ping::META,
    utility::userinfo::META,
    utility::serverinfo::META,
    utility::avatar::META,
    utility::botinfo::META,
    utility::invite::META,
    utility::help::META,
];

pub(crate) fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        fun::joke::joke(),
        fun::roll::roll(),
        fun::coinflip::coinflip(),
        fun::eightball::eightball(),
        fun::quote::quote(),
        fun::meme::meme(),
        fun::cat::cat(),
        fun::dog::dog(),
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::unban::unban(),
        moderation::timeout::timeout(),
        moderation::untimeout::untimeout(),
        moderation::purge::purge(),
        moderation::warn::warn(),
        moderation::warnings::warnings(),
        utility::ping::ping(),
        utility::userinfo::userinfo(),
        utility::serverinfo::serverinfo(),
        utility::avatar::avatar(),
        utility::botinfo::botinfo(),
        utility::invite::invite(),
        utility::help::help(),
    ]
}
