use std::collections::HashMap;

use poise::serenity_prelude as serenity;

/// Resolve a member's effective guild permissions from their roles.
///
/// The server owner always resolves to the full permission set.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    let mut resolved = serenity::Permissions::empty();
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    for role in roles.values() {
        if role.id == everyone_role_id || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

pub async fn has_user_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    let perms = resolve_user_permissions(http, guild_id, user_id).await?;

    Ok(perms.contains(serenity::Permissions::ADMINISTRATOR) || perms.contains(required))
}

/// Highest role position held by a member; 0 when they only hold @everyone.
pub fn top_role_position(
    member_roles: &[serenity::RoleId],
    positions: &HashMap<serenity::RoleId, u16>,
) -> u16 {
    member_roles
        .iter()
        .filter_map(|role_id| positions.get(role_id).copied())
        .max()
        .unwrap_or(0)
}

/// Role-hierarchy rule for moderation actions: the actor must strictly
/// outrank the target, except the server owner who outranks everyone.
pub fn hierarchy_allows(actor_top: u16, target_top: u16, actor_is_owner: bool) -> bool {
    actor_is_owner || actor_top > target_top
}

/// Whether the actor may moderate the target under role hierarchy rules.
///
/// A target who is not a member of the guild (e.g. banning by ID) has no
/// roles to outrank and is always allowed.
pub async fn actor_outranks_target(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    actor_id: serenity::UserId,
    target_id: serenity::UserId,
) -> anyhow::Result<bool> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == actor_id {
        return Ok(true);
    }

    let Ok(target) = guild_id.member(http, target_id).await else {
        return Ok(true);
    };
    let actor = guild_id.member(http, actor_id).await?;

    let roles = guild_id.roles(http).await?;
    let positions: HashMap<serenity::RoleId, u16> = roles
        .iter()
        .map(|(role_id, role)| (*role_id, role.position))
        .collect();

    Ok(hierarchy_allows(
        top_role_position(&actor.roles, &positions),
        top_role_position(&target.roles, &positions),
        false,
    ))
}

/// Invite-link permission set used when `INVITE_PERMISSIONS` is not
/// configured: the moderation actions the bot performs, nothing broader.
pub fn default_invite_permissions() -> serenity::Permissions {
    serenity::Permissions::VIEW_CHANNEL
        | serenity::Permissions::SEND_MESSAGES
        | serenity::Permissions::EMBED_LINKS
        | serenity::Permissions::READ_MESSAGE_HISTORY
        | serenity::Permissions::KICK_MEMBERS
        | serenity::Permissions::BAN_MEMBERS
        | serenity::Permissions::MODERATE_MEMBERS
        | serenity::Permissions::MANAGE_MESSAGES
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use poise::serenity_prelude as serenity;

    use super::{hierarchy_allows, top_role_position};

    fn role_id(id: u64) -> serenity::RoleId {
        serenity::RoleId::new(id)
    }

    #[test]
    fn top_position_picks_the_highest_held_role() {
        let positions = HashMap::from([(role_id(10), 3), (role_id(11), 7), (role_id(12), 5)]);

        assert_eq!(top_role_position(&[role_id(10), role_id(12)], &positions), 5);
        assert_eq!(
            top_role_position(&[role_id(10), role_id(11), role_id(12)], &positions),
            7
        );
    }

    #[test]
    fn top_position_defaults_to_everyone() {
        let positions = HashMap::from([(role_id(10), 3)]);

        assert_eq!(top_role_position(&[], &positions), 0);
        assert_eq!(top_role_position(&[role_id(99)], &positions), 0);
    }

    #[test]
    fn equal_or_higher_targets_are_rejected() {
        assert!(!hierarchy_allows(5, 5, false));
        assert!(!hierarchy_allows(5, 9, false));
        assert!(hierarchy_allows(9, 5, false));
    }

    #[test]
    fn the_owner_outranks_everyone() {
        assert!(hierarchy_allows(0, 9, true));
        assert!(hierarchy_allows(5, 5, true));
    }
}
