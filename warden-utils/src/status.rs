use poise::serenity_prelude as serenity;
use rand::Rng;

/// Seconds between presence updates.
pub const STATUS_ROTATION_SECS: u64 = 30;

/// One rotating presence line. Count-bearing variants interpolate live
/// cache numbers at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTemplate {
    WatchingRuleBreakers,
    ListeningServers,
    PlayingBanHammer,
    WatchingUsers,
}

pub const STATUS_TEMPLATES: &[StatusTemplate] = &[
    StatusTemplate::WatchingRuleBreakers,
    StatusTemplate::ListeningServers,
    StatusTemplate::PlayingBanHammer,
    StatusTemplate::WatchingUsers,
];

/// Render a template into gateway activity data.
pub fn render_status(
    template: StatusTemplate,
    guild_count: usize,
    member_count: u64,
) -> serenity::ActivityData {
    match template {
        StatusTemplate::WatchingRuleBreakers => serenity::ActivityData::watching("for rule-breakers"),
        StatusTemplate::ListeningServers => {
            serenity::ActivityData::listening(format!("to {} servers", guild_count))
        }
        StatusTemplate::PlayingBanHammer => serenity::ActivityData::playing("with the ban hammer"),
        StatusTemplate::WatchingUsers => {
            serenity::ActivityData::watching(format!("{} users", member_count))
        }
    }
}

/// Pick the next presence uniformly at random, or `None` while the gateway
/// connection is not yet established (the rotator then skips the tick).
pub fn next_status(
    connected: bool,
    guild_count: usize,
    member_count: u64,
    rng: &mut impl Rng,
) -> Option<serenity::ActivityData> {
    if !connected {
        return None;
    }

    let template = STATUS_TEMPLATES[rng.gen_range(0..STATUS_TEMPLATES.len())];
    Some(render_status(template, guild_count, member_count))
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{STATUS_TEMPLATES, StatusTemplate, next_status, render_status};

    #[test]
    fn count_templates_interpolate_live_values() {
        let activity = render_status(StatusTemplate::ListeningServers, 3, 0);
        assert_eq!(activity.name, "to 3 servers");
        assert_eq!(activity.kind, serenity::ActivityType::Listening);

        let activity = render_status(StatusTemplate::WatchingUsers, 0, 1_234);
        assert_eq!(activity.name, "1234 users");
        assert_eq!(activity.kind, serenity::ActivityType::Watching);
    }

    #[test]
    fn fixed_templates_render_verbatim() {
        let activity = render_status(StatusTemplate::WatchingRuleBreakers, 9, 9);
        assert_eq!(activity.name, "for rule-breakers");

        let activity = render_status(StatusTemplate::PlayingBanHammer, 9, 9);
        assert_eq!(activity.name, "with the ban hammer");
        assert_eq!(activity.kind, serenity::ActivityType::Playing);
    }

    #[test]
    fn no_presence_is_picked_before_the_gateway_is_up() {
        let mut rng = rand::thread_rng();
        assert!(next_status(false, 5, 100, &mut rng).is_none());
        assert!(next_status(true, 5, 100, &mut rng).is_some());
    }

    #[test]
    fn every_template_is_in_the_rotation() {
        assert_eq!(STATUS_TEMPLATES.len(), 4);
    }
}
