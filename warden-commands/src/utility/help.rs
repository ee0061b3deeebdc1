use warden_core::{Context, Error};
use warden_utils::formatting::display_category;
use warden_utils::pagination::paginate_embed_pages;

use crate::CommandMeta;
use crate::registry;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Shows all available commands.",
    category: "utility",
    usage: "/help [command]",
};

#[poise::command(slash_command, category = "Utility", ephemeral)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "Show usage for one specific command"] command: Option<String>,
) -> Result<(), Error> {
    if let Some(raw) = command.as_deref() {
        let name = raw.trim().trim_start_matches('/');
        match registry::resolve(name) {
            Some(meta) => {
                ctx.say(format!("`{}`\n{}", meta.usage, meta.desc)).await?;
            }
            None => {
                ctx.say(format!("No command named `{}`.", name)).await?;
            }
        }
        return Ok(());
    }

    // Building and sending the full menu can be slow; acknowledge first.
    ctx.defer_ephemeral().await?;

    let pages: Vec<String> = registry::metas_by_category()
        .iter()
        .map(|(category, metas)| render_category_page(category, metas))
        .collect();

    paginate_embed_pages(ctx, "Available Commands", &pages, true).await?;
    Ok(())
}

fn render_category_page(category: &str, metas: &[&CommandMeta]) -> String {
    let mut out = format!("**{} Commands**\n\n", display_category(category));

    for meta in metas {
        // The help entry itself adds nothing to the listing.
        if meta.name == META.name {
            continue;
        }
        out.push_str(&format!("`{}`\n{}\n\n", meta.usage, meta.desc));
    }

    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::render_category_page;
    use crate::CommandMeta;

    const FAKE: CommandMeta = CommandMeta {
        name: "poke",
        desc: "Pokes someone.",
        category: "fun",
        usage: "/poke <user>",
    };

    #[test]
    fn category_pages_list_signatures_and_descriptions() {
        let page = render_category_page("fun", &[&FAKE]);

        assert!(page.starts_with("**Fun Commands**"));
        assert!(page.contains("`/poke <user>`"));
        assert!(page.contains("Pokes someone."));
    }

    #[test]
    fn the_help_entry_is_not_listed_in_its_own_menu() {
        let page = render_category_page("utility", &[&super::META, &FAKE]);

        assert!(!page.contains("/help"));
        assert!(page.contains("/poke"));
    }
}
