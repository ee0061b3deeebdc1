use std::collections::HashSet;

use anyhow::bail;

use warden_core::{Data, Error};

use crate::{COMMANDS, CommandMeta};

/// Build the command set for the framework, validating the registry first.
///
/// A duplicate command name is a bug in the registration table; it aborts
/// process startup rather than letting one handler shadow another.
pub fn command_set() -> anyhow::Result<Vec<poise::Command<Data, Error>>> {
    if let Some(name) = first_duplicate(COMMANDS.iter().map(|meta| meta.name)) {
        bail!("duplicate command name in registry: {name}");
    }

    let commands = crate::commands();
    if commands.len() != COMMANDS.len() {
        bail!(
            "command table mismatch: {} handlers for {} registry entries",
            commands.len(),
            COMMANDS.len()
        );
    }

    Ok(commands)
}

/// Look up a registry entry by exact name.
pub fn resolve(name: &str) -> Option<&'static CommandMeta> {
    COMMANDS.iter().find(|meta| meta.name == name)
}

/// All registry entries grouped by category: categories in first-appearance
/// order, commands in registration order within each category.
pub fn metas_by_category() -> Vec<(&'static str, Vec<&'static CommandMeta>)> {
    let mut groups: Vec<(&'static str, Vec<&'static CommandMeta>)> = Vec::new();

    for meta in COMMANDS {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == meta.category)
        {
            Some((_, metas)) => metas.push(meta),
            None => groups.push((meta.category, vec![meta])),
        }
    }

    groups
}

fn first_duplicate<'a>(mut names: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.find(|name| !seen.insert(*name))
}

#[cfg(test)]
mod tests {
    use super::{command_set, first_duplicate, metas_by_category, resolve};

    #[test]
    fn the_registry_builds_without_duplicates() {
        let commands = command_set().expect("registry should build");
        assert_eq!(commands.len(), super::COMMANDS.len());
    }

    #[test]
    fn duplicates_are_detected() {
        assert_eq!(
            first_duplicate(["kick", "ban", "kick"].into_iter()),
            Some("kick")
        );
        assert_eq!(first_duplicate(["kick", "ban"].into_iter()), None);
    }

    #[test]
    fn resolve_finds_registered_names_only() {
        let meta = resolve("warn").expect("warn should be registered");
        assert_eq!(meta.category, "moderation");

        assert!(resolve("selfdestruct").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn grouping_preserves_registration_order() {
        let groups = metas_by_category();

        let categories: Vec<&str> = groups.iter().map(|(category, _)| *category).collect();
        assert_eq!(categories, ["fun", "moderation", "utility"]);

        let (_, moderation) = &groups[1];
        assert_eq!(moderation[0].name, "kick");
        assert!(moderation.iter().all(|meta| meta.category == "moderation"));

        // Restartable: a second listing sees the same sequence.
        assert_eq!(metas_by_category().len(), groups.len());
    }
}
