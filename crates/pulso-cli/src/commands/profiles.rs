//! Profile management commands.

use clap::{Args, Subcommand};
use pulso_config::{
    ensure_user_profiles_dir, factory_profiles, get_factory_profile, list_user_profiles,
    profile_name_from_path, system_profiles_dir, user_profiles_dir,
};

use crate::common::load_profile;

#[derive(Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    command: ProfilesCommand,
}

#[derive(Subcommand)]
enum ProfilesCommand {
    /// List available profiles (factory and user)
    List {
        /// Show only factory profiles
        #[arg(long)]
        factory: bool,

        /// Show only user profiles
        #[arg(long)]
        user: bool,
    },

    /// Show details of a profile
    Show {
        /// Profile name or path
        name: String,
    },

    /// Copy a factory profile to the user directory for customization
    Copy {
        /// Factory profile name
        source: String,

        /// New profile name (defaults to the source name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show profile directories
    Paths,
}

pub fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    match args.command {
        ProfilesCommand::List { factory, user } => list(factory, user),
        ProfilesCommand::Show { name } => show(&name),
        ProfilesCommand::Copy { source, name } => copy(&source, name.as_deref()),
        ProfilesCommand::Paths => paths(),
    }
}

fn list(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Profiles:");
        println!("=================");
        for profile in factory_profiles() {
            let desc = profile.description.as_deref().unwrap_or("");
            println!("  {:16} - {}", profile.name, desc);
        }
        println!();
    }

    if show_user {
        println!("User Profiles:");
        println!("==============");
        let user_profiles = list_user_profiles();
        if user_profiles.is_empty() {
            println!("  (none)");
            println!();
            println!("  Copy a factory profile with: pulso profiles copy <name>\n");
        } else {
            for path in user_profiles {
                let name = profile_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
                println!("  {:16} ({})", name, path.display());
            }
            println!();
        }
    }

    Ok(())
}

fn show(name: &str) -> anyhow::Result<()> {
    let profile = load_profile(name)?;

    println!("Profile: {}", profile.name);
    if let Some(desc) = &profile.description {
        println!("  {desc}");
    }
    println!();
    println!("  max_taps               = {}", profile.max_taps);
    println!("  decimal_places         = {}", profile.decimal_places);
    println!("  smoothing_factor       = {}", profile.smoothing_factor);
    println!("  tempo_change_threshold = {}", profile.tempo_change_threshold);
    println!("  pause_threshold_ms     = {}", profile.pause_threshold_ms);

    // Surface tuning problems when showing a file-based profile
    if let Err(e) = profile.to_config() {
        println!();
        println!("  warning: {e}");
    }

    Ok(())
}

fn copy(source: &str, name: Option<&str>) -> anyhow::Result<()> {
    let Some(mut profile) = get_factory_profile(source) else {
        anyhow::bail!(
            "'{}' is not a factory profile. Use 'pulso profiles list --factory'.",
            source
        );
    };

    if let Some(name) = name {
        profile.name = name.to_string();
    }

    let dir = ensure_user_profiles_dir()?;
    let path = dir.join(format!("{}.toml", profile.name));
    if path.exists() {
        anyhow::bail!("profile already exists at {}", path.display());
    }

    profile.save(&path)?;
    println!("Copied '{}' to {}", source, path.display());
    Ok(())
}

fn paths() -> anyhow::Result<()> {
    println!("Profile directories:");
    println!("  user:   {}", user_profiles_dir().display());
    println!("  system: {}", system_profiles_dir().display());
    Ok(())
}
