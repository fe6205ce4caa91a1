use anyhow::Result;
use npup_core::{load_settings, resolve_install_root, settings_path, Mirror};
use npup_installer::DistLayout;

use crate::command_flows::{
    run_check_command, run_doctor_command, run_install_command, run_uninstall_command,
    InstallRequest,
};
use crate::completion::write_completions_script;
use crate::{Cli, Commands};

pub(crate) fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install {
            version,
            mirror,
            yes,
        } => {
            let settings = load_settings(&settings_path()?)?;
            let layout = DistLayout::new(resolve_install_root(cli.root.as_deref(), &settings)?);
            let mirror = match mirror.as_deref() {
                Some(value) => Mirror::parse(value)?,
                None => settings.mirror.unwrap_or_default(),
            };
            let request = match version {
                Some(label) => InstallRequest::Explicit(label),
                None => InstallRequest::Latest,
            };
            run_install_command(&layout, request, mirror, yes)?;
        }
        Commands::Uninstall => {
            let settings = load_settings(&settings_path()?)?;
            let layout = DistLayout::new(resolve_install_root(cli.root.as_deref(), &settings)?);
            run_uninstall_command(&layout)?;
        }
        Commands::Check => {
            let settings = load_settings(&settings_path()?)?;
            let layout = DistLayout::new(resolve_install_root(cli.root.as_deref(), &settings)?);
            run_check_command(&layout)?;
        }
        Commands::Doctor => {
            let settings_file = settings_path()?;
            let settings = load_settings(&settings_file)?;
            let layout = DistLayout::new(resolve_install_root(cli.root.as_deref(), &settings)?);
            run_doctor_command(&layout, &settings_file, settings.mirror.unwrap_or_default());
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Completions { shell } => {
            let mut stdout = std::io::stdout();
            write_completions_script(shell, &mut stdout)?;
        }
    }
    Ok(())
}
