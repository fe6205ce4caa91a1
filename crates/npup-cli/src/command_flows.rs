use std::cmp::Ordering;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use npup_core::{
    compare_version_labels, parse_version_components, Mirror, LAUNCHER_NAMES, UNKNOWN_VERSION,
};
use npup_installer::{uninstall_distribution, DistLayout, UninstallStatus};

use crate::core_flows::{
    fetch_latest_version_label, install_distribution, print_install_outcome,
    probe_installed_version_label,
};
use crate::render::{current_output_style, render_status_line, TerminalRenderer};

const DECLINE_HINT: &str = "use 'npm install -g npm' to update the local version manually";

pub(crate) enum InstallRequest {
    Latest,
    Explicit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateDecision {
    Install,
    AlreadyCurrent,
    LocalNewer,
}

pub(crate) fn run_install_command(
    layout: &DistLayout,
    request: InstallRequest,
    mirror: Mirror,
    assume_yes: bool,
) -> Result<()> {
    let style = current_output_style();
    let renderer = TerminalRenderer::from_style(style);

    let (target_version, confirm_before_install) = match request {
        InstallRequest::Latest => (fetch_latest_version_label()?, true),
        InstallRequest::Explicit(label) => (label, false),
    };
    let local_version = probe_installed_version_label(layout);

    let decision = decide_update_action(&target_version, &local_version)?;
    match decision {
        UpdateDecision::AlreadyCurrent | UpdateDecision::LocalNewer => {
            for line in format_check_lines(&target_version, &local_version, decision) {
                println!("{line}");
            }
            return Ok(());
        }
        UpdateDecision::Install => {}
    }

    if confirm_before_install {
        renderer.print_status(
            "warn",
            &format_version_report_line(&target_version, &local_version, ">"),
        );
        if !assume_yes && !confirm_update(&target_version)? {
            renderer.print_status("step", DECLINE_HINT);
            return Ok(());
        }
    }

    let outcome = install_distribution(layout, &target_version, mirror, style)?;
    print_install_outcome(&outcome, style);
    Ok(())
}

pub(crate) fn run_check_command(layout: &DistLayout) -> Result<()> {
    let remote_version = fetch_latest_version_label()?;
    let local_version = probe_installed_version_label(layout);
    let decision = decide_update_action(&remote_version, &local_version)?;
    for line in format_check_lines(&remote_version, &local_version, decision) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_uninstall_command(layout: &DistLayout) -> Result<()> {
    let local_version = probe_installed_version_label(layout);
    let status = uninstall_distribution(layout)?;
    for line in format_uninstall_messages(&local_version, status) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_doctor_command(layout: &DistLayout, settings_file: &Path, mirror: Mirror) {
    let style = current_output_style();
    for line in format_doctor_lines(layout, settings_file, mirror) {
        println!("{}", render_status_line(style, "step", &line));
    }
}

pub(crate) fn decide_update_action(target: &str, local: &str) -> Result<UpdateDecision> {
    if local == UNKNOWN_VERSION {
        parse_version_components(target)?;
        return Ok(UpdateDecision::Install);
    }
    match compare_version_labels(target, local)? {
        Ordering::Greater => Ok(UpdateDecision::Install),
        Ordering::Equal => Ok(UpdateDecision::AlreadyCurrent),
        Ordering::Less => Ok(UpdateDecision::LocalNewer),
    }
}

fn confirm_update(version: &str) -> Result<bool> {
    print!("update local npm to {version} [Y/n]? ");
    io::stdout()
        .flush()
        .context("failed to flush the confirmation prompt")?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read the confirmation answer")?;
    Ok(parse_confirmation(&input))
}

pub(crate) fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}

pub(crate) fn format_check_lines(
    remote_version: &str,
    local_version: &str,
    decision: UpdateDecision,
) -> Vec<String> {
    match decision {
        UpdateDecision::Install => vec![
            format_version_report_line(remote_version, local_version, ">"),
            format!("update available: run 'npup install' to install npm {remote_version}"),
        ],
        UpdateDecision::AlreadyCurrent => vec![
            format_version_report_line(remote_version, local_version, "="),
            "local npm is up to date".to_string(),
        ],
        UpdateDecision::LocalNewer => vec![
            format_version_report_line(remote_version, local_version, "<"),
            "local npm is newer than the latest release".to_string(),
        ],
    }
}

fn format_version_report_line(remote_version: &str, local_version: &str, symbol: &str) -> String {
    format!("npm remote version {remote_version} {symbol} local version {local_version}")
}

pub(crate) fn format_uninstall_messages(
    local_version: &str,
    status: UninstallStatus,
) -> Vec<String> {
    match status {
        UninstallStatus::NotInstalled => vec!["npm is not installed".to_string()],
        UninstallStatus::Uninstalled if local_version == UNKNOWN_VERSION => {
            vec!["uninstalled npm".to_string()]
        }
        UninstallStatus::Uninstalled => vec![format!("uninstalled npm {local_version}")],
    }
}

pub(crate) fn format_doctor_lines(
    layout: &DistLayout,
    settings_file: &Path,
    mirror: Mirror,
) -> Vec<String> {
    let launchers = LAUNCHER_NAMES
        .iter()
        .map(|name| layout.launcher_path(name).display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("root: {}", layout.root().display()),
        format!("modules: {}", layout.modules_dir().display()),
        format!("package: {}", layout.package_dir().display()),
        format!("launchers: {launchers}"),
        format!("settings: {}", settings_file.display()),
        format!("mirror: {}", mirror.as_str()),
    ]
}
