use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use npup_core::{parse_version_descriptor, Mirror, UNKNOWN_VERSION, VERSION_DESCRIPTOR_URL};
use npup_installer::{install_from_archive, DistLayout};

use crate::render::{render_status_line, OutputStyle, TerminalRenderer};

const USER_AGENT: &str = concat!("npup/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);
const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug)]
pub(crate) struct InstallOutcome {
    pub version: String,
    pub package_dir: PathBuf,
    pub root: PathBuf,
}

fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .context("failed to build http client")
}

pub(crate) fn fetch_latest_version_label() -> Result<String> {
    let client = http_client()?;
    let response = client
        .get(VERSION_DESCRIPTOR_URL)
        .header("User-Agent", USER_AGENT)
        .send()
        .with_context(|| {
            format!("failed to fetch the npm version descriptor from {VERSION_DESCRIPTOR_URL}")
        })?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "version descriptor request returned status {}: {VERSION_DESCRIPTOR_URL}",
            response.status()
        ));
    }
    let body = response
        .text()
        .context("failed to read the npm version descriptor body")?;
    parse_version_descriptor(&body)
}

pub(crate) fn probe_installed_version_label(layout: &DistLayout) -> String {
    let launcher = if cfg!(windows) { "npm.cmd" } else { "npm" };
    let mut command = Command::new(layout.launcher_path(launcher));
    command.arg("-v");
    match run_command(&mut command, "npm version probe") {
        Ok(stdout) => {
            let version = stdout.trim().to_string();
            if version.is_empty() {
                UNKNOWN_VERSION.to_string()
            } else {
                version
            }
        }
        Err(_) => UNKNOWN_VERSION.to_string(),
    }
}

pub(crate) fn run_command(command: &mut Command, context_message: &str) -> Result<String> {
    let output = command
        .output()
        .with_context(|| format!("{context_message}: command failed to start"))?;
    if !output.status.success() {
        return Err(anyhow!(
            "{context_message}: command exited with {} (stderr: {})",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub(crate) fn download_archive(url: &str, destination: &Path, style: OutputStyle) -> Result<()> {
    let client = http_client()?;
    let mut response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .with_context(|| format!("failed to download {url}"))?;
    if !response.status().is_success() {
        return Err(anyhow!(
            "download request returned status {}: {url}",
            response.status()
        ));
    }

    let total_bytes = response.content_length().unwrap_or(0);
    let renderer = TerminalRenderer::from_style(style);
    let mut progress = renderer.start_progress("download", total_bytes);

    let mut out = File::create(destination)
        .with_context(|| format!("failed to create archive file: {}", destination.display()))?;
    let mut buffer = vec![0_u8; DOWNLOAD_CHUNK_SIZE];
    let mut copied = 0_u64;
    loop {
        let read = match response.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) => {
                progress.finish_abandon();
                return Err(err).with_context(|| format!("failed to download {url}"));
            }
        };
        if let Err(err) = out.write_all(&buffer[..read]) {
            progress.finish_abandon();
            return Err(err).with_context(|| {
                format!("failed to write archive file: {}", destination.display())
            });
        }
        copied += read as u64;
        progress.set(copied);
    }
    progress.finish_success();
    Ok(())
}

pub(crate) fn install_distribution(
    layout: &DistLayout,
    version_label: &str,
    mirror: Mirror,
    style: OutputStyle,
) -> Result<InstallOutcome> {
    let url = mirror.archive_url(version_label);
    download_archive(&url, &layout.archive_path(version_label), style)?;
    install_from_archive(layout, version_label)?;
    Ok(InstallOutcome {
        version: version_label.to_string(),
        package_dir: layout.package_dir(),
        root: layout.root().to_path_buf(),
    })
}

pub(crate) fn print_install_outcome(outcome: &InstallOutcome, style: OutputStyle) {
    let renderer = TerminalRenderer::from_style(style);
    renderer.print_section(&format!("Installed npm {}", outcome.version));
    renderer.print_lines(&format_install_outcome_lines(outcome, style));
}

pub(crate) fn format_install_outcome_lines(
    outcome: &InstallOutcome,
    style: OutputStyle,
) -> Vec<String> {
    vec![
        render_status_line(
            style,
            "ok",
            &format!("installed npm {}", outcome.version),
        ),
        format!("package: {}", outcome.package_dir.display()),
        format!("launchers: npm, npm.cmd -> {}", outcome.root.display()),
    ]
}
