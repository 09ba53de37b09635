//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::{DomainError, DomainResult, Hierarchy, StaffId, TreeNodeConvert};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree) => cmd_tree(cli, container),
        Some(Commands::List { from }) => cmd_list(cli, container, *from),
        Some(Commands::Reports { id }) => cmd_reports(cli, container, *id),
        Some(Commands::Reassign {
            employee,
            manager,
            write,
        }) => cmd_reassign(cli, container, *employee, *manager, *write),
        Some(Commands::Release {
            employee,
            manager,
            write,
        }) => cmd_release(cli, container, *employee, *manager, *write),
        Some(Commands::Count { file }) => cmd_count(container, file.as_deref()),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// `--roster` wins over the configured default.
fn roster_path(cli: &Cli, container: &ServiceContainer) -> CliResult<PathBuf> {
    cli.roster
        .clone()
        .or_else(|| container.settings.roster.clone())
        .ok_or_else(|| {
            CliError::Usage("no roster given: pass --roster or set `roster` in orgchart.toml".into())
        })
}

fn load(cli: &Cli, container: &ServiceContainer) -> CliResult<(PathBuf, Hierarchy)> {
    let path = roster_path(cli, container)?;
    let hierarchy = container.rosters.load(&path)?;
    Ok((path, hierarchy))
}

fn resolve(hierarchy: &Hierarchy, id: i32) -> CliResult<StaffId> {
    hierarchy
        .find_by_id(id)
        .ok_or_else(|| CliError::InvalidArgs(format!("no staff member with id {}", id)))
}

#[instrument(skip(cli, container))]
fn cmd_tree(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let (_, hierarchy) = load(cli, container)?;
    output::info(&hierarchy.to_tree_string());
    Ok(())
}

#[instrument(skip(cli, container))]
fn cmd_list(cli: &Cli, container: &ServiceContainer, from: Option<i32>) -> CliResult<()> {
    let (_, hierarchy) = load(cli, container)?;
    let starts = match from {
        Some(id) => vec![resolve(&hierarchy, id)?],
        None => hierarchy.roots(),
    };

    for start in starts {
        let listing = match hierarchy.all_subordinates(start) {
            Ok(listing) => listing,
            // a root without reports is listed on its own
            Err(DomainError::NotAManager(_)) if from.is_none() => vec![start],
            Err(e) => return Err(e.into()),
        };
        for staff in listing {
            let node = hierarchy.node(staff)?;
            let profile = node.profile();
            output::info(&format!(
                "{}\t{}\t{}\t{}",
                profile.id(),
                profile.name(),
                profile.job_title(),
                profile.email()
            ));
        }
    }
    Ok(())
}

#[instrument(skip(cli, container))]
fn cmd_reports(cli: &Cli, container: &ServiceContainer, id: i32) -> CliResult<()> {
    let (_, hierarchy) = load(cli, container)?;
    let manager = resolve(&hierarchy, id)?;
    let reports = hierarchy.reports(manager)?;

    output::header(&hierarchy.view(manager)?);
    if reports.is_empty() {
        output::detail(&"(no direct reports)");
    }
    for &report in reports {
        output::detail(&hierarchy.view(report)?);
    }
    Ok(())
}

#[instrument(skip(cli, container))]
fn cmd_reassign(
    cli: &Cli,
    container: &ServiceContainer,
    employee: i32,
    manager: i32,
    write: bool,
) -> CliResult<()> {
    let (path, mut hierarchy) = load(cli, container)?;
    let employee_id = resolve(&hierarchy, employee)?;
    let manager_id = resolve(&hierarchy, manager)?;

    hierarchy.add_employee(manager_id, employee_id)?;
    output::action(
        "Reassigned",
        &format!(
            "{} -> {}",
            hierarchy.view(employee_id)?,
            hierarchy.view(manager_id)?
        ),
    );
    finish(container, &path, &hierarchy, write)
}

#[instrument(skip(cli, container))]
fn cmd_release(
    cli: &Cli,
    container: &ServiceContainer,
    employee: i32,
    manager: i32,
    write: bool,
) -> CliResult<()> {
    let (path, mut hierarchy) = load(cli, container)?;
    let employee_id = resolve(&hierarchy, employee)?;
    let manager_id = resolve(&hierarchy, manager)?;

    hierarchy.remove_employee(manager_id, employee_id)?;
    output::action(
        "Released",
        &format!("{} from {}", hierarchy.view(employee_id)?, hierarchy.view(manager_id)?),
    );
    let remaining = report_names(&hierarchy, manager_id)?;
    debug!("{} reports left under {}", remaining.len(), manager_id);
    if remaining.is_empty() {
        output::detail(&"remaining reports: (none)");
    } else {
        output::detail(&format!("remaining reports: {}", remaining.iter().join(", ")));
    }
    finish(container, &path, &hierarchy, write)
}

/// Names of the direct reports of `manager`, in report order.
fn report_names(hierarchy: &Hierarchy, manager: StaffId) -> CliResult<Vec<String>> {
    let names = hierarchy
        .reports(manager)?
        .iter()
        .map(|&r| hierarchy.node(r).map(|node| node.profile().name().to_string()))
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(names)
}

fn finish(
    container: &ServiceContainer,
    path: &Path,
    hierarchy: &Hierarchy,
    write: bool,
) -> CliResult<()> {
    output::info(&hierarchy.to_tree_string());
    if write {
        container.rosters.save(path, hierarchy)?;
        output::success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_count(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = file.unwrap_or(&container.settings.count_input);
    let count = container.counter.count(path)?;
    output::info(&count);
    Ok(())
}
