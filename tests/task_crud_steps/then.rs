//! Then steps for task tracking BDD scenarios.

use super::world::{TaskCrudWorld, priority, run_async, status};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use task_tracker::task::services::TaskManagerError;

#[then(r#"the task status is "{state}""#)]
fn task_status_is(world: &TaskCrudWorld, state: String) -> Result<(), eyre::Report> {
    let expected = status(&state)?;
    let actual = world.task()?.status();
    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the task is active")]
fn task_is_active(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    if !world.task()?.is_active() {
        return Err(eyre::eyre!("expected task to be active"));
    }
    Ok(())
}

#[then(r#"the task priority is "{level}""#)]
fn task_priority_is(world: &TaskCrudWorld, level: String) -> Result<(), eyre::Report> {
    let expected = priority(&level)?;
    let actual = world.task()?.priority();
    if actual != expected {
        return Err(eyre::eyre!("expected priority {expected}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the task name is "{name}""#)]
fn task_name_is(world: &TaskCrudWorld, name: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.name().as_str();
    if actual != name {
        return Err(eyre::eyre!("expected name {name}, found {actual}"));
    }
    Ok(())
}

#[then("the page holds {count:usize} tasks")]
fn page_holds(world: &TaskCrudWorld, count: usize) -> Result<(), eyre::Report> {
    let (_, page) = world
        .last_page
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;
    if page.tasks.len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks on the page, found {}",
            page.tasks.len()
        ));
    }
    Ok(())
}

#[then("the listing reports {total:u64} matching tasks across {pages:u64} pages")]
fn listing_reports(world: &TaskCrudWorld, total: u64, pages: u64) -> Result<(), eyre::Report> {
    let (window, page) = world
        .last_page
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;
    if page.total != total {
        return Err(eyre::eyre!("expected total {total}, found {}", page.total));
    }
    let actual_pages = window.total_pages(page.total);
    if actual_pages != pages {
        return Err(eyre::eyre!("expected {pages} pages, found {actual_pages}"));
    }
    Ok(())
}

#[then("the operation fails because the task was not found")]
fn operation_not_found(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    match world.last_failure.as_ref() {
        Some(TaskManagerError::NotFound(_)) => Ok(()),
        Some(other) => Err(eyre::eyre!("expected not-found failure, found {other}")),
        None => Err(eyre::eyre!("expected the operation to fail")),
    }
}

#[then("the task can no longer be found")]
fn task_is_gone(world: &TaskCrudWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let found = run_async(world.manager.find_one(id)).wrap_err("look up removed task")?;
    if found.is_some() {
        return Err(eyre::eyre!("task {id} is still stored"));
    }
    Ok(())
}
